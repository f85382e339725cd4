use crate::models::MemoRecord;

/// One page of memos as fetched from the backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoPage {
    pub memos: Vec<MemoRecord>,
    /// The page that was requested
    pub current_page: usize,
    /// Server-supplied; trusted as is
    pub total_pages: usize,
    pub page_size: usize,
}
