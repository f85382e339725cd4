use askama::Template;
use crate::handlers::helpers::FlashMessage;
use crate::render::TableView;

/// A rendered pagination button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    pub href: String,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "memos.html")]
pub struct MemosPageTemplate<'a> {
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<FlashMessage>,
    pub has_flash_messages: bool,
    pub table: &'a TableView,
    pub page_links: Vec<PageLink>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub load_failed: bool,
}

crate::impl_base_template!(MemosPageTemplate<'_>);
