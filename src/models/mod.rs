pub mod app_state;
pub mod confirmation;
pub mod instance_record;
pub mod instance_form;
pub mod memo_record;
pub mod memo_page;

pub use app_state::AppState;
pub use confirmation::ConfirmationAction;
pub use instance_record::InstanceRecord;
pub use instance_form::{ConflictAction, InstanceForm};
pub use memo_record::MemoRecord;
pub use memo_page::MemoPage;
