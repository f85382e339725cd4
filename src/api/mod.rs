// Backend API modules
pub mod client;
pub mod instances;
pub mod memos;

// Re-export commonly used functions
pub use client::{api_call, set_silent};
pub use instances::{load_instances, add_instance, delete_instance, parse_instance_list};
pub use memos::{load_memos, get_memo, create_memo, delete_memo, parse_memo_page};
