pub mod helpers;
pub mod instances;
pub mod memos;
pub mod system;
