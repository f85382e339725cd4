// URL handling utilities
pub mod url_parser;
pub mod url_builder;
pub mod query_string;

// Parsing utilities
pub mod parse_answer;

// JSON utilities
pub mod json_converter;

// Re-export all utilities for convenient access
pub use url_parser::hostname_from_url;
pub use url_builder::absolute_url;
pub use query_string::build_query_string;
pub use parse_answer::parse_confirmation;
pub use json_converter::{value_to_short_string, deserialize_text, deserialize_optional_text};
