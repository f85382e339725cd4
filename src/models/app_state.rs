/// Shared state for CLI commands and web handlers
#[derive(Clone)]
pub struct AppState {
    pub api_base_url: String,
    pub public_base_url: String,
    pub client: reqwest::Client,
    pub memo_page_size: usize,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(client: reqwest::Client, api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            public_base_url: String::new(),
            client,
            memo_page_size: crate::config::DEFAULT_MEMO_PAGE_SIZE,
            custom_css: None,
        }
    }
}
