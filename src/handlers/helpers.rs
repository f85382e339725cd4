use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::models::AppState;

const FLASH_COOKIE: &str = "opsdesk_flash";

/// One-shot notice shown above the table after a redirect
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    /// `ok` or `error`; used as a CSS class suffix
    pub kind: &'static str,
    pub text: String,
}

impl FlashMessage {
    pub fn ok(text: impl Into<String>) -> Self {
        Self { kind: "ok", text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: "error", text: text.into() }
    }

    fn encode(&self) -> String {
        urlencoding::encode(&format!("{}:{}", self.kind, self.text)).into_owned()
    }

    fn decode(raw: &str) -> Option<Self> {
        let decoded = urlencoding::decode(raw).ok()?;
        let (kind, text) = decoded.split_once(':')?;
        let kind = match kind {
            "ok" => "ok",
            "error" => "error",
            _ => return None,
        };
        Some(Self { kind, text: text.to_string() })
    }
}

/// Queue a notice for the next page render.
pub fn push_flash(jar: CookieJar, message: FlashMessage) -> CookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, message.encode()))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::minutes(5))
        .build();
    jar.add(cookie)
}

/// Consume any pending notice. The returned jar must be sent back so the cookie is cleared.
pub fn take_flash_messages(jar: CookieJar) -> (CookieJar, Vec<FlashMessage>) {
    let Some(raw) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, vec![]);
    };
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());
    (jar, FlashMessage::decode(&raw).into_iter().collect())
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<FlashMessage>,
    pub has_flash_messages: bool,
}

pub fn build_template_globals(state: &AppState, jar: CookieJar) -> (CookieJar, TemplateGlobals) {
    let (jar, flash_messages) = take_flash_messages(jar);
    let has_flash_messages = !flash_messages.is_empty();
    let globals = TemplateGlobals {
        api_hostname: crate::utils::hostname_from_url(&state.api_base_url),
        base_url: state.public_base_url.clone(),
        flash_messages,
        has_flash_messages,
    };
    (jar, globals)
}

pub fn absolute_url_from_state(state: &AppState, path: &str) -> String {
    crate::utils::absolute_url(&state.public_base_url, path)
}

/// Redirect after a POST, carrying a notice.
pub fn redirect_with_flash(state: &AppState, jar: CookieJar, path: &str, message: FlashMessage) -> Response {
    let jar = push_flash(jar, message);
    (jar, Redirect::to(&absolute_url_from_state(state, path))).into_response()
}

pub fn plain_html<S: AsRef<str>>(status: StatusCode, s: S) -> Response {
    (status, Html(format!("<!DOCTYPE html><html><body><p>{}</p></body></html>", escape_html(s.as_ref())))).into_response()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

pub fn render_template<T: askama::Template>(jar: CookieJar, t: T) -> Response {
    match t.render() {
        Ok(body) => (jar, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// `/memos?page=2&page_size=5`
pub fn memos_path(page: usize, page_size: usize) -> String {
    let pairs = vec![
        ("page".to_string(), page.to_string()),
        ("page_size".to_string(), page_size.to_string()),
    ];
    format!("/memos?{}", crate::utils::build_query_string(&pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_round_trip_through_cookie() {
        let jar = push_flash(CookieJar::new(), FlashMessage::error("Host is required."));
        let (_, messages) = take_flash_messages(jar);
        assert_eq!(messages, vec![FlashMessage::error("Host is required.")]);
    }

    #[test]
    fn test_flash_text_may_contain_separator() {
        let msg = FlashMessage::ok("Backend returned 404: Instance: not found");
        assert_eq!(FlashMessage::decode(&msg.encode()), Some(msg));
    }

    #[test]
    fn test_flash_rejects_unknown_kind() {
        assert_eq!(FlashMessage::decode("warn%3Ahello"), None);
        assert_eq!(FlashMessage::decode("garbage"), None);
    }

    #[test]
    fn test_take_flash_without_cookie() {
        let (_, messages) = take_flash_messages(CookieJar::new());
        assert!(messages.is_empty());
    }

    #[test]
    fn test_memos_path() {
        assert_eq!(memos_path(3, 5), "/memos?page=3&page_size=5");
    }

    #[test]
    fn test_plain_html_escapes() {
        assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }
}
