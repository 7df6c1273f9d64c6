//! Session cookies shared with the API (`ACCESS_TOKEN`, `USER_ROLE`).

use chrono::{DateTime, Duration, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::api::Role;

pub const ACCESS_TOKEN: &str = "ACCESS_TOKEN";
pub const USER_ROLE: &str = "USER_ROLE";

const SESSION_LIFETIME_DAYS: i64 = 1;

const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'\\')
    .add(b'%');

pub fn format_cookie(name: &str, value: &str, now: DateTime<Utc>) -> String {
    let expires = now + Duration::days(SESSION_LIFETIME_DAYS);
    format!(
        "{}={}; expires={}; path=/; SameSite=Lax",
        name,
        utf8_percent_encode(value, COOKIE_VALUE),
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

pub fn format_expired_cookie(name: &str) -> String {
    format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/", name)
}

/// Reads one cookie out of a `document.cookie` style string.
pub fn parse_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

pub fn access_token() -> Option<String> {
    parse_cookie(&jar::read(), ACCESS_TOKEN)
}

pub fn user_role() -> Option<Role> {
    parse_cookie(&jar::read(), USER_ROLE).map(|raw| Role::parse(&raw))
}

pub fn store_session(token: &str, role: Role) {
    let now = Utc::now();
    jar::write(&format_cookie(ACCESS_TOKEN, token, now));
    jar::write(&format_cookie(USER_ROLE, role.as_str(), now));
}

pub fn clear_session() {
    jar::write(&format_expired_cookie(ACCESS_TOKEN));
    jar::write(&format_expired_cookie(USER_ROLE));
}

#[cfg(target_arch = "wasm32")]
mod jar {
    use wasm_bindgen::JsCast;

    fn document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    pub fn read() -> String {
        document()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    pub fn write(cookie: &str) {
        if let Some(doc) = document() {
            if doc.set_cookie(cookie).is_err() {
                log::warn!("failed to write session cookie");
            }
        }
    }
}

/// Host builds keep cookies in memory so session logic stays testable.
#[cfg(not(target_arch = "wasm32"))]
mod jar {
    use super::parse_cookie;
    use std::cell::RefCell;

    thread_local! {
        static COOKIES: RefCell<Vec<(String, String)>> = RefCell::new(Vec::new());
    }

    pub fn read() -> String {
        COOKIES.with(|cookies| {
            cookies
                .borrow()
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ")
        })
    }

    pub fn write(cookie: &str) {
        let Some((pair, attributes)) = cookie.split_once(';') else {
            return;
        };
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };
        let expired = attributes.contains("1970");
        COOKIES.with(|cookies| {
            let mut cookies = cookies.borrow_mut();
            cookies.retain(|(existing, _)| existing != name);
            if !expired && parse_cookie(pair, name).is_some() {
                cookies.push((name.to_string(), value.to_string()));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_cookie_sets_one_day_expiry_and_root_path() {
        let now = Utc.with_ymd_and_hms(2025, 3, 4, 8, 30, 0).unwrap();
        let cookie = format_cookie(ACCESS_TOKEN, "abc|123", now);
        assert!(cookie.starts_with("ACCESS_TOKEN=abc|123;"));
        assert!(cookie.contains("expires=Wed, 05 Mar 2025 08:30:00 GMT"));
        assert!(cookie.contains("path=/"));
    }

    #[test]
    fn format_cookie_escapes_separators() {
        let now = Utc.with_ymd_and_hms(2025, 3, 4, 8, 30, 0).unwrap();
        let cookie = format_cookie(USER_ROLE, "a; b", now);
        assert!(cookie.starts_with("USER_ROLE=a%3B%20b;"));
        assert_eq!(parse_cookie("USER_ROLE=a%3B%20b", USER_ROLE).as_deref(), Some("a; b"));
    }

    #[test]
    fn parse_cookie_finds_named_value() {
        let raw = "theme=dark; ACCESS_TOKEN=tok-1; USER_ROLE=admin";
        assert_eq!(parse_cookie(raw, ACCESS_TOKEN).as_deref(), Some("tok-1"));
        assert_eq!(parse_cookie(raw, USER_ROLE).as_deref(), Some("admin"));
        assert_eq!(parse_cookie(raw, "missing"), None);
        assert_eq!(parse_cookie("ACCESS_TOKEN=", ACCESS_TOKEN), None);
    }

    #[test]
    fn store_and_clear_session_round_trip() {
        store_session("tok-9", Role::Evaluator);
        assert_eq!(access_token().as_deref(), Some("tok-9"));
        assert_eq!(user_role(), Some(Role::Evaluator));

        clear_session();
        assert_eq!(access_token(), None);
        assert_eq!(user_role(), None);
    }
}
