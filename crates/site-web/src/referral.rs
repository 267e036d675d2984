//! Referral Attribution
//!
//! Affiliate links set a `ref` cookie; the checkout helper forwards its
//! value so the tag ends up in the session metadata.

use wasm_bindgen::JsCast;

/// Read the referral tag from the `ref` cookie, if any
pub fn ref_cookie() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    parse_ref_cookie(&cookies)
}

/// Scan a `document.cookie` string for the `ref` entry
fn parse_ref_cookie(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix("ref="))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_ref_among_other_cookies() {
        let cookies = "session=abc123; ref=partner-7; theme=dark";
        assert_eq!(parse_ref_cookie(cookies).as_deref(), Some("partner-7"));
    }

    #[test]
    fn absent_or_empty_ref_yields_none() {
        assert_eq!(parse_ref_cookie("session=abc123"), None);
        assert_eq!(parse_ref_cookie("ref=; theme=dark"), None);
        assert_eq!(parse_ref_cookie(""), None);
    }

    #[test]
    fn does_not_match_suffixed_names() {
        assert_eq!(parse_ref_cookie("preferred=yes"), None);
    }
}
