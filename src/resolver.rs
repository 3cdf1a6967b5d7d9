//! Language resolution - URL parameter, then stored preference, then locale

use tracing::{debug, warn};

use crate::keys::LANG_PARAM;
use crate::language::Language;
use crate::storage::PreferenceStore;
use crate::url::Url;

/// Resolve the active language. First match wins:
///
/// 1. valid `lang` URL parameter - also persisted immediately so other
///    same-origin pages adopt it without carrying the parameter;
/// 2. valid stored preference;
/// 3. browser locale mapping (zh → cn, ja → jp, everything else → en).
///
/// Invalid values fall through silently. Storage trouble is logged and
/// treated as "no stored value".
pub fn resolve(
    page_url: Option<&Url>,
    store: &mut dyn PreferenceStore,
    browser_locale: &str,
) -> Language {
    if let Some(url) = page_url {
        if let Some(lang) = url.query(LANG_PARAM).and_then(Language::from_code) {
            if let Err(e) = store.save(lang.code()) {
                warn!("failed to persist language preference: {e}");
            }
            debug!(lang = lang.code(), source = "url", "language resolved");
            return lang;
        }
    }

    match store.load() {
        Ok(Some(code)) => {
            if let Some(lang) = Language::from_code(&code) {
                debug!(lang = lang.code(), source = "storage", "language resolved");
                return lang;
            }
        }
        Ok(None) => {}
        Err(e) => warn!("preference store unavailable: {e}"),
    }

    let lang = Language::from_locale(browser_locale);
    debug!(lang = lang.code(), source = "locale", "language resolved");
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn url(input: &str) -> Url {
        Url::parse(input).unwrap()
    }

    #[test]
    fn test_url_param_wins_and_is_persisted() {
        let page = url("https://example.com/?lang=jp");
        let mut store = MemoryStore::with_value("en");

        let lang = resolve(Some(&page), &mut store, "fr-FR");
        assert_eq!(lang, Language::Jp);
        assert_eq!(store.value(), Some("jp"));
    }

    #[test]
    fn test_invalid_url_param_falls_through() {
        let page = url("https://example.com/?lang=klingon");
        let mut store = MemoryStore::with_value("en");

        let lang = resolve(Some(&page), &mut store, "ja-JP");
        assert_eq!(lang, Language::En);
        // the bogus value is never persisted
        assert_eq!(store.value(), Some("en"));
    }

    #[test]
    fn test_storage_wins_over_locale() {
        let page = url("https://example.com/");
        let mut store = MemoryStore::with_value("en");

        assert_eq!(resolve(Some(&page), &mut store, "fr-FR"), Language::En);
    }

    #[test]
    fn test_invalid_stored_value_falls_through() {
        let mut store = MemoryStore::with_value("xx");
        assert_eq!(resolve(None, &mut store, "ja"), Language::Jp);
    }

    #[test]
    fn test_locale_detection() {
        let mut store = MemoryStore::new();
        assert_eq!(resolve(None, &mut store, "zh-TW"), Language::Cn);
        assert_eq!(resolve(None, &mut store, "ja-JP"), Language::Jp);
        assert_eq!(resolve(None, &mut store, "fr-FR"), Language::En);
    }

    #[test]
    fn test_failing_store_never_aborts() {
        let page = url("https://example.com/?lang=cn");
        let mut store = MemoryStore::failing();

        // persist step fails silently, the URL value still wins
        assert_eq!(resolve(Some(&page), &mut store, "fr-FR"), Language::Cn);
        // read failure degrades to locale detection
        assert_eq!(resolve(None, &mut store, "zh-CN"), Language::Cn);
    }
}
