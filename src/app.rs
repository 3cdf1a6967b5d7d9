//! Orchestrator - the single source of truth for the active language
//!
//! Every selector control observes this state cell; every mutation path
//! (page init, selector change) goes through it and fans out to the whole
//! page, so redundant controls can never disagree.

use tracing::{debug, warn};

use crate::dom::Dom;
use crate::language::Language;
use crate::links;
use crate::resolver;
use crate::storage::PreferenceStore;
use crate::sync;
use crate::url::Url;

pub struct LanguageSync {
    language: Language,
}

impl LanguageSync {
    /// Page-load initialization: resolve the language, apply it to the UI,
    /// align every present selector control, and propagate it into links
    /// and the page address.
    pub fn init(
        dom: &mut dyn Dom,
        store: &mut dyn PreferenceStore,
        browser_locale: &str,
    ) -> Self {
        let page_url = match Url::parse(&dom.url()) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("unparseable page URL, ignoring its lang parameter: {e}");
                None
            }
        };
        let language = resolver::resolve(page_url.as_ref(), store, browser_locale);
        let cell = Self { language };
        cell.refresh(dom);
        cell
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Selector change event. A value outside the supported set is rejected
    /// with no side effects; a valid value becomes a fresh explicit choice:
    /// persisted, applied, pushed to every other control, propagated.
    pub fn select(
        &mut self,
        dom: &mut dyn Dom,
        store: &mut dyn PreferenceStore,
        value: &str,
    ) -> bool {
        let Some(lang) = Language::from_code(value) else {
            debug!(value, "rejected unsupported language selection");
            return false;
        };
        self.language = lang;
        if let Err(e) = store.save(lang.code()) {
            warn!("failed to persist language preference: {e}");
        }
        self.refresh(dom);
        true
    }

    /// Push the current language onto every UI surface.
    fn refresh(&self, dom: &mut dyn Dom) {
        sync::apply(dom, self.language);
        for node in dom.selector_nodes() {
            dom.set_selector_value(node, self.language.code());
        }
        if let Err(e) = links::propagate(dom, self.language) {
            warn!("link propagation skipped: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Element, Page};
    use crate::storage::MemoryStore;

    /// A page with two selector controls, a translatable heading, and one
    /// internal plus one external link.
    fn sample_page(url: &str) -> Page {
        let mut page = Page::new(url);
        page.push(
            Element::new("select")
                .with_id("language-selector")
                .with_value("cn"),
        );
        page.push(
            Element::new("select")
                .with_id("footer-language-selector")
                .with_value("cn"),
        );
        page.push(
            Element::new("h1")
                .with_attr("data-cn", "欢迎")
                .with_attr("data-en", "Welcome")
                .with_attr("data-jp", "ようこそ")
                .with_content("欢迎"),
        );
        page.push(Element::new("a").with_attr("href", "/about?foo=1"));
        page.push(Element::new("a").with_attr("href", "https://other.com/x"));
        page
    }

    fn selector_values(page: &Page) -> Vec<String> {
        page.selector_nodes()
            .into_iter()
            .filter_map(|node| page.selector_value(node))
            .collect()
    }

    #[test]
    fn test_init_full_flow() {
        let mut page = sample_page("https://example.com/?lang=jp");
        let mut store = MemoryStore::with_value("en");

        let cell = LanguageSync::init(&mut page, &mut store, "fr-FR");

        assert_eq!(cell.language(), Language::Jp);
        assert_eq!(store.value(), Some("jp"));
        assert_eq!(selector_values(&page), vec!["jp", "jp"]);
        assert_eq!(page.element(2).unwrap().content, "ようこそ");
        assert_eq!(
            page.element(3).unwrap().attr("href"),
            Some("https://example.com/about?foo=1&lang=jp")
        );
        assert_eq!(page.element(4).unwrap().attr("href"), Some("https://other.com/x"));
        assert_eq!(page.url(), "https://example.com/?lang=jp");
    }

    #[test]
    fn test_init_without_param_uses_store_then_locale() {
        let mut page = sample_page("https://example.com/");
        let mut store = MemoryStore::with_value("en");
        let cell = LanguageSync::init(&mut page, &mut store, "zh-CN");
        assert_eq!(cell.language(), Language::En);

        let mut page = sample_page("https://example.com/");
        let mut store = MemoryStore::new();
        let cell = LanguageSync::init(&mut page, &mut store, "zh-TW");
        assert_eq!(cell.language(), Language::Cn);
        assert_eq!(page.url(), "https://example.com/?lang=cn");
    }

    #[test]
    fn test_select_updates_every_control() {
        let mut page = sample_page("https://example.com/");
        let mut store = MemoryStore::new();
        let mut cell = LanguageSync::init(&mut page, &mut store, "en-US");

        assert!(cell.select(&mut page, &mut store, "jp"));
        assert_eq!(cell.language(), Language::Jp);
        assert_eq!(store.value(), Some("jp"));
        assert_eq!(selector_values(&page), vec!["jp", "jp"]);
        assert_eq!(page.element(2).unwrap().content, "ようこそ");
        assert_eq!(page.url(), "https://example.com/?lang=jp");
    }

    #[test]
    fn test_select_rejects_unsupported_value() {
        let mut page = sample_page("https://example.com/");
        let mut store = MemoryStore::with_value("en");
        let mut cell = LanguageSync::init(&mut page, &mut store, "en-US");

        let before = page.clone();
        assert!(!cell.select(&mut page, &mut store, "de"));
        assert_eq!(cell.language(), Language::En);
        assert_eq!(store.value(), Some("en"));
        assert_eq!(page, before);
    }

    #[test]
    fn test_storage_failure_degrades_gracefully() {
        let mut page = sample_page("https://example.com/?lang=jp");
        let mut store = MemoryStore::failing();

        let mut cell = LanguageSync::init(&mut page, &mut store, "fr-FR");
        assert_eq!(cell.language(), Language::Jp);
        assert_eq!(selector_values(&page), vec!["jp", "jp"]);

        // an explicit selection still applies even though persisting fails
        assert!(cell.select(&mut page, &mut store, "en"));
        assert_eq!(page.element(2).unwrap().content, "Welcome");
        assert_eq!(selector_values(&page), vec!["en", "en"]);
    }

    #[test]
    fn test_unparseable_page_url_still_localizes() {
        let mut page = sample_page("not a url");
        let mut store = MemoryStore::with_value("jp");

        let cell = LanguageSync::init(&mut page, &mut store, "en-US");
        assert_eq!(cell.language(), Language::Jp);
        assert_eq!(page.element(2).unwrap().content, "ようこそ");
        // link propagation is skipped, nothing rewritten
        assert_eq!(page.element(3).unwrap().attr("href"), Some("/about?foo=1"));
        assert_eq!(page.url(), "not a url");
    }

    #[test]
    fn test_page_without_selectors_is_fine() {
        let mut page = Page::new("https://example.com/");
        page.push(
            Element::new("h1")
                .with_attr("data-en", "Welcome")
                .with_content("欢迎"),
        );
        let mut store = MemoryStore::new();

        let cell = LanguageSync::init(&mut page, &mut store, "en-US");
        assert_eq!(cell.language(), Language::En);
        assert_eq!(page.element(0).unwrap().content, "Welcome");
    }
}
