//! In-memory page tree implementing the [`Dom`] capability
//!
//! Serves both as the test double for the core flow and as a server-side
//! rendition of the markup contract: well-known ids for the title, the two
//! social-preview metas, and the selector controls.

use crate::dom::{Dom, NodeId};
use crate::language;
use crate::models::Element;

pub const TITLE_ID: &str = "page-title";
pub const META_TITLE_ID: &str = "og-title";
pub const META_DESC_ID: &str = "og-desc";

/// Selector control ids, in selector order: desktop nav, mobile nav, footer.
/// Any subset may be present on a given page.
pub const SELECTOR_IDS: [&str; 3] = [
    "language-selector",
    "mobile-language-selector",
    "footer-language-selector",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    url: String,
    document_lang: String,
    elements: Vec<Element>,
}

impl Page {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            document_lang: "en".to_string(),
            elements: Vec::new(),
        }
    }

    /// Add an element, returning its node id.
    pub fn push(&mut self, element: Element) -> NodeId {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node)
    }

    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.elements.iter().position(|el| el.id.as_deref() == Some(id))
    }

    fn nodes_with_any_attr(&self, names: &[&str]) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| names.iter().any(|name| el.has_attr(name)))
            .map(|(idx, _)| idx)
            .collect()
    }
}

impl Dom for Page {
    fn translatable_nodes(&self) -> Vec<NodeId> {
        let attrs: Vec<&str> = language::ALL.iter().map(|l| l.content_attr()).collect();
        self.nodes_with_any_attr(&attrs)
    }

    fn placeholder_nodes(&self) -> Vec<NodeId> {
        let attrs: Vec<&str> = language::ALL.iter().map(|l| l.placeholder_attr()).collect();
        self.nodes_with_any_attr(&attrs)
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.elements.get(node)?.attr(name).map(String::from)
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(node) {
            el.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn content(&self, node: NodeId) -> Option<String> {
        self.elements.get(node).map(|el| el.content.clone())
    }

    fn set_content(&mut self, node: NodeId, content: &str) {
        if let Some(el) = self.elements.get_mut(node) {
            el.content = content.to_string();
        }
    }

    fn set_placeholder(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.elements.get_mut(node) {
            el.placeholder = Some(text.to_string());
        }
    }

    fn title_node(&self) -> Option<NodeId> {
        self.by_id(TITLE_ID)
    }

    fn meta_title_node(&self) -> Option<NodeId> {
        self.by_id(META_TITLE_ID)
    }

    fn meta_description_node(&self) -> Option<NodeId> {
        self.by_id(META_DESC_ID)
    }

    fn document_lang(&self) -> String {
        self.document_lang.clone()
    }

    fn set_document_lang(&mut self, value: &str) {
        self.document_lang = value.to_string();
    }

    fn selector_nodes(&self) -> Vec<NodeId> {
        SELECTOR_IDS.iter().filter_map(|id| self.by_id(id)).collect()
    }

    fn selector_value(&self, node: NodeId) -> Option<String> {
        self.elements.get(node)?.value.clone()
    }

    fn set_selector_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.elements.get_mut(node) {
            el.value = Some(value.to_string());
        }
    }

    fn anchor_nodes(&self) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.tag == "a" && el.has_attr("href"))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn href(&self, node: NodeId) -> Option<String> {
        self.attr(node, "href")
    }

    fn set_href(&mut self, node: NodeId, href: &str) {
        self.set_attr(node, "href", href);
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }
}
