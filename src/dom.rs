//! UI-tree access capability
//!
//! The page tree is an external collaborator. The core never touches a real
//! document; it speaks this trait, so the whole flow runs unchanged against
//! the in-memory [`crate::models::Page`] or any host-provided binding.

pub type NodeId = usize;

pub trait Dom {
    /// Nodes carrying a per-language content attribute (`data-cn` etc.).
    fn translatable_nodes(&self) -> Vec<NodeId>;

    /// Nodes carrying a per-language placeholder attribute.
    fn placeholder_nodes(&self) -> Vec<NodeId>;

    fn attr(&self, node: NodeId, name: &str) -> Option<String>;
    fn set_attr(&mut self, node: NodeId, name: &str, value: &str);

    /// Rendered content of a node (innerHTML equivalent; markup allowed).
    fn content(&self, node: NodeId) -> Option<String>;
    fn set_content(&mut self, node: NodeId, content: &str);

    fn set_placeholder(&mut self, node: NodeId, text: &str);

    /// The page-title node, when the page declares one.
    fn title_node(&self) -> Option<NodeId>;

    /// Social-preview meta nodes (title, description).
    fn meta_title_node(&self) -> Option<NodeId>;
    fn meta_description_node(&self) -> Option<NodeId>;

    /// Document root language metadata (`<html lang>` equivalent).
    fn document_lang(&self) -> String;
    fn set_document_lang(&mut self, value: &str);

    /// Every language-selector control present on the page. Pages without
    /// selectors return an empty list; absence is not an error.
    fn selector_nodes(&self) -> Vec<NodeId>;
    fn selector_value(&self, node: NodeId) -> Option<String>;
    fn set_selector_value(&mut self, node: NodeId, value: &str);

    fn anchor_nodes(&self) -> Vec<NodeId>;
    fn href(&self, node: NodeId) -> Option<String>;
    fn set_href(&mut self, node: NodeId, href: &str);

    /// The page's own address.
    fn url(&self) -> String;
    /// Rewrite the page address in place (no reload semantics).
    fn set_url(&mut self, url: &str);
}
