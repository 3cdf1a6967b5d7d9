//! UI synchronizer - swaps per-language attribute values into the page
//!
//! Nodes that do not declare a value for the active language keep their
//! current content: no fallback substitution, no blanking.

use tracing::debug;

use crate::dom::Dom;
use crate::language::Language;

/// Apply a language to every translatable surface: content nodes,
/// placeholders, the page title, the two social-preview metas, and the
/// document root language metadata. Idempotent.
pub fn apply(dom: &mut dyn Dom, lang: Language) {
    let attr = lang.content_attr();

    for node in dom.translatable_nodes() {
        if let Some(text) = dom.attr(node, attr) {
            // skip the write when the content already matches
            if dom.content(node).as_deref() != Some(text.as_str()) {
                dom.set_content(node, &text);
            }
        }
    }

    for node in dom.placeholder_nodes() {
        if let Some(text) = dom.attr(node, lang.placeholder_attr()) {
            dom.set_placeholder(node, &text);
        }
    }

    if let Some(node) = dom.title_node() {
        if let Some(text) = dom.attr(node, attr) {
            dom.set_content(node, &text);
        }
    }

    for node in [dom.meta_title_node(), dom.meta_description_node()]
        .into_iter()
        .flatten()
    {
        if let Some(text) = dom.attr(node, attr) {
            dom.set_attr(node, "content", &text);
        }
    }

    dom.set_document_lang(lang.html_lang());
    debug!(lang = lang.code(), "ui synchronized");
}
