//! Link propagation - carries the active language through navigation
//!
//! Rewrites every same-site anchor to carry `lang=<code>` and keeps the
//! page's own address in step, so reloads and copied links stay consistent
//! with the displayed content.

use anyhow::Result;
use tracing::{debug, warn};

use crate::dom::Dom;
use crate::keys::LANG_PARAM;
use crate::language::Language;
use crate::url::Url;

/// Rewrite eligible anchors and the current page URL with the language
/// parameter. Fragment-only, `javascript:`, `mailto:`/`tel:` and
/// external-site hrefs are left untouched; a malformed href is skipped on
/// its own without stopping the pass. Errors out only when the page's own
/// URL cannot be parsed.
pub fn propagate(dom: &mut dyn Dom, lang: Language) -> Result<()> {
    let page = Url::parse(&dom.url())?;

    let mut rewritten = 0usize;
    for node in dom.anchor_nodes() {
        let href = match dom.href(node) {
            Some(href) => href,
            None => continue,
        };
        if !is_candidate(&href) {
            continue;
        }
        let mut target = match Url::join(&href, &page) {
            Ok(target) => target,
            Err(e) => {
                warn!(href = %href, "skipping malformed href: {e}");
                continue;
            }
        };
        if !same_site(target.host(), page.host()) {
            continue;
        }
        target.set_query(LANG_PARAM, lang.code());
        dom.set_href(node, &target.to_string());
        rewritten += 1;
    }

    let mut current = page;
    current.set_query(LANG_PARAM, lang.code());
    dom.set_url(&current.to_string());

    debug!(lang = lang.code(), rewritten, "links propagated");
    Ok(())
}

/// Anchors that navigate somewhere. Fragment jumps, script pseudo-links and
/// contact schemes never carry a language parameter.
fn is_candidate(href: &str) -> bool {
    !(href.starts_with('#')
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || has_opaque_scheme(href))
}

/// A scheme without an authority part (`data:`, `about:`, ...) is never a
/// same-site navigation.
fn has_opaque_scheme(href: &str) -> bool {
    match href.split_once(':') {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
                && !rest.starts_with("//")
        }
        None => false,
    }
}

/// Same-site means the exact hostname or any subdomain of it.
fn same_site(host: &str, page_host: &str) -> bool {
    host == page_host || host.ends_with(&format!(".{page_host}"))
}
