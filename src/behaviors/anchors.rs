use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom::{self, Listener};
use crate::error::Result;
use crate::utils::scroll::smooth_scroll_to;

/// Element id named by an in-page link, `None` for a bare `#`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorAction {
    /// Cancel the browser navigation and smooth-scroll to this offset.
    Scroll(f64),
    /// Leave the click to the browser.
    PassThrough,
}

/// What a click on `href` should do, given a lookup from element id to that
/// element's top offset.
pub fn plan_navigation<F>(href: &str, header_offset: f64, offset_top_of: F) -> AnchorAction
where
    F: FnOnce(&str) -> Option<f64>,
{
    fragment_id(href)
        .and_then(offset_top_of)
        .map_or(AnchorAction::PassThrough, |top| AnchorAction::Scroll(top - header_offset))
}

/// Intercepts clicks on `a[href^="#"]` and scrolls smoothly below the fixed header.
pub struct AnchorScroll {
    _listeners: Vec<Listener>,
}

impl AnchorScroll {
    pub fn install(document: &Document, header_offset: f64) -> Result<Self> {
        let links = dom::query_all(document, r##"a[href^="#"]"##);
        let mut listeners = Vec::with_capacity(links.len());

        for link in links {
            let document = document.clone();
            let anchor = link.clone();
            let listener = Listener::new(&link, "click", move |event| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                let action = plan_navigation(&href, header_offset, |id| {
                    document
                        .get_element_by_id(id)
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                        .map(|el| f64::from(el.offset_top()))
                });
                if let AnchorAction::Scroll(top) = action {
                    event.prevent_default();
                    if let Err(err) = smooth_scroll_to(top) {
                        log::warn!("Anchor scroll to {href} failed: {err}");
                    }
                }
            })?;
            listeners.push(listener);
        }

        log::debug!("Smooth scrolling wired for {} anchor links", listeners.len());
        Ok(Self { _listeners: listeners })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_target_is_intercepted_and_scrolls_below_header() {
        let action = plan_navigation("#pricing", 80.0, |id| {
            assert_eq!(id, "pricing");
            Some(1200.0)
        });
        assert_eq!(action, AnchorAction::Scroll(1120.0));
    }

    #[test]
    fn missing_target_passes_through_without_scrolling() {
        assert_eq!(plan_navigation("#nowhere", 80.0, |_| None), AnchorAction::PassThrough);
    }

    #[test]
    fn bare_hash_never_looks_anything_up() {
        let action = plan_navigation("#", 80.0, |_| panic!("lookup for empty fragment"));
        assert_eq!(action, AnchorAction::PassThrough);
    }

    #[test]
    fn fragment_requires_leading_hash() {
        assert_eq!(fragment_id("#faq"), Some("faq"));
        assert_eq!(fragment_id("/faq#try"), None);
    }

    #[test]
    fn targets_near_the_top_can_scroll_negative() {
        assert_eq!(plan_navigation("#hero", 80.0, |_| Some(0.0)), AnchorAction::Scroll(-80.0));
    }
}
