use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;
use crate::error::Result;
use crate::style::RevealState;

/// Set on a section once it has been revealed, so a later install leaves it alone.
pub const REVEALED_ATTR: &str = "data-revealed";

/// Fades sections in the first time they scroll into view.
pub struct SectionReveal {
    observer: IntersectionObserver,
    sections: Vec<HtmlElement>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionReveal {
    pub fn install(document: &Document, selector: &str, threshold: f64, root_margin: &str) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    // Leaving the viewport again keeps the section revealed.
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let Ok(section) = entry.target().dyn_into::<HtmlElement>() else {
                        continue;
                    };
                    if let Err(err) = reveal(&section) {
                        log::warn!("Failed to reveal section: {err}");
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let hidden = RevealState::Hidden.style();
        let mut sections = Vec::new();
        for section in dom::query_all(document, selector) {
            if RevealState::initial(section.has_attribute(REVEALED_ATTR)) == RevealState::Revealed {
                continue;
            }
            dom::apply_style(&section, &hidden)?;
            observer.observe(&section);
            sections.push(section);
        }

        log::debug!("Observing {} sections for fade-in", sections.len());
        Ok(Self {
            observer,
            sections,
            _callback: callback,
        })
    }
}

fn reveal(section: &HtmlElement) -> Result<()> {
    dom::apply_style(section, &RevealState::Revealed.style())?;
    section.set_attribute(REVEALED_ATTR, "")?;
    Ok(())
}

impl Drop for SectionReveal {
    // Nothing watches the sections any more, so none may stay hidden.
    fn drop(&mut self) {
        self.observer.disconnect();
        for section in &self.sections {
            if section.has_attribute(REVEALED_ATTR) {
                continue;
            }
            if let Err(err) = reveal(section) {
                log::warn!("Failed to reveal section on teardown: {err}");
            }
        }
    }
}
