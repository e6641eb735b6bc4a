use web_sys::{Document, Window};

use crate::dom::{self, Listener};
use crate::error::Result;
use crate::style::parallax_style;

/// Shifts the hero background at a fraction of the scroll speed.
pub struct Parallax {
    _listener: Listener,
}

impl Parallax {
    pub fn install(window: &Window, document: &Document, selector: &str, factor: f64) -> Result<Self> {
        let win = window.clone();
        let document = document.clone();
        let selector = selector.to_string();

        // Looked up per event so a hero inserted after load still moves.
        let listener = Listener::new(window, "scroll", move |_| {
            let Some(hero) = dom::query(&document, &selector) else {
                return;
            };
            let style = parallax_style(dom::scroll_y(&win), factor);
            if let Err(err) = dom::apply_style(&hero, &style) {
                log::warn!("Parallax update failed: {err}");
            }
        })?;

        Ok(Self { _listener: listener })
    }
}
