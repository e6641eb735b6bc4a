use web_sys::{HtmlElement, Window};

use crate::dom::{self, Listener};
use crate::error::Result;
use crate::style::NavbarState;

pub struct NavbarTint {
    _listener: Listener,
}

impl NavbarTint {
    /// `None` when the page has no navbar.
    pub fn install(window: &Window, navbar: Option<HtmlElement>, threshold: f64) -> Result<Option<Self>> {
        let Some(navbar) = navbar else {
            log::debug!("No navbar on page, skipping scroll tint");
            return Ok(None);
        };

        let win = window.clone();
        let listener = Listener::new(window, "scroll", move |_| {
            let state = NavbarState::for_offset(dom::scroll_y(&win), threshold);
            if let Err(err) = dom::apply_style(&navbar, &state.style()) {
                log::warn!("Failed to restyle navbar: {err}");
            }
        })?;

        Ok(Some(Self { _listener: listener }))
    }
}
