use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::dom;
use crate::error::Result;
use crate::style::{page_hidden_style, page_visible_style};

/// Hides the body and fades it back in after `delay_ms`.
pub fn fade_in_body(document: &Document, delay_ms: u32) -> Result<()> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    dom::apply_style(&body, &page_hidden_style())?;

    let timeout = Timeout::new(delay_ms, move || {
        if let Err(err) = dom::apply_style(&body, &page_visible_style()) {
            log::warn!("Page fade-in failed: {err}");
        }
    });
    timeout.forget();
    Ok(())
}
