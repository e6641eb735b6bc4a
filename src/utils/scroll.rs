use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::error::Result;

pub const DEFAULT_OFFSET: f64 = 80.0;

pub fn smooth_scroll_to(top: f64) -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Offset for a JS caller: only a missing argument gets the default, any
/// other non-number (`null` included) counts as 0.
pub fn resolve_offset(is_undefined: bool, number: Option<f64>) -> f64 {
    if is_undefined {
        DEFAULT_OFFSET
    } else {
        number.unwrap_or(0.0)
    }
}

/// Scrolls so the element's top lands `offset` pixels under the viewport top.
pub fn scroll_to_element(element: &HtmlElement, offset: f64) -> Result<()> {
    let top = f64::from(element.offset_top()) - offset;
    smooth_scroll_to(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_offset_uses_header_height() {
        assert_eq!(resolve_offset(true, None), 80.0);
    }

    #[test]
    fn null_offset_means_zero() {
        assert_eq!(resolve_offset(false, None), 0.0);
    }

    #[test]
    fn explicit_offset_wins() {
        assert_eq!(resolve_offset(false, Some(120.0)), 120.0);
        assert_eq!(resolve_offset(false, Some(0.0)), 0.0);
    }
}
