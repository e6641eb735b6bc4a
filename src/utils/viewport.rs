use web_sys::Element;

use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// True when no edge pokes out of the viewport.
    pub fn fits_within(&self, viewport: Viewport) -> bool {
        self.top >= 0.0
            && self.left >= 0.0
            && self.bottom <= viewport.height
            && self.right <= viewport.width
    }
}

pub fn current_viewport() -> Result<Viewport> {
    let window = dom::window()?;
    let fallback = window.document().and_then(|doc| doc.document_element());

    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|w| *w > 0.0)
        .or_else(|| fallback.as_ref().map(|root| f64::from(root.client_width())))
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|h| *h > 0.0)
        .or_else(|| fallback.as_ref().map(|root| f64::from(root.client_height())))
        .unwrap_or(0.0);

    Ok(Viewport { width, height })
}

pub fn is_in_viewport(element: &Element) -> Result<bool> {
    let bounds = element.get_bounding_client_rect();
    let rect = Rect::new(bounds.top(), bounds.left(), bounds.bottom(), bounds.right());
    Ok(rect.fits_within(current_viewport()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Viewport = Viewport { width: 1280.0, height: 720.0 };

    #[test]
    fn fully_inside_is_visible() {
        assert!(Rect::new(10.0, 10.0, 200.0, 400.0).fits_within(SCREEN));
        assert!(Rect::new(0.0, 0.0, 720.0, 1280.0).fits_within(SCREEN));
    }

    #[test]
    fn overflowing_any_edge_is_not_visible() {
        assert!(!Rect::new(-1.0, 10.0, 200.0, 400.0).fits_within(SCREEN));
        assert!(!Rect::new(10.0, -1.0, 200.0, 400.0).fits_within(SCREEN));
        assert!(!Rect::new(10.0, 10.0, 721.0, 400.0).fits_within(SCREEN));
        assert!(!Rect::new(10.0, 10.0, 200.0, 1281.0).fits_within(SCREEN));
    }
}
