use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::error::{InteractionError, Result};
use crate::style::InlineStyle;

pub const TOGGLE_CLASS: &str = "mobile-menu-toggle";

pub fn responsive_css(breakpoint: u32) -> String {
    format!(
        r#"
            @media (max-width: {breakpoint}px) {{
                .{TOGGLE_CLASS} {{
                    display: block !important;
                }}
                .nav-cta {{
                    display: none;
                }}
            }}
        "#
    )
}

fn toggle_style() -> InlineStyle {
    InlineStyle::new()
        .with("display", "none")
        .with("background", "none")
        .with("border", "none")
        .with("font-size", "1.5rem")
        .with("color", "#8B4513")
        .with("cursor", "pointer")
}

/// Injected responsive stylesheet plus the burger button; both are removed on drop.
pub struct MobileMenu {
    stylesheet: Element,
    toggle: Option<HtmlElement>,
}

impl MobileMenu {
    pub fn install(document: &Document, container_selector: &str, breakpoint: u32) -> Result<Self> {
        let head = document
            .head()
            .ok_or_else(|| InteractionError::Js("document has no <head>".to_string()))?;
        let stylesheet = document.create_element("style")?;
        stylesheet.set_text_content(Some(responsive_css(breakpoint).as_str()));
        head.append_child(&stylesheet)?;

        let toggle = match dom::query(document, container_selector) {
            Some(container) => {
                let button = document
                    .create_element("button")?
                    .dyn_into::<HtmlElement>()
                    .map_err(JsValue::from)?;
                button.set_inner_html("☰");
                button.set_class_name(TOGGLE_CLASS);
                dom::apply_style(&button, &toggle_style())?;
                container.append_child(&button)?;
                Some(button)
            }
            None => {
                log::debug!("No nav container, mobile toggle not added");
                None
            }
        };

        Ok(Self { stylesheet, toggle })
    }
}

impl Drop for MobileMenu {
    fn drop(&mut self) {
        self.stylesheet.remove();
        if let Some(toggle) = &self.toggle {
            toggle.remove();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_targets_breakpoint() {
        let css = responsive_css(768);
        assert!(css.contains("@media (max-width: 768px)"));
        assert!(css.contains(".mobile-menu-toggle {"));
        assert!(css.contains("display: block !important;"));
        assert!(css.contains(".nav-cta {"));
    }

    #[test]
    fn toggle_starts_hidden() {
        let style = toggle_style();
        assert_eq!(style.get("display"), Some("none"));
        assert_eq!(style.get("color"), Some("#8B4513"));
    }
}
