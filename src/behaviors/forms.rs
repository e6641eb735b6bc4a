use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::dom::{self, Listener};
use crate::error::Result;
use crate::style::InlineStyle;

const REQUIRED_FIELDS: &str = "input[required], textarea[required]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Missing,
}

impl FieldStatus {
    pub fn of(value: &str) -> Self {
        if value.trim().is_empty() {
            FieldStatus::Missing
        } else {
            FieldStatus::Valid
        }
    }

    pub fn style(self) -> InlineStyle {
        match self {
            FieldStatus::Missing => InlineStyle::new()
                .with("border-color", "#ff4444")
                .with("box-shadow", "0 0 5px rgba(255, 68, 68, 0.3)"),
            FieldStatus::Valid => InlineStyle::new()
                .with("border-color", "#ddd")
                .with("box-shadow", "none"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub fields: Vec<FieldStatus>,
}

impl ValidationReport {
    pub fn check<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            fields: values.into_iter().map(FieldStatus::of).collect(),
        }
    }

    pub fn blocks_submit(&self) -> bool {
        self.fields.contains(&FieldStatus::Missing)
    }

    /// Message to show the user, if the submit has to be stopped.
    pub fn notice<'m>(&self, message: &'m str) -> Option<&'m str> {
        self.blocks_submit().then_some(message)
    }
}

/// Blocks submits of forms whose required fields are blank.
pub struct RequiredFieldCheck {
    _listeners: Vec<Listener>,
}

impl RequiredFieldCheck {
    pub fn install(window: &Window, document: &Document, message: &str) -> Result<Self> {
        let forms = dom::query_all(document, "form");
        let message: Rc<str> = Rc::from(message);
        let mut listeners = Vec::with_capacity(forms.len());

        for form in forms {
            let win = window.clone();
            let message = Rc::clone(&message);
            let target = form.clone();
            listeners.push(Listener::new(&form, "submit", move |event| {
                let fields: Vec<(HtmlElement, String)> = dom::query_all_in(&target, REQUIRED_FIELDS)
                    .into_iter()
                    .filter_map(field_value)
                    .collect();
                let report = ValidationReport::check(fields.iter().map(|(_, value)| value.as_str()));

                for ((field, _), status) in fields.iter().zip(&report.fields) {
                    if let Err(err) = dom::apply_style(field, &status.style()) {
                        log::warn!("Failed to mark form field: {err}");
                    }
                }

                if let Some(notice) = report.notice(&message) {
                    event.prevent_default();
                    log::debug!("Blocked submit, {} required fields empty", missing_count(&report));
                    if let Err(err) = win.alert_with_message(notice) {
                        log::warn!("Could not show validation notice: {:?}", err);
                    }
                }
            })?);
        }

        log::debug!("Required-field check wired for {} forms", listeners.len());
        Ok(Self { _listeners: listeners })
    }
}

fn field_value(el: Element) -> Option<(HtmlElement, String)> {
    let value = if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        return None;
    };
    el.dyn_into::<HtmlElement>().ok().map(|field| (field, value))
}

fn missing_count(report: &ValidationReport) -> usize {
    report.fields.iter().filter(|s| **s == FieldStatus::Missing).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_VALIDATION_MESSAGE;

    #[test]
    fn one_blank_field_blocks_and_is_the_only_one_marked() {
        let report = ValidationReport::check(["", "Ada Lovelace"]);

        assert!(report.blocks_submit());
        assert_eq!(report.fields, vec![FieldStatus::Missing, FieldStatus::Valid]);
        assert_eq!(report.fields[0].style().get("border-color"), Some("#ff4444"));
        assert_eq!(report.fields[1].style().get("border-color"), Some("#ddd"));
        assert_eq!(report.fields[1].style().get("box-shadow"), Some("none"));
        assert_eq!(
            report.notice(DEFAULT_VALIDATION_MESSAGE),
            Some("Bitte fülle alle erforderlichen Felder aus.")
        );
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        assert_eq!(FieldStatus::of("  \t\n"), FieldStatus::Missing);
        assert_eq!(FieldStatus::of(" x "), FieldStatus::Valid);
    }

    #[test]
    fn filled_forms_submit_silently() {
        let report = ValidationReport::check(["a@b.de", "Hallo"]);
        assert!(!report.blocks_submit());
        assert_eq!(report.notice(DEFAULT_VALIDATION_MESSAGE), None);
    }

    #[test]
    fn forms_without_required_fields_pass() {
        let report = ValidationReport::check(std::iter::empty());
        assert!(!report.blocks_submit());
        assert_eq!(missing_count(&report), 0);
    }
}
