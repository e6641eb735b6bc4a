use std::rc::Rc;

use web_sys::Document;

use crate::dom::{self, Listener};
use crate::error::Result;

/// Where call-to-action clicks get recorded. Swap in an analytics sink by
/// implementing this.
#[cfg_attr(test, mockall::automock)]
pub trait ClickReporter {
    fn record(&self, label: &str);
}

/// Writes clicks to the browser console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ClickReporter for ConsoleReporter {
    fn record(&self, label: &str) {
        gloo_console::log!("CTA button clicked:", label);
    }
}

pub fn report_click(reporter: &dyn ClickReporter, text_content: &str) {
    reporter.record(text_content.trim());
}

pub struct CtaTracking {
    _listeners: Vec<Listener>,
}

impl CtaTracking {
    pub fn install(document: &Document, selector: &str, reporter: Rc<dyn ClickReporter>) -> Result<Self> {
        let buttons = dom::query_all(document, selector);
        let mut listeners = Vec::with_capacity(buttons.len());

        for button in buttons {
            let reporter = Rc::clone(&reporter);
            let source = button.clone();
            listeners.push(Listener::new(&button, "click", move |_| {
                let text = source.text_content().unwrap_or_default();
                report_click(reporter.as_ref(), &text);
            })?);
        }

        log::debug!("Tracking clicks on {} CTA buttons", listeners.len());
        Ok(Self { _listeners: listeners })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_trimmed_label() {
        let mut reporter = MockClickReporter::new();
        reporter
            .expect_record()
            .withf(|label| label == "Jetzt starten")
            .times(1)
            .return_const(());

        report_click(&reporter, "\n    Jetzt starten  \n");
    }

    #[test]
    fn empty_buttons_still_report() {
        let mut reporter = MockClickReporter::new();
        reporter
            .expect_record()
            .withf(|label| label.is_empty())
            .times(1)
            .return_const(());

        report_click(&reporter, "   ");
    }
}
