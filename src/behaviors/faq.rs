use std::cell::Cell;

use web_sys::{Document, HtmlElement};

use crate::dom::{self, Listener};
use crate::error::Result;
use crate::style::InlineStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqState {
    Collapsed,
    Expanded,
}

impl FaqState {
    pub fn toggled(self) -> Self {
        match self {
            FaqState::Collapsed => FaqState::Expanded,
            FaqState::Expanded => FaqState::Collapsed,
        }
    }

    pub fn answer_style(self) -> InlineStyle {
        let display = match self {
            FaqState::Collapsed => "none",
            FaqState::Expanded => "block",
        };
        InlineStyle::new().with("display", display)
    }

    pub fn question_style(self) -> InlineStyle {
        let color = match self {
            FaqState::Collapsed => "#FF8C00",
            FaqState::Expanded => "#8B4513",
        };
        InlineStyle::new().with("color", color)
    }
}

/// Collapsible FAQ entries, opt-in through `faqAccordion`.
pub struct FaqAccordion {
    _listeners: Vec<Listener>,
}

impl FaqAccordion {
    pub fn install(document: &Document, selector: &str) -> Result<Self> {
        let mut listeners = Vec::new();

        for item in dom::query_all(document, selector) {
            let (Some(question), Some(answer)) = (dom::query_in(&item, "h3"), dom::query_in(&item, "p"))
            else {
                continue;
            };
            listeners.push(wire_item(question, answer)?);
        }

        log::debug!("FAQ accordion wired for {} items", listeners.len());
        Ok(Self { _listeners: listeners })
    }
}

fn wire_item(question: HtmlElement, answer: HtmlElement) -> Result<Listener> {
    dom::apply_style(&answer, &FaqState::Collapsed.answer_style())?;
    dom::apply_style(&question, &InlineStyle::new().with("cursor", "pointer"))?;

    let state = Cell::new(FaqState::Collapsed);
    let heading = question.clone();
    Listener::new(&question, "click", move |_| {
        let next = state.get().toggled();
        let applied = dom::apply_style(&answer, &next.answer_style())
            .and_then(|()| dom::apply_style(&heading, &next.question_style()));
        match applied {
            Ok(()) => state.set(next),
            Err(err) => log::warn!("FAQ toggle failed: {err}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_collapsed() {
        let state = FaqState::Collapsed.toggled();
        assert_eq!(state, FaqState::Expanded);
        assert_eq!(state.answer_style().get("display"), Some("block"));
        assert_eq!(state.question_style().get("color"), Some("#8B4513"));

        let state = state.toggled();
        assert_eq!(state, FaqState::Collapsed);
        assert_eq!(state.answer_style().get("display"), Some("none"));
        assert_eq!(state.question_style().get("color"), Some("#FF8C00"));
    }
}
