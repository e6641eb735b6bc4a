use web_sys::{Document, HtmlElement};

use crate::dom::{self, Listener};
use crate::error::Result;
use crate::style::HoverState;

pub struct CardHover {
    _listeners: Vec<Listener>,
}

impl CardHover {
    pub fn install(document: &Document, selector: &str) -> Result<Self> {
        let cards = dom::query_all(document, selector);
        let mut listeners = Vec::with_capacity(cards.len() * 2);

        for card in cards {
            listeners.push(hover_listener(&card, "mouseenter", HoverState::Lifted)?);
            listeners.push(hover_listener(&card, "mouseleave", HoverState::Resting)?);
        }

        log::debug!("Hover effect wired for {} cards", listeners.len() / 2);
        Ok(Self { _listeners: listeners })
    }
}

fn hover_listener(card: &HtmlElement, event: &'static str, state: HoverState) -> Result<Listener> {
    let target = card.clone();
    let style = state.style();
    Listener::new(card, event, move |_| {
        if let Err(err) = dom::apply_style(&target, &style) {
            log::warn!("Card {event} styling failed: {err}");
        }
    })
}
