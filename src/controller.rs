use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::behaviors::anchors::AnchorScroll;
use crate::behaviors::cards::CardHover;
use crate::behaviors::cta::{ClickReporter, ConsoleReporter, CtaTracking};
use crate::behaviors::faq::FaqAccordion;
use crate::behaviors::forms::RequiredFieldCheck;
use crate::behaviors::mobile_menu::MobileMenu;
use crate::behaviors::navbar::NavbarTint;
use crate::behaviors::parallax::Parallax;
use crate::behaviors::reveal::SectionReveal;
use crate::config::InteractionConfig;
use crate::dom;
use crate::error::Result;

/// Owns every behavior installed on the page. Dropping it removes the
/// listeners, disconnects the observer and takes the injected nodes out again.
pub struct PageInteractionController {
    anchors: Option<AnchorScroll>,
    navbar: Option<NavbarTint>,
    reveal: Option<SectionReveal>,
    cards: Option<CardHover>,
    cta: Option<CtaTracking>,
    forms: Option<RequiredFieldCheck>,
    parallax: Option<Parallax>,
    mobile_menu: Option<MobileMenu>,
    faq: Option<FaqAccordion>,
}

impl PageInteractionController {
    pub fn install(config: &InteractionConfig) -> Result<Self> {
        Self::install_with_reporter(config, Rc::new(ConsoleReporter))
    }

    /// Installs every behavior. A behavior whose wiring fails is logged and
    /// left out; the rest still go in.
    pub fn install_with_reporter(config: &InteractionConfig, reporter: Rc<dyn ClickReporter>) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;
        let selectors = &config.selectors;

        let navbar = dom::query(&document, &selectors.navbar);
        let controller = Self {
            anchors: wired("smooth scroll", AnchorScroll::install(&document, config.header_offset)),
            navbar: wired(
                "navbar tint",
                NavbarTint::install(&window, navbar, config.navbar_threshold),
            )
            .flatten(),
            reveal: wired(
                "section reveal",
                SectionReveal::install(
                    &document,
                    &selectors.sections,
                    config.reveal_threshold,
                    &config.reveal_root_margin,
                ),
            ),
            cards: wired("card hover", CardHover::install(&document, &selectors.feature_cards)),
            cta: wired(
                "cta tracking",
                CtaTracking::install(&document, &selectors.cta_buttons, reporter),
            ),
            forms: wired(
                "form validation",
                RequiredFieldCheck::install(&window, &document, &config.validation_message),
            ),
            parallax: wired(
                "parallax",
                Parallax::install(&window, &document, &selectors.hero_background, config.parallax_factor),
            ),
            mobile_menu: wired(
                "mobile menu",
                MobileMenu::install(&document, &selectors.nav_container, config.mobile_breakpoint),
            ),
            faq: if config.faq_accordion {
                wired("faq accordion", FaqAccordion::install(&document, &selectors.faq_items))
            } else {
                None
            },
        };

        log::info!("Page interactions installed ({} behaviors)", controller.active_count());
        Ok(controller)
    }

    pub fn active_count(&self) -> usize {
        [
            self.anchors.is_some(),
            self.navbar.is_some(),
            self.reveal.is_some(),
            self.cards.is_some(),
            self.cta.is_some(),
            self.forms.is_some(),
            self.parallax.is_some(),
            self.mobile_menu.is_some(),
            self.faq.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

fn wired<T>(name: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(behavior) => Some(behavior),
        Err(err) => {
            log::warn!("Could not install {name}: {err}");
            None
        }
    }
}

/// Waits for `DOMContentLoaded` unless the document is already parsed.
pub fn when_ready<F>(document: &Document, on_ready: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        on_ready();
        return Ok(());
    }

    let callback = Closure::once_into_js(on_ready);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    Ok(())
}
