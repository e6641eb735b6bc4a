//! Interactivity for the static landing page: smooth anchor scrolling, navbar
//! tint, section fade-ins, card hover, CTA click reporting, required-field
//! checks, hero parallax and a page fade-in. Load the wasm module and it wires
//! itself up once the document is parsed.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod lifecycle;
pub mod style;
pub mod utils;

pub mod behaviors {
    pub mod anchors;
    pub mod cards;
    pub mod cta;
    pub mod faq;
    pub mod forms;
    pub mod mobile_menu;
    pub mod navbar;
    pub mod page_fade;
    pub mod parallax;
    pub mod reveal;
}

pub use config::InteractionConfig;
pub use controller::PageInteractionController;
pub use error::InteractionError;
use lifecycle::InstallGate;

thread_local! {
    static CONTROLLER: RefCell<Option<PageInteractionController>> = RefCell::new(None);
    static GATE: RefCell<InstallGate> = RefCell::new(InstallGate::default());
}

fn install(config: &InteractionConfig) {
    // Drop the old controller first so its listeners and injected nodes go away.
    teardown();
    match PageInteractionController::install(config) {
        Ok(controller) => CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller)),
        Err(err) => log::warn!("Page interactions not installed: {err}"),
    }
}

/// Entry point, runs when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second module instance on the page already has a logger.
    let _ = console_log::init_with_level(config::log_level());

    log::info!("Starting page interactions");
    if let Err(err) = utils::export::publish() {
        log::warn!("window.{} not published: {err}", utils::export::GLOBAL_NAME);
    }

    let document = dom::document()?;
    let ready_document = document.clone();
    controller::when_ready(&document, move || {
        let config = GATE.with(|gate| gate.borrow_mut().open());
        // Once per page; reinstalls from `configure` do not blink the body.
        if let Err(err) = behaviors::page_fade::fade_in_body(&ready_document, config.page_fade_delay_ms) {
            log::warn!("Skipping page fade-in: {err}");
        }
        install(&config);
    })?;
    Ok(())
}

/// Reinstalls everything with page-provided options, e.g.
/// `configure({ headerOffset: 64, faqAccordion: true })`. Called before the
/// document is parsed, the options are kept for the install on `DOMContentLoaded`.
#[wasm_bindgen]
pub fn configure(options: JsValue) -> Result<(), JsValue> {
    let config: InteractionConfig = if options.is_undefined() || options.is_null() {
        InteractionConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|err| InteractionError::Config(err.to_string()))?
    };
    match GATE.with(|gate| gate.borrow_mut().request(config)) {
        Some(config) => {
            log::debug!("Reconfiguring with {:?}", config);
            install(&config);
        }
        None => log::debug!("Document still loading, options kept for the ready install"),
    }
    Ok(())
}

/// Removes every listener, the observer and the injected nodes. Sections that
/// were still waiting to fade in are shown right away.
#[wasm_bindgen]
pub fn teardown() {
    let previous = CONTROLLER.with(|slot| slot.borrow_mut().take());
    if previous.is_some() {
        log::info!("Page interactions removed");
    }
}
