use log::Level;
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose wiring logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const DEFAULT_VALIDATION_MESSAGE: &str = "Bitte fülle alle erforderlichen Felder aus.";

/// Every tunable of the page behaviors.
///
/// Deserialized from the options object handed to `configure`, keys are
/// camelCase and anything left out keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionConfig {
    /// Height of the fixed header that anchor scrolling leaves room for.
    pub header_offset: f64,
    /// Scroll offset above which the navbar switches to its scrolled style.
    pub navbar_threshold: f64,
    pub parallax_factor: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub mobile_breakpoint: u32,
    pub page_fade_delay_ms: u32,
    pub faq_accordion: bool,
    pub validation_message: String,
    pub selectors: Selectors,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub navbar: String,
    pub nav_container: String,
    pub sections: String,
    pub feature_cards: String,
    pub cta_buttons: String,
    pub hero_background: String,
    pub faq_items: String,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            navbar_threshold: 100.0,
            parallax_factor: 0.5,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            mobile_breakpoint: 768,
            page_fade_delay_ms: 100,
            faq_accordion: false,
            validation_message: DEFAULT_VALIDATION_MESSAGE.to_string(),
            selectors: Selectors::default(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".to_string(),
            nav_container: ".nav-container".to_string(),
            sections: ".section".to_string(),
            feature_cards: ".feature-card".to_string(),
            cta_buttons: ".cta-button".to_string(),
            hero_background: ".hero-bg".to_string(),
            faq_items: ".faq-item".to_string(),
        }
    }
}
