//! Inline style states the behaviors switch between.
//!
//! Everything here is plain data so the transitions can be checked without a
//! browser; `dom::apply_style` writes an [`InlineStyle`] onto an element.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineStyle {
    declarations: Vec<(&'static str, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn declarations(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    Top,
    Scrolled,
}

impl NavbarState {
    /// `threshold` itself still counts as the top of the page.
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarState::Scrolled
        } else {
            NavbarState::Top
        }
    }

    pub fn style(self) -> InlineStyle {
        match self {
            NavbarState::Scrolled => InlineStyle::new()
                .with("background", "rgba(255, 255, 255, 0.98)")
                .with("box-shadow", "0 2px 20px rgba(0, 0, 0, 0.1)"),
            NavbarState::Top => InlineStyle::new()
                .with("background", "rgba(255, 255, 255, 0.95)")
                .with("box-shadow", "none"),
        }
    }
}

/// Fade-in state of a page section. Once revealed it stays revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    /// State a section starts from when the observer is installed; sections a
    /// previous install already revealed are not hidden again.
    pub fn initial(already_revealed: bool) -> Self {
        if already_revealed {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }

    pub fn observe(self, is_intersecting: bool) -> Self {
        match (self, is_intersecting) {
            (RevealState::Hidden, false) => RevealState::Hidden,
            _ => RevealState::Revealed,
        }
    }

    pub fn style(self) -> InlineStyle {
        match self {
            RevealState::Hidden => InlineStyle::new()
                .with("opacity", "0")
                .with("transform", "translateY(30px)")
                .with("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
            RevealState::Revealed => InlineStyle::new()
                .with("opacity", "1")
                .with("transform", "translateY(0)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Resting,
    Lifted,
}

impl HoverState {
    pub fn style(self) -> InlineStyle {
        match self {
            HoverState::Lifted => InlineStyle::new()
                .with("transform", "translateY(-10px) scale(1.02)")
                .with("box-shadow", "0 15px 40px rgba(0, 0, 0, 0.15)"),
            HoverState::Resting => InlineStyle::new()
                .with("transform", "translateY(0) scale(1)")
                .with("box-shadow", "0 10px 30px rgba(0, 0, 0, 0.1)"),
        }
    }
}

pub fn parallax_style(scroll_y: f64, factor: f64) -> InlineStyle {
    InlineStyle::new().with("transform", format!("translateY({}px)", scroll_y * factor))
}

pub fn page_hidden_style() -> InlineStyle {
    InlineStyle::new()
        .with("opacity", "0")
        .with("transition", "opacity 0.3s ease-in")
}

pub fn page_visible_style() -> InlineStyle {
    InlineStyle::new().with("opacity", "1")
}
