pub mod debounce;
pub mod export;
pub mod scroll;
pub mod viewport;

pub use debounce::{BrowserScheduler, Debouncer, Scheduler};
pub use scroll::scroll_to_element;
pub use viewport::{is_in_viewport, Rect, Viewport};
