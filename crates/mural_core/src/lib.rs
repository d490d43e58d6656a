//! Content model and scroll math for the double ticker.
//!
//! Everything here is pure data plus pure functions: the fixed mural
//! catalog, palette hex parsing, the scroll-to-offset transform, and the
//! frame coalescer that collapses scroll bursts into one update. No GUI
//! types leak in; the desktop app paints whatever these functions say.

pub mod catalog;
pub mod color;
pub mod frame;
pub mod ticker;

pub use catalog::{duplicated_murals, Mural, MURALS, MURAL_COUNT};
pub use color::{parse_hex_color, PaletteColor, PaletteError};
pub use frame::FrameCoalescer;
pub use ticker::{
    column_translation, column_travel, offset_for_progress, scroll_progress, single_travel,
    wrap_offset, Direction, CARD_HEIGHT,
};
