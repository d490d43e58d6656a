use serde::{Deserialize, Serialize};

use crate::catalog::MURAL_COUNT;

/// Vertical slot one card occupies in a column, in logical pixels.
pub const CARD_HEIGHT: f32 = 228.0;

/// Which way a column moves as the rail is scrolled down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Down,
    Up,
}

/// Travel distance of one full pass through the catalog. This is what the
/// rail's scroll range maps onto.
pub fn single_travel(card_height: f32) -> f32 {
    MURAL_COUNT as f32 * card_height
}

/// Travel distance through the duplicated sequence a column renders. Twice
/// [`single_travel`] on purpose: the rail maps scroll onto a single pass
/// while the column wraps over the doubled one, so a full scroll traversal
/// cycles the cards more than once. Keep the ratio; it is the effect.
pub fn column_travel(card_height: f32) -> f32 {
    (2 * MURAL_COUNT) as f32 * card_height
}

/// Wraps `offset` into `[0, travel)`, non-negative for any sign of input.
/// Keeps translations bounded no matter how long a scroll session runs.
pub fn wrap_offset(offset: f32, travel: f32) -> f32 {
    ((offset % travel) + travel) % travel
}

/// Vertical translation a column applies at the given shared offset:
/// `-wrapped` for [`Direction::Down`], `+wrapped` for [`Direction::Up`].
pub fn column_translation(direction: Direction, offset: f32, card_height: f32) -> f32 {
    let wrapped = wrap_offset(offset, column_travel(card_height));
    match direction {
        Direction::Down => -wrapped,
        Direction::Up => wrapped,
    }
}

/// Normalized scroll progress in `[0, 1]`. A rail whose content does not
/// exceed its viewport has no scroll range; progress is 0 there rather than
/// dividing by zero.
pub fn scroll_progress(scroll_top: f32, scroll_height: f32, client_height: f32) -> f32 {
    let max = scroll_height - client_height;
    if max > 0.0 {
        (scroll_top / max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Maps progress linearly onto the single-pass travel distance.
pub fn offset_for_progress(progress: f32, card_height: f32) -> f32 {
    progress * single_travel(card_height)
}

#[cfg(test)]
#[path = "tests/ticker_tests.rs"]
mod tests;
