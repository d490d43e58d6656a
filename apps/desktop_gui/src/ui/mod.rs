//! UI layer for the double ticker: app shell, theme, and card widgets.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::DoubleTickerApp;
