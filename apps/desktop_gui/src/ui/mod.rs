//! UI layer: app shell, theme, and page widgets.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{PortfolioApp, StartupConfig};
