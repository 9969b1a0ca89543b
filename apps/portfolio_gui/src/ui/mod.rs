//! UI layer: app shell, page sections and themes.

pub mod app;
pub mod sections;
pub mod theme;

pub use app::PortfolioApp;
