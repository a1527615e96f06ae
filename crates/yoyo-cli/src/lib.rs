/// YOYO shell — the interactive terminal frontend.
///
/// This crate contains all console code. Business logic lives in `yoyo-core`.
pub mod app;
pub mod cli;
pub mod drive_picker;
pub mod prompt;
pub mod theme;

pub use app::YoyoApp;
