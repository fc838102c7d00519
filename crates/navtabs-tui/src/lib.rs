pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod layout;
pub mod theme;
pub mod ui;
pub mod viewport;
pub mod widgets;

pub use app::{App, TerminalHost};
pub use theme::Theme;
