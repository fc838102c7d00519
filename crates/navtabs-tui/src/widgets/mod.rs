mod status_bar;
mod tab_content;
mod tab_strip;

pub use status_bar::StatusBarWidget;
pub use tab_content::TabContentWidget;
pub use tab_strip::TabStripWidget;
