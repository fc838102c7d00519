pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod measurement;
pub mod scroll;
pub mod strip;
pub mod style;
pub mod tab;

pub use config::{AppConfig, EasingType, StripConfig};
pub use error::{Error, Result};
pub use geometry::{Element, LayoutMetrics, Vec2};
pub use measurement::{MeasurementState, ScrollStep};
pub use strip::{Host, StripCommand, StripEvent, TabStrip, TabStripProps};
pub use style::{StyleOverrides, StyleSlot, StyleSpec};
pub use tab::{ActiveTabRef, TabDescriptor, TabId, TabLabel};
