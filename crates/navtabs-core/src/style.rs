//! Style slots, built-in defaults and override merging.
//!
//! The core never interprets colours or sizes; it only decides which slots
//! apply to an element and in which order they stack. Later layers win
//! field by field.

use serde::{Deserialize, Serialize};

/// Default text and underline colour.
pub const DEFAULT_FOREGROUND: &str = "#e1e1e1";
/// Default padding around each tab, in layout units.
pub const DEFAULT_TAB_PADDING: u16 = 8;
/// Default underline thickness, in layout units.
pub const DEFAULT_UNDERLINE_HEIGHT: u16 = 4;

/// Named places a caller can restyle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleSlot {
    /// Outer wrapper around the whole strip
    Wrap,
    /// The tab row
    Tabs,
    /// Every tab container
    Tab,
    /// Every tab label
    TabText,
    /// The active tab container (stacked on `Tab`)
    ActiveTab,
    /// The active tab label (stacked on `TabText`)
    ActiveTabText,
    /// The animated indicator
    Underline,
}

impl StyleSlot {
    pub const ALL: [StyleSlot; 7] = [
        StyleSlot::Wrap,
        StyleSlot::Tabs,
        StyleSlot::Tab,
        StyleSlot::TabText,
        StyleSlot::ActiveTab,
        StyleSlot::ActiveTabText,
        StyleSlot::Underline,
    ];
}

/// An opaque per-slot style. Every field is optional so specs can be layered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSpec {
    /// Foreground colour, hex string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    /// Background colour, hex string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    /// Vertical offset from the bottom edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
}

impl StyleSpec {
    /// Layer `other` on top of `self`
    pub fn merge(mut self, other: &StyleSpec) -> Self {
        if other.fg.is_some() {
            self.fg = other.fg.clone();
        }
        if other.bg.is_some() {
            self.bg = other.bg.clone();
        }
        if other.padding.is_some() {
            self.padding = other.padding;
        }
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.bottom.is_some() {
            self.bottom = other.bottom;
        }
        if other.bold.is_some() {
            self.bold = other.bold;
        }
        self
    }

    /// Built-in style for a slot
    pub fn default_for(slot: StyleSlot) -> Self {
        match slot {
            StyleSlot::Wrap | StyleSlot::Tabs | StyleSlot::ActiveTabText => StyleSpec::default(),
            StyleSlot::Tab | StyleSlot::ActiveTab => StyleSpec {
                padding: Some(DEFAULT_TAB_PADDING),
                ..Default::default()
            },
            StyleSlot::TabText => StyleSpec {
                fg: Some(DEFAULT_FOREGROUND.to_string()),
                ..Default::default()
            },
            StyleSlot::Underline => StyleSpec {
                bg: Some(DEFAULT_FOREGROUND.to_string()),
                height: Some(DEFAULT_UNDERLINE_HEIGHT),
                bottom: Some(-1),
                ..Default::default()
            },
        }
    }
}

/// Caller-supplied overrides, one optional spec per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<StyleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<StyleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<StyleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_text: Option<StyleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab: Option<StyleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab_text: Option<StyleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<StyleSpec>,
}

/// Resolved container and label styles for one tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStyle {
    pub container: StyleSpec,
    pub text: StyleSpec,
}

impl StyleOverrides {
    pub fn get(&self, slot: StyleSlot) -> Option<&StyleSpec> {
        match slot {
            StyleSlot::Wrap => self.wrap.as_ref(),
            StyleSlot::Tabs => self.tabs.as_ref(),
            StyleSlot::Tab => self.tab.as_ref(),
            StyleSlot::TabText => self.tab_text.as_ref(),
            StyleSlot::ActiveTab => self.active_tab.as_ref(),
            StyleSlot::ActiveTabText => self.active_tab_text.as_ref(),
            StyleSlot::Underline => self.underline.as_ref(),
        }
    }

    pub fn set(&mut self, slot: StyleSlot, spec: StyleSpec) {
        let field = match slot {
            StyleSlot::Wrap => &mut self.wrap,
            StyleSlot::Tabs => &mut self.tabs,
            StyleSlot::Tab => &mut self.tab,
            StyleSlot::TabText => &mut self.tab_text,
            StyleSlot::ActiveTab => &mut self.active_tab,
            StyleSlot::ActiveTabText => &mut self.active_tab_text,
            StyleSlot::Underline => &mut self.underline,
        };
        *field = Some(spec);
    }

    /// Stack `layers` in order: all defaults first, then all overrides.
    fn stack(&self, layers: &[StyleSlot]) -> StyleSpec {
        let defaults = layers
            .iter()
            .fold(StyleSpec::default(), |acc, slot| acc.merge(&StyleSpec::default_for(*slot)));
        layers
            .iter()
            .filter_map(|slot| self.get(*slot))
            .fold(defaults, |acc, spec| acc.merge(spec))
    }

    /// Default for `slot` with its override applied
    pub fn resolve(&self, slot: StyleSlot) -> StyleSpec {
        self.stack(&[slot])
    }

    /// Styles for a tab; active tabs stack the `active_*` slots on top of the
    /// plain ones.
    pub fn resolve_tab(&self, active: bool) -> TabStyle {
        if active {
            TabStyle {
                container: self.stack(&[StyleSlot::Tab, StyleSlot::ActiveTab]),
                text: self.stack(&[StyleSlot::TabText, StyleSlot::ActiveTabText]),
            }
        } else {
            TabStyle {
                container: self.stack(&[StyleSlot::Tab]),
                text: self.stack(&[StyleSlot::TabText]),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let overrides = StyleOverrides::default();
        let underline = overrides.resolve(StyleSlot::Underline);
        assert_eq!(underline.bg.as_deref(), Some(DEFAULT_FOREGROUND));
        assert_eq!(underline.height, Some(4));
        assert_eq!(underline.bottom, Some(-1));

        let tab = overrides.resolve_tab(false);
        assert_eq!(tab.container.padding, Some(8));
        assert_eq!(tab.text.fg.as_deref(), Some(DEFAULT_FOREGROUND));
    }

    #[test]
    fn test_override_wins_field_by_field() {
        let mut overrides = StyleOverrides::default();
        overrides.set(
            StyleSlot::Underline,
            StyleSpec {
                height: Some(1),
                ..Default::default()
            },
        );
        let underline = overrides.resolve(StyleSlot::Underline);
        assert_eq!(underline.height, Some(1));
        assert_eq!(underline.bg.as_deref(), Some(DEFAULT_FOREGROUND));
    }

    #[test]
    fn test_active_overrides_stack_after_plain_overrides() {
        let mut overrides = StyleOverrides::default();
        overrides.set(
            StyleSlot::Tab,
            StyleSpec {
                padding: Some(2),
                bg: Some("#111111".into()),
                ..Default::default()
            },
        );
        overrides.set(
            StyleSlot::ActiveTab,
            StyleSpec {
                bg: Some("#222222".into()),
                ..Default::default()
            },
        );
        overrides.set(
            StyleSlot::ActiveTabText,
            StyleSpec {
                bold: Some(true),
                ..Default::default()
            },
        );

        let active = overrides.resolve_tab(true);
        assert_eq!(active.container.padding, Some(2));
        assert_eq!(active.container.bg.as_deref(), Some("#222222"));
        assert_eq!(active.text.bold, Some(true));
        assert_eq!(active.text.fg.as_deref(), Some(DEFAULT_FOREGROUND));

        let inactive = overrides.resolve_tab(false);
        assert_eq!(inactive.container.bg.as_deref(), Some("#111111"));
        assert_eq!(inactive.text.bold, None);
    }

    #[test]
    fn test_get_set_cover_every_slot() {
        let mut overrides = StyleOverrides::default();
        for slot in StyleSlot::ALL {
            assert!(overrides.get(slot).is_none());
            overrides.set(slot, StyleSpec::default());
            assert!(overrides.get(slot).is_some());
        }
    }
}
