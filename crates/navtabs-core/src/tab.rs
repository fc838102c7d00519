use std::fmt;

use serde::{Deserialize, Serialize};

/// Tab identity. Accepts either a string or an integer in config files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabId::Number(n) => write!(f, "{}", n),
            TabId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TabId {
    fn from(n: i64) -> Self {
        TabId::Number(n)
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        TabId::Text(s.to_string())
    }
}

impl From<String> for TabId {
    fn from(s: String) -> Self {
        TabId::Text(s)
    }
}

/// Display name of a tab: a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabLabel {
    Number(i64),
    Text(String),
}

impl fmt::Display for TabLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabLabel::Number(n) => write!(f, "{}", n),
            TabLabel::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TabLabel {
    fn from(n: i64) -> Self {
        TabLabel::Number(n)
    }
}

impl From<&str> for TabLabel {
    fn from(s: &str) -> Self {
        TabLabel::Text(s.to_string())
    }
}

impl From<String> for TabLabel {
    fn from(s: String) -> Self {
        TabLabel::Text(s)
    }
}

/// One selectable tab.
///
/// `content` is an opaque payload the host renders instead of `name` when
/// present. The core never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabDescriptor<C = ()> {
    pub id: TabId,
    pub name: TabLabel,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub content: Option<C>,
}

impl<C> TabDescriptor<C> {
    pub fn new(id: impl Into<TabId>, name: impl Into<TabLabel>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }
}

/// Reference to the selected tab. Selection is owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveTabRef {
    pub id: TabId,
}

impl ActiveTabRef {
    pub fn new(id: impl Into<TabId>) -> Self {
        Self { id: id.into() }
    }

    pub fn matches<C>(&self, tab: &TabDescriptor<C>) -> bool {
        self.id == tab.id
    }
}

/// Index of the tab whose id matches `active`, if any.
pub fn find_active<C>(tabs: &[TabDescriptor<C>], active: &ActiveTabRef) -> Option<usize> {
    tabs.iter().position(|t| active.matches(t))
}
