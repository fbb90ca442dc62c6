//! Page label types
//!
//! Defines the tagged label type emitted by the window generator.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text form of the ellipsis marker, as rendered and serialized
pub const ELLIPSIS: &str = "...";

/// A single slot in a pagination control
///
/// Either a 1-based page number the user can navigate to, or an ellipsis
/// marker standing in for a hidden run of pages. The marker is never a
/// navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// A navigable page number (1-based)
    Page(u32),
    /// A non-interactive truncation marker
    Ellipsis,
}

/// An ordered sequence of page labels, produced fresh per call
pub type Window = Vec<PageLabel>;

impl PageLabel {
    /// Check if this label is the ellipsis marker
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }

    /// Get the page number, if this label is numeric
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Page(n) => Some(*n),
            Self::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

// On the wire a label is either a bare number or the ellipsis string,
// matching what pagination UIs consume.
impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u32(*n),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

impl<'de> Deserialize<'de> for PageLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self::Page(n)),
            Raw::Text(s) if s == ELLIPSIS => Ok(Self::Ellipsis),
            Raw::Text(s) => Err(de::Error::custom(format!("invalid page label: {s:?}"))),
        }
    }
}
