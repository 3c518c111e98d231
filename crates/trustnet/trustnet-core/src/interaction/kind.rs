use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of an observed interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Collaboration,
    Endorsement,
    Profile,
    Other,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 4] = [
        InteractionKind::Collaboration,
        InteractionKind::Endorsement,
        InteractionKind::Profile,
        InteractionKind::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collaboration => "collaboration",
            Self::Endorsement => "endorsement",
            Self::Profile => "profile",
            Self::Other => "other",
        }
    }

    /// Map a free-text type tag onto a kind. Unknown tags become `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "collaboration" => Self::Collaboration,
            "endorsement" => Self::Endorsement,
            "profile" => Self::Profile,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
