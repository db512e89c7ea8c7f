//! Closed identifier sets for modes and projects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// =============================================================================
// MODE ID
// =============================================================================

/// One of the three studio modes.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ModeId {
    /// Naming and storyframe work.
    #[default]
    Brand,
    /// Site and funnel design.
    Web,
    /// Decks and visual systems.
    Visual,
}

impl ModeId {
    /// All modes in display order.
    pub const ALL: [ModeId; 3] = [Self::Brand, Self::Web, Self::Visual];

    /// Wire name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Web => "web",
            Self::Visual => "visual",
        }
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brand" => Ok(Self::Brand),
            "web" => Ok(Self::Web),
            "visual" => Ok(Self::Visual),
            _ => Err(ModelError::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// PROJECT ID
// =============================================================================

/// One of the three case studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectId {
    /// Fashion commerce launch.
    Zigzag,
    /// Global marketplace operations.
    Gmarket,
    /// Travel and lifestyle rebuild.
    Travel,
}

impl ProjectId {
    /// All projects in board order.
    pub const ALL: [ProjectId; 3] = [Self::Zigzag, Self::Gmarket, Self::Travel];

    /// Wire name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zigzag => "zigzag",
            Self::Gmarket => "gmarket",
            Self::Travel => "travel",
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zigzag" => Ok(Self::Zigzag),
            "gmarket" => Ok(Self::Gmarket),
            "travel" => Ok(Self::Travel),
            _ => Err(ModelError::UnknownProject {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parsing_is_case_insensitive() {
        assert_eq!("Brand".parse::<ModeId>(), Ok(ModeId::Brand));
        assert_eq!(" web ".parse::<ModeId>(), Ok(ModeId::Web));
        assert_eq!("VISUAL".parse::<ModeId>(), Ok(ModeId::Visual));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "print".parse::<ModeId>().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownMode {
                name: "print".to_string()
            }
        );

        let err = "rakuten".parse::<ProjectId>().unwrap_err();
        assert!(err.to_string().contains("rakuten"));
    }

    #[test]
    fn display_matches_wire_name() {
        for mode in ModeId::ALL {
            assert_eq!(mode.to_string().parse::<ModeId>(), Ok(mode));
        }
        for project in ProjectId::ALL {
            assert_eq!(project.to_string().parse::<ProjectId>(), Ok(project));
        }
    }

    #[test]
    fn default_mode_is_brand() {
        assert_eq!(ModeId::default(), ModeId::Brand);
    }
}
