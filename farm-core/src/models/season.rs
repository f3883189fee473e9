use serde::{Deserialize, Serialize};

/// Indian cropping season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kharif => "kharif",
            Self::Rabi => "rabi",
            Self::Zaid => "zaid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "kharif" => Some(Self::Kharif),
            "rabi" => Some(Self::Rabi),
            "zaid" => Some(Self::Zaid),
            _ => None,
        }
    }

    /// Human-readable name with the months the season spans.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kharif => "Kharif (monsoon, Jun-Oct)",
            Self::Rabi => "Rabi (winter, Nov-Apr)",
            Self::Zaid => "Zaid (summer, Apr-Jun)",
        }
    }
}
