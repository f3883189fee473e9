use serde::{Deserialize, Serialize};

/// One of the five fixed stages of the data-entry wizard.
///
/// Navigation is linear: `forward` and `back` move one stage at a time and
/// clamp at the ends, so there is no state before [`Step::Crop`] or after
/// [`Step::Review`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Crop,
    Irrigation,
    Fertilizer,
    Additional,
    Review,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Self::Crop,
        Self::Irrigation,
        Self::Fertilizer,
        Self::Additional,
        Self::Review,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// 1-based position, matching the "Step N of 5" wording shown to users.
    pub fn number(&self) -> u8 {
        match self {
            Self::Crop => 1,
            Self::Irrigation => 2,
            Self::Fertilizer => 3,
            Self::Additional => 4,
            Self::Review => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Crop => "Crop Details",
            Self::Irrigation => "Irrigation",
            Self::Fertilizer => "Fertilizer",
            Self::Additional => "Additional",
            Self::Review => "Review",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Crop => "Basic crop information",
            Self::Irrigation => "Water management data",
            Self::Fertilizer => "Fertilizer applications",
            Self::Additional => "Extra farm data",
            Self::Review => "Review and submit",
        }
    }

    /// The next step, clamped at [`Step::Review`].
    pub fn forward(&self) -> Step {
        match self {
            Self::Crop => Self::Irrigation,
            Self::Irrigation => Self::Fertilizer,
            Self::Fertilizer => Self::Additional,
            Self::Additional => Self::Review,
            Self::Review => Self::Review,
        }
    }

    /// The previous step, clamped at [`Step::Crop`].
    pub fn back(&self) -> Step {
        match self {
            Self::Crop => Self::Crop,
            Self::Irrigation => Self::Crop,
            Self::Fertilizer => Self::Irrigation,
            Self::Additional => Self::Fertilizer,
            Self::Review => Self::Additional,
        }
    }
}
