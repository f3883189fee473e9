use serde::{Deserialize, Serialize};

/// Overall weather pattern over the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Normal,
    Drought,
    ExcessRain,
    Hailstorm,
    Frost,
    Cyclone,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Drought => "drought",
            Self::ExcessRain => "excess_rain",
            Self::Hailstorm => "hailstorm",
            Self::Frost => "frost",
            Self::Cyclone => "cyclone",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "drought" => Some(Self::Drought),
            "excess_rain" => Some(Self::ExcessRain),
            "hailstorm" => Some(Self::Hailstorm),
            "frost" => Some(Self::Frost),
            "cyclone" => Some(Self::Cyclone),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Drought => "Drought",
            Self::ExcessRain => "Excess rainfall",
            Self::Hailstorm => "Hailstorm",
            Self::Frost => "Frost",
            Self::Cyclone => "Cyclone/storm",
        }
    }
}
