use serde::{Deserialize, Serialize};

/// How water is delivered to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationMethod {
    Flood,
    Sprinkler,
    Drip,
    Furrow,
    Basin,
}

impl IrrigationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Sprinkler => "sprinkler",
            Self::Drip => "drip",
            Self::Furrow => "furrow",
            Self::Basin => "basin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "flood" => Some(Self::Flood),
            "sprinkler" => Some(Self::Sprinkler),
            "drip" => Some(Self::Drip),
            "furrow" => Some(Self::Furrow),
            "basin" => Some(Self::Basin),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Flood => "Flood irrigation",
            Self::Sprinkler => "Sprinkler system",
            Self::Drip => "Drip irrigation",
            Self::Furrow => "Furrow irrigation",
            Self::Basin => "Basin irrigation",
        }
    }
}

/// Where the irrigation water comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    Borewell,
    Canal,
    River,
    Pond,
    Tubewell,
}

impl WaterSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Borewell => "borewell",
            Self::Canal => "canal",
            Self::River => "river",
            Self::Pond => "pond",
            Self::Tubewell => "tubewell",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "borewell" => Some(Self::Borewell),
            "canal" => Some(Self::Canal),
            "river" => Some(Self::River),
            "pond" => Some(Self::Pond),
            "tubewell" => Some(Self::Tubewell),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Borewell => "Borewell",
            Self::Canal => "Canal water",
            Self::River => "River/stream",
            Self::Pond => "Farm pond",
            Self::Tubewell => "Tube well",
        }
    }
}
