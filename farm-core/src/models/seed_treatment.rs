use serde::{Deserialize, Serialize};

/// Pre-sowing seed treatment tag. A draft carries a set of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedTreatment {
    Fungicide,
    Insecticide,
    Biofertilizer,
    GrowthPromoter,
}

impl SeedTreatment {
    pub const ALL: [SeedTreatment; 4] = [
        Self::Fungicide,
        Self::Insecticide,
        Self::Biofertilizer,
        Self::GrowthPromoter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fungicide => "fungicide",
            Self::Insecticide => "insecticide",
            Self::Biofertilizer => "biofertilizer",
            Self::GrowthPromoter => "growth_promoter",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fungicide" => Some(Self::Fungicide),
            "insecticide" => Some(Self::Insecticide),
            "biofertilizer" => Some(Self::Biofertilizer),
            "growth_promoter" => Some(Self::GrowthPromoter),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fungicide => "Fungicide treatment",
            Self::Insecticide => "Insecticide treatment",
            Self::Biofertilizer => "Bio-fertilizer coating",
            Self::GrowthPromoter => "Growth promoter",
        }
    }
}
