use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{IrrigationMethod, Season, SeedTreatment, WaterSource, WeatherCondition};

/// One planned or past watering of the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IrrigationEntry {
    pub date: Option<NaiveDate>,
    /// Hours the water was running.
    pub duration: Option<Decimal>,
    /// Litres per acre.
    pub water_amount: Option<Decimal>,
    pub notes: Option<String>,
}

/// One fertilizer application, with optional photo evidence.
///
/// Photos are opaque URL references; the record never owns binary data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FertilizerApplication {
    pub date: Option<NaiveDate>,
    /// Fertilizer product, e.g. "urea", "dap", "vermicompost".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Kilograms applied.
    pub quantity: Option<Decimal>,
    /// Application method, e.g. "broadcast", "fertigation".
    pub method: Option<String>,
    /// Rupees spent on this application.
    pub cost: Option<Decimal>,
    pub notes: Option<String>,
    pub photos: Vec<String>,
}

/// The single accumulating record of everything the farmer enters across
/// the wizard's steps. Fields are grouped by step but stored flat, and the
/// whole record round-trips through the draft store as one JSON blob with
/// camelCase keys.
///
/// Every field is optional: a fresh draft is all-`None`/empty, and the
/// step validator decides what must be present before a step may advance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    // Crop details (step 1)
    pub crop_type: Option<String>,
    pub variety: Option<String>,
    pub sowing_date: Option<NaiveDate>,
    pub season: Option<Season>,
    /// Acres; must be positive when present.
    pub field_area: Option<Decimal>,
    pub expected_harvest: Option<NaiveDate>,
    pub crop_notes: Option<String>,

    // Irrigation (step 2)
    pub irrigation_method: Option<IrrigationMethod>,
    pub water_source: Option<WaterSource>,
    /// Days between irrigations; at least 1 when present.
    pub irrigation_frequency: Option<u32>,
    /// Litres per acre per irrigation.
    pub water_amount: Option<Decimal>,
    /// Hours per irrigation.
    pub irrigation_duration: Option<Decimal>,
    pub is_automated: bool,
    pub has_moisture_monitoring: bool,
    pub irrigation_schedule: Vec<IrrigationEntry>,

    // Fertilizer (step 3)
    pub fertilizer_applications: Vec<FertilizerApplication>,

    // Additional data (step 4)
    pub soil_preparation: Option<String>,
    pub preparation_cost: Option<Decimal>,
    pub preparation_date: Option<NaiveDate>,
    /// Kilograms of seed per acre; non-negative when present.
    pub seed_rate: Option<Decimal>,
    pub seed_cost: Option<Decimal>,
    /// Observed germination percentage, 0-100 when present.
    pub germination_rate: Option<Decimal>,
    pub seed_treatments: Vec<SeedTreatment>,
    pub pest_management: Option<String>,
    /// Number of pesticide sprays.
    pub pesticide_applications: Option<u32>,
    pub pest_control_cost: Option<Decimal>,
    pub weather_condition: Option<WeatherCondition>,
    /// Cumulative rainfall in millimetres.
    pub total_rainfall: Option<Decimal>,
    pub extreme_weather_days: Option<u32>,
    pub challenges: Option<String>,
    pub success_factors: Option<String>,
    pub future_plans: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let draft = Draft {
            crop_type: Some("wheat".to_string()),
            field_area: Some(dec!(2.5)),
            sowing_date: Some(date(2024, 12, 1)),
            ..Default::default()
        };

        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["cropType"], "wheat");
        assert_eq!(json["fieldArea"], "2.5");
        assert_eq!(json["sowingDate"], "2024-12-01");
        assert_eq!(json["isAutomated"], false);
    }

    #[test]
    fn fertilizer_kind_uses_type_key() {
        let app = FertilizerApplication {
            kind: Some("urea".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&app).unwrap();

        assert_eq!(json["type"], "urea");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn missing_keys_deserialize_to_defaults() {
        // A blob written by an older or partial client must still load.
        let draft: Draft = serde_json::from_str(r#"{"cropType":"rice"}"#).unwrap();

        assert_eq!(draft.crop_type.as_deref(), Some("rice"));
        assert_eq!(draft.field_area, None);
        assert!(draft.fertilizer_applications.is_empty());
        assert!(!draft.is_automated);
    }

    #[test]
    fn enums_round_trip_as_snake_case_tags() {
        let draft = Draft {
            season: Some(Season::Rabi),
            irrigation_method: Some(IrrigationMethod::Drip),
            water_source: Some(WaterSource::Borewell),
            weather_condition: Some(WeatherCondition::ExcessRain),
            seed_treatments: vec![SeedTreatment::Fungicide, SeedTreatment::GrowthPromoter],
            ..Default::default()
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["season"], "rabi");
        assert_eq!(json["weatherCondition"], "excess_rain");
        assert_eq!(json["seedTreatments"][1], "growth_promoter");

        let back: Draft = serde_json::from_value(json).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn full_draft_round_trips() {
        let draft = Draft {
            crop_type: Some("rice".to_string()),
            variety: Some("basmati".to_string()),
            sowing_date: Some(date(2024, 6, 15)),
            season: Some(Season::Kharif),
            field_area: Some(dec!(3.25)),
            irrigation_schedule: vec![IrrigationEntry {
                date: Some(date(2024, 6, 20)),
                duration: Some(dec!(2)),
                water_amount: Some(dec!(1000)),
                notes: Some("first watering".to_string()),
            }],
            fertilizer_applications: vec![FertilizerApplication {
                date: Some(date(2024, 7, 1)),
                kind: Some("urea".to_string()),
                quantity: Some(dec!(50)),
                cost: Some(dec!(1350)),
                photos: vec!["blob:abc123".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };

        let json = serde_json::to_string(&draft).unwrap();
        let back: Draft = serde_json::from_str(&json).unwrap();

        assert_eq!(back, draft);
    }
}
