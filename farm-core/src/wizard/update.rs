use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    Draft, FertilizerApplication, IrrigationEntry, IrrigationMethod, Season, SeedTreatment,
    WaterSource, WeatherCondition,
};

/// Error returned when a `field`/`value` string pair cannot be turned into
/// a [`DraftUpdate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpdateParseError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// One permitted mutation of the draft.
///
/// This is the complete vocabulary of changes the wizard accepts: one
/// variant per scalar field (carrying `None` to clear it), and whole-entry
/// operations for the two array fields. Array entries only ever change by
/// append, index removal, or whole-entry replacement, so a single update
/// can never partially overwrite unrelated entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftUpdate {
    // Crop details
    CropType(Option<String>),
    Variety(Option<String>),
    SowingDate(Option<NaiveDate>),
    Season(Option<Season>),
    FieldArea(Option<Decimal>),
    ExpectedHarvest(Option<NaiveDate>),
    CropNotes(Option<String>),

    // Irrigation
    IrrigationMethod(Option<IrrigationMethod>),
    WaterSource(Option<WaterSource>),
    IrrigationFrequency(Option<u32>),
    WaterAmount(Option<Decimal>),
    IrrigationDuration(Option<Decimal>),
    IsAutomated(bool),
    HasMoistureMonitoring(bool),
    AddIrrigationEntry(IrrigationEntry),
    ReplaceIrrigationEntry { index: usize, entry: IrrigationEntry },
    RemoveIrrigationEntry(usize),

    // Fertilizer
    AddFertilizerApplication(FertilizerApplication),
    ReplaceFertilizerApplication {
        index: usize,
        entry: FertilizerApplication,
    },
    RemoveFertilizerApplication(usize),

    // Additional data
    SoilPreparation(Option<String>),
    PreparationCost(Option<Decimal>),
    PreparationDate(Option<NaiveDate>),
    SeedRate(Option<Decimal>),
    SeedCost(Option<Decimal>),
    GerminationRate(Option<Decimal>),
    ToggleSeedTreatment(SeedTreatment),
    PestManagement(Option<String>),
    PesticideApplications(Option<u32>),
    PestControlCost(Option<Decimal>),
    WeatherCondition(Option<WeatherCondition>),
    TotalRainfall(Option<Decimal>),
    ExtremeWeatherDays(Option<u32>),
    Challenges(Option<String>),
    SuccessFactors(Option<String>),
    FuturePlans(Option<String>),
}

impl DraftUpdate {
    /// Applies the mutation to the draft.
    ///
    /// Out-of-range removals and replacements are no-ops; the draft is
    /// left untouched rather than failing.
    pub fn apply(&self, draft: &mut Draft) {
        match self {
            Self::CropType(v) => draft.crop_type = v.clone(),
            Self::Variety(v) => draft.variety = v.clone(),
            Self::SowingDate(v) => draft.sowing_date = *v,
            Self::Season(v) => draft.season = *v,
            Self::FieldArea(v) => draft.field_area = *v,
            Self::ExpectedHarvest(v) => draft.expected_harvest = *v,
            Self::CropNotes(v) => draft.crop_notes = v.clone(),

            Self::IrrigationMethod(v) => draft.irrigation_method = *v,
            Self::WaterSource(v) => draft.water_source = *v,
            Self::IrrigationFrequency(v) => draft.irrigation_frequency = *v,
            Self::WaterAmount(v) => draft.water_amount = *v,
            Self::IrrigationDuration(v) => draft.irrigation_duration = *v,
            Self::IsAutomated(v) => draft.is_automated = *v,
            Self::HasMoistureMonitoring(v) => draft.has_moisture_monitoring = *v,
            Self::AddIrrigationEntry(entry) => draft.irrigation_schedule.push(entry.clone()),
            Self::ReplaceIrrigationEntry { index, entry } => {
                if let Some(slot) = draft.irrigation_schedule.get_mut(*index) {
                    *slot = entry.clone();
                }
            }
            Self::RemoveIrrigationEntry(index) => {
                if *index < draft.irrigation_schedule.len() {
                    draft.irrigation_schedule.remove(*index);
                }
            }

            Self::AddFertilizerApplication(entry) => {
                draft.fertilizer_applications.push(entry.clone());
            }
            Self::ReplaceFertilizerApplication { index, entry } => {
                if let Some(slot) = draft.fertilizer_applications.get_mut(*index) {
                    *slot = entry.clone();
                }
            }
            Self::RemoveFertilizerApplication(index) => {
                if *index < draft.fertilizer_applications.len() {
                    draft.fertilizer_applications.remove(*index);
                }
            }

            Self::SoilPreparation(v) => draft.soil_preparation = v.clone(),
            Self::PreparationCost(v) => draft.preparation_cost = *v,
            Self::PreparationDate(v) => draft.preparation_date = *v,
            Self::SeedRate(v) => draft.seed_rate = *v,
            Self::SeedCost(v) => draft.seed_cost = *v,
            Self::GerminationRate(v) => draft.germination_rate = *v,
            Self::ToggleSeedTreatment(tag) => {
                if let Some(pos) = draft.seed_treatments.iter().position(|t| t == tag) {
                    draft.seed_treatments.remove(pos);
                } else {
                    draft.seed_treatments.push(*tag);
                }
            }
            Self::PestManagement(v) => draft.pest_management = v.clone(),
            Self::PesticideApplications(v) => draft.pesticide_applications = *v,
            Self::PestControlCost(v) => draft.pest_control_cost = *v,
            Self::WeatherCondition(v) => draft.weather_condition = *v,
            Self::TotalRainfall(v) => draft.total_rainfall = *v,
            Self::ExtremeWeatherDays(v) => draft.extreme_weather_days = *v,
            Self::Challenges(v) => draft.challenges = v.clone(),
            Self::SuccessFactors(v) => draft.success_factors = v.clone(),
            Self::FuturePlans(v) => draft.future_plans = v.clone(),
        }
    }

    /// Whether applying this update invalidates the validation error stored
    /// under `key`. The controller drops matching entries so a corrected
    /// field stops showing a stale message immediately.
    pub fn clears_error(&self, key: &str) -> bool {
        match self {
            Self::CropType(_) => key == "cropType",
            Self::Variety(_) => key == "variety",
            Self::SowingDate(_) => key == "sowingDate",
            Self::Season(_) => key == "season",
            Self::FieldArea(_) => key == "fieldArea",
            Self::ExpectedHarvest(_) => key == "expectedHarvest",
            Self::CropNotes(_) => key == "cropNotes",

            Self::IrrigationMethod(_) => key == "irrigationMethod",
            Self::WaterSource(_) => key == "waterSource",
            Self::IrrigationFrequency(_) => key == "irrigationFrequency",
            Self::WaterAmount(_) => key == "waterAmount",
            Self::IrrigationDuration(_) => key == "irrigationDuration",
            Self::IsAutomated(_) | Self::HasMoistureMonitoring(_) => false,
            Self::AddIrrigationEntry(_)
            | Self::ReplaceIrrigationEntry { .. }
            | Self::RemoveIrrigationEntry(_) => false,

            // A freshly appended entry has no errors yet.
            Self::AddFertilizerApplication(_) => false,
            Self::ReplaceFertilizerApplication { index, .. } => {
                key == format!("type_{index}") || key == format!("quantity_{index}")
            }
            // Removal shifts the indices of everything after it, so every
            // per-entry error is stale.
            Self::RemoveFertilizerApplication(_) => {
                key.starts_with("type_") || key.starts_with("quantity_")
            }

            Self::SoilPreparation(_) => key == "soilPreparation",
            Self::PreparationCost(_) => key == "preparationCost",
            Self::PreparationDate(_) => key == "preparationDate",
            Self::SeedRate(_) => key == "seedRate",
            Self::SeedCost(_) => key == "seedCost",
            Self::GerminationRate(_) => key == "germinationRate",
            Self::ToggleSeedTreatment(_) => key == "seedTreatments",
            Self::PestManagement(_) => key == "pestManagement",
            Self::PesticideApplications(_) => key == "pesticideApplications",
            Self::PestControlCost(_) => key == "pestControlCost",
            Self::WeatherCondition(_) => key == "weatherCondition",
            Self::TotalRainfall(_) => key == "totalRainfall",
            Self::ExtremeWeatherDays(_) => key == "extremeWeatherDays",
            Self::Challenges(_) => key == "challenges",
            Self::SuccessFactors(_) => key == "successFactors",
            Self::FuturePlans(_) => key == "futurePlans",
        }
    }

    /// Builds an update from a camelCase field name and a raw string value,
    /// as typed at the CLI. An empty value clears the field.
    ///
    /// Array fields have their own commands and are not reachable here.
    pub fn parse(field: &str, value: &str) -> Result<DraftUpdate, UpdateParseError> {
        let value = value.trim();
        match field {
            "cropType" => Ok(Self::CropType(opt_string(value))),
            "variety" => Ok(Self::Variety(opt_string(value))),
            "sowingDate" => Ok(Self::SowingDate(parse_date("sowingDate", value)?)),
            "season" => Ok(Self::Season(parse_with(
                "season",
                value,
                Season::parse,
                "expected kharif, rabi or zaid",
            )?)),
            "fieldArea" => Ok(Self::FieldArea(parse_decimal("fieldArea", value)?)),
            "expectedHarvest" => Ok(Self::ExpectedHarvest(parse_date("expectedHarvest", value)?)),
            "cropNotes" => Ok(Self::CropNotes(opt_string(value))),

            "irrigationMethod" => Ok(Self::IrrigationMethod(parse_with(
                "irrigationMethod",
                value,
                IrrigationMethod::parse,
                "expected flood, sprinkler, drip, furrow or basin",
            )?)),
            "waterSource" => Ok(Self::WaterSource(parse_with(
                "waterSource",
                value,
                WaterSource::parse,
                "expected borewell, canal, river, pond or tubewell",
            )?)),
            "irrigationFrequency" => Ok(Self::IrrigationFrequency(parse_u32(
                "irrigationFrequency",
                value,
            )?)),
            "waterAmount" => Ok(Self::WaterAmount(parse_decimal("waterAmount", value)?)),
            "irrigationDuration" => Ok(Self::IrrigationDuration(parse_decimal(
                "irrigationDuration",
                value,
            )?)),
            "isAutomated" => Ok(Self::IsAutomated(parse_bool("isAutomated", value)?)),
            "hasMoistureMonitoring" => Ok(Self::HasMoistureMonitoring(parse_bool(
                "hasMoistureMonitoring",
                value,
            )?)),

            "soilPreparation" => Ok(Self::SoilPreparation(opt_string(value))),
            "preparationCost" => Ok(Self::PreparationCost(parse_decimal(
                "preparationCost",
                value,
            )?)),
            "preparationDate" => Ok(Self::PreparationDate(parse_date("preparationDate", value)?)),
            "seedRate" => Ok(Self::SeedRate(parse_decimal("seedRate", value)?)),
            "seedCost" => Ok(Self::SeedCost(parse_decimal("seedCost", value)?)),
            "germinationRate" => Ok(Self::GerminationRate(parse_decimal(
                "germinationRate",
                value,
            )?)),
            "pestManagement" => Ok(Self::PestManagement(opt_string(value))),
            "pesticideApplications" => Ok(Self::PesticideApplications(parse_u32(
                "pesticideApplications",
                value,
            )?)),
            "pestControlCost" => Ok(Self::PestControlCost(parse_decimal(
                "pestControlCost",
                value,
            )?)),
            "weatherCondition" => Ok(Self::WeatherCondition(parse_with(
                "weatherCondition",
                value,
                WeatherCondition::parse,
                "expected normal, drought, excess_rain, hailstorm, frost or cyclone",
            )?)),
            "totalRainfall" => Ok(Self::TotalRainfall(parse_decimal("totalRainfall", value)?)),
            "extremeWeatherDays" => Ok(Self::ExtremeWeatherDays(parse_u32(
                "extremeWeatherDays",
                value,
            )?)),
            "challenges" => Ok(Self::Challenges(opt_string(value))),
            "successFactors" => Ok(Self::SuccessFactors(opt_string(value))),
            "futurePlans" => Ok(Self::FuturePlans(opt_string(value))),

            other => Err(UpdateParseError::UnknownField(other.to_string())),
        }
    }
}

fn opt_string(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_decimal(field: &'static str, value: &str) -> Result<Option<Decimal>, UpdateParseError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|e: rust_decimal::Error| UpdateParseError::InvalidValue {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_u32(field: &'static str, value: &str) -> Result<Option<u32>, UpdateParseError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|e: std::num::ParseIntError| UpdateParseError::InvalidValue {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, UpdateParseError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| UpdateParseError::InvalidValue {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, UpdateParseError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "" => Ok(false),
        _ => Err(UpdateParseError::InvalidValue {
            field,
            value: value.to_string(),
            reason: "expected yes or no".to_string(),
        }),
    }
}

fn parse_with<T>(
    field: &'static str,
    value: &str,
    parser: fn(&str) -> Option<T>,
    reason: &str,
) -> Result<Option<T>, UpdateParseError> {
    if value.is_empty() {
        return Ok(None);
    }
    parser(value).map(Some).ok_or_else(|| UpdateParseError::InvalidValue {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    })
}
