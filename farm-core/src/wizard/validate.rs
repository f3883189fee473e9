use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::Draft;

use super::step::Step;

/// Per-field validation messages, keyed by the camelCase field name shown
/// to the user (array entries use `type_{index}` / `quantity_{index}`).
/// An empty map means the step is valid.
pub type FieldErrors = BTreeMap<String, String>;

/// Computes the validation errors for exactly the fields of `step`.
///
/// Pure: the same draft and step always produce the same map, and the
/// draft is never touched. The controller gates `next()` solely on the
/// emptiness of the result.
pub fn validate(draft: &Draft, step: Step) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        Step::Crop => {
            if missing(&draft.crop_type) {
                errors.insert("cropType".into(), "Please select a crop type".into());
            }
            if missing(&draft.variety) {
                errors.insert("variety".into(), "Please select a variety".into());
            }
            if draft.sowing_date.is_none() {
                errors.insert("sowingDate".into(), "Please enter sowing date".into());
            }
            if draft.season.is_none() {
                errors.insert("season".into(), "Please select growing season".into());
            }
            match draft.field_area {
                Some(area) if area > Decimal::ZERO => {}
                _ => {
                    errors.insert("fieldArea".into(), "Please enter valid field area".into());
                }
            }
        }

        Step::Irrigation => {
            if draft.irrigation_method.is_none() {
                errors.insert(
                    "irrigationMethod".into(),
                    "Please select irrigation method".into(),
                );
            }
            if draft.water_source.is_none() {
                errors.insert("waterSource".into(), "Please select water source".into());
            }
            match draft.irrigation_frequency {
                Some(days) if days >= 1 => {}
                _ => {
                    errors.insert(
                        "irrigationFrequency".into(),
                        "Please enter valid irrigation frequency".into(),
                    );
                }
            }
        }

        Step::Fertilizer => {
            // Entries without a date are draft rows the user has not
            // finished; they are skipped rather than rejected.
            for (index, app) in draft.fertilizer_applications.iter().enumerate() {
                if app.date.is_none() {
                    continue;
                }
                if missing(&app.kind) {
                    errors.insert(
                        format!("type_{index}"),
                        "Please select fertilizer type".into(),
                    );
                }
                match app.quantity {
                    Some(qty) if qty > Decimal::ZERO => {}
                    _ => {
                        errors.insert(
                            format!("quantity_{index}"),
                            "Please enter valid quantity".into(),
                        );
                    }
                }
            }
        }

        Step::Additional => {
            // Everything on this step is optional; only a present-but-invalid
            // value can block advancement.
            if let Some(rate) = draft.seed_rate
                && rate <= Decimal::ZERO
            {
                errors.insert("seedRate".into(), "Please enter valid seed rate".into());
            }
            if let Some(rate) = draft.germination_rate
                && !(Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&rate)
            {
                errors.insert(
                    "germinationRate".into(),
                    "Germination rate must be between 0 and 100".into(),
                );
            }
        }

        // The review step only triggers submission; there is nothing to check.
        Step::Review => {}
    }

    errors
}

fn missing(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|s| s.trim().is_empty())
}
