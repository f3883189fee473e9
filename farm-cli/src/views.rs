//! Pure text rendering for the interactive session.
//!
//! Everything here takes state in and returns a `String`; the session loop
//! decides where it goes. Keeping rendering side-effect free makes the
//! screens directly assertable in tests.

use std::fmt::Write;

use farm_core::models::Draft;
use farm_core::{FieldErrors, ReviewSummary, Step};

/// One-line progress header plus step markers, e.g.
///
/// ```text
/// Step 2 of 5 · Irrigation — Water management data
///   [x] Crop Details  [>] Irrigation  [ ] Fertilizer  [ ] Additional  [ ] Review
/// ```
pub fn progress(step: Step) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Step {} of {} · {} — {}",
        step.number(),
        Step::COUNT,
        step.title(),
        step.description()
    );

    let _ = write!(out, " ");
    for s in Step::ALL {
        let marker = if s < step {
            "[x]"
        } else if s == step {
            "[>]"
        } else {
            "[ ]"
        };
        let _ = write!(out, " {marker} {}", s.title());
    }
    out.push('\n');
    out
}

/// camelCase names of the fields the `set` command accepts on each step.
pub fn settable_fields(step: Step) -> &'static [&'static str] {
    match step {
        Step::Crop => &[
            "cropType",
            "variety",
            "sowingDate",
            "season",
            "fieldArea",
            "expectedHarvest",
            "cropNotes",
        ],
        Step::Irrigation => &[
            "irrigationMethod",
            "waterSource",
            "irrigationFrequency",
            "waterAmount",
            "irrigationDuration",
            "isAutomated",
            "hasMoistureMonitoring",
        ],
        Step::Fertilizer => &[],
        Step::Additional => &[
            "soilPreparation",
            "preparationCost",
            "preparationDate",
            "seedRate",
            "seedCost",
            "germinationRate",
            "pestManagement",
            "pesticideApplications",
            "pestControlCost",
            "weatherCondition",
            "totalRainfall",
            "extremeWeatherDays",
            "challenges",
            "successFactors",
            "futurePlans",
        ],
        Step::Review => &[],
    }
}

/// The current step's form: fields with their present values, any
/// validation errors, and the commands that make sense here.
pub fn step_screen(draft: &Draft, step: Step, errors: &FieldErrors) -> String {
    let mut out = progress(step);
    out.push('\n');

    match step {
        Step::Review => {
            out.push_str(&review_screen(draft));
        }
        Step::Fertilizer => {
            if draft.fertilizer_applications.is_empty() {
                out.push_str("  No fertilizer applications recorded yet.\n");
            }
            for (index, app) in draft.fertilizer_applications.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  [{index}] date={} type={} quantity={} method={} cost={} photos={}",
                    display_opt(&app.date),
                    display_opt_str(&app.kind),
                    display_opt(&app.quantity),
                    display_opt_str(&app.method),
                    display_opt(&app.cost),
                    app.photos.len(),
                );
            }
            out.push_str(
                "\n  Commands: add-fertilizer, edit-fertilizer <n>, remove-fertilizer <n>\n",
            );
        }
        _ => {
            for field in settable_fields(step) {
                let _ = writeln!(out, "  {field}: {}", field_value(draft, field));
            }
            if step == Step::Irrigation {
                let _ = writeln!(
                    out,
                    "  irrigationSchedule: {} entries (add-irrigation, edit-irrigation <n>, remove-irrigation <n>)",
                    draft.irrigation_schedule.len()
                );
            }
            if step == Step::Additional {
                let tags: Vec<&str> = draft.seed_treatments.iter().map(|t| t.as_str()).collect();
                let _ = writeln!(
                    out,
                    "  seedTreatments: [{}] (toggle with: treat <tag>)",
                    tags.join(", ")
                );
            }
        }
    }

    if !errors.is_empty() {
        out.push('\n');
        out.push_str(&render_errors(errors));
    }
    out
}

/// Field-level messages, one per line, in stable (alphabetical) order.
pub fn render_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (field, message) in errors {
        let _ = writeln!(out, "  ! {field}: {message}");
    }
    out
}

/// The full review summary with the completeness figure.
pub fn review_screen(draft: &Draft) -> String {
    let summary = ReviewSummary::from_draft(draft);
    let mut out = String::new();

    for section in &summary.sections {
        let _ = writeln!(out, "  {}", section.title);
        for row in &section.rows {
            let _ = writeln!(out, "    {}: {}", row.label, row.value);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "  Completeness: {}%", summary.completeness_percent);
    out.push_str("  Type 'submit' to send, or 'back' to keep editing.\n");
    out
}

pub fn help() -> String {
    concat!(
        "Commands:\n",
        "  show                       redraw the current step\n",
        "  set <field> <value>        set a field (empty value clears it)\n",
        "  unset <field>              clear a field\n",
        "  next / back                move between steps\n",
        "  add-irrigation             append a watering entry (prompts)\n",
        "  edit-irrigation <n>        re-enter watering entry n\n",
        "  remove-irrigation <n>      delete watering entry n\n",
        "  add-fertilizer             append a fertilizer application (prompts)\n",
        "  edit-fertilizer <n>        re-enter application n\n",
        "  remove-fertilizer <n>      delete application n\n",
        "  treat <tag>                toggle a seed treatment tag\n",
        "  review                     show the full summary\n",
        "  submit                     send the draft (review step only)\n",
        "  reset                      clear the whole form (asks first)\n",
        "  help                       this text\n",
        "  quit                       leave; the draft stays saved\n",
    )
    .to_string()
}

fn field_value(draft: &Draft, field: &str) -> String {
    match field {
        "cropType" => display_opt_str(&draft.crop_type),
        "variety" => display_opt_str(&draft.variety),
        "sowingDate" => display_opt(&draft.sowing_date),
        "season" => draft
            .season
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "-".to_string()),
        "fieldArea" => display_opt(&draft.field_area),
        "expectedHarvest" => display_opt(&draft.expected_harvest),
        "cropNotes" => display_opt_str(&draft.crop_notes),
        "irrigationMethod" => draft
            .irrigation_method
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "-".to_string()),
        "waterSource" => draft
            .water_source
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "-".to_string()),
        "irrigationFrequency" => display_opt(&draft.irrigation_frequency),
        "waterAmount" => display_opt(&draft.water_amount),
        "irrigationDuration" => display_opt(&draft.irrigation_duration),
        "isAutomated" => draft.is_automated.to_string(),
        "hasMoistureMonitoring" => draft.has_moisture_monitoring.to_string(),
        "soilPreparation" => display_opt_str(&draft.soil_preparation),
        "preparationCost" => display_opt(&draft.preparation_cost),
        "preparationDate" => display_opt(&draft.preparation_date),
        "seedRate" => display_opt(&draft.seed_rate),
        "seedCost" => display_opt(&draft.seed_cost),
        "germinationRate" => display_opt(&draft.germination_rate),
        "pestManagement" => display_opt_str(&draft.pest_management),
        "pesticideApplications" => display_opt(&draft.pesticide_applications),
        "pestControlCost" => display_opt(&draft.pest_control_cost),
        "weatherCondition" => draft
            .weather_condition
            .map(|w| w.as_str().to_string())
            .unwrap_or_else(|| "-".to_string()),
        "totalRainfall" => display_opt(&draft.total_rainfall),
        "extremeWeatherDays" => display_opt(&draft.extreme_weather_days),
        "challenges" => display_opt_str(&draft.challenges),
        "successFactors" => display_opt_str(&draft.success_factors),
        "futurePlans" => display_opt_str(&draft.future_plans),
        _ => "-".to_string(),
    }
}

fn display_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn display_opt_str(value: &Option<String>) -> String {
    value
        .clone()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "-".to_string())
}
