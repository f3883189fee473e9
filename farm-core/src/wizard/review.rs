use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Draft;

const NOT_SPECIFIED: &str = "Not specified";

/// One labelled line of the review screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub label: String,
    pub value: String,
}

/// One titled group of rows (Crop Details, Irrigation, …).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSection {
    pub title: &'static str,
    pub rows: Vec<ReviewRow>,
}

/// Human-readable projection of the full draft, shown at the final step.
///
/// Building a summary never touches the draft and never fails: absent
/// fields render as a literal "Not specified". The completeness figure is
/// informational only and has no effect on whether submission is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub sections: Vec<ReviewSection>,
    /// Share of recognized scalar fields that are filled in, 0-100.
    pub completeness_percent: u8,
}

impl ReviewSummary {
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            sections: vec![
                crop_section(draft),
                irrigation_section(draft),
                fertilizer_section(draft),
                additional_section(draft),
            ],
            completeness_percent: completeness_percent(draft),
        }
    }
}

fn row(label: &str, value: String) -> ReviewRow {
    ReviewRow {
        label: label.to_string(),
        value,
    }
}

fn or_not_specified(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_SPECIFIED.to_string(),
    }
}

fn text(value: &Option<String>) -> String {
    or_not_specified(value.clone())
}

/// `DD Mon YYYY`, or the placeholder when absent.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d %b %Y").to_string(),
        None => NOT_SPECIFIED.to_string(),
    }
}

/// Rupee amount with Indian digit grouping: `₹12,34,567.50`.
pub fn format_rupees(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let abs = rounded.abs();
    let body = abs.to_string();
    let (int_digits, fraction) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };

    let mut out = String::new();
    if rounded.is_sign_negative() {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&group_indian(int_digits));
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Indian grouping: the last three digits form one group, everything above
/// them is grouped in pairs (`1234567` → `12,34,567`).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn currency(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format_rupees(v),
        None => NOT_SPECIFIED.to_string(),
    }
}

fn quantity(value: Option<Decimal>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v} {unit}"),
        None => NOT_SPECIFIED.to_string(),
    }
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

fn crop_section(draft: &Draft) -> ReviewSection {
    ReviewSection {
        title: "Crop Details",
        rows: vec![
            row("Crop type", text(&draft.crop_type)),
            row("Variety", text(&draft.variety)),
            row("Sowing date", format_date(draft.sowing_date)),
            row(
                "Season",
                or_not_specified(draft.season.map(|s| s.label().to_string())),
            ),
            row("Field area", quantity(draft.field_area, "acres")),
            row("Expected harvest", format_date(draft.expected_harvest)),
            row("Notes", text(&draft.crop_notes)),
        ],
    }
}

fn irrigation_section(draft: &Draft) -> ReviewSection {
    let mut rows = vec![
        row(
            "Method",
            or_not_specified(draft.irrigation_method.map(|m| m.label().to_string())),
        ),
        row(
            "Water source",
            or_not_specified(draft.water_source.map(|s| s.label().to_string())),
        ),
        row(
            "Frequency",
            match draft.irrigation_frequency {
                Some(days) => format!("Every {days} days"),
                None => NOT_SPECIFIED.to_string(),
            },
        ),
        row("Water amount", quantity(draft.water_amount, "litres/acre")),
        row("Duration", quantity(draft.irrigation_duration, "hours")),
        row("Automated", yes_no(draft.is_automated)),
        row("Moisture monitoring", yes_no(draft.has_moisture_monitoring)),
    ];
    for (index, entry) in draft.irrigation_schedule.iter().enumerate() {
        rows.push(row(
            &format!("Watering {}", index + 1),
            format!(
                "{} · {} · {}",
                format_date(entry.date),
                quantity(entry.duration, "hours"),
                quantity(entry.water_amount, "litres/acre"),
            ),
        ));
    }
    ReviewSection {
        title: "Irrigation",
        rows,
    }
}

fn fertilizer_section(draft: &Draft) -> ReviewSection {
    let rows = if draft.fertilizer_applications.is_empty() {
        vec![row("Applications", NOT_SPECIFIED.to_string())]
    } else {
        draft
            .fertilizer_applications
            .iter()
            .enumerate()
            .map(|(index, app)| {
                row(
                    &format!("Application {}", index + 1),
                    format!(
                        "{} · {} · {} · {}",
                        format_date(app.date),
                        text(&app.kind),
                        quantity(app.quantity, "kg"),
                        currency(app.cost),
                    ),
                )
            })
            .collect()
    };
    ReviewSection {
        title: "Fertilizer",
        rows,
    }
}

fn additional_section(draft: &Draft) -> ReviewSection {
    let treatments = if draft.seed_treatments.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        draft
            .seed_treatments
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    ReviewSection {
        title: "Additional",
        rows: vec![
            row("Soil preparation", text(&draft.soil_preparation)),
            row("Preparation cost", currency(draft.preparation_cost)),
            row("Preparation date", format_date(draft.preparation_date)),
            row("Seed rate", quantity(draft.seed_rate, "kg/acre")),
            row("Seed cost", currency(draft.seed_cost)),
            row(
                "Germination rate",
                match draft.germination_rate {
                    Some(rate) => format!("{rate}%"),
                    None => NOT_SPECIFIED.to_string(),
                },
            ),
            row("Seed treatments", treatments),
            row("Pest management", text(&draft.pest_management)),
            row(
                "Pesticide sprays",
                match draft.pesticide_applications {
                    Some(n) => n.to_string(),
                    None => NOT_SPECIFIED.to_string(),
                },
            ),
            row("Pest control cost", currency(draft.pest_control_cost)),
            row(
                "Weather",
                or_not_specified(draft.weather_condition.map(|w| w.label().to_string())),
            ),
            row("Total rainfall", quantity(draft.total_rainfall, "mm")),
            row(
                "Extreme weather days",
                match draft.extreme_weather_days {
                    Some(n) => n.to_string(),
                    None => NOT_SPECIFIED.to_string(),
                },
            ),
            row("Challenges", text(&draft.challenges)),
            row("Success factors", text(&draft.success_factors)),
            row("Future plans", text(&draft.future_plans)),
        ],
    }
}

/// Counts the recognized scalar fields that are filled in.
///
/// Booleans and the two entry arrays are excluded: a `false` checkbox and
/// an empty list are both legitimate answers, not missing data.
fn completeness_percent(draft: &Draft) -> u8 {
    let filled_text =
        |v: &Option<String>| -> bool { v.as_deref().is_some_and(|s| !s.trim().is_empty()) };

    let flags = [
        filled_text(&draft.crop_type),
        filled_text(&draft.variety),
        draft.sowing_date.is_some(),
        draft.season.is_some(),
        draft.field_area.is_some(),
        draft.expected_harvest.is_some(),
        filled_text(&draft.crop_notes),
        draft.irrigation_method.is_some(),
        draft.water_source.is_some(),
        draft.irrigation_frequency.is_some(),
        draft.water_amount.is_some(),
        draft.irrigation_duration.is_some(),
        filled_text(&draft.soil_preparation),
        draft.preparation_cost.is_some(),
        draft.preparation_date.is_some(),
        draft.seed_rate.is_some(),
        draft.seed_cost.is_some(),
        draft.germination_rate.is_some(),
        filled_text(&draft.pest_management),
        draft.pesticide_applications.is_some(),
        draft.pest_control_cost.is_some(),
        draft.weather_condition.is_some(),
        draft.total_rainfall.is_some(),
        draft.extreme_weather_days.is_some(),
        filled_text(&draft.challenges),
        filled_text(&draft.success_factors),
        filled_text(&draft.future_plans),
    ];

    let filled = flags.iter().filter(|&&f| f).count();
    ((filled * 100 + flags.len() / 2) / flags.len()) as u8
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{FertilizerApplication, Season};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rupee_grouping_follows_the_indian_system() {
        assert_eq!(format_rupees(dec!(0)), "₹0");
        assert_eq!(format_rupees(dec!(999)), "₹999");
        assert_eq!(format_rupees(dec!(1000)), "₹1,000");
        assert_eq!(format_rupees(dec!(123456)), "₹1,23,456");
        assert_eq!(format_rupees(dec!(1234567)), "₹12,34,567");
        assert_eq!(format_rupees(dec!(12345678)), "₹1,23,45,678");
    }

    #[test]
    fn rupee_formatting_keeps_paise_and_sign() {
        assert_eq!(format_rupees(dec!(1350.50)), "₹1,350.50");
        assert_eq!(format_rupees(dec!(-2500)), "-₹2,500");
    }

    #[test]
    fn dates_render_as_day_month_year() {
        assert_eq!(format_date(Some(date(2024, 12, 1))), "01 Dec 2024");
        assert_eq!(format_date(None), "Not specified");
    }

    #[test]
    fn empty_draft_renders_placeholders_everywhere() {
        let summary = ReviewSummary::from_draft(&Draft::default());

        assert_eq!(summary.sections.len(), 4);
        let crop = &summary.sections[0];
        assert_eq!(crop.title, "Crop Details");
        assert!(crop.rows.iter().all(|r| r.value == "Not specified"));

        // Booleans always have an answer.
        let irrigation = &summary.sections[1];
        let automated = irrigation
            .rows
            .iter()
            .find(|r| r.label == "Automated")
            .unwrap();
        assert_eq!(automated.value, "No");
    }

    #[test]
    fn filled_fields_replace_the_placeholder() {
        let draft = Draft {
            crop_type: Some("wheat".to_string()),
            season: Some(Season::Rabi),
            field_area: Some(dec!(2.5)),
            sowing_date: Some(date(2024, 12, 1)),
            ..Default::default()
        };

        let summary = ReviewSummary::from_draft(&draft);
        let crop = &summary.sections[0];

        let value = |label: &str| {
            crop.rows
                .iter()
                .find(|r| r.label == label)
                .map(|r| r.value.clone())
                .unwrap()
        };
        assert_eq!(value("Crop type"), "wheat");
        assert_eq!(value("Season"), "Rabi (winter, Nov-Apr)");
        assert_eq!(value("Field area"), "2.5 acres");
        assert_eq!(value("Sowing date"), "01 Dec 2024");
    }

    #[test]
    fn fertilizer_section_lists_each_application() {
        let draft = Draft {
            fertilizer_applications: vec![FertilizerApplication {
                date: Some(date(2024, 12, 10)),
                kind: Some("urea".to_string()),
                quantity: Some(dec!(50)),
                cost: Some(dec!(1350)),
                ..Default::default()
            }],
            ..Default::default()
        };

        let summary = ReviewSummary::from_draft(&draft);
        let fertilizer = &summary.sections[2];

        assert_eq!(fertilizer.rows.len(), 1);
        assert_eq!(fertilizer.rows[0].label, "Application 1");
        assert_eq!(
            fertilizer.rows[0].value,
            "10 Dec 2024 · urea · 50 kg · ₹1,350"
        );
    }

    #[test]
    fn completeness_is_zero_for_an_empty_draft() {
        let summary = ReviewSummary::from_draft(&Draft::default());
        assert_eq!(summary.completeness_percent, 0);
    }

    #[test]
    fn completeness_grows_with_filled_fields() {
        let draft = Draft {
            crop_type: Some("wheat".to_string()),
            variety: Some("hd2967".to_string()),
            sowing_date: Some(date(2024, 12, 1)),
            ..Default::default()
        };

        let summary = ReviewSummary::from_draft(&draft);

        // 3 of 27 recognized fields, rounded to the nearest percent.
        assert_eq!(summary.completeness_percent, 11);
    }

    #[test]
    fn whitespace_text_does_not_count_towards_completeness() {
        let draft = Draft {
            crop_notes: Some("   ".to_string()),
            ..Default::default()
        };

        let summary = ReviewSummary::from_draft(&draft);
        assert_eq!(summary.completeness_percent, 0);
    }
}
