//! Interactive wizard session.
//!
//! A line-oriented loop over any `BufRead`/`Write` pair. Real runs wire it
//! to stdin/stdout; tests feed it a scripted cursor and read the rendered
//! screens back out.

use std::io::{BufRead, Write};

use anyhow::Result;

use farm_core::models::{FertilizerApplication, IrrigationEntry};
use farm_core::store::DraftStore;
use farm_core::{Advance, DraftUpdate, SeedTreatment, SubmissionClient, Wizard};

use crate::utils::{
    normalize_number_input, optional_text, parse_optional_date, parse_optional_decimal,
};
use crate::views;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Set { field: String, value: String },
    Unset { field: String },
    Next,
    Back,
    AddIrrigation,
    EditIrrigation(usize),
    RemoveIrrigation(usize),
    AddFertilizer,
    EditFertilizer(usize),
    RemoveFertilizer(usize),
    Treat(SeedTreatment),
    Review,
    Submit,
    Reset,
    Help,
    Quit,
}

/// Parses a trimmed input line into a [`Command`].
///
/// Errors are user-facing messages, not failures; the session prints them
/// and keeps going.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((h, r)) => (h, r.trim()),
        None => (trimmed, ""),
    };

    let index = |what: &str| -> Result<usize, String> {
        rest.parse()
            .map_err(|_| format!("usage: {what} <number>"))
    };

    match head {
        "show" => Ok(Command::Show),
        "set" => match rest.split_once(char::is_whitespace) {
            Some((field, value)) => Ok(Command::Set {
                field: field.to_string(),
                value: value.trim().to_string(),
            }),
            None if !rest.is_empty() => Ok(Command::Set {
                field: rest.to_string(),
                value: String::new(),
            }),
            None => Err("usage: set <field> <value>".to_string()),
        },
        "unset" => {
            if rest.is_empty() {
                Err("usage: unset <field>".to_string())
            } else {
                Ok(Command::Unset {
                    field: rest.to_string(),
                })
            }
        }
        "next" => Ok(Command::Next),
        "back" | "previous" => Ok(Command::Back),
        "add-irrigation" => Ok(Command::AddIrrigation),
        "edit-irrigation" => index("edit-irrigation").map(Command::EditIrrigation),
        "remove-irrigation" => index("remove-irrigation").map(Command::RemoveIrrigation),
        "add-fertilizer" => Ok(Command::AddFertilizer),
        "edit-fertilizer" => index("edit-fertilizer").map(Command::EditFertilizer),
        "remove-fertilizer" => index("remove-fertilizer").map(Command::RemoveFertilizer),
        "treat" => SeedTreatment::parse(rest).map(Command::Treat).ok_or_else(|| {
            "usage: treat <fungicide|insecticide|biofertilizer|growth_promoter>".to_string()
        }),
        "review" => Ok(Command::Review),
        "submit" => Ok(Command::Submit),
        "reset" => Ok(Command::Reset),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

/// Runs the session until the user quits, the input ends, or a submission
/// succeeds.
pub async fn run<S, R, W>(
    wizard: &mut Wizard<S>,
    client: &dyn SubmissionClient,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    S: DraftStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Farm data entry. Type 'help' for commands.")?;
    render(wizard, out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // end of input: leave quietly, the draft is saved
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match command {
            Command::Quit => {
                writeln!(out, "Draft saved. Come back any time.")?;
                break;
            }
            Command::Help => write!(out, "{}", views::help())?,
            Command::Show => render(wizard, out)?,

            Command::Set { field, value } => {
                // Numbers may arrive with grouping commas; retry without
                // them before giving up, so notes keep their commas.
                let parsed = DraftUpdate::parse(&field, &value)
                    .or_else(|_| DraftUpdate::parse(&field, &normalize_number_input(&value)));
                match parsed {
                    Ok(update) => wizard.update(update),
                    Err(error) => writeln!(out, "{error}")?,
                }
            }
            Command::Unset { field } => match DraftUpdate::parse(&field, "") {
                Ok(update) => wizard.update(update),
                Err(error) => writeln!(out, "{error}")?,
            },

            Command::Next => {
                match wizard.next() {
                    Advance::Moved(_) => {}
                    Advance::Blocked => {
                        writeln!(out, "Please fix the highlighted fields first.")?;
                    }
                }
                render(wizard, out)?;
            }
            Command::Back => {
                wizard.previous();
                render(wizard, out)?;
            }

            Command::AddIrrigation => {
                let entry = prompt_irrigation_entry(input, out)?;
                wizard.update(DraftUpdate::AddIrrigationEntry(entry));
            }
            Command::EditIrrigation(index) => {
                if index >= wizard.draft().irrigation_schedule.len() {
                    writeln!(out, "no watering entry {index}")?;
                } else {
                    let entry = prompt_irrigation_entry(input, out)?;
                    wizard.update(DraftUpdate::ReplaceIrrigationEntry { index, entry });
                }
            }
            Command::RemoveIrrigation(index) => {
                wizard.update(DraftUpdate::RemoveIrrigationEntry(index));
            }

            Command::AddFertilizer => {
                let entry = prompt_fertilizer_entry(input, out)?;
                wizard.update(DraftUpdate::AddFertilizerApplication(entry));
            }
            Command::EditFertilizer(index) => {
                if index >= wizard.draft().fertilizer_applications.len() {
                    writeln!(out, "no fertilizer application {index}")?;
                } else {
                    let entry = prompt_fertilizer_entry(input, out)?;
                    wizard.update(DraftUpdate::ReplaceFertilizerApplication { index, entry });
                }
            }
            Command::RemoveFertilizer(index) => {
                wizard.update(DraftUpdate::RemoveFertilizerApplication(index));
            }

            Command::Treat(tag) => wizard.update(DraftUpdate::ToggleSeedTreatment(tag)),

            Command::Review => write!(out, "{}", views::review_screen(wizard.draft()))?,

            Command::Submit => match wizard.submit(client).await {
                Ok(()) => {
                    writeln!(out, "Data submitted successfully!")?;
                    writeln!(
                        out,
                        "Your farm data has been recorded and the saved draft cleared."
                    )?;
                    return Ok(());
                }
                Err(error) => writeln!(out, "{error}")?,
            },

            Command::Reset => {
                let answer = prompt(
                    input,
                    out,
                    "Clear all form data? This cannot be undone. (y/n): ",
                )?;
                if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                    wizard.reset();
                    writeln!(out, "Form cleared.")?;
                    render(wizard, out)?;
                } else {
                    writeln!(out, "Kept everything.")?;
                }
            }
        }
    }

    Ok(())
}

fn render<S: DraftStore, W: Write>(wizard: &Wizard<S>, out: &mut W) -> Result<()> {
    write!(
        out,
        "\n{}",
        views::step_screen(wizard.draft(), wizard.step(), wizard.errors())
    )?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_irrigation_entry<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<IrrigationEntry> {
    Ok(IrrigationEntry {
        date: parse_optional_date(&prompt(input, out, "  date (YYYY-MM-DD): ")?),
        duration: parse_optional_decimal(&prompt(input, out, "  duration (hours): ")?),
        water_amount: parse_optional_decimal(&prompt(input, out, "  water (litres/acre): ")?),
        notes: optional_text(&prompt(input, out, "  notes: ")?),
    })
}

fn prompt_fertilizer_entry<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<FertilizerApplication> {
    let date = parse_optional_date(&prompt(input, out, "  date (YYYY-MM-DD): ")?);
    let kind = optional_text(&prompt(input, out, "  type (e.g. urea, dap): ")?);
    let quantity = parse_optional_decimal(&prompt(input, out, "  quantity (kg): ")?);
    let method = optional_text(&prompt(input, out, "  method (e.g. broadcast): ")?);
    let cost = parse_optional_decimal(&prompt(input, out, "  cost (₹): ")?);
    let notes = optional_text(&prompt(input, out, "  notes: ")?);
    let photos = prompt(input, out, "  photo URLs (space separated): ")?
        .split_whitespace()
        .map(str::to_string)
        .collect();

    Ok(FertilizerApplication {
        date,
        kind,
        quantity,
        method,
        cost,
        notes,
        photos,
    })
}
