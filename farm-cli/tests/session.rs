//! End-to-end session tests: scripted input, captured output, real stores.

use std::io::Cursor;
use std::time::Duration;

use pretty_assertions::assert_eq;

use farm_cli::api::MockApi;
use farm_cli::session;
use farm_core::models::Draft;
use farm_core::store::{DraftStore, MemoryStore};
use farm_core::Wizard;
use farm_store_file::FileStore;
use tempfile::TempDir;

async fn run_script<S: DraftStore>(wizard: &mut Wizard<S>, script: &str) -> String {
    let client = MockApi::with_delay(Duration::ZERO);
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();

    session::run(wizard, &client, &mut input, &mut output)
        .await
        .unwrap();

    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn full_walkthrough_submits_and_clears_the_stored_draft() {
    let dir = TempDir::new().unwrap();
    let mut wizard = Wizard::new(FileStore::new(dir.path()));

    let script = "\
set cropType wheat
set variety hd2967
set sowingDate 2024-12-01
set season rabi
set fieldArea 2.5
next
set irrigationMethod drip
set waterSource borewell
set irrigationFrequency 7
next
next
next
submit
";
    let output = run_script(&mut wizard, script).await;

    assert!(output.contains("Data submitted successfully!"), "{output}");
    // A fresh store over the same directory sees nothing: the blob is gone.
    assert_eq!(FileStore::new(dir.path()).load(), Draft::default());
}

#[tokio::test]
async fn advancing_an_empty_form_is_blocked_with_field_messages() {
    let mut wizard = Wizard::new(MemoryStore::new());

    let output = run_script(&mut wizard, "next\nquit\n").await;

    assert!(output.contains("Please fix the highlighted fields first."));
    assert!(output.contains("! cropType: Please select a crop type"));
    assert!(output.contains("! fieldArea: Please enter valid field area"));
    assert!(output.contains("Step 1 of 5"));
}

#[tokio::test]
async fn submit_off_the_review_step_is_refused() {
    let mut wizard = Wizard::new(MemoryStore::new());

    let output = run_script(&mut wizard, "submit\nquit\n").await;

    assert!(output.contains("submission is only possible from the review step"));
}

#[tokio::test]
async fn reset_requires_confirmation() {
    let mut wizard = Wizard::new(MemoryStore::new());

    // Declined: the field survives.
    let output = run_script(&mut wizard, "set cropType wheat\nreset\nn\nquit\n").await;
    assert!(output.contains("Kept everything."));
    assert_eq!(wizard.draft().crop_type.as_deref(), Some("wheat"));

    // Confirmed: everything is gone and we are back at step one.
    let output = run_script(&mut wizard, "reset\ny\nquit\n").await;
    assert!(output.contains("Form cleared."));
    assert_eq!(*wizard.draft(), Draft::default());
}

#[tokio::test]
async fn fertilizer_entries_are_added_through_prompts() {
    let mut wizard = Wizard::new(MemoryStore::new());

    // add-fertilizer prompts for: date, type, quantity, method, cost,
    // notes, photos.
    let script = "\
add-fertilizer
2024-12-10
urea
50
broadcast
1,350
first top dressing

quit
";
    let _ = run_script(&mut wizard, script).await;

    let apps = &wizard.draft().fertilizer_applications;
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].kind.as_deref(), Some("urea"));
    assert_eq!(apps[0].cost, Some(rust_decimal_macros::dec!(1350)));
    assert!(apps[0].photos.is_empty());
}

#[tokio::test]
async fn draft_edits_survive_a_session_restart() {
    let dir = TempDir::new().unwrap();

    let mut first = Wizard::new(FileStore::new(dir.path()));
    run_script(&mut first, "set cropType rice\nset fieldArea 3\nquit\n").await;

    // New wizard over the same directory: draft restored, step reset.
    let second = Wizard::new(FileStore::new(dir.path()));
    assert_eq!(second.draft().crop_type.as_deref(), Some("rice"));
    assert_eq!(second.step(), farm_core::Step::Crop);
}
