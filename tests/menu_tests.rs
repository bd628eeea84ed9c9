//! Menu loop tests
//!
//! The loop is driven end-to-end with scripted input and an in-memory
//! output sink. Tests verify:
//! - Selection dispatch, exit, and end-of-input handling
//! - The add flow, including validate-and-retry prompting
//! - The edit flow, including blank-keeps-current semantics
//! - Filter/aggregate rendering through the menu

use std::fs;
use std::io::Cursor;

use rosterdb::{Config, Menu, RosterStore, StudentRecord};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, RosterStore) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_path(temp_dir.path().join("data.csv"))
        .build();
    let store = RosterStore::open(config).unwrap();
    (temp_dir, store)
}

fn sample_record(id: &str, course: &str, cwa: f64, status: &str, credits: u32) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        course: course.to_string(),
        year: 2,
        cwa,
        status: status.to_string(),
        earned_credits: credits,
    }
}

/// Run the menu over scripted input lines, returning everything written
fn run_menu(store: &mut RosterStore, lines: &[&str]) -> String {
    let script = lines.join("\n") + "\n";
    let input = Cursor::new(script);
    let mut output = Vec::new();
    Menu::new(store, input, &mut output).run().unwrap();
    String::from_utf8(output).unwrap()
}

// =============================================================================
// Loop Control Tests
// =============================================================================

#[test]
fn test_exit_option_ends_loop() {
    let (_temp, mut store) = setup_temp_store();
    let output = run_menu(&mut store, &["9"]);
    assert_eq!(output.matches("Welcome to Student Central").count(), 1);
}

#[test]
fn test_end_of_input_ends_loop() {
    let (_temp, mut store) = setup_temp_store();
    let input = Cursor::new(String::new());
    let mut output = Vec::new();
    Menu::new(&mut store, input, &mut output).run().unwrap();
    assert_eq!(
        String::from_utf8(output)
            .unwrap()
            .matches("Welcome to Student Central")
            .count(),
        1
    );
}

#[test]
fn test_unrecognized_selection_redisplays_menu() {
    let (_temp, mut store) = setup_temp_store();
    // Non-numeric and out-of-range selections are ignored silently
    let output = run_menu(&mut store, &["banana", "12", "0", "9"]);
    assert_eq!(output.matches("Welcome to Student Central").count(), 4);
}

// =============================================================================
// Add Flow Tests
// =============================================================================

#[test]
fn test_add_student_via_menu() {
    let (_temp, mut store) = setup_temp_store();
    let output = run_menu(
        &mut store,
        &["1", "S1", "Ada", "Lovelace", "CS", "2", "85.5", "enrolled", "120", "9"],
    );

    assert!(output.contains("Student added and written to file successfully."));
    assert_eq!(store.len(), 1);

    let record = store.find_by_id("S1").unwrap();
    assert_eq!(record.first_name, "Ada");
    assert_eq!(record.year, 2);
    assert_eq!(record.cwa, 85.5);
    assert_eq!(record.earned_credits, 120);

    let contents = fs::read_to_string(store.data_path()).unwrap();
    assert_eq!(contents, "S1,Ada,Lovelace,CS,2,85.5,enrolled,120\n");
}

#[test]
fn test_add_reprompts_until_numeric_fields_valid() {
    let (_temp, mut store) = setup_temp_store();
    let output = run_menu(
        &mut store,
        &[
            "1", "S1", "Ada", "Lovelace", "CS",
            // year: out of range, non-numeric, then valid
            "0", "abc", "2",
            // cwa: non-numeric, then valid
            "high", "85.5",
            "enrolled",
            // credits: negative, then valid
            "-5", "120",
            "9",
        ],
    );

    assert!(output.contains("Year must be between 1 and 4"));
    assert!(output.contains("Invalid input. Please enter a numeric value for Year."));
    assert!(output.contains("Invalid input. Please enter a number for CWA."));
    assert!(output.contains("Credits cannot be negative."));

    let record = store.find_by_id("S1").unwrap();
    assert_eq!(record.year, 2);
    assert_eq!(record.cwa, 85.5);
    assert_eq!(record.earned_credits, 120);
}

#[test]
fn test_add_refused_when_full() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_path(temp_dir.path().join("data.csv"))
        .capacity(1)
        .build();
    let mut store = RosterStore::open(config).unwrap();
    store.add(sample_record("S1", "CS", 85.5, "enrolled", 120)).unwrap();

    let output = run_menu(&mut store, &["1", "9"]);
    assert!(output.contains("The roster is full."));
    assert_eq!(store.len(), 1);
}

// =============================================================================
// View Tests
// =============================================================================

#[test]
fn test_view_all_lists_records_in_order() {
    let (_temp, mut store) = setup_temp_store();
    store.add(sample_record("S1", "CS", 85.5, "enrolled", 120)).unwrap();
    store.add(sample_record("S2", "Math", 72.0, "enrolled", 80)).unwrap();

    let output = run_menu(&mut store, &["3", "9"]);
    assert!(output.contains("===== All Students ====="));
    let first = output.find("ID: S1").unwrap();
    let second = output.find("ID: S2").unwrap();
    assert!(first < second);
}

#[test]
fn test_view_all_empty_roster() {
    let (_temp, mut store) = setup_temp_store();
    let output = run_menu(&mut store, &["3", "9"]);
    assert!(output.contains("No students in the roster."));
}

// =============================================================================
// Edit Flow Tests
// =============================================================================

#[test]
fn test_edit_blank_input_keeps_fields() {
    let (_temp, mut store) = setup_temp_store();
    store.add(sample_record("S1", "CS", 85.5, "enrolled", 120)).unwrap();

    // Blank for every field except status
    let output = run_menu(
        &mut store,
        &["2", "S1", "", "", "", "", "", "graduated", "", "9"],
    );
    assert!(output.contains("Current details: ID: S1"));
    assert!(output.contains("Student updated successfully."));

    let record = store.find_by_id("S1").unwrap();
    assert_eq!(record.status, "graduated");
    assert_eq!(record.first_name, "Ada");
    assert_eq!(record.last_name, "Lovelace");
    assert_eq!(record.course, "CS");
    assert_eq!(record.year, 2);
    assert_eq!(record.cwa, 85.5);
    assert_eq!(record.earned_credits, 120);

    // The rewrite persisted the patched record
    let reloaded = RosterStore::open_path(store.data_path()).unwrap();
    assert_eq!(reloaded.find_by_id("S1").unwrap().status, "graduated");
    assert_eq!(reloaded.find_by_id("S1").unwrap().cwa, 85.5);
}

#[test]
fn test_edit_reprompts_on_invalid_year() {
    let (_temp, mut store) = setup_temp_store();
    store.add(sample_record("S1", "CS", 85.5, "enrolled", 120)).unwrap();

    // Year: invalid then valid; everything else kept
    let output = run_menu(
        &mut store,
        &["2", "S1", "", "", "", "seven", "3", "", "", "", "9"],
    );
    assert!(output.contains("Invalid input. Please enter a numeric value for Year."));
    assert_eq!(store.find_by_id("S1").unwrap().year, 3);
}

#[test]
fn test_edit_unknown_id_reports_not_found() {
    let (_temp, mut store) = setup_temp_store();
    store.add(sample_record("S1", "CS", 85.5, "enrolled", 120)).unwrap();

    let output = run_menu(&mut store, &["2", "S9", "9"]);
    assert!(output.contains("Student with ID S9 not found."));
}

#[test]
fn test_edit_empty_roster() {
    let (_temp, mut store) = setup_temp_store();
    let output = run_menu(&mut store, &["2", "9"]);
    assert!(output.contains("No students in the roster to edit."));
}

// =============================================================================
// Filter / Aggregate Rendering Tests
// =============================================================================

#[test]
fn test_filter_by_course_via_menu() {
    let (_temp, mut store) = setup_temp_store();
    store.add(sample_record("S1", "Math", 72.0, "enrolled", 80)).unwrap();

    let output = run_menu(&mut store, &["4", " MATH ", "4", "History", "9"]);
    assert!(output.contains("ID: S1"));
    assert!(output.contains("No students found in this course."));
}

#[test]
fn test_filter_by_status_via_menu() {
    let (_temp, mut store) = setup_temp_store();
    store.add(sample_record("S1", "Math", 72.0, "Enrolled", 80)).unwrap();

    let output = run_menu(&mut store, &["5", "enrolled", "9"]);
    assert!(output.contains("ID: S1"));
}

#[test]
fn test_highest_cwa_via_menu_lists_ties() {
    let (_temp, mut store) = setup_temp_store();
    store.add(sample_record("S1", "CS", 91.25, "enrolled", 120)).unwrap();
    store.add(sample_record("S2", "Math", 70.0, "enrolled", 80)).unwrap();
    store.add(sample_record("S3", "CS", 91.25, "enrolled", 200)).unwrap();

    let output = run_menu(&mut store, &["6", "9"]);
    assert!(output.contains("Highest CWA: 91.25"));
    assert!(output.contains("ID: S1"));
    assert!(output.contains("ID: S3"));
    assert!(!output.contains("ID: S2"));
}

#[test]
fn test_highest_cwa_via_menu_empty_roster() {
    let (_temp, mut store) = setup_temp_store();
    let output = run_menu(&mut store, &["6", "9"]);
    assert!(output.contains("No students in the roster."));
}

#[test]
fn test_average_cwa_via_menu_two_decimals() {
    let (_temp, mut store) = setup_temp_store();
    store.add(sample_record("S1", "Math", 70.0, "enrolled", 80)).unwrap();
    store.add(sample_record("S2", "Math", 80.5, "enrolled", 80)).unwrap();

    let output = run_menu(&mut store, &["7", "9"]);
    assert!(output.contains("Math: 75.25"));
}

#[test]
fn test_graduation_eligibility_via_menu() {
    let (_temp, mut store) = setup_temp_store();
    store.add(sample_record("S1", "CS", 85.5, "enrolled", 400)).unwrap();
    store.add(sample_record("S2", "Math", 72.0, "enrolled", 399)).unwrap();

    let output = run_menu(&mut store, &["8", "9"]);
    assert!(output.contains("Ada Lovelace (CS): 400 credits"));
    assert!(!output.contains("399 credits"));
}
