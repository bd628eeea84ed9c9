//! Menu Module
//!
//! The interactive read-dispatch-repeat loop.
//!
//! ## Responsibilities
//! - Render the numbered option menu and read a selection each cycle
//! - Dispatch to store operations until the exit option is chosen
//! - Collect field values for add/edit through validate-and-retry prompts
//!
//! The loop is generic over its input/output pair so tests can drive it
//! with in-memory buffers instead of stdin/stdout. Store errors are
//! reported on the output sink and the loop continues; only a failure of
//! the output sink itself ends the loop with an error.

mod prompts;

use std::io::{BufRead, Write};

use crate::error::{Result, RosterError};
use crate::record::{RecordPatch, StudentRecord};
use crate::store::RosterStore;

/// The option menu, rendered before every selection
const MENU: &str = "\
=============================================
\tWelcome to Student Central
=============================================
Your options for this system are listed below
\t1> Add new student.
\t2> Edit student.
\t3> View all students.
\t4> Filter by course.
\t5> Filter by status.
\t6> Highest CWA.
\t7> Average CWA for each course.
\t8> Credit / Graduation Eligibility.
\t9> Exit
Enter an option
";

/// The interactive menu loop over a store
pub struct Menu<'a, R, W> {
    store: &'a mut RosterStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu over the given store and I/O pair
    pub fn new(store: &'a mut RosterStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the loop until the exit option or end of input
    ///
    /// An unrecognized or non-numeric selection is ignored and the menu
    /// redisplays.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(line) = prompts::read_line(&mut self.input)? else {
                break;
            };
            let Ok(selection) = line.trim().parse::<u32>() else {
                continue;
            };

            match selection {
                1 => self.add_student()?,
                2 => self.edit_student()?,
                3 => self.view_all()?,
                4 => self.filter_by_course()?,
                5 => self.filter_by_status()?,
                6 => self.highest_cwa()?,
                7 => self.average_cwa_by_course()?,
                8 => self.graduation_eligibility()?,
                9 => break,
                _ => {}
            }
        }
        Ok(())
    }

    // =========================================================================
    // Option Handlers
    // =========================================================================

    /// Option 1: prompt for every field and add a record
    fn add_student(&mut self) -> Result<()> {
        if self.store.is_full() {
            writeln!(self.output, "The roster is full.")?;
            return Ok(());
        }

        let Some(id) = prompts::text(&mut self.input, &mut self.output, "Enter ID: ")? else {
            return Ok(());
        };
        let Some(first_name) =
            prompts::text(&mut self.input, &mut self.output, "Enter First Name: ")?
        else {
            return Ok(());
        };
        let Some(last_name) =
            prompts::text(&mut self.input, &mut self.output, "Enter Last Name: ")?
        else {
            return Ok(());
        };
        let Some(course) = prompts::text(&mut self.input, &mut self.output, "Enter Course: ")?
        else {
            return Ok(());
        };
        let Some(year) = prompts::year(&mut self.input, &mut self.output)? else {
            return Ok(());
        };
        let Some(cwa) = prompts::cwa(&mut self.input, &mut self.output)? else {
            return Ok(());
        };
        let Some(status) = prompts::text(&mut self.input, &mut self.output, "Enter Status: ")?
        else {
            return Ok(());
        };
        let Some(earned_credits) = prompts::credits(&mut self.input, &mut self.output)? else {
            return Ok(());
        };

        let record = StudentRecord {
            id,
            first_name,
            last_name,
            course,
            year,
            cwa,
            status,
            earned_credits,
        };

        match self.store.add(record) {
            Ok(()) => {
                writeln!(self.output, "Student added and written to file successfully.")?;
            }
            Err(RosterError::CapacityExceeded { .. }) => {
                writeln!(self.output, "The roster is full.")?;
            }
            Err(e) => {
                // The record was admitted in memory; only the file append failed
                writeln!(self.output, "Error writing to file: {e}")?;
            }
        }
        Ok(())
    }

    /// Option 2: look up a record by id and patch it field by field
    ///
    /// Blank input keeps the current value; numeric fields re-prompt until
    /// valid, the same discipline as add.
    fn edit_student(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No students in the roster to edit.")?;
            return Ok(());
        }

        let Some(id) = prompts::text(
            &mut self.input,
            &mut self.output,
            "Enter the Student ID to edit: ",
        )?
        else {
            return Ok(());
        };

        let Some(current) = self.store.find_by_id(&id).cloned() else {
            writeln!(self.output, "Student with ID {id} not found.")?;
            return Ok(());
        };
        writeln!(self.output, "Current details: {current}")?;

        let patch = RecordPatch {
            first_name: prompts::optional_text(
                &mut self.input,
                &mut self.output,
                &format!("Enter new First Name ({}): ", current.first_name),
            )?,
            last_name: prompts::optional_text(
                &mut self.input,
                &mut self.output,
                &format!("Enter new Last Name ({}): ", current.last_name),
            )?,
            course: prompts::optional_text(
                &mut self.input,
                &mut self.output,
                &format!("Enter new Course ({}): ", current.course),
            )?,
            year: prompts::optional_year(&mut self.input, &mut self.output, current.year)?,
            cwa: prompts::optional_cwa(&mut self.input, &mut self.output, current.cwa)?,
            status: prompts::optional_text(
                &mut self.input,
                &mut self.output,
                &format!("Enter new Status ({}): ", current.status),
            )?,
            earned_credits: prompts::optional_credits(
                &mut self.input,
                &mut self.output,
                current.earned_credits,
            )?,
        };

        match self.store.update(&id, patch) {
            Ok(()) => {
                writeln!(self.output, "Student updated successfully.")?;
                writeln!(self.output, "All changes saved to file successfully.")?;
            }
            Err(e) => {
                writeln!(self.output, "Error saving to file: {e}")?;
            }
        }
        Ok(())
    }

    /// Option 3: list every record in insertion order
    fn view_all(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No students in the roster.")?;
            return Ok(());
        }

        writeln!(self.output, "===== All Students =====")?;
        for record in self.store.iter() {
            writeln!(self.output, "{record}")?;
        }
        writeln!(self.output, "========================")?;
        Ok(())
    }

    /// Option 4: records matching a course, case-insensitive and trimmed
    fn filter_by_course(&mut self) -> Result<()> {
        let Some(course) = prompts::text(
            &mut self.input,
            &mut self.output,
            "Enter course to filter by: ",
        )?
        else {
            return Ok(());
        };

        let matches = self.store.filter_by_course(&course);
        writeln!(self.output, "===== Students in course: {} =====", course.trim())?;
        if matches.is_empty() {
            writeln!(self.output, "No students found in this course.")?;
        } else {
            for record in matches {
                writeln!(self.output, "{record}")?;
            }
        }
        writeln!(self.output, "===============================================")?;
        Ok(())
    }

    /// Option 5: records matching a status, case-insensitive and trimmed
    fn filter_by_status(&mut self) -> Result<()> {
        let Some(status) = prompts::text(
            &mut self.input,
            &mut self.output,
            "Enter status to filter by: ",
        )?
        else {
            return Ok(());
        };

        let matches = self.store.filter_by_status(&status);
        writeln!(self.output, "===== Students with status: {} =====", status.trim())?;
        if matches.is_empty() {
            writeln!(self.output, "No students found with this status.")?;
        } else {
            for record in matches {
                writeln!(self.output, "{record}")?;
            }
        }
        writeln!(self.output, "===============================================")?;
        Ok(())
    }

    /// Option 6: every record tied for the highest CWA
    fn highest_cwa(&mut self) -> Result<()> {
        let top = self.store.highest_cwa();
        let Some(leader) = top.first() else {
            writeln!(self.output, "No students in the roster.")?;
            return Ok(());
        };

        writeln!(
            self.output,
            "===== Student(s) with Highest CWA: {} =====",
            leader.cwa
        )?;
        for record in &top {
            writeln!(self.output, "{record}")?;
        }
        writeln!(
            self.output,
            "======================================================"
        )?;
        Ok(())
    }

    /// Option 7: mean CWA for each distinct course, first-seen order
    fn average_cwa_by_course(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No students in the roster.")?;
            return Ok(());
        }

        writeln!(self.output, "===== Average CWA per Course =====")?;
        for entry in self.store.average_cwa_by_course() {
            writeln!(self.output, "{}: {:.2}", entry.course, entry.average)?;
        }
        writeln!(self.output, "=================================")?;
        Ok(())
    }

    /// Option 8: records at or above the graduation credit threshold
    fn graduation_eligibility(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No students in the roster.")?;
            return Ok(());
        }

        let threshold = self.store.config().graduation_credits;
        let eligible = self.store.graduation_eligible();
        writeln!(
            self.output,
            "===== Students Eligible for Graduation ({threshold}+ credits) ====="
        )?;
        if eligible.is_empty() {
            writeln!(self.output, "No students are eligible for graduation yet.")?;
        } else {
            for record in eligible {
                writeln!(
                    self.output,
                    "{} {} ({}): {} credits",
                    record.first_name, record.last_name, record.course, record.earned_credits
                )?;
            }
        }
        writeln!(
            self.output,
            "=========================================================="
        )?;
        Ok(())
    }
}
