//! # Interactive Entry
//!
//! Builds the exercises of a training session from sequential terminal prompts.
//! The flow is two nested loops: sets within an exercise, exercises within the
//! session.
//!
//! ```text
//! CollectExercise ──empty name──► Done
//!       │
//! CollectCategory   (1-3, anything else → Compound)
//!       │
//! CollectSet ──empty weight──► sets finished
//!       │   reps, rest (empty → 60), rpe
//!       └── another set? ──y──► CollectSet, otherwise sets finished
//!
//! sets finished, none entered → CollectExercise
//! sets finished, some entered → another exercise? ──y──► CollectExercise, otherwise Done
//! ```
//!
//! An exercise that ends up with no sets is dropped without asking about
//! another exercise; the flow goes straight back to the name prompt. Any
//! numeric field that does not parse aborts the whole flow and nothing
//! collected so far is kept.
//!
//! Input and output are generic so the flow runs the same against a terminal
//! or against in-memory buffers.

use crate::error::{FitrecError, Result};
use crate::model::{Category, Exercise, Set, DEFAULT_REST_SECONDS};
use log::debug;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub fn collect_exercises<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Vec<Exercise>> {
    let mut exercises = Vec::new();

    loop {
        writeln!(output, "\n--- Exercise {} ---", exercises.len() + 1)?;
        let name = ask(input, output, "Exercise name: ")?;
        if name.is_empty() {
            break;
        }

        let category = ask_category(input, output)?;
        let sets = collect_sets(input, output)?;

        if sets.is_empty() {
            debug!("dropping '{}': no sets entered", name);
            continue;
        }
        exercises.push(Exercise {
            name,
            category,
            sets,
        });

        if !confirm(input, output, "Add another exercise? (y/N): ")? {
            break;
        }
    }

    Ok(exercises)
}

fn ask_category<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Category> {
    writeln!(output, "Choose a category:")?;
    for (i, category) in Category::all().iter().enumerate() {
        writeln!(
            output,
            "{}. {} ({})",
            i + 1,
            category.label(),
            category.description()
        )?;
    }
    let choice = ask(input, output, "Choice (1-3): ")?;
    Ok(Category::from_choice(&choice))
}

fn collect_sets<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<Set>> {
    let mut sets = Vec::new();

    loop {
        writeln!(output, "\n--- Set {} ---", sets.len() + 1)?;
        let weight = ask(input, output, "Weight (kg): ")?;
        if weight.is_empty() {
            break;
        }
        let reps = ask(input, output, "Reps: ")?;
        let rest = ask(
            input,
            output,
            &format!("Rest (seconds, default {}): ", DEFAULT_REST_SECONDS),
        )?;
        let rpe = ask(input, output, "RPE (1-10, optional): ")?;

        let set = Set {
            weight_kg: parse_weight(&weight)?,
            reps: parse_number(&reps, "reps")?,
            rest_time_seconds: if rest.is_empty() {
                DEFAULT_REST_SECONDS
            } else {
                parse_number(&rest, "rest time")?
            },
            rpe: if rpe.is_empty() {
                None
            } else {
                Some(parse_number(&rpe, "RPE")?)
            },
        };
        sets.push(set);

        if !confirm(input, output, "Add another set? (y/N): ")? {
            break;
        }
    }

    Ok(sets)
}

/// Prints `prompt` and reads one trimmed line. End of input reads as empty.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Only an explicit "y" continues; the default is no.
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool> {
    Ok(ask(input, output, prompt)?.eq_ignore_ascii_case("y"))
}

fn parse_number<T: FromStr>(raw: &str, field: &str) -> Result<T> {
    raw.parse().map_err(|_| {
        FitrecError::UserInput(format!("{} must be a number, got '{}'", field, raw))
    })
}

/// `f64` parsing also accepts "nan" and "inf", which JSON cannot carry.
fn parse_weight(raw: &str) -> Result<f64> {
    let weight: f64 = parse_number(raw, "weight")?;
    if !weight.is_finite() {
        return Err(FitrecError::UserInput(format!(
            "weight must be a finite number, got '{}'",
            raw
        )));
    }
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    fn run_lines(lines: &[&str]) -> Result<Vec<Exercise>> {
        let mut input = Cursor::new(lines.join("\n") + "\n");
        let mut output = Vec::new();
        collect_exercises(&mut input, &mut output)
    }

    #[test]
    fn single_set_with_defaults() {
        let exercises =
            run_lines(&["Bench Press", "1", "80", "10", "", "", "N", "N"]).unwrap();

        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Bench Press");
        assert_eq!(exercises[0].category, Category::Compound);
        assert_eq!(
            serde_json::to_value(&exercises[0].sets).unwrap(),
            json!([{"weight_kg": 80.0, "reps": 10, "rest_time_seconds": 60}])
        );
    }

    #[test]
    fn multiple_sets_and_exercises() {
        let exercises = run_lines(&[
            "Squat", "1", "100", "5", "180", "8", "y", "105", "5", "180", "9", "n", "y",
            "Curl", "2", "12.5", "12", "", "", "n", "n",
        ])
        .unwrap();

        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[0].sets.len(), 2);
        assert_eq!(exercises[0].sets[1], Set::new(105.0, 5).with_rest(180).with_rpe(9));
        assert_eq!(exercises[1].category, Category::Isolation);
        assert_eq!(exercises[1].sets, vec![Set::new(12.5, 12)]);
    }

    #[test]
    fn uppercase_y_continues() {
        let exercises = run_lines(&[
            "Row", "1", "60", "8", "", "", "Y", "60", "8", "", "", "n", "n",
        ])
        .unwrap();
        assert_eq!(exercises[0].sets.len(), 2);
    }

    #[test]
    fn anything_but_y_ends_the_loop() {
        let exercises = run_lines(&["Row", "1", "60", "8", "", "", "yes", "n"]).unwrap();
        assert_eq!(exercises[0].sets.len(), 1);
    }

    #[test]
    fn unknown_category_defaults_to_compound() {
        let exercises = run_lines(&["Run", "9", "0", "1", "", "", "n", "n"]).unwrap();
        assert_eq!(exercises[0].category, Category::Compound);
    }

    #[test]
    fn empty_first_name_collects_nothing() {
        assert!(run_lines(&[""]).unwrap().is_empty());
    }

    #[test]
    fn exercise_without_sets_is_dropped() {
        let exercises =
            run_lines(&["Plank", "3", "", "Dip", "1", "0", "12", "", "", "n", "n"]).unwrap();
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Dip");
    }

    #[test]
    fn non_numeric_weight_aborts() {
        let err = run_lines(&["Bench Press", "1", "heavy", "10", "", ""]).unwrap_err();
        assert!(matches!(err, FitrecError::UserInput(_)));
    }

    #[test]
    fn non_finite_weight_aborts() {
        for raw in ["nan", "inf", "-inf"] {
            let err = run_lines(&["Bench Press", "1", raw, "10", "", ""]).unwrap_err();
            assert!(
                matches!(err, FitrecError::UserInput(ref msg) if msg.contains("finite")),
                "{} was accepted",
                raw
            );
        }
    }

    #[test]
    fn non_numeric_reps_aborts_even_after_good_exercises() {
        let err = run_lines(&[
            "Squat", "1", "100", "5", "", "", "n", "y", "Press", "1", "50", "ten", "", "",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("reps"));
    }

    #[test]
    fn non_numeric_rpe_aborts() {
        let err = run_lines(&["Squat", "1", "100", "5", "", "hard"]).unwrap_err();
        assert!(matches!(err, FitrecError::UserInput(_)));
    }

    #[test]
    fn end_of_input_behaves_like_empty_answers() {
        let exercises = run_lines(&["Squat", "1", "100", "5"]).unwrap();
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].sets, vec![Set::new(100.0, 5)]);
    }

    #[test]
    fn same_input_yields_identical_payloads() {
        let lines = ["Deadlift", "1", "140", "3", "240", "9", "n", "n"];
        let first = serde_json::to_vec(&run_lines(&lines).unwrap()).unwrap();
        let second = serde_json::to_vec(&run_lines(&lines).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn prompts_are_written_to_output() {
        let mut input = Cursor::new("Squat\n1\n\n\n");
        let mut output = Vec::new();
        collect_exercises(&mut input, &mut output).unwrap();

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Exercise name: "));
        assert!(shown.contains("1. Compound"));
        assert!(shown.contains("Weight (kg): "));
    }
}
