use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TrainingSubmission;
use crate::transport::Transport;
use log::info;

use super::helpers::{render_response, to_arguments};

pub const TOOL: &str = "record_training";

/// Sends a whole session in one call. A session with no exercises is not sent.
pub fn run<T: Transport>(transport: &mut T, submission: &TrainingSubmission) -> Result<CmdResult> {
    if submission.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(
            "No exercises were entered. Nothing recorded.",
        ));
        return Ok(result);
    }

    info!(
        "recording {} exercise(s), {} set(s) on {}",
        submission.exercises.len(),
        submission.total_sets(),
        submission.date
    );

    let arguments = to_arguments(submission)?;
    let response = transport.call_tool(TOOL, arguments)?;
    let mut result = render_response(&response, Some("Training recorded!"));
    if !result.is_failure() {
        result.add_message(CmdMessage::info(summary(submission)));
    }
    Ok(result.with_submission(submission.clone()))
}

fn summary(submission: &TrainingSubmission) -> String {
    format!(
        "{}: {} exercise(s), {} set(s)",
        submission.date,
        submission.exercises.len(),
        submission.total_sets()
    )
}
