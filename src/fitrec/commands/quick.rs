use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Category, Exercise, Set, TrainingSubmission};
use crate::transport::Transport;
use chrono::NaiveDate;

use super::record;

/// The fixed demonstration session: one set of bench press.
pub fn sample_submission(date: NaiveDate) -> TrainingSubmission {
    TrainingSubmission::new(
        date.format("%Y-%m-%d").to_string(),
        vec![Exercise::new("Bench Press", Category::Compound)
            .with_set(Set::new(80.0, 10).with_rest(120).with_rpe(7))],
        "Quick record",
    )
}

pub fn run<T: Transport>(transport: &mut T, today: NaiveDate) -> Result<CmdResult> {
    record::run(transport, &sample_submission(today))
}
