//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every fitrec operation, whatever UI drives it.
//!
//! `FitrecApi<T: Transport>` is generic over the transport:
//! - Production: `FitrecApi<ProcessTransport>`
//! - Testing: `FitrecApi<RecordingTransport>`
//!
//! The API dispatches and normalizes inputs; it never prints. Interactive
//! entry takes its reader and writer as arguments so the terminal stays the
//! CLI's business.

use crate::commands;
use crate::config::ClientConfig;
use crate::entry;
use crate::error::Result;
use crate::model::TrainingSubmission;
use crate::transport::process::ProcessTransport;
use crate::transport::Transport;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

pub struct FitrecApi<T: Transport> {
    transport: T,
}

impl FitrecApi<ProcessTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(ProcessTransport::new(config.server_path()))
    }
}

impl<T: Transport> FitrecApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn record_training(&mut self, submission: &TrainingSubmission) -> Result<CmdResult> {
        commands::record::run(&mut self.transport, submission)
    }

    /// Prompts for exercises, then records them. Bad numeric input aborts
    /// before anything is sent.
    pub fn record_interactive<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
        date: &str,
        notes: &str,
    ) -> Result<CmdResult> {
        let exercises = entry::collect_exercises(input, output)?;
        self.record_training(&TrainingSubmission::new(date, exercises, notes))
    }

    pub fn trainings_between(&mut self, start_date: &str, end_date: &str) -> Result<CmdResult> {
        commands::history::run(&mut self.transport, start_date, end_date)
    }

    pub fn personal_records(&mut self, exercise_name: Option<&str>) -> Result<CmdResult> {
        commands::records::run(&mut self.transport, exercise_name)
    }

    pub fn quick_record(&mut self, today: NaiveDate) -> Result<CmdResult> {
        commands::quick::run(&mut self.transport, today)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitrecError;
    use crate::model::{Category, Exercise, Set};
    use crate::transport::memory::fixtures::text_response;
    use crate::transport::memory::RecordingTransport;
    use std::io::Cursor;

    fn api() -> FitrecApi<RecordingTransport> {
        FitrecApi::new(RecordingTransport::new())
    }

    #[test]
    fn interactive_record_sends_collected_session() {
        let mut api = FitrecApi::new(RecordingTransport::new().reply(text_response(&["ok"])));
        let mut input = Cursor::new("Bench Press\n1\n80\n10\n\n\nN\nN\n");
        let mut output = Vec::new();

        let result = api
            .record_interactive(&mut input, &mut output, "2024-05-01", "chest day")
            .unwrap();

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].params.name, "record_training");
        assert_eq!(requests[0].params.arguments["notes"], "chest day");
        assert_eq!(result.output, vec!["ok".to_string()]);
    }

    #[test]
    fn interactive_record_with_no_exercises_makes_no_call() {
        let mut api = api();
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        let result = api
            .record_interactive(&mut input, &mut output, "2024-05-01", "")
            .unwrap();

        assert!(api.transport().requests().is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn interactive_record_aborts_on_bad_input_without_calling() {
        let mut api = api();
        let mut input = Cursor::new("Squat\n1\nabc\n5\n\n\n");
        let mut output = Vec::new();

        let err = api
            .record_interactive(&mut input, &mut output, "2024-05-01", "")
            .unwrap_err();

        assert!(matches!(err, FitrecError::UserInput(_)));
        assert!(api.transport().requests().is_empty());
    }

    #[test]
    fn record_training_sends_the_given_submission() {
        let mut api = FitrecApi::new(RecordingTransport::new().reply(text_response(&["saved"])));
        let submission = TrainingSubmission::new(
            "2024-06-10",
            vec![Exercise::new("Deadlift", Category::Compound)
                .with_set(Set::new(140.0, 3))
                .with_set(Set::new(150.0, 2).with_rpe(9))],
            "",
        );

        let result = api.record_training(&submission).unwrap();

        let request = api.transport().last_request().unwrap();
        assert_eq!(request.params.name, "record_training");
        assert_eq!(request.params.arguments["date"], "2024-06-10");
        assert_eq!(result.submission, Some(submission));
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Info && m.content.contains("2 set(s)")));
    }

    #[test]
    fn queries_dispatch_to_their_tools() {
        let mut api = api();
        api.trainings_between("2024-01-01", "2024-01-31").unwrap();
        api.personal_records(Some("Squat")).unwrap();

        let names: Vec<_> = api
            .transport()
            .requests()
            .iter()
            .map(|r| r.params.name.clone())
            .collect();
        assert_eq!(
            names,
            vec!["get_trainings_by_date_range", "get_personal_records"]
        );
    }

    #[test]
    fn quick_record_uses_given_date() {
        let mut api = api();
        api.quick_record(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            .unwrap();
        let request = api.transport().last_request().unwrap();
        assert_eq!(request.params.arguments["date"], "2024-02-29");
    }
}
