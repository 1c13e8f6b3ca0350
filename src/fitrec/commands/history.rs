use crate::commands::CmdResult;
use crate::error::Result;
use crate::protocol::Arguments;
use crate::transport::Transport;
use log::info;

use super::helpers::render_response;

pub const TOOL: &str = "get_trainings_by_date_range";

/// Date order and format are the worker's to validate.
pub fn run<T: Transport>(transport: &mut T, start_date: &str, end_date: &str) -> Result<CmdResult> {
    info!("fetching trainings from {} to {}", start_date, end_date);

    let mut arguments = Arguments::new();
    arguments.insert("start_date".to_string(), start_date.into());
    arguments.insert("end_date".to_string(), end_date.into());

    let response = transport.call_tool(TOOL, arguments)?;
    Ok(render_response(&response, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::fixtures::{error_response, text_response};
    use crate::transport::memory::RecordingTransport;
    use serde_json::json;

    #[test]
    fn passes_both_dates() {
        let mut transport = RecordingTransport::new();
        run(&mut transport, "2024-01-01", "2024-01-31").unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.params.name, TOOL);
        assert_eq!(
            serde_json::Value::Object(request.params.arguments.clone()),
            json!({"start_date": "2024-01-01", "end_date": "2024-01-31"})
        );
    }

    #[test]
    fn reversed_range_is_still_sent() {
        let mut transport = RecordingTransport::new();
        run(&mut transport, "2024-12-31", "2024-01-01").unwrap();
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn renders_text_blocks_in_order() {
        let mut transport = RecordingTransport::new().reply(text_response(&["one", "two"]));
        let result = run(&mut transport, "2024-01-01", "2024-01-31").unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(result.output, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn empty_payload_renders_nothing() {
        let mut transport = RecordingTransport::new().reply(text_response(&[]));
        let result = run(&mut transport, "2024-01-01", "2024-01-31").unwrap();
        assert!(result.messages.is_empty());
        assert!(result.output.is_empty());
    }

    #[test]
    fn renders_error_text() {
        let mut transport = RecordingTransport::new().reply(error_response("bad start_date"));
        let result = run(&mut transport, "nope", "2024-01-31").unwrap();
        assert!(result.is_failure());
        assert_eq!(result.messages[0].content, "Error: bad start_date");
    }
}
