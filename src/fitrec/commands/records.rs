use crate::commands::CmdResult;
use crate::error::Result;
use crate::protocol::Arguments;
use crate::transport::Transport;
use log::info;

use super::helpers::render_response;

pub const TOOL: &str = "get_personal_records";

/// Without a filter the `exercise_name` key is left out entirely, which the
/// worker treats differently from an empty name.
pub fn arguments(exercise_name: Option<&str>) -> Arguments {
    let mut arguments = Arguments::new();
    if let Some(name) = exercise_name {
        arguments.insert("exercise_name".to_string(), name.into());
    }
    arguments
}

pub fn run<T: Transport>(transport: &mut T, exercise_name: Option<&str>) -> Result<CmdResult> {
    info!(
        "fetching personal records for {}",
        exercise_name.unwrap_or("all exercises")
    );
    let response = transport.call_tool(TOOL, arguments(exercise_name))?;
    Ok(render_response(&response, None))
}
