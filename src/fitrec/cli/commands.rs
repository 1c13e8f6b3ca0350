use super::print::{print_banner, print_result};
use super::setup::{usage, Cli, Commands};
use chrono::Local;
use clap::Parser;
use fitrec::api::FitrecApi;
use fitrec::config::ClientConfig;
use fitrec::error::Result;
use fitrec::logging::{init_logger, level_for_verbosity};
use fitrec::transport::process::ProcessTransport;
use log::debug;

struct AppContext {
    api: FitrecApi<ProcessTransport>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(level_for_verbosity(cli.verbose));

    let Some(command) = cli.command else {
        print!("{}", usage());
        return Ok(());
    };

    let config = ClientConfig::default().with_server_path(&cli.server);
    debug!("using worker at {}", config.server_path().display());
    let mut ctx = AppContext {
        api: FitrecApi::from_config(&config),
    };

    match command {
        Commands::Record { date, notes } => handle_record(&mut ctx, date, notes),
        Commands::History { start, end } => handle_history(&mut ctx, start, end),
        Commands::Records { exercise } => handle_records(&mut ctx, exercise),
        Commands::Quick => handle_quick(&mut ctx),
    }
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

fn handle_record(ctx: &mut AppContext, date: Option<String>, notes: String) -> Result<()> {
    let date = date.unwrap_or_else(|| today().format("%Y-%m-%d").to_string());
    print_banner("Recording a training session. Leave the exercise name empty to finish.");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let result = ctx
        .api
        .record_interactive(&mut input, &mut output, &date, &notes)?;
    print_result(&result);
    Ok(())
}

fn handle_history(ctx: &mut AppContext, start: String, end: String) -> Result<()> {
    let result = ctx.api.trainings_between(&start, &end)?;
    print_result(&result);
    Ok(())
}

fn handle_records(ctx: &mut AppContext, exercise: Option<String>) -> Result<()> {
    let result = ctx.api.personal_records(exercise.as_deref())?;
    print_result(&result);
    Ok(())
}

fn handle_quick(ctx: &mut AppContext) -> Result<()> {
    print_banner("Recording a quick sample session...");
    let result = ctx.api.quick_record(today())?;
    print_result(&result);
    Ok(())
}
