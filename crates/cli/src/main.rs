use clap::Parser;
use log::debug;
use rust_select_core::choice_definitions::PromptSpec;
use rust_select_core::error::Result;
use rust_select_core::{config, file_handling};
use std::process::ExitCode;

use rust_select_cli::arguments::{process_command_line, Provider};
use rust_select_cli::cli_args::Args;
use rust_select_cli::selection::Prompter;

/// Exit status for a prompt the user backed out of, as for SIGINT.
const CANCELLED_EXIT_CODE: u8 = 130;

/// Build the prompt from the arguments and apply the theme file, if any
fn build_prompt(args: &Args) -> Result<PromptSpec> {
    let mut spec = process_command_line(args.get_source()?, &args.overrides())?;

    let theme_path = config::get_theme_path(&args.theme_path);
    debug!("Theme path: `{theme_path}`");

    if let Some(theme) = file_handling::get_theme(&theme_path)? {
        spec.theme = theme;
    }

    Ok(spec)
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let spec = build_prompt(&args)?;

    let selected = Prompter::stdio()
        .with_escape_timeout(config::escape_timeout(args.escape_timeout_ms))
        .prompt(&spec)?;

    println!("{selected}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_cancellation() => {
            eprintln!("{e}");
            ExitCode::from(CANCELLED_EXIT_CODE)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
