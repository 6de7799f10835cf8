//! CLI definitions and entry point
//!
//! The flag contract: `--mode` must be `legality` or `legalize`, `--pokemon`
//! and `--generation` are always required, and `--ver` is required only for
//! legalization. Validation collects every error before aborting; each one
//! lands on its own stderr line with exit code 1, and no engine work happens
//! on that path.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use super::commands;
use crate::core::models::{EntityContext, GameVersion};
use crate::core::ports::LegalityEngine as _;
use crate::engine;

/// gpss-console - legality checking and auto-legalization for Local GPSS
#[derive(Parser, Debug)]
#[command(
    name = "gpss-console",
    version,
    about = "Legality checking and auto-legalization console for Local GPSS"
)]
pub struct Cli {
    /// The mode to run, legality | legalize
    #[arg(long)]
    pub mode: Option<String>,

    /// Base64 encoded pokemon data
    #[arg(long)]
    pub pokemon: Option<String>,

    /// The generation the pokemon data belongs to
    #[arg(long)]
    pub generation: Option<String>,

    /// The target game version for auto legalization
    #[arg(long)]
    pub ver: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Optional server mode
    #[cfg(feature = "server")]
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands beyond the flag-driven dispatch
#[cfg(feature = "server")]
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Path to the JSON config file
        #[arg(long, default_value = crate::config::CONFIG_FILE)]
        config: std::path::PathBuf,
    },
}

/// The dispatch mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Legality,
    Legalize,
}

/// A validated invocation, ready to dispatch
struct Invocation<'a> {
    mode: Mode,
    pokemon: &'a str,
    context: EntityContext,
    version: GameVersion,
}

/// Run the CLI.
#[must_use]
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too; only real parse errors fail
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        },
    };

    init_logging(cli.verbose);

    #[cfg(feature = "server")]
    if let Some(Command::Serve { config }) = &cli.command {
        return match commands::serve(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", format!("{err:#}").red());
                ExitCode::FAILURE
            },
        };
    }

    dispatch(&cli)
}

/// Initialize env_logger from the verbose flag. Logs go to stderr.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .try_init();
}

/// Validate the flag set, collecting every error before giving up.
fn validate(cli: &Cli) -> Result<Invocation<'_>, Vec<String>> {
    let mut errors = Vec::new();

    let mode = match cli.mode.as_deref() {
        Some("legality") => Some(Mode::Legality),
        Some("legalize") => Some(Mode::Legalize),
        _ => {
            errors.push("--mode must be legalize or legality".to_string());
            None
        },
    };

    if cli.pokemon.is_none() {
        errors.push("--pokemon is required".to_string());
    }
    if cli.generation.is_none() {
        errors.push("--generation is required".to_string());
    }
    if mode == Some(Mode::Legalize) && cli.ver.is_none() {
        errors.push("--ver is required for auto legalization".to_string());
    }

    match (mode, cli.pokemon.as_deref(), cli.generation.as_deref()) {
        (Some(mode), Some(pokemon), Some(generation)) if errors.is_empty() => Ok(Invocation {
            mode,
            pokemon,
            context: EntityContext::from_token(generation),
            version: cli.ver.as_deref().map_or(GameVersion::Any, GameVersion::from_token),
        }),
        _ => Err(errors),
    }
}

/// Validate and dispatch to the requested operation.
fn dispatch(cli: &Cli) -> ExitCode {
    let invocation = match validate(cli) {
        Ok(invocation) => invocation,
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error.red());
            }
            return ExitCode::FAILURE;
        },
    };

    let engine = engine::shared();
    engine.init();

    match invocation.mode {
        Mode::Legality => commands::legality(engine, invocation.pokemon, invocation.context),
        Mode::Legalize => commands::legalize(
            engine,
            invocation.pokemon,
            invocation.context,
            invocation.version,
        ),
    }

    ExitCode::SUCCESS
}
