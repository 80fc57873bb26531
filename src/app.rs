//! Application orchestrator.
//! Loads/merges config, initializes logging, runs the controller over the
//! command-line files, and turns a fatal failure into a non-zero exit.

use anyhow::Result;
use spacerm::cli::Args;
use spacerm::output as out;
use spacerm::{
    default_config_path, load_config, ActionTaken, OperationController, RunOptions,
    TerminalConsole,
};
use tracing::{debug, error, info};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        match default_config_path() {
            Some(p) => {
                out::print_info(&format!("spacerm config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file exists at that location.");
                } else {
                    out::print_info("No config file exists there; built-in defaults are used.");
                }
            }
            None => out::print_warn("Could not determine a config path."),
        }
        return Ok(());
    }

    // File defaults first, CLI wins.
    let mut cfg = load_config()?;
    args.apply_overrides(&mut cfg);

    // Hold the guard until the end of run() so file logs are flushed.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!(?cfg, files = args.files.len(), "starting spacerm");

    let options = RunOptions::from_config(&cfg);
    let mut controller = OperationController::new(options, TerminalConsole::stdio());

    match controller.run(&args.files) {
        Ok(outcomes) => {
            let changed = outcomes.iter().filter(|o| o.is_mutated()).count();
            let failed = outcomes
                .iter()
                .filter(|o| o.action == ActionTaken::Failed)
                .count();
            info!(total = outcomes.len(), changed, failed, "run finished");
            Ok(())
        }
        Err(aborted) => {
            let e = &aborted.error;
            error!(
                code = e.code(),
                kind = e.kind(),
                path = %aborted.path,
                completed = aborted.completed.len(),
                error = %e,
                "Run aborted"
            );
            Err(aborted.into())
        }
    }
}
