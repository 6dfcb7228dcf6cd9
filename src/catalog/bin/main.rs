use std::io;
use std::process::ExitCode;
use clap::Parser;
use tracing::error;
use mini_lms::catalog::controller::run_menu;
use mini_lms::catalog::factory::create_catalog_service;
use mini_lms::core::console::Console;
use mini_lms::core::controller::AppState;
use mini_lms::core::repository::RepositoryStore;
use mini_lms::utils::logs::{level_for_verbosity, setup_tracing};

/// Console library catalog: add, list, issue, return, search and remove books.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Branch name recorded on every catalog event.
    #[arg(long, default_value = "main")]
    branch: String,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(level_for_verbosity(cli.verbose), cli.log_json);

    let state = AppState::new(cli.branch.as_str(), RepositoryStore::Memory);
    let mut catalog = create_catalog_service(&state.config, state.store);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match run_menu(&state, &mut *catalog, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "catalog menu stopped");
            ExitCode::FAILURE
        }
    }
}
