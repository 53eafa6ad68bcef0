use std::process::ExitCode;

use clap::{Parser, Subcommand};
use todo_client::{ApiError, TodoClient, Transport, UreqTransport};
use tracing_subscriber::EnvFilter;

/// Command-line view of a running todo server.
#[derive(Debug, Parser)]
#[command(name = "todo", version)]
struct Cli {
    /// Base URL of the todo server.
    #[arg(long, env = "TODO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every todo.
    List,
    /// Add a todo and show the list.
    Add { text: String },
    /// Flip a todo between done and not done, then show the list.
    Toggle { id: u64 },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut client = TodoClient::mount(&cli.base_url, UreqTransport::new());

    let result = match cli.command {
        Command::List => Ok(()),
        Command::Add { text } => {
            client.set_input(text);
            client.submit_input().map_err(CliError::from)
        }
        Command::Toggle { id } => toggle(&mut client, id),
    };

    for line in client.render() {
        println!("{line}");
    }

    match result {
        Ok(()) if client.view().error().is_none() => ExitCode::SUCCESS,
        Ok(()) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("todo: {err}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no todo with id {0} in the loaded list")]
    UnknownId(u64),

    #[error(transparent)]
    Api(#[from] ApiError),
}

fn toggle<T: Transport>(client: &mut TodoClient<T>, id: u64) -> Result<(), CliError> {
    if let Some(err) = client.view().error() {
        // Mount failed; the rendered view already shows why.
        tracing::debug!(%err, "skipping toggle after failed load");
        return Ok(());
    }
    let current = client
        .view()
        .items()
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.completed)
        .ok_or(CliError::UnknownId(id))?;
    Ok(client.toggle(id, current)?)
}
