use std::process::ExitCode;

use clap::{Parser, Subcommand};
use classroom_core::CoursesClient;
use classroom_snippets::{create_course, get_course, update_course, Executor};
use tracing_subscriber::EnvFilter;

/// Run one Classroom course snippet against a service endpoint.
#[derive(Parser)]
#[command(name = "snippets")]
struct Cli {
    /// Service root, e.g. https://classroom.googleapis.com
    #[arg(long, default_value = "https://classroom.googleapis.com")]
    base_url: String,

    /// OAuth2 access token obtained out of band.
    #[arg(long, env = "CLASSROOM_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the demo 10th Grade Biology course.
    Create,
    /// Fetch a course by id.
    Get { id: String },
    /// Move a course to Period 3, room 302.
    Update { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let client = CoursesClient::new(&cli.base_url);
    let exec = Executor::new(&cli.access_token);

    let result = match cli.command {
        Command::Create => create_course(&client, &exec).await.map(drop),
        Command::Get { id } => get_course(&client, &exec, &id).await.map(drop),
        Command::Update { id } => update_course(&client, &exec, &id).await.map(drop),
    };

    // Outcomes are already logged by the snippet itself; only the exit
    // status is decided here.
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
