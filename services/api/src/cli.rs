use crate::advice::{run_batch, run_evaluate, BatchArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use visa_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Visa Eligibility Advisor",
    about = "Score travel applicants and recommend visa destinations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single applicant from flags or a JSON file
    Evaluate(EvaluateArgs),
    /// Evaluate every applicant in a CSV export
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Batch(args) => run_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn evaluate_accepts_repeated_fields() {
        let cli = Cli::try_parse_from([
            "visa-advisor-api",
            "evaluate",
            "--field",
            "age=40",
            "--field",
            "target_country=France",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Evaluate(args)) => assert_eq!(args.fields.len(), 2),
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }
}
