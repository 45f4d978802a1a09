use crate::demo::{run_analyze, run_demo, AnalyzeArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use deposit_case::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Deposit Case Analyzer",
    about = "Score tenant security-deposit disputes and serve the analysis API",
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
    /// Analyze one intake JSON file and print the case report
    Analyze(AnalyzeArgs),
    /// Run the bundled sample disputes and print their summaries
    Demo(DemoArgs),
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
        Command::Analyze(args) => run_analyze(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["deposit-case-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn analyze_accepts_intake_path_and_today() {
        let cli = Cli::try_parse_from([
            "deposit-case-api",
            "analyze",
            "--intake",
            "case.json",
            "--today",
            "2025-03-31",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.intake.to_string_lossy(), "case.json");
                assert_eq!(
                    args.today.map(|date| date.to_string()).as_deref(),
                    Some("2025-03-31")
                );
                assert!(args.json);
            }
            other => panic!("expected analyze command, got {other:?}"),
        }
    }

    #[test]
    fn analyze_rejects_malformed_today() {
        let result = Cli::try_parse_from([
            "deposit-case-api",
            "analyze",
            "--intake",
            "case.json",
            "--today",
            "31/03/2025",
        ]);
        assert!(result.is_err());
    }
}
