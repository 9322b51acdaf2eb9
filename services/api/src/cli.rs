use crate::demo::{run_classify, run_demo, ClassifyArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use programme_eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Programme Eligibility",
    about = "Serve or exercise the programme eligibility questionnaire from the command line",
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
    /// Classify a single answers record and print the recommendation
    Classify(ClassifyArgs),
    /// Walk scripted respondents through the questionnaire
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
        Command::Classify(args) => run_classify(args),
        Command::Demo(args) => run_demo(args),
    }
}
