use crate::demo::{run_area_plan, run_demo, AreaPlanArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use upkeep::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Upkeep Coordinator",
    about = "Run and demonstrate the property onboarding coordinator from the command line",
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
    /// Inspect onboarding outputs without starting the service
    Onboarding {
        #[command(subcommand)]
        command: OnboardingCommand,
    },
    /// Run an end-to-end CLI demo covering area planning and invite acceptance
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum OnboardingCommand {
    /// Print the area plan generated for a property profile
    Areas(AreaPlanArgs),
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
        Command::Onboarding {
            command: OnboardingCommand::Areas(args),
        } => run_area_plan(args),
        Command::Demo(args) => run_demo(args),
    }
}
