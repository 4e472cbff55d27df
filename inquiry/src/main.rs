use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use inquiry::commands::{options::print_options, serve::serve, submit::SubmitCommand};
use inquiry_config::DEFAULT_CONFIG_PATH;
use inquiry_utils::inquiry_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = inquiry_config::load(cli.config.as_slice())?;

    match cli.command {
        Command::Serve => serve(config).await?,
        Command::Submit(command) => command.invoke(config).await?,
        Command::Options => print_options(&config),
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = inquiry_version())]
struct Cli {
    /// Configuration files, later files override earlier ones
    #[arg(
        long,
        short,
        env = "INQUIRY_CONFIG",
        value_delimiter = ',',
        default_value = DEFAULT_CONFIG_PATH,
        global = true
    )]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server hosting the contact form
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Validate and submit a contact inquiry
    #[command(aliases(["sub"]))]
    Submit(SubmitCommand),
    /// List the options for "How did you hear about us?"
    #[command(aliases(["o"]))]
    Options,
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
