use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "btc-info", version, about = "BTC OSINT Tool")]
pub struct Args {
    /// Specify the BTC address to retrieve information.
    #[arg(
        short = 'a',
        long,
        required_unless_present_any = ["display_help", "generate_config"]
    )]
    pub address: Option<String>,

    /// Specify the output file to save the results in JSON format. (optional)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose mode to display detailed information.
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Display help message.
    #[arg(short = 'H', long = "display_help", default_value_t = false)]
    pub display_help: bool,

    /// Write a default configuration file and exit.
    #[arg(long, default_value_t = false)]
    pub generate_config: bool,
}

impl Args {
    /// Parse from the process arguments, exiting on usage errors.
    pub fn parse_from_env() -> Self {
        Self::parse()
    }
}
