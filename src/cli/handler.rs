use crate::api_client::AddressSource;
use crate::banner;
use crate::cli::args::Args;
use crate::config::config::Config;
use crate::error::{FetchError, Result};
use crate::fetcher::{fetch_address_info, AddressQuery};
use crate::help_text::HelpText;
use std::io::Write;
use tracing::{error, info};

pub const MISSING_ADDRESS_MESSAGE: &str =
    "Please provide a BTC address using the -a or --address option.";

/// Dispatch a parsed command line and return the process exit code.
///
/// `connect` is only called once an address has been validated, so help
/// output and input errors never touch the network.
pub fn run<F>(
    args: &Args,
    config: &Config,
    connect: F,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    F: FnOnce() -> Result<Box<dyn AddressSource>>,
{
    if args.display_help {
        let _ = writeln!(out, "{}", HelpText::usage());
        return 0;
    }

    if config.display.show_banner {
        banner::print(out, config.display.color);
    }

    let query = match AddressQuery::new(
        args.address.as_deref().unwrap_or_default(),
        args.output.clone(),
        args.verbose,
    ) {
        Ok(query) => query,
        Err(e) => {
            let _ = writeln!(out, "{}", MISSING_ADDRESS_MESSAGE);
            return e.exit_code();
        }
    };

    let source = match connect() {
        Ok(source) => source,
        Err(e) => return report(err, e),
    };

    info!(target: "cli", "Looking up {}", query.address);
    match fetch_address_info(source.as_ref(), &query, out) {
        Ok(_) => 0,
        Err(e) => report(err, e),
    }
}

fn report(err: &mut dyn Write, e: FetchError) -> i32 {
    error!(target: "cli", "{}", e);
    let _ = writeln!(err, "Error: {}", e);
    e.exit_code()
}
