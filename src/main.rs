use btc_info::api_client::{AddressSource, BlockstreamClient};
use btc_info::cli::args::Args;
use btc_info::cli::handler;
use btc_info::config::config::Config;
use btc_info::error::CONFIG_EXIT_CODE;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse_from_env();

    if args.generate_config {
        return generate_config();
    }

    // Help must work even with a broken config file
    let config = if args.display_help {
        Config::default()
    } else {
        match Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return ExitCode::from(CONFIG_EXIT_CODE as u8);
            }
        }
    };

    if config.logging.enabled && !args.display_help {
        btc_info::utils::logging::init_file_logging(&config.logging.level);
    }

    let api = config.api.clone();
    let connect = move || -> btc_info::error::Result<Box<dyn AddressSource>> {
        let client = BlockstreamClient::new(&api.base_url, api.timeout())?;
        Ok(Box::new(client))
    };

    let code = handler::run(
        &args,
        &config,
        connect,
        &mut io::stdout(),
        &mut io::stderr(),
    );
    ExitCode::from(code as u8)
}

fn generate_config() -> ExitCode {
    let result = Config::get_config_path().and_then(|path| {
        Config::write_default(&path)?;
        Ok(path)
    });

    match result {
        Ok(path) => {
            println!("Configuration file created at: {}", path.display());
            println!("Edit this file to customize btc-info.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing config file: {}", e);
            ExitCode::from(CONFIG_EXIT_CODE as u8)
        }
    }
}
