/// Usage text shown for `-H` / `--display_help`
pub struct HelpText;

impl HelpText {
    pub fn usage() -> &'static str {
        r#"
BTC-INFO - BTC OSINT Tool

Usage:
    btc-info -a <btc_address> [-o <output_file>] [-v] [-H]

Options:
    -a, --address=<btc_address>     Specify the BTC address to retrieve information.
    -o, --output=<output_file>      Specify the output file to save the results in JSON format. (optional)
    -v, --verbose                   Enable verbose mode to display detailed information.
    -H, --display_help              Display help message.
        --generate-config           Write a default configuration file and exit.

Environment:
    BTC_INFO_API_URL                Override the explorer API base URL.
    RUST_LOG                        Override the log filter (logs go to a file, never stdout).

Example:
    btc-info -a 1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa -o result.json -v
"#
    }
}
