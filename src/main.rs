//! pmaconf CLI entry point.

use clap::Parser;

use pmaconf::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = pmaconf::cli::run(cli) {
        pmaconf::cli::handle_error(&err, json);
    }
}
