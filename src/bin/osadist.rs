//! Entry point for the `osadist` command.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;

use osadist::cli::args::OsadistArgs;
use osadist::cli::commands::execute_command;

fn main() -> ExitCode {
    let args = OsadistArgs::parse();

    // RUST_LOG, when set, refines the level picked by -v/-q.
    Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    match execute_command(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("osadist: {e}");
            ExitCode::FAILURE
        }
    }
}
