//! Lexitrie CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use lexitrie::cli::args::LexitrieArgs;
use lexitrie::cli::commands::execute_command;

fn main() {
    let args = LexitrieArgs::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        })
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("lexitrie: {e}");
        process::exit(1);
    }
}
