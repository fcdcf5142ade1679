use clap::Parser;
use std::process;

use harsnip::cli::Cli;
use harsnip::{logging, router};

fn main() {
    let cli = Cli::parse();
    logging::init_logging();

    if let Err(e) = router::run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
