//! mm-paper – print-ready millimetre graph paper.
//!
//! Usage:
//!   mm-paper [--format A3|A4] [--orientation portrait|landscape]
//!            [--main-color R,G,B] [--minor-color R,G,B]
//!            [--main-thickness PX] [--minor-thickness PX]
//!            [--margin MM] [--output FILE]
//!
//! Set `RUST_LOG=debug` to see the computed geometry.

use clap::Parser;
use std::process;

mod cli;

fn main() {
    env_logger::init();

    let config = cli::Cli::parse().into_config();
    log::debug!("{config:?}");

    match mm_paper::render(&config) {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
