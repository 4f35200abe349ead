mod cli;

use std::panic;
use votemarket_db::error::Error;

fn main() {
    let result = cli::parse_args(std::env::args_os()).and_then(|args| {
        panic::catch_unwind(move || cli::run(args))
            .unwrap_or_else(|_| Err(Error::Unexpected("internal panic".to_string())))
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if matches!(e, Error::ArgumentCount) {
            eprintln!("{}", cli::USAGE);
        }
        if let Some(example) = e.example() {
            eprintln!("{}", example);
        }
        std::process::exit(1);
    }
}
