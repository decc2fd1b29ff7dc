use std::env;
use std::process;

use drivejoin::cli;

fn main() {
    let args: Vec<String> = env::args().collect();

    let _ = cli::Config::run(&args).unwrap_or_else(|err| {
        println!();
        cli::print_error(&err.to_string());
        println!();
        cli::print_help();
        process::exit(1);
    });
}
