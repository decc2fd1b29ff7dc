use std::process;

use crate::compare_join;
use crate::compare_join_pairs;
use crate::constants::{DEMO_LEFT, DEMO_RIGHTS};
use crate::JoinReport;

pub struct Config {}

impl Config {
    pub fn run(args: &[String]) -> Result<Config, Box<dyn std::error::Error>> {
        init_tracing();

        // Check for special flags
        if args.len() == 2 {
            match args[1].as_str() {
                "--version" | "-v" => {
                    print_version();
                    process::exit(0);
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                other => {
                    return Err(format!(
                        "unrecognized argument `{other}`, expecting a flag or two path fragments"
                    )
                    .into());
                }
            }
        }

        if args.len() > 3 {
            return Err(
                "too many arguments, expecting at most two path fragments, such as `drivejoin C:\\ C:foo`"
                    .into(),
            );
        }

        print_version();

        if args.len() == 3 {
            // compare a caller-supplied pair instead of the built-in demo
            print_report(&compare_join(&args[1], &args[2]));
        } else {
            for report in compare_join_pairs(DEMO_LEFT, &DEMO_RIGHTS) {
                print_report(&report);
            }
        }

        Ok(Config {})
    }
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "cli"))]
fn init_tracing() {}

pub fn print_version() {
    println!("drivejoin {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_error(error: &str) {
    const RED: &str = "\x1b[31m";
    const RESET: &str = "\x1b[0m";
    println!("{}Problem parsing arguments: {error}{}", RED, RESET);
}

pub fn print_help() {
    // ANSI color codes
    const BOLD: &str = "\x1b[1m";
    const CYAN: &str = "\x1b[36m";
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const RESET: &str = "\x1b[0m";

    println!(
        "🧭 Drive-aware vs textual path joining - https://github.com/drivejoin/drivejoin{}",
        RESET
    );
    println!();
    println!("{}{}VERSION:{}", BOLD, YELLOW, RESET);
    println!("    {}{}{}", GREEN, env!("CARGO_PKG_VERSION"), RESET);
    println!();
    println!("{}{}USAGE:{}", BOLD, YELLOW, RESET);
    println!("    {} drivejoin{}", GREEN, RESET);
    println!("    {} drivejoin <LEFT> <RIGHT>{}", GREEN, RESET);
    println!();
    println!("     With no arguments, joins the two built-in fragment pairs");
    println!("     under both rules and reports the results along with their");
    println!("     absoluteness. With two arguments, reports on that pair");
    println!("     instead.");
    println!();
    println!("{}{}OPTIONS:{}", BOLD, YELLOW, RESET);
    println!(
        "    {}  -v, --version{}{}    Print version information",
        GREEN, RESET, RESET
    );
    println!(
        "    {}  -h, --help{}{}       Print help information",
        GREEN, RESET, RESET
    );
    println!();
    println!("{}{}EXAMPLES:{}", BOLD, YELLOW, RESET);
    println!("    {} # Built-in fragment pairs{}", CYAN, RESET);
    println!("    {} drivejoin{}", GREEN, RESET);
    println!();
    println!("    {} # A pair of your own{}", CYAN, RESET);
    println!("    {} drivejoin 'C:\\' C:foo{}", GREEN, RESET);
    println!();
}

pub fn print_report(report: &JoinReport) {
    println!();
    println!("left = {:?}, right = {:?}", report.left, report.right);
    println!("joined = {:?}", report.joined.to_string());
    println!("joined.is_absolute() = {}", report.joined_is_absolute());
    println!(
        "is_absolute_text(joined) = {}",
        report.joined_text_is_absolute()
    );
    println!("spliced = {:?}", report.spliced);
    println!(
        "is_absolute_text(spliced) = {}",
        report.spliced_is_absolute()
    );
}
