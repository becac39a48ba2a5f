//! Sift CLI
//!
//! Runs the structural pattern-matching demonstrations.

use siftc::{init_tracing, parse_args, run_demos, CliConfig, Command, Output, DEMOS};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = CliConfig::from_env();

    let command = match parse_args(&args, &mut config) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };
    init_tracing(&config);

    match command {
        Command::Help => print_usage(),
        Command::List => {
            for demo in DEMOS {
                println!("  {:<14}{}", demo.name, demo.title);
            }
        }
        Command::Run(names) => {
            if let Err(err) = run_demos(&names, &Output::stdout()) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Sift - structural pattern-matching dispatcher");
    println!();
    println!("Usage: siftc <command> [options]");
    println!();
    println!("Commands:");
    println!("  list                 List the demonstrations");
    println!("  run [<demo>...]      Run the named demonstrations (all by default)");
    println!("  help                 Show this message");
    println!();
    println!("Options:");
    println!("  -v, --verbose        Log dispatch decisions (debug level)");
    println!("  --trace              Log every pattern and guard rejection");
    println!();
    println!("Environment:");
    println!("  SIFT_LOG=<filter>    Log filter directive, overrides -v/--trace");
    println!("  SIFT_LOG_TREE=1      Hierarchical span output");
}
