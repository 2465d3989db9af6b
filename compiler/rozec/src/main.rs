//! Roze command line.

use rozec::commands::{check_file, dump_file, lex_file, parse_file, parse_run_args, run_file};

fn main() {
    rozec::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    match command {
        "run" => match parse_run_args(&args[2..]) {
            Ok(run) => run_file(&run.path, &run.options),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: roze run <file> [--max-laps=N] [--max-depth=N]");
                std::process::exit(1);
            }
        },
        "check" | "dump" | "parse" | "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: roze {command} <file>");
                std::process::exit(1);
            };
            match command {
                "check" => check_file(path),
                "dump" => dump_file(path),
                "parse" => parse_file(path),
                _ => lex_file(path),
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => println!("Roze {}", env!("CARGO_PKG_VERSION")),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Roze");
    println!();
    println!("Usage: roze <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>       Compile and run a program, printing its result");
    println!("  check <file>     Report every error without running");
    println!("  dump <file>      Print the compiled functions and top-level block");
    println!("  parse <file>     Parse and display parse tree info");
    println!("  lex <file>       Tokenize and display tokens");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Run options:");
    println!("  --max-laps=N     Fail a pipeline that runs more than N laps");
    println!("  --max-depth=N    Fail when calls nest deeper than N");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=roze_eval=debug) to trace the phases.");
}
