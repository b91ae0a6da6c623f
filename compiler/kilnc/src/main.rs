//! Kiln CLI.

use kilnc::{ast_source, check_source, lex_source, read_file, DriverError, FileOptions, Report};

fn main() {
    kilnc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match run(&args[1], &args[2..]) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, DriverError::UnknownCommand(_)) {
                eprintln!();
                print_usage();
            }
            std::process::exit(1);
        }
    }
}

fn run(command: &str, rest: &[String]) -> Result<i32, DriverError> {
    match command {
        "check" => {
            let options = FileOptions::parse(rest)?;
            let source = read_file(&options.path)?;
            Ok(emit(&check_source(&options.path, &source, options.config)))
        }
        "ast" => {
            let options = FileOptions::parse(rest)?;
            let source = read_file(&options.path)?;
            Ok(emit(&ast_source(&options.path, &source, options.config)))
        }
        "lex" => {
            let options = FileOptions::parse(rest)?;
            let source = read_file(&options.path)?;
            let tokens = lex_source(&source);
            println!("Tokens for '{}' ({} tokens):", options.path, tokens.len());
            for line in tokens {
                println!("  {line}");
            }
            Ok(0)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(0)
        }
        other => Err(DriverError::UnknownCommand(other.to_string())),
    }
}

fn emit(report: &Report) -> i32 {
    for line in &report.lines {
        println!("{line}");
    }
    for diag in &report.diagnostics {
        eprintln!("{diag}");
    }
    report.exit_code()
}

fn print_usage() {
    eprintln!("Usage: kiln <command> <file> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  check <file>   Parse a file and print each function's type");
    eprintln!("  ast <file>     Print declarations and parameter clauses");
    eprintln!("  lex <file>     Print the token stream");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --error-limit=N   Stop reporting after N errors (0 = no limit, default 10)");
    eprintln!("  --no-dedup        Report repeated errors at the same location");
    eprintln!();
    eprintln!("Set RUST_LOG to enable tracing; KILN_LOG_TREE=1 for an indented tree.");
}
