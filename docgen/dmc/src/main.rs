//! docmodel CLI
//!
//! Member inheritance and hierarchy flattening for documentation models.

use dmc::commands::{
    parse_options, render_hierarchy, render_members, render_report, CliError, Session,
};

fn main() {
    dmc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let result = match command {
        "members" => run_members(&args[2..]),
        "hierarchy" => run_hierarchy(&args[2..]),
        "report" => run_report(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" => {
            println!("docmodel {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("error: unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::NoInput | CliError::UnknownOption(_)) {
            eprintln!("Usage: docmodel {command} <file.json>... [options]");
        }
        std::process::exit(1);
    }
}

fn run_members(args: &[String]) -> Result<(), CliError> {
    let options = parse_options(args)?;
    let session = Session::open(&options)?;
    let types = session.selected_types(options.type_id.as_deref())?;
    session.print_problems();
    print!("{}", render_members(&session.model, &types));
    Ok(())
}

fn run_hierarchy(args: &[String]) -> Result<(), CliError> {
    let options = parse_options(args)?;
    let session = Session::open(&options)?;
    let types = session.selected_types(options.type_id.as_deref())?;
    session.print_problems();
    print!("{}", render_hierarchy(&session.model, &types));
    Ok(())
}

fn run_report(args: &[String]) -> Result<(), CliError> {
    let options = parse_options(args)?;
    let session = Session::open(&options)?;
    let types = session.selected_types(options.type_id.as_deref())?;
    let json = render_report(&session.model, &session.report, &types, options.pretty)?;
    println!("{json}");
    Ok(())
}

fn print_usage() {
    println!("docmodel - member inheritance and hierarchy flattening");
    println!();
    println!("Usage: docmodel <command> <file.json>... [options]");
    println!();
    println!("Commands:");
    println!("  members     Print each type's effective members with page ids");
    println!("  hierarchy   Print flattened class hierarchies");
    println!("  report      Print the processed model as JSON");
    println!("  help        Show this message");
    println!();
    println!("Options:");
    println!("  --type=<id>           Only show the type with this identifier");
    println!("  --unplaced=skip|root  Descendants with a missing base: drop (default)");
    println!("                        or insert at depth 0");
    println!("  --no-implementers     Do not link interfaces to their implementers");
    println!("  --pretty              Pretty-print JSON (report only)");
    println!();
    println!("Set RUST_LOG=debug for diagnostics, DOCMODEL_LOG_TREE=1 for a span tree.");
}
