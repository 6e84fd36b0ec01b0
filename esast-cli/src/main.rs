//! Command-line interface for esast
//! Parses one or more ECMAScript source files and prints the AST of each
//! as an indented tree dump (or the raw token stream as JSON).
//!
//! Usage:
//!   esast `<path>`... [--format `<format>`]
//!
//! Inputs are processed independently: a missing file or a syntax error is
//! reported on stderr and the remaining inputs still run. The exit status
//! is non-zero if any input failed.

use clap::{Arg, Command};
use esast_parser::es::formats::to_tree_str;
use esast_parser::es::loader::SourceLoader;

const DELIMITER: &str = "====================================================";

fn main() {
    let matches = Command::new("esast")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A parse-tree to AST builder and printer for ECMAScript sources")
        .arg_required_else_help(true)
        .arg(
            Arg::new("paths")
                .help("Paths to the source files")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["tree", "token-json"])
                .default_value("tree"),
        )
        .get_matches();

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("tree");
    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .map(|values| values.collect())
        .unwrap_or_default();

    let mut failed = false;
    for path in paths {
        if let Err(message) = handle_file(path, format) {
            eprintln!("Error: {message}");
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn handle_file(path: &str, format: &str) -> Result<(), String> {
    println!("\n{DELIMITER}");
    println!("Found source file: {path}");
    println!("{DELIMITER}");

    let loader = SourceLoader::from_path(path.as_ref()).map_err(|err| err.to_string())?;

    let output = match format {
        "token-json" => {
            let tokens = loader.tokenize();
            serde_json::to_string_pretty(&tokens).map_err(|err| err.to_string())?
        }
        _ => {
            let program = loader.parse().map_err(|err| err.to_string())?;
            to_tree_str(&program)
        }
    };

    print!("{output}");
    Ok(())
}
