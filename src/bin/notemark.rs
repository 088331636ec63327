//! Command-line interface for notemark
//! This binary dumps the token stream the markdown lexer produces, for
//! inspecting how a note will be seen by downstream consumers.
//!
//! Usage:
//!   notemark tokens `<path>` [--format `<format>`]  - Lex a file and print its tokens
//!
//! When no path is given the source is read from stdin.

use clap::{Arg, Command};
use std::io::Read;

use notemark::markdown::lexing::lex;

fn main() {
    let matches = Command::new("notemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting the markdown lexer's token stream")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Lex markdown source and print one token per line")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file; reads stdin when omitted")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'plain', 'json')")
                        .default_value("plain"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path");
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path.map(String::as_str), format);
        }
        _ => unreachable!(),
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: Option<&str>, format: &str) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    let tokens = lex(&source);

    match format {
        "plain" => {
            for token in &tokens {
                println!("{}", token);
            }
        }
        "json" => {
            let output = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Error: unknown format '{}'", other);
            std::process::exit(1);
        }
    }
}

fn read_source(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
