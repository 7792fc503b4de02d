//! Command-line interface for blanks
//! This binary extracts placeholders from a document artifact, fills a
//! template from an answers file, or runs the question/answer loop
//! interactively on the terminal.
//!
//! Usage:
//!   blanks extract `<path>` [--format `<format>`]                - Print the placeholder sequence
//!   blanks fill `<path>` --answers `<file>` --output `<path>`    - Fill a template from collected answers
//!   blanks ask `<path>` --output `<path>`                        - Answer questions interactively, then fill

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use clap::{Arg, Command};

use blanks::blanks::filling::AnswerMap;
use blanks::blanks::interview::{AnswerError, Interview};
use blanks::blanks::placeholders::Placeholder;
use blanks::blanks::processor;

fn main() {
    let matches = Command::new("blanks")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for extracting and filling document placeholders")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Print the ordered placeholder sequence of a document")
                .arg(
                    Arg::new("path")
                        .help("Path to the document artifact")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                ),
        )
        .subcommand(
            Command::new("fill")
                .about("Fill a template from an answers file")
                .arg(
                    Arg::new("path")
                        .help("Path to the template artifact")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("answers")
                        .long("answers")
                        .short('a')
                        .help("Answers file (.json or .yaml), occurrence index to value")
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Where to write the filled artifact")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("ask")
                .about("Answer placeholder questions interactively, then fill")
                .arg(
                    Arg::new("path")
                        .help("Path to the template artifact")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Where to write the filled artifact")
                        .required(true),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract", extract_matches)) => {
            let path = extract_matches.get_one::<String>("path").unwrap();
            let format = extract_matches.get_one::<String>("format").unwrap();
            handle_extract_command(path, format);
        }
        Some(("fill", fill_matches)) => {
            let path = fill_matches.get_one::<String>("path").unwrap();
            let answers = fill_matches.get_one::<String>("answers").unwrap();
            let output = fill_matches.get_one::<String>("output").unwrap();
            handle_fill_command(path, answers, output);
        }
        Some(("ask", ask_matches)) => {
            let path = ask_matches.get_one::<String>("path").unwrap();
            let output = ask_matches.get_one::<String>("output").unwrap();
            handle_ask_command(path, output);
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn handle_extract_command(path: &str, format: &str) {
    let placeholders = extract_or_exit(path);
    match format {
        "json" => match serde_json::to_string_pretty(&placeholders) {
            Ok(json) => println!("{json}"),
            Err(err) => fail(&format!("cannot serialize placeholders: {err}")),
        },
        "simple" => {
            for (index, placeholder) in placeholders.iter().enumerate() {
                println!("{index}. {placeholder}");
                if !placeholder.context.is_empty() {
                    println!("   context: ...{}...", placeholder.context);
                }
            }
            println!("{} placeholder(s) found", placeholders.len());
        }
        other => fail(&format!("unknown format '{other}' (expected 'simple' or 'json')")),
    }
}

fn handle_fill_command(path: &str, answers_path: &str, output: &str) {
    let answers = match load_answers(answers_path) {
        Ok(answers) => answers,
        Err(message) => fail(&message),
    };
    let placeholders = extract_or_exit(path);
    if let Err(err) = processor::fill_file(path, output, &placeholders, &answers) {
        fail(&err.to_string());
    }
    println!("Wrote filled document to {output}");
}

fn handle_ask_command(path: &str, output: &str) {
    let placeholders = extract_or_exit(path);
    if placeholders.is_empty() {
        println!("No placeholders found in {path}");
        return;
    }

    let mut interview = Interview::new(placeholders.clone());
    let stdin = io::stdin();
    while let Some(question) = interview.question() {
        println!();
        println!("[{}] {}", interview.progress(), question);
        if let Some(current) = interview.current() {
            if !current.context.is_empty() {
                println!("    context: ...{}...", current.context);
            }
        }
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => fail("input ended before all questions were answered"),
            Ok(_) => {}
            Err(err) => fail(&format!("cannot read answer: {err}")),
        }

        match interview.submit(&line) {
            Ok(()) => {}
            Err(AnswerError::Empty) => println!("Please provide an answer."),
            Err(AnswerError::InvalidAmount(raw)) => {
                println!("'{}' is not a valid number, try again.", raw.trim());
            }
            Err(AnswerError::Complete) => break,
        }
    }

    let answers = interview.into_answers();
    if let Err(err) = processor::fill_file(path, output, &placeholders, &answers) {
        fail(&err.to_string());
    }
    println!();
    println!("Wrote filled document to {output}");
}

fn extract_or_exit(path: &str) -> Vec<Placeholder> {
    match processor::extract_file(path) {
        Ok(placeholders) => placeholders,
        Err(err) => fail(&err.to_string()),
    }
}

/// Parse an answers file mapping occurrence index to value; YAML or JSON by
/// file extension.
fn load_answers(path: &str) -> Result<AnswerMap, String> {
    let bytes = std::fs::read(path).map_err(|err| format!("cannot read answers file '{path}': {err}"))?;
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    if extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml") {
        serde_yaml::from_slice(&bytes).map_err(|err| format!("cannot parse answers file '{path}': {err}"))
    } else {
        serde_json::from_slice(&bytes).map_err(|err| format!("cannot parse answers file '{path}': {err}"))
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}
