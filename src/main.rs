use std::{env, fs};

use anyhow::{bail, Result};
use log::debug;

use lexer::LexError;

mod lexer;
mod span;

fn main() -> Result<()> {
    stderrlog::new().verbosity(2).init()?;

    let args: Vec<_> = env::args().collect();
    let Some(path) = args.get(1) else {
        bail!("Usage: minilang <source-file>");
    };

    let content = fs::read_to_string(path)?;

    match lexer::tokenize(&content) {
        Ok(tokens) => {
            debug!("lexer produced {} tokens", tokens.len());

            for token in &tokens {
                println!("{}", token);
            }
        }
        Err(error) => {
            describe_error(&error, &content);
            bail!("Lexer error ({})", error.error_type);
        }
    }

    Ok(())
}

/// Prints the line containing the error, with a caret marker pointing at the
/// offending character.
fn describe_error(error: &LexError, source: &str) {
    let start = usize::from(error.span.start());
    let (line_no, line_start, line) = find_line(source, start);

    let gutter = line_no.to_string();
    let padding = " ".repeat(gutter.len() + 2 + (start - line_start));
    let marker = "^".repeat(error.length().into());

    println!("{}| {}", gutter, line);
    println!("{}{}--- {}", padding, marker, error.error_type);
}

/// Finds the 1-based line number, starting byte offset, and text of the line
/// containing `target`.
fn find_line(source: &str, target: usize) -> (usize, usize, &str) {
    let mut position = 0usize;
    for (line_idx, line) in source.split_inclusive(|c| c == '\n' || c == '\r').enumerate() {
        let end_position = position + line.len();
        if target < end_position {
            return (line_idx + 1, position, line.trim_end());
        }
        position = end_position;
    }

    (1, 0, source)
}
