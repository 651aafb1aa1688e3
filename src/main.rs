use std::{fs, iter, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use symlex::{
    error::PositionalError,
    lexer::{SymbolTable, Tokenizer},
    source_map,
};

mod commandline;

fn main() -> Result<ExitCode> {
    let options = commandline::Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(options.verbose)
        .init()?;

    let content = fs::read_to_string(&options.file)
        .with_context(|| format!("Unable to read {}", options.file.display()))?;
    let symbols = SymbolTable::new(options.symbols.config())?;

    let mut tokenizer = Tokenizer::new(&content, &symbols);
    let mut count = 0usize;
    loop {
        match tokenizer.next() {
            Ok(Some(token)) => {
                count += 1;
                if !options.count {
                    println!("{}\t{:?}\t{}", token.start, token.kind, token.value);
                }
            }
            Ok(None) => break,
            Err(err) => {
                describe_error(&err, &content);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    if options.count {
        println!("{}", count);
    }
    info!("Read {} tokens from {}", count, options.file.display());

    Ok(ExitCode::SUCCESS)
}

fn describe_error(err: &impl PositionalError, content: &str) {
    let location = err.location();
    error!("Lexer error at {}: {}", location, err.describe());

    let Some(line) = source_map::find_line(content, location.line) else {
        return;
    };
    let display = line.for_display();

    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let gutter = format!("{}", line.line_no());
    let width = usize::from(err.length())
        .min(display.chars().count().saturating_sub(location.column))
        .max(1);

    eprintln!("{}| {}", gutter, display);
    eprintln!(
        "{}| {}{}--- {}",
        pad_char(' ', gutter.len()),
        pad_char(' ', location.column),
        pad_char('^', width),
        err.describe()
    );
}
