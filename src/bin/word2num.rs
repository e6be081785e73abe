use anyhow::{Context, Result};
use clap::Parser;
use numclock::cli::Word2NumCli;
use numclock::converter::convert;
use numclock::output::Output;
use std::io::{self, BufRead, Write};

const DEMO_PHRASES: &[&str] = &[
    "one hundred and twenty five minutes",
    "two hundred and thirty one people",
    "ninety nine red balloons",
    "a journey of a thousand miles begins with a single step",
    "a journey of four million and four miles begins the same way",
    "journey of two billion four hundred and seventy seven miles? nah.",
];

fn main() {
    let cli = Word2NumCli::parse();
    let output = Output::new(false, false);

    if let Err(e) = run(&cli) {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Word2NumCli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.demo {
        for phrase in DEMO_PHRASES {
            writeln!(out, "Original: {}", phrase)?;
            writeln!(out, "Converted: {}\n", convert(phrase))?;
        }
        return Ok(());
    }

    if !cli.phrases.is_empty() {
        for phrase in &cli.phrases {
            writeln!(out, "{}", convert(phrase))?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read standard input")?;
        writeln!(out, "{}", convert(&line))?;
    }
    Ok(())
}
