use anyhow::{Context, Result};
use clap::Parser;
use numclock::cli::CountdownCli;
use numclock::countdown::{run_countdown, Clock, Outcome, SystemClock};
use numclock::dateparse::FuzzyDateParser;
use numclock::glyphs::BlockFont;
use numclock::output::Output;
use numclock::screen::CrosstermScreen;
use numclock::timespec::parse_time_spec;
use numclock::types::TimeSpec;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn main() {
    let cli = CountdownCli::parse();

    let Some(expression) = cli.expression() else {
        println!("Usage: countdown [time]");
        std::process::exit(1);
    };

    let output = Output::new(cli.quiet, cli.verbose);

    match run(&cli, &expression, &output) {
        Ok(Outcome::Cancelled) => println!("\nDone early, OK!"),
        Ok(_) => {}
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn run(cli: &CountdownCli, expression: &str, output: &Output) -> Result<Outcome> {
    // SIGINT from outside; keyboard Ctrl-C arrives as a key once raw mode is on
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("Failed to install interrupt handler")?;

    let clock = SystemClock;
    let spec = parse_time_spec(expression, &FuzzyDateParser, clock.now())
        .with_context(|| format!("Failed to parse time '{}'", expression))?;

    match spec {
        TimeSpec::Absolute(at) => output.verbose(&format!("Counting down to {}", at)),
        TimeSpec::Relative(0) => output.warning(&format!(
            "no duration found in '{}', nothing to count down",
            expression
        )),
        TimeSpec::Relative(secs) => output.verbose(&format!("Counting down {} seconds", secs)),
    }

    let end = spec.end_instant(clock.now());
    let mut screen = CrosstermScreen::new();
    run_countdown(
        &mut screen,
        &clock,
        &BlockFont,
        end,
        Duration::from_millis(cli.tick_ms),
        &cancel,
    )
}
