use clap::Parser;

/// Fullscreen countdown timer
///
/// TIME is either a clock time ("3:23pm", "2024-12-31 23:59") or a duration
/// ("10s", "5 minutes", "1h 2m 30s").
#[derive(Parser, Debug)]
#[command(name = "countdown", version, about)]
pub struct CountdownCli {
    /// When to stop: a clock time or a duration; multiple words are joined
    #[arg(value_name = "TIME")]
    pub time: Vec<String>,

    /// Milliseconds between screen refreshes
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(10..=1000))]
    pub tick_ms: u64,

    /// Suppress warnings, only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show the parsed time and deadline before starting
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl CountdownCli {
    /// The time expression, or None if no TIME was given
    pub fn expression(&self) -> Option<String> {
        let joined = self.time.join(" ");
        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

/// Rewrite English number words in phrases as digits
#[derive(Parser, Debug)]
#[command(name = "word2num", version, about)]
pub struct Word2NumCli {
    /// Phrases to convert; reads lines from stdin when none are given
    #[arg(value_name = "PHRASE")]
    pub phrases: Vec<String>,

    /// Print the built-in example phrases and their conversions
    #[arg(long, conflicts_with = "phrases")]
    pub demo: bool,
}
