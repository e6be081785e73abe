pub mod cli;
pub mod converter;
pub mod countdown;
pub mod dateparse;
pub mod glyphs;
pub mod output;
pub mod screen;
pub mod timespec;
pub mod types;
