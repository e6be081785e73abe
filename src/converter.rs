// Converter module for rewriting English number words inside phrases as digits

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Look up the value of a unit, teen, or tens word (already lowercased)
pub fn word_value(word: &str) -> Option<u64> {
    static NUMBER_WORDS: Lazy<HashMap<&'static str, u64>> = Lazy::new(|| {
        let mut m = HashMap::new();
        m.insert("zero", 0);
        m.insert("a", 1);
        m.insert("an", 1);
        m.insert("one", 1);
        m.insert("two", 2);
        m.insert("three", 3);
        m.insert("four", 4);
        m.insert("five", 5);
        m.insert("six", 6);
        m.insert("seven", 7);
        m.insert("eight", 8);
        m.insert("nine", 9);
        m.insert("ten", 10);
        m.insert("eleven", 11);
        m.insert("twelve", 12);
        m.insert("thirteen", 13);
        m.insert("fourteen", 14);
        m.insert("fifteen", 15);
        m.insert("sixteen", 16);
        m.insert("seventeen", 17);
        m.insert("eighteen", 18);
        m.insert("nineteen", 19);
        m.insert("twenty", 20);
        m.insert("thirty", 30);
        m.insert("forty", 40);
        m.insert("fifty", 50);
        m.insert("sixty", 60);
        m.insert("seventy", 70);
        m.insert("eighty", 80);
        m.insert("ninety", 90);
        m
    });

    NUMBER_WORDS.get(word).copied()
}

/// Scale factor for "hundred", "thousand" and "million".
///
/// "billion" is deliberately absent: it is treated as ordinary text and ends
/// any number in progress.
pub fn multiplier(word: &str) -> Option<u64> {
    match word {
        "hundred" => Some(100),
        "thousand" => Some(1_000),
        "million" => Some(1_000_000),
        _ => None,
    }
}

/// Running total for the number currently being read
#[derive(Debug, Default)]
struct Accumulator {
    value: u64,
    in_progress: bool,
}

impl Accumulator {
    fn add(&mut self, n: u64) {
        self.value = self.value.saturating_add(n);
        self.in_progress = true;
    }

    /// Multiplies the whole running total, not just the last unit word
    fn scale(&mut self, factor: u64) {
        self.value = self.value.saturating_mul(factor);
    }

    fn flush_into(&mut self, out: &mut Vec<String>) {
        if self.in_progress {
            out.push(self.value.to_string());
        }
        *self = Accumulator::default();
    }
}

/// Replace runs of number words in `phrase` with their integer value.
///
/// The phrase is lowercased, hyphens become word breaks, and the output tokens
/// are joined with single spaces. Anything that isn't a number word passes
/// through unchanged.
pub fn convert(phrase: &str) -> String {
    let normalized = phrase.to_lowercase().replace('-', " ");
    let mut out = Vec::new();
    let mut acc = Accumulator::default();

    for token in normalized.split_whitespace() {
        if let Some(n) = word_value(token) {
            acc.add(n);
            continue;
        }

        if acc.in_progress {
            if let Some(factor) = multiplier(token) {
                acc.scale(factor);
                continue;
            }
            if token == "and" {
                continue;
            }
        }

        acc.flush_into(&mut out);
        out.push(token.to_string());
    }
    acc.flush_into(&mut out);

    out.join(" ")
}
