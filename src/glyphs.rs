// Large-character rendering for the countdown display

/// Turns a string into a block of display lines
pub trait GlyphRenderer {
    fn render(&self, text: &str) -> Vec<String>;
}

const GLYPH_HEIGHT: usize = 5;

static DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["█████", "█   █", "█   █", "█   █", "█████"],
    ["  ██ ", "   █ ", "   █ ", "   █ ", "  ███"],
    ["█████", "    █", "█████", "█    ", "█████"],
    ["█████", "    █", " ████", "    █", "█████"],
    ["█   █", "█   █", "█████", "    █", "    █"],
    ["█████", "█    ", "█████", "    █", "█████"],
    ["█████", "█    ", "█████", "█   █", "█████"],
    ["█████", "    █", "   █ ", "  █  ", "  █  "],
    ["█████", "█   █", "█████", "█   █", "█████"],
    ["█████", "█   █", "█████", "    █", "█████"],
];

static COLON: [&str; GLYPH_HEIGHT] = ["   ", " █ ", "   ", " █ ", "   "];

static SPACE: [&str; GLYPH_HEIGHT] = ["   "; GLYPH_HEIGHT];

/// A five-row block font covering digits and ':'.
///
/// Characters outside the font render as a blank cell so the clock keeps its
/// shape whatever it's asked to draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockFont;

impl BlockFont {
    fn glyph(ch: char) -> &'static [&'static str; GLYPH_HEIGHT] {
        match ch {
            ':' => &COLON,
            _ => match ch.to_digit(10) {
                Some(d) => &DIGITS[d as usize],
                None => &SPACE,
            },
        }
    }
}

impl GlyphRenderer for BlockFont {
    fn render(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        (0..GLYPH_HEIGHT)
            .map(|row| {
                text.chars()
                    .map(|ch| BlockFont::glyph(ch)[row])
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_height() {
        let lines = BlockFont.render("00:00:00");
        assert_eq!(lines.len(), GLYPH_HEIGHT);
    }

    #[test]
    fn test_render_rows_equal_width() {
        let lines = BlockFont.render("12:34:56");
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        // 6 digits * 5 + 2 colons * 3 + 7 gaps
        assert_eq!(width, 43);
    }

    #[test]
    fn test_render_single_digit() {
        let lines = BlockFont.render("8");
        assert_eq!(lines[0], "█████");
        assert_eq!(lines[1], "█   █");
    }

    #[test]
    fn test_render_unknown_char_is_blank() {
        let lines = BlockFont.render("x");
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_render_empty() {
        assert!(BlockFont.render("").is_empty());
    }
}
