use crate::config::DisplayConfig;
use crate::status::Status;
use unicode_width::UnicodeWidthStr;

/// Box-drawing characters for card borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub left_junction: String,
    pub right_junction: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "┌".to_string(),
            top_right: "┐".to_string(),
            bottom_left: "└".to_string(),
            bottom_right: "┘".to_string(),
            left_junction: "├".to_string(),
            right_junction: "┤".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            left_junction: "+".to_string(),
            right_junction: "+".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Uppercase badge text for a computed status, e.g. `[LIVE]`.
pub fn status_badge(status: Status) -> String {
    format!("[{}]", status.label().to_uppercase())
}

/// Format a header with text and underline
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Render a bordered card: a title row, a separator, then one row per body
/// line. The inner width adapts to the widest line; padding is computed from
/// display width, not byte length, so team and tournament names render
/// cleanly regardless of script.
pub fn format_card(title: &str, body: &[String], display: &DisplayConfig) -> String {
    let b = &display.box_chars;
    let inner = body
        .iter()
        .map(|line| line.width())
        .chain(std::iter::once(title.width()))
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    out.push_str(&format!(
        "{}{}{}\n",
        b.top_left,
        b.horizontal.repeat(inner),
        b.top_right
    ));
    out.push_str(&format_card_row(title, inner, b));
    out.push_str(&format!(
        "{}{}{}\n",
        b.left_junction,
        b.horizontal.repeat(inner),
        b.right_junction
    ));
    for line in body {
        out.push_str(&format_card_row(line, inner, b));
    }
    out.push_str(&format!(
        "{}{}{}\n",
        b.bottom_left,
        b.horizontal.repeat(inner),
        b.bottom_right
    ));
    out
}

fn format_card_row(text: &str, inner: usize, b: &BoxChars) -> String {
    let padding = inner.saturating_sub(text.width() + 1);
    format!(
        "{} {}{}{}\n",
        b.vertical,
        text,
        " ".repeat(padding),
        b.vertical
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_header_single_line_unicode() {
        let display = DisplayConfig {
            use_unicode: true,
            ..Default::default()
        };
        let result = format_header("Scrims", false, &display);
        assert_eq!(result, "Scrims\n──────\n");
    }

    #[test]
    fn format_header_double_line_ascii() {
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
        };
        let result = format_header("Tournaments", true, &display);
        assert_eq!(result, "Tournaments\n===========\n");
    }

    #[test]
    fn status_badges() {
        assert_eq!(status_badge(Status::Upcoming), "[UPCOMING]");
        assert_eq!(status_badge(Status::Live), "[LIVE]");
        assert_eq!(status_badge(Status::Passed), "[PASSED]");
    }

    #[test]
    fn card_sizes_to_widest_line() {
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
        };
        let card = format_card(
            "NIGHT SCRIM",
            &["Date: 2024-06-01".to_string(), "[LIVE]".to_string()],
            &display,
        );
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "+------------------+");
        assert_eq!(lines[1], "| NIGHT SCRIM      |");
        assert_eq!(lines[2], "+------------------+");
        assert_eq!(lines[3], "| Date: 2024-06-01 |");
        assert_eq!(lines[4], "| [LIVE]           |");
        assert_eq!(lines[5], "+------------------+");
    }

    #[test]
    fn card_rows_align_regardless_of_byte_length() {
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
        };
        let card = format_card("Ωmega", &["ab".to_string()], &display);
        let widths: Vec<usize> = card
            .lines()
            .map(unicode_width::UnicodeWidthStr::width)
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }
}
