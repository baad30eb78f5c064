//! Terminal output utilities.
//!
//! Box drawing, the strength meter, ANSI helpers. Box helpers return their
//! line instead of printing it so callers can emit `\r\n` in raw mode.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";

/// 256-color foreground escape.
pub fn fg(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// 256-color background escape.
pub fn bg(code: u8) -> String {
    format!("\x1b[48;5;{code}m")
}

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Write lines with `\r\n` endings so they stay aligned in raw mode.
pub fn write_lines(lines: &[String]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let _ = out.write_all(line.as_bytes());
        let _ = out.write_all(b"\r\n");
    }
    let _ = out.flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
/// Usable width between `│ ` and ` │`.
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - console_width(&title_part);
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let display_len = console_width(content);

    if display_len <= INNER_WIDTH {
        let padding = INNER_WIDTH - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

/// Centered box content line: │          content          │
pub fn box_line_center(content: &str) -> String {
    let display_len = console_width(content);

    if display_len <= INNER_WIDTH {
        let total_padding = INNER_WIDTH - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        )
    } else {
        format!("│ {} │", content)
    }
}

/// Horizontal rule inside a box.
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// A help option with key and description, padded to a fixed key column.
pub fn box_opt(key: &str, desc: &str) -> String {
    let key_col = 16;
    let key_len = key.chars().count();
    let key_padded = if key_len < key_col {
        format!("{}{}", key, " ".repeat(key_col - key_len))
    } else {
        key.chars().take(key_col).collect()
    };
    box_line(&format!("{key_padded}{desc}"))
}

/// Split `text` into chunks of at most `width` characters.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// Display width ignoring ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Horizontal bar `width` cells wide, `percent` of it filled with `color`.
/// `rest` is the escape used for the unfilled track.
pub fn meter(percent: u8, width: usize, color: &str, rest: &str) -> String {
    let filled = if percent >= 100 {
        width
    } else {
        (usize::from(percent) * width) / 100
    };
    format!(
        "{color}{}{rest}{}",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_lines_have_fixed_width() {
        assert_eq!(console_width(&box_top("passforge")), BOX_WIDTH);
        assert_eq!(console_width(&box_line("hello")), BOX_WIDTH);
        assert_eq!(console_width(&box_line_center("hello")), BOX_WIDTH);
        assert_eq!(console_width(&box_rule()), BOX_WIDTH);
        assert_eq!(console_width(&box_bottom()), BOX_WIDTH);
        assert_eq!(console_width(&box_opt("q, Esc", "Quit")), BOX_WIDTH);
    }

    #[test]
    fn escapes_do_not_count_toward_width() {
        let colored = format!("{}abc{RESET}", fg(33));
        assert_eq!(console_width(&colored), 3);
        assert_eq!(console_width(&box_line(&colored)), BOX_WIDTH);
    }

    #[test]
    fn meter_fills_proportionally() {
        assert_eq!(console_width(&meter(0, 40, "", "")), 40);
        assert_eq!(meter(50, 10, "", "").matches('█').count(), 5);
        assert_eq!(meter(100, 10, "", "").matches('░').count(), 0);
        assert_eq!(meter(12, 50, "", "").matches('█').count(), 6);
    }

    #[test]
    fn wrap_splits_long_text() {
        let parts = wrap_chars(&"x".repeat(150), 70);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 10);
        assert_eq!(wrap_chars("", 70), vec![String::new()]);
    }
}
