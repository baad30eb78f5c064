//! Line editors used while the terminal is already in raw mode.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use crossterm::execute;
use zeroize::{Zeroize, Zeroizing};

use crate::terminal::flush;

/// Edit a line of text in place. Esc, Ctrl+Q and Ctrl+C cancel.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit(prompt, initial_value, |_| true, usize::MAX)
}

/// Read a number of at most `max_digits` digits. Empty input yields `None`.
pub fn get_numeric_input(prompt: &str, initial_value: usize, max_digits: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    let digits = edit(prompt, &initial, |c| c.is_ascii_digit(), max_digits)?;
    digits.parse().ok()
}

fn edit(
    prompt: &str,
    initial_value: &str,
    accept: impl Fn(char) -> bool,
    max_len: usize,
) -> Option<String> {
    let mut input: Vec<char> = initial_value.chars().collect();
    let mut cursor_pos = input.len();
    let mut drawn_len = input.len();
    let mut cancelled = false;

    let _ = execute!(std::io::stdout(), Show);
    redraw(prompt, &input, cursor_pos, drawn_len);

    loop {
        match read() {
            Ok(Event::Key(key_event)) if key_event.kind != KeyEventKind::Release => {
                let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
                match key_event.code {
                    KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if ctrl => {
                        input.clear();
                        cursor_pos = 0;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if cursor_pos > 0 {
                            cursor_pos -= 1;
                            input.remove(cursor_pos);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_pos < input.len() {
                            input.remove(cursor_pos);
                        }
                    }
                    KeyCode::Left => cursor_pos = cursor_pos.saturating_sub(1),
                    KeyCode::Right => cursor_pos = (cursor_pos + 1).min(input.len()),
                    KeyCode::Home => cursor_pos = 0,
                    KeyCode::End => cursor_pos = input.len(),
                    KeyCode::Char(c) if !ctrl && accept(c) && input.len() < max_len => {
                        input.insert(cursor_pos, c);
                        cursor_pos += 1;
                    }
                    _ => {}
                }

                redraw(prompt, &input, cursor_pos, drawn_len);
                drawn_len = drawn_len.max(input.len());
            }
            Err(e) => {
                log::warn!("input read failed: {e}");
                cancelled = true;
                break;
            }
            _ => {}
        }
    }

    let _ = execute!(std::io::stdout(), Hide);
    print!("\r\n");
    flush();

    let result = if cancelled {
        None
    } else {
        Some(input.iter().collect())
    };
    input.zeroize();
    result
}

fn redraw(prompt: &str, input: &[char], cursor_pos: usize, drawn_len: usize) {
    let text = Zeroizing::new(input.iter().collect::<String>());
    print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
    print!("\r{}: {}", prompt, text.as_str());
    // Columns are 1-based; the prompt is followed by ": ".
    print!("\x1b[{}G", prompt.chars().count() + 3 + cursor_pos);
    flush();
}
