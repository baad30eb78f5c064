//! crossterm implementation of [`UiSurface`].

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use zeroize::Zeroize;

use super::input::{get_editable_input, get_numeric_input};
use super::text::{TITLE, edit_prompt, help_lines, key_hints, length_prompt};
use super::theme::{Palette, strength_code};
use crate::app::{Element, UiEvent, UiSurface};
use crate::pass::{CharacterClass, MAX_LENGTH, StrengthColor};
use crate::settings::{Accent, Theme};
use crate::terminal::{
    BOLD, INNER_WIDTH, RawModeGuard, box_bottom, box_line, box_line_center, box_rule, box_top,
    clear, fg, meter, wrap_chars, write_lines,
};

/// How often an idle surface emits [`UiEvent::Tick`].
const TICK: Duration = Duration::from_millis(250);
const METER_WIDTH: usize = 50;

pub struct TerminalUi {
    _guard: RawModeGuard,
    texts: HashMap<Element, String>,
    checked: HashMap<CharacterClass, bool>,
    strength: (u8, StrengthColor),
    theme: Theme,
    accent: Accent,
    palette: Palette,
    show_help: bool,
    alert: Option<String>,
    dirty: bool,
}

impl TerminalUi {
    pub fn new() -> io::Result<Self> {
        let guard = RawModeGuard::new()?;
        Ok(Self {
            _guard: guard,
            texts: HashMap::new(),
            checked: HashMap::new(),
            strength: (0, StrengthColor::None),
            theme: Theme::default(),
            accent: Accent::default(),
            palette: Palette::new(Theme::default(), Accent::default()),
            show_help: false,
            alert: None,
            dirty: true,
        })
    }

    fn text(&self, element: Element) -> &str {
        self.texts.get(&element).map(String::as_str).unwrap_or("")
    }

    fn render(&self) {
        let p = &self.palette;
        let mut lines = Vec::new();

        lines.push(box_top(&p.accent(&format!("{BOLD}{TITLE}\x1b[22m"))));
        lines.push(box_line(&p.dim("Password")));
        let password = self.text(Element::PasswordField);
        if password.is_empty() {
            lines.push(box_line(&p.dim("  (nothing to show: select at least one character type)")));
        } else {
            for chunk in wrap_chars(password, INNER_WIDTH - 2) {
                lines.push(box_line(&format!("  {}", p.accent(&format!("{BOLD}{chunk}\x1b[22m")))));
            }
        }
        lines.push(box_line(&format!(
            "{} {}",
            p.accent("[c]"),
            self.text(Element::CopyButton)
        )));

        lines.push(box_rule());
        let (width, color) = self.strength;
        let label = self.text(Element::StrengthLabel);
        let code = strength_code(color, p);
        lines.push(box_line(&format!(
            "Strength: {}  {}",
            p.colored(code, if label.is_empty() { "-" } else { label }),
            p.dim(&format!("({})", self.text(Element::Entropy)))
        )));
        lines.push(box_line(&format!(
            "{}{}",
            meter(width, METER_WIDTH, &fg(code), &fg(p.dim)),
            p.base()
        )));
        lines.push(box_line(&format!(
            "Time to crack: {}",
            self.text(Element::CrackTime)
        )));

        lines.push(box_rule());
        lines.push(box_line(&format!(
            "Length: {:>3}  {}",
            self.text(Element::LengthValue),
            p.dim(&format!("[←/→] [l] type (max {MAX_LENGTH})"))
        )));
        for pair in CharacterClass::ALL.chunks(2) {
            let cells: Vec<String> = pair
                .iter()
                .map(|class| {
                    let idx = CharacterClass::ALL.iter().position(|c| c == class).unwrap_or(0) + 1;
                    let mark = if self.checked.get(class).copied().unwrap_or(false) {
                        p.accent("[x]")
                    } else {
                        "[ ]".to_string()
                    };
                    format!("{mark} {idx} {:<22}", class.label())
                })
                .collect();
            lines.push(box_line(&cells.join("  ")));
        }

        lines.push(box_rule());
        lines.push(box_line(&format!(
            "Theme: {} {}   Accent: {} {}",
            self.theme,
            p.dim("[t]"),
            p.accent(self.accent.as_str()),
            p.dim("[a]")
        )));
        if self.show_help {
            lines.push(box_rule());
            lines.extend(help_lines());
        } else {
            lines.push(box_line_center(&p.dim(key_hints())));
        }
        lines.push(box_bottom());

        if let Some(message) = &self.alert {
            lines.push(String::new());
            lines.push(box_top("Error"));
            lines.push(box_line(message));
            lines.push(box_line_center(&p.dim("press any key")));
            lines.push(box_bottom());
        }

        let mut painted: Vec<String> = lines.iter().map(|l| p.paint(l)).collect();
        painted.push(self.text(Element::Announcer).to_string());

        clear();
        write_lines(&painted);
        painted.zeroize();
    }

    fn map_key(&mut self, key: KeyEvent) -> Option<UiEvent> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let event = match key.code {
            KeyCode::Char('c') if ctrl => UiEvent::Quit,
            KeyCode::Char('q') | KeyCode::Esc => UiEvent::Quit,
            KeyCode::Left | KeyCode::Char('-') => UiEvent::LengthStep(-1),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => UiEvent::LengthStep(1),
            KeyCode::Enter | KeyCode::Char('g') => UiEvent::Generate,
            KeyCode::Char('c') => UiEvent::Copy,
            KeyCode::Char('t') => UiEvent::ThemeToggled,
            KeyCode::Char('a') => UiEvent::AccentCycled,
            KeyCode::Char(d @ '1'..='4') => {
                let idx = d as usize - '1' as usize;
                UiEvent::ClassToggled(CharacterClass::ALL[idx])
            }
            KeyCode::Char('l') => {
                let current = self.text(Element::LengthValue).parse().unwrap_or(0);
                let n = get_numeric_input(length_prompt(), current, 3)?;
                UiEvent::LengthChanged(n)
            }
            KeyCode::Char('e') => {
                let mut current = self.text(Element::PasswordField).to_string();
                let edited = get_editable_input(edit_prompt(), &current);
                current.zeroize();
                UiEvent::PasswordEdited(edited?)
            }
            KeyCode::Char('?') | KeyCode::Char('h') => {
                self.show_help = !self.show_help;
                self.render();
                return None;
            }
            _ => return None,
        };
        Some(event)
    }
}

impl UiSurface for TerminalUi {
    fn next_event(&mut self) -> Option<UiEvent> {
        loop {
            match event::poll(TICK) {
                Ok(false) => return Some(UiEvent::Tick),
                Ok(true) => {}
                Err(e) => {
                    log::error!("terminal poll failed: {e}");
                    return None;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(event) = self.map_key(key) {
                        return Some(event);
                    }
                    // Cancelled prompts leave stray text below the frame.
                    self.render();
                }
                Ok(Event::Resize(..)) => self.render(),
                Ok(_) => {}
                Err(e) => {
                    log::error!("terminal read failed: {e}");
                    return None;
                }
            }
        }
    }

    fn set_text(&mut self, element: Element, text: &str) {
        let slot = self.texts.entry(element).or_default();
        if slot.as_str() != text {
            slot.zeroize();
            slot.push_str(text);
            self.dirty = true;
        }
    }

    fn set_checked(&mut self, class: CharacterClass, checked: bool) {
        self.checked.insert(class, checked);
        self.dirty = true;
    }

    fn set_strength(&mut self, width_percent: u8, color: StrengthColor) {
        self.strength = (width_percent, color);
        self.dirty = true;
    }

    fn apply_theme(&mut self, theme: Theme, accent: Accent) {
        self.theme = theme;
        self.accent = accent;
        self.palette = Palette::new(theme, accent);
        self.dirty = true;
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
        self.render();
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("terminal read failed during alert: {e}");
                    break;
                }
            }
        }
        self.alert = None;
        self.dirty = true;
    }

    fn flush(&mut self) {
        if self.dirty {
            self.render();
            self.dirty = false;
        }
    }
}

impl Drop for TerminalUi {
    fn drop(&mut self) {
        for text in self.texts.values_mut() {
            text.zeroize();
        }
    }
}
