use crate::terminal::box_opt;

pub const TITLE: &str = "passforge";

pub fn key_hints() -> &'static str {
    "Enter generate • c copy • e edit • ? help • q quit"
}

pub fn edit_prompt() -> &'static str {
    "Password (Esc to cancel)"
}

pub fn length_prompt() -> &'static str {
    "Length (4-128)"
}

/// Help panel lines (without frame top/bottom).
pub fn help_lines() -> Vec<String> {
    vec![
        box_opt("Enter, g", "Generate a new password"),
        box_opt("c", "Copy the password to the clipboard"),
        box_opt("e", "Edit the password; it is re-scored on Enter"),
        box_opt("← / →, - / +", "Shorten / lengthen by one"),
        box_opt("l", "Type an exact length"),
        box_opt("1 2 3 4", "Toggle uppercase, lowercase, numbers, symbols"),
        box_opt("t", "Switch light / dark theme"),
        box_opt("a", "Cycle the accent color"),
        box_opt("?", "Show / hide this help"),
        box_opt("q, Esc", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{BOX_WIDTH, console_width};

    #[test]
    fn help_fits_the_frame() {
        for line in help_lines() {
            assert_eq!(console_width(&line), BOX_WIDTH, "{line}");
        }
    }

    #[test]
    fn edit_help_says_when_strength_updates() {
        let lines = help_lines();
        let edit = lines
            .iter()
            .find(|l| l.contains("Edit the password"))
            .unwrap();
        assert!(edit.contains("on Enter"));
    }
}
