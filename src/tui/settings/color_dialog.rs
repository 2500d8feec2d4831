//! Color picker dialog state

use crate::config::ThemeColor;

/// Swatches offered by the dialog
pub const PRESET_COLORS: &[&str] = &[
    "#07575b", "#0078d4", "#2d7d9a", "#107c10", "#ff8c00", "#e81123", "#881798", "#ff0000",
];

/// Longest input the dialog accepts (`#rrggbbaa`)
const MAX_INPUT_LEN: usize = 9;

/// Hex entry with preset swatches
///
/// Nothing is written to the store until the dialog is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDialog {
    input: String,
    preset: Option<usize>,
    error: Option<String>,
}

impl ColorDialog {
    pub fn new(current: &ThemeColor) -> Self {
        Self {
            input: current.as_str().to_string(),
            preset: PRESET_COLORS.iter().position(|c| *c == current.as_str()),
            error: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn preset(&self) -> Option<usize> {
        self.preset
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The color the dialog would submit
    pub fn candidate(&self) -> ThemeColor {
        ThemeColor::new(self.input.clone())
    }

    /// Type a character; only `#` and hex digits are taken
    pub fn push_char(&mut self, c: char) -> bool {
        if self.input.len() >= MAX_INPUT_LEN {
            return false;
        }
        match c {
            '#' if self.input.is_empty() => {}
            c if c.is_ascii_hexdigit() => {
                if self.input.is_empty() {
                    self.input.push('#');
                }
            }
            _ => return false,
        }
        self.input.push(c.to_ascii_lowercase());
        self.preset = None;
        self.error = None;
        true
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.preset = None;
        self.error = None;
    }

    pub fn next_preset(&mut self) {
        let next = self.preset.map_or(0, |i| (i + 1) % PRESET_COLORS.len());
        self.pick_preset(next);
    }

    pub fn previous_preset(&mut self) {
        let len = PRESET_COLORS.len();
        let previous = self.preset.map_or(len - 1, |i| (i + len - 1) % len);
        self.pick_preset(previous);
    }

    fn pick_preset(&mut self, index: usize) {
        self.preset = Some(index);
        self.input = PRESET_COLORS[index].to_string();
        self.error = None;
    }

    /// Record that the candidate was refused
    pub fn reject(&mut self) {
        self.error = Some(format!("Invalid color: {}", self.input));
    }
}
