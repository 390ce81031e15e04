//! Statistics view: keyboard open/close and the rows it shows

use std::fmt;

use crate::metrics::DocumentMetrics;

/// Physical key code, as reported by the browser's `KeyboardEvent.code`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCode {
    KeyC,
    Escape,
    Other(String),
}

impl KeyCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "KeyC" => KeyCode::KeyC,
            "Escape" => KeyCode::Escape,
            other => KeyCode::Other(other.to_string()),
        }
    }
}

/// A global key-down event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(code: KeyCode, ctrl: bool, shift: bool) -> Self {
        Self { code, ctrl, shift }
    }
}

/// What a key event did to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Shortcut matched; the caller should suppress the browser default
    Opened,
    Closed,
    Ignored,
}

impl KeyOutcome {
    pub fn prevent_default(&self) -> bool {
        matches!(self, KeyOutcome::Opened)
    }
}

/// Open/closed state of the statistics view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsPanel {
    open: bool,
}

impl StatsPanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// "Document Stats" button
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close button or backdrop click
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Ctrl+Shift+C opens; Escape closes regardless of focus
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        match event.code {
            KeyCode::KeyC if event.ctrl && event.shift => {
                self.open = true;
                KeyOutcome::Opened
            }
            KeyCode::Escape => {
                self.open = false;
                KeyOutcome::Closed
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

/// One labelled row in the statistics view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRow {
    pub label: &'static str,
    pub value: usize,
    pub suffix: Option<&'static str>,
}

impl fmt::Display for StatRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)?;
        if let Some(suffix) = self.suffix {
            write!(f, " {}", suffix)?;
        }
        Ok(())
    }
}

/// Rows in display order
pub fn stat_rows(metrics: &DocumentMetrics) -> [StatRow; 5] {
    let row = |label: &'static str, value: usize| StatRow {
        label,
        value,
        suffix: None,
    };
    [
        row("Characters (with spaces)", metrics.char_count),
        row("Characters (without spaces)", metrics.chars_without_spaces),
        row("Words", metrics.word_count),
        row("Paragraphs", metrics.paragraph_count),
        StatRow {
            label: "Reading time",
            value: metrics.reading_time_minutes,
            suffix: Some("min"),
        },
    ]
}
