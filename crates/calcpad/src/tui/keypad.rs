//! Keypad grids for the terminal frontend
//!
//! Two layouts: the basic pad every mode shows, and the scientific bank
//! that appears next to it in scientific mode. Buttons carry explicit
//! (row, col) positions so rows may be ragged.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{BinaryOp, Constant, InputToken, SciFunction};

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The token this button applies
    pub token: InputToken,
    /// The label shown on the button
    pub label: &'static str,
    /// Grid row
    pub row: u16,
    /// Grid column
    pub col: u16,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    const fn new(token: InputToken, label: &'static str, row: u16, col: u16) -> Self {
        Self {
            token,
            label,
            row,
            col,
            pressed: false,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// A keypad grid: a titled collection of positioned buttons
///
/// ```text
/// basic                 scientific bank
/// [AC ][DEL][sci][ / ]  [sin ][cos ][tan ][ x! ]
/// [ 7 ][ 8 ][ 9 ][ * ]  [asin][acos][atan][ √x ]
/// [ 4 ][ 5 ][ 6 ][ - ]  [sinh][cosh][tanh][ ∛x ]
/// [ 1 ][ 2 ][ 3 ][ + ]  [log ][ ln ][exp ][rnd ]
/// [ 0 ][ . ][ = ]       [⌊x⌋ ][⌈x⌉ ][ π  ][ e  ]
///                       [rand][ MS ][ MR ][ MC ]
///                       [deg/rad]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    title: &'static str,
    buttons: Vec<KeypadButton>,
    rows: u16,
    cols: u16,
}

impl Keypad {
    /// Creates the basic keypad shown in every mode
    #[must_use]
    pub fn basic() -> Self {
        let buttons = vec![
            KeypadButton::new(InputToken::ClearAll, "AC", 0, 0),
            KeypadButton::new(InputToken::Delete, "DEL", 0, 1),
            KeypadButton::new(InputToken::ModeToggle, "sci", 0, 2),
            KeypadButton::new(InputToken::Op(BinaryOp::Divide), "/", 0, 3),
            KeypadButton::new(InputToken::Digit(7), "7", 1, 0),
            KeypadButton::new(InputToken::Digit(8), "8", 1, 1),
            KeypadButton::new(InputToken::Digit(9), "9", 1, 2),
            KeypadButton::new(InputToken::Op(BinaryOp::Multiply), "*", 1, 3),
            KeypadButton::new(InputToken::Digit(4), "4", 2, 0),
            KeypadButton::new(InputToken::Digit(5), "5", 2, 1),
            KeypadButton::new(InputToken::Digit(6), "6", 2, 2),
            KeypadButton::new(InputToken::Op(BinaryOp::Subtract), "-", 2, 3),
            KeypadButton::new(InputToken::Digit(1), "1", 3, 0),
            KeypadButton::new(InputToken::Digit(2), "2", 3, 1),
            KeypadButton::new(InputToken::Digit(3), "3", 3, 2),
            KeypadButton::new(InputToken::Op(BinaryOp::Add), "+", 3, 3),
            KeypadButton::new(InputToken::Digit(0), "0", 4, 0),
            KeypadButton::new(InputToken::Decimal, ".", 4, 1),
            KeypadButton::new(InputToken::Equals, "=", 4, 2),
        ];
        Self {
            title: " Keypad ",
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Creates the scientific key bank shown in scientific mode
    #[must_use]
    pub fn scientific_bank() -> Self {
        let buttons = vec![
            KeypadButton::new(InputToken::Function(SciFunction::Sin), "sin", 0, 0),
            KeypadButton::new(InputToken::Function(SciFunction::Cos), "cos", 0, 1),
            KeypadButton::new(InputToken::Function(SciFunction::Tan), "tan", 0, 2),
            KeypadButton::new(InputToken::Function(SciFunction::Factorial), "x!", 0, 3),
            KeypadButton::new(InputToken::Function(SciFunction::Asin), "asin", 1, 0),
            KeypadButton::new(InputToken::Function(SciFunction::Acos), "acos", 1, 1),
            KeypadButton::new(InputToken::Function(SciFunction::Atan), "atan", 1, 2),
            KeypadButton::new(InputToken::Function(SciFunction::Sqrt), "√x", 1, 3),
            KeypadButton::new(InputToken::Function(SciFunction::Sinh), "sinh", 2, 0),
            KeypadButton::new(InputToken::Function(SciFunction::Cosh), "cosh", 2, 1),
            KeypadButton::new(InputToken::Function(SciFunction::Tanh), "tanh", 2, 2),
            KeypadButton::new(InputToken::Function(SciFunction::Cbrt), "∛x", 2, 3),
            KeypadButton::new(InputToken::Function(SciFunction::Log10), "log", 3, 0),
            KeypadButton::new(InputToken::Function(SciFunction::Ln), "ln", 3, 1),
            KeypadButton::new(InputToken::Function(SciFunction::Exp), "exp", 3, 2),
            KeypadButton::new(InputToken::Function(SciFunction::Round), "rnd", 3, 3),
            KeypadButton::new(InputToken::Function(SciFunction::Floor), "⌊x⌋", 4, 0),
            KeypadButton::new(InputToken::Function(SciFunction::Ceil), "⌈x⌉", 4, 1),
            KeypadButton::new(InputToken::Constant(Constant::Pi), "π", 4, 2),
            KeypadButton::new(InputToken::Constant(Constant::E), "e", 4, 3),
            KeypadButton::new(InputToken::Random, "rand", 5, 0),
            KeypadButton::new(InputToken::MemoryStore, "MS", 5, 1),
            KeypadButton::new(InputToken::MemoryRecall, "MR", 5, 2),
            KeypadButton::new(InputToken::MemoryClear, "MC", 5, 3),
            KeypadButton::new(InputToken::AngleToggle, "d/r", 6, 0),
        ];
        Self {
            title: " Sci ",
            buttons,
            rows: 7,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Finds a button by the token it applies
    #[must_use]
    pub fn find_by_token(&self, token: InputToken) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Highlights the button for a token, releasing all others
    pub fn highlight_token(&mut self, token: InputToken) {
        for btn in &mut self.buttons {
            btn.set_pressed(btn.token == token);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Converts a click position inside the rendered area to the token of
    /// the button under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<InputToken> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for the border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols;
        let btn_height = (area.height - 2) / self.rows;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (rel_x - 1) / btn_width;
        let row = (rel_y - 1) / btn_height;

        self.buttons
            .iter()
            .find(|b| b.row == row && b.col == col)
            .map(|b| b.token)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.token {
            InputToken::Digit(_) | InputToken::Decimal => Style::default().fg(Color::White),
            InputToken::Op(_) => Style::default().fg(Color::Yellow),
            InputToken::Equals => Style::default().fg(Color::Green),
            InputToken::ClearAll | InputToken::Delete => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(self.keypad.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols || inner.height < rows {
            return; // Too small to render
        }

        let btn_width = inner.width / cols;
        let btn_height = inner.height / rows;

        for btn in self.keypad.buttons() {
            let x = inner.x + btn.col * btn_width;
            let y = inner.y + btn.row * btn_height + btn_height / 2;

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;

            if y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(
                    label_x,
                    y,
                    &Span::styled(label, Self::button_style(btn)),
                    btn_width,
                );
            }
        }
    }
}
