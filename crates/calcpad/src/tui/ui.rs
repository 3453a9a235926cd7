//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUI::new(app);
    frame.render_widget(ui, area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    basic: Keypad,
    scientific: Keypad,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self {
            app,
            basic: Keypad::basic(),
            scientific: Keypad::scientific_bank(),
        }
    }

    /// Creates the vertical layout: pending line, display, status, keypad
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),  // Pending expression
                Constraint::Length(3),  // Display
                Constraint::Length(1),  // Status indicators
                Constraint::Min(12),    // Keypad area
            ])
            .split(area)
            .to_vec()
    }

    fn render_pending(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.pending().unwrap_or_default();
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right)
            .render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.has_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.status_line(),
            Style::default().fg(Color::Cyan),
        ))
        .render(area, buf);
    }

    fn render_keypads(&self, area: Rect, buf: &mut Buffer) {
        if self.app.scientific_mode() {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            KeypadWidget::new(&self.basic).render(halves[0], buf);
            KeypadWidget::new(&self.scientific).render(halves[1], buf);
        } else {
            KeypadWidget::new(&self.basic).render(area, buf);
        }
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let chunks = self.create_layout(area);
        if chunks.len() >= 4 {
            self.render_pending(chunks[0], buf);
            self.render_display(chunks[1], buf);
            self.render_status(chunks[2], buf);
            self.render_keypads(chunks[3], buf);
        }
    }
}

/// Title shown on the outer border
pub const APP_TITLE: &str = " Calcpad ";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BinaryOp, InputToken};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_power_on_state() {
        let app = CalculatorApp::new();
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Calcpad"));
        assert!(content.contains('0'));
        assert!(content.contains("DEG"));
        assert!(content.contains("[7]"));
    }

    #[test]
    fn test_render_shows_display_value() {
        let mut app = CalculatorApp::new();
        app.press(InputToken::Digit(4));
        app.press(InputToken::Digit(2));
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_content(&terminal).contains("42"));
    }

    #[test]
    fn test_render_shows_pending_line() {
        let mut app = CalculatorApp::new();
        app.press(InputToken::Digit(1));
        app.press(InputToken::Digit(2));
        app.press(InputToken::Op(BinaryOp::Add));
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_content(&terminal).contains("12 +"));
    }

    #[test]
    fn test_render_shows_error_marker() {
        let mut app = CalculatorApp::new();
        app.press(InputToken::Digit(1));
        app.press(InputToken::Op(BinaryOp::Divide));
        app.press(InputToken::Digit(0));
        app.press(InputToken::Equals);
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_content(&terminal).contains("Error"));
    }

    #[test]
    fn test_render_scientific_mode_shows_bank() {
        let mut app = CalculatorApp::new();
        app.press(InputToken::ModeToggle);
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("SCI"));
        assert!(content.contains("[sin]"));
    }

    #[test]
    fn test_render_basic_mode_hides_bank() {
        let app = CalculatorApp::new();
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(!buffer_content(&terminal).contains("[sin]"));
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let app = CalculatorApp::new();
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_create_layout_sections() {
        let app = CalculatorApp::new();
        let ui = CalculatorUI::new(&app);
        let chunks = ui.create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(chunks.len(), 4);
    }
}
