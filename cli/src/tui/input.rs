//! Labeled text input with an inline error line.

use civitas_common::Field;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Rows a [`FieldInput`] occupies: bordered box plus the error line.
pub const FIELD_HEIGHT: u16 = 4;

const MASK: char = '•';
const ERROR_RED: Color = Color::Rgb(231, 76, 60);

/// What kind of value an input holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text.
    Text,
    /// Email address; whitespace is never accepted.
    Email,
    /// Masked on screen.
    Secret,
}

impl InputKind {
    #[must_use]
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::FullName => Self::Text,
            Field::Email => Self::Email,
            Field::Password | Field::ConfirmPassword => Self::Secret,
        }
    }

    /// Whether a typed character is inserted into the value.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        match self {
            Self::Email => !c.is_whitespace(),
            Self::Text | Self::Secret => true,
        }
    }
}

/// Placeholder shown while a field is empty.
#[must_use]
pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::FullName => "e.g. María Fernanda Reyes",
        Field::Email => "name@citizen.com",
        Field::Password | Field::ConfirmPassword => "••••••••",
    }
}

/// A single form input.
pub struct FieldInput<'a> {
    pub label: &'a str,
    pub placeholder: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub kind: InputKind,
    pub focused: bool,
    /// Right-aligned indicator in the border (e.g. the email check spinner).
    pub status: Option<Span<'a>>,
}

impl<'a> FieldInput<'a> {
    #[must_use]
    pub fn new(field: Field, value: &'a str) -> Self {
        Self {
            label: field.label(),
            placeholder: placeholder(field),
            value,
            error: None,
            kind: InputKind::for_field(field),
            focused: false,
            status: None,
        }
    }

    #[must_use]
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn status(mut self, status: Option<Span<'a>>) -> Self {
        self.status = status;
        self
    }

    /// Text drawn inside the box, masked for secrets.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.kind {
            InputKind::Secret => MASK.to_string().repeat(self.value.chars().count()),
            InputKind::Text | InputKind::Email => self.value.to_string(),
        }
    }
}

impl Widget for FieldInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [box_area, error_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        let border = if self.error.is_some() {
            Style::default().fg(ERROR_RED)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label_style = Style::default()
            .fg(Color::Rgb(52, 73, 94))
            .add_modifier(Modifier::BOLD);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Line::from(Span::styled(format!(" {} ", self.label), label_style)));
        if let Some(status) = self.status.clone() {
            block = block.title(Line::from(vec![status, Span::raw(" ")]).right_aligned());
        }

        let mut spans = if self.value.is_empty() {
            vec![Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            vec![Span::raw(self.display_value())]
        };
        if self.focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(Line::from(spans))
            .block(block)
            .render(box_area, buf);

        if let Some(error) = self.error {
            Paragraph::new(Line::from(vec![
                Span::styled("⚠ ", Style::default().fg(ERROR_RED)),
                Span::styled(
                    error,
                    Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
                ),
            ]))
            .render(error_area, buf);
        }
    }
}
