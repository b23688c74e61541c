//! Rendering. Pure functions of [`OnboardingApp`] state.

use civitas_common::Field;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

use crate::application::ports::{EmailAvailability, EmailAvailabilityCheck};
use crate::domain::onboarding::{APP_NAME, OnboardingStep};
use crate::tui::input::{FIELD_HEIGHT, FieldInput};
use crate::tui::state::{Focus, Modal, OnboardingApp};

pub const FORM_TITLE: &str = "Citizen Registration";
pub const SUBMIT_LABEL: &str = "Create My Identity";

const BRAND: Color = Color::Rgb(52, 73, 94);
const ACCENT: Color = Color::Rgb(39, 174, 96);
const MAX_WIDTH: u16 = 64;

fn key_highlight() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn key_hint() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn hints<'a>(pairs: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, label) in pairs {
        spans.push(Span::styled(*key, key_highlight()));
        spans.push(Span::styled(format!(" {label}   "), key_hint()));
    }
    Line::from(spans).alignment(Alignment::Center)
}

/// Horizontally centred column no wider than `MAX_WIDTH`.
fn column(area: Rect) -> Rect {
    let width = area.width.min(MAX_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

pub fn draw<C: EmailAvailabilityCheck>(frame: &mut Frame, app: &OnboardingApp<C>) {
    let area = column(frame.area());
    let step = app.flow().step();
    match step.intro() {
        Some(page) => draw_intro(frame, area, step, page.title, page.body),
        None => draw_form(frame, area, app),
    }
    if let Some(modal) = app.modal() {
        draw_modal(frame, modal);
    }
}

fn draw_intro(frame: &mut Frame, area: Rect, step: OnboardingStep, title: &str, body: &str) {
    let [_, logo, _, heading, _, text, _, dots, footer] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("◆ {APP_NAME}"),
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        logo,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        heading,
    );
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text,
    );

    let dots_line: Line = [OnboardingStep::Welcome, OnboardingStep::Security]
        .into_iter()
        .map(|s| {
            if s == step {
                Span::styled("● ", Style::default().fg(ACCENT))
            } else {
                Span::styled("○ ", key_hint())
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(dots_line.alignment(Alignment::Center)),
        dots,
    );

    let [hint_row] = Layout::vertical([Constraint::Length(1)]).areas(footer);
    frame.render_widget(
        Paragraph::new(hints(&[
            ("Enter", "Continue"),
            ("s", "Skip introduction"),
            ("Esc", "Quit"),
        ])),
        hint_row,
    );
}

fn email_status<C: EmailAvailabilityCheck>(app: &OnboardingApp<C>) -> Option<Span<'static>> {
    if app.is_checking_email() {
        return Some(Span::styled(
            format!("{} checking", app.spinner_frame()),
            Style::default().fg(Color::Cyan),
        ));
    }
    match app.email_outcome() {
        Some(EmailAvailability::Available) => {
            Some(Span::styled("✓ available", Style::default().fg(ACCENT)))
        }
        Some(EmailAvailability::Taken) => Some(Span::styled(
            "✗ already registered",
            Style::default().fg(Color::Yellow),
        )),
        None => None,
    }
}

fn draw_form<C: EmailAvailabilityCheck>(frame: &mut Frame, area: Rect, app: &OnboardingApp<C>) {
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(Field::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.extend([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ]);
    let rows = Layout::vertical(constraints).split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            FORM_TITLE,
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );

    let flow = app.flow();
    for (i, field) in Field::ALL.into_iter().enumerate() {
        let status = if field == Field::Email {
            email_status(app)
        } else {
            None
        };
        let input = FieldInput::new(field, flow.form().get(field))
            .error(flow.first_error(field))
            .focused(app.focus() == Focus::Field(field))
            .status(status);
        frame.render_widget(input, rows[i + 1]);
    }

    let button_row = rows[Field::ALL.len() + 1];
    let focused = app.focus() == Focus::Submit;
    let (fg, bg) = if focused {
        (Color::White, ACCENT)
    } else {
        (ACCENT, Color::Reset)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            SUBMIT_LABEL,
            Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT)),
        ),
        button_row,
    );

    frame.render_widget(
        Paragraph::new(hints(&[
            ("Tab", "Next field"),
            ("Ctrl-S", "Submit"),
            ("Esc", "Cancel"),
        ])),
        rows[Field::ALL.len() + 2],
    );
}

fn draw_modal(frame: &mut Frame, modal: &Modal) {
    let lines = vec![
        Line::from(Span::styled(
            modal.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(modal.body.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", key_highlight()),
            Span::styled(" OK", key_hint()),
        ]),
    ];

    let area = frame.area();
    let content_width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(10) as u16;
    let width = content_width
        .saturating_add(6)
        .min(area.width.saturating_sub(2));
    let height = (lines.len() as u16).saturating_add(4).min(area.height);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BRAND))
        .padding(Padding::uniform(1));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        rect,
    );
}
