use crate::model::DOSSIER_TABS;
use crate::tui::state::UiState;
use crate::tui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw_profile(area: Rect, f: &mut Frame, state: &UiState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(5), // Hero header
                Constraint::Length(3), // Dossier tabs
                Constraint::Min(0),    // Tab content
                Constraint::Length(5), // Contact
            ]
            .as_ref(),
        )
        .split(area);

    draw_hero(chunks[0], f, state, palette);

    let tabs = Tabs::new(DOSSIER_TABS.iter().map(|t| Line::from(*t)).collect::<Vec<_>>())
        .select(state.dossier_tab)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title("Architect Profile"),
        )
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[1]);

    match state.dossier_tab {
        0 => draw_skills(chunks[2], f, state, palette),
        1 => draw_experience(chunks[2], f, state, palette),
        _ => draw_projects(chunks[2], f, state, palette),
    }

    draw_contact(chunks[3], f, state, palette);
}

fn draw_hero(area: Rect, f: &mut Frame, state: &UiState, palette: &Palette) {
    let d = &state.dossier;
    let badges: Vec<Span> = d
        .specializations
        .iter()
        .enumerate()
        .flat_map(|(i, s)| {
            let mut spans = Vec::new();
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{s}]"),
                Style::default().fg(palette.badge),
            ));
            spans
        })
        .collect();

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            d.name,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(d.title, Style::default().fg(palette.text))),
        Line::from(badges),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(hero, area);
}

fn draw_skills(area: Rect, f: &mut Frame, state: &UiState, palette: &Palette) {
    let mut lines = about_lines(state, palette);
    lines.push(Line::from(Span::styled(
        "Technical Arsenal",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    for category in &state.dossier.skills {
        lines.push(Line::from(Span::styled(
            category.name,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )));
        for item in &category.items {
            lines.push(Line::from(vec![
                Span::styled("  - ", Style::default().fg(palette.dim)),
                Span::styled(*item, Style::default().fg(palette.text)),
            ]));
        }
    }
    f.render_widget(content_paragraph(lines, palette), area);
}

fn draw_experience(area: Rect, f: &mut Frame, state: &UiState, palette: &Palette) {
    let mut lines = Vec::new();
    for job in &state.dossier.experience {
        lines.push(Line::from(Span::styled(
            job.title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            job.tenure,
            Style::default().fg(palette.dim),
        )));
        for h in &job.highlights {
            lines.push(Line::from(vec![
                Span::styled("  - ", Style::default().fg(palette.dim)),
                Span::styled(*h, Style::default().fg(palette.text)),
            ]));
        }
        lines.push(Line::from(""));
    }
    f.render_widget(content_paragraph(lines, palette), area);
}

fn draw_projects(area: Rect, f: &mut Frame, state: &UiState, palette: &Palette) {
    let mut lines = Vec::new();
    for project in &state.dossier.projects {
        lines.push(Line::from(Span::styled(
            project.name,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            project.summary,
            Style::default().fg(palette.text),
        )));
        lines.push(Line::from(""));
    }
    f.render_widget(content_paragraph(lines, palette), area);
}

fn about_lines(state: &UiState, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            state.dossier.about,
            Style::default().fg(palette.text),
        )),
        Line::from(""),
    ]
}

fn content_paragraph(lines: Vec<Line<'static>>, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
}

fn draw_contact(area: Rect, f: &mut Frame, state: &UiState, palette: &Palette) {
    let c = &state.dossier.contact;
    let p = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Email: ", Style::default().fg(palette.dim)),
            Span::styled(c.email, Style::default().fg(palette.text)),
            Span::raw("   "),
            Span::styled("Phone: ", Style::default().fg(palette.dim)),
            Span::styled(c.phone, Style::default().fg(palette.text)),
        ]),
        Line::from(vec![
            Span::styled("LinkedIn: ", Style::default().fg(palette.dim)),
            Span::styled(c.linkedin, Style::default().fg(palette.accent)),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title("Establish Secure Channel"),
    );
    f.render_widget(p, area);
}
