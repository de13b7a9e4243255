use crate::tui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_help(area: Rect, f: &mut Frame, palette: &Palette) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(palette.badge));
    let p = Paragraph::new(vec![
        Line::from("Keybinds:"),
        Line::from(vec![
            Span::raw("  "),
            key("q"),
            Span::raw(" / "),
            key("Ctrl-C"),
            Span::raw("  Quit"),
        ]),
        Line::from(vec![
            Span::raw("  "),
            key("tab"),
            Span::raw("         Switch views"),
        ]),
        Line::from(vec![
            Span::raw("  "),
            key("t"),
            Span::raw("           Toggle dark/light theme"),
        ]),
        Line::from(vec![
            Span::raw("  "),
            key("?"),
            Span::raw("           Show this help"),
        ]),
        Line::from(""),
        Line::from("Profile view:"),
        Line::from(vec![
            Span::raw("  "),
            key("←/→"),
            Span::raw(" or "),
            key("h/l"),
            Span::raw("  Switch dossier tab"),
        ]),
        Line::from(""),
        Line::from("Pipelines view:"),
        Line::from(vec![
            Span::raw("  "),
            key("↑/↓"),
            Span::raw(" or "),
            key("k/j"),
            Span::raw("  Move between workflow tabs and stages"),
        ]),
        Line::from(vec![
            Span::raw("  "),
            key("←/→"),
            Span::raw(" or "),
            key("h/l"),
            Span::raw("  Switch workflow / move stage focus"),
        ]),
        Line::from(vec![
            Span::raw("  "),
            key("enter"),
            Span::raw(" / "),
            key("space"),
            Span::raw("  Pin the focused stage (pauses the animation)"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Selecting a stage pauses the automatic advance until the "),
        ]),
        Line::from(vec![Span::raw("workflow is switched again.")]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title("Help"),
    );
    f.render_widget(p, area);
}
