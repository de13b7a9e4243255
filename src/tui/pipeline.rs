use crate::model::{StageDetail, Workflow};
use crate::pipeline::PipelineAnimator;
use crate::tui::state::{FocusZone, UiState};
use crate::tui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw_pipelines(area: Rect, f: &mut Frame, state: &UiState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Workflow tabs
                Constraint::Length(6), // Stage strip
                Constraint::Min(0),    // Detail panel
            ]
            .as_ref(),
        )
        .split(area);

    draw_workflow_tabs(chunks[0], f, state, palette);
    draw_stage_strip(chunks[1], f, state, palette);
    draw_detail_panel(chunks[2], f, state, palette);
}

fn zone_border(focused: bool, palette: &Palette) -> Style {
    if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    }
}

fn draw_workflow_tabs(area: Rect, f: &mut Frame, state: &UiState, palette: &Palette) {
    let titles: Vec<Line> = state
        .selector
        .names()
        .iter()
        .map(|n| Line::from(*n))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.selector.active_index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(zone_border(state.focus == FocusZone::WorkflowTabs, palette))
                .title("Secure SDLC Pipelines"),
        )
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

/// Build the one-line pipeline strip: stage boxes joined by connectors, with
/// every observable state (active trail, selection, keyboard focus) styled in.
pub fn stage_strip_line(
    workflow: &Workflow,
    animator: &PipelineAnimator,
    stages_focused: bool,
    palette: &Palette,
) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, stage) in workflow.stages.iter().enumerate() {
        if i > 0 {
            let connector_style = if animator.connector_is_active(i - 1) {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.dim)
            };
            spans.push(Span::styled("──▶", connector_style));
        }

        let mut style = if animator.stage_is_active(i) {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.dim)
        };
        if animator.stage_is_selected(i) {
            // Pressed state: the selected stage reads inverted and bold.
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        if stages_focused && animator.focused() == i {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!("[ {stage} ]"), style));
    }
    Line::from(spans)
}

fn draw_stage_strip(area: Rect, f: &mut Frame, state: &UiState, palette: &Palette) {
    let stages_focused = state.focus == FocusZone::Stages;
    let line = stage_strip_line(state.active_workflow(), &state.animator, stages_focused, palette);
    let title = if state.animator.is_paused() {
        "Pipeline (paused)"
    } else {
        "Pipeline"
    };
    let p = Paragraph::new(line).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(zone_border(stages_focused, palette))
            .title(title),
    );
    f.render_widget(p, area);
}

/// The detail panel shows iff a stage is selected and the workflow has a
/// detail entry for it; a missing entry fails soft by omitting the panel.
pub fn visible_detail(state: &UiState) -> Option<(&'static str, &StageDetail)> {
    let stage = state.selected_stage()?;
    let detail = state.active_workflow().detail(stage)?;
    Some((stage, detail))
}

fn draw_detail_panel(area: Rect, f: &mut Frame, state: &UiState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let Some((stage, detail)) = visible_detail(state) else {
        let p = Paragraph::new("Select a pipeline stage to view its details.")
            .style(Style::default().fg(palette.dim))
            .block(block);
        f.render_widget(p, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            detail.description,
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Key Tools / Concepts:",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for tool in &detail.tools {
        lines.push(Line::from(vec![
            Span::styled("  - ", Style::default().fg(palette.dim)),
            Span::styled(*tool, Style::default().fg(palette.text)),
        ]));
    }

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block.title(stage));
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::model::Theme;
    use crate::tui::state::UiState;

    fn state() -> UiState {
        UiState::new(Theme::Dark, content::catalog(), content::dossier())
    }

    #[test]
    fn detail_panel_hidden_on_the_blank_reset_frame() {
        let s = state();
        assert!(visible_detail(&s).is_none());
    }

    #[test]
    fn detail_panel_follows_the_selected_stage() {
        let mut s = state();
        s.apply_tick();
        s.apply_tick();
        s.apply_tick();
        let (stage, detail) = visible_detail(&s).expect("panel visible");
        assert_eq!(stage, "DAST Scan");
        assert_eq!(detail.tools, vec!["OWASP ZAP"]);
    }

    #[test]
    fn detail_panel_fails_soft_when_the_entry_is_missing() {
        let mut s = state();
        s.catalog[0].details.remove("Code & Commit");
        s.apply_tick();
        assert_eq!(s.selected_stage(), Some("Code & Commit"));
        assert!(visible_detail(&s).is_none());
    }

    #[test]
    fn strip_line_names_every_stage_once() {
        let s = state();
        let palette = Palette::for_theme(Theme::Dark);
        let line = stage_strip_line(s.active_workflow(), &s.animator, false, &palette);
        let text: String = line.spans.iter().map(|sp| sp.content.clone()).collect();
        for stage in &s.active_workflow().stages {
            assert_eq!(text.matches(stage).count(), 1, "stage {stage}");
        }
        // 7 stages joined by 6 connectors.
        assert_eq!(text.matches("──▶").count(), 6);
    }
}
