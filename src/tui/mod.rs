mod help;
mod pipeline;
mod profile;
mod state;
mod theme;

use crate::cli::Cli;
use crate::driver::{self, UiCommand, UiEvent};
use crate::pipeline::Direction as Nav;
use crate::{content, prefs};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Terminal,
};
use state::{FocusZone, UiState};
use std::{io, time::Duration, time::Instant};
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use theme::Palette;

pub async fn run(args: Cli) -> Result<()> {
    // Unbounded channels: the animation tick volume is tiny and the UI drains
    // them every loop iteration.
    let (event_tx, event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();

    // TUI runs in a dedicated thread to keep all blocking I/O out of the Tokio runtime.
    let ui_args = args.clone();
    let ui_handle = std::thread::spawn(move || run_threaded(ui_args, event_rx, cmd_tx));

    let res = driver::run_driver(args.stage_interval(), event_tx, cmd_rx).await;

    let join_res = tokio::task::spawn_blocking(move || ui_handle.join()).await;
    if let Ok(joined) = join_res {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(anyhow::anyhow!("TUI thread panicked")),
        }
    }

    res
}

/// Run the TUI loop on a dedicated thread.
fn run_threaded(
    args: Cli,
    mut event_rx: UnboundedReceiver<UiEvent>,
    cmd_tx: UnboundedSender<UiCommand>,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let theme = args.theme.unwrap_or(prefs::load().theme);
    // UiState is owned by the UI thread only; no cross-thread mutation.
    let mut state = UiState::new(theme, content::catalog(), content::dossier());
    if let Some(name) = args.workflow.as_deref() {
        if state.select_workflow_checked(name) {
            let _ = cmd_tx.send(UiCommand::WorkflowChanged);
        } else {
            state.info = format!("Unknown workflow '{name}', showing DevSecOps");
        }
    }

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    let res = loop {
        // Drain animation ticks without blocking; hidden or paused ticks are
        // dropped here, never queued for later.
        while let Ok(ev) = event_rx.try_recv() {
            match ev {
                UiEvent::Tick => state.apply_tick(),
            }
        }

        if last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| draw(f.area(), f, &state)).ok();
            last_tick = Instant::now();
        }

        // Poll input with a short timeout to avoid blocking the render loop.
        if event::poll(Duration::from_millis(10)).unwrap_or(false) {
            match event::read() {
                Ok(Event::FocusGained) => state.visible = true,
                Ok(Event::FocusLost) => state.visible = false,
                Ok(Event::Key(k)) => {
                    if k.kind != KeyEventKind::Press {
                        continue;
                    }
                    match (k.modifiers, k.code) {
                        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                            let _ = cmd_tx.send(UiCommand::Quit);
                            break Ok(());
                        }
                        (_, KeyCode::Tab) => {
                            state.tab = (state.tab + 1) % 3;
                        }
                        (_, KeyCode::Char('?')) => {
                            state.tab = 2;
                        }
                        (_, KeyCode::Char('t')) => {
                            toggle_theme(&mut state);
                        }
                        (_, KeyCode::Left) | (_, KeyCode::Char('h')) => {
                            handle_nav(&mut state, &cmd_tx, Nav::Previous);
                        }
                        (_, KeyCode::Right) | (_, KeyCode::Char('l')) => {
                            handle_nav(&mut state, &cmd_tx, Nav::Next);
                        }
                        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => {
                            if state.tab == 1 {
                                state.focus = FocusZone::WorkflowTabs;
                            }
                        }
                        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => {
                            if state.tab == 1 {
                                state.focus = FocusZone::Stages;
                            }
                        }
                        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => {
                            if state.tab == 1 && state.focus == FocusZone::Stages {
                                let focused = state.animator.focused();
                                state.animator.activate(focused);
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }
    };

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, DisableFocusChange, LeaveAlternateScreen).ok();
    res
}

/// Left/Right routing: dossier tabs on the Profile view; workflow tabs or
/// stage focus on the Pipelines view depending on which zone owns input.
fn handle_nav(state: &mut UiState, cmd_tx: &UnboundedSender<UiCommand>, direction: Nav) {
    match state.tab {
        0 => state.navigate_dossier(direction),
        1 => match state.focus {
            FocusZone::WorkflowTabs => {
                // Tab sets couple focus and selection: the change is immediate
                // and starts a fresh animation session.
                state.navigate_workflow(direction);
                let _ = cmd_tx.send(UiCommand::WorkflowChanged);
            }
            FocusZone::Stages => {
                // Stage focus is decoupled from selection and pause state.
                state.animator.focus(direction);
            }
        },
        _ => {}
    }
}

fn toggle_theme(state: &mut UiState) {
    state.theme = state.theme.toggled();
    match prefs::save(&prefs::Prefs { theme: state.theme }) {
        Ok(_) => {
            state.info = format!("Theme: {}", state.theme.label());
        }
        Err(e) => {
            state.info = format!("Theme not persisted: {e:#}");
        }
    }
}

fn draw(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let palette = Palette::for_theme(state.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(area);

    let tabs = Tabs::new(vec![
        Line::from("Profile"),
        Line::from("Pipelines"),
        Line::from("Help"),
    ])
    .select(state.tab)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title("secfolio"),
    )
    .highlight_style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(tabs, chunks[0]);

    match state.tab {
        0 => profile::draw_profile(chunks[1], f, state, &palette),
        1 => pipeline::draw_pipelines(chunks[1], f, state, &palette),
        _ => help::draw_help(chunks[1], f, &palette),
    }

    draw_status(chunks[2], f, state, &palette);
}

fn draw_status(area: Rect, f: &mut ratatui::Frame, state: &UiState, palette: &Palette) {
    let mut spans = vec![Span::styled(
        format!(" theme:{} ", state.theme.label()),
        Style::default().fg(palette.dim),
    )];
    if !state.visible {
        spans.push(Span::styled(" hidden ", Style::default().fg(palette.badge)));
    }
    if state.tab == 1 && state.animator.is_paused() {
        spans.push(Span::styled(" paused ", Style::default().fg(palette.badge)));
    }
    if !state.info.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            state.info.clone(),
            Style::default().fg(palette.text),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
