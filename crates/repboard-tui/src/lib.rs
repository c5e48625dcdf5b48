// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use repboard_app::{
    AppCommand, AppState, AskState, Assistant, DealOutcome, InputFocus, RepId, Representative,
    RosterState, RosterSummary, Selection,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Completion of the one-shot roster fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    Loaded(Vec<Representative>),
    Failed { error: String },
}

/// Completion of an assistant question. Carries the request id so stale
/// completions (canceled or superseded requests) can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerEvent {
    Answered { request_id: u64, answer: String },
    Failed { request_id: u64, error: String },
}

impl AnswerEvent {
    pub const fn request_id(&self) -> u64 {
        match self {
            Self::Answered { request_id, .. } | Self::Failed { request_id, .. } => *request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    Roster(RosterEvent),
    Answer(AnswerEvent),
}

/// Everything the UI needs from the outside world. The default spawn
/// hooks run the blocking call inline and post the completion on the
/// internal channel; production runtimes override them to use worker
/// threads.
pub trait AppRuntime {
    fn fetch_sales_reps(&mut self) -> Result<Vec<Representative>>;
    fn answer_question(&mut self, question: &str) -> Result<String>;
    fn spawn_roster_fetch(&mut self, tx: Sender<InternalEvent>) -> Result<()> {
        let event = match self.fetch_sales_reps() {
            Ok(reps) => InternalEvent::Roster(RosterEvent::Loaded(reps)),
            Err(error) => InternalEvent::Roster(RosterEvent::Failed {
                error: error.to_string(),
            }),
        };
        tx.send(event)
            .map_err(|_| anyhow::anyhow!("roster event channel closed"))?;
        Ok(())
    }
    fn spawn_answer(
        &mut self,
        request_id: u64,
        question: &str,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let event = match self.answer_question(question) {
            Ok(answer) => InternalEvent::Answer(AnswerEvent::Answered { request_id, answer }),
            Err(error) => InternalEvent::Answer(AnswerEvent::Failed {
                request_id,
                error: error.to_string(),
            }),
        };
        tx.send(event)
            .map_err(|_| anyhow::anyhow!("answer event channel closed"))?;
        Ok(())
    }
    fn cancel_answer(&mut self, _request_id: u64) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AskInFlight {
    request_id: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct AskUiState {
    input: String,
    history: Vec<String>,
    history_cursor: Option<usize>,
    history_buffer: String,
    in_flight: Option<AskInFlight>,
    next_request_id: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    roster: RosterState,
    selection: Selection,
    assistant: Assistant,
    ask: AskUiState,
    rep_cursor: usize,
    status_token: u64,
    help_visible: bool,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    // The roster is fetched exactly once per session; there is no
    // refresh or retry path.
    if let Err(error) = runtime.spawn_roster_fetch(internal_tx.clone()) {
        let message = error.to_string();
        view_data.roster.resolve_failed(message.clone());
        state.dispatch(AppCommand::SetStatus(format!("load failed: {message}")));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Roster(event) => {
                handle_roster_event(state, view_data, tx, event);
            }
            InternalEvent::Answer(event) => {
                handle_answer_event(state, view_data, tx, event);
            }
        }
    }
}

fn handle_roster_event(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    event: RosterEvent,
) {
    match event {
        RosterEvent::Loaded(reps) => {
            if view_data.roster.resolve_loaded(reps) {
                view_data.rep_cursor = 0;
            }
        }
        RosterEvent::Failed { error } => {
            if view_data.roster.resolve_failed(error.clone()) {
                emit_status(state, view_data, tx, format!("load failed: {error}"));
            }
        }
    }
}

fn handle_answer_event(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    event: AnswerEvent,
) {
    let Some(in_flight) = view_data.ask.in_flight else {
        return;
    };
    if event.request_id() != in_flight.request_id {
        return;
    }
    view_data.ask.in_flight = None;

    match event {
        AnswerEvent::Answered { answer, .. } => {
            view_data.assistant.resolve_answered(answer);
        }
        AnswerEvent::Failed { error, .. } => {
            view_data.assistant.resolve_failed(error.clone());
            emit_status(
                state,
                view_data,
                tx,
                format!("assistant request failed: {error}"),
            );
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn change_focus(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    state.dispatch(command);
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn next_answer_request_id(view_data: &mut ViewData) -> u64 {
    view_data.ask.next_request_id = view_data.ask.next_request_id.saturating_add(1);
    if view_data.ask.next_request_id == 0 {
        view_data.ask.next_request_id = 1;
    }
    view_data.ask.next_request_id
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if cancel_in_flight_question(runtime, view_data).is_some() {
            emit_status(state, view_data, internal_tx, "question canceled");
        } else {
            emit_status(
                state,
                view_data,
                internal_tx,
                "cancel requested; no question in flight",
            );
        }
        return false;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
            emit_status(state, view_data, internal_tx, "help hidden");
        }
        return false;
    }

    match state.focus {
        InputFocus::Roster => handle_roster_key(state, view_data, internal_tx, key),
        InputFocus::Ask => handle_ask_key(state, runtime, view_data, internal_tx, key),
    }

    false
}

fn handle_roster_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('?') => {
            view_data.help_visible = true;
        }
        KeyCode::Char('a') => {
            if state.assistant_enabled {
                change_focus(state, view_data, internal_tx, AppCommand::FocusAsk);
            } else {
                emit_status(state, view_data, internal_tx, "assistant disabled in config");
            }
        }
        KeyCode::Char('j') | KeyCode::Down => move_rep_cursor(view_data, 1),
        KeyCode::Char('k') | KeyCode::Up => move_rep_cursor(view_data, -1),
        KeyCode::Char('g') => jump_rep_cursor(view_data, 0),
        KeyCode::Char('G') => jump_rep_cursor(view_data, usize::MAX),
        KeyCode::Enter => toggle_cursor_expansion(view_data),
        KeyCode::Esc => {
            view_data.selection.collapse();
        }
        _ => {}
    }
}

fn handle_ask_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            // Leaving the box keeps any waiting question in flight.
            change_focus(state, view_data, internal_tx, AppCommand::FocusRoster);
        }
        KeyCode::Enter => submit_question(state, runtime, view_data, internal_tx),
        KeyCode::Up => question_history_prev(view_data),
        KeyCode::Down => question_history_next(view_data),
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            question_history_prev(view_data);
        }
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            question_history_next(view_data);
        }
        KeyCode::Backspace => {
            view_data.ask.input.pop();
            view_data.ask.history_cursor = None;
        }
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            view_data.ask.input.push(ch);
            view_data.ask.history_cursor = None;
        }
        _ => {}
    }
}

fn move_rep_cursor(view_data: &mut ViewData, delta: isize) {
    let Some(reps) = view_data.roster.reps() else {
        return;
    };
    if reps.is_empty() {
        return;
    }
    let last = reps.len() - 1;
    let current = view_data.rep_cursor.min(last);
    view_data.rep_cursor = current.saturating_add_signed(delta).min(last);
}

fn jump_rep_cursor(view_data: &mut ViewData, target: usize) {
    let Some(reps) = view_data.roster.reps() else {
        return;
    };
    if reps.is_empty() {
        return;
    }
    view_data.rep_cursor = target.min(reps.len() - 1);
}

fn rep_id_at_cursor(view_data: &ViewData) -> Option<RepId> {
    let reps = view_data.roster.reps()?;
    reps.get(view_data.rep_cursor).map(|rep| rep.id)
}

fn toggle_cursor_expansion(view_data: &mut ViewData) {
    let Some(id) = rep_id_at_cursor(view_data) else {
        return;
    };
    view_data.selection.toggle(id);
}

fn expanded_rep(view_data: &ViewData) -> Option<&Representative> {
    let reps = view_data.roster.reps()?;
    let id = view_data.selection.expanded()?;
    reps.iter().find(|rep| rep.id == id)
}

fn submit_question<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    if !state.assistant_enabled {
        emit_status(state, view_data, internal_tx, "assistant disabled in config");
        return;
    }
    if view_data.assistant.is_waiting() {
        emit_status(state, view_data, internal_tx, "answer still pending");
        return;
    }

    let Some(question) = view_data.assistant.submit(&view_data.ask.input) else {
        return;
    };

    if view_data.ask.history.last() != Some(&question) {
        view_data.ask.history.push(question.clone());
    }
    view_data.ask.history_cursor = None;
    view_data.ask.history_buffer.clear();
    if state.clear_input_on_submit {
        view_data.ask.input.clear();
    }

    let request_id = next_answer_request_id(view_data);
    view_data.ask.in_flight = Some(AskInFlight { request_id });

    if let Err(error) = runtime.spawn_answer(request_id, &question, internal_tx.clone()) {
        view_data.ask.in_flight = None;
        view_data.assistant.resolve_failed(error.to_string());
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("assistant request failed: {error}"),
        );
    }
}

fn cancel_in_flight_question<R: AppRuntime>(
    runtime: &mut R,
    view_data: &mut ViewData,
) -> Option<u64> {
    let in_flight = view_data.ask.in_flight.take()?;
    let _ = runtime.cancel_answer(in_flight.request_id);
    view_data.assistant.abandon();
    Some(in_flight.request_id)
}

fn question_history_prev(view_data: &mut ViewData) {
    if view_data.ask.history.is_empty() {
        return;
    }

    match view_data.ask.history_cursor {
        None => {
            view_data.ask.history_buffer = view_data.ask.input.clone();
            view_data.ask.history_cursor = Some(view_data.ask.history.len().saturating_sub(1));
        }
        Some(cursor) if cursor > 0 => {
            view_data.ask.history_cursor = Some(cursor - 1);
        }
        Some(_) => {}
    }

    if let Some(cursor) = view_data.ask.history_cursor {
        view_data.ask.input = view_data.ask.history[cursor].clone();
    }
}

fn question_history_next(view_data: &mut ViewData) {
    let Some(cursor) = view_data.ask.history_cursor else {
        return;
    };

    if cursor + 1 < view_data.ask.history.len() {
        let next = cursor + 1;
        view_data.ask.history_cursor = Some(next);
        view_data.ask.input = view_data.ask.history[next].clone();
    } else {
        view_data.ask.history_cursor = None;
        view_data.ask.input = view_data.ask.history_buffer.clone();
        view_data.ask.history_buffer.clear();
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(8),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_text(state, view_data))
        .block(Block::default().title("repboard").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    render_roster(frame, layout[1], view_data);

    let ask = Paragraph::new(ask_box_text(state, view_data)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Ask a Question (AI Assistant)"),
    );
    frame.render_widget(ask, layout[2]);

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[3]);

    if view_data.help_visible {
        let area = centered_rect(80, 72, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_roster(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    match roster_band(view_data) {
        RosterBand::Loading(text) => {
            let loading = Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Sales Representatives"),
            );
            frame.render_widget(loading, area);
        }
        RosterBand::Failure(message) => {
            // The banner sits above the grid area; the grid itself is
            // not rendered while the roster is failed.
            let bands = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(area);
            let banner = Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(banner, bands[0]);
            let section = Block::default()
                .borders(Borders::ALL)
                .title("Sales Representatives");
            frame.render_widget(section, bands[1]);
        }
        RosterBand::Grid { .. } => {
            let reps = view_data.roster.reps().unwrap_or_default();
            if let Some(rep) = expanded_rep(view_data) {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(area);
                render_rep_table(frame, columns[0], view_data, reps);

                let panels = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(columns[1]);
                render_detail_table(frame, panels[0], &deals_projection(rep));
                render_detail_table(frame, panels[1], &clients_projection(rep));
            } else {
                render_rep_table(frame, area, view_data, reps);
            }
        }
    }
}

fn render_rep_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    view_data: &ViewData,
    reps: &[Representative],
) {
    let header_cells = ["name", "role", "region", "skills"].iter().map(|column| {
        Cell::from(*column).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells);

    let cursor = view_data.rep_cursor.min(reps.len().saturating_sub(1));
    let expanded = view_data.selection.expanded();
    let rows = reps.iter().enumerate().map(|(row_index, rep)| {
        let mut name_style = Style::default();
        if expanded == Some(rep.id) {
            name_style = Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
        }
        let cells = vec![
            Cell::from(rep.name.clone()).style(name_style),
            Cell::from(rep.role.clone()),
            Cell::from(rep.region.clone()),
            Cell::from(rep.skills.join(", ")),
        ];
        let mut row = Row::new(cells);
        if row_index == cursor {
            row = row.style(Style::default().bg(Color::DarkGray));
        }
        row
    });

    let widths = vec![Constraint::Min(8); 4];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Sales Representatives"),
        );
    frame.render_widget(table, area);
}

fn render_detail_table(frame: &mut ratatui::Frame<'_>, area: Rect, projection: &DetailTable) {
    if projection.rows.is_empty() {
        let empty = Paragraph::new(String::new()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(projection.title),
        );
        frame.render_widget(empty, area);
        return;
    }

    let header_cells = projection.columns.iter().map(|column| {
        Cell::from(*column).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells);

    let rows = projection.rows.iter().map(|cells| {
        Row::new(
            cells
                .iter()
                .map(|cell| Cell::from(cell.text.clone()).style(tone_style(cell.tone))),
        )
    });

    let widths = vec![Constraint::Min(8); projection.columns.len()];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(projection.title),
        );
    frame.render_widget(table, area);
}

/// What the roster band shows for the current load state. The grid and
/// the failure banner are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RosterBand {
    Loading(String),
    Failure(String),
    Grid { rows: usize },
}

fn roster_band(view_data: &ViewData) -> RosterBand {
    match &view_data.roster {
        RosterState::Loading => RosterBand::Loading("Loading sales data...".to_owned()),
        RosterState::Failed(message) => RosterBand::Failure(format!("Error: {message}")),
        RosterState::Loaded(reps) => RosterBand::Grid { rows: reps.len() },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellTone {
    Plain,
    Won,
    Lost,
    Open,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DetailCell {
    text: String,
    tone: CellTone,
}

impl DetailCell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: CellTone::Plain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DetailTable {
    title: &'static str,
    columns: Vec<&'static str>,
    rows: Vec<Vec<DetailCell>>,
}

fn deals_projection(rep: &Representative) -> DetailTable {
    let rows = rep
        .deals
        .iter()
        .map(|deal| {
            let tone = match deal.status.outcome() {
                DealOutcome::Won => CellTone::Won,
                DealOutcome::Lost => CellTone::Lost,
                DealOutcome::Open => CellTone::Open,
            };
            vec![
                DetailCell::plain(deal.client.clone()),
                DetailCell::plain(format!("${}", format_value(deal.value))),
                DetailCell {
                    text: deal.status.label().to_owned(),
                    tone,
                },
            ]
        })
        .collect();

    DetailTable {
        title: "Deals",
        columns: vec!["client", "value", "status"],
        rows,
    }
}

fn clients_projection(rep: &Representative) -> DetailTable {
    let rows = rep
        .clients
        .iter()
        .map(|client| {
            vec![
                DetailCell::plain(client.name.clone()),
                DetailCell::plain(client.industry.clone()),
                DetailCell {
                    text: client.contact.clone(),
                    tone: CellTone::Link,
                },
            ]
        })
        .collect();

    DetailTable {
        title: "Clients",
        columns: vec!["name", "industry", "contact"],
        rows,
    }
}

fn tone_style(tone: CellTone) -> Style {
    match tone {
        CellTone::Plain => Style::default(),
        CellTone::Won => Style::default().fg(Color::Green),
        CellTone::Lost => Style::default().fg(Color::Red),
        CellTone::Open => Style::default().fg(Color::Yellow),
        CellTone::Link => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    }
}

fn format_value(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        formatted.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

fn header_text(state: &AppState, view_data: &ViewData) -> String {
    let title = "Sales Dashboard";
    if !state.show_summary {
        return title.to_owned();
    }
    let Some(reps) = view_data.roster.reps() else {
        return title.to_owned();
    };

    let summary = RosterSummary::from_reps(reps);
    let regions = if summary.regions.is_empty() {
        "-".to_owned()
    } else {
        summary.regions.join("/")
    };
    let top = summary
        .top_performer
        .as_ref()
        .map_or_else(|| "-".to_owned(), |top| top.name.clone());
    format!(
        "{title} | reps {} | regions {regions} | deals {} (${}) | top {top}",
        summary.rep_count,
        summary.deal_count(),
        format_value(summary.total_value),
    )
}

fn ask_box_text(state: &AppState, view_data: &ViewData) -> String {
    if !state.assistant_enabled {
        return "assistant disabled in config".to_owned();
    }

    let answer_line = match view_data.assistant.state() {
        AskState::Idle => "Ask about sales data, performance, or strategies...".to_owned(),
        AskState::Waiting { .. } => "Loading...".to_owned(),
        AskState::Answered { answer } => format!("AI Response: {answer}"),
        AskState::Failed { .. } => {
            "AI Response: Sorry, there was an error processing your request.".to_owned()
        }
    };
    format!("> {}\n\n{answer_line}", view_data.ask.input)
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    // The help overlay suppresses the status bar.
    if view_data.help_visible {
        return String::new();
    }

    let mode = match state.focus {
        InputFocus::Roster => "ROSTER",
        InputFocus::Ask => "ASK",
    };
    let default = match state.focus {
        InputFocus::Roster => "j/k move | enter expand | a ask | ? help | ctrl+q quit",
        InputFocus::Ask => "enter submit | up/down history | esc back | ctrl+c cancel",
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {default}"),
        None => format!("{mode} | {default}"),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ctrl+c cancel question | ? help\n\
roster: j/k or arrows move | g/G first/last | enter expand/collapse | esc collapse\n\
roster: a focus the question box\n\
ask: type to edit | enter submit | up/down or ctrl+p/ctrl+n history | esc back to roster\n\
help: esc or ? close"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
