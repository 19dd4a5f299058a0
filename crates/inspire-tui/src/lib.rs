// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use inspire_app::{
    CategoryRecord, Generator, NO_CATEGORY_MESSAGE, QuoteSession, SessionError, SessionState,
    Trigger, ViewMode, grouped,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::debug;

const APP_TITLE: &str = "AI Inspire";
const APP_TAGLINE: &str = "Your Daily Dose of AI-Powered Inspiration";
const ABOUT_TITLE: &str = "About AI Inspire";
const ABOUT_TEXT: &str = "Welcome to AI Inspire! This app provides personalized inspirational quotes based on your preferences and mood. Simply answer a few prompts, and let AI craft the perfect dose of motivation just for you.";
const SELECT_PROMPT: &str = "Please select a category first";
const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);
const PAGE_LINES: usize = 10;
const SELECTION_HINTS: &str =
    "j/k move | space choose | enter Get Inspirational Quotes | i about | q quit";
const SELECTED_MARK: &str = "●";
const CURSOR_MARK: &str = ">";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Quit,
    Generate(Trigger),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    cursor: usize,
    scroll: usize,
    /// Inner width of the quote list; 0 until the first frame is drawn.
    quote_width: u16,
    status_line: Option<String>,
    status_token: u64,
}

pub fn run_app<G: Generator>(session: &mut QuoteSession<G>) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    let result = event_loop(
        &mut terminal,
        session,
        &mut view_data,
        &internal_tx,
        &internal_rx,
    );

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn event_loop<G: Generator>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut QuoteSession<G>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    internal_rx: &Receiver<InternalEvent>,
) -> Result<()> {
    loop {
        process_internal_events(view_data, internal_rx);

        terminal
            .draw(|frame| render(frame, session.state(), view_data))
            .context("draw frame")?;

        if !event::poll(Duration::from_millis(120)).context("poll event")? {
            continue;
        }
        let Event::Key(key) = event::read().context("read event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        view_data.quote_width = terminal
            .size()
            .context("read terminal size")?
            .width
            .saturating_sub(2);

        match handle_key_event(session, view_data, internal_tx, key) {
            KeyOutcome::Continue => {}
            KeyOutcome::Quit => return Ok(()),
            KeyOutcome::Generate(trigger) => {
                perform_generation(session, view_data, internal_tx, trigger, |state, view| {
                    terminal
                        .draw(|frame| render(frame, state, view))
                        .map(|_| ())
                        .context("draw busy frame")
                })?;
                let dropped = discard_queued_input(|| {
                    if event::poll(Duration::ZERO).context("poll queued input")? {
                        event::read().context("read queued input").map(Some)
                    } else {
                        Ok(None)
                    }
                })?;
                if dropped > 0 {
                    debug!(dropped, "discarded input typed during generation");
                }
            }
        }
    }
}

/// Drops every event `next` yields until it runs dry. Generation blocks the
/// loop, so keys pressed meanwhile would otherwise replay afterwards.
fn discard_queued_input<F>(mut next: F) -> Result<usize>
where
    F: FnMut() -> Result<Option<Event>>,
{
    let mut dropped = 0;
    while next()?.is_some() {
        dropped += 1;
    }
    Ok(dropped)
}

fn process_internal_events(view_data: &mut ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                view_data.status_line = None;
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    view_data.status_line = Some(message.into());
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn notification_for(error: &SessionError) -> String {
    match error {
        SessionError::Validation(message) if message == NO_CATEGORY_MESSAGE => {
            SELECT_PROMPT.to_owned()
        }
        SessionError::Validation(message) => message.clone(),
        SessionError::Generation(message) => format!("Error: {message}"),
    }
}

/// Runs one generation call; `on_busy` sees the state while the call is outstanding.
fn perform_generation<G, F>(
    session: &mut QuoteSession<G>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    trigger: Trigger,
    mut on_busy: F,
) -> Result<()>
where
    G: Generator,
    F: FnMut(&SessionState, &ViewData) -> Result<()>,
{
    let request = match session.begin(trigger) {
        Ok(request) => request,
        Err(error) => {
            emit_status(view_data, internal_tx, notification_for(&error));
            return Ok(());
        }
    };

    debug!(
        category = request.category().name,
        trigger = request.trigger().as_str(),
        "generation started"
    );
    on_busy(session.state(), view_data)?;
    let outcome = session.generate(&request);
    match session.complete(request, outcome) {
        Ok(count) => {
            debug!(count, trigger = trigger.as_str(), "quote list updated");
            view_data.scroll = 0;
        }
        Err(error) => emit_status(view_data, internal_tx, notification_for(&error)),
    }
    Ok(())
}

fn selectable_categories() -> Vec<CategoryRecord> {
    grouped()
        .into_iter()
        .flat_map(|section| section.categories)
        .collect()
}

fn handle_key_event<G: Generator>(
    session: &mut QuoteSession<G>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    if session.state().dialog_open {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('i')) {
            session.toggle_info_dialog(false);
        }
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Char('i') => {
            session.toggle_info_dialog(true);
            return KeyOutcome::Continue;
        }
        _ => {}
    }

    if session.state().is_busy() {
        return KeyOutcome::Continue;
    }

    match session.state().view_mode {
        ViewMode::SelectingCategory => handle_selection_key(session, view_data, internal_tx, key),
        ViewMode::ShowingQuotes => handle_results_key(session, view_data, internal_tx, key),
    }
}

fn handle_selection_key<G: Generator>(
    session: &mut QuoteSession<G>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> KeyOutcome {
    let entries = selectable_categories();
    let last = entries.len().saturating_sub(1);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.cursor = (view_data.cursor + 1).min(last);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.cursor = view_data.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => view_data.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => view_data.cursor = last,
        KeyCode::Char(' ') => {
            if let Some(category) = entries.get(view_data.cursor).copied()
                && let Err(error) = session.select_category(category)
            {
                emit_status(view_data, internal_tx, notification_for(&error));
            }
        }
        KeyCode::Enter => return KeyOutcome::Generate(Trigger::Initial),
        _ => {}
    }
    KeyOutcome::Continue
}

fn handle_results_key<G: Generator>(
    session: &mut QuoteSession<G>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> KeyOutcome {
    let max_scroll = max_quote_scroll(session.state(), view_data.quote_width);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.scroll = (view_data.scroll + 1).min(max_scroll);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.scroll = view_data.scroll.saturating_sub(1);
        }
        KeyCode::Char('d') | KeyCode::PageDown => {
            view_data.scroll = (view_data.scroll + PAGE_LINES).min(max_scroll);
        }
        KeyCode::Char('u') | KeyCode::PageUp => {
            view_data.scroll = view_data.scroll.saturating_sub(PAGE_LINES);
        }
        KeyCode::Char('r') => return KeyOutcome::Generate(Trigger::Refresh),
        KeyCode::Char('c') | KeyCode::Esc => match session.reset_to_selection() {
            Ok(()) => {
                view_data.scroll = 0;
                if let Some(selected) = session.state().selected_category
                    && let Some(index) = selectable_categories()
                        .iter()
                        .position(|category| *category == selected)
                {
                    view_data.cursor = index;
                }
            }
            Err(error) => emit_status(view_data, internal_tx, notification_for(&error)),
        },
        _ => {}
    }
    KeyOutcome::Continue
}

fn render(frame: &mut ratatui::Frame<'_>, state: &SessionState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let banner = Paragraph::new(format!("{APP_TITLE}\n{APP_TAGLINE}"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, layout[0]);

    match state.view_mode {
        ViewMode::SelectingCategory => render_selection(frame, layout[1], state, view_data),
        ViewMode::ShowingQuotes => render_results(frame, layout[1], state, view_data),
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if state.dialog_open {
        let area = centered_rect(60, 40, frame.area());
        frame.render_widget(Clear, area);
        let dialog = Paragraph::new(format!("{ABOUT_TEXT}\n\n[enter] Got it!"))
            .wrap(Wrap { trim: true })
            .block(Block::default().title(ABOUT_TITLE).borders(Borders::ALL));
        frame.render_widget(dialog, area);
    }
}

fn render_selection(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &SessionState,
    view_data: &ViewData,
) {
    let text = selection_text(state, view_data.cursor);
    let visible = usize::from(area.height.saturating_sub(2));
    let cursor_line = selection_cursor_line(view_data.cursor);
    let offset = cursor_line.saturating_sub(visible.saturating_sub(1));

    let list = Paragraph::new(text)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
        .block(
            Block::default()
                .title("Select Your Inspiration Category")
                .borders(Borders::ALL),
        );
    frame.render_widget(list, area);
}

fn render_results(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &SessionState,
    view_data: &ViewData,
) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let header = Paragraph::new(category_header_text(state))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, parts[0]);

    let quotes = quote_paragraph(state)
        .scroll((u16::try_from(view_data.scroll).unwrap_or(u16::MAX), 0))
        .block(
            Block::default()
                .title(state.view_mode.label())
                .borders(Borders::ALL),
        );
    frame.render_widget(quotes, parts[1]);
}

/// Line index of the cursor inside [`selection_text`], counting group headers.
fn selection_cursor_line(cursor: usize) -> usize {
    let mut line = 0;
    let mut seen = 0;
    for section in grouped() {
        line += 1;
        if cursor < seen + section.categories.len() {
            return line + (cursor - seen) * 2;
        }
        seen += section.categories.len();
        line += section.categories.len() * 2;
    }
    line
}

fn selection_text(state: &SessionState, cursor: usize) -> String {
    let mut out = String::new();
    let mut index = 0;
    for section in grouped() {
        out.push_str(&format!("{}\n", section.group.as_str()));
        for category in section.categories {
            let pointer = if index == cursor { CURSOR_MARK } else { " " };
            let mark = if state.selected_category == Some(category) {
                SELECTED_MARK
            } else {
                " "
            };
            out.push_str(&format!("{pointer} {mark} {}\n", category.name));
            out.push_str(&format!("      {}\n", category.description));
            index += 1;
        }
    }
    out
}

fn category_header_text(state: &SessionState) -> String {
    match state.selected_category {
        Some(category) => format!("{}\n{}", category.name, category.description),
        None => String::new(),
    }
}

fn quote_list_text(state: &SessionState) -> String {
    if state.quotes.is_empty() {
        return "(no quotes returned -- press r to try again)".to_owned();
    }
    state
        .quotes
        .iter()
        .enumerate()
        .map(|(index, quote)| format!("{:>2}. {}", index + 1, quote.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn quote_paragraph(state: &SessionState) -> Paragraph<'static> {
    Paragraph::new(quote_list_text(state)).wrap(Wrap { trim: true })
}

/// Last scroll offset that still shows text, counting wrapped rows.
fn max_quote_scroll(state: &SessionState, width: u16) -> usize {
    let rows = if width == 0 {
        quote_list_text(state).lines().count()
    } else {
        quote_paragraph(state).line_count(width)
    };
    rows.saturating_sub(1)
}

fn status_text(state: &SessionState, view_data: &ViewData) -> String {
    if state.is_loading {
        return "Getting inspirational quotes...".to_owned();
    }
    if state.is_refreshing {
        return "Refreshing quotes...".to_owned();
    }

    let hints = match state.view_mode {
        ViewMode::SelectingCategory => {
            let selected = state
                .selected_category
                .map_or("Choose a category", |category| category.name);
            format!("{selected} | {SELECTION_HINTS}")
        }
        ViewMode::ShowingQuotes => {
            "j/k scroll | r refresh | c Select Different Category | i about | q quit".to_owned()
        }
    };
    match &view_data.status_line {
        Some(status) => format!("{status} | {hints}"),
        None => hints,
    }
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

#[cfg(test)]
mod tests {
    use super::{
        InternalEvent, KeyOutcome, SELECT_PROMPT, ViewData, discard_queued_input,
        handle_key_event, max_quote_scroll, perform_generation, process_internal_events,
        quote_list_text, selectable_categories, selection_cursor_line, selection_text,
        status_text,
    };
    use anyhow::Result;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use inspire_app::{QuoteSession, SessionState, Trigger, ViewMode};
    use inspire_testkit::{SAMPLE_RESPONSE, ScriptedGenerator, category};
    use std::collections::VecDeque;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press<G: inspire_app::Generator>(
        session: &mut QuoteSession<G>,
        view_data: &mut ViewData,
        tx: &mpsc::Sender<InternalEvent>,
        code: KeyCode,
    ) -> KeyOutcome {
        handle_key_event(session, view_data, tx, key(code))
    }

    fn drive(
        session: &mut QuoteSession<ScriptedGenerator>,
        view_data: &mut ViewData,
        tx: &mpsc::Sender<InternalEvent>,
        code: KeyCode,
    ) -> Vec<SessionState> {
        let mut busy_frames = Vec::new();
        if let KeyOutcome::Generate(trigger) = press(session, view_data, tx, code) {
            perform_generation(session, view_data, tx, trigger, |state, _| {
                busy_frames.push(state.clone());
                Ok(())
            })
            .expect("generation should not fail the loop");
        }
        busy_frames
    }

    #[test]
    fn enter_without_selection_shows_select_prompt() {
        let mut session = QuoteSession::new(ScriptedGenerator::replying(SAMPLE_RESPONSE));
        let mut view_data = ViewData::default();
        let (tx, _rx) = mpsc::channel();

        let busy = drive(&mut session, &mut view_data, &tx, KeyCode::Enter);
        assert!(busy.is_empty());
        assert_eq!(view_data.status_line.as_deref(), Some(SELECT_PROMPT));
        assert_eq!(session.state().view_mode, ViewMode::SelectingCategory);
    }

    #[test]
    fn space_then_enter_loads_quotes_with_loading_frame() {
        let mut session = QuoteSession::new(ScriptedGenerator::replying(SAMPLE_RESPONSE));
        let mut view_data = ViewData::default();
        let (tx, _rx) = mpsc::channel();

        press(&mut session, &mut view_data, &tx, KeyCode::Char('j'));
        press(&mut session, &mut view_data, &tx, KeyCode::Char(' '));
        assert_eq!(
            session.state().selected_category,
            Some(selectable_categories()[1])
        );

        let busy = drive(&mut session, &mut view_data, &tx, KeyCode::Enter);
        assert_eq!(busy.len(), 1);
        assert!(busy[0].is_loading);
        assert!(!busy[0].is_refreshing);

        assert_eq!(session.state().view_mode, ViewMode::ShowingQuotes);
        assert_eq!(session.state().quotes.len(), 3);
        assert!(!session.state().is_loading);
    }

    #[test]
    fn refresh_failure_surfaces_error_notification() {
        let generator = ScriptedGenerator::replying(SAMPLE_RESPONSE).then_failure("quota exceeded");
        let mut session = QuoteSession::new(generator);
        let mut view_data = ViewData::default();
        let (tx, _rx) = mpsc::channel();

        press(&mut session, &mut view_data, &tx, KeyCode::Char(' '));
        drive(&mut session, &mut view_data, &tx, KeyCode::Enter);
        let before = session.state().quotes.clone();

        let busy = drive(&mut session, &mut view_data, &tx, KeyCode::Char('r'));
        assert!(busy[0].is_refreshing);
        assert_eq!(view_data.status_line.as_deref(), Some("Error: quota exceeded"));
        assert_eq!(session.state().quotes, before);
        assert_eq!(session.state().view_mode, ViewMode::ShowingQuotes);
    }

    #[test]
    fn c_returns_to_selection_with_cursor_on_previous_choice() {
        let mut session = QuoteSession::new(ScriptedGenerator::replying(SAMPLE_RESPONSE));
        let mut view_data = ViewData::default();
        let (tx, _rx) = mpsc::channel();

        press(&mut session, &mut view_data, &tx, KeyCode::Char('G'));
        press(&mut session, &mut view_data, &tx, KeyCode::Char(' '));
        drive(&mut session, &mut view_data, &tx, KeyCode::Enter);
        view_data.cursor = 0;

        press(&mut session, &mut view_data, &tx, KeyCode::Char('c'));
        assert_eq!(session.state().view_mode, ViewMode::SelectingCategory);
        assert!(session.state().quotes.is_empty());
        assert_eq!(view_data.cursor, selectable_categories().len() - 1);
    }

    #[test]
    fn info_dialog_captures_keys_until_closed() {
        let mut session = QuoteSession::new(ScriptedGenerator::new());
        let mut view_data = ViewData::default();
        let (tx, _rx) = mpsc::channel();

        press(&mut session, &mut view_data, &tx, KeyCode::Char('i'));
        assert!(session.state().dialog_open);

        assert_eq!(
            press(&mut session, &mut view_data, &tx, KeyCode::Char('q')),
            KeyOutcome::Continue
        );
        assert_eq!(
            press(&mut session, &mut view_data, &tx, KeyCode::Enter),
            KeyOutcome::Continue
        );
        assert!(!session.state().dialog_open);
        assert_eq!(
            press(&mut session, &mut view_data, &tx, KeyCode::Char('q')),
            KeyOutcome::Quit
        );
    }

    #[test]
    fn ctrl_c_quits_even_with_dialog_open() {
        let mut session = QuoteSession::new(ScriptedGenerator::new());
        let mut view_data = ViewData::default();
        let (tx, _rx) = mpsc::channel();
        session.toggle_info_dialog(true);

        let outcome = handle_key_event(
            &mut session,
            &mut view_data,
            &tx,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(outcome, KeyOutcome::Quit);
    }

    #[test]
    fn cursor_is_clamped_to_catalog() {
        let mut session = QuoteSession::new(ScriptedGenerator::new());
        let mut view_data = ViewData::default();
        let (tx, _rx) = mpsc::channel();

        press(&mut session, &mut view_data, &tx, KeyCode::Char('k'));
        assert_eq!(view_data.cursor, 0);
        for _ in 0..40 {
            press(&mut session, &mut view_data, &tx, KeyCode::Down);
        }
        assert_eq!(view_data.cursor, selectable_categories().len() - 1);
    }

    #[test]
    fn stale_status_clear_is_ignored() {
        let (tx, rx) = mpsc::channel();
        let mut view_data = ViewData {
            status_line: Some("Error: boom".to_owned()),
            status_token: 2,
            ..ViewData::default()
        };

        tx.send(InternalEvent::ClearStatus { token: 1 })
            .expect("send should succeed");
        process_internal_events(&mut view_data, &rx);
        assert!(view_data.status_line.is_some());

        tx.send(InternalEvent::ClearStatus { token: 2 })
            .expect("send should succeed");
        process_internal_events(&mut view_data, &rx);
        assert!(view_data.status_line.is_none());
    }

    #[test]
    fn selection_text_lists_groups_and_marks_cursor_and_choice() {
        let state = SessionState {
            selected_category: Some(category("Learning & Growth")),
            ..SessionState::default()
        };
        let text = selection_text(&state, 0);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Core");
        assert_eq!(lines[1], ">   Innovation & Creativity");
        assert_eq!(lines[3], "  ● Learning & Growth");
        assert!(text.contains("\nMood-Based\n"));
    }

    #[test]
    fn selection_cursor_line_accounts_for_group_headers() {
        let state = SessionState::default();
        let entries = selectable_categories();
        for cursor in [0, 5, 6, entries.len() - 1] {
            let text = selection_text(&state, cursor);
            let line = text
                .lines()
                .nth(selection_cursor_line(cursor))
                .expect("cursor line exists");
            assert!(line.starts_with('>'), "cursor {cursor} -> {line:?}");
            assert!(line.ends_with(entries[cursor].name));
        }
    }

    #[test]
    fn quote_list_numbers_quotes_and_handles_empty_batch() {
        let mut state = SessionState {
            view_mode: ViewMode::ShowingQuotes,
            ..SessionState::default()
        };
        assert!(quote_list_text(&state).contains("press r"));

        state.quotes = vec![
            inspire_app::QuoteRecord::new("first", "Leadership"),
            inspire_app::QuoteRecord::new("second", "Leadership"),
        ];
        assert_eq!(quote_list_text(&state), " 1. first\n\n 2. second");
    }

    #[test]
    fn status_text_prefers_busy_labels_then_notifications() {
        let mut state = SessionState {
            is_refreshing: true,
            ..SessionState::default()
        };
        let view_data = ViewData {
            status_line: Some("Error: boom".to_owned()),
            ..ViewData::default()
        };
        assert_eq!(status_text(&state, &view_data), "Refreshing quotes...");

        state.is_refreshing = false;
        let text = status_text(&state, &view_data);
        assert!(text.starts_with("Error: boom | Choose a category"));
    }

    #[test]
    fn scroll_reaches_the_end_of_wrapped_quotes() {
        let long = "word ".repeat(40);
        let generator = ScriptedGenerator::replying(format!("{long}\n{long}"));
        let mut session = QuoteSession::new(generator);
        let mut view_data = ViewData {
            quote_width: 20,
            ..ViewData::default()
        };
        let (tx, _rx) = mpsc::channel();

        press(&mut session, &mut view_data, &tx, KeyCode::Char(' '));
        drive(&mut session, &mut view_data, &tx, KeyCode::Enter);
        let unwrapped_last = quote_list_text(session.state()).lines().count() - 1;
        let wrapped_last = max_quote_scroll(session.state(), view_data.quote_width);
        assert!(wrapped_last > unwrapped_last);

        for _ in 0..wrapped_last + 5 {
            press(&mut session, &mut view_data, &tx, KeyCode::Down);
        }
        assert_eq!(view_data.scroll, wrapped_last);
    }

    #[test]
    fn max_quote_scroll_falls_back_to_raw_lines_before_first_draw() {
        let mut state = SessionState {
            view_mode: ViewMode::ShowingQuotes,
            ..SessionState::default()
        };
        state.quotes = vec![
            inspire_app::QuoteRecord::new("first", "Leadership"),
            inspire_app::QuoteRecord::new("second", "Leadership"),
        ];
        assert_eq!(max_quote_scroll(&state, 0), 2);
    }

    #[test]
    fn queued_input_is_dropped_after_generation() -> Result<()> {
        let mut queued = VecDeque::from(vec![
            Event::Key(key(KeyCode::Char('r'))),
            Event::Key(key(KeyCode::Char('r'))),
            Event::FocusGained,
        ]);
        let dropped = discard_queued_input(|| Ok(queued.pop_front()))?;
        assert_eq!(dropped, 3);
        assert!(queued.is_empty());

        assert_eq!(discard_queued_input(|| Ok(None))?, 0);
        Ok(())
    }

    #[test]
    fn refresh_key_is_ignored_in_selection_view() {
        let mut session = QuoteSession::new(ScriptedGenerator::new());
        let mut view_data = ViewData::default();
        let (tx, _rx) = mpsc::channel();

        let outcome = press(&mut session, &mut view_data, &tx, KeyCode::Char('r'));
        assert_eq!(outcome, KeyOutcome::Continue);
        assert!(matches!(
            press(&mut session, &mut view_data, &tx, KeyCode::Enter),
            KeyOutcome::Generate(Trigger::Initial)
        ));
    }
}
