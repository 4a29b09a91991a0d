use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::stdout;

use crate::models::{Application, ApplicationStatus};
use crate::tracker::{ApplicationFilter, Tracker};

struct BrowseState {
    apps: Vec<Application>,
    selected: usize,
    scroll_offset: u16,
}

impl BrowseState {
    fn new(apps: Vec<Application>) -> Self {
        Self {
            apps,
            selected: 0,
            scroll_offset: 0,
        }
    }

    fn current(&self) -> Option<&Application> {
        self.apps.get(self.selected)
    }

    fn next(&mut self) {
        if !self.apps.is_empty() && self.selected < self.apps.len() - 1 {
            self.selected += 1;
            self.scroll_offset = 0;
        }
    }

    fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.scroll_offset = 0;
        }
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(3);
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }

    fn set_status(&mut self, tracker: &mut Tracker, status: ApplicationStatus) {
        let Some(app) = self.current() else { return };
        let mut updated = app.clone();
        updated.status = status;
        if tracker.update_application(updated).unwrap_or(false) {
            if let Some(app) = self.apps.get_mut(self.selected) {
                app.status = status;
            }
        }
    }
}

pub fn run_browse(tracker: &mut Tracker, filter: &ApplicationFilter) -> Result<()> {
    let apps: Vec<Application> = tracker
        .applications(filter)
        .into_iter()
        .cloned()
        .collect();
    if apps.is_empty() {
        println!("No applications found.");
        return Ok(());
    }

    let mut state = BrowseState::new(apps);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, &mut state, tracker);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut BrowseState,
    tracker: &mut Tracker,
) -> Result<()> {
    let mut list_state = ListState::default();
    list_state.select(Some(0));

    loop {
        terminal.draw(|frame| draw(frame, state, &mut list_state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let prev_selected = state.selected;
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Down | KeyCode::Char('j') => state.next(),
                KeyCode::Up | KeyCode::Char('k') => state.prev(),
                KeyCode::Char('J') | KeyCode::PageDown => state.scroll_down(),
                KeyCode::Char('K') | KeyCode::PageUp => state.scroll_up(),
                KeyCode::Char('a') => state.set_status(tracker, ApplicationStatus::Applied),
                KeyCode::Char('i') => state.set_status(tracker, ApplicationStatus::Interview),
                KeyCode::Char('o') => state.set_status(tracker, ApplicationStatus::Offer),
                KeyCode::Char('x') => state.set_status(tracker, ApplicationStatus::Rejected),
                KeyCode::Char('w') => state.set_status(tracker, ApplicationStatus::Withdrawn),
                _ => {}
            }
            if state.selected != prev_selected {
                list_state.select(Some(state.selected));
            }
        }
    }
    Ok(())
}

fn status_icon(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "+",
        ApplicationStatus::Interview => "*",
        ApplicationStatus::Offer => "o",
        ApplicationStatus::Rejected => "x",
        ApplicationStatus::Withdrawn => "-",
    }
}

fn status_style(status: ApplicationStatus) -> Style {
    match status {
        ApplicationStatus::Applied => Style::default().fg(Color::Cyan),
        ApplicationStatus::Interview => Style::default().fg(Color::Yellow),
        ApplicationStatus::Offer => Style::default().fg(Color::Green),
        ApplicationStatus::Rejected => Style::default().fg(Color::Red),
        ApplicationStatus::Withdrawn => Style::default().fg(Color::DarkGray),
    }
}

fn draw(frame: &mut Frame, state: &BrowseState, list_state: &mut ListState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(frame.area());

    // Left panel: application list
    let items: Vec<ListItem> = state
        .apps
        .iter()
        .map(|app| {
            let position = if app.position.len() > 30 {
                format!("{}...", &app.position[..27])
            } else {
                app.position.clone()
            };
            ListItem::new(format!(
                "{} {} | {}",
                status_icon(app.status),
                position,
                app.company
            ))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Applications ({}) ",
            state.apps.len()
        )))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chunks[0], list_state);

    // Right panel: application detail
    let detail = build_detail(state);
    let detail_widget = Paragraph::new(detail)
        .block(Block::default().borders(Borders::ALL).title(" Detail "))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll_offset, 0));

    frame.render_widget(detail_widget, chunks[1]);

    // Footer help
    let help_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let help = Paragraph::new(
        " j/k:navigate  J/K:scroll  a:applied i:interview o:offer x:rejected w:withdrawn  q:quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area[1]);
}

fn build_detail<'a>(state: &'a BrowseState) -> Text<'a> {
    let Some(app) = state.current() else {
        return Text::raw("No application selected");
    };

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        &app.position,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!("at {}", app.company)));
    lines.push(Line::from(Span::styled(
        format!("Status: {}", app.status),
        status_style(app.status),
    )));

    if let Some(source) = app.source {
        lines.push(Line::from(format!("Source: {}", source)));
    }
    if let Some(location) = &app.location {
        lines.push(Line::from(format!("Location: {}", location)));
    }
    if let Some(salary) = &app.salary {
        lines.push(Line::from(format!("Salary: {}", salary)));
    }
    if let Some(url) = &app.job_url {
        lines.push(Line::from(format!("URL: {}", url)));
    }

    lines.push(Line::from(format!("Applied: {}", app.applied_date)));
    lines.push(Line::from(format!("Last update: {}", app.last_update)));
    if let Some(interview) = &app.interview_date {
        lines.push(Line::from(format!("Interview: {}", interview)));
    }
    if let Some(follow_up) = &app.follow_up_date {
        lines.push(Line::from(format!("Follow up: {}", follow_up)));
    }

    if let Some(notes) = &app.notes {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Notes",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for line in textwrap::fill(notes, 70).lines() {
            lines.push(Line::from(line.to_string()));
        }
    }

    Text::from(lines)
}
