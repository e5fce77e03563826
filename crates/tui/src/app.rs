use std::{cmp, io, str::FromStr, thread, time::Duration};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dquest_core::{
    Blocked, Command, Direction as Exit, Finding, Investigation, StepOutcome, Verdict,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_NAME_LEN: usize = 64;
const MAX_NOTES: usize = 64;

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    muted: Color,
    success: Color,
    warning: Color,
    danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

/// Resolve the accent colour from configuration, falling back to the default theme.
fn load_theme(accent: &str) -> (Theme, Option<String>) {
    let mut theme = Theme::default();
    match Color::from_str(accent) {
        Ok(color) => {
            theme.accent = color;
            (theme, None)
        }
        Err(_) => (
            theme,
            Some(format!("Unknown accent colour '{accent}', using default")),
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Explore,
    Journal,
    Verdict,
}

#[derive(Debug, Clone)]
struct AccusePrompt {
    input: String,
    // byte offset into `input`, always on a char boundary
    cursor: usize,
    suspects: Vec<String>,
}

impl AccusePrompt {
    fn new(suspects: Vec<String>) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            suspects,
        }
    }

    fn move_left(&mut self) {
        if let Some(ch) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= ch.len_utf8();
        }
    }

    fn move_right(&mut self) {
        if let Some(ch) = self.input[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    fn insert(&mut self, ch: char) {
        if self.input.chars().count() >= MAX_NAME_LEN || ch.is_control() {
            return;
        }
        self.input.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.move_left();
            self.input.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    /// Column of the cursor, counted in characters.
    fn cursor_column(&self) -> usize {
        self.input[..self.cursor].chars().count()
    }
}

#[derive(Debug, Clone)]
struct Report {
    accused: String,
    verdict: Verdict,
    supporting: Vec<String>,
    threshold: usize,
}

enum AppEvent {
    Input(Event),
    Tick,
}

/// Terminal frontend driving a single [`Investigation`].
pub struct DetectiveApp {
    investigation: Investigation,
    title: String,
    screen: Screen,
    prompt: Option<AccusePrompt>,
    report: Option<Report>,
    notes: Vec<String>,
    status: String,
    theme: Theme,
    should_quit: bool,
}

impl DetectiveApp {
    pub fn new(investigation: Investigation, title: impl Into<String>, accent: &str) -> Self {
        let (theme, theme_status) = load_theme(accent);
        let mut app = Self {
            investigation,
            title: title.into(),
            screen: Screen::Explore,
            prompt: None,
            report: None,
            notes: Vec::new(),
            status: "Exploration started in the entrance hall".to_string(),
            theme,
            should_quit: false,
        };
        if let Some(note) = theme_status {
            app.status = note;
        }
        app.note_room_entry(app.investigation.current_room().clue().map(str::to_string));
        app
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx);

        let outcome = loop {
            if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
                break Err(err.into());
            }
            if self.should_quit {
                break Ok(());
            }
            match event_rx.recv().await {
                Some(AppEvent::Input(event)) => self.handle_input(event),
                Some(AppEvent::Tick) => {}
                None => break Ok(()),
            }
        };

        restore_terminal(&mut terminal)?;
        outcome
    }

    fn handle_input(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }
        match self.screen {
            Screen::Explore => self.handle_explore_key(key),
            Screen::Journal => self.handle_journal_key(key),
            Screen::Verdict => self.should_quit = true,
        }
    }

    fn handle_explore_key(&mut self, key: KeyEvent) {
        let command = match key.code {
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Left => Command::LEFT,
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::RIGHT,
            KeyCode::Char('s') | KeyCode::Char('S') => Command::Stop,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                return;
            }
            _ => {
                self.set_status("Invalid option, try again".to_string());
                return;
            }
        };

        match self.investigation.step(command) {
            StepOutcome::Moved { room, clue } => {
                self.set_status(format!("You walk into {room}"));
                self.note_room_entry(clue);
            }
            StepOutcome::Blocked(reason) => {
                let message = match reason {
                    Blocked::NoPath(direction) => format!("There is no path to the {direction}"),
                    Blocked::NotExploring => reason.to_string(),
                };
                self.set_status(message);
            }
            StepOutcome::Stopped => {
                self.note("Exploration ended; on to the judgement".to_string());
                self.screen = Screen::Journal;
                self.set_status("Review your clues, then press Enter to accuse".to_string());
            }
        }
    }

    fn handle_journal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('A') => {
                let suspects = self
                    .investigation
                    .index()
                    .suspects()
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                self.prompt = Some(AccusePrompt::new(suspects));
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let mut accused = None;
        if let Some(prompt) = self.prompt.as_mut() {
            match key.code {
                KeyCode::Esc => {
                    self.prompt = None;
                    self.set_status("Accusation cancelled".to_string());
                    return;
                }
                KeyCode::Enter => accused = Some(prompt.input.clone()),
                KeyCode::Left => prompt.move_left(),
                KeyCode::Right => prompt.move_right(),
                KeyCode::Home => prompt.move_home(),
                KeyCode::End => prompt.move_end(),
                KeyCode::Backspace => prompt.backspace(),
                KeyCode::Delete => prompt.delete(),
                KeyCode::Char(ch) => {
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                        prompt.insert(ch);
                    }
                }
                _ => {}
            }
        }

        if let Some(accused) = accused {
            self.prompt = None;
            self.accuse(accused);
        }
    }

    fn accuse(&mut self, accused: String) {
        match self.investigation.accuse(&accused) {
            Ok(verdict) => {
                let supporting = self
                    .investigation
                    .supporting_clues(&accused)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                info!(accused = %accused, ?verdict, "Accusation judged");
                self.report = Some(Report {
                    accused,
                    verdict,
                    supporting,
                    threshold: self.investigation.threshold(),
                });
                self.screen = Screen::Verdict;
                self.set_status("Press any key to leave the mansion".to_string());
            }
            Err(err) => self.set_status(format!("Error: {err}")),
        }
    }

    fn note_room_entry(&mut self, clue: Option<String>) {
        let room = self.investigation.current_room().name().to_string();
        match clue {
            Some(clue) => self.note(format!("{room}: found a clue \"{clue}\"")),
            None => self.note(format!("{room}: no clue here")),
        }
    }

    fn note(&mut self, message: String) {
        let stamp = Local::now().format("%H:%M:%S");
        self.notes.push(format!("[{stamp}] {message}"));
        if self.notes.len() > MAX_NOTES {
            let excess = self.notes.len() - MAX_NOTES;
            self.notes.drain(..excess);
        }
    }

    fn set_status(&mut self, message: String) {
        debug!(%message, "Status updated");
        self.status = message;
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        match self.screen {
            Screen::Explore => self.draw_explore(frame, chunks[1]),
            Screen::Journal => self.draw_journal(frame, chunks[1]),
            Screen::Verdict => self.draw_verdict(frame, chunks[1]),
        }
        self.render_status(frame, chunks[2]);

        if let Some(prompt) = &self.prompt {
            self.render_prompt(frame, prompt);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let phase = self.investigation.phase();
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                self.title.clone(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ·  {phase}"),
                Style::default().fg(self.theme.muted),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn draw_explore(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        self.render_room(frame, columns[0]);
        self.render_clue_list(frame, right[0]);
        self.render_notes(frame, right[1]);
    }

    fn render_room(&self, frame: &mut Frame, area: Rect) {
        let room = self.investigation.current_room();
        let map = self.investigation.map();
        let cursor = self.investigation.cursor();
        let accent = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(vec![Span::raw("You are in: "), Span::styled(room.name(), accent)]),
            Line::from(""),
        ];
        match room.clue() {
            Some(clue) => lines.push(Line::from(Span::styled(
                format!("You found a clue: \"{clue}\""),
                Style::default().fg(self.theme.success),
            ))),
            None => lines.push(Line::from(Span::styled(
                "No clue in this room.",
                Style::default().fg(self.theme.muted),
            ))),
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Options:"));
        for exit in map.exits(cursor) {
            let key = match exit {
                Exit::Left => "e",
                Exit::Right => "d",
            };
            let target = map.child_name(cursor, exit).unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(format!("  [{key}] "), accent),
                Span::raw(format!("Go to {target} ({exit})")),
            ]));
        }
        if room.is_leaf() {
            lines.push(Line::from(Span::styled(
                "  This room has no further exits.",
                Style::default().fg(self.theme.muted),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled("  [s] ", accent),
            Span::raw("Stop exploring and go to the judgement"),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  [q] ", accent),
            Span::raw("Leave the game"),
        ]));
        lines.push(Line::from(""));
        let trail: Vec<&str> = self.investigation.path().collect();
        lines.push(Line::from(Span::styled(
            format!("Trail: {}", trail.join(" → ")),
            Style::default().fg(self.theme.muted),
        )));

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Mansion"))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_clue_list(&self, frame: &mut Frame, area: Rect) {
        let clues = self.investigation.clues();
        let items: Vec<ListItem> = if clues.is_empty() {
            vec![ListItem::new(Span::styled(
                "No clues collected.",
                Style::default().fg(self.theme.muted),
            ))]
        } else {
            clues
                .iter()
                .map(|clue| {
                    ListItem::new(Span::styled(
                        format!(" - {clue}"),
                        Style::default().fg(self.theme.primary_fg),
                    ))
                })
                .collect()
        };
        let title = format!("Clues ({})", clues.len());
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(list, area);
    }

    fn render_notes(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let skip = self.notes.len().saturating_sub(visible);
        let lines: Vec<Line> = self
            .notes
            .iter()
            .skip(skip)
            .map(|note| Line::from(Span::styled(note.clone(), Style::default().fg(self.theme.muted))))
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Case notes"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_journal(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(4)])
            .split(area);
        self.render_clue_list(frame, chunks[0]);

        let help = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" accuse a suspect  "),
                Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" quit"),
            ]),
            Line::from(format!(
                "At least {} clues must point at the accused.",
                self.investigation.threshold()
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Judgement"));
        frame.render_widget(help, chunks[1]);
    }

    fn draw_verdict(&self, frame: &mut Frame, area: Rect) {
        let Some(report) = self.report.as_ref() else {
            return;
        };
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        match report.verdict {
            Verdict::Invalid => {
                lines.push(Line::from(Span::styled(
                    "Invalid suspect name.",
                    Style::default().fg(self.theme.warning),
                )));
            }
            Verdict::Judged { tally, finding } => {
                lines.push(Line::from(Span::styled(
                    format!("Final judgement: {}", report.accused),
                    bold.fg(self.theme.accent),
                )));
                lines.push(Line::from(format!(
                    "Clues pointing at {}: {tally}",
                    report.accused
                )));
                for clue in &report.supporting {
                    lines.push(Line::from(format!("  - {clue}")));
                }
                lines.push(Line::from(""));
                match finding {
                    Finding::Sufficient => {
                        lines.push(Line::from(Span::styled(
                            format!("Verdict: there is SUFFICIENT EVIDENCE to accuse {}!", report.accused),
                            bold.fg(self.theme.success),
                        )));
                        lines.push(Line::from("Well done, detective: the evidence holds up."));
                    }
                    Finding::Insufficient => {
                        lines.push(Line::from(Span::styled(
                            format!(
                                "Verdict: INSUFFICIENT. Not enough clues to convict {} (need {}).",
                                report.accused, report.threshold
                            ),
                            bold.fg(self.theme.danger),
                        )));
                        lines.push(Line::from(
                            "Recommendation: keep investigating or review the clues.",
                        ));
                    }
                }
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Thank you for playing Detective Quest!"));

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Verdict"))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_prompt(&self, frame: &mut Frame, prompt: &AccusePrompt) {
        let frame_area = frame.size();
        let mut width = cmp::min(64_u16, frame_area.width.saturating_sub(4));
        width = cmp::max(width, 24_u16);
        let height = 8_u16.min(frame_area.height.saturating_sub(2)).max(5_u16);
        let area = centered_rect(width, height, frame_area);

        frame.render_widget(Clear, area);

        let input_line = Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.accent)),
            Span::raw(prompt.input.clone()),
        ]);
        let helper = Line::from(vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" accuse  "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" back"),
        ]);
        let hint = Line::from(Span::styled(
            format!("Known suspects: {}", prompt.suspects.join(", ")),
            Style::default().fg(self.theme.muted),
        ));

        let paragraph = Paragraph::new(vec![
            Line::from("Whom do you accuse? (type the exact name)"),
            input_line,
            Line::from(""),
            helper,
            hint,
        ])
        .block(Block::default().borders(Borders::ALL).title("Accusation"))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);

        let cursor_x = (area.x + 3 + prompt.cursor_column() as u16)
            .min(area.x + area.width.saturating_sub(2));
        frame.set_cursor(cursor_x, area.y + 2);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(Line::from(self.status.clone()))
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dquest_core::{Phase, Scenario};

    fn app() -> DetectiveApp {
        let scenario = Scenario::mansion();
        let investigation = Investigation::new(
            scenario.build_map().unwrap(),
            scenario.build_index(101).unwrap(),
        );
        DetectiveApp::new(investigation, scenario.title, "cyan")
    }

    fn press(app: &mut DetectiveApp, code: KeyCode) {
        app.handle_input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut DetectiveApp, text: &str) {
        for ch in text.chars() {
            let modifiers = if ch.is_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            app.handle_input(Event::Key(KeyEvent::new(KeyCode::Char(ch), modifiers)));
        }
    }

    #[test]
    fn starts_in_the_hall_with_its_clue() {
        let app = app();
        assert_eq!(app.screen, Screen::Explore);
        assert_eq!(app.investigation.current_room().name(), "Hall de Entrada");
        assert_eq!(app.investigation.clues().len(), 1);
        assert_eq!(app.notes.len(), 1);
    }

    #[test]
    fn letter_keys_navigate_between_rooms() {
        let mut app = app();
        press(&mut app, KeyCode::Char('E'));
        assert_eq!(app.investigation.current_room().name(), "Sala de Estar");
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.investigation.current_room().name(), "Jardim");

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.investigation.current_room().name(), "Jardim");
        assert_eq!(app.status, "There is no path to the right");

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.status, "Invalid option, try again");
    }

    #[test]
    fn full_game_reaches_a_sufficient_verdict() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen, Screen::Journal);
        assert_eq!(app.investigation.phase(), Phase::Tallying);

        press(&mut app, KeyCode::Enter);
        assert!(app.prompt.is_some());
        type_text(&mut app, "Sr. Branco");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Verdict);
        let report = app.report.as_ref().unwrap();
        assert_eq!(
            report.verdict,
            Verdict::Judged {
                tally: 2,
                finding: Finding::Sufficient
            }
        );
        assert_eq!(
            report.supporting,
            vec!["Faca com marcas de sangue", "Pegadas misteriosas no tapete"]
        );

        press(&mut app, KeyCode::Char('x'));
        assert!(app.should_quit);
    }

    #[test]
    fn empty_accusation_is_reported_as_invalid() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.report.as_ref().unwrap().verdict, Verdict::Invalid);
    }

    #[test]
    fn prompt_editing_respects_multibyte_characters() {
        let mut prompt = AccusePrompt::new(Vec::new());
        for ch in "Sra. Rosá".chars() {
            prompt.insert(ch);
        }
        prompt.backspace();
        assert_eq!(prompt.input, "Sra. Ros");
        prompt.insert('a');
        prompt.move_home();
        prompt.move_right();
        prompt.delete();
        assert_eq!(prompt.input, "Sa. Rosa");
        assert_eq!(prompt.cursor_column(), 1);
    }

    #[test]
    fn cancelling_the_prompt_returns_to_the_journal() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(app.prompt.is_none());
        assert_eq!(app.screen, Screen::Journal);
        assert_eq!(app.investigation.phase(), Phase::Tallying);
    }

    #[test]
    fn unknown_accent_falls_back_to_default() {
        let (theme, note) = load_theme("not-a-colour");
        assert_eq!(theme.accent, Color::Cyan);
        assert!(note.is_some());
        let (theme, note) = load_theme("magenta");
        assert_eq!(theme.accent, Color::Magenta);
        assert!(note.is_none());
    }
}
