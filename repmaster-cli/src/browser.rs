use anyhow::Result;
use crossterm::event::{self, KeyCode};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use repmaster::Session;
use repmaster::model::{AnyRateable, Rateable, RateableKind, RateableRef};
use repmaster::session::DetailPage;

const LIST_HELP: &str = "j/k: navigate | tab: gyms/workouts/exercises | enter: open | q: quit";
const DETAIL_HELP: &str =
    "j/k: ratings | r: rate | d: delete rating | c: next container | a: attach | esc: back";

fn next_kind(kind: RateableKind) -> RateableKind {
    match kind {
        RateableKind::Gym => RateableKind::Workout,
        RateableKind::Workout => RateableKind::Exercise,
        RateableKind::Exercise => RateableKind::Gym,
    }
}

fn highlight(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

enum Screen {
    List,
    Detail(DetailPage),
}

enum InputMode {
    Normal,
    Rating,
}

struct Browser<'a> {
    session: &'a Session,
    kind: RateableKind,
    items: Vec<AnyRateable>,
    selected: usize,
    screen: Screen,
    selected_rating: usize,
    selected_container: usize,
    status_message: String,
    input_mode: InputMode,
    input_buffer: String,
}

impl<'a> Browser<'a> {
    fn new(session: &'a Session, kind: RateableKind) -> Result<Self> {
        let mut browser = Self {
            session,
            kind,
            items: Vec::new(),
            selected: 0,
            screen: Screen::List,
            selected_rating: 0,
            selected_container: 0,
            status_message: LIST_HELP.to_string(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
        };
        browser.refresh_list()?;
        Ok(browser)
    }

    fn refresh_list(&mut self) -> Result<()> {
        self.items = self.session.list_rateables(self.kind)?;
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
        Ok(())
    }

    fn switch_kind(&mut self) -> Result<()> {
        self.kind = next_kind(self.kind);
        self.selected = 0;
        self.refresh_list()
    }

    fn scroll_down(&mut self) {
        match &self.screen {
            Screen::List => {
                if self.selected + 1 < self.items.len() {
                    self.selected += 1;
                }
            }
            Screen::Detail(page) => {
                if self.selected_rating + 1 < page.ratings.len() {
                    self.selected_rating += 1;
                }
            }
        }
    }

    fn scroll_up(&mut self) {
        match self.screen {
            Screen::List => self.selected = self.selected.saturating_sub(1),
            Screen::Detail(_) => self.selected_rating = self.selected_rating.saturating_sub(1),
        }
    }

    fn open_selected(&mut self) -> Result<()> {
        if let Some(item) = self.items.get(self.selected) {
            let target = item.rateable_ref();
            self.open(target)?;
            self.selected_rating = 0;
            self.selected_container = 0;
            self.status_message = DETAIL_HELP.to_string();
        }
        Ok(())
    }

    fn open(&mut self, target: RateableRef) -> Result<()> {
        let page = self.session.detail(target)?;
        if self.selected_rating >= page.ratings.len() {
            self.selected_rating = page.ratings.len().saturating_sub(1);
        }
        self.screen = Screen::Detail(page);
        Ok(())
    }

    fn back(&mut self) -> Result<()> {
        self.screen = Screen::List;
        self.status_message = LIST_HELP.to_string();
        self.refresh_list()
    }

    fn current_target(&self) -> Option<RateableRef> {
        match &self.screen {
            Screen::Detail(page) => Some(page.target),
            Screen::List => None,
        }
    }

    fn enter_rating_mode(&mut self) {
        if !self.session.is_logged_in() {
            self.status_message = "Log in with --user to rate".to_string();
            return;
        }
        self.input_mode = InputMode::Rating;
        self.input_buffer.clear();
        self.status_message = "Enter score and optional comment (e.g. '4.5 great squat rack'):".to_string();
    }

    /// Parses `"<score> [comment]"` from the input line and stores the rating.
    fn submit_rating(&mut self) -> Result<()> {
        let Some(target) = self.current_target() else {
            return Ok(());
        };
        let input = self.input_buffer.trim().to_string();
        let (score, comment) = match input.split_once(' ') {
            Some((score, comment)) => (score, Some(comment)),
            None => (input.as_str(), None),
        };
        let score: f64 = score.parse()?;

        self.session.rate(target, score, comment)?;
        self.open(target)?;
        self.status_message = format!("Rated {} with {:.1}", target, score);
        Ok(())
    }

    fn delete_selected_rating(&mut self) -> Result<()> {
        let Screen::Detail(page) = &self.screen else {
            return Ok(());
        };
        let Some(rating) = page.ratings.get(self.selected_rating) else {
            return Ok(());
        };
        if !page.can_delete(rating) {
            self.status_message = "You can only delete your own ratings".to_string();
            return Ok(());
        }
        let target = page.target;
        let removed = self.session.delete_rating(target, rating.id)?;
        self.open(target)?;
        self.status_message = format!("Deleted rating #{}", removed.id);
        Ok(())
    }

    fn next_container(&mut self) {
        if let Screen::Detail(page) = &self.screen {
            if !page.containers.is_empty() {
                self.selected_container = (self.selected_container + 1) % page.containers.len();
            }
        }
    }

    fn attach_to_selected_container(&mut self) -> Result<()> {
        let Screen::Detail(page) = &self.screen else {
            return Ok(());
        };
        let Some(container) = page.containers.get(self.selected_container).cloned() else {
            self.status_message = "Nothing to attach to".to_string();
            return Ok(());
        };
        let target = page.target;
        let linked = self.session.add_to_container(target, container.id)?;
        self.open(target)?;
        self.status_message = if linked {
            format!("Attached to {}", container.name)
        } else {
            format!("Already in {}", container.name)
        };
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

        let user = self
            .session
            .logged_in_user()
            .map(|u| format!(" - {}", u.username))
            .unwrap_or_default();
        let header = Paragraph::new(format!("RepMaster{}", user))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        match (&self.screen, &self.input_mode) {
            (_, InputMode::Rating) => {
                let input_widget = Paragraph::new(self.input_buffer.as_str())
                    .style(Style::default().fg(Color::Yellow))
                    .block(Block::default().borders(Borders::ALL).title("New Rating"));
                frame.render_widget(input_widget, chunks[1]);
            }
            (Screen::List, InputMode::Normal) => self.draw_list(frame, chunks[1]),
            (Screen::Detail(page), InputMode::Normal) => self.draw_detail(frame, chunks[1], page),
        }

        let footer = Paragraph::new(self.status_message.as_str())
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(footer, chunks[2]);
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect) {
        let title = format!("{}s ({} total)", self.kind, self.items.len());
        if self.items.is_empty() {
            let empty_msg = Paragraph::new(format!("No {}s found.", self.kind))
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(empty_msg, area);
            return;
        }

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| ListItem::new(item.to_string()).style(highlight(idx == self.selected)))
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect, page: &DetailPage) {
        let chunks = Layout::vertical([
            Constraint::Length(page.details.len() as u16 + 2),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

        let details: Vec<String> = page
            .details
            .iter()
            .map(|d| format!("{}{}", d.feature, d.data))
            .collect();
        let details = Paragraph::new(details.join("\n"))
            .block(Block::default().borders(Borders::ALL).title(page.title.as_str()));
        frame.render_widget(details, chunks[0]);

        let ratings: Vec<ListItem> = page
            .ratings
            .iter()
            .enumerate()
            .map(|(idx, rating)| {
                let mine = if page.can_delete(rating) { " *" } else { "" };
                let content = format!(
                    "{:.1}/5.0 {}{}",
                    rating.score,
                    rating.comment.as_deref().unwrap_or(""),
                    mine
                );
                ListItem::new(content).style(highlight(idx == self.selected_rating))
            })
            .collect();
        let ratings = List::new(ratings).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Ratings ({} total)", page.ratings.len())),
        );
        let mut list_state = ListState::default();
        if !page.ratings.is_empty() {
            list_state.select(Some(self.selected_rating));
        }
        frame.render_stateful_widget(ratings, chunks[1], &mut list_state);

        let container = match page.containers.get(self.selected_container) {
            Some(option) => format!("{} {}", option.kind, option.name),
            None => "none".to_string(),
        };
        let label = if page.has_fixed_containers {
            "Attach to"
        } else {
            "Add to profile"
        };
        let containers = Paragraph::new(container)
            .block(Block::default().borders(Borders::ALL).title(label));
        frame.render_widget(containers, chunks[2]);
    }

    /// Runs a fallible action and reports its error in the status bar.
    fn report(&mut self, result: Result<()>) {
        if let Err(e) = result {
            self.status_message = format!("Error: {}", e);
        }
    }
}

pub fn run(mut terminal: DefaultTerminal, session: &Session, kind: RateableKind) -> Result<()> {
    let mut browser = Browser::new(session, kind)?;

    loop {
        terminal.draw(|frame| browser.draw(frame))?;

        if let event::Event::Key(key) = event::read()? {
            match browser.input_mode {
                InputMode::Normal => match (matches!(browser.screen, Screen::List), key.code) {
                    (true, KeyCode::Char('q') | KeyCode::Char('Q')) => return Ok(()),
                    (_, KeyCode::Char('j') | KeyCode::Down) => browser.scroll_down(),
                    (_, KeyCode::Char('k') | KeyCode::Up) => browser.scroll_up(),
                    (true, KeyCode::Tab) => {
                        let result = browser.switch_kind();
                        browser.report(result);
                    }
                    (true, KeyCode::Enter) => {
                        let result = browser.open_selected();
                        browser.report(result);
                    }
                    (false, KeyCode::Esc | KeyCode::Char('q')) => {
                        let result = browser.back();
                        browser.report(result);
                    }
                    (false, KeyCode::Char('r')) => browser.enter_rating_mode(),
                    (false, KeyCode::Char('d')) => {
                        let result = browser.delete_selected_rating();
                        browser.report(result);
                    }
                    (false, KeyCode::Char('c')) => browser.next_container(),
                    (false, KeyCode::Char('a')) => {
                        let result = browser.attach_to_selected_container();
                        browser.report(result);
                    }
                    _ => {}
                },
                InputMode::Rating => match key.code {
                    KeyCode::Enter => {
                        let result = browser.submit_rating();
                        browser.input_mode = InputMode::Normal;
                        browser.input_buffer.clear();
                        browser.report(result);
                    }
                    KeyCode::Esc => {
                        browser.input_mode = InputMode::Normal;
                        browser.input_buffer.clear();
                        browser.status_message = DETAIL_HELP.to_string();
                    }
                    KeyCode::Char(c) => {
                        browser.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        browser.input_buffer.pop();
                    }
                    _ => {}
                },
            }
        }
    }
}
