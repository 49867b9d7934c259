//! Ratatui front-end for the Personal Library Manager. This file records not
//! just *what* each UI state does but also *why* the interactions behave the
//! way they do. The extra detail preserves the reasoning behind shortcuts and
//! layout decisions for future maintenance.

use std::cmp::min;
use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::Book;
use crate::store::{Library, LibraryStats, SearchField};

use super::forms::{BookField, BookForm, ConfirmBookRemove};
use super::helpers::{centered_rect, format_percent, surface_error};
use super::screens::{BookFilter, ShelfScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height allocation per book card in the shelf list.
const BOOK_CARD_HEIGHT: u16 = 5;

/// High-level navigation states. Keeping this explicit makes it easy to reason
/// about which rendering path runs and what keyboard shortcuts should do.
enum Screen {
    Shelf(ShelfScreen),
    Stats(LibraryStats),
}

/// Fine-grained modes scoped to the current screen. The interactions borrow
/// from Vim-style modal flows (Normal vs. form entry vs. confirmation) so the
/// keyboard model stays predictable.
enum Mode {
    Normal,
    AddingBook(BookForm),
    ConfirmRemove(ConfirmBookRemove),
    /// Search mode: typing updates the query and filters the shelf live.
    Searching(SearchState),
}

/// State for an active inline search. `query` is the current text shown in
/// the search bar; `field` selects which column is matched.
struct SearchState {
    field: SearchField,
    query: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. The struct combines the
/// file-backed store, the active screen, and the current interaction mode.
pub struct App {
    /// The library store. Kept on the struct so every handler can mutate and
    /// persist synchronously without extra plumbing; each mutation rewrites
    /// the backing file before the handler returns.
    library: Library,
    /// Active high-level screen.
    screen: Screen,
    /// Current interaction mode for that screen.
    mode: Mode,
    /// Optional status line surfaced in the footer.
    status: Option<StatusMessage>,
}

impl App {
    /// Construct the app around a loaded library. The shelf screen starts
    /// with a snapshot of the records so rendering never re-reads the file.
    pub fn new(library: Library) -> Self {
        let shelf = ShelfScreen::new(library.books().to_vec());
        Self {
            library,
            screen: Screen::Shelf(shelf),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Top-level key dispatcher. The design funnels every key through the
    /// active `Mode`, which returns the next mode to run. The boolean result
    /// tells the outer loop whether the user requested an exit.
    pub(crate) fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingBook(form) => self.handle_add_book(code, form)?,
            Mode::ConfirmRemove(confirm) => self.handle_confirm_remove(code, confirm)?,
            Mode::Searching(state) => self.handle_search(code, state)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    /// Handle keys while in `Mode::Normal`. This branch performs the
    /// navigation work and decides which modal flow to enter next.
    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::Shelf(ref mut shelf) => {
                let mut status_to_set: Option<(String, StatusKind)> = None;
                let mut clear_status = false;
                let mut open_stats = false;
                let mut save_requested = false;
                let mut next_mode: Option<Mode> = None;

                {
                    let shelf = &mut *shelf;
                    match code {
                        KeyCode::Char('q') => {
                            *exit = true;
                        }
                        KeyCode::Esc => {
                            // Esc first clears an applied search filter; only a
                            // second Esc on the unfiltered shelf quits.
                            if shelf.has_filter() {
                                shelf.set_filter(None);
                                clear_status = true;
                            } else {
                                *exit = true;
                            }
                        }
                        KeyCode::Up => shelf.move_selection(-1),
                        KeyCode::Down => shelf.move_selection(1),
                        KeyCode::PageUp => shelf.move_selection(-5),
                        KeyCode::PageDown => shelf.move_selection(5),
                        KeyCode::Home => shelf.select_first(),
                        KeyCode::End => shelf.select_last(),
                        KeyCode::Char('f') => {
                            clear_status = true;
                            next_mode = Some(Mode::Searching(SearchState {
                                field: SearchField::Title,
                                query: String::new(),
                            }));
                        }
                        KeyCode::Char('+') => {
                            clear_status = true;
                            next_mode = Some(Mode::AddingBook(BookForm::default()));
                        }
                        KeyCode::Char('-') => {
                            if let Some(book) = shelf.current_book().cloned() {
                                clear_status = true;
                                let matches = self
                                    .library
                                    .books()
                                    .iter()
                                    .filter(|candidate| candidate.title == book.title)
                                    .count();
                                next_mode = Some(Mode::ConfirmRemove(ConfirmBookRemove {
                                    title: book.title,
                                    author: book.author,
                                    matches,
                                }));
                            } else {
                                status_to_set = Some((
                                    "No book selected to remove.".to_string(),
                                    StatusKind::Error,
                                ));
                            }
                        }
                        KeyCode::Char('t') | KeyCode::Char('T') => {
                            clear_status = true;
                            open_stats = true;
                        }
                        KeyCode::Char('w') | KeyCode::Char('W') => {
                            save_requested = true;
                        }
                        _ => {}
                    }
                }

                if open_stats {
                    self.screen = Screen::Stats(self.library.statistics());
                }
                if save_requested {
                    status_to_set = Some(self.manual_save());
                }

                if clear_status {
                    self.clear_status();
                }
                if let Some((text, kind)) = status_to_set {
                    self.set_status(text, kind);
                }

                Ok(next_mode.unwrap_or(Mode::Normal))
            }
            Screen::Stats(_) => {
                match code {
                    KeyCode::Char('q') => {
                        *exit = true;
                    }
                    KeyCode::Esc | KeyCode::Char('t') | KeyCode::Char('T') => {
                        self.clear_status();
                        self.open_shelf();
                    }
                    KeyCode::Char('w') | KeyCode::Char('W') => {
                        let (text, kind) = self.manual_save();
                        self.set_status(text, kind);
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
        }
    }

    /// Process key presses while the "Add a Book" form is active. Returns the
    /// next mode so the caller can continue driving the state machine.
    fn handle_add_book(&mut self, code: KeyCode, mut form: BookForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add book cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok((title, author, year, genre, read)) => {
                    match self.library.add_book(&title, &author, year, &genre, read) {
                        Ok(book) => {
                            self.refresh_shelf();
                            self.set_status(
                                format!("Added '{}'.", book.display_title()),
                                StatusKind::Info,
                            );
                            keep_open = false;
                        }
                        Err(err) => {
                            let message = surface_error(&err);
                            form.error = Some(message.clone());
                            self.set_status(message, StatusKind::Error);
                        }
                    }
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingBook(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    /// Confirmation dialog for removal. Escape cancels, enter confirms. The
    /// store drops every record sharing the confirmed title and rewrites the
    /// file either way.
    fn handle_confirm_remove(
        &mut self,
        code: KeyCode,
        confirm: ConfirmBookRemove,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Removal cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.library.remove_book(&confirm.title) {
                    Ok(removed) => {
                        self.refresh_shelf();
                        let message = match removed {
                            0 => format!("No books matched '{}'.", confirm.title),
                            1 => format!("Removed '{}'.", confirm.title),
                            n => format!("Removed {n} copies of '{}'.", confirm.title),
                        };
                        self.set_status(message, StatusKind::Info);
                        Ok(Mode::Normal)
                    }
                    Err(err) => {
                        let message = surface_error(&err);
                        self.set_status(message, StatusKind::Error);
                        Ok(Mode::ConfirmRemove(confirm))
                    }
                }
            }
            _ => Ok(Mode::ConfirmRemove(confirm)),
        }
    }

    /// Handle keys while the inline search overlay is active. Typing updates
    /// the filter live; Tab flips the searched field between Title and
    /// Author; Esc clears the filter and leaves the mode, while Enter keeps
    /// the filter applied so the narrowed shelf can be browsed normally.
    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Result<Mode> {
        let shelf = match &mut self.screen {
            Screen::Shelf(shelf) => shelf,
            _ => return Ok(Mode::Normal),
        };

        match code {
            KeyCode::Esc => {
                shelf.set_filter(None);
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => {
                return Ok(Mode::Normal);
            }
            KeyCode::Up => {
                shelf.move_selection(-1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Down => {
                shelf.move_selection(1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::PageUp => {
                shelf.move_selection(-5);
                return Ok(Mode::Searching(state));
            }
            KeyCode::PageDown => {
                shelf.move_selection(5);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Home => {
                shelf.select_first();
                return Ok(Mode::Searching(state));
            }
            KeyCode::End => {
                shelf.select_last();
                return Ok(Mode::Searching(state));
            }
            KeyCode::Tab | KeyCode::BackTab => {
                state.field = state.field.toggled();
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    state.query.push(ch);
                }
            }
            _ => {}
        }

        shelf.set_filter(Some(BookFilter {
            field: state.field,
            query: state.query.clone(),
        }));

        Ok(Mode::Searching(state))
    }

    /// Explicit save action. Every mutation already persists, so this is a
    /// manual alias kept because users expect a save key to exist.
    fn manual_save(&mut self) -> (String, StatusKind) {
        match self.library.save() {
            Ok(()) => (
                format!("Library saved to {}.", self.library.path().display()),
                StatusKind::Info,
            ),
            Err(err) => (surface_error(&err), StatusKind::Error),
        }
    }

    /// Reload the shelf snapshot from the store after a mutation, keeping any
    /// active filter applied.
    fn refresh_shelf(&mut self) {
        if let Screen::Shelf(ref mut shelf) = self.screen {
            shelf.set_books(self.library.books().to_vec());
        }
    }

    /// Return to the shelf screen with a fresh snapshot of the records.
    fn open_shelf(&mut self) {
        self.screen = Screen::Shelf(ShelfScreen::new(self.library.books().to_vec()));
    }

    /// Main render routine invoked each tick by Ratatui. Splits the frame into
    /// content and footer regions and dispatches to the active screen.
    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Shelf(shelf) => self.draw_shelf(frame, content_area, shelf),
            Screen::Stats(stats) => self.draw_stats(frame, content_area, stats),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingBook(form) => self.draw_book_form(frame, area, "Add a Book", form),
            Mode::ConfirmRemove(confirm) => self.draw_confirm_remove(frame, area, confirm),
            Mode::Searching(state) => self.draw_search_bar(frame, area, state),
            Mode::Normal => {}
        }
    }

    /// Render the shelf: a header with the record count and the card list of
    /// every (possibly filtered) book.
    fn draw_shelf(&self, frame: &mut Frame, area: Rect, shelf: &ShelfScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let count = shelf.books.len();
        let count_label = if count == 1 { "book" } else { "books" };
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Your Library",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(format!("{count} {count_label} on the shelf"))),
        ])
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Books"));
        frame.render_widget(header, chunks[0]);

        if shelf.books.is_empty() {
            let message = Paragraph::new("No books in the library yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[1]);
            return;
        }

        if shelf.filtered_books.is_empty() {
            let message = Paragraph::new("No matching books found.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[1]);
            return;
        }

        self.render_book_cards(frame, chunks[1], &shelf.filtered_books, shelf.selected);
    }

    /// Render the statistics screen: total count plus the share of records
    /// marked read.
    fn draw_stats(&self, frame: &mut Frame, area: Rect, stats: &LibraryStats) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    "Total Books: ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(stats.total.to_string()),
            ]),
            Line::from(vec![
                Span::styled(
                    "Percentage Read: ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format_percent(stats.percent_read)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press 't' or Esc to return to the shelf.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Library Statistics"),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    /// Card list renderer shared by the filtered and unfiltered shelf. Scrolls
    /// so the selection stays visible.
    fn render_book_cards(&self, frame: &mut Frame, area: Rect, books: &[Book], selected: usize) {
        if books.is_empty() || area.height == 0 {
            return;
        }

        let card_height = BOOK_CARD_HEIGHT as usize;
        let capacity = ((area.height as usize) / card_height).max(1);
        let len = books.len();
        let mut start = if selected >= capacity {
            selected + 1 - capacity
        } else {
            0
        };
        if start + capacity > len {
            start = len.saturating_sub(capacity);
        }
        let end = min(start + capacity, len);
        let visible_len = end.saturating_sub(start);
        if visible_len == 0 {
            return;
        }

        let constraints: Vec<Constraint> = (0..visible_len)
            .map(|_| Constraint::Length(BOOK_CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (idx, chunk) in rows.iter().enumerate() {
            if chunk.height == 0 {
                continue;
            }

            let book_index = start + idx;
            if book_index >= len {
                break;
            }

            let book = &books[book_index];
            let mut block = Block::default().borders(Borders::ALL);
            if book_index == selected {
                block = block.style(Style::default().fg(Color::Yellow));
            }

            let title = if book_index == selected {
                format!("▶ {}", book.title)
            } else {
                book.title.clone()
            };

            let author_text = if book.author.trim().is_empty() {
                "Unknown author".to_string()
            } else {
                book.author.clone()
            };

            let read_style = if book.read {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let lines = vec![
                Line::from(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::raw(author_text)),
                Line::from(vec![
                    Span::raw(format!("{} • {}  ", book.year, book.genre)),
                    Span::styled(book.read_label().to_string(), read_style),
                ]),
            ];

            let card = Paragraph::new(lines).alignment(Alignment::Left).block(block);
            frame.render_widget(card, *chunk);
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::AddingBook(_)) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Next Field   "),
                Span::styled("[Space]", key_style),
                Span::raw(" Toggle Read   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::ConfirmRemove(_)) => Line::from(vec![
                Span::styled("[Y]", key_style),
                Span::raw(" Confirm   "),
                Span::styled("[N/Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::Searching(_)) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Title/Author   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Keep Filter   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear"),
            ]),
            (Screen::Stats(_), _) => Line::from(vec![
                Span::styled("[t/Esc]", key_style),
                Span::raw(" Shelf   "),
                Span::styled("[w]", key_style),
                Span::raw(" Save   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Shelf(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[f]", key_style),
                Span::raw(" Search   "),
                Span::styled("[+]", key_style),
                Span::raw(" Add   "),
                Span::styled("[-]", key_style),
                Span::raw(" Remove   "),
                Span::styled("[t]", key_style),
                Span::raw(" Statistics   "),
                Span::styled("[w]", key_style),
                Span::raw(" Save   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_book_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &BookForm) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            form.build_line("Title", BookField::Title),
            form.build_line("Author", BookField::Author),
            form.build_line("Year", BookField::Year),
            form.build_line("Genre", BookField::Genre),
            form.build_line("Read", BookField::Read),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (prefix, row) = match form.active {
            BookField::Title => ("Title: ", 0),
            BookField::Author => ("Author: ", 1),
            BookField::Year => ("Year: ", 2),
            BookField::Genre => ("Genre: ", 3),
            BookField::Read => ("Read: ", 4),
        };
        let cursor_x = inner.x + prefix.len() as u16 + form.value_len(form.active) as u16;
        let cursor_y = inner.y + row;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_remove(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmBookRemove) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Removal")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let headline = if confirm.author.trim().is_empty() {
            format!("Remove '{}'?", confirm.title)
        } else {
            format!("Remove '{}' by {}?", confirm.title, confirm.author)
        };

        let detail = if confirm.matches > 1 {
            format!(
                "{} books share this exact title and will all be removed.",
                confirm.matches
            )
        } else {
            "Removal matches the exact title only.".to_string()
        };

        let lines = vec![
            Line::from(headline),
            Line::from(detail),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    /// Draw a small search bar at the top of the provided `area` showing the
    /// current query and placing the cursor at the end of the typed text.
    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, state: &SearchState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let title = format!("Search by {}", state.field.label());
        let prefix = format!("{}: ", state.field.label());
        let block = Block::default().borders(Borders::ALL).title(title);
        let paragraph = Paragraph::new(Span::raw(format!("{prefix}{}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + prefix.chars().count() as u16 + state.query.chars().count() as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
