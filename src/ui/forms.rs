use anyhow::{anyhow, Context, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Lowest publication year the add-book form accepts.
const YEAR_MIN: i64 = 1800;
/// Highest publication year the add-book form accepts.
const YEAR_MAX: i64 = 2100;

/// Internal representation of the add-book form fields. All values are kept
/// as raw text until `parse_inputs` runs, so the user can type freely and get
/// one coherent validation message on submit.
#[derive(Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) genre: String,
    pub(crate) read: bool,
    pub(crate) active: BookField,
    pub(crate) error: Option<String>,
}

/// Enumerates the fields within the book form to drive focus management.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum BookField {
    Title,
    Author,
    Year,
    Genre,
    Read,
}

impl Default for BookField {
    fn default() -> Self {
        BookField::Title
    }
}

impl BookForm {
    /// Move focus to the next field in form order.
    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Author,
            BookField::Author => BookField::Year,
            BookField::Year => BookField::Genre,
            BookField::Genre => BookField::Read,
            BookField::Read => BookField::Title,
        };
    }

    /// Move focus to the previous field in form order.
    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Read,
            BookField::Author => BookField::Title,
            BookField::Year => BookField::Author,
            BookField::Genre => BookField::Year,
            BookField::Read => BookField::Genre,
        };
    }

    /// Append a character to the active field, validating allowed input. The
    /// year field only accepts digits; the read field interprets space as a
    /// toggle and `y`/`n` as explicit values.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            BookField::Title | BookField::Author | BookField::Genre => {
                if ch.is_control() {
                    return false;
                }
                match self.active {
                    BookField::Title => self.title.push(ch),
                    BookField::Author => self.author.push(ch),
                    BookField::Genre => self.genre.push(ch),
                    _ => unreachable!(),
                }
                true
            }
            BookField::Year => {
                if ch.is_ascii_digit() {
                    self.year.push(ch);
                    true
                } else {
                    false
                }
            }
            BookField::Read => match ch {
                ' ' => {
                    self.read = !self.read;
                    true
                }
                'y' | 'Y' => {
                    self.read = true;
                    true
                }
                'n' | 'N' => {
                    self.read = false;
                    true
                }
                _ => false,
            },
        }
    }

    /// Remove the last character from the active field. The read toggle has
    /// nothing to delete.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            BookField::Title => {
                self.title.pop();
            }
            BookField::Author => {
                self.author.pop();
            }
            BookField::Year => {
                self.year.pop();
            }
            BookField::Genre => {
                self.genre.pop();
            }
            BookField::Read => {}
        }
    }

    /// Validate the inputs and return typed values ready for the store. Every
    /// text field must be present; the year must parse and fall within the
    /// range the input widget promises.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String, i64, String, bool)> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(anyhow!("Title is required."));
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(anyhow!("Author is required."));
        }
        let year_raw = self.year.trim();
        if year_raw.is_empty() {
            return Err(anyhow!("Publication year is required."));
        }
        let year = year_raw
            .parse::<i64>()
            .context("Publication year must be an integer.")?;
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(anyhow!(
                "Publication year must be between {YEAR_MIN} and {YEAR_MAX}."
            ));
        }
        let genre = self.genre.trim();
        if genre.is_empty() {
            return Err(anyhow!("Genre is required."));
        }

        Ok((
            title.to_string(),
            author.to_string(),
            year,
            genre.to_string(),
            self.read,
        ))
    }

    /// Render a styled line for the modal form.
    pub(crate) fn build_line(&self, field_name: &str, field: BookField) -> Line<'static> {
        let is_active = self.active == field;

        if field == BookField::Read {
            let marker = if self.read { "[x] Yes" } else { "[ ] No" };
            let style = if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            return Line::from(vec![
                Span::raw(format!("{field_name}: ")),
                Span::styled(marker.to_string(), style),
            ]);
        }

        let value = match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Year => &self.year,
            BookField::Genre => &self.genre,
            BookField::Read => unreachable!(),
        };

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Return the character count for the requested field, used for cursor
    /// positioning.
    pub(crate) fn value_len(&self, field: BookField) -> usize {
        match field {
            BookField::Title => self.title.chars().count(),
            BookField::Author => self.author.chars().count(),
            BookField::Year => self.year.chars().count(),
            BookField::Genre => self.genre.chars().count(),
            BookField::Read => 0,
        }
    }
}

/// State for confirming a removal. Removal sweeps every record sharing the
/// exact title, so the dialog carries the match count to warn about
/// duplicates.
pub(crate) struct ConfirmBookRemove {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) matches: usize,
}
