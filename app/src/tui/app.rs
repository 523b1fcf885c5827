//! Presentation state and key handling.
//!
//! `TuiApp` holds only transient UI state: the creation form buffers, the
//! list selection, and the input mode. Task data lives in the store; the
//! event loop pushes a fresh snapshot here after every dispatched action.
//! Key handling never mutates tasks directly, it returns the `TaskAction`
//! to send.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Filter, Priority, TaskAction, TaskId, TaskState};
use crate::view;

/// Input mode of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate the list and mutate tasks.
    Normal,
    /// Keys edit the creation form.
    Editing,
}

/// Field focus within the creation form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    /// Title input.
    #[default]
    Title,
    /// Description input.
    Description,
    /// Priority selector.
    Priority,
}

impl FormField {
    /// Returns the next field in Tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Priority,
            Self::Priority => Self::Title,
        }
    }
}

/// Transient buffers of the creation form.
///
/// Cursors are byte indices into their buffers, always on a char boundary.
#[derive(Debug, Default)]
pub struct TaskForm {
    /// Title buffer.
    pub title: String,
    /// Cursor into the title buffer.
    pub title_cursor: usize,
    /// Description buffer.
    pub description: String,
    /// Cursor into the description buffer.
    pub description_cursor: usize,
    /// Selected priority; defaults to Medium.
    pub priority: Priority,
    /// Focused field.
    pub field: FormField,
}

impl TaskForm {
    fn clear(&mut self) {
        *self = Self::default();
    }

    fn focused_text(&mut self) -> Option<(&mut String, &mut usize)> {
        match self.field {
            FormField::Title => Some((&mut self.title, &mut self.title_cursor)),
            FormField::Description => {
                Some((&mut self.description, &mut self.description_cursor))
            }
            FormField::Priority => None,
        }
    }

    fn insert_char(&mut self, ch: char) {
        if let Some((buffer, cursor)) = self.focused_text() {
            buffer.insert(*cursor, ch);
            *cursor += ch.len_utf8();
        }
    }

    fn backspace(&mut self) {
        if let Some((buffer, cursor)) = self.focused_text() {
            if *cursor == 0 {
                return;
            }
            let prev = prev_char_boundary(buffer, *cursor);
            if prev < *cursor {
                buffer.replace_range(prev..*cursor, "");
                *cursor = prev;
            }
        }
    }

    fn move_left(&mut self) {
        if let Some((buffer, cursor)) = self.focused_text() {
            if *cursor > 0 {
                *cursor = prev_char_boundary(buffer, *cursor);
            }
        }
    }

    fn move_right(&mut self) {
        if let Some((buffer, cursor)) = self.focused_text() {
            if *cursor < buffer.len() {
                *cursor = next_char_boundary(buffer, *cursor);
            }
        }
    }

    fn move_home(&mut self) {
        if let Some((_, cursor)) = self.focused_text() {
            *cursor = 0;
        }
    }

    fn move_end(&mut self) {
        if let Some((buffer, cursor)) = self.focused_text() {
            *cursor = buffer.len();
        }
    }
}

/// Presentation state for the task screen.
pub struct TuiApp {
    /// Latest task state snapshot from the store.
    pub snapshot: TaskState,
    /// Index of the selected row within the visible list.
    pub selected: usize,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Creation form buffers.
    pub form: TaskForm,
    /// Set once the user asked to quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Creates the presentation state around an initial snapshot.
    #[must_use]
    pub fn new(snapshot: TaskState) -> Self {
        Self {
            snapshot,
            selected: 0,
            input_mode: InputMode::Normal,
            form: TaskForm::default(),
            should_quit: false,
        }
    }

    /// Replaces the snapshot and keeps the selection within bounds.
    pub fn set_snapshot(&mut self, snapshot: TaskState) {
        self.snapshot = snapshot;
        self.clamp_selection();
    }

    /// Returns the number of rows in the visible list.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        view::visible(&self.snapshot.tasks, self.snapshot.filter).len()
    }

    /// Returns the ID of the selected visible task, if any.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        view::visible(&self.snapshot.tasks, self.snapshot.filter)
            .get(self.selected)
            .map(|task| task.id.clone())
    }

    /// Processes one key press.
    ///
    /// Mutates presentation state in place and returns the action to
    /// dispatch to the store, if the key maps to one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<TaskAction> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<TaskAction> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('a' | 'i') => {
                self.input_mode = InputMode::Editing;
                self.form.field = FormField::Title;
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_prev();
                None
            }
            KeyCode::Char(' ') => self.selected_task_id().map(|id| TaskAction::Toggle { id }),
            KeyCode::Char('d') => self.selected_task_id().map(|id| TaskAction::Delete { id }),
            KeyCode::Char('1') => Some(TaskAction::SetFilter {
                filter: Filter::All,
            }),
            KeyCode::Char('2') => Some(TaskAction::SetFilter {
                filter: Filter::Active,
            }),
            KeyCode::Char('3') => Some(TaskAction::SetFilter {
                filter: Filter::Completed,
            }),
            KeyCode::Tab => Some(TaskAction::SetFilter {
                filter: self.snapshot.filter.next(),
            }),
            _ => None,
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<TaskAction> {
        match key.code {
            KeyCode::Esc => {
                self.form.clear();
                self.input_mode = InputMode::Normal;
                None
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab => {
                self.form.field = self.form.field.next();
                None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                None
            }
            KeyCode::Left => {
                if self.form.field == FormField::Priority {
                    self.form.priority = self.form.priority.prev();
                } else {
                    self.form.move_left();
                }
                None
            }
            KeyCode::Right => {
                if self.form.field == FormField::Priority {
                    self.form.priority = self.form.priority.next();
                } else {
                    self.form.move_right();
                }
                None
            }
            KeyCode::Home => {
                self.form.move_home();
                None
            }
            KeyCode::End => {
                self.form.move_end();
                None
            }
            KeyCode::Char(' ') if self.form.field == FormField::Priority => {
                self.form.priority = self.form.priority.next();
                None
            }
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                None
            }
            _ => None,
        }
    }

    /// Validates the form and builds the `Add` action.
    ///
    /// A trimmed-empty title is silently ignored and the form stays open.
    /// On success the form resets (priority back to Medium) and collapses.
    fn submit_form(&mut self) -> Option<TaskAction> {
        let title = self.form.title.trim();
        if title.is_empty() {
            return None;
        }

        let action = TaskAction::Add {
            title: title.to_string(),
            description: self.form.description.trim().to_string(),
            priority: self.form.priority,
        };
        self.form.clear();
        self.input_mode = InputMode::Normal;
        Some(action)
    }

    fn select_next(&mut self) {
        let len = self.visible_len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

fn prev_char_boundary(s: &str, idx: usize) -> usize {
    if idx == 0 {
        return 0;
    }
    let mut prev = 0;
    for (i, _) in s.char_indices() {
        if i >= idx {
            break;
        }
        prev = i;
    }
    prev
}

fn next_char_boundary(s: &str, idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    let mut iter = s[idx..].char_indices();
    let Some((_, ch)) = iter.next() else {
        return s.len();
    };
    idx + ch.len_utf8()
}
