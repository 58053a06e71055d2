use super::ui;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::{Block, Borders, TableState},
};
use roster::{Field, RecordDraft, RecordManager};
use std::{io, time::Duration};
use tracing::error;
use tui_textarea::TextArea;

/// Which widget receives typed keys when no popup is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form(usize),
    Search,
    Table,
}

pub struct App<'a> {
    pub manager: RecordManager,
    pub form: Vec<(Field, TextArea<'a>)>,
    pub search: TextArea<'a>,
    pub edit_form: Vec<(Field, TextArea<'a>)>,
    pub edit_focus: usize,
    pub focus: Focus,
    pub table_state: TableState,
    pub exit: bool,
}

impl<'a> App<'a> {
    pub fn new(manager: RecordManager) -> Self {
        let form = Self::new_inputs(&manager, &RecordDraft::default());
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            form,
            search: Self::new_textarea(" Search ", "", "name, father name or mobile"),
            edit_form: Vec::new(),
            edit_focus: 0,
            focus: Focus::Form(0),
            table_state,
            exit: false,
            manager,
        }
    }

    fn new_textarea(title: &str, text: &str, placeholder: &str) -> TextArea<'static> {
        let mut textarea = TextArea::new(vec![text.to_string()]);
        textarea.set_placeholder_text(placeholder.to_string());
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title.trim())),
        );
        textarea.move_cursor(tui_textarea::CursorMove::End);
        textarea
    }

    /// One single-line input per field the schema asks for, prefilled from `draft`
    fn new_inputs(manager: &RecordManager, draft: &RecordDraft) -> Vec<(Field, TextArea<'static>)> {
        manager
            .schema()
            .required_fields()
            .iter()
            .map(|&field| {
                let textarea =
                    Self::new_textarea(&field.to_string(), draft.get(field), &field.to_string());
                (field, textarea)
            })
            .collect()
    }

    fn draft_from(inputs: &[(Field, TextArea<'_>)]) -> RecordDraft {
        let mut draft = RecordDraft::default();
        for (field, textarea) in inputs {
            draft.set(*field, textarea.lines().join(""));
        }
        draft
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            // Poll so an expired notification disappears without a keypress
            if !event::poll(Duration::from_millis(250))? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
            if self.exit {
                return Ok(());
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Err(err) = self.manager.on_save_clicked() {
                error!(error = %err, "save failed");
            }
            return;
        }

        if self.manager.delete_dialog().is_some() {
            self.handle_delete_dialog_key(key);
        } else if self.manager.edit_dialog().is_some() {
            self.handle_edit_dialog_key(key);
        } else {
            self.handle_main_key(key);
        }
    }

    // ========================================================================
    // Popups
    // ========================================================================

    fn handle_delete_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.manager.delete_dialog().copied() else {
            return;
        };

        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Err(err) = self.manager.on_delete_confirmed(dialog.id) {
                    error!(error = %err, "delete failed");
                }
                self.clamp_selection();
            }
            KeyCode::Char('n') | KeyCode::Esc => self.manager.on_delete_cancelled(),
            _ => {}
        }
    }

    fn handle_edit_dialog_key(&mut self, key: KeyEvent) {
        let Some(id) = self.manager.edit_dialog().map(|dialog| dialog.id) else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.manager.on_edit_cancelled();
                self.edit_form.clear();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.edit_focus = (self.edit_focus + 1) % self.edit_form.len().max(1);
            }
            KeyCode::BackTab | KeyCode::Up => {
                let len = self.edit_form.len().max(1);
                self.edit_focus = (self.edit_focus + len - 1) % len;
            }
            KeyCode::Enter => {
                let draft = Self::draft_from(&self.edit_form);
                if let Err(err) = self.manager.on_edit_saved(id, draft) {
                    error!(error = %err, "edit failed");
                }
                if self.manager.edit_dialog().is_none() {
                    self.edit_form.clear();
                }
            }
            _ => {
                if let Some((_, textarea)) = self.edit_form.get_mut(self.edit_focus) {
                    textarea.input(key);
                }
            }
        }
    }

    // ========================================================================
    // Main screen
    // ========================================================================

    fn handle_main_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.exit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.next_focus();
                return;
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.manager.on_notification_closed();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Form(index) => self.handle_form_key(index, key),
            Focus::Search => {
                if key.code != KeyCode::Enter {
                    self.search.input(key);
                    let text = self.search.lines().join("");
                    self.manager.on_search_changed(text);
                    self.table_state.select(Some(0));
                }
            }
            Focus::Table => self.handle_table_key(key),
        }
    }

    fn next_focus(&self) -> Focus {
        let searchable = self.manager.schema().supports_search();
        match self.focus {
            Focus::Form(index) if index + 1 < self.form.len() => Focus::Form(index + 1),
            Focus::Form(_) if searchable => Focus::Search,
            Focus::Form(_) | Focus::Search => Focus::Table,
            Focus::Table => Focus::Form(0),
        }
    }

    fn handle_form_key(&mut self, index: usize, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            let draft = Self::draft_from(&self.form);
            match self.manager.on_add_clicked(draft) {
                Ok(outcome) if outcome.is_applied() => {
                    self.form = Self::new_inputs(&self.manager, self.manager.form());
                    self.focus = Focus::Form(0);
                }
                Ok(_) => {}
                Err(err) => error!(error = %err, "add failed"),
            }
            return;
        }

        if let Some((_, textarea)) = self.form.get_mut(index) {
            textarea.input(key);
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let view = self.manager.view();
        let selected = self
            .table_state
            .selected()
            .and_then(|row| view.records().get(row))
            .map(|record| record.id());

        match key.code {
            KeyCode::Down => {
                let row = self.table_state.selected().map_or(0, |row| row + 1);
                self.table_state
                    .select(Some(row.min(view.row_count().saturating_sub(1))));
            }
            KeyCode::Up => {
                let row = self.table_state.selected().unwrap_or(0);
                self.table_state.select(Some(row.saturating_sub(1)));
            }
            KeyCode::Right if view.has_next() => {
                self.manager.on_page_changed(view.page + 1);
                self.table_state.select(Some(0));
            }
            KeyCode::Left if view.has_previous() => {
                self.manager.on_page_changed(view.page - 1);
                self.table_state.select(Some(0));
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = selected {
                    if self.manager.on_edit_requested(id) {
                        self.open_edit_form();
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = selected {
                    self.manager.on_delete_requested(id);
                }
            }
            KeyCode::Char('p') => self.cycle_page_size(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let columns = self.manager.schema().fields();
                let column = c.to_digit(10).and_then(|n| (n as usize).checked_sub(1));
                if let Some(&field) = column.and_then(|index| columns.get(index)) {
                    self.manager.on_sort_header_clicked(field);
                }
            }
            _ => {}
        }
    }

    fn open_edit_form(&mut self) {
        if let Some(dialog) = self.manager.edit_dialog() {
            let draft = dialog.draft.clone();
            self.edit_form = Self::new_inputs(&self.manager, &draft);
            self.edit_focus = 0;
        }
    }

    fn cycle_page_size(&mut self) {
        let options = &self.manager.config().page_size_options;
        let current = self.manager.view_state().page_size;
        let next = options
            .iter()
            .position(|&size| size == current)
            .map_or(0, |index| (index + 1) % options.len());
        let size = options.get(next).copied();

        if let Some(size) = size {
            if let Err(err) = self.manager.on_page_size_changed(size) {
                error!(error = %err, "page size change failed");
            }
            self.table_state.select(Some(0));
        }
    }

    fn clamp_selection(&mut self) {
        let rows = self.manager.view().row_count();
        let row = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(row.min(rows.saturating_sub(1))));
    }
}
