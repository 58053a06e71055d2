use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};
use roster::{DerivedView, Severity};
use std::time::Instant;

const ACTIVE: Color = Color::Yellow;

pub fn draw(f: &mut Frame, app: &mut App) {
    let searchable = app.manager.schema().supports_search();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                   // Form row
            Constraint::Length(if searchable { 3 } else { 0 }),      // Search
            Constraint::Min(5),                                      // Table grows
            Constraint::Length(1),                                   // Pagination
            Constraint::Length(1),                                   // Notification / help
        ])
        .split(f.area());

    draw_form(f, app, chunks[0]);
    if searchable {
        highlight(&mut app.search, app.focus == Focus::Search);
        f.render_widget(&app.search, chunks[1]);
    }

    let view = app.manager.view();
    draw_table(f, app, &view, chunks[2]);
    draw_pagination(f, app, &view, chunks[3]);
    draw_status(f, app, chunks[4]);

    if app.manager.edit_dialog().is_some() {
        draw_edit_dialog(f, app);
    }
    if let Some(dialog) = app.manager.delete_dialog() {
        let name = app
            .manager
            .collection()
            .get(dialog.id)
            .map(|record| record.name().to_string())
            .unwrap_or_default();
        draw_delete_dialog(f, &name);
    }
}

fn highlight(textarea: &mut tui_textarea::TextArea<'_>, active: bool) {
    let style = if active {
        Style::default().fg(ACTIVE)
    } else {
        Style::default()
    };
    if let Some(block) = textarea.block().cloned() {
        textarea.set_block(block.border_style(style));
    }
    textarea.set_cursor_style(if active {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
}

fn draw_form(f: &mut Frame, app: &mut App, area: Rect) {
    let mut constraints: Vec<Constraint> = app
        .form
        .iter()
        .map(|_| Constraint::Fill(1))
        .collect();
    constraints.push(Constraint::Length(14));

    let cells = Layout::horizontal(constraints).split(area);
    for (index, (_, textarea)) in app.form.iter_mut().enumerate() {
        highlight(textarea, app.focus == Focus::Form(index));
        f.render_widget(&*textarea, cells[index]);
    }

    let button = Paragraph::new("Enter: Add")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Green));
    f.render_widget(button, cells[app.form.len()]);
}

fn draw_table(f: &mut Frame, app: &mut App, view: &DerivedView, area: Rect) {
    let fields = app.manager.schema().fields();
    let state = app.manager.view_state();

    let header = Row::new(fields.iter().enumerate().map(|(index, field)| {
        let arrow = state.sort_indicator(*field).unwrap_or("");
        Cell::from(format!("{} {}{}", index + 1, field, arrow))
    }))
    .style(Style::default().add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let border = if app.focus == Focus::Table {
        Style::default().fg(ACTIVE)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Students ");

    if app.manager.collection().is_empty() {
        let empty = Paragraph::new("No students added")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows = view.records().iter().map(|record| {
        Row::new(
            fields
                .iter()
                .map(|field| Cell::from(DerivedView::cell(record, *field))),
        )
    });
    let widths = fields.iter().map(|field| {
        if field.is_numeric() {
            Constraint::Length(8)
        } else {
            Constraint::Fill(1)
        }
    });

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn draw_pagination(f: &mut Frame, app: &App, view: &DerivedView, area: Rect) {
    let nav = |enabled: bool, label: &'static str| {
        let color = if enabled { Color::White } else { Color::DarkGray };
        Span::styled(label, Style::default().fg(color))
    };

    let line = Line::from(vec![
        Span::raw(format!(
            "Rows per page: {}   ",
            app.manager.view_state().page_size
        )),
        Span::raw(format!("{}   ", view.range_label())),
        nav(view.has_previous(), "◀ "),
        nav(view.has_next(), " ▶"),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match app.manager.notification(Instant::now()) {
        Some(notification) => {
            let color = match notification.severity {
                Severity::Success => Color::Green,
                Severity::Info => Color::Cyan,
                Severity::Warning => Color::Yellow,
                Severity::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", notification.message),
                    Style::default().fg(Color::Black).bg(color),
                ),
                Span::styled("  Ctrl+X to close", Style::default().fg(Color::DarkGray)),
            ])
        }
        None => Line::from(Span::styled(
            "Tab: focus  ↑↓: select  ←→: page  1-5: sort  e: edit  d: delete  p: page size  Ctrl+S: save  Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_edit_dialog(f: &mut Frame, app: &mut App) {
    let height = app.edit_form.len() as u16 * 3 + 3;
    let area = popup_area(f.area(), 50, height);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Edit Student ")
        .title_bottom(" Enter: save  Esc: cancel ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical(app.edit_form.iter().map(|_| Constraint::Length(3))).split(inner);
    for (index, (_, textarea)) in app.edit_form.iter_mut().enumerate() {
        highlight(textarea, index == app.edit_focus);
        f.render_widget(&*textarea, rows[index]);
    }
}

fn draw_delete_dialog(f: &mut Frame, name: &str) {
    let area = popup_area(f.area(), 50, 5);
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(format!("Delete student '{}'?", name)),
        Line::from(Span::styled(
            "y: delete   n: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popup = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Confirm "),
    );
    f.render_widget(popup, area);
}

/// Centered rectangle of at most `width` x `height`
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
