use anyhow::Result;
use calpick::engine::{CalendarEngine, HitRegion, HitTest, ViewMode};
use chrono::{Datelike, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io::Stdout;
use std::rc::Rc;
use std::time::Duration as StdDuration;

const INPUT_WIDTH: u16 = 24;
const TOGGLE_WIDTH: u16 = 5;
const POPUP_WIDTH: u16 = 32;
const POPUP_HEIGHT: u16 = 10;

fn columns(view: ViewMode) -> usize {
    match view {
        ViewMode::Days => 7,
        ViewMode::Months => 3,
        ViewMode::Years => 4,
    }
}

fn cell_width(view: ViewMode) -> u16 {
    match view {
        ViewMode::Days => 4,
        ViewMode::Months => 10,
        ViewMode::Years => 7,
    }
}

// ── Hit testing ───────────────────────────────────────────────────────────────

/// Screen regions recorded by the last render.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitMap {
    input: Rect,
    toggle: Rect,
    popup: Option<Rect>,
    prev: Rect,
    next: Rect,
    title: Rect,
    /// Indexed like the current view's grid.
    cells: Vec<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Toggle,
    Prev,
    Next,
    Title,
    Cell(usize),
    Surface,
    Nothing,
}

fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

impl HitMap {
    pub(crate) fn target_at(&self, col: u16, row: u16) -> Target {
        // The input field doubles as a toggle, like clicking a date input.
        if contains(self.toggle, col, row) || contains(self.input, col, row) {
            return Target::Toggle;
        }
        let Some(popup) = self.popup else {
            return Target::Nothing;
        };
        if let Some(i) = self.cells.iter().position(|r| contains(*r, col, row)) {
            return Target::Cell(i);
        }
        if contains(self.prev, col, row) {
            Target::Prev
        } else if contains(self.next, col, row) {
            Target::Next
        } else if contains(self.title, col, row) {
            Target::Title
        } else if contains(popup, col, row) {
            Target::Surface
        } else {
            Target::Nothing
        }
    }
}

impl HitTest<(u16, u16)> for HitMap {
    fn classify(&self, &(col, row): &(u16, u16)) -> HitRegion {
        match self.target_at(col, row) {
            Target::Toggle => HitRegion::Toggle,
            Target::Cell(_) => HitRegion::Cell,
            Target::Prev | Target::Next | Target::Title | Target::Surface => HitRegion::Surface,
            Target::Nothing => HitRegion::Outside,
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Terminal host around one `CalendarEngine`: a bound date field, a toggle
/// button and a popup calendar.
pub struct App {
    engine: CalendarEngine,
    /// The host's bound value, kept in sync through the change observer.
    model: Rc<RefCell<Option<NaiveDate>>>,
    /// Keyboard focus within the current grid.
    cursor: usize,
    hit_map: HitMap,
    /// Last feedback message (text, color). Cleared on next input.
    status: Option<(String, Color)>,
}

impl App {
    pub fn new(mut engine: CalendarEngine, initial: Option<NaiveDate>) -> Self {
        let model = Rc::new(RefCell::new(initial));
        engine.write_value(initial);

        let sink = Rc::clone(&model);
        engine.register_on_change(move |value| *sink.borrow_mut() = value);
        engine.register_on_open_changed(|open| debug!("picker open changed: {open}"));

        let mut app = App {
            engine,
            model,
            cursor: 0,
            hit_map: HitMap::default(),
            status: None,
        };
        app.reset_cursor();
        app
    }

    pub fn value(&self) -> Option<NaiveDate> {
        *self.model.borrow()
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.status = None;

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('q') => return true,
            KeyCode::Char('o') => {
                self.engine.toggle();
                self.reset_cursor();
                return false;
            }
            _ => {}
        }

        if !self.engine.is_open() {
            if code == KeyCode::Enter {
                self.engine.set_open(true);
                self.reset_cursor();
            }
            return false;
        }

        let cols = columns(self.engine.view()) as isize;
        match code {
            KeyCode::Esc => self.engine.close(),
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-cols),
            KeyCode::Down => self.move_cursor(cols),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            KeyCode::Char('n') | KeyCode::PageDown => {
                self.engine.next();
                self.reset_cursor();
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                self.engine.prev();
                self.reset_cursor();
            }
            KeyCode::Char('v') => {
                self.engine.toggle_view();
                self.reset_cursor();
            }
            KeyCode::Char('c') => {
                self.engine.confirm_pending();
                self.reset_cursor();
            }
            _ => {}
        }
        false
    }

    /// A left click at a screen position: element action first, then the
    /// document-level outside-click check against the same layout.
    pub fn handle_click(&mut self, col: u16, row: u16) {
        self.status = None;
        let snapshot = self.hit_map.clone();

        match snapshot.target_at(col, row) {
            Target::Toggle => self.engine.toggle(),
            Target::Prev => self.engine.prev(),
            Target::Next => self.engine.next(),
            Target::Title => self.engine.toggle_view(),
            Target::Cell(i) => self.activate(i),
            Target::Surface | Target::Nothing => {}
        }
        self.reset_cursor();

        self.engine.handle_document_click(&(col, row), &snapshot);
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.engine.cell_count();
        if len == 0 {
            return;
        }
        let next = (self.cursor as isize + delta).clamp(0, len as isize - 1);
        self.cursor = next as usize;
    }

    /// Selects the cell at `index` in the current view. Cells outside the
    /// bounds are refused here; the engine itself only marks them.
    fn activate(&mut self, index: usize) {
        let valid = match self.engine.view() {
            ViewMode::Days => self.engine.days().get(index).map(|c| c.is_valid),
            ViewMode::Months => self.engine.months().get(index).map(|c| c.is_valid),
            ViewMode::Years => self.engine.years().get(index).map(|c| c.is_valid),
        };
        match valid {
            None => return,
            Some(false) => {
                self.status = Some(("Outside the allowed range".to_string(), Color::Red));
                return;
            }
            Some(true) => {}
        }

        let result = match self.engine.view() {
            ViewMode::Days => self.engine.select_day(index),
            ViewMode::Months => self.engine.select_month(index),
            ViewMode::Years => self.engine.select_year(index),
        };
        if let Err(e) = result {
            self.status = Some((e.to_string(), Color::Red));
        } else if let Some(pending) = self.engine.pending() {
            self.status = Some((
                format!("{pending} staged (c to confirm, Esc to cancel)"),
                Color::Yellow,
            ));
        }
        self.reset_cursor();
    }

    /// Puts the cursor on the selected cell. Days fall back to today, then the
    /// first day of the month; months and years fall back to the anchor.
    fn reset_cursor(&mut self) {
        let e = &self.engine;
        self.cursor = match e.view() {
            ViewMode::Days => e
                .days()
                .iter()
                .position(|c| c.is_selected && c.in_current_month)
                .or_else(|| e.days().iter().position(|c| c.is_today && c.in_current_month))
                .or_else(|| e.days().iter().position(|c| c.in_current_month)),
            ViewMode::Months => e
                .months()
                .iter()
                .position(|c| c.is_selected)
                .or_else(|| e.months().iter().position(|c| c.month == e.anchor().month())),
            ViewMode::Years => e
                .years()
                .iter()
                .position(|c| c.is_selected)
                .or_else(|| e.years().iter().position(|c| c.year == e.anchor().year())),
        }
        .unwrap_or(0);
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let mut hits = HitMap::default();

        hits.input = Rect::new(area.x, area.y, INPUT_WIDTH, 3).intersection(area);
        let value_text = match self.value() {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "(no date)".to_string(),
        };
        let input = Paragraph::new(value_text)
            .block(Block::default().borders(Borders::ALL).title("Date"));
        f.render_widget(input, hits.input);

        hits.toggle = Rect::new(area.x + INPUT_WIDTH + 1, area.y, TOGGLE_WIDTH, 3).intersection(area);
        let arrow = if self.engine.is_open() { "▲" } else { "▼" };
        let toggle = Paragraph::new(arrow)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(toggle, hits.toggle);

        if self.engine.is_open() {
            self.render_popup(f, area, &mut hits);
        }

        if let Some((msg, color)) = &self.status {
            let y = area.y + area.height.saturating_sub(2);
            let rect = Rect::new(area.x, y, area.width, 1).intersection(area);
            f.render_widget(
                Paragraph::new(Span::styled(msg.clone(), Style::default().fg(*color))),
                rect,
            );
        }

        let help = "arrows move · Enter select · n/p next/prev · v view · c confirm · o open · Esc close · q quit";
        let y = area.y + area.height.saturating_sub(1);
        let rect = Rect::new(area.x, y, area.width, 1).intersection(area);
        f.render_widget(
            Paragraph::new(Span::styled(help, Style::default().add_modifier(Modifier::DIM))),
            rect,
        );

        self.hit_map = hits;
    }

    fn render_popup(&self, f: &mut Frame, area: Rect, hits: &mut HitMap) {
        let e = &self.engine;
        let popup = Rect::new(area.x, area.y + 3, POPUP_WIDTH, POPUP_HEIGHT).intersection(area);
        let mut block = Block::default().borders(Borders::ALL);
        if let Some(pending) = e.pending() {
            block = block.title(format!("pending {pending}"));
        }
        let inner = block.inner(popup);
        f.render_widget(block, popup);
        hits.popup = Some(popup);

        hits.prev = Rect::new(inner.x, inner.y, 3, 1).intersection(inner);
        hits.next = Rect::new(inner.x + inner.width.saturating_sub(3), inner.y, 3, 1).intersection(inner);
        hits.title = Rect::new(inner.x + 3, inner.y, inner.width.saturating_sub(6), 1).intersection(inner);
        f.render_widget(Paragraph::new(" < "), hits.prev);
        f.render_widget(Paragraph::new(" > "), hits.next);
        f.render_widget(
            Paragraph::new(Span::styled(
                e.title().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            hits.title,
        );

        let view = e.view();
        let mut grid_y = inner.y + 1;
        if view == ViewMode::Days {
            let names: Vec<Span> = e
                .day_names()
                .iter()
                .map(|n| Span::raw(format!("{:>3} ", n)))
                .collect();
            let rect = Rect::new(inner.x, grid_y, inner.width, 1).intersection(inner);
            f.render_widget(Paragraph::new(Line::from(names)), rect);
            grid_y += 1;
        }

        let cells: Vec<(String, Style)> = match view {
            ViewMode::Days => e
                .days()
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let style = cell_style(c.is_selected, c.is_today, c.is_valid, c.in_current_month, i == self.cursor);
                    (format!("{:>3}", c.day), style)
                })
                .collect(),
            ViewMode::Months => e
                .months()
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let style = cell_style(c.is_selected, c.is_today, c.is_valid, true, i == self.cursor);
                    (c.name.to_string(), style)
                })
                .collect(),
            ViewMode::Years => e
                .years()
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let style = cell_style(c.is_selected, c.is_today, c.is_valid, true, i == self.cursor);
                    (format!("{:>5}", c.year), style)
                })
                .collect(),
        };

        let cols = columns(view);
        let width = cell_width(view);
        for (i, (label, style)) in cells.into_iter().enumerate() {
            let x = inner.x + (i % cols) as u16 * width;
            let y = grid_y + (i / cols) as u16;
            let rect = Rect::new(x, y, width, 1).intersection(inner);
            f.render_widget(Paragraph::new(Span::styled(label, style)), rect);
            hits.cells.push(rect);
        }
    }
}

/// Style for a calendar cell. Selection wins over everything, then bounds.
pub(crate) fn cell_style(
    is_selected: bool,
    is_today: bool,
    is_valid: bool,
    in_current_month: bool,
    is_cursor: bool,
) -> Style {
    let mut s = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if !is_valid {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_today {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else if !in_current_month {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };
    if is_cursor {
        s = s.add_modifier(Modifier::UNDERLINED);
    }
    s
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            match event::read()? {
                CEvent::Key(key) => {
                    if app.handle_key(key.code, key.modifiers) {
                        break;
                    }
                }
                CEvent::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        app.handle_click(mouse.column, mouse.row);
                    }
                }
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calpick::calc::dates::MONTH_NAMES;
    use calpick::calc::Bounds;
    use calpick::engine::FixedClock;
    use calpick::PickerConfig;
    use ratatui::backend::TestBackend;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn make_app(config: PickerConfig, today: NaiveDate, initial: Option<NaiveDate>) -> App {
        let engine = CalendarEngine::with_clock(config, Box::new(FixedClock(today)));
        App::new(engine, initial)
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
    }

    /// Draws the app and returns the screen text, one line per row.
    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn key(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y)
    }

    // ── cell_style ────────────────────────────────────────────────────────────

    #[test]
    fn test_style_selected_wins() {
        let s = cell_style(true, true, false, false, false);
        assert_eq!(
            s,
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn test_style_invalid() {
        let s = cell_style(false, true, false, true, false);
        assert_eq!(
            s,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        );
    }

    #[test]
    fn test_style_today() {
        let s = cell_style(false, true, true, true, false);
        assert_eq!(s, Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD));
    }

    #[test]
    fn test_style_padding_day_dim() {
        let s = cell_style(false, false, true, false, false);
        assert_eq!(s, Style::default().add_modifier(Modifier::DIM));
    }

    #[test]
    fn test_style_cursor_underlines() {
        let s = cell_style(false, false, true, true, true);
        assert_eq!(s, Style::default().add_modifier(Modifier::UNDERLINED));
    }

    // ── Keyboard ──────────────────────────────────────────────────────────────

    #[test]
    fn test_q_and_ctrl_c_quit() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        assert!(key(&mut app, KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_o_toggles_open() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        assert!(!key(&mut app, KeyCode::Char('o')));
        assert!(app.engine.is_open());
        key(&mut app, KeyCode::Char('o'));
        assert!(!app.engine.is_open());
    }

    #[test]
    fn test_cursor_starts_on_today() {
        let app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        assert_eq!(app.engine.days()[app.cursor].date, d(2024, 3, 15));
    }

    #[test]
    fn test_enter_selects_cursor_day_and_updates_model() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        key(&mut app, KeyCode::Enter);
        assert!(app.engine.is_open());
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.value(), Some(d(2024, 3, 23)));
        assert!(!app.engine.is_open());
    }

    #[test]
    fn test_cursor_clamps_to_grid() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        key(&mut app, KeyCode::Char('o'));
        for _ in 0..10 {
            key(&mut app, KeyCode::Up);
        }
        assert_eq!(app.cursor, 0);
        for _ in 0..100 {
            key(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, app.engine.days().len() - 1);
    }

    #[test]
    fn test_view_and_navigation_keys() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        key(&mut app, KeyCode::Char('o'));
        key(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine.title(), "April 2024");
        key(&mut app, KeyCode::Char('v'));
        assert_eq!(app.engine.title(), "2024");
        assert_eq!(app.engine.months()[app.cursor].month, 4);
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.view(), ViewMode::Days);
        assert_eq!(app.engine.title(), "May 2024");
    }

    #[test]
    fn test_invalid_cell_is_refused_with_status() {
        let config = PickerConfig {
            bounds: Bounds::new(Some(d(2024, 3, 20)), None),
            ..PickerConfig::default()
        };
        let mut app = make_app(config, d(2024, 3, 15), None);
        key(&mut app, KeyCode::Char('o'));
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.value(), None);
        assert!(app.engine.is_open());
        assert_eq!(app.status.as_ref().unwrap().0, "Outside the allowed range");
    }

    #[test]
    fn test_staged_mode_confirm_with_c() {
        let config = PickerConfig {
            update_on_click: false,
            ..PickerConfig::default()
        };
        let mut app = make_app(config, d(2024, 3, 15), None);
        key(&mut app, KeyCode::Char('o'));
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.value(), None);
        assert!(app.status.as_ref().unwrap().0.contains("staged"));
        key(&mut app, KeyCode::Char('c'));
        assert_eq!(app.value(), Some(d(2024, 3, 15)));
        assert!(!app.engine.is_open());
    }

    #[test]
    fn test_staged_mode_esc_cancels() {
        let config = PickerConfig {
            update_on_click: false,
            ..PickerConfig::default()
        };
        let mut app = make_app(config, d(2024, 3, 15), Some(d(2024, 3, 1)));
        key(&mut app, KeyCode::Char('o'));
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.pending(), Some(d(2024, 3, 2)));
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.value(), Some(d(2024, 3, 1)));
        assert_eq!(app.engine.pending(), None);
    }

    // ── Mouse ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_hit_map_closed_has_no_popup() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        draw(&mut app);
        assert!(app.hit_map.popup.is_none());
        assert_eq!(app.hit_map.classify(&(50, 15)), HitRegion::Outside);
        assert_eq!(app.hit_map.classify(&center(app.hit_map.toggle)), HitRegion::Toggle);
    }

    #[test]
    fn test_click_toggle_opens_and_renders_cells() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        draw(&mut app);
        let (col, row) = center(app.hit_map.toggle);
        app.handle_click(col, row + 1);
        assert!(app.engine.is_open());
        draw(&mut app);
        assert_eq!(app.hit_map.cells.len(), app.engine.days().len());
        assert!(app.hit_map.popup.is_some());
    }

    #[test]
    fn test_click_day_cell_commits() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        app.engine.set_open(true);
        draw(&mut app);
        let i = app.engine.days().iter().position(|c| c.date == d(2024, 3, 20)).unwrap();
        let (col, row) = center(app.hit_map.cells[i]);
        app.handle_click(col, row);
        assert_eq!(app.value(), Some(d(2024, 3, 20)));
        assert!(!app.engine.is_open());
    }

    #[test]
    fn test_click_title_and_arrows() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        app.engine.set_open(true);
        draw(&mut app);
        let (col, row) = center(app.hit_map.next);
        app.handle_click(col, row);
        assert_eq!(app.engine.title(), "April 2024");
        let (col, row) = center(app.hit_map.title);
        app.handle_click(col, row);
        assert_eq!(app.engine.view(), ViewMode::Months);
        assert!(app.engine.is_open());
    }

    #[test]
    fn test_month_names_render_in_full() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        app.engine.set_open(true);
        app.engine.toggle_view();
        let text = screen(&mut app);
        for name in MONTH_NAMES {
            assert!(text.contains(name), "{name} missing from:\n{text}");
        }
        let popup = app.hit_map.popup.unwrap();
        assert!(app.hit_map.cells.iter().all(|c| c.width == cell_width(ViewMode::Months)));
        assert!(app.hit_map.cells.iter().all(|c| c.right() < popup.right()));
    }

    #[test]
    fn test_year_cells_render_in_full() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        app.engine.set_open(true);
        app.engine.toggle_view();
        app.engine.toggle_view();
        let text = screen(&mut app);
        assert!(text.contains("2021 - 2040"));
        for year in 2021..=2040 {
            assert!(text.contains(&year.to_string()), "{year} missing");
        }
        assert!(app.hit_map.cells.iter().all(|c| c.width == cell_width(ViewMode::Years)));
    }

    #[test]
    fn test_click_outside_closes() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        app.engine.set_open(true);
        draw(&mut app);
        app.handle_click(55, 15);
        assert!(!app.engine.is_open());
    }

    #[test]
    fn test_click_month_cell_after_rerender_does_not_close() {
        let mut app = make_app(PickerConfig::default(), d(2024, 3, 15), None);
        app.engine.set_open(true);
        app.engine.toggle_view();
        draw(&mut app);
        let (col, row) = center(app.hit_map.cells[6]);
        app.handle_click(col, row);
        assert_eq!(app.engine.view(), ViewMode::Days);
        assert_eq!(app.engine.title(), "July 2024");
        assert!(app.engine.is_open());
    }
}
