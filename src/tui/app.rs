use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io;
use crate::model::{AppConfig, TaskRecord};
use crate::ops::group::{GroupContent, GroupLevel, GroupNode};
use crate::ops::view::{self, ActiveView, ViewResult};
use crate::panel::{FilterPanel, SortPanel};
use crate::store::TaskStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Which cell of a filter row has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterColumn {
    #[default]
    Field,
    Operator,
    Value,
}

impl FilterColumn {
    pub fn next(self) -> FilterColumn {
        match self {
            FilterColumn::Field => FilterColumn::Operator,
            FilterColumn::Operator => FilterColumn::Value,
            FilterColumn::Value => FilterColumn::Field,
        }
    }

    pub fn prev(self) -> FilterColumn {
        match self {
            FilterColumn::Field => FilterColumn::Value,
            FilterColumn::Operator => FilterColumn::Field,
            FilterColumn::Value => FilterColumn::Operator,
        }
    }
}

/// A line of the table body
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow<'a> {
    Group {
        level: GroupLevel,
        key: String,
        depth: usize,
        task_count: usize,
        open_tasks: u64,
    },
    Task {
        record: &'a TaskRecord,
        depth: usize,
    },
}

/// Flatten a pipeline result into table lines, group headers first
pub fn display_rows<'a>(result: &ViewResult<'a>) -> Vec<DisplayRow<'a>> {
    let mut rows = Vec::new();
    match result {
        ViewResult::Flat(tasks) => {
            rows.extend(tasks.iter().map(|&record| DisplayRow::Task { record, depth: 0 }));
        }
        ViewResult::Grouped(groups) => {
            for g in groups {
                push_group_rows(g, 0, &mut rows);
            }
        }
    }
    rows
}

fn push_group_rows<'a>(node: &GroupNode<'a>, depth: usize, rows: &mut Vec<DisplayRow<'a>>) {
    rows.push(DisplayRow::Group {
        level: node.level,
        key: node.key.clone(),
        depth,
        task_count: node.task_count(),
        open_tasks: node.open_tasks(),
    });
    match &node.content {
        GroupContent::Groups(groups) => {
            for g in groups {
                push_group_rows(g, depth + 1, rows);
            }
        }
        GroupContent::Tasks(tasks) => {
            rows.extend(tasks.iter().map(|&record| DisplayRow::Task {
                record,
                depth: depth + 1,
            }));
        }
    }
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub config: AppConfig,
    pub theme: Theme,
    /// Committed filter, sort and view mode
    pub active: ActiveView,
    pub filter_panel: FilterPanel,
    pub sort_panel: SortPanel,
    /// Focused row and cell in the filter panel
    pub filter_row: usize,
    pub filter_column: FilterColumn,
    /// Position in the value suggestions of the focused filter row
    pub suggestion_idx: usize,
    /// Focused rule in the sort panel
    pub sort_row: usize,
    /// Cursor into the table's display rows
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: TaskStore, config: AppConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        let active = ActiveView {
            mode: config.view.mode,
            ..ActiveView::default()
        };
        App {
            store,
            config,
            theme,
            active,
            filter_panel: FilterPanel::default(),
            sort_panel: SortPanel::default(),
            filter_row: 0,
            filter_column: FilterColumn::Field,
            suggestion_idx: 0,
            sort_row: 0,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            should_quit: false,
        }
    }

    /// Recompute the full pipeline from the active specs
    pub fn result(&self) -> ViewResult<'_> {
        view::compute(self.store.records(), &self.active)
    }

    pub fn rows(&self) -> Vec<DisplayRow<'_>> {
        display_rows(&self.result())
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Keep the cursor inside the table after the rows changed
    pub fn clamp_cursor(&mut self) {
        let count = self.row_count();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
        self.scroll_offset = self.scroll_offset.min(self.cursor);
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn cycle_view(&mut self) {
        self.active.mode = self.active.mode.next();
        self.reset_cursor();
    }

    pub fn open_filter_panel(&mut self) {
        self.filter_panel.open(&self.active.filter);
        self.filter_row = 0;
        self.filter_column = FilterColumn::Field;
        self.suggestion_idx = 0;
    }

    /// Commit the filter draft; the panel stays open
    pub fn apply_filter_panel(&mut self) {
        if let Some(spec) = self.filter_panel.apply() {
            self.active.filter = spec;
            self.reset_cursor();
        }
    }

    pub fn open_sort_panel(&mut self) {
        self.sort_panel.open(&self.active.sort);
        self.sort_row = 0;
    }

    /// Commit the sort draft and close the panel
    pub fn apply_sort_panel(&mut self) {
        if let Some(spec) = self.sort_panel.apply() {
            self.active.sort = spec;
            self.reset_cursor();
        }
    }
}

/// Launch the table view
pub fn run(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config_cwd(config_path.map(Path::new))?;
    let mut app = App::new(TaskStore::sample(), config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
