use crate::analytics::{
    monthly_series, scope_totals, sort_rows, summary_rows, MonthlyPoint, Scope, SortDir, SortKey,
    SummaryRow,
};
use crate::chart::Metric;
use crate::model::{Measures, School, SolarData};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

/// The two charts shown side by side, left to right.
pub const CHART_METRICS: [Metric; 2] = [Metric::Grid, Metric::Generated];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Table,
    Charts,
}

/// Dashboard state. The source tables are read-only after load; every
/// aggregate is re-derived from them plus this state on each draw, so
/// widening the scope back to all schools restores the unscoped numbers
/// exactly.
pub struct App {
    pub data: SolarData,
    pub focus: FocusPanel,
    pub scope: Scope,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    pub selected_row: usize,
    pub active_chart: usize,
    pub hovered_point: Option<usize>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(data: SolarData) -> Self {
        Self {
            data,
            focus: FocusPanel::Table,
            scope: Scope::AllSchools,
            sort_key: SortKey::Saving,
            sort_dir: SortDir::Asc,
            selected_row: 0,
            active_chart: 0,
            hovered_point: None,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::dashboard::draw_dashboard(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('c') => self.clear_selection(),
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.previous_point(),
            KeyCode::Right | KeyCode::Char('l') => self.next_point(),
            KeyCode::Enter => self.select_row(),
            KeyCode::Char('n') => self.toggle_sort(SortKey::Name),
            KeyCode::Char('g') => self.toggle_sort(SortKey::Generated),
            KeyCode::Char('u') => self.toggle_sort(SortKey::Used),
            KeyCode::Char('e') => self.toggle_sort(SortKey::Grid),
            KeyCode::Char('s') => self.toggle_sort(SortKey::Saving),
            _ => {}
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Table => FocusPanel::Charts,
            FocusPanel::Charts => FocusPanel::Table,
        };
    }

    fn navigate_up(&mut self) {
        match self.focus {
            FocusPanel::Table => self.selected_row = self.selected_row.saturating_sub(1),
            FocusPanel::Charts => {
                self.active_chart = self.active_chart.saturating_sub(1);
                self.hovered_point = None;
            }
        }
    }

    fn navigate_down(&mut self) {
        match self.focus {
            FocusPanel::Table => {
                let max = self.data.school_count().saturating_sub(1);
                if self.selected_row < max {
                    self.selected_row += 1;
                }
            }
            FocusPanel::Charts => {
                if self.active_chart < CHART_METRICS.len() - 1 {
                    self.active_chart += 1;
                    self.hovered_point = None;
                }
            }
        }
    }

    fn previous_point(&mut self) {
        if self.focus != FocusPanel::Charts {
            return;
        }
        self.hovered_point = match self.hovered_point {
            Some(i) => Some(i.saturating_sub(1)),
            None => Some(0),
        };
    }

    fn next_point(&mut self) {
        if self.focus != FocusPanel::Charts {
            return;
        }
        let max = self.series().len().saturating_sub(1);
        self.hovered_point = match self.hovered_point {
            Some(i) => Some((i + 1).min(max)),
            None => Some(0),
        };
    }

    /// Narrow the scope to the school under the cursor. Re-aggregation
    /// happens on the next draw; nothing is re-fetched.
    pub fn select_row(&mut self) {
        if self.focus != FocusPanel::Table {
            return;
        }
        if let Some(row) = self.sorted_rows().get(self.selected_row) {
            self.scope = Scope::School(row.school_id.clone());
        }
    }

    /// Widen the scope back to all schools.
    pub fn clear_selection(&mut self) {
        self.scope = Scope::AllSchools;
    }

    /// Toggling the active key flips direction; a new key resets to
    /// descending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_key = key;
            self.sort_dir = SortDir::Desc;
        }
        let max = self.data.school_count().saturating_sub(1);
        self.selected_row = self.selected_row.min(max);
    }

    /// Summary rows in the current sort order. Lifetime sums over the
    /// full log set, independent of scope.
    #[must_use]
    pub fn sorted_rows(&self) -> Vec<SummaryRow> {
        let mut rows = summary_rows(&self.data.schools, &self.data.logs);
        sort_rows(&mut rows, self.sort_key, self.sort_dir);
        rows
    }

    /// Monthly series for the current scope.
    #[must_use]
    pub fn series(&self) -> Vec<MonthlyPoint> {
        monthly_series(&self.data.logs, &self.scope)
    }

    /// KPI totals for the current scope.
    #[must_use]
    pub fn kpis(&self) -> Measures {
        scope_totals(&self.data.logs, &self.scope)
    }

    #[must_use]
    pub fn selected_school(&self) -> Option<&School> {
        self.scope.school_id().and_then(|id| self.data.school(id))
    }

    /// Sort indicator for a table header.
    #[must_use]
    pub fn sort_icon(&self, key: SortKey) -> &'static str {
        if key != self.sort_key {
            "\u{2195}"
        } else if self.sort_dir == SortDir::Asc {
            "\u{2191}"
        } else {
            "\u{2193}"
        }
    }
}
