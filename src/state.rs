use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analysis::Dashboard;
use crate::config::DashboardConfig;
use crate::data::filter::{filtered_indices, init_filter_state, FilterState, Subset};
use crate::data::model::{CategoryValue, FilterColumn, SalaryTable};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Shared, never-mutated source table.
    pub table: Arc<SalaryTable>,

    /// Per-column filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters.
    pub visible_indices: Vec<usize>,

    /// Metrics and chart data for the visible rows; `None` when nothing
    /// passes the filters.
    pub dashboard: Option<Dashboard>,
}

impl AppState {
    /// Start with every category selected.
    pub fn new(table: Arc<SalaryTable>, config: DashboardConfig) -> Self {
        let filters = init_filter_state(&table);
        let mut state = Self {
            config,
            table,
            filters,
            visible_indices: Vec::new(),
            dashboard: None,
        };
        state.refilter();
        state
    }

    /// Read-only view over the visible rows.
    pub fn subset(&self) -> Subset<'_> {
        Subset::new(&self.table, &self.visible_indices)
    }

    /// Re-run the pipeline: filter, then rebuild metrics and charts.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.table, &self.filters);
        let dashboard = Dashboard::build(&self.subset(), &self.config);
        self.dashboard = dashboard;

        log::debug!(
            "{} of {} records visible",
            self.visible_indices.len(),
            self.table.len()
        );
        if self.dashboard.is_none() {
            log::warn!("No records match the current filters");
        }
    }

    pub fn is_selected(&self, column: FilterColumn, value: &CategoryValue) -> bool {
        self.filters
            .get(&column)
            .map_or(true, |selected| selected.contains(value))
    }

    /// Toggle a single value in a column's filter.
    pub fn toggle_filter_value(&mut self, column: FilterColumn, value: &CategoryValue) {
        let selected = self.filters.entry(column).or_default();
        if selected.contains(value) {
            selected.remove(value);
        } else {
            selected.insert(value.clone());
        }
        self.refilter();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, column: FilterColumn) {
        if let Some(all_vals) = self.table.unique_values.get(&column) {
            self.filters.insert(column, all_vals.clone());
            self.refilter();
        }
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, column: FilterColumn) {
        self.filters.insert(column, BTreeSet::new());
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::charts::CountryChart;
    use crate::data::model::tests::record;

    fn state() -> AppState {
        let table = SalaryTable::from_records(
            vec![
                record(2024, "senior", "integral", "grande", "Data Scientist", 300.0),
                record(2023, "junior", "integral", "media", "Data Analyst", 100.0),
                record(2024, "pleno", "freelancer", "media", "Data Engineer", 200.0),
            ],
            Vec::new(),
        );
        AppState::new(Arc::new(table), DashboardConfig::default())
    }

    #[test]
    fn starts_with_everything_visible() {
        let s = state();
        assert_eq!(s.visible_indices, vec![0, 1, 2]);
        let dash = s.dashboard.as_ref().unwrap();
        assert_eq!(dash.summary.count, 3);
        assert_eq!(dash.summary.mean_salary, 200.0);
        assert_eq!(dash.summary.max_salary, 300.0);
    }

    #[test]
    fn toggling_a_value_reruns_the_pipeline() {
        let mut s = state();
        s.toggle_filter_value(FilterColumn::Year, &CategoryValue::Year(2023));
        assert_eq!(s.visible_indices, vec![0, 2]);
        assert!(!s.is_selected(FilterColumn::Year, &CategoryValue::Year(2023)));
        assert_eq!(s.dashboard.as_ref().unwrap().summary.count, 2);

        s.toggle_filter_value(FilterColumn::Year, &CategoryValue::Year(2023));
        assert_eq!(s.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn select_none_suppresses_dashboard_until_restored() {
        let mut s = state();
        s.select_none(FilterColumn::Contract);
        assert!(s.visible_indices.is_empty());
        assert!(s.dashboard.is_none());
        assert_eq!(s.subset().records().count(), 0);

        s.select_all(FilterColumn::Contract);
        assert_eq!(s.visible_indices.len(), s.table.len());
        assert!(s.dashboard.is_some());
    }

    #[test]
    fn filtering_out_focus_title_skips_only_country_chart() {
        let mut s = state();
        s.toggle_filter_value(FilterColumn::Seniority, &CategoryValue::Text("senior".into()));
        let dash = s.dashboard.as_ref().unwrap();
        assert_eq!(dash.country, CountryChart::NoMatches);
        assert_eq!(dash.top_jobs.len(), 2);
    }
}
