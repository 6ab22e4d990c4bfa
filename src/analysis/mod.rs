//! Aggregates derived from a filtered subset.

pub mod charts;
pub mod summary;

use crate::config::DashboardConfig;
use crate::data::filter::Subset;

use charts::{CountryChart, HistogramBin, JobMean, RemoteShare};
use summary::Summary;

/// Everything the central panel shows, recomputed after every filter change.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: Summary,
    pub top_jobs: Vec<JobMean>,
    pub histogram: Vec<HistogramBin>,
    pub remote_share: Vec<RemoteShare>,
    pub country: CountryChart,
}

impl Dashboard {
    /// `None` when the subset is empty: metrics and charts are suppressed.
    pub fn build(subset: &Subset<'_>, config: &DashboardConfig) -> Option<Self> {
        let summary = summary::summarize(subset)?;
        Some(Self {
            summary,
            top_jobs: charts::top_jobs(subset, config.top_jobs),
            histogram: charts::salary_histogram(subset, config.histogram_bins),
            remote_share: charts::remote_share(subset),
            country: charts::country_salary(subset, &config.focus_job_title),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use crate::data::model::SalaryTable;

    #[test]
    fn empty_subset_builds_nothing() {
        let table = SalaryTable::from_records(
            vec![record(2024, "senior", "integral", "media", "Data Scientist", 1.0)],
            Vec::new(),
        );
        assert_eq!(Dashboard::build(&Subset::new(&table, &[]), &DashboardConfig::default()), None);
    }

    #[test]
    fn missing_focus_title_only_skips_country_chart() {
        let table = SalaryTable::from_records(
            vec![
                record(2024, "senior", "integral", "media", "Data Engineer", 100.0),
                record(2023, "pleno", "integral", "media", "Data Analyst", 60.0),
            ],
            Vec::new(),
        );
        let idx = [0, 1];
        let dash =
            Dashboard::build(&Subset::new(&table, &idx), &DashboardConfig::default()).unwrap();

        assert_eq!(dash.country, CountryChart::NoMatches);
        assert_eq!(dash.summary.count, 2);
        assert_eq!(dash.top_jobs.len(), 2);
        assert_eq!(dash.histogram.len(), 30);
        assert_eq!(dash.remote_share.len(), 1);
    }
}
