// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Location of the salary survey CSV.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/vqrca/dashboard_salarios_dados/refs/heads/main/dados-imersao-final.csv";

/// Every tunable of the dashboard in one place.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Number of equal-width bins in the salary histogram.
    pub histogram_bins: usize,
    /// How many job titles the top-jobs chart keeps.
    pub top_jobs: usize,
    /// Job title the per-country chart is restricted to.
    pub focus_job_title: String,
    pub chart_height: f32,
    pub table_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_size: [1400.0, 900.0],
            min_window_size: [800.0, 500.0],
            histogram_bins: 30,
            top_jobs: 10,
            focus_job_title: "Data Scientist".to_string(),
            chart_height: 320.0,
            table_height: 360.0,
        }
    }
}
