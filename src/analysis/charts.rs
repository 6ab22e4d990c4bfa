use std::collections::BTreeMap;

use crate::data::filter::Subset;

// ---------------------------------------------------------------------------
// Chart data builders
//
// Each builder is a pure function of a subset. Rendering lives in `ui::charts`.
// ---------------------------------------------------------------------------

/// Sum and count per key, keys in sorted order.
fn group_totals<K: Ord>(rows: impl Iterator<Item = (K, f64)>) -> BTreeMap<K, (f64, usize)> {
    let mut groups: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for (key, value) in rows {
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }
    groups
}

// ---- Top jobs ----

#[derive(Debug, Clone, PartialEq)]
pub struct JobMean {
    pub title: String,
    pub mean_salary: f64,
}

/// The `limit` job titles with the highest mean salary, ascending by mean so
/// the best-paid title ends up on top of a horizontal bar chart.
pub fn top_jobs(subset: &Subset<'_>, limit: usize) -> Vec<JobMean> {
    let groups = group_totals(
        subset
            .records()
            .map(|r| (r.job_title.as_str(), r.salary_usd)),
    );

    let mut jobs: Vec<JobMean> = groups
        .into_iter()
        .map(|(title, (sum, n))| JobMean {
            title: title.to_string(),
            mean_salary: sum / n as f64,
        })
        .collect();

    jobs.sort_by(|a, b| {
        b.mean_salary
            .total_cmp(&a.mean_salary)
            .then_with(|| a.title.cmp(&b.title))
    });
    jobs.truncate(limit);
    jobs.reverse();
    jobs
}

// ---- Salary distribution ----

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Equal-width bins spanning `[min, max]` of the observed salaries.
/// The maximum lands in the last bin. A zero range puts everything in the
/// first bin and uses unit width.
pub fn salary_histogram(subset: &Subset<'_>, bins: usize) -> Vec<HistogramBin> {
    if subset.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (min, max) = subset.records().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), r| (lo.min(r.salary_usd), hi.max(r.salary_usd)),
    );
    let range = max - min;
    let width = if range > 0.0 { range / bins as f64 } else { 1.0 };

    let mut counts = vec![0usize; bins];
    for rec in subset.records() {
        let slot = ((rec.salary_usd - min) / width).floor() as usize;
        counts[slot.min(bins - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

// ---- Remote-work share ----

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteShare {
    pub kind: String,
    pub count: usize,
    /// Share of the subset in `[0, 1]`.
    pub fraction: f64,
}

/// Row count per remote-work type, largest first.
pub fn remote_share(subset: &Subset<'_>) -> Vec<RemoteShare> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in subset.records() {
        *counts.entry(rec.remote.as_str()).or_default() += 1;
    }

    let total = subset.len() as f64;
    let mut shares: Vec<RemoteShare> = counts
        .into_iter()
        .map(|(kind, count)| RemoteShare {
            kind: kind.to_string(),
            count,
            fraction: count as f64 / total,
        })
        .collect();
    // Stable sort keeps alphabetical order among equal counts.
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

// ---- Mean salary per country for one job title ----

#[derive(Debug, Clone, PartialEq)]
pub struct CountryMean {
    pub iso3: String,
    pub mean_salary: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CountryChart {
    /// No row carries the requested job title; the chart is skipped.
    NoMatches,
    /// Countries ordered by mean salary, highest first.
    Ready(Vec<CountryMean>),
}

pub fn country_salary(subset: &Subset<'_>, job_title: &str) -> CountryChart {
    let groups = group_totals(
        subset
            .records()
            .filter(|r| r.job_title == job_title)
            .map(|r| (r.residence_iso3.as_str(), r.salary_usd)),
    );

    if groups.is_empty() {
        log::info!("No '{job_title}' rows under the current filters; skipping country chart");
        return CountryChart::NoMatches;
    }

    let mut countries: Vec<CountryMean> = groups
        .into_iter()
        .map(|(iso3, (sum, n))| CountryMean {
            iso3: iso3.to_string(),
            mean_salary: sum / n as f64,
            count: n,
        })
        .collect();
    countries.sort_by(|a, b| {
        b.mean_salary
            .total_cmp(&a.mean_salary)
            .then_with(|| a.iso3.cmp(&b.iso3))
    });
    CountryChart::Ready(countries)
}
