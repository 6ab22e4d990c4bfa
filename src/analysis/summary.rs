use std::collections::BTreeMap;

use crate::data::filter::Subset;

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mean_salary: f64,
    pub max_salary: f64,
    pub count: usize,
    /// Most frequent job title; ties go to the alphabetically first title.
    pub top_job_title: String,
}

/// Compute the headline metrics, or `None` when the subset is empty.
pub fn summarize(subset: &Subset<'_>) -> Option<Summary> {
    if subset.is_empty() {
        return None;
    }

    let mut total = 0.0;
    let mut max_salary = f64::NEG_INFINITY;
    let mut title_counts: BTreeMap<&str, usize> = BTreeMap::new();

    for rec in subset.records() {
        total += rec.salary_usd;
        max_salary = max_salary.max(rec.salary_usd);
        *title_counts.entry(rec.job_title.as_str()).or_default() += 1;
    }

    // Strictly-greater keeps the first (smallest) title among equal counts.
    let mut top: Option<(&str, usize)> = None;
    for (title, n) in title_counts {
        if top.map_or(true, |(_, best)| n > best) {
            top = Some((title, n));
        }
    }
    let (top_job_title, _) = top?;

    let count = subset.len();
    Some(Summary {
        mean_salary: total / count as f64,
        max_salary,
        count,
        top_job_title: top_job_title.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use crate::data::model::SalaryTable;

    fn table(rows: &[(&str, f64)]) -> SalaryTable {
        SalaryTable::from_records(
            rows.iter()
                .map(|(title, usd)| record(2024, "senior", "integral", "media", title, *usd))
                .collect(),
            Vec::new(),
        )
    }

    #[test]
    fn mean_max_and_count() {
        let t = table(&[("A", 100.0), ("B", 200.0), ("B", 300.0)]);
        let idx: Vec<usize> = (0..t.len()).collect();
        let s = summarize(&Subset::new(&t, &idx)).unwrap();
        assert_eq!(s.mean_salary, 200.0);
        assert_eq!(s.max_salary, 300.0);
        assert_eq!(s.count, 3);
        assert_eq!(s.top_job_title, "B");
    }

    #[test]
    fn empty_subset_has_no_summary() {
        let t = table(&[("A", 100.0)]);
        assert_eq!(summarize(&Subset::new(&t, &[])), None);
    }

    #[test]
    fn modal_title_ties_break_alphabetically() {
        let t = table(&[
            ("Data Scientist", 1.0),
            ("Analytics Engineer", 2.0),
            ("Data Scientist", 3.0),
            ("Analytics Engineer", 4.0),
            ("BI Analyst", 5.0),
        ]);
        let idx: Vec<usize> = (0..t.len()).collect();
        let s = summarize(&Subset::new(&t, &idx)).unwrap();
        assert_eq!(s.top_job_title, "Analytics Engineer");
    }

    #[test]
    fn only_subset_rows_are_counted() {
        let t = table(&[("A", 10.0), ("B", 1000.0), ("A", 30.0)]);
        let s = summarize(&Subset::new(&t, &[0, 2])).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.mean_salary, 20.0);
        assert_eq!(s.max_salary, 30.0);
    }
}
