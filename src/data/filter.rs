use std::collections::{BTreeMap, BTreeSet};

use super::model::{CategoryValue, FilterColumn, SalaryRecord, SalaryTable};

// ---------------------------------------------------------------------------
// Filter predicate: which category values are selected per column
// ---------------------------------------------------------------------------

/// Per-column selection state: maps column → set of selected values.
/// An absent column is unconstrained; an empty set matches nothing.
pub type FilterState = BTreeMap<FilterColumn, BTreeSet<CategoryValue>>;

/// Initialise a [`FilterState`] with every value selected (show everything).
pub fn init_filter_state(table: &SalaryTable) -> FilterState {
    table
        .unique_values
        .iter()
        .map(|(col, vals)| (*col, vals.clone()))
        .collect()
}

/// Return indices of records that pass all filters, in table order.
///
/// A record passes when, for every column in `filters`, its value is in the
/// selected set. Selecting nothing in any column therefore hides every row.
pub fn filtered_indices(table: &SalaryTable, filters: &FilterState) -> Vec<usize> {
    if filters.values().any(BTreeSet::is_empty) {
        return Vec::new();
    }

    // Columns with every value selected cannot reject anything.
    let active: Vec<(FilterColumn, &BTreeSet<CategoryValue>)> = filters
        .iter()
        .filter(|(col, selected)| {
            table
                .unique_values
                .get(*col)
                .map_or(true, |all| !all.is_subset(selected))
        })
        .map(|(col, selected)| (*col, selected))
        .collect();

    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            active
                .iter()
                .all(|(col, selected)| selected.contains(&col.value_of(rec)))
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Subset – read-only view over filtered rows
// ---------------------------------------------------------------------------

/// Borrowed view of the rows that survived filtering.
#[derive(Debug, Clone, Copy)]
pub struct Subset<'a> {
    table: &'a SalaryTable,
    indices: &'a [usize],
}

impl<'a> Subset<'a> {
    pub fn new(table: &'a SalaryTable, indices: &'a [usize]) -> Self {
        Self { table, indices }
    }

    pub fn records(&self) -> impl Iterator<Item = &'a SalaryRecord> + 'a {
        let (table, indices) = (self.table, self.indices);
        indices.iter().map(move |&i| &table.records[i])
    }

    pub fn table(&self) -> &'a SalaryTable {
        self.table
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn sample_table() -> SalaryTable {
        SalaryTable::from_records(
            vec![
                record(2024, "senior", "integral", "grande", "Data Scientist", 150.0),
                record(2023, "pleno", "integral", "media", "Data Engineer", 100.0),
                record(2024, "junior", "freelancer", "pequena", "Data Analyst", 50.0),
                record(2022, "senior", "contrato", "media", "Data Scientist", 120.0),
                record(2024, "pleno", "integral", "grande", "ML Engineer", 130.0),
            ],
            Vec::new(),
        )
    }

    fn text(s: &str) -> CategoryValue {
        CategoryValue::Text(s.to_string())
    }

    #[test]
    fn default_selection_reproduces_whole_table() {
        let table = sample_table();
        let filters = init_filter_state(&table);
        assert_eq!(filtered_indices(&table, &filters), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_selection_in_any_column_yields_no_rows() {
        let table = sample_table();
        for col in FilterColumn::ALL {
            let mut filters = init_filter_state(&table);
            filters.insert(col, BTreeSet::new());
            assert!(filtered_indices(&table, &filters).is_empty(), "{col:?}");
        }
    }

    #[test]
    fn columns_combine_with_and_values_with_or() {
        let table = sample_table();
        let mut filters = init_filter_state(&table);
        filters.insert(
            FilterColumn::Year,
            [CategoryValue::Year(2024), CategoryValue::Year(2022)].into(),
        );
        filters.insert(FilterColumn::Seniority, [text("senior"), text("pleno")].into());

        let idx = filtered_indices(&table, &filters);
        assert_eq!(idx, vec![0, 3, 4]);

        // Every surviving row satisfies every selected set.
        for &i in &idx {
            let rec = &table.records[i];
            for (col, selected) in &filters {
                assert!(selected.contains(&col.value_of(rec)));
            }
        }
    }

    #[test]
    fn value_not_present_in_data_matches_nothing() {
        let table = sample_table();
        let mut filters = init_filter_state(&table);
        filters.insert(FilterColumn::Contract, [text("estagio")].into());
        assert!(filtered_indices(&table, &filters).is_empty());
    }

    #[test]
    fn absent_column_is_unconstrained() {
        let table = sample_table();
        let mut filters = FilterState::new();
        filters.insert(FilterColumn::CompanySize, [text("media")].into());
        assert_eq!(filtered_indices(&table, &filters), vec![1, 3]);
    }

    #[test]
    fn subset_preserves_table_order_and_rows() {
        let table = sample_table();
        let mut filters = init_filter_state(&table);
        filters.insert(FilterColumn::Year, [CategoryValue::Year(2024)].into());
        let idx = filtered_indices(&table, &filters);
        let subset = Subset::new(&table, &idx);

        assert_eq!(subset.len(), 3);
        assert!(subset.len() <= table.len());
        let titles: Vec<&str> = subset.records().map(|r| r.job_title.as_str()).collect();
        assert_eq!(titles, vec!["Data Scientist", "Data Analyst", "ML Engineer"]);
        for (rec, &i) in subset.records().zip(&idx) {
            assert_eq!(rec, &table.records[i]);
        }
    }
}
