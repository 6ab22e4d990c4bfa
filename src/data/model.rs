use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// CategoryValue – a single cell of a filterable column
// ---------------------------------------------------------------------------

/// A value of one of the four filterable columns.
/// Stored in `BTreeSet`s downstream, so ordering drives the widget order:
/// years numerically, text lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryValue {
    Year(i64),
    Text(String),
}

impl fmt::Display for CategoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryValue::Year(y) => write!(f, "{y}"),
            CategoryValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterColumn – the four columns a user can filter on
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterColumn {
    Year,
    Seniority,
    Contract,
    CompanySize,
}

impl FilterColumn {
    /// Sidebar order.
    pub const ALL: [FilterColumn; 4] = [
        FilterColumn::Year,
        FilterColumn::Seniority,
        FilterColumn::Contract,
        FilterColumn::CompanySize,
    ];

    /// Header of the column in the source CSV.
    pub fn csv_name(self) -> &'static str {
        match self {
            FilterColumn::Year => "ano",
            FilterColumn::Seniority => "senioridade",
            FilterColumn::Contract => "contrato",
            FilterColumn::CompanySize => "tamanho_empresa",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Year => "Year",
            FilterColumn::Seniority => "Seniority",
            FilterColumn::Contract => "Contract",
            FilterColumn::CompanySize => "Company size",
        }
    }

    /// Extract this column's value from a record.
    pub fn value_of(self, record: &SalaryRecord) -> CategoryValue {
        match self {
            FilterColumn::Year => CategoryValue::Year(record.year),
            FilterColumn::Seniority => CategoryValue::Text(record.seniority.clone()),
            FilterColumn::Contract => CategoryValue::Text(record.contract.clone()),
            FilterColumn::CompanySize => CategoryValue::Text(record.company_size.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// SalaryRecord – one row of the survey
// ---------------------------------------------------------------------------

/// CSV headers every dataset must carry, aligned with
/// [`SalaryRecord::typed_cells`].
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "ano",
    "senioridade",
    "contrato",
    "tamanho_empresa",
    "cargo",
    "remoto",
    "usd",
    "residencia_iso3",
];

/// One surveyed individual.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "ano", deserialize_with = "deserialize_year")]
    pub year: i64,
    #[serde(rename = "senioridade")]
    pub seniority: String,
    #[serde(rename = "contrato")]
    pub contract: String,
    #[serde(rename = "tamanho_empresa")]
    pub company_size: String,
    #[serde(rename = "cargo")]
    pub job_title: String,
    #[serde(rename = "remoto")]
    pub remote: String,
    #[serde(rename = "usd")]
    pub salary_usd: f64,
    #[serde(rename = "residencia_iso3")]
    pub residence_iso3: String,
    /// Raw text of every other CSV column, aligned with
    /// [`SalaryTable::extra_columns`].
    #[serde(skip)]
    pub extra: Vec<String>,
}

impl SalaryRecord {
    /// Cells of the typed fields as display text, aligned with
    /// [`REQUIRED_COLUMNS`].
    pub fn typed_cells(&self) -> [String; 8] {
        [
            self.year.to_string(),
            self.seniority.clone(),
            self.contract.clone(),
            self.company_size.clone(),
            self.job_title.clone(),
            self.remote.clone(),
            format!("{:.0}", self.salary_usd),
            self.residence_iso3.clone(),
        ]
    }
}

/// Years exported through a float column come out as `2024.0`.
fn deserialize_year<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_year(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid year '{raw}'")))
}

fn parse_year(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(y) = raw.parse::<i64>() {
        return Some(y);
    }
    let f = raw.parse::<f64>().ok()?;
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

// ---------------------------------------------------------------------------
// SalaryTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Where the text of a displayed column comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSource {
    /// Index into [`SalaryRecord::typed_cells`].
    Typed(usize),
    /// Index into [`SalaryRecord::extra`].
    Extra(usize),
}

/// The parsed dataset. Never mutated after construction; filters only
/// produce index lists into `records`.
#[derive(Debug, Clone)]
pub struct SalaryTable {
    pub records: Vec<SalaryRecord>,
    /// Headers of the non-typed CSV columns, in file order.
    pub extra_columns: Vec<String>,
    /// Every column in file order with the source of its cells.
    pub columns: Vec<(String, CellSource)>,
    /// For each filterable column the sorted set of distinct values.
    pub unique_values: BTreeMap<FilterColumn, BTreeSet<CategoryValue>>,
}

impl SalaryTable {
    /// Typed columns first, then `extra_columns`.
    pub fn from_records(records: Vec<SalaryRecord>, extra_columns: Vec<String>) -> Self {
        let headers = REQUIRED_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(extra_columns)
            .collect();
        Self::with_headers(records, headers)
    }

    /// `headers` lists every CSV column in file order. Records must carry
    /// their `extra` cells in the same relative order.
    pub fn with_headers(records: Vec<SalaryRecord>, headers: Vec<String>) -> Self {
        let mut extra_columns = Vec::new();
        let columns = headers
            .into_iter()
            .map(|name| {
                let source = match REQUIRED_COLUMNS.iter().position(|c| *c == name) {
                    Some(i) => CellSource::Typed(i),
                    None => {
                        extra_columns.push(name.clone());
                        CellSource::Extra(extra_columns.len() - 1)
                    }
                };
                (name, source)
            })
            .collect();

        let mut unique_values: BTreeMap<FilterColumn, BTreeSet<CategoryValue>> = FilterColumn::ALL
            .iter()
            .map(|col| (*col, BTreeSet::new()))
            .collect();

        for rec in &records {
            for col in FilterColumn::ALL {
                unique_values.entry(col).or_default().insert(col.value_of(rec));
            }
        }

        SalaryTable {
            records,
            extra_columns,
            columns,
            unique_values,
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Display text of `record`, aligned with [`SalaryTable::headers`].
    pub fn row_cells(&self, record: &SalaryRecord) -> Vec<String> {
        let typed = record.typed_cells();
        self.columns
            .iter()
            .map(|(_, source)| match source {
                CellSource::Typed(i) => typed[*i].clone(),
                CellSource::Extra(i) => record.extra.get(*i).cloned().unwrap_or_default(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
