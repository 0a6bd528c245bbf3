use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::model::stat_field::StatField;
use crate::model::stat_value::StatValue;

/// Top level document returned by the stats provider endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsDocument {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

/// One named table: a header row plus positional rows.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<serde_json::Value>>,
}

impl StatsDocument {
    /// Take the result set with the given name out of the document.
    pub fn take_result_set(self, name: &str) -> Result<ResultSet, StatsError> {
        self.result_sets
            .into_iter()
            .find(|rs| rs.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| StatsError::MissingResultSet(name.to_string()))
    }
}

impl ResultSet {
    /// Zip every positional row with the headers. Short rows simply lack the trailing columns.
    pub fn into_rows(self) -> Vec<RawRow> {
        let headers: Vec<String> = self.headers.iter().map(|h| h.to_ascii_uppercase()).collect();
        self.row_set
            .into_iter()
            .map(|cells| RawRow { cells: headers.iter().cloned().zip(cells).collect() })
            .collect()
    }
}

/// A provider row keyed by upper-cased column header.
/// String lookups stay here; typed rows are built from it before any arithmetic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, serde_json::Value>,
}

impl RawRow {
    pub fn get(&self, column: &str) -> Option<&serde_json::Value> {
        self.cells.get(&column.to_ascii_uppercase())
    }

    /// Text value of a column; numbers are rendered without quotes, null counts as absent.
    pub fn text(&self, column: &str) -> Option<String> {
        match self.get(column)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Coerce one counting stat of row number `row` (used in error messages).
    pub fn stat(&self, field: StatField, row: usize) -> Result<StatValue, StatsError> {
        let value = self
            .get(field.name())
            .ok_or_else(|| StatsError::MissingField { field: field.name().to_string(), row })?;
        StatValue::coerce(value).ok_or_else(|| StatsError::non_numeric(field, row, value))
    }

    /// Coerce an arbitrary numeric column such as `GP`.
    pub fn number(&self, column: &str, row: usize) -> Result<StatValue, StatsError> {
        let value = self
            .get(column)
            .ok_or_else(|| StatsError::MissingField { field: column.to_string(), row })?;
        StatValue::coerce(value).ok_or_else(|| StatsError::NonNumericField {
            field: column.to_string(),
            row,
            value: value.to_string(),
        })
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for RawRow {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        RawRow { cells: map.into_iter().map(|(k, v)| (k.to_ascii_uppercase(), v)).collect() }
    }
}
