// src/record.rs
//
// Borrowed, name-keyed view over one parsed row. This is the only place that
// knows about the "NULL" sentinel: empty, missing and "NULL" cells all come
// back as None.

use crate::config::consts::NULL_MARKER;
use crate::csv::DataSet;

/// True for values that mean "no data".
#[inline]
pub fn is_absent(value: &str) -> bool {
    value.is_empty() || value == NULL_MARKER
}

/// Normalize a raw cell into an optional value.
#[inline]
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !is_absent(v))
}

#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    ds: &'a DataSet,
    row: &'a [String],
}

impl<'a> Record<'a> {
    pub fn new(ds: &'a DataSet, row: &'a [String]) -> Self { Self { ds, row } }

    /// Cell under `column`, or None if the column is unknown, the row is
    /// too short, or the value is absent.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let ix = self.ds.column(column)?;
        present(self.row.get(ix).map(String::as_str))
    }
}

/// One record per data row, in file order.
pub fn records(ds: &DataSet) -> impl Iterator<Item = Record<'_>> {
    ds.rows.iter().map(move |r| Record::new(ds, r))
}
