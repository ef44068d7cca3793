use csv::ReaderBuilder;

use crate::error::Result;

/// A parsed bulk-import batch: one header row plus positional value rows.
///
/// Every row is padded (with `None`) or truncated to the header width, so
/// each record exposes exactly the header's key set in header order. A `None`
/// value means the source row was shorter than the header; `Some("")` means
/// the cell was present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBatch {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RecordBatch {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data records (the header row is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        self.rows.get(index).map(|values| Record {
            headers: &self.headers,
            values,
            index,
        })
    }

    /// Single-pass iteration over the data records. Consumers should not
    /// depend on re-iteration.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().enumerate().map(|(index, values)| Record {
            headers: &self.headers,
            values,
            index,
        })
    }
}

/// Borrowed view of one data row, keyed positionally against the header.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    headers: &'a [String],
    values: &'a [Option<String>],
    index: usize,
}

impl<'a> Record<'a> {
    /// Zero-based position of this record within the batch.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value bound to `field`, matched against the header case-insensitively.
    /// Returns `None` for unknown fields and for trailing fields the source
    /// row did not reach.
    pub fn get(&self, field: &str) -> Option<&'a str> {
        let position = self
            .headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(field))?;
        self.values
            .get(position)
            .and_then(|value| value.as_deref())
    }

    /// Field/value pairs in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> {
        self.headers
            .iter()
            .zip(self.values.iter())
            .map(|(header, value)| (header.as_str(), value.as_deref()))
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse delimited bulk-import text into a [`RecordBatch`].
///
/// Rows whose cells are all empty are discarded entirely; the first surviving
/// row is the header. Values bind to header keys by position. RFC 4180
/// quoting is honored, so a quoted comma stays inside its field.
pub fn parse_records(text: &str) -> Result<RecordBatch> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let mut rows_iter = raw_rows.into_iter();
    let Some(header_row) = rows_iter.next() else {
        return Ok(RecordBatch::default());
    };
    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();

    let mut rows = Vec::new();
    for mut raw in rows_iter {
        raw.truncate(headers.len());
        let mut row: Vec<Option<String>> = raw.into_iter().map(Some).collect();
        row.resize(headers.len(), None);
        rows.push(row);
    }
    tracing::debug!(
        records = rows.len(),
        fields = headers.len(),
        "parsed delimited import"
    );
    Ok(RecordBatch { headers, rows })
}
