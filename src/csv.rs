// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/// Headers plus raw string rows, exactly as read.
/// Rows may be shorter than `headers`; missing cells are absent values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }

    /// Column index for `name`. Duplicate headers resolve to the last one,
    /// the same way a later key overwrites an earlier one in a record.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().rposition(|h| h == name)
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal play-by-play parser.
///
/// - A leading byte-order mark is dropped.
/// - Header line is split on every comma (no quote handling) and trimmed.
/// - Data lines: `"` toggles a quoted state and is not kept; an unquoted comma ends the field.
/// - No escaped quotes, no newlines inside fields.
/// - Cells past the last header have no column and are dropped.
///
/// Never fails: short or ragged lines just yield fewer cells.
pub fn parse_table(text: &str) -> DataSet {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.trim().split('\n');

    let headers: Vec<String> = match lines.next() {
        Some(line) => line.split(',').map(|h| h.trim().to_string()).collect(),
        None => return DataSet::default(),
    };

    let rows = lines.map(|line| parse_line(line, headers.len())).collect();

    DataSet { headers, rows }
}

fn parse_line(line: &str, max_cells: usize) -> Vec<String> {
    let mut row = Vec::with_capacity(max_cells);
    let mut field = s!();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => row.push(close_field(take(&mut field))),
            _ => field.push(ch),
        }
    }
    row.push(close_field(field));

    row.truncate(max_cells);
    row
}

/// Trim, then strip one leading and one trailing quote if present.
fn close_field(field: String) -> String {
    let t = field.trim();
    let t = t.strip_prefix('"').unwrap_or(t);
    let t = t.strip_suffix('"').unwrap_or(t);
    t.to_string()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify a table (optional header line first).
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_stays_in_field() {
        let ds = parse_table("A,B,C\n1,\"x, y\",3\n");
        assert_eq!(ds.rows, vec![cells!["1", "x, y", "3"]]);
    }

    #[test]
    fn short_row_has_fewer_cells() {
        let ds = parse_table("A,B,C\n1,2");
        assert_eq!(ds.rows[0], cells!["1", "2"]);
    }

    #[test]
    fn extra_cells_are_dropped() {
        let ds = parse_table("A,B\n1,2,3,4");
        assert_eq!(ds.rows[0], cells!["1", "2"]);
    }

    #[test]
    fn crlf_and_padding_are_trimmed() {
        let ds = parse_table(" A , B \r\n 1 , 2 \r\n");
        assert_eq!(ds.headers, cells!["A", "B"]);
        assert_eq!(ds.rows[0], cells!["1", "2"]);
    }

    #[test]
    fn header_line_ignores_quotes() {
        let ds = parse_table("\"A,B\",C\n1,2,3");
        assert_eq!(ds.headers, cells!["\"A", "B\"", "C"]);
    }

    #[test]
    fn unterminated_quote_swallows_rest_of_line() {
        let ds = parse_table("A,B,C\n\"1,2,3");
        assert_eq!(ds.rows[0], cells!["1,2,3"]);
    }

    #[test]
    fn empty_text_is_one_empty_header() {
        let ds = parse_table("");
        assert_eq!(ds.headers, cells![""]);
        assert!(ds.rows.is_empty());
    }

    #[test]
    fn byte_order_mark_is_not_part_of_first_header() {
        let ds = parse_table("\u{feff}Week Number,Team\n1,MER\n");
        assert_eq!(ds.headers, cells!["Week Number", "Team"]);
        assert_eq!(ds.column("Week Number"), Some(0));
    }

    #[test]
    fn duplicate_header_resolves_to_last() {
        let ds = parse_table("Team,Team\nA,B");
        assert_eq!(ds.column("Team"), Some(1));
        assert_eq!(ds.column("Nope"), None);
    }

    #[test]
    fn writer_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &cells!["a", "b,c", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\"\n");

        let s = rows_to_string(None, &[cells!["a,b", "c"]], '\t');
        assert_eq!(s, "a,b\tc\n");
    }
}
