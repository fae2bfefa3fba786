//! Semicolon-delimited table parsing

use stint_core::{StintError, StintResult};

/// Cell delimiter within a line
pub const DELIMITER: char = ';';

/// Header name of the background color column
pub const BACKGROUND_COLUMN: &str = "background (r,g,b)";

/// Header name of the foreground color column
pub const FOREGROUND_COLUMN: &str = "foreground (r,g,b)";

/// Header name of the position column (quad schema only)
pub const POSITION_COLUMN: &str = "position";

/// A parsed color table: a header row plus zero or more data rows
///
/// Cells are trimmed on parse. Rows shorter than the header read as
/// missing cells, not as errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ColorTable {
    /// Parse raw file text
    ///
    /// The first non-empty line is the header; every later non-empty line
    /// is a data row.
    pub fn parse(text: &str) -> StintResult<ColorTable> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let header = lines.next().ok_or(StintError::EmptyTable)?;
        let columns = split_cells(header);
        let rows = lines.map(split_cells).collect();

        Ok(ColorTable { columns, rows })
    }

    /// Index of a named column, by exact match against the trimmed header
    pub fn column(&self, name: &'static str) -> StintResult<usize> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or(StintError::MissingColumn(name))
    }

    /// Cell at (row, column); `None` when the row is short
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn split_cells(line: &str) -> Vec<String> {
    line.split(DELIMITER)
        .map(|cell| cell.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    const SINGLE: &str = "background (r,g,b);foreground (r,g,b)\n(255, 0, 0);(255, 255, 255)\n";

    #[test]
    fn test_parse_header_and_rows() {
        let table = ColorTable::parse(SINGLE).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column(BACKGROUND_COLUMN).unwrap(), 0);
        assert_eq!(table.column(FOREGROUND_COLUMN).unwrap(), 1);
        assert_eq!(table.cell(0, 0), Some("(255, 0, 0)"));
        assert_eq!(table.cell(0, 1), Some("(255, 255, 255)"));
    }

    #[test]
    fn test_empty_text_is_empty_table() {
        assert!(matches!(
            ColorTable::parse("").unwrap_err(),
            StintError::EmptyTable
        ));
        assert!(matches!(
            ColorTable::parse("\n  \n").unwrap_err(),
            StintError::EmptyTable
        ));
    }

    #[test]
    fn test_missing_column() {
        let table = ColorTable::parse("background (r,g,b)\n(0,0,0)\n").unwrap();
        let err = table.column(FOREGROUND_COLUMN).unwrap_err();
        assert!(matches!(err, StintError::MissingColumn(FOREGROUND_COLUMN)));
    }

    #[test]
    fn test_header_cells_are_trimmed() {
        let table = ColorTable::parse("  position ; background (r,g,b) \n").unwrap();
        assert_eq!(table.column(POSITION_COLUMN).unwrap(), 0);
        assert_eq!(table.column(BACKGROUND_COLUMN).unwrap(), 1);
    }

    #[test]
    fn test_short_row_reads_as_missing_cells() {
        let table = ColorTable::parse("a;b;c\nonly-one\n").unwrap();
        assert_eq!(table.cell(0, 0), Some("only-one"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 0), None);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "a;b\n\n1;2\n   \n3;4\n";
        let table = ColorTable::parse(text).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, 1), Some("4"));
    }

    proptest! {
        #[test]
        fn prop_arbitrary_text_parses_or_errors(text in ".*") {
            // Must parse or error, never panic; and parsing is deterministic.
            if let Ok(table) = ColorTable::parse(&text) {
                prop_assert_eq!(table, ColorTable::parse(&text).unwrap());
            }
        }
    }
}
