//! Spreadsheet ingestion for the N-Min Finder service
//!
//! Reads candidate values from the first column of the first sheet of an
//! xlsx workbook. Numeric cells are truncated toward zero, string cells are
//! parsed as integers (and skipped when unparsable), every other cell type
//! is ignored.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::error::{AppError, AppResult};

/// Read all integer values from column 0 of the first sheet of the
/// workbook at `path`.
pub fn read_numeric_column(path: &Path) -> AppResult<Vec<i64>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| AppError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::SpreadsheetRead("workbook contains no sheets".to_string()))?
        .map_err(|e| AppError::SpreadsheetRead(e.to_string()))?;

    let mut numbers = Vec::new();
    let mut skipped = 0usize;

    if let (Some(start), Some(end)) = (range.start(), range.end()) {
        for row in start.0..=end.0 {
            match range.get_value((row, 0)) {
                Some(Data::Int(value)) => numbers.push(*value),
                // Fractional values truncate toward zero
                Some(Data::Float(value)) => numbers.push(*value as i64),
                Some(Data::String(text)) => match text.trim().parse::<i64>() {
                    Ok(value) => numbers.push(value),
                    Err(_) => skipped += 1,
                },
                Some(Data::Empty) | None => {}
                Some(_) => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(path = %path.display(), skipped, "skipped non-integer cells");
    }

    if numbers.is_empty() {
        return Err(AppError::NoNumbersFound);
    }

    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rust_xlsxwriter::{Workbook, Worksheet};
    use tempfile::TempDir;

    use super::*;

    fn write_fixture(
        dir: &TempDir,
        name: &str,
        build: impl FnOnce(&mut Worksheet),
    ) -> PathBuf {
        let path = dir.path().join(name);
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        build(sheet);
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn reads_numeric_cells() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "numbers.xlsx", |sheet| {
            for (row, value) in [5.0, 3.0, 8.0].iter().enumerate() {
                sheet.write_number(row as u32, 0, *value).unwrap();
            }
        });

        assert_eq!(read_numeric_column(&path).unwrap(), vec![5, 3, 8]);
    }

    #[test]
    fn truncates_fractions_toward_zero() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "fractions.xlsx", |sheet| {
            sheet.write_number(0, 0, 5.9).unwrap();
            sheet.write_number(1, 0, -3.7).unwrap();
        });

        assert_eq!(read_numeric_column(&path).unwrap(), vec![5, -3]);
    }

    #[test]
    fn parses_integer_strings_and_skips_garbage() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "strings.xlsx", |sheet| {
            sheet.write_string(0, 0, "7").unwrap();
            sheet.write_string(1, 0, "  42  ").unwrap();
            sheet.write_string(2, 0, "not a number").unwrap();
            sheet.write_number(3, 0, 1.0).unwrap();
        });

        assert_eq!(read_numeric_column(&path).unwrap(), vec![7, 42, 1]);
    }

    #[test]
    fn skips_gaps_and_other_cell_types() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "mixed.xlsx", |sheet| {
            sheet.write_number(0, 0, 10.0).unwrap();
            sheet.write_boolean(1, 0, true).unwrap();
            // row 2 left empty
            sheet.write_number(3, 0, 20.0).unwrap();
        });

        assert_eq!(read_numeric_column(&path).unwrap(), vec![10, 20]);
    }

    #[test]
    fn ignores_values_outside_first_column() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "second_column.xlsx", |sheet| {
            sheet.write_number(0, 1, 99.0).unwrap();
        });

        assert!(matches!(
            read_numeric_column(&path),
            Err(AppError::NoNumbersFound)
        ));
    }

    #[test]
    fn empty_sheet_reports_no_numbers() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "empty.xlsx", |_sheet| {});

        assert!(matches!(
            read_numeric_column(&path),
            Err(AppError::NoNumbersFound)
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = read_numeric_column(Path::new("/definitely/not/here.xlsx"));
        assert!(matches!(result, Err(AppError::SpreadsheetRead(_))));
    }
}
