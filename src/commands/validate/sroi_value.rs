use regex::Regex;

use super::*;

/// Exclusive upper bound; years and ids are larger than any plausible ratio.
pub const SROI_PLAUSIBLE_MAX: f64 = 1000.0;
const SROI_LABELS: [&str; 2] = ["sroi", "social return"];
const SROI_WINDOW_CELLS: usize = 5;

/// Finds a labelled `1:N` ratio in sheets where label and value may sit in nearby cells.
pub struct SroiLocator {
    candidate_regex: Regex,
}

impl SroiLocator {
    pub fn new() -> Self {
        Self {
            candidate_regex: Regex::new(r"(?:1:)?([0-9]+\.?[0-9]*)").expect("valid sroi candidate regex"),
        }
    }

    pub fn locate(&self, model: &SpreadsheetModel) -> Option<f64> {
        for (sheet_name, rows) in model.iter_sheets() {
            for (row_index, row) in rows.iter().enumerate() {
                for (col_index, cell) in row.iter().enumerate() {
                    if !is_label_hit(cell) {
                        continue;
                    }

                    if let Some(value) = self.scan_window(row, col_index) {
                        debug!(sheet = sheet_name, row = row_index, col = col_index, value, "sroi value found");
                        return Some(value);
                    }

                    let below = rows
                        .get(row_index + 1)
                        .and_then(|next_row| self.scan_window(next_row, col_index));
                    if let Some(value) = below {
                        debug!(sheet = sheet_name, row = row_index + 1, col = col_index, value, "sroi value found below label");
                        return Some(value);
                    }
                }
            }
        }

        None
    }

    fn scan_window(&self, row: &[CellValue], start: usize) -> Option<f64> {
        let end = (start + SROI_WINDOW_CELLS).min(row.len());
        row.get(start..end)?
            .iter()
            .find_map(|cell| self.candidate(&cell.display_text()))
    }

    /// Only the first numeric match in a cell is considered.
    pub fn candidate(&self, cell_text: &str) -> Option<f64> {
        let captures = self.candidate_regex.captures(cell_text)?;
        let value = captures.get(1)?.as_str().parse::<f64>().ok()?;
        (value > 0.0 && value < SROI_PLAUSIBLE_MAX).then_some(value)
    }
}

fn is_label_hit(cell: &CellValue) -> bool {
    let lowered = cell.display_text().to_lowercase();
    SROI_LABELS.iter().any(|label| lowered.contains(label))
}
