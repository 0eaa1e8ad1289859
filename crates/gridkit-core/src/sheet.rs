use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::cell::{parse_cell_input, Cell, CellValue};
use crate::coord::{CellCoord, CellRange};
use crate::error::GridError;

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f64 = 24.0;
/// Default column width in pixels
pub const DEFAULT_COL_WIDTH: f64 = 100.0;

/// A single spreadsheet sheet with sparse storage for cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet name (displayed in tab)
    pub name: String,
    /// Sparse cell storage - only non-empty cells are stored
    #[serde(default, with = "cell_map_serde")]
    cells: BTreeMap<(u32, u32), Cell>,
    /// Custom row heights (row index -> height in pixels)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    row_heights: HashMap<u32, f64>,
    /// Custom column widths (column index -> width in pixels)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    col_widths: HashMap<u32, f64>,
    /// Hidden row indices
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    hidden_rows: BTreeSet<u32>,
    /// Hidden column indices
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    hidden_cols: BTreeSet<u32>,
    /// Default height for rows without custom height
    #[serde(default = "default_row_height")]
    pub default_row_height: f64,
    /// Default width for columns without custom width
    #[serde(default = "default_col_width")]
    pub default_col_width: f64,
    /// Number of frozen rows (scroll lock)
    #[serde(default)]
    pub frozen_rows: u32,
    /// Number of frozen columns (scroll lock)
    #[serde(default)]
    pub frozen_cols: u32,
}

fn default_row_height() -> f64 {
    DEFAULT_ROW_HEIGHT
}

fn default_col_width() -> f64 {
    DEFAULT_COL_WIDTH
}

/// Serialize the sparse cell map with stringified "row,col" keys for JSON compatibility
mod cell_map_serde {
    use super::*;
    use serde::ser::SerializeMap;
    use serde::{de, Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(cells: &BTreeMap<(u32, u32), Cell>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(cells.len()))?;
        for (&(row, col), cell) in cells {
            let key = format!("{},{}", row, col);
            map.serialize_entry(&key, cell)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<(u32, u32), Cell>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CellMapVisitor;

        impl<'de> de::Visitor<'de> for CellMapVisitor {
            type Value = BTreeMap<(u32, u32), Cell>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map with \"row,col\" keys")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                let mut cells = BTreeMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    let cell: Cell = map.next_value()?;

                    let mut parts = key.split(',');
                    if let (Some(row), Some(col), None) =
                        (parts.next(), parts.next(), parts.next())
                    {
                        if let (Ok(row), Ok(col)) = (row.parse::<u32>(), col.parse::<u32>()) {
                            cells.insert((row, col), cell);
                        }
                    }
                }

                Ok(cells)
            }
        }

        deserializer.deserialize_map(CellMapVisitor)
    }
}

impl Sheet {
    /// Maximum number of rows (Excel compatibility)
    pub const MAX_ROWS: u32 = 1_048_576;
    /// Maximum number of columns (column XFD)
    pub const MAX_COLS: u32 = 16_384;

    /// Create a new empty sheet with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            row_heights: HashMap::new(),
            col_widths: HashMap::new(),
            hidden_rows: BTreeSet::new(),
            hidden_cols: BTreeSet::new(),
            default_row_height: DEFAULT_ROW_HEIGHT,
            default_col_width: DEFAULT_COL_WIDTH,
            frozen_rows: 0,
            frozen_cols: 0,
        }
    }

    /// Get a reference to a cell at the given coordinate
    pub fn get_cell(&self, coord: CellCoord) -> Option<&Cell> {
        self.cells.get(&(coord.row, coord.col))
    }

    /// Set a cell at the given coordinate
    pub fn set_cell(&mut self, coord: CellCoord, cell: Cell) {
        if cell.is_empty() {
            // Remove empty cells to save memory
            self.cells.remove(&(coord.row, coord.col));
        } else {
            self.cells.insert((coord.row, coord.col), cell);
        }
    }

    /// Set the value of a cell (parses input to determine type)
    pub fn set_cell_value(&mut self, coord: CellCoord, input: &str) {
        let value = parse_cell_input(input);
        self.set_cell(coord, Cell::new(value));
    }

    /// Remove a cell (make it empty)
    pub fn remove_cell(&mut self, coord: CellCoord) {
        self.cells.remove(&(coord.row, coord.col));
    }

    /// Get the value of a cell (Empty for non-existent cells)
    pub fn get_cell_value(&self, coord: CellCoord) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.get_cell(coord).map(|c| &c.value).unwrap_or(&EMPTY)
    }

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the sheet has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all non-empty cells
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellCoord, &Cell)> + '_ {
        self.cells
            .iter()
            .map(|(&(row, col), cell)| (CellCoord::new(row, col), cell))
    }

    /// Get all non-empty cells within a range
    pub fn cells_in_range(&self, range: CellRange) -> Vec<(CellCoord, &Cell)> {
        self.iter_cells()
            .filter(|(coord, _)| range.contains(*coord))
            .collect()
    }

    /// Get the bounding box of non-empty cells
    pub fn used_range(&self) -> Option<CellRange> {
        let mut coords = self.cells.keys();
        let &(first_row, first_col) = coords.next()?;

        let mut min_row = first_row;
        let mut max_row = first_row;
        let mut min_col = first_col;
        let mut max_col = first_col;

        for &(row, col) in coords {
            min_row = min_row.min(row);
            max_row = max_row.max(row);
            min_col = min_col.min(col);
            max_col = max_col.max(col);
        }

        Some(CellRange::new(
            CellCoord::new(min_row, min_col),
            CellCoord::new(max_row, max_col),
        ))
    }

    /// Get the row height for a specific row
    pub fn get_row_height(&self, row: u32) -> f64 {
        *self
            .row_heights
            .get(&row)
            .unwrap_or(&self.default_row_height)
    }

    /// Set the row height for a specific row
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        if (height - self.default_row_height).abs() < 0.01 {
            self.row_heights.remove(&row);
        } else {
            self.row_heights.insert(row, height);
        }
    }

    /// Get the column width for a specific column
    pub fn get_col_width(&self, col: u32) -> f64 {
        *self.col_widths.get(&col).unwrap_or(&self.default_col_width)
    }

    /// Set the column width for a specific column
    pub fn set_col_width(&mut self, col: u32, width: f64) {
        if (width - self.default_col_width).abs() < 0.01 {
            self.col_widths.remove(&col);
        } else {
            self.col_widths.insert(col, width);
        }
    }

    /// Hide or unhide a row. Hiding an already-hidden row is a no-op.
    pub fn set_row_hidden(&mut self, row: u32, hidden: bool) -> Result<(), GridError> {
        if row >= Self::MAX_ROWS {
            return Err(GridError::RowOutOfRange {
                row,
                max: Self::MAX_ROWS - 1,
            });
        }

        if hidden {
            self.hidden_rows.insert(row);
        } else {
            self.hidden_rows.remove(&row);
        }

        Ok(())
    }

    /// Hide or unhide a column. Hiding an already-hidden column is a no-op.
    pub fn set_col_hidden(&mut self, col: u32, hidden: bool) -> Result<(), GridError> {
        if col >= Self::MAX_COLS {
            return Err(GridError::ColOutOfRange {
                col,
                max: Self::MAX_COLS - 1,
            });
        }

        if hidden {
            self.hidden_cols.insert(col);
        } else {
            self.hidden_cols.remove(&col);
        }

        Ok(())
    }

    /// Returns whether the given row is hidden
    pub fn is_row_hidden(&self, row: u32) -> bool {
        self.hidden_rows.contains(&row)
    }

    /// Returns whether the given column is hidden
    pub fn is_col_hidden(&self, col: u32) -> bool {
        self.hidden_cols.contains(&col)
    }

    /// All hidden row indices, in ascending order
    pub fn hidden_rows(&self) -> Vec<u32> {
        self.hidden_rows.iter().copied().collect()
    }

    /// All hidden column indices, in ascending order
    pub fn hidden_cols(&self) -> Vec<u32> {
        self.hidden_cols.iter().copied().collect()
    }

    /// Height a row contributes to layout: zero when hidden
    pub fn visible_row_height(&self, row: u32) -> f64 {
        if self.is_row_hidden(row) {
            0.0
        } else {
            self.get_row_height(row)
        }
    }

    /// Width a column contributes to layout: zero when hidden
    pub fn visible_col_width(&self, col: u32) -> f64 {
        if self.is_col_hidden(col) {
            0.0
        } else {
            self.get_col_width(col)
        }
    }

    /// Y position of a row: sum of visible heights of all rows above
    pub fn row_y_position(&self, row: u32) -> f64 {
        (0..row).map(|r| self.visible_row_height(r)).sum()
    }

    /// X position of a column: sum of visible widths of all columns before
    pub fn col_x_position(&self, col: u32) -> f64 {
        (0..col).map(|c| self.visible_col_width(c)).sum()
    }

    /// Freeze the leading rows and columns (scroll lock)
    pub fn set_frozen(&mut self, rows: u32, cols: u32) {
        self.frozen_rows = rows;
        self.frozen_cols = cols;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_basic_operations() {
        let mut sheet = Sheet::new("Test");

        let coord = CellCoord::new(0, 0);
        sheet.set_cell(coord, Cell::number(42.0));

        let cell = sheet.get_cell(coord).unwrap();
        assert_eq!(cell.value.as_number(), Some(42.0));

        sheet.remove_cell(coord);
        assert!(sheet.get_cell(coord).is_none());
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_empty_cells_not_stored() {
        let mut sheet = Sheet::new("Test");

        sheet.set_cell_value(CellCoord::new(0, 0), "hello");
        assert_eq!(sheet.cell_count(), 1);

        // Writing an empty value removes the cell
        sheet.set_cell_value(CellCoord::new(0, 0), "");
        assert_eq!(sheet.cell_count(), 0);
    }

    #[test]
    fn test_row_col_dimensions() {
        let mut sheet = Sheet::new("Test");

        assert_eq!(sheet.get_row_height(0), DEFAULT_ROW_HEIGHT);
        assert_eq!(sheet.get_col_width(0), DEFAULT_COL_WIDTH);

        sheet.set_row_height(5, 30.0);
        sheet.set_col_width(3, 150.0);

        assert_eq!(sheet.get_row_height(5), 30.0);
        assert_eq!(sheet.get_col_width(3), 150.0);

        // Setting back to default drops the override
        sheet.set_row_height(5, DEFAULT_ROW_HEIGHT);
        assert_eq!(sheet.get_row_height(5), DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_row_hidden_state() {
        let mut sheet = Sheet::new("Test");

        assert!(!sheet.is_row_hidden(1));
        sheet.set_row_hidden(1, true).unwrap();
        assert!(sheet.is_row_hidden(1));

        // Idempotent
        sheet.set_row_hidden(1, true).unwrap();
        assert!(sheet.is_row_hidden(1));
        assert_eq!(sheet.hidden_rows(), vec![1]);

        sheet.set_row_hidden(1, false).unwrap();
        assert!(!sheet.is_row_hidden(1));
        assert!(sheet.hidden_rows().is_empty());
    }

    #[test]
    fn test_hidden_row_out_of_range() {
        let mut sheet = Sheet::new("Test");

        let err = sheet.set_row_hidden(Sheet::MAX_ROWS, true).unwrap_err();
        assert_eq!(
            err,
            GridError::RowOutOfRange {
                row: Sheet::MAX_ROWS,
                max: Sheet::MAX_ROWS - 1,
            }
        );

        let err = sheet.set_col_hidden(Sheet::MAX_COLS, true).unwrap_err();
        assert_eq!(
            err,
            GridError::ColOutOfRange {
                col: Sheet::MAX_COLS,
                max: Sheet::MAX_COLS - 1,
            }
        );
    }

    #[test]
    fn test_hidden_rows_excluded_from_layout() {
        let mut sheet = Sheet::new("Test");

        sheet.set_row_height(0, 30.0);
        sheet.set_row_height(1, 40.0);

        assert_eq!(sheet.row_y_position(0), 0.0);
        assert_eq!(sheet.row_y_position(1), 30.0);
        assert_eq!(sheet.row_y_position(2), 70.0);
        assert_eq!(sheet.row_y_position(3), 70.0 + DEFAULT_ROW_HEIGHT);

        // Hiding row 1 removes its height from everything below
        sheet.set_row_hidden(1, true).unwrap();
        assert_eq!(sheet.visible_row_height(1), 0.0);
        assert_eq!(sheet.row_y_position(2), 30.0);

        // Unhiding restores the custom height
        sheet.set_row_hidden(1, false).unwrap();
        assert_eq!(sheet.row_y_position(2), 70.0);
    }

    #[test]
    fn test_hidden_cols_excluded_from_layout() {
        let mut sheet = Sheet::new("Test");

        sheet.set_col_width(0, 150.0);
        assert_eq!(sheet.col_x_position(2), 150.0 + DEFAULT_COL_WIDTH);

        sheet.set_col_hidden(0, true).unwrap();
        assert_eq!(sheet.col_x_position(2), DEFAULT_COL_WIDTH);
    }

    #[test]
    fn test_used_range() {
        let mut sheet = Sheet::new("Test");

        assert!(sheet.used_range().is_none());

        sheet.set_cell(CellCoord::new(1, 1), Cell::number(1.0));
        sheet.set_cell(CellCoord::new(5, 10), Cell::number(2.0));

        let range = sheet.used_range().unwrap();
        assert_eq!(range.start, CellCoord::new(1, 1));
        assert_eq!(range.end, CellCoord::new(5, 10));
    }

    #[test]
    fn test_cells_in_range() {
        let mut sheet = Sheet::new("Test");

        for row in 0..5 {
            sheet.set_cell(CellCoord::new(row, 0), Cell::number(row as f64));
        }

        let range = CellRange::from_a1("A2:A4").unwrap();
        let cells = sheet.cells_in_range(range);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].0, CellCoord::new(1, 0));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut sheet = Sheet::new("Round trip");

        sheet.set_cell(CellCoord::new(0, 0), Cell::text("header"));
        sheet.set_cell(CellCoord::new(3, 2), Cell::number(7.5));
        sheet.set_row_height(0, 42.0);
        sheet.set_col_width(2, 150.0);
        sheet.set_row_hidden(1, true).unwrap();
        sheet.set_col_hidden(4, true).unwrap();
        sheet.set_frozen(1, 0);

        let json = serde_json::to_string(&sheet).unwrap();
        let restored: Sheet = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.name, "Round trip");
        assert_eq!(restored.cell_count(), 2);
        assert_eq!(
            restored.get_cell_value(CellCoord::new(3, 2)).as_number(),
            Some(7.5)
        );
        assert_eq!(restored.get_row_height(0), 42.0);
        assert_eq!(restored.get_col_width(2), 150.0);
        assert!(restored.is_row_hidden(1));
        assert!(restored.is_col_hidden(4));
        assert_eq!(restored.frozen_rows, 1);
    }
}
