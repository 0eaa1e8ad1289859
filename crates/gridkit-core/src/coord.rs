use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GridError;

/// Cell coordinate (0-indexed internally)
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    pub const fn new(row: u32, col: u32) -> Self {
        CellCoord { row, col }
    }

    /// Create from A1 notation (e.g., "A1" -> (0, 0), "B2" -> (1, 1))
    pub fn from_a1(notation: &str) -> Option<Self> {
        let notation = notation.trim().to_uppercase();
        let mut col_str = String::new();
        let mut row_str = String::new();

        for c in notation.chars() {
            if c.is_ascii_alphabetic() {
                if !row_str.is_empty() {
                    return None; // Letters after numbers
                }
                col_str.push(c);
            } else if c.is_ascii_digit() {
                row_str.push(c);
            } else {
                return None;
            }
        }

        if col_str.is_empty() || row_str.is_empty() {
            return None;
        }

        let col = col_from_label(&col_str)?;
        let row: u32 = row_str.parse().ok()?;

        if row == 0 {
            return None; // Rows are 1-indexed in A1 notation
        }

        Some(CellCoord { row: row - 1, col })
    }

    /// Parse A1 notation, reporting the rejected input on failure
    pub fn parse(notation: &str) -> Result<Self, GridError> {
        Self::from_a1(notation).ok_or_else(|| GridError::InvalidCellRef(notation.to_string()))
    }

    /// Convert to A1 notation (e.g., (0, 0) -> "A1")
    pub fn to_a1(&self) -> String {
        format!("{}{}", col_to_label(self.col), self.row + 1)
    }

    /// Check if this coord is within bounds
    pub fn is_valid(&self, max_rows: u32, max_cols: u32) -> bool {
        self.row < max_rows && self.col < max_cols
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

/// Convert column index (0-indexed) to label (A, B, ..., Z, AA, AB, ...)
pub fn col_to_label(col: u32) -> String {
    let mut label = String::new();
    let mut n = col + 1; // 1-indexed for calculation

    while n > 0 {
        n -= 1;
        label.insert(0, char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }

    label
}

/// Convert column label (A, B, ..., Z, AA, AB, ...) to index (0-indexed).
/// Labels whose index would not fit in a u32 are rejected.
pub fn col_from_label(label: &str) -> Option<u32> {
    let mut col: u32 = 0;

    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        col = col.checked_mul(26)?.checked_add(digit)?;
    }

    if col == 0 {
        None
    } else {
        Some(col - 1)
    }
}

/// A rectangular range of cells (e.g., A1:B10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub start: CellCoord,
    pub end: CellCoord,
}

impl CellRange {
    pub fn new(start: CellCoord, end: CellCoord) -> Self {
        // Normalize so start is top-left and end is bottom-right
        CellRange {
            start: CellCoord::new(start.row.min(end.row), start.col.min(end.col)),
            end: CellCoord::new(start.row.max(end.row), start.col.max(end.col)),
        }
    }

    /// Create from "A1" or "A1:B2" notation
    pub fn from_a1(notation: &str) -> Option<Self> {
        let parts: Vec<&str> = notation.split(':').collect();
        match parts.len() {
            1 => {
                let coord = CellCoord::from_a1(parts[0])?;
                Some(CellRange::new(coord, coord))
            }
            2 => {
                let start = CellCoord::from_a1(parts[0])?;
                let end = CellCoord::from_a1(parts[1])?;
                Some(CellRange::new(start, end))
            }
            _ => None,
        }
    }

    /// Parse A1 range notation, reporting the rejected input on failure
    pub fn parse(notation: &str) -> Result<Self, GridError> {
        Self::from_a1(notation).ok_or_else(|| GridError::InvalidCellRef(notation.to_string()))
    }

    /// Convert to A1:B2 notation
    pub fn to_a1(&self) -> String {
        if self.start == self.end {
            self.start.to_a1()
        } else {
            format!("{}:{}", self.start.to_a1(), self.end.to_a1())
        }
    }

    /// Check if a coordinate is within this range
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.row >= self.start.row
            && coord.row <= self.end.row
            && coord.col >= self.start.col
            && coord.col <= self.end.col
    }

    /// Check if this range intersects with another range
    pub fn intersects(&self, other: &CellRange) -> bool {
        !(self.end.row < other.start.row
            || self.start.row > other.end.row
            || self.end.col < other.start.col
            || self.start.col > other.end.col)
    }

    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    pub fn col_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    pub fn cell_count(&self) -> u32 {
        self.row_count() * self.col_count()
    }

    /// Iterate over all coordinates in the range (row by row)
    pub fn iter(&self) -> CellRangeIter {
        CellRangeIter {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

impl IntoIterator for CellRange {
    type Item = CellCoord;
    type IntoIter = CellRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over coordinates in a range
pub struct CellRangeIter {
    range: CellRange,
    current_row: u32,
    current_col: u32,
}

impl Iterator for CellRangeIter {
    type Item = CellCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row > self.range.end.row {
            return None;
        }

        let coord = CellCoord::new(self.current_row, self.current_col);

        self.current_col += 1;
        if self.current_col > self.range.end.col {
            self.current_col = self.range.start.col;
            self.current_row += 1;
        }

        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.range.cell_count() as usize;
        (count, Some(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_labels() {
        assert_eq!(col_to_label(0), "A");
        assert_eq!(col_to_label(25), "Z");
        assert_eq!(col_to_label(26), "AA");
        assert_eq!(col_to_label(701), "ZZ");
        assert_eq!(col_to_label(702), "AAA");

        assert_eq!(col_from_label("A"), Some(0));
        assert_eq!(col_from_label("Z"), Some(25));
        assert_eq!(col_from_label("AA"), Some(26));
        assert_eq!(col_from_label("ZZ"), Some(701));
        assert_eq!(col_from_label("1"), None);
    }

    #[test]
    fn test_col_label_overflow_rejected() {
        // Labels past the u32 range must reject, not wrap
        assert_eq!(col_from_label("AAAAAAAA"), None);
        assert_eq!(col_from_label("NAAAAAA"), None);
        assert_eq!(col_from_label("ZZZZZZZZZZ"), None);
        assert_eq!(CellCoord::from_a1("AAAAAAAA1"), None);
        assert_eq!(CellRange::from_a1("A1:AAAAAAAA9"), None);

        // Labels that still fit stay accepted
        assert_eq!(col_from_label("XFD"), Some(16_383));
        assert_eq!(col_from_label("AAAAAAA"), Some(321_272_406));
        assert_eq!(col_from_label("MWLQKWU"), Some(u32::MAX - 1));
    }

    #[test]
    fn test_parse_reports_rejected_input() {
        assert_eq!(CellCoord::parse("B2"), Ok(CellCoord::new(1, 1)));
        assert_eq!(
            CellCoord::parse("2B"),
            Err(GridError::InvalidCellRef("2B".to_string()))
        );
        assert_eq!(
            CellCoord::parse("AAAAAAAA1"),
            Err(GridError::InvalidCellRef("AAAAAAAA1".to_string()))
        );
        assert_eq!(
            CellRange::parse("A1:"),
            Err(GridError::InvalidCellRef("A1:".to_string()))
        );
        assert!(CellRange::parse("A1:B2").is_ok());
    }

    #[test]
    fn test_coord_a1() {
        assert_eq!(CellCoord::from_a1("A1"), Some(CellCoord::new(0, 0)));
        assert_eq!(CellCoord::from_a1("B2"), Some(CellCoord::new(1, 1)));
        assert_eq!(CellCoord::from_a1("AA100"), Some(CellCoord::new(99, 26)));
        assert_eq!(CellCoord::from_a1("A0"), None);
        assert_eq!(CellCoord::from_a1("1A"), None);

        assert_eq!(CellCoord::new(99, 26).to_a1(), "AA100");
    }

    #[test]
    fn test_range_normalization() {
        let range = CellRange::new(CellCoord::new(3, 2), CellCoord::new(1, 4));
        assert_eq!(range.start, CellCoord::new(1, 2));
        assert_eq!(range.end, CellCoord::new(3, 4));
        assert!(range.contains(CellCoord::new(2, 3)));
        assert!(!range.contains(CellCoord::new(0, 3)));
    }

    #[test]
    fn test_range_iteration() {
        let range = CellRange::from_a1("A1:B2").unwrap();
        let coords: Vec<_> = range.iter().collect();

        assert_eq!(coords.len(), 4);
        assert_eq!(coords[0], CellCoord::new(0, 0));
        assert_eq!(coords[1], CellCoord::new(0, 1));
        assert_eq!(coords[2], CellCoord::new(1, 0));
        assert_eq!(coords[3], CellCoord::new(1, 1));
    }
}
