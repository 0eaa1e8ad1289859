use thiserror::Error;

/// Errors raised by the grid model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Row index {row} out of range (max {max})")]
    RowOutOfRange { row: u32, max: u32 },

    #[error("Column index {col} out of range (max {max})")]
    ColOutOfRange { col: u32, max: u32 },

    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),

    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    #[error("Sheet name already exists: {0}")]
    SheetNameExists(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("A workbook must keep at least one sheet")]
    CannotRemoveLastSheet,
}
