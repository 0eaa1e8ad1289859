pub mod cell;
pub mod coord;
pub mod error;
pub mod sheet;
pub mod workbook;

pub use cell::{parse_cell_input, Cell, CellValue};
pub use coord::{col_from_label, col_to_label, CellCoord, CellRange};
pub use error::GridError;
pub use sheet::{Sheet, DEFAULT_COL_WIDTH, DEFAULT_ROW_HEIGHT};
pub use workbook::Workbook;
