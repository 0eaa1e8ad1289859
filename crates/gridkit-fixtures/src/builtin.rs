use gridkit_core::{Cell, CellCoord, Sheet};

use crate::fixture::{FixtureError, SpreadsheetFixture};

/// Hide the second row (index 1)
#[derive(Debug, Clone, Copy)]
pub struct HideSecondRowFixture;

impl SpreadsheetFixture for HideSecondRowFixture {
    fn load_fixture(&self, sheet: &mut Sheet) -> Result<(), FixtureError> {
        sheet.set_row_hidden(1, true)?;
        Ok(())
    }
}

/// Hide columns B and C (indices 1 and 2)
#[derive(Debug, Clone, Copy)]
pub struct HiddenColumnsFixture;

impl SpreadsheetFixture for HiddenColumnsFixture {
    fn load_fixture(&self, sheet: &mut Sheet) -> Result<(), FixtureError> {
        sheet.set_col_hidden(1, true)?;
        sheet.set_col_hidden(2, true)?;
        Ok(())
    }
}

/// Freeze the first row and first column
#[derive(Debug, Clone, Copy)]
pub struct FreezePaneFixture;

impl SpreadsheetFixture for FreezePaneFixture {
    fn load_fixture(&self, sheet: &mut Sheet) -> Result<(), FixtureError> {
        sheet.set_frozen(1, 1);
        Ok(())
    }
}

/// Give the header row (index 0) extra height
#[derive(Debug, Clone, Copy)]
pub struct TallHeaderRowFixture;

impl TallHeaderRowFixture {
    pub const HEADER_HEIGHT: f64 = 42.0;
}

impl SpreadsheetFixture for TallHeaderRowFixture {
    fn load_fixture(&self, sheet: &mut Sheet) -> Result<(), FixtureError> {
        sheet.set_row_height(0, Self::HEADER_HEIGHT);
        Ok(())
    }
}

/// Fill A1:C5 with a small deterministic inventory table: a header row
/// followed by text, number, and boolean columns.
#[derive(Debug, Clone, Copy)]
pub struct SampleInventoryFixture;

impl SampleInventoryFixture {
    const ROWS: [(&'static str, f64, bool); 4] = [
        ("Bolt M4", 250.0, true),
        ("Washer 6mm", 980.0, true),
        ("Hinge", 42.0, false),
        ("Bracket", 17.0, true),
    ];
}

impl SpreadsheetFixture for SampleInventoryFixture {
    fn load_fixture(&self, sheet: &mut Sheet) -> Result<(), FixtureError> {
        sheet.set_cell(CellCoord::new(0, 0), Cell::text("Item"));
        sheet.set_cell(CellCoord::new(0, 1), Cell::text("Quantity"));
        sheet.set_cell(CellCoord::new(0, 2), Cell::text("In stock"));

        for (i, (item, quantity, in_stock)) in Self::ROWS.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.set_cell(CellCoord::new(row, 0), Cell::text(*item));
            sheet.set_cell(CellCoord::new(row, 1), Cell::number(*quantity));
            sheet.set_cell(CellCoord::new(row, 2), Cell::boolean(*in_stock));
        }

        Ok(())
    }
}
