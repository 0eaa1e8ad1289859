use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::sheet::Sheet;

/// A workbook containing multiple sheets
#[derive(Debug, Clone, Serialize)]
pub struct Workbook {
    /// Workbook name (usually the file name)
    pub name: String,
    /// List of sheets in the workbook
    pub sheets: Vec<Sheet>,
    /// Index of the currently active sheet
    #[serde(default)]
    pub active_sheet_index: usize,
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl Workbook {
    /// Create a new workbook with a default sheet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sheets: vec![Sheet::new("Sheet1")],
            active_sheet_index: 0,
        }
    }

    /// Get a reference to the active sheet
    pub fn active_sheet(&self) -> &Sheet {
        &self.sheets[self.active_sheet_index]
    }

    /// Get a mutable reference to the active sheet
    pub fn active_sheet_mut(&mut self) -> &mut Sheet {
        &mut self.sheets[self.active_sheet_index]
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Get a sheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Get the index of a sheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.sheets.iter().position(|s| s.name == name)
    }

    /// Set the active sheet by index
    pub fn set_active_sheet(&mut self, index: usize) -> Result<(), GridError> {
        if index >= self.sheets.len() {
            return Err(GridError::SheetNotFound(format!("index {}", index)));
        }
        self.active_sheet_index = index;
        Ok(())
    }

    /// Add a new sheet with the given name, returning its index
    pub fn add_sheet(&mut self, name: impl Into<String>) -> Result<usize, GridError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(GridError::InvalidSheetName(
                "name cannot be empty".to_string(),
            ));
        }

        if self.sheets.iter().any(|s| s.name == name) {
            return Err(GridError::SheetNameExists(name));
        }

        let index = self.sheets.len();
        self.sheets.push(Sheet::new(name));
        Ok(index)
    }

    /// Remove a sheet by index. A workbook always keeps at least one sheet.
    pub fn remove_sheet(&mut self, index: usize) -> Result<Sheet, GridError> {
        if index >= self.sheets.len() {
            return Err(GridError::SheetNotFound(format!("index {}", index)));
        }
        if self.sheets.len() == 1 {
            return Err(GridError::CannotRemoveLastSheet);
        }

        let sheet = self.sheets.remove(index);

        // Keep the active index pointing at a valid sheet
        if self.active_sheet_index >= self.sheets.len() {
            self.active_sheet_index = self.sheets.len() - 1;
        } else if index < self.active_sheet_index {
            self.active_sheet_index -= 1;
        }

        Ok(sheet)
    }

    /// Number of sheets in the workbook
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

// Custom Deserialize implementation: a workbook always holds at least one
// sheet and an in-range active index, including after deserializing
// hand-edited or corrupted input.
impl<'de> Deserialize<'de> for Workbook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Helper struct with same fields for deserialization
        #[derive(Deserialize)]
        struct WorkbookHelper {
            name: String,
            #[serde(default)]
            sheets: Vec<Sheet>,
            #[serde(default)]
            active_sheet_index: usize,
        }

        let helper = WorkbookHelper::deserialize(deserializer)?;

        let mut sheets = helper.sheets;
        if sheets.is_empty() {
            sheets.push(Sheet::new("Sheet1"));
        }

        let active_sheet_index = helper.active_sheet_index.min(sheets.len() - 1);

        Ok(Workbook {
            name: helper.name,
            sheets,
            active_sheet_index,
        })
    }
}
