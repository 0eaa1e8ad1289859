use serde::{Deserialize, Serialize};

/// Value stored in a cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Text(s) => s.parse().ok(),
            CellValue::Empty => None,
        }
    }

    /// Get the display text for this value
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }

    /// Try to get the value as a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            CellValue::Number(n) => Some(*n != 0.0),
            CellValue::Text(s) => match s.to_uppercase().as_str() {
                "TRUE" | "YES" | "1" => Some(true),
                "FALSE" | "NO" | "0" => Some(false),
                _ => None,
            },
            CellValue::Empty => None,
        }
    }
}

/// A single cell of the grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
}

impl Cell {
    pub fn new(value: CellValue) -> Self {
        Cell { value }
    }

    pub fn number(value: f64) -> Self {
        Cell::new(CellValue::Number(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Cell::new(CellValue::Text(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        Cell::new(CellValue::Boolean(value))
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Parse user input to determine the cell value type
pub fn parse_cell_input(input: &str) -> CellValue {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return CellValue::Empty;
    }

    // Boolean
    match trimmed.to_uppercase().as_str() {
        "TRUE" => return CellValue::Boolean(true),
        "FALSE" => return CellValue::Boolean(false),
        _ => {}
    }

    // Number
    if let Ok(num) = trimmed.parse::<f64>() {
        return CellValue::Number(num);
    }

    // Percentage
    if let Some(body) = trimmed.strip_suffix('%') {
        if let Ok(num) = body.parse::<f64>() {
            return CellValue::Number(num / 100.0);
        }
    }

    CellValue::Text(trimmed.to_string())
}
