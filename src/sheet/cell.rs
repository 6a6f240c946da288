//! Cell model.

use std::fmt;

/// The value type a cell declares (`office:value-type` in ODS).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Float,
    Currency,
    Percentage,
    Boolean,
    Date,
    Time,
    /// Suppressed by a merge/span; never carries a value of its own.
    Covered,
    Empty,
    /// Any value type this crate does not interpret.
    Other(String),
}

impl ValueType {
    /// Map an `office:value-type` attribute value.
    pub fn from_office(attr: &str) -> Self {
        match attr {
            "string" => ValueType::String,
            "float" => ValueType::Float,
            "currency" => ValueType::Currency,
            "percentage" => ValueType::Percentage,
            "boolean" => ValueType::Boolean,
            "date" => ValueType::Date,
            "time" => ValueType::Time,
            other => ValueType::Other(other.to_string()),
        }
    }

    /// Whether the value is numeric (`float`, `currency`, `percentage`).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ValueType::Float | ValueType::Currency | ValueType::Percentage
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueType::String => "string",
            ValueType::Float => "float",
            ValueType::Currency => "currency",
            ValueType::Percentage => "percentage",
            ValueType::Boolean => "boolean",
            ValueType::Date => "date",
            ValueType::Time => "time",
            ValueType::Covered => "covered",
            ValueType::Empty => "empty",
            ValueType::Other(name) => name,
        };
        f.write_str(s)
    }
}

/// One spreadsheet cell.
///
/// `raw_value` holds the underlying value (`office:value`, `office:date-value`,
/// ... or the paragraph text for strings); `display_text` holds the rendering a
/// human sees, which may be locale-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub value_type: ValueType,
    pub raw_value: String,
    pub display_text: Option<String>,
    pub style_id: Option<String>,
}

impl Cell {
    /// Create a cell with the given value type and raw value.
    pub fn new(value_type: ValueType, raw_value: impl Into<String>) -> Self {
        Self {
            value_type,
            raw_value: raw_value.into(),
            display_text: None,
            style_id: None,
        }
    }

    /// A string cell whose display text equals its value.
    pub fn string(s: impl Into<String>) -> Self {
        let s = s.into();
        let display = if s.is_empty() { None } else { Some(s.clone()) };
        Self {
            value_type: ValueType::String,
            raw_value: s,
            display_text: display,
            style_id: None,
        }
    }

    /// A float cell with no display text.
    pub fn float(v: impl Into<String>) -> Self {
        Self::new(ValueType::Float, v)
    }

    /// A boolean cell.
    pub fn boolean(b: bool) -> Self {
        Self::new(ValueType::Boolean, if b { "true" } else { "false" })
    }

    /// A cell hidden by a merge.
    pub fn covered() -> Self {
        Self::new(ValueType::Covered, "")
    }

    /// A blank cell.
    pub fn empty() -> Self {
        Self::new(ValueType::Empty, "")
    }

    /// Set the display text.
    pub fn with_display(mut self, text: impl Into<String>) -> Self {
        self.display_text = Some(text.into());
        self
    }

    /// Set the cell style reference.
    pub fn with_style(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    /// Display text, if present and not blank.
    pub fn display(&self) -> Option<&str> {
        self.display_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }

    /// The text a reader would identify the cell by: the value for strings,
    /// otherwise the display text, falling back to the raw value.
    pub fn text(&self) -> &str {
        match self.value_type {
            ValueType::Covered | ValueType::Empty => "",
            ValueType::String | ValueType::Other(_) => &self.raw_value,
            _ => self
                .display_text
                .as_deref()
                .unwrap_or(self.raw_value.as_str()),
        }
    }

    /// True when the cell carries nothing: covered, empty, or blank content.
    pub fn is_empty(&self) -> bool {
        match self.value_type {
            ValueType::Covered | ValueType::Empty => true,
            _ => self.raw_value.trim().is_empty() && self.display().is_none(),
        }
    }
}
