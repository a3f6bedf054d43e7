use std::fmt;
use std::fmt::Formatter;

/// A successfully parsed `convert <value> <from> to <to>` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub value: f32,
    /// Source unit, spelled exactly as it was written.
    pub from_unit: String,
    /// Target unit, spelled exactly as it was written.
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(value: f32, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        ConversionRequest {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

impl fmt::Display for ConversionRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} to {}", self.value, self.from_unit, self.to_unit)
    }
}
