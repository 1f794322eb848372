use std::ops::RangeInclusive;

use crate::error::ExtractError;

/// Column count of the legacy export
pub const FIELD_COUNT: usize = 36;

/// One input line split into its positional columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    values: Vec<String>,
}

impl Fields {
    /// Split a raw line on tabs. The line terminator, if any, is dropped first.
    pub fn split(line: &str, line_number: usize) -> Result<Self, ExtractError> {
        let trimmed = line.strip_suffix('\n').unwrap_or(line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);

        let values: Vec<String> = trimmed.split('\t').map(str::to_string).collect();
        if values.len() != FIELD_COUNT {
            return Err(ExtractError::InputFormat {
                line_number,
                field_count: values.len(),
                line: line.to_string(),
            });
        }

        Ok(Self { values })
    }

    pub fn get(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, index: usize, value: String) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    /// Non-empty cells of `range`, in column order
    pub fn non_empty(&self, range: RangeInclusive<usize>) -> Vec<String> {
        range
            .map(|i| self.get(i))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }
}
