//! Per-pass audit of resolved properties.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub property: String,
    pub value: String,
}

/// Ordered `(property, value)` pairs recorded while a step resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeLog {
    component: String,
    records: Vec<ChangeRecord>,
}

impl ChangeLog {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            records: Vec::new(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&mut self, property: impl Into<String>, value: impl Display) {
        self.records.push(ChangeRecord {
            property: property.into(),
            value: value.to_string(),
        });
    }

    /// Record an optional value; `None` renders as an empty string.
    pub fn record_opt<T: Display>(&mut self, property: impl Into<String>, value: Option<&T>) {
        let value = value.map(ToString::to_string).unwrap_or_default();
        self.record(property, value);
    }
}

impl Display for ChangeLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validate {}: ", self.component)?;
        for record in &self.records {
            write!(f, "\n    {} - '{}',", record.property, record.value)?;
        }
        Ok(())
    }
}
