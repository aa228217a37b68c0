//! User-entered property attributes as a model-ready record.

use std::collections::BTreeMap;

/// A single feature cell.
///
/// Text attributes (address, district, locality) are marked categorical so
/// a model expecting that encoding can tell them apart from numerics.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Category(String),
}

/// One property description keyed by canonical field names.
#[derive(Debug, Clone, Default)]
pub struct FeatureRecord {
    values: BTreeMap<String, FeatureValue>,
}

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number(mut self, name: &str, value: f64) -> Self {
        self.values
            .insert(name.to_string(), FeatureValue::Number(value));
        self
    }

    pub fn with_category(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values
            .insert(name.to_string(), FeatureValue::Category(value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.values.get(name)
    }

    /// Reindex against a model's training features.
    ///
    /// Produces one value per feature in training order; expected columns
    /// the record does not carry default to numeric zero.
    pub fn assemble(&self, features: &[String]) -> Vec<FeatureValue> {
        features
            .iter()
            .map(|name| {
                self.values
                    .get(name)
                    .cloned()
                    .unwrap_or(FeatureValue::Number(0.0))
            })
            .collect()
    }
}
