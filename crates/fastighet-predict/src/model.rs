//! The trained-model boundary.
//!
//! Models are trained elsewhere and arrive as JSON artifacts. The pipeline
//! only needs each model's metadata (family, property type, training
//! features, scale) and a scoring function; [`PriceModel`] is that seam.
//! [`LinearArtifact`] is the shipped scoring format: an intercept plus
//! per-feature weights, with categorical levels looked up by value.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::error::Result;
use crate::features::{FeatureRecord, FeatureValue};

/// The two model families the dashboard compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelFamily {
    #[serde(rename = "lightgbm")]
    LightGbm,
    #[serde(rename = "catboost")]
    CatBoost,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 2] = [ModelFamily::LightGbm, ModelFamily::CatBoost];

    pub fn label(self) -> &'static str {
        match self {
            ModelFamily::LightGbm => "LightGBM",
            ModelFamily::CatBoost => "CatBoost",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata describing one trained artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    pub family: ModelFamily,
    /// Property type the model was trained for ("Villa", "Lägenhet", ...).
    pub property_type: String,
    /// Column names used at training time, in training order.
    pub features: Vec<String>,
    /// Estimates come out on a log1p scale and need inverting for display.
    #[serde(default)]
    pub log_scale: bool,
    /// Features the model treats as categorical.
    #[serde(default)]
    pub categorical: Vec<String>,
}

/// A scoring model behind the external-training boundary.
pub trait PriceModel {
    fn spec(&self) -> &ModelSpec;

    /// Estimate in the model's native scale, from features assembled in
    /// training order.
    fn predict_raw(&self, features: &[FeatureValue]) -> f64;

    /// Display-scale estimate for a user-entered record.
    ///
    /// Assembles the record against the training features (missing
    /// expected columns default to zero) and inverts the log scale when
    /// the artifact calls for it.
    fn predict(&self, record: &FeatureRecord) -> f64 {
        let features = record.assemble(&self.spec().features);
        let raw = self.predict_raw(&features);
        if self.spec().log_scale {
            inverse_log(raw)
        } else {
            raw
        }
    }
}

/// Invert a log1p-scale estimate.
pub fn inverse_log(value: f64) -> f64 {
    value.exp_m1()
}

/// The shipped artifact format: intercept plus per-feature weights.
///
/// Numeric features contribute `weight * value`; categorical features
/// contribute the weight recorded for their level, zero for unseen levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearArtifact {
    #[serde(flatten)]
    pub spec: ModelSpec,
    pub intercept: f64,
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub category_weights: BTreeMap<String, BTreeMap<String, f64>>,
}

impl PriceModel for LinearArtifact {
    fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    fn predict_raw(&self, features: &[FeatureValue]) -> f64 {
        let mut estimate = self.intercept;
        for (name, value) in self.spec.features.iter().zip(features) {
            match value {
                FeatureValue::Number(number) => {
                    if let Some(weight) = self.weights.get(name) {
                        estimate += weight * number;
                    }
                }
                FeatureValue::Category(level) => {
                    if let Some(levels) = self.category_weights.get(name) {
                        estimate += levels.get(level).copied().unwrap_or(0.0);
                    }
                }
            }
        }
        estimate
    }
}

/// Every model artifact, loaded once at startup and shared read-only.
pub struct ModelSet {
    models: Vec<Box<dyn PriceModel + Send + Sync>>,
}

impl ModelSet {
    /// Load all `*.json` artifacts from a directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut models: Vec<Box<dyn PriceModel + Send + Sync>> = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let artifact: LinearArtifact = serde_json::from_str(&fs::read_to_string(&path)?)?;
            debug!(
                path = %path.display(),
                family = %artifact.spec.family,
                property_type = %artifact.spec.property_type,
                "model artifact loaded"
            );
            models.push(Box::new(artifact));
        }
        info!(model_count = models.len(), "model set loaded");
        Ok(Self { models })
    }

    pub fn from_models(models: Vec<Box<dyn PriceModel + Send + Sync>>) -> Self {
        Self { models }
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// The model for one family and property type, if loaded.
    pub fn of(
        &self,
        family: ModelFamily,
        property_type: &str,
    ) -> Option<&(dyn PriceModel + Send + Sync)> {
        self.models
            .iter()
            .find(|model| {
                model.spec().family == family && model.spec().property_type == property_type
            })
            .map(|model| model.as_ref())
    }
}
