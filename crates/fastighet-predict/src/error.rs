use thiserror::Error;

use crate::model::ModelFamily;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("artifact error: {0}")]
    Artifact(#[from] serde_json::Error),
    #[error("vote ledger error: {0}")]
    Ledger(#[from] csv::Error),
    #[error("no {family} model for property type \"{property_type}\"")]
    MissingModel {
        family: ModelFamily,
        property_type: String,
    },
}

pub type Result<T> = std::result::Result<T, PredictError>;
