//! Dashboard backend for price prediction.
//!
//! The trained models are external collaborators: each is described by a
//! JSON artifact naming its family, property type, training features, and
//! scale. This crate loads the artifacts once into an immutable
//! [`ModelSet`], assembles user-entered attributes into the feature shape
//! each model expects, and runs the interaction handler with explicit
//! per-session state. The vote ledger comparing the two model families
//! lives here too.

pub mod error;
pub mod features;
pub mod interaction;
pub mod model;
pub mod session;
pub mod vote;

pub use error::{PredictError, Result};
pub use features::{FeatureRecord, FeatureValue};
pub use interaction::{PredictionOutcome, handle_prediction};
pub use model::{LinearArtifact, ModelFamily, ModelSet, ModelSpec, PriceModel, inverse_log};
pub use session::Session;
pub use vote::{Leader, Tally, TypeTally, VoteChoice, VoteLedger, VoteRecord};
