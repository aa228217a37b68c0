//! One prediction interaction: score the record with both families,
//! render the comparison line, and remember it in the session.

use tracing::info;

use crate::error::{PredictError, Result};
use crate::features::FeatureRecord;
use crate::model::{ModelFamily, ModelSet};
use crate::session::Session;

/// Both family estimates for one record, plus the rendered banner.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub lightgbm: f64,
    pub catboost: f64,
    /// The banner stored in the session, e.g.
    /// `LightGBM: 4250000 kr | CatBoost: 4180000 kr`.
    pub display: String,
    /// The banner this one displaced, if any.
    pub previous: Option<String>,
}

/// Score `record` with both families for `property_type`.
///
/// Fails without touching the session if either family lacks a model for
/// the requested type.
pub fn handle_prediction(
    models: &ModelSet,
    session: &mut Session,
    property_type: &str,
    record: &FeatureRecord,
) -> Result<PredictionOutcome> {
    let lightgbm_model = models
        .of(ModelFamily::LightGbm, property_type)
        .ok_or_else(|| PredictError::MissingModel {
            family: ModelFamily::LightGbm,
            property_type: property_type.to_string(),
        })?;
    let catboost_model = models
        .of(ModelFamily::CatBoost, property_type)
        .ok_or_else(|| PredictError::MissingModel {
            family: ModelFamily::CatBoost,
            property_type: property_type.to_string(),
        })?;

    let lightgbm = lightgbm_model.predict(record);
    let catboost = catboost_model.predict(record);
    let display = format!("LightGBM: {lightgbm:.0} kr | CatBoost: {catboost:.0} kr");
    info!(property_type, lightgbm, catboost, "prediction served");
    let previous = session.remember(display.clone());
    Ok(PredictionOutcome {
        lightgbm,
        catboost,
        display,
        previous,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureValue;
    use crate::model::{ModelSpec, PriceModel};

    struct FixedModel {
        spec: ModelSpec,
        value: f64,
    }

    impl PriceModel for FixedModel {
        fn spec(&self) -> &ModelSpec {
            &self.spec
        }

        fn predict_raw(&self, _features: &[FeatureValue]) -> f64 {
            self.value
        }
    }

    fn fixed(family: ModelFamily, property_type: &str, value: f64) -> Box<FixedModel> {
        Box::new(FixedModel {
            spec: ModelSpec {
                family,
                property_type: property_type.to_string(),
                features: Vec::new(),
                log_scale: false,
                categorical: Vec::new(),
            },
            value,
        })
    }

    #[test]
    fn prediction_renders_both_families_and_updates_session() {
        let models = ModelSet::from_models(vec![
            fixed(ModelFamily::LightGbm, "Villa", 4_250_000.0),
            fixed(ModelFamily::CatBoost, "Villa", 4_180_000.0),
        ]);
        let mut session = Session::new();
        let outcome =
            handle_prediction(&models, &mut session, "Villa", &FeatureRecord::new()).unwrap();
        assert_eq!(
            outcome.display,
            "LightGBM: 4250000 kr | CatBoost: 4180000 kr"
        );
        assert_eq!(outcome.previous, None);
        assert_eq!(session.last_result(), Some(outcome.display.as_str()));
    }

    #[test]
    fn missing_family_fails_and_leaves_session_untouched() {
        let models = ModelSet::from_models(vec![fixed(ModelFamily::LightGbm, "Villa", 1.0)]);
        let mut session = Session::new();
        let err =
            handle_prediction(&models, &mut session, "Villa", &FeatureRecord::new()).unwrap_err();
        assert!(matches!(
            err,
            PredictError::MissingModel {
                family: ModelFamily::CatBoost,
                ..
            }
        ));
        assert_eq!(session.last_result(), None);
    }

    #[test]
    fn second_prediction_reports_the_displaced_banner() {
        let models = ModelSet::from_models(vec![
            fixed(ModelFamily::LightGbm, "Villa", 1.0),
            fixed(ModelFamily::CatBoost, "Villa", 2.0),
        ]);
        let mut session = Session::new();
        let first =
            handle_prediction(&models, &mut session, "Villa", &FeatureRecord::new()).unwrap();
        let second =
            handle_prediction(&models, &mut session, "Villa", &FeatureRecord::new()).unwrap();
        assert_eq!(second.previous, Some(first.display));
    }
}
