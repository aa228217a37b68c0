use anyhow::{Context, Result};
use tracing::info;

use fastighet_cli::pipeline::{self, EtlRunResult};
use fastighet_model::schema;
use fastighet_predict::{FeatureRecord, ModelSet, Session, VoteLedger, handle_prediction};

use crate::cli::{EtlArgs, PredictArgs, VotesArgs};
use crate::summary::print_vote_tally;

pub fn run_etl(args: &EtlArgs) -> Result<EtlRunResult> {
    pipeline::run_etl(&args.input, &args.database, &args.namespace, args.dry_run)
}

pub fn run_predict(args: &PredictArgs) -> Result<()> {
    let models = ModelSet::load(&args.models)
        .with_context(|| format!("load models from {}", args.models.display()))?;
    let record = feature_record(args);
    let mut session = Session::new();
    let outcome = handle_prediction(&models, &mut session, &args.property_type, &record)
        .with_context(|| format!("predict for {}", args.property_type))?;
    info!(
        property_type = %args.property_type,
        lightgbm = outcome.lightgbm,
        catboost = outcome.catboost,
        "estimates ready"
    );
    println!("{}", outcome.display);
    Ok(())
}

pub fn run_votes(args: &VotesArgs) -> Result<()> {
    let ledger = VoteLedger::open(&args.ledger)
        .with_context(|| format!("open ledger {}", args.ledger.display()))?;
    if let (Some(choice), Some(property_type)) = (args.cast, args.property_type.as_deref()) {
        ledger
            .record(property_type, choice.into())
            .with_context(|| format!("record vote for {property_type}"))?;
    }
    let tally = ledger.tally().context("tally votes")?;
    print_vote_tally(&tally);
    Ok(())
}

/// Assemble the entered attributes under their canonical column names.
fn feature_record(args: &PredictArgs) -> FeatureRecord {
    let mut record = FeatureRecord::new();
    let numbers = [
        (schema::BOAREA, args.boarea),
        (schema::BIAREA, args.biarea),
        (schema::RUM, args.rum),
        (schema::TOMTAREA, args.tomtarea),
        (schema::VANING, args.vaning),
    ];
    for (name, value) in numbers {
        if let Some(value) = value {
            record = record.with_number(name, value);
        }
    }
    let texts = [
        (schema::ADRESS, args.adress.as_deref()),
        (schema::OMRADE, args.omrade.as_deref()),
        (schema::ORT, args.ort.as_deref()),
    ];
    for (name, value) in texts {
        if let Some(value) = value {
            record = record.with_category(name, value);
        }
    }
    record
}
