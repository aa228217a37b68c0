//! The model vote ledger.
//!
//! Dashboard users vote for whichever family estimated closest; votes are
//! appended to a CSV ledger (`bostadstyp,choice`) and tallied per property
//! type. A leader is only declared once both families have at least one
//! vote for that type.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::model::ModelFamily;

/// What a voter picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteChoice {
    #[serde(rename = "LightGBM")]
    LightGbm,
    #[serde(rename = "CatBoost")]
    CatBoost,
    /// Neither family convinced the voter.
    #[serde(rename = "Ingen")]
    Neither,
}

impl VoteChoice {
    pub fn label(self) -> &'static str {
        match self {
            VoteChoice::LightGbm => "LightGBM",
            VoteChoice::CatBoost => "CatBoost",
            VoteChoice::Neither => "Ingen",
        }
    }
}

/// One ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub bostadstyp: String,
    pub choice: VoteChoice,
}

/// Append-only CSV ledger of votes.
pub struct VoteLedger {
    path: PathBuf,
}

impl VoteLedger {
    /// Open the ledger, creating an empty file with a header row if none
    /// exists yet.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            let mut writer = csv::Writer::from_path(path)?;
            writer.write_record(["bostadstyp", "choice"])?;
            writer.flush()?;
            info!(path = %path.display(), "vote ledger created");
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Append one vote.
    pub fn record(&self, property_type: &str, choice: VoteChoice) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(VoteRecord {
            bostadstyp: property_type.to_string(),
            choice,
        })?;
        writer.flush()?;
        info!(property_type, choice = choice.label(), "vote recorded");
        Ok(())
    }

    /// Every vote on record, in ledger order.
    pub fn read_all(&self) -> Result<Vec<VoteRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    /// Tally all votes per property type.
    pub fn tally(&self) -> Result<Tally> {
        let mut by_type: BTreeMap<String, TypeTally> = BTreeMap::new();
        for record in self.read_all()? {
            by_type.entry(record.bostadstyp).or_default().count(record.choice);
        }
        Ok(Tally { by_type })
    }
}

/// Vote counts for one property type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeTally {
    pub lightgbm: usize,
    pub catboost: usize,
    pub neither: usize,
}

impl TypeTally {
    fn count(&mut self, choice: VoteChoice) {
        match choice {
            VoteChoice::LightGbm => self.lightgbm += 1,
            VoteChoice::CatBoost => self.catboost += 1,
            VoteChoice::Neither => self.neither += 1,
        }
    }

    /// The leading family, once both families have votes.
    ///
    /// Returns `None` while either family is still at zero; the share is
    /// the leader's percentage of the family votes only, abstentions
    /// excluded.
    pub fn leader(&self) -> Option<Leader> {
        if self.lightgbm == 0 || self.catboost == 0 {
            return None;
        }
        if self.lightgbm == self.catboost {
            return Some(Leader::Tie);
        }
        let (family, count) = if self.lightgbm > self.catboost {
            (ModelFamily::LightGbm, self.lightgbm)
        } else {
            (ModelFamily::CatBoost, self.catboost)
        };
        let family_votes = self.lightgbm + self.catboost;
        let percent = count as f64 / family_votes as f64 * 100.0;
        Some(Leader::Ahead { family, percent })
    }
}

/// Standing of the two families for one property type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leader {
    Ahead { family: ModelFamily, percent: f64 },
    Tie,
}

/// All vote counts, keyed by property type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    pub by_type: BTreeMap<String, TypeTally>,
}
