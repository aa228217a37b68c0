use fastighet_predict::{Leader, ModelFamily, VoteChoice, VoteLedger};
use tempfile::TempDir;

#[test]
fn open_creates_ledger_with_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.csv");
    VoteLedger::open(&path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().next(), Some("bostadstyp,choice"));
}

#[test]
fn votes_append_and_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.csv");

    let ledger = VoteLedger::open(&path).unwrap();
    ledger.record("Villa", VoteChoice::LightGbm).unwrap();
    ledger.record("Villa", VoteChoice::CatBoost).unwrap();
    ledger.record("Lägenhet", VoteChoice::Neither).unwrap();

    let reopened = VoteLedger::open(&path).unwrap();
    let records = reopened.read_all().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].bostadstyp, "Villa");
    assert_eq!(records[0].choice, VoteChoice::LightGbm);
    assert_eq!(records[2].bostadstyp, "Lägenhet");
    assert_eq!(records[2].choice, VoteChoice::Neither);
}

#[test]
fn tally_groups_by_property_type() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.csv");

    let ledger = VoteLedger::open(&path).unwrap();
    ledger.record("Villa", VoteChoice::LightGbm).unwrap();
    ledger.record("Villa", VoteChoice::LightGbm).unwrap();
    ledger.record("Villa", VoteChoice::CatBoost).unwrap();
    ledger.record("Lägenhet", VoteChoice::CatBoost).unwrap();

    let tally = ledger.tally().unwrap();
    let villa = tally.by_type.get("Villa").unwrap();
    assert_eq!((villa.lightgbm, villa.catboost, villa.neither), (2, 1, 0));
    match villa.leader() {
        Some(Leader::Ahead { family, percent }) => {
            assert_eq!(family, ModelFamily::LightGbm);
            assert!((percent - 200.0 / 3.0).abs() < 1e-9);
        }
        other => panic!("unexpected leader {other:?}"),
    }

    // Only CatBoost has voted for apartments, so no leader yet.
    let apartment = tally.by_type.get("Lägenhet").unwrap();
    assert_eq!(apartment.catboost, 1);
    assert_eq!(apartment.leader(), None);
}

#[test]
fn abstentions_never_dilute_the_leader_share() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.csv");

    let ledger = VoteLedger::open(&path).unwrap();
    ledger.record("Villa", VoteChoice::LightGbm).unwrap();
    ledger.record("Villa", VoteChoice::LightGbm).unwrap();
    ledger.record("Villa", VoteChoice::CatBoost).unwrap();
    ledger.record("Villa", VoteChoice::Neither).unwrap();

    let tally = ledger.tally().unwrap();
    let villa = tally.by_type.get("Villa").unwrap();
    assert_eq!(villa.neither, 1);
    match villa.leader() {
        Some(Leader::Ahead { family, percent }) => {
            assert_eq!(family, ModelFamily::LightGbm);
            // 2 LightGBM of 3 family votes, regardless of the Ingen row
            assert!((percent - 200.0 / 3.0).abs() < 1e-9);
        }
        other => panic!("unexpected leader {other:?}"),
    }
}

#[test]
fn ledger_written_by_hand_is_readable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.csv");
    std::fs::write(&path, "bostadstyp,choice\nRadhus,Ingen\n").unwrap();

    let ledger = VoteLedger::open(&path).unwrap();
    let records = ledger.read_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].choice, VoteChoice::Neither);
}
