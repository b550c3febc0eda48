//! End-to-end lifecycle of a managed file through the ledger, the resource
//! layer and the line store: Absent -> Present -> Present -> Absent.

use filedata_core::{Error, FileResource, ManagedFile, ProviderConfig, StateLedger};
use filedata_fs::FsLineStore;
use filedata_test_utils::{FaultyStore, LineFixture};
use pretty_assertions::assert_eq;

fn managed(name: &str, lines: &[&str]) -> ManagedFile {
    ManagedFile::new(name, lines.iter().map(|l| l.to_string()).collect())
}

#[test]
fn full_lifecycle_with_ledger() {
    let fixture = LineFixture::new();
    let config = ProviderConfig {
        fsync: false,
        ..ProviderConfig::new(fixture.root())
    };
    let resource = FileResource::from_config(&config);
    let state_path = config.state_path();

    // Absent -> Present
    let mut ledger = StateLedger::load_or_default(&state_path).unwrap();
    let state = resource.create(&managed("file1", &["one", "two"])).unwrap();
    ledger.upsert(state);
    ledger.save(&state_path, config.robustness()).unwrap();
    fixture.assert_lines("file1", &["one", "two"]);

    // Present -> Present, reconciled from the persisted ledger
    let mut ledger = StateLedger::load(&state_path).unwrap();
    let previous = ledger.get("file1").unwrap().clone();
    let state = resource
        .update(&previous, &managed("file1", &["two", "three"]))
        .unwrap();
    ledger.upsert(state);
    ledger.save(&state_path, config.robustness()).unwrap();
    fixture.assert_lines("file1", &["two", "three"]);

    let refreshed = resource
        .read(ledger.get("file1").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(&refreshed, ledger.get("file1").unwrap());

    // Present -> Absent
    let mut ledger = StateLedger::load(&state_path).unwrap();
    let state = ledger.remove("file1").unwrap();
    resource.delete(&state).unwrap();
    ledger.save(&state_path, config.robustness()).unwrap();

    assert!(!fixture.exists("file1"));
    assert!(StateLedger::load(&state_path).unwrap().files().is_empty());
    assert_eq!(resource.read(&state).unwrap(), None);
}

#[test]
fn failed_update_recovers_through_refresh() {
    let fixture = LineFixture::new();
    let healthy = FileResource::new(fixture.root());
    let state = healthy
        .create(&managed("file1", &["a", "b", "c", "d"]))
        .unwrap();
    let desired = managed("file1", &["A", "B", "c"]);

    // Second mutation (write of line 2) fails; line 1 is already rewritten.
    let faulty =
        FileResource::with_store(fixture.root(), FaultyStore::failing_at(FsLineStore::new(), 2));
    let err = faulty.update(&state, &desired).unwrap_err();
    assert!(matches!(err, Error::Write { index: 2, .. }), "got {err:?}");
    assert!(err.to_string().starts_with("Unable to write line 2"));
    fixture.assert_lines("file1", &["A", "b", "c", "d"]);

    // The caller refreshes the real state and reconciles again.
    let actual = healthy.read(&state).unwrap().unwrap();
    let converged = healthy.update(&actual, &desired).unwrap();

    assert_eq!(converged, desired);
    fixture.assert_lines("file1", &["A", "B", "c"]);
}

#[test]
fn independent_files_do_not_interfere() {
    let fixture = LineFixture::new();
    let resource = FileResource::new(fixture.root());

    let first = resource.create(&managed("first", &["1", "2"])).unwrap();
    let second = resource.create(&managed("second", &["x", "y", "z"])).unwrap();
    resource
        .update(&first, &managed("first", &["1", "2", "3"]))
        .unwrap();
    resource.delete(&second).unwrap();

    fixture.assert_lines("first", &["1", "2", "3"]);
    assert!(!fixture.exists("second"));
}
