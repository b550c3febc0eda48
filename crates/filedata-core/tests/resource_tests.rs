//! Lifecycle tests for managed file resources

use filedata_core::{Error, FileResource, ManagedFile};
use filedata_fs::FsLineStore;
use filedata_test_utils::{LineFixture, RecordingStore, StoreCall};
use pretty_assertions::assert_eq;

fn managed(name: &str, lines: &[&str]) -> ManagedFile {
    ManagedFile::new(name, lines.iter().map(|l| l.to_string()).collect())
}

#[test]
fn test_create_writes_every_line() {
    let fixture = LineFixture::new();
    let resource = FileResource::new(fixture.root());

    let state = resource.create(&managed("file1", &["one", "two"])).unwrap();

    assert_eq!(state, managed("file1", &["one", "two"]));
    assert_eq!(fixture.read_raw("file1"), "one\ntwo\n");
}

#[test]
fn test_create_adopts_existing_file() {
    let fixture = LineFixture::new();
    fixture.seed("file1", &["one", "old", "extra", "lines"]);
    let resource = FileResource::with_store(fixture.root(), RecordingStore::new(FsLineStore::new()));

    resource.create(&managed("file1", &["one", "two"])).unwrap();

    fixture.assert_lines("file1", &["one", "two"]);
    assert_eq!(
        resource.store().mutations(),
        vec![StoreCall::WriteLine(2, "two".into()), StoreCall::TrimFile(2)]
    );
}

#[test]
fn test_read_refreshes_from_disk() {
    let fixture = LineFixture::new();
    let resource = FileResource::new(fixture.root());
    let state = resource.create(&managed("file1", &["one", "two"])).unwrap();

    // Someone edited the file out of band.
    fixture.seed("file1", &["one", "", "three"]);

    let refreshed = resource.read(&state).unwrap().unwrap();
    assert_eq!(refreshed, managed("file1", &["one", "", "three"]));
}

#[test]
fn test_read_vanished_file_is_none() {
    let fixture = LineFixture::new();
    let resource = FileResource::new(fixture.root());

    let refreshed = resource.read(&managed("gone", &["a", "b"])).unwrap();

    assert_eq!(refreshed, None);
}

#[test]
fn test_update_reconciles_from_state() {
    let fixture = LineFixture::new();
    let resource = FileResource::with_store(fixture.root(), RecordingStore::new(FsLineStore::new()));
    let state = resource.create(&managed("file1", &["one", "two"])).unwrap();
    resource.store().clear();

    let updated = resource
        .update(&state, &managed("file1", &["two", "two", "three"]))
        .unwrap();

    assert_eq!(updated, managed("file1", &["two", "two", "three"]));
    assert_eq!(
        resource.store().mutations(),
        vec![
            StoreCall::WriteLine(1, "two".into()),
            StoreCall::WriteLine(3, "three".into()),
        ]
    );
    fixture.assert_lines("file1", &["two", "two", "three"]);
}

#[test]
fn test_update_keeps_state_file_name() {
    let fixture = LineFixture::new();
    let resource = FileResource::new(fixture.root());
    let state = resource.create(&managed("file1", &["a", "b"])).unwrap();

    let updated = resource
        .update(&state, &managed("other", &["a", "c"]))
        .unwrap();

    assert_eq!(updated.file_name, "file1");
    fixture.assert_lines("file1", &["a", "c"]);
    assert!(!fixture.exists("other"));
}

#[test]
fn test_delete_removes_file() {
    let fixture = LineFixture::new();
    let resource = FileResource::new(fixture.root());
    let state = resource.create(&managed("file1", &["a", "b"])).unwrap();

    resource.delete(&state).unwrap();

    assert!(!fixture.exists("file1"));
}

#[test]
fn test_delete_missing_file_is_already_deleted() {
    let fixture = LineFixture::new();
    let resource = FileResource::with_store(fixture.root(), RecordingStore::new(FsLineStore::new()));

    resource.delete(&managed("file1", &["a", "b"])).unwrap();

    assert_eq!(resource.store().mutations(), vec![StoreCall::RemoveFile]);
}

#[test]
fn test_delete_surfaces_other_failures() {
    let fixture = LineFixture::new();
    std::fs::create_dir(fixture.path("file1")).unwrap();
    let resource = FileResource::new(fixture.root());

    // A directory where the file should be cannot be removed as a file.
    let err = resource.delete(&managed("file1", &["a", "b"])).unwrap_err();

    assert!(matches!(err, Error::Delete { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("Unable to delete file"));
    assert!(fixture.path("file1").is_dir());
}

#[test]
fn test_create_rejects_bad_declarations() {
    let fixture = LineFixture::new();
    let resource = FileResource::new(fixture.root());

    assert!(matches!(
        resource.create(&managed("Bad-Name", &["a", "b"])),
        Err(Error::InvalidFileName { .. })
    ));
    assert!(matches!(
        resource.create(&managed("file1", &["a"])),
        Err(Error::TooFewLines { .. })
    ));
    assert!(matches!(
        resource.create(&managed("file1", &["a", "b\nc"])),
        Err(Error::InvalidLine { index: 2, .. })
    ));
    assert!(!fixture.exists("file1"));
}

#[test]
fn test_plan_without_state_uses_disk() {
    let fixture = LineFixture::new();
    fixture.seed("file1", &["a", "b", "c"]);
    let resource = FileResource::new(fixture.root());

    let plan = resource.plan(None, &managed("file1", &["a", "x"])).unwrap();

    assert_eq!(plan.writes().len(), 1);
    assert_eq!(plan.writes()[0].index, 2);
    assert_eq!(plan.trim(), Some(2));
}

#[test]
fn test_plan_with_state_ignores_disk() {
    let fixture = LineFixture::new();
    let resource = FileResource::new(fixture.root());
    let state = managed("file1", &["a", "b"]);

    let plan = resource.plan(Some(&state), &managed("file1", &["a", "b"])).unwrap();

    assert!(plan.is_empty());
}
