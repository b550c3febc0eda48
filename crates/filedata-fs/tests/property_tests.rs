use filedata_fs::{FsLineStore, LineBuffer, LineStore, RobustnessConfig};
use proptest::prelude::*;

fn line() -> impl Strategy<Value = String> {
    // Any printable text without line breaks.
    "[^\r\n]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn written_lines_read_back(lines in prop::collection::vec(line(), 1..12)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data");
        let store = FsLineStore::with_robustness(RobustnessConfig { enable_fsync: false });

        for (i, text) in lines.iter().enumerate() {
            store.write_line(&path, i + 1, text).unwrap();
        }

        prop_assert_eq!(store.line_count(&path).unwrap(), lines.len());
        for (i, text) in lines.iter().enumerate() {
            prop_assert_eq!(store.read_line(&path, i + 1).unwrap(), Some(text.clone()));
        }
        prop_assert_eq!(store.read_line(&path, lines.len() + 1).unwrap(), None);
    }

    #[test]
    fn buffer_matches_per_call_writes(
        seed in prop::collection::vec(line(), 0..8),
        edits in prop::collection::vec((1usize..12, line()), 1..6),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let direct = dir.path().join("direct");
        let batched = dir.path().join("batched");
        let config = RobustnessConfig { enable_fsync: false };
        let store = FsLineStore::with_robustness(config);

        for (i, text) in seed.iter().enumerate() {
            store.write_line(&direct, i + 1, text).unwrap();
            store.write_line(&batched, i + 1, text).unwrap();
        }

        let mut buffer = LineBuffer::open(&batched).unwrap().with_robustness(config);
        for (index, text) in &edits {
            store.write_line(&direct, *index, text).unwrap();
            buffer.set(*index, text).unwrap();
        }
        buffer.commit().unwrap();

        prop_assert_eq!(
            std::fs::read(&direct).unwrap(),
            std::fs::read(&batched).unwrap()
        );
    }
}
