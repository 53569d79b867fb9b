#[cfg(test)]
mod tests {
    use asciipal::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            StorageTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_get_path_creates_base_directory(ctx: &mut StorageTestContext) {
        let base = ctx.temp_dir.path().join("asciipal");
        let storage = DataStorage::with_base(&base);
        assert!(!base.exists());

        let path = storage.get_path("stats.json").unwrap();
        assert!(base.is_dir());
        assert_eq!(path, base.join("stats.json"));
        assert_eq!(storage.base_path(), base.as_path());
    }

    #[test]
    fn test_default_location_ends_with_app_name() {
        assert!(DataStorage::new().base_path().ends_with("asciipal"));
    }
}
