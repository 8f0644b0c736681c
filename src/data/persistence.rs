use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A YAML document stored under a fixed file name inside a data directory.
pub trait Persistable: Sized + Default + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;

    fn path_in(dir: &Path) -> PathBuf {
        dir.join(Self::filename())
    }

    /// Missing or empty files yield `Self::default()`.
    fn load_from(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        if !path.exists() {
            log::debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_norway::from_str(&contents)
            .with_context(|| format!("failed to parse YAML from {}", path.display()))
    }

    fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create dir {}", dir.display()))?;
        let path = Self::path_in(dir);
        let contents = serde_norway::to_string(self).context("failed to serialize YAML")?;
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DatepickerOptions;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
    struct TestYamlData {
        count: u32,
    }

    impl Persistable for TestYamlData {
        fn filename() -> &'static str {
            "test_data.yaml"
        }
    }

    #[test]
    fn test_load_from_returns_default_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let result = TestYamlData::load_from(tmp.path()).unwrap();
        assert_eq!(result, TestYamlData::default());
    }

    #[test]
    fn test_load_from_returns_default_when_file_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("test_data.yaml"), "\n").unwrap();
        let result = TestYamlData::load_from(tmp.path()).unwrap();
        assert_eq!(result, TestYamlData::default());
    }

    #[test]
    fn test_save_to_and_load_from_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let data = TestYamlData { count: 99 };
        data.save_to(tmp.path()).unwrap();
        let loaded = TestYamlData::load_from(tmp.path()).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_save_to_creates_directory_if_missing() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        TestYamlData { count: 1 }.save_to(&nested).unwrap();
        assert!(nested.join("test_data.yaml").exists());
    }

    #[test]
    fn test_malformed_yaml_reports_path() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("test_data.yaml"), "count: [not a number").unwrap();
        let err = TestYamlData::load_from(tmp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("test_data.yaml"));
    }

    #[test]
    fn test_options_save_to_load_from() {
        let tmp = TempDir::new().unwrap();
        let opts = DatepickerOptions {
            first_calendar_day: Some(1),
            max_date: NaiveDate::from_ymd_opt(2030, 12, 31),
            ..DatepickerOptions::with_defaults()
        };
        opts.save_to(tmp.path()).unwrap();
        let loaded = DatepickerOptions::load_from(tmp.path()).unwrap();
        assert_eq!(loaded, opts);
    }
}
