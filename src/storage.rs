// storage.rs

use crate::error::{Error, Result};
use crate::objective::{Objective, ObjectiveRecord};
use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where data lives when no explicit path is given. Built once in `main`
/// and passed along, so the defaults are plain values rather than module
/// globals.
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl StorageConfig {
    pub fn discover() -> Self {
        let data_dir = ProjectDirs::from("", "", "ObjectiveTodos")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_dir,
            file_name: "todo_list.json".to_string(),
        }
    }

    /// Explicit path wins; an existing directory gets the default file name
    /// appended inside it.
    pub fn resolve_path(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) if path.is_dir() => path.join(&self.file_name),
            Some(path) => path.to_path_buf(),
            None => self.data_dir.join(&self.file_name),
        }
    }
}

/// Overwrites `path` with a JSON array of objective records, one element per
/// line: `[\n` then each record followed by `,\n` (plain `\n` after the
/// last), then `]`. An empty collection writes `[\n]`.
pub fn save_objectives(objectives: &mut [Objective], path: &Path) -> Result<()> {
    debug!(count = objectives.len(), path = %path.display(), "saving objectives");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(b"[\n")?;
    let last = objectives.len().saturating_sub(1);
    for (i, obj) in objectives.iter_mut().enumerate() {
        let line = serde_json::to_string(&obj.to_record())?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(if i < last { b",\n" } else { b"\n" })?;
    }
    writer.write_all(b"]")?;
    writer.flush()?;
    Ok(())
}

pub fn load_objectives(path: &Path) -> Result<Vec<Objective>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let records: Vec<ObjectiveRecord> = serde_json::from_reader(reader)?;
    debug!(count = records.len(), path = %path.display(), "loaded objectives");
    records.iter().map(Objective::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> StorageConfig {
        StorageConfig {
            data_dir: dir.to_path_buf(),
            file_name: "todo_list.json".to_string(),
        }
    }

    fn sample() -> Objective {
        Objective::new(
            Some("01-01-2030 12:00"),
            Some("25-12-2030"),
            Some("09:30"),
            Some("Gifts"),
            Some("Buy presents"),
        )
        .unwrap()
    }

    #[test]
    fn resolve_path_prefers_explicit_file() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = config_in(tmp.path());
        let file = tmp.path().join("somewhere.json");
        assert_eq!(cfg.resolve_path(Some(&file)), file);
    }

    #[test]
    fn resolve_path_appends_file_name_inside_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = config_in(tmp.path());
        assert_eq!(
            cfg.resolve_path(Some(tmp.path())),
            tmp.path().join("todo_list.json")
        );
        assert_eq!(cfg.resolve_path(None), tmp.path().join("todo_list.json"));
    }

    #[test]
    fn empty_collection_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("todo_list.json");
        save_objectives(&mut [], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[\n]");
        assert!(load_objectives(&path).unwrap().is_empty());
    }

    #[test]
    fn saved_bytes_match_incremental_array_format() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("todo_list.json");
        let mut objectives = vec![sample(), sample()];
        save_objectives(&mut objectives, &path).unwrap();

        let record = "{\"creation_datetime\":\"01-01-2030 12:00\",\
                      \"deadline_date\":\"25-12-2030\",\
                      \"deadline_time\":\"09:30\",\
                      \"obj_theme\":\"Gifts\",\
                      \"obj_task\":\"Buy presents\"}";
        let expected = format!("[\n{record},\n{record}\n]");
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn save_then_load_preserves_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("todo_list.json");
        let mut objectives = vec![sample()];
        save_objectives(&mut objectives, &path).unwrap();

        let mut loaded = load_objectives(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].theme, "Gifts");
        assert_eq!(loaded[0].task, "Buy presents");
        assert_eq!(loaded[0].deadline_date(), "25-12-2030");
        assert_eq!(loaded[0].render(), objectives[0].render());
    }

    #[test]
    fn loading_a_missing_path_reports_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.json");
        assert!(matches!(
            load_objectives(&missing),
            Err(Error::NotFound(path)) if path == missing
        ));
    }
}
