use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Slot keys, one per collection.
pub const APPLICATIONS: &str = "applications";
pub const REJECTIONS: &str = "rejections";
pub const DOCUMENTS: &str = "documents";
pub const JOURNAL: &str = "journal";

/// Durable key-value store: each slot holds one collection serialized as a
/// JSON array. Backed by a single-table sqlite database in the user's data
/// directory.
pub struct SlotStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SlotStore {
    pub fn open() -> Result<Self> {
        let path = Self::default_path()?;
        Self::open_at(&path)
    }

    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open store at {}", path.display()))?;
        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.init()?;
        Ok(store)
    }

    #[allow(dead_code)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn, path: None };
        store.init()?;
        Ok(store)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn default_path() -> Result<PathBuf> {
        // XDG data directory or fallback to the working directory
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "khoj") {
            Ok(proj_dirs.data_dir().join("khoj.db"))
        } else {
            Ok(PathBuf::from("khoj.db"))
        }
    }

    fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Load a collection from its slot. A missing slot, an unreadable slot,
    /// or a value that fails to parse all yield an empty collection.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw: Option<String> = match self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!(slot = key, error = %e, "failed to read slot, starting empty");
                return Vec::new();
            }
        };

        let Some(raw) = raw else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(slot = key, error = %e, "slot failed to parse, starting empty");
                Vec::new()
            }
        }
    }

    /// Write the full collection back to its slot. A failed write is retried
    /// once before the error is handed back to the caller.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let value = serde_json::to_string(items)
            .with_context(|| format!("Failed to serialize slot '{}'", key))?;

        if let Err(e) = self.write_slot(key, &value) {
            warn!(slot = key, error = %e, "slot write failed, retrying");
            self.write_slot(key, &value)
                .with_context(|| format!("Failed to persist slot '{}'", key))?;
        }
        Ok(())
    }

    fn write_slot(&self, key: &str, value: &str) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Application, ApplicationStatus};

    fn app(id: &str, company: &str) -> Application {
        Application {
            id: id.to_string(),
            company: company.to_string(),
            position: "Engineer".to_string(),
            status: ApplicationStatus::Applied,
            applied_date: "2024-01-10".to_string(),
            last_update: "2024-01-10".to_string(),
            salary: None,
            location: None,
            job_url: None,
            notes: None,
            interview_date: None,
            follow_up_date: None,
            source: None,
        }
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let store = SlotStore::open_in_memory().unwrap();
        let apps: Vec<Application> = store.load(APPLICATIONS);
        assert!(apps.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = SlotStore::open_in_memory().unwrap();
        let apps = vec![app("1", "Acme"), app("2", "Globex")];
        store.save(APPLICATIONS, &apps).unwrap();

        let loaded: Vec<Application> = store.load(APPLICATIONS);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "1");
        assert_eq!(loaded[1].company, "Globex");

        // saving what was just loaded yields an identical collection
        store.save(APPLICATIONS, &loaded).unwrap();
        let again: Vec<Application> = store.load(APPLICATIONS);
        assert_eq!(
            serde_json::to_string(&loaded).unwrap(),
            serde_json::to_string(&again).unwrap()
        );
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        let store = SlotStore::open_in_memory().unwrap();
        store.write_slot(APPLICATIONS, "not json at all {{").unwrap();
        let apps: Vec<Application> = store.load(APPLICATIONS);
        assert!(apps.is_empty());
    }

    #[test]
    fn test_slots_are_independent() {
        let store = SlotStore::open_in_memory().unwrap();
        store.save(APPLICATIONS, &[app("1", "Acme")]).unwrap();

        let rejections: Vec<crate::models::RejectionEntry> = store.load(REJECTIONS);
        assert!(rejections.is_empty());
        let apps: Vec<Application> = store.load(APPLICATIONS);
        assert_eq!(apps.len(), 1);
    }

    #[test]
    fn test_open_at_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("khoj.db");

        {
            let store = SlotStore::open_at(&path).unwrap();
            store.save(APPLICATIONS, &[app("1", "Acme")]).unwrap();
        }

        let store = SlotStore::open_at(&path).unwrap();
        let apps: Vec<Application> = store.load(APPLICATIONS);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].company, "Acme");
    }
}
