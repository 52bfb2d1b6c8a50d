//! High score reporting
//!
//! The simulation emits a terminal score; this collaborator owns the
//! "is this a new high score" comparison and persistence. Storage is an
//! injected capability so the core never sees tokens or protocol details -
//! the browser build keeps the record in LocalStorage.

use serde::{Deserialize, Serialize};

/// Persisted high score record. Field names match the remote file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub high_score: u64,
    pub player_name: String,
    pub date: String,
}

/// Opaque persistence capability for the high score record.
///
/// Implementations absorb their own failures; `store` is fire-and-forget.
pub trait ScoreStore {
    fn load(&self) -> Option<ScoreRecord>;
    fn store(&self, record: &ScoreRecord);
}

/// Store that keeps nothing. Used when no session capability is available.
pub struct NullStore;

impl ScoreStore for NullStore {
    fn load(&self) -> Option<ScoreRecord> {
        None
    }

    fn store(&self, _record: &ScoreRecord) {}
}

/// Tracks the best run and pushes improvements to the injected store.
pub struct ScoreBoard {
    record: Option<ScoreRecord>,
    store: Box<dyn ScoreStore>,
}

impl ScoreBoard {
    /// Seed the board from whatever the store currently holds.
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        let record = store.load();
        match &record {
            Some(r) => log::info!("Loaded high score {} ({})", r.high_score, r.player_name),
            None => log::info!("No high score record found, starting fresh"),
        }
        Self { record, store }
    }

    /// Current best score (0 when no record exists)
    pub fn best(&self) -> u64 {
        self.record.as_ref().map(|r| r.high_score).unwrap_or(0)
    }

    /// Name attached to the current record
    pub fn holder(&self) -> Option<&str> {
        self.record.as_ref().map(|r| r.player_name.as_str())
    }

    /// Report a finished run. Scores at or below the current best are
    /// ignored; an improvement updates the record and persists it.
    pub fn report(&mut self, score: u64, label: &str) {
        if score <= self.best() {
            return;
        }

        let record = ScoreRecord {
            high_score: score,
            player_name: label.to_string(),
            date: date_stamp(),
        };
        self.store.store(&record);
        log::info!("New high score: {score} ({label})");
        self.record = Some(record);
    }
}

#[cfg(target_arch = "wasm32")]
fn date_stamp() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(not(target_arch = "wasm32"))]
fn date_stamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
        .to_string()
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    const STORAGE_KEY: &'static str = "gravity_flip_scores";
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStore {
    fn load(&self) -> Option<ScoreRecord> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let json = storage.get_item(Self::STORAGE_KEY).ok()??;
        match serde_json::from_str(&json) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Discarding unreadable score record: {err}");
                None
            }
        }
    }

    fn store(&self, record: &ScoreRecord) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match serde_json::to_string(record) {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                        log::warn!("Failed to persist high score");
                    }
                }
                Err(err) => log::warn!("Failed to serialize high score: {err}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct MemStore {
        record: Rc<RefCell<Option<ScoreRecord>>>,
    }

    impl ScoreStore for MemStore {
        fn load(&self) -> Option<ScoreRecord> {
            self.record.borrow().clone()
        }

        fn store(&self, record: &ScoreRecord) {
            *self.record.borrow_mut() = Some(record.clone());
        }
    }

    #[test]
    fn test_empty_board_reports_zero_best() {
        let board = ScoreBoard::new(Box::new(NullStore));
        assert_eq!(board.best(), 0);
        assert_eq!(board.holder(), None);
    }

    #[test]
    fn test_report_persists_improvement() {
        let slot = Rc::new(RefCell::new(None));
        let store = MemStore {
            record: slot.clone(),
        };
        let mut board = ScoreBoard::new(Box::new(store));

        board.report(12, "Ada");
        assert_eq!(board.best(), 12);
        assert_eq!(board.holder(), Some("Ada"));
        assert_eq!(slot.borrow().as_ref().map(|r| r.high_score), Some(12));
    }

    #[test]
    fn test_report_ignores_non_improvements() {
        let slot = Rc::new(RefCell::new(None));
        let store = MemStore {
            record: slot.clone(),
        };
        let mut board = ScoreBoard::new(Box::new(store));

        board.report(0, "Ada");
        assert!(slot.borrow().is_none());

        board.report(12, "Ada");
        board.report(12, "Bob");
        board.report(5, "Bob");
        assert_eq!(board.best(), 12);
        assert_eq!(board.holder(), Some("Ada"));
    }

    #[test]
    fn test_board_seeds_from_store() {
        let slot = Rc::new(RefCell::new(Some(ScoreRecord {
            high_score: 40,
            player_name: "Ada".into(),
            date: "2026-01-01".into(),
        })));
        let store = MemStore {
            record: slot.clone(),
        };
        let mut board = ScoreBoard::new(Box::new(store));
        assert_eq!(board.best(), 40);

        board.report(39, "Bob");
        assert_eq!(board.holder(), Some("Ada"));
        board.report(41, "Bob");
        assert_eq!(board.holder(), Some("Bob"));
    }

    #[test]
    fn test_record_wire_field_names() {
        let record = ScoreRecord {
            high_score: 7,
            player_name: "Ada".into(),
            date: "2026-02-03".into(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"highScore\":7"));
        assert!(json.contains("\"playerName\":\"Ada\""));
        assert!(json.contains("\"date\":\"2026-02-03\""));

        let back: ScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
