use crate::db::{init_db, kv};
use crate::logger;
use crate::models::QuizState;
use rusqlite::Connection;
use std::path::Path;

pub const STATE_KEY: &str = "quizzer_state_v1";

/// Namespaced key under which a deck's progress is kept. The built-in deck
/// uses the bare key.
pub fn state_key(deck: Option<&str>) -> String {
    match deck {
        Some(name) => format!("{}:{}", STATE_KEY, name),
        None => STATE_KEY.to_string(),
    }
}

/// Best-effort persistence of quiz progress. Every failure is logged and
/// swallowed; without a connection the quiz simply runs in memory.
#[derive(Debug)]
pub struct ProgressStore {
    conn: Option<Connection>,
    key: String,
}

impl ProgressStore {
    pub fn open(db_path: &Path, key: String) -> Self {
        match init_db(db_path) {
            Ok(conn) => Self {
                conn: Some(conn),
                key,
            },
            Err(e) => {
                logger::warn(&format!(
                    "Could not open progress database {}: {}; continuing without persistence",
                    db_path.display(),
                    e
                ));
                Self::disabled(key)
            }
        }
    }

    pub fn with_connection(conn: Connection, key: String) -> Self {
        Self {
            conn: Some(conn),
            key,
        }
    }

    pub fn disabled(key: String) -> Self {
        Self { conn: None, key }
    }

    pub fn is_enabled(&self) -> bool {
        self.conn.is_some()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the saved state. Missing, unreadable, or malformed data all come
    /// back as `None`.
    pub fn load(&self) -> Option<QuizState> {
        let conn = self.conn.as_ref()?;
        let raw = match kv::get_value(conn, &self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                logger::warn(&format!("Could not read quiz progress: {}", e));
                return None;
            }
        };
        match serde_json::from_str::<QuizState>(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                logger::warn(&format!("Ignoring malformed quiz progress: {}", e));
                None
            }
        }
    }

    pub fn save(&self, state: &QuizState) {
        let Some(conn) = self.conn.as_ref() else {
            return;
        };
        let result = serde_json::to_string(state)
            .map_err(|e| e.to_string())
            .and_then(|json| kv::set_value(conn, &self.key, &json).map_err(|e| e.to_string()));
        if let Err(e) = result {
            logger::warn(&format!("Could not persist quiz progress: {}", e));
        }
    }

    pub fn clear(&self) {
        if let Some(conn) = self.conn.as_ref()
            && let Err(e) = kv::delete_value(conn, &self.key)
        {
            logger::warn(&format!("Could not clear quiz progress: {}", e));
        }
    }
}
