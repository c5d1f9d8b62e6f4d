//! Configuration types for aria2-tasks

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::PositionMode;

/// Task service configuration
///
/// Every field has a default, so an empty document deserializes to
/// [`Config::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Keys requested from `tellActive`/`tellWaiting`/`tellStopped` for the
    /// compact list view
    #[serde(default = "default_basic_task_keys")]
    pub basic_task_keys: Vec<String>,

    /// Keys requested when the full task record is wanted
    #[serde(default = "default_full_task_keys")]
    pub full_task_keys: Vec<String>,

    /// Localization key of the placeholder used when a task has no name
    /// (default: "Unknown")
    #[serde(default = "default_unknown_name_key")]
    pub unknown_name_key: String,

    /// How `change_task_position` interprets positions (default: POS_SET)
    #[serde(default)]
    pub position_mode: PositionMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            basic_task_keys: default_basic_task_keys(),
            full_task_keys: default_full_task_keys(),
            unknown_name_key: default_unknown_name_key(),
            position_mode: PositionMode::default(),
        }
    }
}

impl Config {
    /// Keys to request for a task list
    pub fn task_keys(&self, full: bool) -> &[String] {
        if full {
            &self.full_task_keys
        } else {
            &self.basic_task_keys
        }
    }

    /// Check that both key lists request the fields the service relies on
    ///
    /// `gid` and `status` are needed to route tasks through the batch
    /// commands.
    pub fn validate(&self) -> Result<()> {
        for (key, list) in [
            ("basic_task_keys", &self.basic_task_keys),
            ("full_task_keys", &self.full_task_keys),
        ] {
            for required in ["gid", "status"] {
                if !list.iter().any(|k| k == required) {
                    return Err(Error::Config {
                        message: format!("{} must include \"{}\"", key, required),
                        key: Some(key.to_string()),
                    });
                }
            }
        }

        if self.unknown_name_key.is_empty() {
            return Err(Error::Config {
                message: "unknown_name_key must not be empty".to_string(),
                key: Some("unknown_name_key".to_string()),
            });
        }

        Ok(())
    }
}

const BASIC_TASK_KEYS: &[&str] = &[
    "gid",
    "totalLength",
    "completedLength",
    "uploadSpeed",
    "downloadSpeed",
    "connections",
    "numSeeders",
    "seeder",
    "status",
    "errorCode",
];

const FULL_ONLY_TASK_KEYS: &[&str] = &[
    "files",
    "bittorrent",
    "numPieces",
    "bitfield",
    "uploadLength",
    "infoHash",
    "dir",
    "pieceLength",
];

fn default_basic_task_keys() -> Vec<String> {
    BASIC_TASK_KEYS.iter().map(|k| k.to_string()).collect()
}

fn default_full_task_keys() -> Vec<String> {
    BASIC_TASK_KEYS
        .iter()
        .chain(FULL_ONLY_TASK_KEYS)
        .map(|k| k.to_string())
        .collect()
}

fn default_unknown_name_key() -> String {
    "Unknown".to_string()
}
