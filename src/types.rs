//! Core types for aria2-tasks
//!
//! Records here mirror the JSON shapes returned by aria2's RPC interface.
//! Numeric fields arrive as decimal strings on the wire and are coerced
//! permissively while deserializing (see [`crate::normalize::coerce`]).
//! Derived display fields default to zero and are filled in by
//! [`crate::normalize::normalize_task`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, RpcError};
use crate::normalize::coerce;

/// Globally unique identifier of a download task
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gid(pub String);

impl Gid {
    /// Create a new Gid
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the inner identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Gid {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Gid {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Gid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task status as reported by aria2
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Currently downloading or seeding
    Active,
    /// Queued
    Waiting,
    /// Paused by the user
    Paused,
    /// Stopped because of an error
    Error,
    /// Finished
    Complete,
    /// Removed by the user
    Removed,
    /// Any status string this crate does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Whether the task has stopped for good
    ///
    /// Terminal tasks only have a download result left on the server, which is
    /// purged with a different command than the one used to stop live tasks.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Complete | TaskStatus::Error | TaskStatus::Removed
        )
    }
}

/// Embedded bittorrent metadata of a task
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BittorrentMeta {
    /// Info dictionary; absent for magnet links until metadata is fetched
    #[serde(default)]
    pub info: Option<BittorrentInfo>,
    /// File mode ("single" or "multi")
    #[serde(default)]
    pub mode: Option<String>,
}

/// Subset of the torrent info dictionary
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BittorrentInfo {
    /// Torrent name
    #[serde(default)]
    pub name: Option<String>,
}

/// A source URI of a file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FileUri {
    /// The URI itself
    #[serde(default)]
    pub uri: String,
    /// "used" or "waiting"
    #[serde(default)]
    pub status: Option<String>,
}

/// One file belonging to a task
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// 1-based file index
    #[serde(default, deserialize_with = "coerce::lenient_usize")]
    pub index: usize,
    /// Local path of the file
    #[serde(default)]
    pub path: String,
    /// File size in bytes
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    pub length: u64,
    /// Downloaded bytes
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    pub completed_length: u64,
    /// Whether the file is selected for download
    #[serde(default, deserialize_with = "coerce::lenient_bool")]
    pub selected: bool,
    /// Source URIs
    #[serde(default)]
    pub uris: Vec<FileUri>,

    /// Derived: file-name portion of `path`
    #[serde(default)]
    pub file_name: String,
    /// Derived: completed / length in percent, 0 for empty files
    #[serde(default)]
    pub complete_percent: f64,
}

/// A download task
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task identifier
    #[serde(default)]
    pub gid: Gid,
    /// Current status
    #[serde(default)]
    pub status: TaskStatus,
    /// Total size in bytes
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    pub total_length: u64,
    /// Downloaded bytes
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    pub completed_length: u64,
    /// Uploaded bytes
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    pub upload_length: u64,
    /// Download speed in bytes/sec
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    pub download_speed: u64,
    /// Upload speed in bytes/sec
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    pub upload_speed: u64,
    /// Number of pieces
    #[serde(default, deserialize_with = "coerce::lenient_usize")]
    pub num_pieces: usize,
    /// Hex-encoded piece bitfield
    #[serde(default)]
    pub bitfield: Option<String>,
    /// Files of the task
    #[serde(default)]
    pub files: Vec<FileEntry>,
    /// Bittorrent metadata, for torrent tasks
    #[serde(default)]
    pub bittorrent: Option<BittorrentMeta>,
    /// Fields this crate does not interpret, kept for the UI layer
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,

    /// Derived: completed / total in percent, 0 when total is 0
    #[serde(default)]
    pub complete_percent: f64,
    /// Derived: 100 - complete_percent
    #[serde(default)]
    pub remain_percent: f64,
    /// Derived: bytes left
    #[serde(default)]
    pub remain_length: u64,
    /// Derived: upload / completed, `None` while nothing has been downloaded
    #[serde(default)]
    pub share_ratio: Option<f64>,
    /// Derived: no download traffic
    #[serde(default)]
    pub idle: bool,
    /// Derived: estimated seconds left, 0 when idle
    #[serde(default)]
    pub remain_time: f64,
    /// Derived: display name
    #[serde(default)]
    pub task_name: String,
}

/// A peer of a bittorrent task
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    /// Percent-encoded peer id
    #[serde(default)]
    pub peer_id: Option<String>,
    /// Peer address
    #[serde(default)]
    pub ip: Option<String>,
    /// Peer port
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    pub port: u64,
    /// Hex-encoded piece bitfield of the peer
    #[serde(default)]
    pub bitfield: String,
    /// Whether the peer is a seeder
    #[serde(default, deserialize_with = "coerce::lenient_bool")]
    pub seeder: bool,
    /// Download speed from this peer in bytes/sec
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    pub download_speed: u64,
    /// Upload speed to this peer in bytes/sec
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    pub upload_speed: u64,

    /// Derived: estimated completion of the peer in percent
    #[serde(default)]
    pub complete_percent: f64,
}

/// A maximal run of pieces sharing the same completion state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRun {
    /// Whether the pieces in this run are downloaded
    pub completed: bool,
    /// Number of pieces in the run, at least 1
    pub length: usize,
}

/// Outcome of a multi-task command for one task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemResult {
    /// Task the command was applied to
    pub gid: Gid,
    /// Whether the command succeeded for this task
    pub success: bool,
    /// Error reported for this task, if any
    #[serde(default)]
    pub error: Option<RpcError>,
}

impl BatchItemResult {
    /// A successful item
    pub fn ok(gid: Gid) -> Self {
        Self {
            gid,
            success: true,
            error: None,
        }
    }

    /// A failed item
    pub fn failed(gid: Gid, error: RpcError) -> Self {
        Self {
            gid,
            success: false,
            error: Some(error),
        }
    }
}

/// Aggregated outcome of a multi-task command
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// At least one item succeeded
    pub has_success: bool,
    /// At least one item failed
    pub has_error: bool,
    /// Per-item outcomes
    pub results: Vec<BatchItemResult>,
}

impl BatchResult {
    /// Build a result from per-item outcomes, deriving the flags
    pub fn from_items(results: Vec<BatchItemResult>) -> Self {
        Self {
            has_success: results.iter().any(|r| r.success),
            has_error: results.iter().any(|r| !r.success),
            results,
        }
    }

    /// Append another result's items and combine the flags
    pub fn merge(&mut self, other: BatchResult) {
        self.has_success = self.has_success || other.has_success;
        self.has_error = self.has_error || other.has_error;
        self.results.extend(other.results);
    }
}

/// Category of tasks to list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskListKind {
    /// Active tasks (`tellActive`)
    Downloading,
    /// Queued and paused tasks (`tellWaiting`)
    Waiting,
    /// Finished, failed and removed tasks (`tellStopped`)
    Stopped,
}

impl std::str::FromStr for TaskListKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "downloading" => Ok(TaskListKind::Downloading),
            "waiting" => Ok(TaskListKind::Waiting),
            "stopped" => Ok(TaskListKind::Stopped),
            other => Err(Error::InvalidListKind(other.to_string())),
        }
    }
}

/// How a queue position is interpreted by `changePosition`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionMode {
    /// Absolute position from the head of the queue
    #[default]
    #[serde(rename = "POS_SET")]
    PosSet,
    /// Relative to the current position
    #[serde(rename = "POS_CUR")]
    PosCur,
    /// Relative to the end of the queue
    #[serde(rename = "POS_END")]
    PosEnd,
}

impl PositionMode {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionMode::PosSet => "POS_SET",
            PositionMode::PosCur => "POS_CUR",
            PositionMode::PosEnd => "POS_END",
        }
    }
}

impl std::str::FromStr for PositionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POS_SET" => Ok(PositionMode::PosSet),
            "POS_CUR" => Ok(PositionMode::PosCur),
            "POS_END" => Ok(PositionMode::PosEnd),
            other => Err(Error::InvalidPositionMode(other.to_string())),
        }
    }
}
