//! RPC collaborator interface
//!
//! The transport to aria2 (JSON-RPC over HTTP or WebSocket, request envelopes,
//! retries, error notifications) lives outside this crate. [`RpcClient`] is
//! the seam the task service talks through: one async method per remote
//! operation, each resolving exactly once.
//!
//! Single-task calls resolve to a [`Result`] whose error side is the
//! collaborator's error envelope ([`crate::Error::Rpc`]). Multi-task calls
//! resolve to a [`BatchResult`] carrying per-task outcomes, because aria2
//! executes them as a multicall where each entry succeeds or fails on its own.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::types::{BatchResult, Gid, Peer, PositionMode, Task};

/// Remote method names
pub mod methods {
    /// List active tasks
    pub const TELL_ACTIVE: &str = "aria2.tellActive";
    /// List waiting tasks
    pub const TELL_WAITING: &str = "aria2.tellWaiting";
    /// List stopped tasks
    pub const TELL_STOPPED: &str = "aria2.tellStopped";
    /// Single task status
    pub const TELL_STATUS: &str = "aria2.tellStatus";
    /// Task options
    pub const GET_OPTION: &str = "aria2.getOption";
    /// Change task options
    pub const CHANGE_OPTION: &str = "aria2.changeOption";
    /// Peers of a torrent task
    pub const GET_PEERS: &str = "aria2.getPeers";
    /// Resume tasks
    pub const UNPAUSE: &str = "aria2.unpause";
    /// Pause tasks without waiting for trackers
    pub const FORCE_PAUSE: &str = "aria2.forcePause";
    /// Stop and remove live tasks
    pub const FORCE_REMOVE: &str = "aria2.forceRemove";
    /// Drop the stored result of a stopped task
    pub const REMOVE_DOWNLOAD_RESULT: &str = "aria2.removeDownloadResult";
    /// Move a task in the queue
    pub const CHANGE_POSITION: &str = "aria2.changePosition";
    /// Drop all stored results of stopped tasks
    pub const PURGE_DOWNLOAD_RESULT: &str = "aria2.purgeDownloadResult";
}

/// Task options as a flat string map
pub type TaskOptions = BTreeMap<String, String>;

/// Per-call options handed to the collaborator untouched
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Do not surface a failure of this call to the user
    pub suppress_error_notification: bool,
}

impl CallOptions {
    /// Options for a background call whose failures stay quiet
    pub fn silent() -> Self {
        Self {
            suppress_error_notification: true,
        }
    }
}

/// Invokes remote operations on an aria2 instance
///
/// Implementations own transport, timeouts and retries. Every method must
/// complete exactly once; there is no cancellation.
#[async_trait]
pub trait RpcClient: Send + Sync {
    /// `aria2.tellActive` restricted to `keys`
    async fn tell_active(&self, keys: &[String], call: CallOptions) -> Result<Vec<Task>>;

    /// `aria2.tellWaiting` restricted to `keys`
    async fn tell_waiting(&self, keys: &[String], call: CallOptions) -> Result<Vec<Task>>;

    /// `aria2.tellStopped` restricted to `keys`
    async fn tell_stopped(&self, keys: &[String], call: CallOptions) -> Result<Vec<Task>>;

    /// `aria2.tellStatus` for one task
    async fn tell_status(&self, gid: &Gid, call: CallOptions) -> Result<Task>;

    /// `aria2.getOption` for one task
    async fn get_option(&self, gid: &Gid, call: CallOptions) -> Result<TaskOptions>;

    /// `aria2.changeOption` for one task
    async fn change_option(&self, gid: &Gid, options: &TaskOptions, call: CallOptions) -> Result<()>;

    /// `aria2.getPeers` for one task
    async fn get_peers(&self, gid: &Gid, call: CallOptions) -> Result<Vec<Peer>>;

    /// `aria2.unpause` for every task in `gids`
    async fn unpause_multi(&self, gids: &[Gid], call: CallOptions) -> BatchResult;

    /// `aria2.forcePause` for every task in `gids`
    async fn force_pause_multi(&self, gids: &[Gid], call: CallOptions) -> BatchResult;

    /// `aria2.forceRemove` for every task in `gids`
    async fn force_remove_multi(&self, gids: &[Gid], call: CallOptions) -> BatchResult;

    /// `aria2.removeDownloadResult` for every task in `gids`
    async fn remove_download_result_multi(&self, gids: &[Gid], call: CallOptions) -> BatchResult;

    /// `aria2.changePosition`; resolves to the resulting position
    async fn change_position(
        &self,
        gid: &Gid,
        pos: i64,
        how: PositionMode,
        call: CallOptions,
    ) -> Result<i64>;

    /// `aria2.purgeDownloadResult`
    async fn purge_download_result(&self, call: CallOptions) -> Result<()>;
}
