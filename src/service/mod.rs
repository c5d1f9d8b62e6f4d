//! Task service: the operations the UI layer calls.
//!
//! [`TaskService`] wires the RPC collaborator, the localizer and the
//! configuration together and exposes one method per user-facing operation.
//! Queries and single-task commands live here; multi-task commands, including
//! the split removal, live in [`dispatch`].

mod dispatch;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::localize::Localizer;
use crate::normalize;
use crate::pieces;
use crate::rpc::{CallOptions, RpcClient, TaskOptions};
use crate::types::{Gid, Peer, PieceRun, Task, TaskListKind};

/// Option key holding the comma-separated list of selected file indexes
pub const SELECT_FILE_OPTION: &str = "select-file";

/// Front-end service over an aria2 RPC collaborator
///
/// Cheap to clone; clones share the collaborator, localizer and config.
#[derive(Clone)]
pub struct TaskService {
    rpc: Arc<dyn RpcClient>,
    localizer: Arc<dyn Localizer>,
    config: Arc<Config>,
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TaskService {
    /// Create a service from its collaborators
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the configuration does not validate.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aria2_tasks::*;
    /// # use std::sync::Arc;
    /// # async fn example(rpc: Arc<dyn RpcClient>) -> Result<()> {
    /// let service = TaskService::new(rpc, Arc::new(KeyLocalizer), Config::default())?;
    /// let task = service.get_task_status(&Gid::from("2089b05ecca3d829"), CallOptions::default()).await?;
    /// println!("{} is {:.1}% done", task.task_name, task.complete_percent);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        rpc: Arc<dyn RpcClient>,
        localizer: Arc<dyn Localizer>,
        config: Config,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            rpc,
            localizer,
            config: Arc::new(config),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn unknown_name(&self) -> String {
        self.localizer.translate(&self.config.unknown_name_key)
    }

    /// List tasks of one category
    ///
    /// `full` requests the complete record (files, bitfield, torrent info)
    /// instead of the compact list keys. Tasks come back as the collaborator
    /// returned them; call [`TaskService::process_download_tasks`] to fill in
    /// the derived fields.
    pub async fn get_task_list(
        &self,
        kind: TaskListKind,
        full: bool,
        call: CallOptions,
    ) -> Result<Vec<Task>> {
        let keys = self.config.task_keys(full);
        tracing::debug!(kind = ?kind, full, "Listing tasks");

        let result = match kind {
            TaskListKind::Downloading => self.rpc.tell_active(keys, call).await,
            TaskListKind::Waiting => self.rpc.tell_waiting(keys, call).await,
            TaskListKind::Stopped => self.rpc.tell_stopped(keys, call).await,
        };

        result.inspect_err(|e| tracing::warn!(kind = ?kind, error = %e, "Task list request failed"))
    }

    /// Fetch one task with its derived fields filled in
    pub async fn get_task_status(&self, gid: &Gid, call: CallOptions) -> Result<Task> {
        let mut task = self
            .rpc
            .tell_status(gid, call)
            .await
            .inspect_err(|e| tracing::warn!(gid = %gid, error = %e, "Task status request failed"))?;

        normalize::normalize_task(Some(&mut task), &self.unknown_name());
        Ok(task)
    }

    /// Fetch the options of one task
    pub async fn get_task_options(&self, gid: &Gid, call: CallOptions) -> Result<TaskOptions> {
        self.rpc
            .get_option(gid, call)
            .await
            .inspect_err(|e| tracing::warn!(gid = %gid, error = %e, "Task options request failed"))
    }

    /// Change a single option of one task
    pub async fn set_task_option(
        &self,
        gid: &Gid,
        key: &str,
        value: &str,
        call: CallOptions,
    ) -> Result<()> {
        let options = TaskOptions::from([(key.to_string(), value.to_string())]);
        tracing::debug!(gid = %gid, key, value, "Changing task option");
        self.rpc
            .change_option(gid, &options, call)
            .await
            .inspect_err(|e| tracing::warn!(gid = %gid, key, error = %e, "Changing task option failed"))
    }

    /// Select which files of a task are downloaded
    ///
    /// `indexes` are the 1-based file indexes, sent as a comma-joined list.
    pub async fn select_task_file(
        &self,
        gid: &Gid,
        indexes: &[usize],
        call: CallOptions,
    ) -> Result<()> {
        let selected = indexes
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(",");

        self.set_task_option(gid, SELECT_FILE_OPTION, &selected, call)
            .await
    }

    /// Fetch the peers of a torrent task with their estimated completion
    pub async fn get_bt_task_peers(&self, gid: &Gid, call: CallOptions) -> Result<Vec<Peer>> {
        let mut peers = self
            .rpc
            .get_peers(gid, call)
            .await
            .inspect_err(|e| tracing::warn!(gid = %gid, error = %e, "Peer list request failed"))?;

        for peer in &mut peers {
            peer.complete_percent = pieces::estimate_completed_ratio(&peer.bitfield) * 100.0;
        }

        Ok(peers)
    }

    /// Move a task within the waiting queue
    ///
    /// Resolves to the position reported by aria2.
    pub async fn change_task_position(
        &self,
        gid: &Gid,
        position: i64,
        call: CallOptions,
    ) -> Result<i64> {
        let how = self.config.position_mode;
        tracing::debug!(gid = %gid, position, how = how.as_str(), "Changing task position");
        self.rpc
            .change_position(gid, position, how, call)
            .await
            .inspect_err(|e| tracing::warn!(gid = %gid, position, error = %e, "Changing task position failed"))
    }

    /// Drop the stored results of all stopped tasks
    pub async fn clear_stopped_tasks(&self, call: CallOptions) -> Result<()> {
        self.rpc
            .purge_download_result(call)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Purging stopped task results failed"))
    }

    /// Fill in the derived fields of one task; `None` passes through
    pub fn process_download_task<'a>(&self, task: Option<&'a mut Task>) -> Option<&'a mut Task> {
        normalize::normalize_task(task, &self.unknown_name())
    }

    /// Fill in the derived fields of every task in a list
    pub fn process_download_tasks(&self, tasks: &mut [Task]) {
        normalize::normalize_tasks(tasks, &self.unknown_name());
    }

    /// Decode a piece bitfield; a missing bitfield yields no pieces
    pub fn get_piece_status(&self, bitfield: Option<&str>, piece_count: usize) -> Vec<bool> {
        bitfield
            .map(|b| pieces::decode_bitfield(b, piece_count))
            .unwrap_or_default()
    }

    /// Decode a piece bitfield into runs for the piece map view
    pub fn get_combined_pieces(&self, bitfield: Option<&str>, piece_count: usize) -> Vec<PieceRun> {
        pieces::compress_runs(&self.get_piece_status(bitfield, piece_count))
    }

    /// Estimate how much of a task the swarm can still complete, in percent
    pub fn estimate_health_percent_from_peers(&self, task: &Task, peers: &[Peer]) -> f64 {
        pieces::estimate_health_percent(task, peers)
    }
}
