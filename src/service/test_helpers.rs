//! Shared test helpers for exercising TaskService against a scripted collaborator.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Barrier;

use crate::config::Config;
use crate::error::{Error, Result, RpcError};
use crate::localize::KeyLocalizer;
use crate::rpc::{CallOptions, RpcClient, TaskOptions, methods};
use crate::service::TaskService;
use crate::types::{BatchItemResult, BatchResult, Gid, Peer, PositionMode, Task, TaskStatus};

/// One invocation seen by the mock
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RecordedCall {
    pub method: &'static str,
    pub gids: Vec<Gid>,
    pub params: serde_json::Value,
    pub call: CallOptions,
}

/// Scripted RpcClient that records every call
///
/// Multi-task commands succeed for every gid unless a failure is scripted for
/// that gid. Single-task queries answer from the configured fixtures or fail
/// with a "not found" envelope.
#[derive(Default)]
pub(crate) struct MockRpcClient {
    pub calls: Mutex<Vec<RecordedCall>>,
    pub tasks: Vec<Task>,
    pub peers: Vec<Peer>,
    pub options: TaskOptions,
    pub failing_gids: Vec<Gid>,
    pub fail_queries: bool,
    /// Artificial latency per method, for ordering tests under paused time
    pub delays: HashMap<&'static str, Duration>,
    /// When set, every multi-task command waits here before answering
    pub barrier: Option<Arc<Barrier>>,
}

impl MockRpcClient {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method)
            .collect()
    }

    fn record(&self, method: &'static str, gids: &[Gid], params: serde_json::Value, call: CallOptions) {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            gids: gids.to_vec(),
            params,
            call,
        });
    }

    fn query_error(&self, method: &'static str, gid: Option<&Gid>) -> Option<Error> {
        if self.fail_queries {
            let message = match gid {
                Some(gid) => format!("GID {} is not found", gid),
                None => "Unauthorized".to_string(),
            };
            return Some(Error::rpc(method, RpcError::new(Some(1), message)));
        }
        None
    }

    async fn multi(&self, method: &'static str, gids: &[Gid], call: CallOptions) -> BatchResult {
        self.record(method, gids, serde_json::Value::Null, call);

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some(delay) = self.delays.get(method) {
            tokio::time::sleep(*delay).await;
        }

        BatchResult::from_items(
            gids.iter()
                .map(|gid| {
                    if self.failing_gids.contains(gid) {
                        BatchItemResult::failed(
                            gid.clone(),
                            RpcError::new(Some(1), format!("GID {} is not found", gid)),
                        )
                    } else {
                        BatchItemResult::ok(gid.clone())
                    }
                })
                .collect(),
        )
    }

    fn list(&self, method: &'static str, keys: &[String], call: CallOptions, statuses: &[TaskStatus]) -> Result<Vec<Task>> {
        self.record(method, &[], serde_json::json!({ "keys": keys }), call);
        if let Some(e) = self.query_error(method, None) {
            return Err(e);
        }
        Ok(self
            .tasks
            .iter()
            .filter(|t| statuses.contains(&t.status))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RpcClient for MockRpcClient {
    async fn tell_active(&self, keys: &[String], call: CallOptions) -> Result<Vec<Task>> {
        self.list(methods::TELL_ACTIVE, keys, call, &[TaskStatus::Active])
    }

    async fn tell_waiting(&self, keys: &[String], call: CallOptions) -> Result<Vec<Task>> {
        self.list(
            methods::TELL_WAITING,
            keys,
            call,
            &[TaskStatus::Waiting, TaskStatus::Paused],
        )
    }

    async fn tell_stopped(&self, keys: &[String], call: CallOptions) -> Result<Vec<Task>> {
        self.list(
            methods::TELL_STOPPED,
            keys,
            call,
            &[TaskStatus::Complete, TaskStatus::Error, TaskStatus::Removed],
        )
    }

    async fn tell_status(&self, gid: &Gid, call: CallOptions) -> Result<Task> {
        self.record(methods::TELL_STATUS, std::slice::from_ref(gid), serde_json::Value::Null, call);
        if let Some(e) = self.query_error(methods::TELL_STATUS, Some(gid)) {
            return Err(e);
        }
        self.tasks
            .iter()
            .find(|t| &t.gid == gid)
            .cloned()
            .ok_or_else(|| {
                Error::rpc(
                    methods::TELL_STATUS,
                    RpcError::new(Some(1), format!("GID {} is not found", gid)),
                )
            })
    }

    async fn get_option(&self, gid: &Gid, call: CallOptions) -> Result<TaskOptions> {
        self.record(methods::GET_OPTION, std::slice::from_ref(gid), serde_json::Value::Null, call);
        if let Some(e) = self.query_error(methods::GET_OPTION, Some(gid)) {
            return Err(e);
        }
        Ok(self.options.clone())
    }

    async fn change_option(&self, gid: &Gid, options: &TaskOptions, call: CallOptions) -> Result<()> {
        self.record(
            methods::CHANGE_OPTION,
            std::slice::from_ref(gid),
            serde_json::to_value(options)?,
            call,
        );
        if let Some(e) = self.query_error(methods::CHANGE_OPTION, Some(gid)) {
            return Err(e);
        }
        Ok(())
    }

    async fn get_peers(&self, gid: &Gid, call: CallOptions) -> Result<Vec<Peer>> {
        self.record(methods::GET_PEERS, std::slice::from_ref(gid), serde_json::Value::Null, call);
        if let Some(e) = self.query_error(methods::GET_PEERS, Some(gid)) {
            return Err(e);
        }
        Ok(self.peers.clone())
    }

    async fn unpause_multi(&self, gids: &[Gid], call: CallOptions) -> BatchResult {
        self.multi(methods::UNPAUSE, gids, call).await
    }

    async fn force_pause_multi(&self, gids: &[Gid], call: CallOptions) -> BatchResult {
        self.multi(methods::FORCE_PAUSE, gids, call).await
    }

    async fn force_remove_multi(&self, gids: &[Gid], call: CallOptions) -> BatchResult {
        self.multi(methods::FORCE_REMOVE, gids, call).await
    }

    async fn remove_download_result_multi(&self, gids: &[Gid], call: CallOptions) -> BatchResult {
        self.multi(methods::REMOVE_DOWNLOAD_RESULT, gids, call).await
    }

    async fn change_position(
        &self,
        gid: &Gid,
        pos: i64,
        how: PositionMode,
        call: CallOptions,
    ) -> Result<i64> {
        self.record(
            methods::CHANGE_POSITION,
            std::slice::from_ref(gid),
            serde_json::json!({ "pos": pos, "how": how }),
            call,
        );
        if let Some(e) = self.query_error(methods::CHANGE_POSITION, Some(gid)) {
            return Err(e);
        }
        Ok(pos.max(0))
    }

    async fn purge_download_result(&self, call: CallOptions) -> Result<()> {
        self.record(methods::PURGE_DOWNLOAD_RESULT, &[], serde_json::Value::Null, call);
        if let Some(e) = self.query_error(methods::PURGE_DOWNLOAD_RESULT, None) {
            return Err(e);
        }
        Ok(())
    }
}

/// A task with just the fields the dispatcher looks at
pub(crate) fn task_with_status(gid: &str, status: TaskStatus) -> Task {
    Task {
        gid: Gid::from(gid),
        status,
        ..Default::default()
    }
}

/// Build a service over the given mock with default config.
/// Returns the service and the mock for call inspection.
pub(crate) fn create_test_service(mock: MockRpcClient) -> (TaskService, Arc<MockRpcClient>) {
    let mock = Arc::new(mock);
    let service = TaskService::new(mock.clone(), Arc::new(KeyLocalizer), Config::default()).unwrap();
    (service, mock)
}
