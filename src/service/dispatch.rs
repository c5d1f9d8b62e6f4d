//! Multi-task commands: start, pause and the split removal.

use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};

use super::TaskService;
use crate::rpc::{CallOptions, methods};
use crate::types::{BatchResult, Gid, Task};

/// Split task ids into live tasks and tasks that have already stopped
///
/// Order within each group follows the input.
pub(crate) fn partition_by_terminal(tasks: &[Task]) -> (Vec<Gid>, Vec<Gid>) {
    let (stopped, running): (Vec<&Task>, Vec<&Task>) =
        tasks.iter().partition(|task| task.status.is_terminal());

    (
        running.into_iter().map(|task| task.gid.clone()).collect(),
        stopped.into_iter().map(|task| task.gid.clone()).collect(),
    )
}

fn log_group(method: &'static str, result: &BatchResult) {
    if result.has_error {
        let failed = result.results.iter().filter(|r| !r.success).count();
        tracing::warn!(
            method,
            total = result.results.len(),
            failed,
            "Batch command reported errors"
        );
    } else {
        tracing::debug!(method, total = result.results.len(), "Batch command completed");
    }
}

impl TaskService {
    /// Resume tasks
    pub async fn start_tasks(&self, gids: &[Gid], call: CallOptions) -> BatchResult {
        tracing::debug!(count = gids.len(), "Starting tasks");
        let result = self.rpc.unpause_multi(gids, call).await;
        log_group(methods::UNPAUSE, &result);
        result
    }

    /// Pause tasks
    pub async fn pause_tasks(&self, gids: &[Gid], call: CallOptions) -> BatchResult {
        tracing::debug!(count = gids.len(), "Pausing tasks");
        let result = self.rpc.force_pause_multi(gids, call).await;
        log_group(methods::FORCE_PAUSE, &result);
        result
    }

    /// Remove tasks, whatever state they are in
    ///
    /// Live tasks are stopped and removed with `forceRemove`; tasks that are
    /// already complete, failed or removed only have their stored result
    /// dropped with `removeDownloadResult`. Both commands are issued together
    /// and the returned result holds every item once both have finished,
    /// appended in the order the groups completed. A group with no tasks is
    /// not sent.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aria2_tasks::*;
    /// # async fn example(service: TaskService, selected: Vec<Task>) {
    /// let result = service.remove_tasks(&selected, CallOptions::default()).await;
    /// if result.has_error {
    ///     eprintln!("some tasks could not be removed");
    /// }
    /// # }
    /// ```
    pub async fn remove_tasks(&self, tasks: &[Task], call: CallOptions) -> BatchResult {
        let (running, stopped) = partition_by_terminal(tasks);
        tracing::debug!(
            running = running.len(),
            stopped = stopped.len(),
            "Removing tasks"
        );

        let rpc = &self.rpc;
        let mut pending: FuturesUnordered<BoxFuture<'_, (&'static str, BatchResult)>> =
            FuturesUnordered::new();

        if !running.is_empty() {
            let gids = &running;
            pending.push(
                async move {
                    let result = rpc.force_remove_multi(gids, call).await;
                    (methods::FORCE_REMOVE, result)
                }
                .boxed(),
            );
        }

        if !stopped.is_empty() {
            let gids = &stopped;
            pending.push(
                async move {
                    let result = rpc.remove_download_result_multi(gids, call).await;
                    (methods::REMOVE_DOWNLOAD_RESULT, result)
                }
                .boxed(),
            );
        }

        let mut combined = BatchResult::default();
        while let Some((method, result)) = pending.next().await {
            log_group(method, &result);
            combined.merge(result);
        }

        combined
    }
}
