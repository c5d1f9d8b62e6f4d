//! # aria2-tasks
//!
//! Backend library for aria2 front-ends: interprets the task data returned by
//! aria2's RPC interface and coordinates multi-task commands against it.
//!
//! ## Design Philosophy
//!
//! aria2-tasks is designed to be:
//! - **Transport-agnostic** - The RPC transport is supplied by the caller through [`RpcClient`]
//! - **Best-effort** - Malformed numbers coerce to zero instead of failing a whole list
//! - **Library-first** - No UI, purely a Rust crate for embedding
//! - **Stateless** - Records are built from each response and handed back; nothing is cached
//!
//! ## Quick Start
//!
//! ```no_run
//! use aria2_tasks::{CallOptions, Config, KeyLocalizer, RpcClient, TaskListKind, TaskService};
//! use std::sync::Arc;
//!
//! async fn refresh(rpc: Arc<dyn RpcClient>) -> aria2_tasks::Result<()> {
//!     let service = TaskService::new(rpc, Arc::new(KeyLocalizer), Config::default())?;
//!
//!     let mut tasks = service
//!         .get_task_list(TaskListKind::Downloading, true, CallOptions::silent())
//!         .await?;
//!     service.process_download_tasks(&mut tasks);
//!
//!     for task in &tasks {
//!         let runs = service.get_combined_pieces(task.bitfield.as_deref(), task.num_pieces);
//!         println!("{}: {:.1}% in {} runs", task.task_name, task.complete_percent, runs.len());
//!     }
//!
//!     let result = service.remove_tasks(&tasks, CallOptions::default()).await;
//!     println!("removed: success={} error={}", result.has_success, result.has_error);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Localization capability
pub mod localize;
/// Task normalization and wire coercion
pub mod normalize;
/// Piece maps and swarm health
pub mod pieces;
/// RPC collaborator interface
pub mod rpc;
/// Task service exposed to the UI layer
pub mod service;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result, RpcError};
pub use localize::{KeyLocalizer, Localizer};
pub use rpc::{CallOptions, RpcClient, TaskOptions};
pub use service::TaskService;
pub use types::{
    BatchItemResult, BatchResult, BittorrentInfo, BittorrentMeta, FileEntry, FileUri, Gid, Peer,
    PieceRun, PositionMode, Task, TaskListKind, TaskStatus,
};
