//! Task normalization
//!
//! Fills in the derived display fields of tasks and their files: completion
//! and remaining percentages, remaining bytes and time, share ratio, idle
//! flag, and the resolved task name.
//!
//! Numeric coercion of the wire fields happens while deserializing (see
//! [`coerce`]); normalization only derives values from the typed record, so
//! running it again on the same task yields the same fields.

pub mod coerce;

use crate::types::{FileEntry, Task};

/// Extract the file-name portion of a path or URI
///
/// Returns the text after the last `/`. When there is no `/`, or it is the
/// first or last character, the input is returned unchanged.
///
/// # Examples
///
/// ```
/// use aria2_tasks::normalize::file_name_from_path;
///
/// assert_eq!(file_name_from_path("/a/b"), "b");
/// assert_eq!(file_name_from_path("noslash"), "noslash");
/// assert_eq!(file_name_from_path("/leadingslash"), "/leadingslash");
/// ```
#[must_use]
pub fn file_name_from_path(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) if index > 0 && index + 1 < path.len() => &path[index + 1..],
        _ => path,
    }
}

/// Seconds left at the current speed, 0 when nothing is being downloaded
#[must_use]
pub fn remain_time(remain_length: u64, download_speed: u64) -> f64 {
    if download_speed == 0 {
        return 0.0;
    }

    remain_length as f64 / download_speed as f64
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    part as f64 / whole as f64 * 100.0
}

/// Resolve the display name of a task, without the placeholder fallback
///
/// In priority order: the torrent name, the file name of the first file's
/// path, the file name of the first file's first URI. Empty candidates are
/// skipped.
#[must_use]
pub fn resolve_task_name(task: &Task) -> Option<&str> {
    let torrent_name = task
        .bittorrent
        .as_ref()
        .and_then(|bt| bt.info.as_ref())
        .and_then(|info| info.name.as_deref());

    let first_file = task.files.first();
    let from_path = first_file.map(|file| file_name_from_path(&file.path));
    let from_uri = first_file
        .and_then(|file| file.uris.first())
        .map(|uri| file_name_from_path(&uri.uri));

    [torrent_name, from_path, from_uri]
        .into_iter()
        .flatten()
        .find(|name| !name.is_empty())
}

/// Populate the derived fields of one file entry
pub fn normalize_file(file: &mut FileEntry) {
    file.file_name = file_name_from_path(&file.path).to_string();
    file.complete_percent = percent(file.completed_length, file.length);
}

/// Populate the derived fields of a task and its files in place
///
/// `unknown_name` is used as the task name when nothing else resolves; pass
/// the localized "Unknown" text. A `None` task is handed back untouched.
pub fn normalize_task<'a>(task: Option<&'a mut Task>, unknown_name: &str) -> Option<&'a mut Task> {
    let task = task?;

    task.complete_percent = percent(task.completed_length, task.total_length);
    task.remain_percent = 100.0 - task.complete_percent;
    task.remain_length = task.total_length.saturating_sub(task.completed_length);

    let ratio = task.upload_length as f64 / task.completed_length as f64;
    task.share_ratio = ratio.is_finite().then_some(ratio);

    task.idle = task.download_speed == 0;
    task.remain_time = remain_time(task.remain_length, task.download_speed);

    task.task_name = resolve_task_name(task)
        .unwrap_or(unknown_name)
        .to_string();

    for file in &mut task.files {
        normalize_file(file);
    }

    Some(task)
}

/// Normalize every task of a list
pub fn normalize_tasks(tasks: &mut [Task], unknown_name: &str) {
    for task in tasks {
        normalize_task(Some(task), unknown_name);
    }
}
