//! # Artifact Retention Sweep
//!
//! Deletes crop artifacts whose filesystem modification time is older than
//! the retention threshold.
//!
//! The sweep is split into a synchronous single pass ([`sweep_once`]) and a
//! [`RetentionSweeper`] that runs the pass on a fixed `tokio` interval.
//! The loop is parameterized by (root, max age, interval), shares nothing
//! with the request handlers beyond the filesystem, and runs standalone —
//! tests exercise it without an HTTP listener, and `main` spawns it as an
//! independent task whose `JoinHandle` can be aborted.
//!
//! Per-file failures (permissions, concurrent deletion) are logged and
//! skipped; a failing file never aborts the pass and nothing is ever
//! surfaced to a client.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use tracing::{debug, info, warn};

/// Periodically deletes expired artifacts under a storage root.
#[derive(Clone, Debug)]
pub struct RetentionSweeper {
    root: PathBuf,
    max_age: Duration,
    interval: Duration,
}

impl RetentionSweeper {
    pub fn new<P: Into<PathBuf>>(root: P, max_age: Duration, interval: Duration) -> Self {
        Self {
            root: root.into(),
            max_age,
            interval,
        }
    }

    /// Runs the sweep forever on the configured interval.
    ///
    /// The first pass fires immediately. Cancel by aborting the task this
    /// future was spawned on.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match sweep_once(&self.root, self.max_age) {
                Ok(0) => debug!(root = %self.root.display(), "sweep pass: nothing expired"),
                Ok(n) => info!(root = %self.root.display(), removed = n, "sweep pass removed expired artifacts"),
                Err(e) => warn!(root = %self.root.display(), error = %e, "sweep pass failed"),
            }
        }
    }
}

/// One sweep pass: removes every regular file directly under `root` whose
/// mtime age exceeds `max_age`. Returns the number of files removed.
///
/// A missing root is a no-op. Subdirectories are left alone.
pub fn sweep_once(root: &Path, max_age: Duration) -> io::Result<usize> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let now = SystemTime::now();
    let mut removed = 0;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping: stat failed");
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        let modified = match metadata.modified() {
            Ok(t) => t,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping: no mtime");
                continue;
            }
        };
        // A file touched "in the future" has zero age and survives.
        let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
        if age <= max_age {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), age_secs = age.as_secs(), "deleted expired artifact");
                removed += 1;
            }
            Err(e) => warn!(path = %path.display(), error = %e, "failed to delete expired artifact"),
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    fn unique_temp_root() -> PathBuf {
        let mut p = std::env::temp_dir();
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        p.push(format!("retention_sweep-test-{stamp}"));
        p
    }

    #[test]
    fn expired_file_is_removed_and_young_file_survives() -> io::Result<()> {
        let root = unique_temp_root();
        fs::create_dir_all(&root)?;

        fs::write(root.join("old.png"), b"old")?;
        std::thread::sleep(Duration::from_millis(60));
        fs::write(root.join("new.png"), b"new")?;

        // Anything older than 30ms is expired; only old.png qualifies.
        let removed = sweep_once(&root, Duration::from_millis(30))?;

        assert_eq!(removed, 1);
        assert!(!root.join("old.png").exists());
        assert!(root.join("new.png").exists());

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn young_files_survive_a_generous_threshold() -> io::Result<()> {
        let root = unique_temp_root();
        fs::create_dir_all(&root)?;
        fs::write(root.join("a.png"), b"a")?;
        fs::write(root.join("b.png"), b"b")?;

        let removed = sweep_once(&root, Duration::from_secs(3600))?;

        assert_eq!(removed, 0);
        assert!(root.join("a.png").exists());
        assert!(root.join("b.png").exists());

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn missing_root_is_a_noop() -> io::Result<()> {
        let root = unique_temp_root();
        assert!(!root.exists());
        assert_eq!(sweep_once(&root, Duration::ZERO)?, 0);
        Ok(())
    }

    #[test]
    fn subdirectories_are_left_alone() -> io::Result<()> {
        let root = unique_temp_root();
        fs::create_dir_all(root.join("keepdir"))?;
        fs::write(root.join("old.png"), b"x")?;
        std::thread::sleep(Duration::from_millis(40));

        let removed = sweep_once(&root, Duration::from_millis(10))?;

        assert_eq!(removed, 1);
        assert!(root.join("keepdir").is_dir());

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[tokio::test]
    async fn sweeper_task_deletes_expired_files_and_can_be_aborted() {
        let root = unique_temp_root();
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("stale.png"), b"x").unwrap();
        std::thread::sleep(Duration::from_millis(40));

        let sweeper = RetentionSweeper::new(
            root.clone(),
            Duration::from_millis(10),
            Duration::from_millis(20),
        );
        let handle = tokio::spawn(sweeper.run());

        // The first tick fires immediately; give it a little room.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!root.join("stale.png").exists());

        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());

        let _ = fs::remove_dir_all(&root);
    }
}
