//! # File I/O
//!
//! Study files and drivetrain input files.
//!
//! - **Atomic saves**: write to a `.tmp` sibling, fsync, rename
//! - **File locking**: an OS lock plus a `.lock` sidecar naming the holder,
//!   so a study shared on a network drive is not evaluated twice at once
//! - **Version validation**: studies from a newer schema are refused
//!
//! Studies are `.dts` JSON files. Single drivetrain inputs may be TOML
//! (`.toml`) or JSON (anything else).
//!
//! ## Example
//!
//! ```rust,no_run
//! use drivetrain_core::file_io::{load_study, save_study, FileLock};
//! use std::path::Path;
//!
//! let path = Path::new("lss-sweep.dts");
//! let lock = FileLock::acquire(path, "engineer@company.com").unwrap();
//!
//! let mut study = load_study(path).unwrap();
//! study.evaluate_all();
//! save_study(&study, path).unwrap();
//!
//! drop(lock);
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::sizing::DrivetrainInput;
use crate::study::{Study, SCHEMA_VERSION};

/// Locks older than this are taken over.
const STALE_LOCK_HOURS: i64 = 24;

/// Holder details written to the `.lock` sidecar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    pub machine: String,
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME").ok().or_else(|| std::env::var("HOST").ok())
    }
}

/// Exclusive lock on a study file, released on drop.
///
/// Holds the fs2 OS lock on the sidecar and removes the sidecar when
/// dropped.
pub struct FileLock {
    study_path: PathBuf,
    lock_path: PathBuf,
    _lock_file: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire the lock for `path`.
    ///
    /// Fails with [`CalcError::FileLocked`] when a live holder exists. Stale
    /// sidecars (dead process on this machine, or older than a day) are
    /// taken over.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if let Some(existing) = live_holder(&lock_path) {
            return Err(CalcError::file_locked(
                path.display().to_string(),
                format!("{} ({})", existing.user_id, existing.machine),
                existing.locked_at.to_rfc3339(),
            ));
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string()))?;

        lock_file.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(path.display().to_string(), "another process", "unknown")
        })?;

        let lock_json = serde_json::to_string_pretty(&info).map_err(|e| CalcError::serialization(e.to_string()))?;
        lock_file
            .write_all(lock_json.as_bytes())
            .map_err(|e| CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string()))?;
        lock_file
            .sync_all()
            .map_err(|e| CalcError::file_error("sync lock", lock_path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), user = %info.user_id, "study lock acquired");
        Ok(FileLock {
            study_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Current live holder of `path`, if any.
    pub fn check(path: &Path) -> Option<LockInfo> {
        live_holder(&lock_path_for(path))
    }

    pub fn study_path(&self) -> &Path {
        &self.study_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn lock_path_for(study_path: &Path) -> PathBuf {
    let mut lock_path = study_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn live_holder(lock_path: &Path) -> Option<LockInfo> {
    if !lock_path.exists() {
        return None;
    }
    read_lock_info(lock_path).ok().filter(|info| !is_lock_stale(info))
}

fn read_lock_info(lock_path: &Path) -> CalcResult<LockInfo> {
    let contents = read_to_string(lock_path, "read lock")?;
    serde_json::from_str(&contents).map_err(|e| CalcError::serialization(e.to_string()))
}

fn is_lock_stale(info: &LockInfo) -> bool {
    if hostname().is_some_and(|ours| ours == info.machine) {
        #[cfg(unix)]
        {
            if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                return true;
            }
        }
        #[cfg(windows)]
        {
            use std::process::Command;
            let output = Command::new("tasklist")
                .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                .output();
            if let Ok(output) = output {
                let stdout = String::from_utf8_lossy(&output.stdout);
                if !stdout.contains(&info.pid.to_string()) {
                    return true;
                }
            }
        }
    }
    (Utc::now() - info.locked_at).num_hours() > STALE_LOCK_HOURS
}

fn read_to_string(path: &Path, operation: &str) -> CalcResult<String> {
    let mut file = File::open(path).map_err(|e| CalcError::file_error(operation, path.display().to_string(), e.to_string()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error(operation, path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Write `contents` to `path` through a synced temporary sibling and a
/// rename, so readers never see a half-written file.
pub fn write_atomic(path: &Path, contents: &str) -> CalcResult<()> {
    let tmp_path = {
        let mut name = path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;
    tmp_file
        .write_all(contents.as_bytes())
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;
    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })
}

/// Save a study as pretty JSON with an atomic write.
pub fn save_study(study: &Study, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(study).map_err(|e| CalcError::serialization(e.to_string()))?;
    write_atomic(path, &json)?;
    debug!(path = %path.display(), points = study.point_count(), "study saved");
    Ok(())
}

/// Load a study and check its schema version.
///
/// # Errors
///
/// * [`CalcError::VersionMismatch`] - written by an incompatible schema
/// * [`CalcError::SerializationError`] - not a study file
/// * [`CalcError::FileError`] - I/O failure
pub fn load_study(path: &Path) -> CalcResult<Study> {
    let contents = read_to_string(path, "read")?;
    let study: Study = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;
    validate_version(&study.meta.version)?;
    Ok(study)
}

/// Load a study and report whether someone else holds its lock.
pub fn load_study_with_lock_check(path: &Path) -> CalcResult<(Study, Option<LockInfo>)> {
    let study = load_study(path)?;
    Ok((study, FileLock::check(path)))
}

/// Load a drivetrain input. `.toml` files parse as TOML, everything else
/// as JSON. Missing fields take the reference values.
pub fn load_input(path: &Path) -> CalcResult<DrivetrainInput> {
    let contents = read_to_string(path, "read")?;
    let input = if is_toml(path) {
        toml::from_str(&contents)
            .map_err(|e| CalcError::serialization(format!("Invalid TOML in {}: {}", path.display(), e)))?
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?
    };
    Ok(input)
}

/// Save a drivetrain input in the format its extension names.
pub fn save_input(input: &DrivetrainInput, path: &Path) -> CalcResult<()> {
    let text = if is_toml(path) {
        toml::to_string_pretty(input).map_err(|e| CalcError::serialization(e.to_string()))?
    } else {
        serde_json::to_string_pretty(input).map_err(|e| CalcError::serialization(e.to_string()))?
    };
    write_atomic(path, &text)
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("toml"))
}

/// Accept same-major files; on 0.x also refuse a newer minor.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let parse = |v: &str| v.split('.').filter_map(|p| p.parse::<u32>().ok()).collect::<Vec<_>>();
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let (Some(file_major), Some(current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };
    if file_major != current_major {
        return Err(mismatch());
    }
    if *current_major == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::FatigueCheck;
    use crate::solver::Topology;
    use approx::assert_relative_eq;
    use std::env::temp_dir;

    fn temp_path(name: &str, ext: &str) -> PathBuf {
        temp_dir().join(format!("drivetrain_test_{}_{}.{}", name, std::process::id(), ext))
    }

    #[test]
    fn test_lock_path_generation() {
        let lock_path = lock_path_for(Path::new("/path/to/sweep.dts"));
        assert_eq!(lock_path, Path::new("/path/to/sweep.dts.lock"));
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("test@example.com");
        assert_eq!(info.user_id, "test@example.com");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_study_roundtrip() {
        let path = temp_path("roundtrip", "dts");
        let mut study = Study::new("Test Engineer", "LSS-T01", DrivetrainInput::default());
        study.add_point(DrivetrainInput::reference_5mw(Topology::FourPoint));
        save_study(&study, &path).unwrap();

        let loaded = load_study(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.point_count(), 1);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_path("atomic", "dts");
        save_study(&Study::default(), &path).unwrap();
        assert!(path.exists());
        assert!(!temp_dir().join(format!("{}.tmp", path.file_name().unwrap().to_string_lossy())).exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_path("lock", "dts");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "test@example.com").unwrap();
        assert_eq!(lock.info.user_id, "test@example.com");
        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("draft").is_err());
    }

    #[test]
    fn test_input_toml_and_json() {
        let mut input = DrivetrainInput::reference_5mw(Topology::FourPoint);
        input.fatigue = FatigueCheck::Off;
        input.label = "io check".to_string();

        for ext in ["toml", "json"] {
            let path = temp_path("input", ext);
            save_input(&input, &path).unwrap();
            let loaded = load_input(&path).unwrap();
            assert_eq!(loaded.label, "io check");
            assert_eq!(loaded.topology, Topology::FourPoint);
            assert_eq!(loaded.fatigue, FatigueCheck::Off);
            assert_relative_eq!(loaded.gearbox_length_m, input.gearbox_length_m, max_relative = 1e-12);
            assert_relative_eq!(loaded.rotor.my_nm, -16_665_000.0);
            let _ = fs::remove_file(&path);
        }
    }

    #[test]
    fn test_bad_input_reports_format() {
        let path = temp_path("bad", "toml");
        fs::write(&path, "topology = 42").unwrap();
        let err = load_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(err.to_string().contains("TOML"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_with_lock_check() {
        let path = temp_path("lock_check", "dts");
        save_study(&Study::new("Test", "LSS-T02", DrivetrainInput::default()), &path).unwrap();
        let (loaded, lock_info) = load_study_with_lock_check(&path).unwrap();
        assert_eq!(loaded.meta.study_id, "LSS-T02");
        assert!(lock_info.is_none());
        let _ = fs::remove_file(&path);
    }
}
