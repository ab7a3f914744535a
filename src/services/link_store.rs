//! Persisted acceptance: one symbolic link per accepted image.
//!
//! The chosen directory is the only persistence format. A link carrying the
//! image's exact file name (raw bytes, not a lossy rendering) means
//! "accepted"; there is no manifest.

use crate::error::{AppError, LinkAction, Result};
use log::debug;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage for acceptance references, keyed by raw file name.
pub trait LinkStore {
    /// Whether a reference named `name` exists (dangling links included).
    fn exists(&self, name: &OsStr) -> bool;

    /// Creates `name` pointing at `target`, replacing any stale entry.
    fn create(&mut self, name: &OsStr, target: &Path) -> Result<()>;

    /// Removes `name`. Succeeds when nothing is there.
    fn remove(&mut self, name: &OsStr) -> Result<()>;
}

/// [`LinkStore`] over a real directory of symlinks.
#[derive(Debug, Clone)]
pub struct SymlinkStore {
    dir: PathBuf,
}

impl SymlinkStore {
    /// Opens `dir`, creating it if absent.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| AppError::ChosenDirCreateFailed {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn link_path(&self, name: &OsStr) -> PathBuf {
        self.dir.join(name)
    }
}

fn persistence_error(name: &OsStr, action: LinkAction) -> impl FnOnce(io::Error) -> AppError + '_ {
    move |source| AppError::Persistence {
        name: name.to_string_lossy().into_owned(),
        action,
        source,
    }
}

/// `remove_file` that treats "already gone" as success.
fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(unix)]
fn make_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn make_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

impl LinkStore for SymlinkStore {
    fn exists(&self, name: &OsStr) -> bool {
        fs::symlink_metadata(self.link_path(name)).is_ok()
    }

    fn create(&mut self, name: &OsStr, target: &Path) -> Result<()> {
        let link = self.link_path(name);
        remove_if_present(&link).map_err(persistence_error(name, LinkAction::Create))?;
        make_link(target, &link).map_err(persistence_error(name, LinkAction::Create))?;
        debug!("Linked {} -> {}", link.display(), target.display());
        Ok(())
    }

    fn remove(&mut self, name: &OsStr) -> Result<()> {
        let link = self.link_path(name);
        remove_if_present(&link).map_err(persistence_error(name, LinkAction::Remove))?;
        debug!("Unlinked {}", link.display());
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::ffi::OsStrExt;
    use tempfile::TempDir;

    #[test]
    fn open_creates_missing_directory() {
        let root = TempDir::new().unwrap();
        SymlinkStore::open(root.path().join("chosen")).unwrap();
        assert!(root.path().join("chosen").is_dir());
    }

    #[test]
    fn open_fails_when_path_is_a_file() {
        let root = TempDir::new().unwrap();
        let blocker = root.path().join("chosen");
        fs::write(&blocker, b"in the way").unwrap();

        assert!(matches!(
            SymlinkStore::open(&blocker),
            Err(AppError::ChosenDirCreateFailed { .. })
        ));
    }

    #[test]
    fn create_links_to_target() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("img1.jpg");
        fs::write(&target, b"pixels").unwrap();
        let mut store = SymlinkStore::open(root.path().join("chosen")).unwrap();

        store.create(OsStr::new("img1.jpg"), &target).unwrap();

        assert!(store.exists(OsStr::new("img1.jpg")));
        assert_eq!(fs::read_link(store.link_path(OsStr::new("img1.jpg"))).unwrap(), target);
    }

    #[test]
    fn create_replaces_stale_link() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("a.png");
        fs::write(&target, b"pixels").unwrap();
        let mut store = SymlinkStore::open(root.path().join("chosen")).unwrap();
        make_link(&root.path().join("gone.png"), &store.link_path(OsStr::new("a.png"))).unwrap();

        store.create(OsStr::new("a.png"), &target).unwrap();

        assert_eq!(fs::read_link(store.link_path(OsStr::new("a.png"))).unwrap(), target);
    }

    #[test]
    fn exists_sees_dangling_links() {
        let root = TempDir::new().unwrap();
        let store = SymlinkStore::open(root.path().join("chosen")).unwrap();
        make_link(&root.path().join("missing.png"), &store.link_path(OsStr::new("missing.png"))).unwrap();

        assert!(store.exists(OsStr::new("missing.png")));
    }

    #[test]
    fn remove_is_fine_when_absent() {
        let root = TempDir::new().unwrap();
        let mut store = SymlinkStore::open(root.path().join("chosen")).unwrap();
        store.remove(OsStr::new("never.png")).unwrap();
    }

    #[test]
    fn remove_leaves_original_file() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("a.png");
        fs::write(&target, b"pixels").unwrap();
        let mut store = SymlinkStore::open(root.path().join("chosen")).unwrap();

        store.create(OsStr::new("a.png"), &target).unwrap();
        store.remove(OsStr::new("a.png")).unwrap();

        assert!(!store.exists(OsStr::new("a.png")));
        assert!(target.exists());
    }

    #[test]
    fn names_that_collide_lossily_stay_distinct() {
        let root = TempDir::new().unwrap();
        let first = OsStr::from_bytes(b"\xfea.png");
        let second = OsStr::from_bytes(b"\xffa.png");
        let target = root.path().join(first);
        fs::write(&target, b"pixels").unwrap();
        let mut store = SymlinkStore::open(root.path().join("chosen")).unwrap();

        store.create(first, &target).unwrap();

        assert!(store.exists(first));
        assert!(!store.exists(second));
    }
}
