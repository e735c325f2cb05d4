//! E2E tests for the installer download flow.
//!
//! Drives `Downloader::run` with a scripted operator against real files in a
//! temp directory:
//! 1. Installer missing -> error notice, no prompt, nothing written
//! 2. Prompt cancelled -> no copy, no notice
//! 3. Destination confirmed -> identical copy, success notice
//! 4. Unwritable destination -> copy failure notice
//! 5. Mode and timestamps survive the copy, read-only installers included
//!
//! Run: cargo test -p landing_core --test download_e2e

use std::fs;
use std::path::{Path, PathBuf};

use landing_core::{
  AppConfig, DownloadOutcome, Downloader, Error, Notice, NoticeLevel, Operator, SaveRequest,
};
use tempfile::TempDir;

/// Operator that answers the save prompt from a script and records
/// everything it was shown.
struct ScriptedOperator {
  answer: Option<PathBuf>,
  prompts: Vec<SaveRequest>,
  notices: Vec<Notice>,
}

impl ScriptedOperator {
  fn answering(answer: Option<PathBuf>) -> Self {
    Self {
      answer,
      prompts: Vec::new(),
      notices: Vec::new(),
    }
  }
}

impl Operator for ScriptedOperator {
  fn choose_destination(&mut self, request: &SaveRequest) -> Option<PathBuf> {
    self.prompts.push(request.clone());
    self.answer.clone()
  }

  fn notify(&mut self, notice: &Notice) {
    self.notices.push(notice.clone());
  }
}

const INSTALLER_BYTES: &[u8] = b"MZ\x90\x00fake installer payload\x00\x01\x02\xff";

fn bundle_dir(with_installer: bool) -> TempDir {
  let dir = TempDir::new().expect("Failed to create temp dir");
  if with_installer {
    fs::write(dir.path().join("ChatAppSetup.exe"), INSTALLER_BYTES).unwrap();
  }
  dir
}

fn downloader(base: &Path) -> Downloader {
  Downloader::from_config(&AppConfig::default(), base)
}

#[test]
fn missing_installer_skips_prompt_and_reports_error() {
  let bundle = bundle_dir(false);
  let out = TempDir::new().unwrap();
  let destination = out.path().join("ChatAppSetup.exe");
  let mut operator = ScriptedOperator::answering(Some(destination.clone()));

  let outcome = downloader(bundle.path()).run(&mut operator);

  assert!(matches!(
    outcome,
    DownloadOutcome::Failed(Error::MissingAsset { .. })
  ));
  assert!(operator.prompts.is_empty(), "save prompt must not be shown");
  assert_eq!(operator.notices.len(), 1);
  assert_eq!(operator.notices[0].level, NoticeLevel::Error);
  assert_eq!(operator.notices[0].title, "Setup Missing");
  assert!(!destination.exists(), "nothing should be written");
}

#[test]
fn cancelled_prompt_does_nothing() {
  let bundle = bundle_dir(true);
  let mut operator = ScriptedOperator::answering(None);

  let outcome = downloader(bundle.path()).run(&mut operator);

  assert!(matches!(outcome, DownloadOutcome::Cancelled));
  assert_eq!(operator.prompts.len(), 1);
  assert!(operator.notices.is_empty(), "cancel must be silent");
}

#[test]
fn confirmed_destination_receives_identical_copy() {
  let bundle = bundle_dir(true);
  let out = TempDir::new().unwrap();
  let destination = out.path().join("MySetup.exe");
  let mut operator = ScriptedOperator::answering(Some(destination.clone()));

  let outcome = downloader(bundle.path()).run(&mut operator);

  let (saved, bytes) = match outcome {
    DownloadOutcome::Saved { destination, bytes } => (destination, bytes),
    other => panic!("expected Saved, got {other:?}"),
  };
  assert_eq!(saved, destination);
  assert_eq!(bytes, INSTALLER_BYTES.len() as u64);
  assert_eq!(fs::read(&destination).unwrap(), INSTALLER_BYTES);

  let src_meta = fs::metadata(bundle.path().join("ChatAppSetup.exe")).unwrap();
  let dst_meta = fs::metadata(&destination).unwrap();
  assert_eq!(src_meta.len(), dst_meta.len());
  assert_eq!(src_meta.modified().unwrap(), dst_meta.modified().unwrap());
  assert_eq!(src_meta.permissions(), dst_meta.permissions());

  assert_eq!(operator.notices.len(), 1);
  assert_eq!(operator.notices[0].level, NoticeLevel::Info);
  assert_eq!(operator.notices[0].title, "Download Complete");
  assert!(operator.notices[0].body.contains("MySetup.exe"));
}

#[test]
fn prompt_uses_configured_defaults() {
  let bundle = bundle_dir(true);
  let mut operator = ScriptedOperator::answering(None);

  downloader(bundle.path()).run(&mut operator);

  let request = &operator.prompts[0];
  assert_eq!(request.file_name, "ChatAppSetup.exe");
  assert_eq!(request.title, "Save ChatApp Setup As");
  assert_eq!(request.filters[0].extensions, vec!["exe".to_string()]);
}

#[test]
fn extensionless_destination_gets_exe() {
  let bundle = bundle_dir(true);
  let out = TempDir::new().unwrap();
  let mut operator = ScriptedOperator::answering(Some(out.path().join("setup")));

  let outcome = downloader(bundle.path()).run(&mut operator);

  assert!(outcome.is_saved());
  assert!(out.path().join("setup.exe").is_file());
  assert!(!out.path().join("setup").exists());
}

#[test]
fn unwritable_destination_reports_copy_failure() {
  let bundle = bundle_dir(true);
  let out = TempDir::new().unwrap();
  let destination = out.path().join("no_such_dir").join("ChatAppSetup.exe");
  let mut operator = ScriptedOperator::answering(Some(destination.clone()));

  let outcome = downloader(bundle.path()).run(&mut operator);

  assert!(matches!(
    outcome,
    DownloadOutcome::Failed(Error::CopyFailure { .. })
  ));
  assert_eq!(operator.notices.len(), 1);
  assert_eq!(operator.notices[0].level, NoticeLevel::Error);
  assert_eq!(operator.notices[0].title, "Copy Failed");
  assert!(!destination.exists());
}

#[test]
fn copying_onto_the_installer_is_refused() {
  let bundle = bundle_dir(true);
  let installer = bundle.path().join("ChatAppSetup.exe");
  let mut operator = ScriptedOperator::answering(Some(installer.clone()));

  let outcome = downloader(bundle.path()).run(&mut operator);

  assert!(matches!(
    outcome,
    DownloadOutcome::Failed(Error::CopyFailure { .. })
  ));
  assert_eq!(fs::read(&installer).unwrap(), INSTALLER_BYTES, "installer must stay intact");
}

#[test]
fn failure_leaves_downloader_usable() {
  let bundle = bundle_dir(true);
  let out = TempDir::new().unwrap();
  let downloader = downloader(bundle.path());

  let mut failing = ScriptedOperator::answering(Some(out.path().join("missing/x.exe")));
  assert!(!downloader.run(&mut failing).is_saved());

  let mut working = ScriptedOperator::answering(Some(out.path().join("x.exe")));
  assert!(downloader.run(&mut working).is_saved());
}

#[cfg(unix)]
mod unix_metadata {
  use std::fs::{self, File, FileTimes};
  use std::os::unix::fs::PermissionsExt;
  use std::path::Path;
  use std::time::{Duration, SystemTime};

  use landing_core::copy_preserving;
  use tempfile::TempDir;

  use super::INSTALLER_BYTES;

  const MODIFIED: u64 = 1_000_000_000;
  const ACCESSED: u64 = 1_000_100_000;

  fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
  }

  /// Writes an installer with fixed timestamps, then applies `mode`.
  fn installer_with_mode(dir: &Path, mode: u32) -> std::path::PathBuf {
    let path = dir.join("ChatAppSetup.exe");
    fs::write(&path, INSTALLER_BYTES).unwrap();
    let file = File::options().write(true).open(&path).unwrap();
    file
      .set_times(
        FileTimes::new()
          .set_modified(at(MODIFIED))
          .set_accessed(at(ACCESSED)),
      )
      .unwrap();
    drop(file);
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
  }

  fn mode_of(path: &Path) -> u32 {
    fs::metadata(path).unwrap().permissions().mode() & 0o777
  }

  #[test]
  fn executable_mode_and_times_are_kept() {
    let bundle = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let source = installer_with_mode(bundle.path(), 0o755);
    let destination = out.path().join("ChatAppSetup.exe");

    copy_preserving(&source, &destination).unwrap();

    let meta = fs::metadata(&destination).unwrap();
    assert_eq!(mode_of(&destination), 0o755);
    assert_eq!(meta.modified().unwrap(), at(MODIFIED));
    assert_eq!(meta.accessed().unwrap(), at(ACCESSED));
  }

  #[test]
  fn read_only_installer_keeps_times_and_mode() {
    let bundle = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let source = installer_with_mode(bundle.path(), 0o444);
    let destination = out.path().join("ChatAppSetup.exe");

    let bytes = copy_preserving(&source, &destination).unwrap();

    let meta = fs::metadata(&destination).unwrap();
    assert_eq!(bytes, INSTALLER_BYTES.len() as u64);
    assert_eq!(mode_of(&destination), 0o444);
    assert_eq!(meta.modified().unwrap(), at(MODIFIED), "mtime not kept");
    assert_eq!(meta.accessed().unwrap(), at(ACCESSED), "atime not kept");
    assert_eq!(fs::read(&destination).unwrap(), INSTALLER_BYTES);
  }
}
