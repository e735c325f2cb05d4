//! Native dialogs for the operator seam.
//!
//! Dialogs block the calling thread, so the handle is a non-send resource:
//! systems that take it run on the main thread.

use std::path::PathBuf;

use landing_core::{Notice, NoticeLevel, Operator, SaveRequest};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// The operator every dialog goes through.
pub struct OperatorHandle(pub Box<dyn Operator>);

impl OperatorHandle {
  pub fn native() -> Self {
    Self(Box::new(NativeOperator))
  }
}

/// Platform file and message dialogs.
pub struct NativeOperator;

impl Operator for NativeOperator {
  fn choose_destination(&mut self, request: &SaveRequest) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
      .set_title(&request.title)
      .set_file_name(&request.file_name);
    for filter in &request.filters {
      dialog = dialog.add_filter(&filter.name, filter.extensions.as_slice());
    }
    dialog.save_file()
  }

  fn notify(&mut self, notice: &Notice) {
    let level = match notice.level {
      NoticeLevel::Info => MessageLevel::Info,
      NoticeLevel::Warning => MessageLevel::Warning,
      NoticeLevel::Error => MessageLevel::Error,
    };
    MessageDialog::new()
      .set_level(level)
      .set_title(&notice.title)
      .set_description(&notice.body)
      .set_buttons(MessageButtons::Ok)
      .show();
  }
}
