
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use landing_core::{DownloadOutcome, Downloader};

use crate::config::ConfigLoaded;
use crate::operator::OperatorHandle;

/// Sent when the operator clicks the download button.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct DownloadRequested;

/// Installer downloader built from the loaded configuration.
#[derive(Resource)]
pub struct InstallerDownloader(pub Downloader);

impl FromWorld for InstallerDownloader {
  fn from_world(world: &mut World) -> Self {
    let config = world.resource::<ConfigLoaded>();
    Self(Downloader::from_config(&config.app, &config.base_dir))
  }
}

pub struct DownloadPlugin;

impl Plugin for DownloadPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_message::<DownloadRequested>()
      .init_resource::<InstallerDownloader>()
      .add_systems(Update, handle_download_requests);
  }
}

fn handle_download_requests(
  mut requests: MessageReader<DownloadRequested>,
  downloader: Res<InstallerDownloader>,
  mut operator: NonSendMut<OperatorHandle>,
) {
  for _ in requests.read() {
    match downloader.0.run(operator.0.as_mut()) {
      DownloadOutcome::Saved { destination, bytes } => {
        info!("Setup saved to {} ({} bytes)", destination.display(), bytes);
      }
      DownloadOutcome::Cancelled => debug!("Download cancelled"),
      DownloadOutcome::Failed(e) => warn!("Download failed: {e}"),
    }
  }
}
