//! Title, description, download button and footer drawn over the
//! background with egui, pinned to the anchors in [`ViewportState`].

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};

use crate::background::ViewportState;
use crate::config::ConfigLoaded;
use crate::download::DownloadRequested;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
  fn build(&self, app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
      app.add_plugins(EguiPlugin::default());
    }
    app.add_systems(EguiPrimaryContextPass, draw_overlay);
  }
}

fn color32([r, g, b]: [u8; 3]) -> egui::Color32 {
  egui::Color32::from_rgb(r, g, b)
}

/// Horizontal padding that narrows a label by `width` in total.
fn inset(width: u32) -> egui::Margin {
  egui::Margin::symmetric((width / 2) as i8, 0)
}

fn draw_overlay(
  mut contexts: EguiContexts,
  config: Res<ConfigLoaded>,
  state: Option<Res<ViewportState>>,
  mut requests: MessageWriter<DownloadRequested>,
) {
  let Some(state) = state else { return };
  let Ok(ctx) = contexts.ctx_mut() else {
    return;
  };
  let layout = state.layout;
  let content = &config.app.content;
  let theme = &config.app.theme;
  let text_color = color32(theme.text_color);

  egui::Area::new(egui::Id::new("landing_block"))
    .pivot(egui::Align2::CENTER_CENTER)
    .fixed_pos(egui::pos2(layout.center.x as f32, layout.center.y as f32))
    .show(ctx, |ui| {
      ui.set_width(layout.block_width as f32);
      ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        egui::Frame::NONE
          .inner_margin(inset(layout.block_width - layout.title_wrap))
          .show(ui, |ui| {
            ui.add(
              egui::Label::new(
                egui::RichText::new(&content.title)
                  .size(theme.title_size)
                  .strong()
                  .color(text_color),
              )
              .wrap(),
            );
          });

        ui.add_space(10.0);
        egui::Frame::NONE
          .inner_margin(inset(layout.block_width - layout.description_wrap))
          .show(ui, |ui| {
            ui.add(
              egui::Label::new(
                egui::RichText::new(&content.description)
                  .size(theme.description_size)
                  .color(text_color),
              )
              .wrap(),
            );
          });

        ui.add_space(20.0);
        let button = egui::Button::new(
          egui::RichText::new(&content.button_label)
            .size(theme.button_size)
            .strong(),
        )
        .min_size(egui::vec2(0.0, 36.0));
        if ui.add(button).clicked() {
          requests.write(DownloadRequested);
        }
        ui.add_space(20.0);
      });
    });

  egui::Area::new(egui::Id::new("landing_footer"))
    .pivot(egui::Align2::LEFT_BOTTOM)
    .fixed_pos(egui::pos2(layout.footer.x as f32, layout.footer.y as f32))
    .interactable(false)
    .show(ctx, |ui| {
      ui.label(
        egui::RichText::new(&content.footer)
          .size(theme.footer_size)
          .color(color32(theme.footer_color)),
      );
    });
}
