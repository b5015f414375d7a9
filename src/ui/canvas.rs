// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Preview canvas: displays the composed frame texture scaled to fit.

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    OpenImage,
}

/// Display the composed preview (or a welcome screen when nothing is
/// loaded yet) and a status line.
pub fn show(
    ui: &mut egui::Ui,
    preview: &Option<egui::TextureHandle>,
    has_image: bool,
    is_animating: bool,
) -> CanvasAction {
    let mut action = CanvasAction::None;

    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);
    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        if let Some(texture) = preview {
            // Scale the square canvas texture to fit the available space,
            // centered, preserving aspect ratio.
            let available = ui.available_size();
            let tex_size = texture.size_vec2();
            let scale = (available.x / tex_size.x).min(available.y / tex_size.y);
            let display = tex_size * scale;
            let offset = (available - display) / 2.0;

            let image_rect =
                egui::Rect::from_min_size(ui.min_rect().min + offset, display);

            ui.painter().image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else {
            // Welcome screen; clicking it opens the file picker.
            let response = ui.interact(
                ui.min_rect(),
                ui.id().with("welcome"),
                egui::Sense::click(),
            );
            if response.clicked() {
                action = CanvasAction::OpenImage;
            }

            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.heading(
                        egui::RichText::new("Ringframe")
                            .size(32.0)
                            .color(egui::Color32::from_gray(200)),
                    );
                    ui.label(
                        egui::RichText::new("Three concentric borders for any image")
                            .size(14.0)
                            .color(egui::Color32::from_gray(150)),
                    );
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new("Click here or press Upload to begin")
                            .color(egui::Color32::from_gray(180)),
                    );
                });
            });
        }
    });

    ui.separator();
    ui.horizontal(|ui| {
        if is_animating {
            ui.label("Animating");
        } else if has_image {
            ui.label("Ready");
        } else {
            ui.label("No image loaded");
        }
    });

    action
}
