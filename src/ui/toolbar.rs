// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Control toolbar: parameter sliders, color swatches and action buttons.
//!
//! The swatches support drag-and-drop reordering; the drag state lives in
//! the app and the reorder itself is returned as an action, keeping this
//! module free of model mutation beyond the two sliders.

use crate::models::color::BorderColors;
use crate::models::params::{LayoutParams, BORDER_WIDTH_RANGE, GUTTER_SIZE_RANGE};

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    OpenImage,
    RandomizeColors,
    ToggleAnimation,
    ExportPng,
    ExportGif,
    ReorderColors { from: usize, to: usize },
}

/// Display the toolbar row and report the triggered action, if any.
pub fn show(
    ui: &mut egui::Ui,
    params: &mut LayoutParams,
    colors: &BorderColors,
    dragged_swatch: &mut Option<usize>,
    has_image: bool,
    is_animating: bool,
    export_busy: bool,
) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("📂 Upload").clicked() {
            action = ToolbarAction::OpenImage;
        }

        ui.separator();

        ui.add(egui::Slider::new(&mut params.border_width, BORDER_WIDTH_RANGE).text("Width"));
        ui.add(egui::Slider::new(&mut params.gutter_size, GUTTER_SIZE_RANGE).text("Gap"));

        ui.separator();

        if let Some(reorder) = show_swatches(ui, colors, dragged_swatch) {
            action = reorder;
        }

        if ui.button("🎲 Random").clicked() {
            action = ToolbarAction::RandomizeColors;
        }

        ui.separator();

        let animate_label = if is_animating { "⏸ Stop" } else { "▶ Animate" };
        if ui
            .add_enabled(has_image, egui::Button::new(animate_label))
            .clicked()
        {
            action = ToolbarAction::ToggleAnimation;
        }

        // GIF export needs a generated frame sequence, so the button only
        // appears while the animation is running.
        if is_animating
            && ui
                .add_enabled(!export_busy, egui::Button::new("💾 Save GIF"))
                .clicked()
        {
            action = ToolbarAction::ExportGif;
        }

        if ui
            .add_enabled(has_image && !export_busy, egui::Button::new("💾 PNG"))
            .clicked()
        {
            action = ToolbarAction::ExportPng;
        }
    });

    action
}

/// Draw the three color swatches and handle drag-reordering.
/// Returns a reorder action when a drag is dropped on another swatch.
fn show_swatches(
    ui: &mut egui::Ui,
    colors: &BorderColors,
    dragged_swatch: &mut Option<usize>,
) -> Option<ToolbarAction> {
    let pointer = ui.input(|i| i.pointer.interact_pos());
    let released = ui.input(|i| i.pointer.any_released());

    let mut swatch_rects = Vec::with_capacity(colors.as_array().len());

    for (i, &color) in colors.as_array().iter().enumerate() {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::click_and_drag());
        swatch_rects.push(rect);

        let center = rect.center();
        let fill = egui::Color32::from_rgb(color.r, color.g, color.b);
        ui.painter().circle_filled(center, 10.0, fill);

        // Highlight the dragged swatch and the swatch under the pointer.
        let is_dragged = *dragged_swatch == Some(i);
        let is_drop_target = dragged_swatch.is_some()
            && !is_dragged
            && pointer.is_some_and(|pos| rect.contains(pos));
        let stroke = if is_dragged || is_drop_target {
            egui::Stroke::new(2.0, egui::Color32::from_gray(60))
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_gray(180))
        };
        ui.painter().circle_stroke(center, 10.0, stroke);

        // Ring number, outermost first.
        ui.painter().text(
            center,
            egui::Align2::CENTER_CENTER,
            format!("{}", i + 1),
            egui::FontId::proportional(10.0),
            egui::Color32::from_white_alpha(180),
        );

        if response.drag_started() {
            *dragged_swatch = Some(i);
        }
        response.on_hover_text(color.to_hex());
    }

    if let Some(from) = *dragged_swatch {
        if released {
            *dragged_swatch = None;
            let target = pointer.and_then(|pos| swatch_rects.iter().position(|r| r.contains(pos)));
            if let Some(to) = target {
                if to != from {
                    return Some(ToolbarAction::ReorderColors { from, to });
                }
            }
        }
    }

    None
}
