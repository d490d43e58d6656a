use egui::Color32;
use mural_core::Mural;

use crate::ui::theme::Theme;

/// Gap left between cards inside one card slot; the painted card body fills
/// the rest of the slot.
pub const CARD_GAP: f32 = 28.0;

pub fn card_body_height(card_height: f32) -> f32 {
    (card_height - CARD_GAP).max(80.0)
}

/// Runs `add` inside a child UI clipped to `rect`, top-down. The clip is
/// intersected with the caller's, so a card hanging out of its column never
/// paints past the column edge.
pub fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let clip = ui.clip_rect().intersect(rect);
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(clip);
    add(&mut child);
}

/// One translucent card: location kicker, title, "MURAL" badge, note, and
/// the palette swatch row. Pure paint; nothing here reacts to input beyond
/// hover text on the swatches.
pub fn mural_card(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    mural: &Mural,
    palette: &[Color32; 4],
    theme: &Theme,
) {
    let radius = egui::CornerRadius::same(16);
    ui.painter().rect_filled(rect, radius, theme.card_fill);
    ui.painter().rect_stroke(
        rect,
        radius,
        egui::Stroke::new(1.0, theme.card_stroke),
        egui::StrokeKind::Inside,
    );

    let content = rect.shrink(18.0);

    let badge = egui::Rect::from_min_size(
        egui::pos2(content.right() - 44.0, content.top()),
        egui::vec2(44.0, 44.0),
    );
    ui.painter()
        .rect_filled(badge, egui::CornerRadius::same(12), theme.badge_fill);
    ui.painter().text(
        badge.center(),
        egui::Align2::CENTER_CENTER,
        "MURAL",
        egui::FontId::proportional(9.0),
        theme.text_faint,
    );

    let header = egui::Rect::from_min_max(
        content.left_top(),
        egui::pos2(badge.left() - 12.0, content.top() + 58.0),
    );
    ui_in_rect(ui, header, |ui| {
        ui.spacing_mut().item_spacing.y = 2.0;
        ui.label(
            egui::RichText::new(mural.location.to_uppercase())
                .size(10.5)
                .color(theme.text_faint),
        );
        ui.label(
            egui::RichText::new(mural.title)
                .size(19.0)
                .strong()
                .color(theme.text_primary),
        );
    });

    // Note and swatches hang from the bottom edge, like the card's
    // space-between layout.
    let footer = egui::Rect::from_min_max(egui::pos2(content.left(), header.bottom()), content.max);
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(footer)
            .layout(egui::Layout::bottom_up(egui::Align::Min)),
    );
    child.set_clip_rect(ui.clip_rect().intersect(rect));
    palette_row(&mut child, mural, palette);
    child.add_space(8.0);
    child.label(
        egui::RichText::new(mural.note)
            .size(12.5)
            .color(theme.text_secondary),
    );
}

/// One 32x12 pill per palette color, in array order. Hovering a pill shows
/// its hex value.
pub fn palette_row(ui: &mut egui::Ui, mural: &Mural, palette: &[Color32; 4]) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        for (hex, &color) in mural.palette.iter().zip(palette) {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(32.0, 12.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(6), color);
            response.on_hover_text(format!("Color {hex}"));
        }
    });
}
