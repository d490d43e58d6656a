use anyhow::Context as _;
use eframe::egui;
use mural_core::{
    column_translation, duplicated_murals, offset_for_progress, scroll_progress, single_travel,
    Direction, FrameCoalescer, Mural,
};

use crate::ui::theme::{self, Theme};
use crate::ui::widgets;

/// Rail scroll metrics sampled once per painted frame, the scrollbar's
/// scroll-top / content-height / viewport-height triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScrollSample {
    pub top: f32,
    pub content_height: f32,
    pub viewport_height: f32,
}

pub(crate) fn offset_from_sample(sample: ScrollSample, card_height: f32) -> f32 {
    let progress = scroll_progress(sample.top, sample.content_height, sample.viewport_height);
    offset_for_progress(progress, card_height)
}

/// A mural paired with its palette pre-parsed into paintable colors.
struct CardFace {
    mural: &'static Mural,
    palette: [egui::Color32; 4],
}

pub struct DoubleTickerApp {
    card_height: f32,
    /// The one shared scroll-derived value. Columns and cards are pure
    /// functions of it; nothing below the app writes it back.
    offset: f32,
    pending: FrameCoalescer<ScrollSample>,
    faces: Vec<CardFace>,
    theme: Theme,
    style_applied: bool,
}

impl DoubleTickerApp {
    pub fn new(card_height: f32) -> anyhow::Result<Self> {
        let faces = duplicated_murals()
            .iter()
            .map(|&mural| {
                let colors = mural
                    .palette_colors()
                    .with_context(|| format!("palette of mural `{}`", mural.title))?;
                Ok(CardFace {
                    mural,
                    palette: colors.map(|c| egui::Color32::from_rgb(c.r, c.g, c.b)),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            card_height,
            offset: 0.0,
            pending: FrameCoalescer::new(),
            faces,
            theme: Theme::default(),
            style_applied: false,
        })
    }

    /// Applies the latest coalesced scroll sample, if one is in flight.
    fn apply_pending_scroll(&mut self) {
        if let Some(sample) = self.pending.take() {
            let next = offset_from_sample(sample, self.card_height);
            if next != self.offset {
                tracing::trace!(offset = next, "ticker offset updated");
                self.offset = next;
            }
        }
    }

    fn apply_style_if_needed(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }
        self.style_applied = true;
        let mut style = (*ctx.style()).clone();
        style.visuals = egui::Visuals::dark();
        style.visuals.panel_fill = self.theme.page_bottom;
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(0x11, 0x11, 0x18);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.scroll = egui::style::ScrollStyle::solid();
        ctx.set_style(style);
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(theme::PAGE_KICKER)
                .size(11.0)
                .strong()
                .color(self.theme.kicker),
        );
        ui.label(
            egui::RichText::new(theme::PAGE_TITLE)
                .size(28.0)
                .strong()
                .color(self.theme.text_primary),
        );
        ui.label(
            egui::RichText::new(theme::PAGE_LEDE)
                .size(13.5)
                .color(self.theme.text_muted),
        );
    }

    fn show_ticker_section(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(theme::SECTION_KICKER)
                .size(11.0)
                .strong()
                .color(self.theme.kicker),
        );
        ui.label(
            egui::RichText::new(theme::SECTION_TITLE)
                .size(18.0)
                .strong()
                .color(self.theme.text_primary),
        );
        ui.label(
            egui::RichText::new(theme::SECTION_LEDE)
                .size(12.5)
                .color(self.theme.text_muted),
        );
        ui.add_space(10.0);

        let rail_height = ui.available_height().max(340.0);
        let (rail, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), rail_height),
            egui::Sense::hover(),
        );
        self.show_rail(ui, rail);
    }

    fn show_rail(&mut self, ui: &mut egui::Ui, rail: egui::Rect) {
        let travel = single_travel(self.card_height);

        // Dark blue gradient backdrop, in two bands to hit the mid color.
        let mid_y = rail.center().y;
        let upper = egui::Rect::from_min_max(rail.min, egui::pos2(rail.max.x, mid_y));
        let lower = egui::Rect::from_min_max(egui::pos2(rail.min.x, mid_y), rail.max);
        theme::vertical_gradient(ui.painter(), upper, self.theme.rail_top, self.theme.rail_mid);
        theme::vertical_gradient(ui.painter(), lower, self.theme.rail_mid, self.theme.rail_bottom);

        // The real scrollbar. Content is a spacer exactly one travel taller
        // than the viewport, so maximum scroll equals the travel distance
        // and progress spans [0, 1].
        let mut child = ui.new_child(egui::UiBuilder::new().max_rect(rail));
        child.set_clip_rect(rail);
        let output = egui::ScrollArea::vertical()
            .id_salt("ticker_rail")
            .auto_shrink([false, false])
            .show(&mut child, |ui| {
                ui.allocate_space(egui::vec2(ui.available_width(), rail.height() + travel));
            });
        let sample = ScrollSample {
            top: output.state.offset.y,
            content_height: output.content_size.y,
            viewport_height: output.inner_rect.height(),
        };
        if offset_from_sample(sample, self.card_height) != self.offset {
            self.pending.schedule(sample);
        }

        // Two columns overlay the rail; they only paint, so wheel input
        // still lands on the scroll area underneath.
        let inset = rail.shrink(14.0);
        let gap = 14.0;
        let column_width = (inset.width() - gap) / 2.0;
        let left = egui::Rect::from_min_size(
            inset.min,
            egui::vec2(column_width, inset.height()),
        );
        let right = egui::Rect::from_min_size(
            egui::pos2(inset.min.x + column_width + gap, inset.min.y),
            egui::vec2(column_width, inset.height()),
        );
        self.show_column(ui, left, Direction::Down);
        self.show_column(ui, right, Direction::Up);

        // Fade the seams at the rail's edges, then the ring on top.
        let fade = 64.0_f32.min(rail.height() / 4.0);
        let top_strip =
            egui::Rect::from_min_size(rail.min, egui::vec2(rail.width(), fade));
        let bottom_strip = egui::Rect::from_min_size(
            egui::pos2(rail.min.x, rail.max.y - fade),
            egui::vec2(rail.width(), fade),
        );
        theme::vertical_gradient(
            ui.painter(),
            top_strip,
            self.theme.rail_top,
            egui::Color32::TRANSPARENT,
        );
        theme::vertical_gradient(
            ui.painter(),
            bottom_strip,
            egui::Color32::TRANSPARENT,
            self.theme.rail_bottom,
        );
        ui.painter().rect_stroke(
            rail,
            egui::CornerRadius::same(24),
            egui::Stroke::new(1.0, self.theme.rail_ring),
            egui::StrokeKind::Inside,
        );
    }

    fn show_column(&self, ui: &mut egui::Ui, rect: egui::Rect, direction: Direction) {
        let radius = egui::CornerRadius::same(20);
        ui.painter().rect_filled(rect, radius, self.theme.column_fill);
        ui.painter().rect_stroke(
            rect,
            radius,
            egui::Stroke::new(1.0, self.theme.column_stroke),
            egui::StrokeKind::Inside,
        );

        let inner = rect.shrink(8.0);
        let translate = column_translation(direction, self.offset, self.card_height);
        let body_height = widgets::card_body_height(self.card_height);

        let mut child = ui.new_child(egui::UiBuilder::new().max_rect(inner));
        child.set_clip_rect(inner);
        for (index, face) in self.faces.iter().enumerate() {
            let top = inner.top() + translate + index as f32 * self.card_height;
            let card = egui::Rect::from_min_size(
                egui::pos2(inner.left(), top),
                egui::vec2(inner.width(), body_height),
            );
            if !card.intersects(inner) {
                continue;
            }
            widgets::mural_card(&mut child, card, face.mural, &face.palette, &self.theme);
        }
    }
}

impl eframe::App for DoubleTickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_pending_scroll();
        self.apply_style_if_needed(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.theme.page_bottom))
            .show(ctx, |ui| {
                theme::vertical_gradient(
                    ui.painter(),
                    ui.max_rect(),
                    self.theme.page_top,
                    self.theme.page_bottom,
                );

                let page = ui.max_rect();
                let content_width = page.width().min(1040.0) - 48.0;
                let content = egui::Rect::from_center_size(
                    page.center(),
                    egui::vec2(content_width, page.height() - 48.0),
                );
                widgets::ui_in_rect(ui, content, |ui| {
                    self.show_header(ui);
                    ui.add_space(14.0);
                    self.show_ticker_section(ui);
                });
            });

        // A freshly scheduled sample is applied at the top of the next
        // frame; make sure that frame happens promptly.
        if self.pending.is_pending() {
            ctx.request_repaint();
        }
    }
}

impl Drop for DoubleTickerApp {
    fn drop(&mut self) {
        // An in-flight sample must not apply once the app is torn down.
        self.pending.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::{offset_from_sample, DoubleTickerApp, ScrollSample};
    use mural_core::{single_travel, CARD_HEIGHT, MURAL_COUNT};

    #[test]
    fn faces_cover_the_duplicated_sequence() {
        let app = DoubleTickerApp::new(CARD_HEIGHT).unwrap();
        assert_eq!(app.faces.len(), 2 * MURAL_COUNT);
        assert_eq!(app.faces[0].mural, app.faces[MURAL_COUNT].mural);
        assert_eq!(app.faces[0].palette, app.faces[MURAL_COUNT].palette);
        assert_eq!(app.offset, 0.0);
    }

    #[test]
    fn max_scroll_maps_to_full_travel() {
        let sample = ScrollSample {
            top: single_travel(CARD_HEIGHT),
            content_height: 600.0 + single_travel(CARD_HEIGHT),
            viewport_height: 600.0,
        };
        assert_eq!(offset_from_sample(sample, CARD_HEIGHT), single_travel(CARD_HEIGHT));
    }

    #[test]
    fn unscrollable_rail_keeps_offset_at_zero() {
        let sample = ScrollSample {
            top: 120.0,
            content_height: 500.0,
            viewport_height: 600.0,
        };
        assert_eq!(offset_from_sample(sample, CARD_HEIGHT), 0.0);
    }

    #[test]
    fn pending_sample_applies_exactly_once() {
        let mut app = DoubleTickerApp::new(CARD_HEIGHT).unwrap();
        let sample = ScrollSample {
            top: 100.0,
            content_height: 600.0 + single_travel(CARD_HEIGHT),
            viewport_height: 600.0,
        };
        app.pending.schedule(ScrollSample { top: 50.0, ..sample });
        app.pending.schedule(sample);
        app.apply_pending_scroll();
        let applied = app.offset;
        assert_eq!(applied, offset_from_sample(sample, CARD_HEIGHT));

        // Nothing pending anymore; a second pass is a no-op.
        app.apply_pending_scroll();
        assert_eq!(app.offset, applied);
    }

    #[test]
    fn canceled_sample_never_applies() {
        let mut app = DoubleTickerApp::new(CARD_HEIGHT).unwrap();
        app.pending.schedule(ScrollSample {
            top: 300.0,
            content_height: 600.0 + single_travel(CARD_HEIGHT),
            viewport_height: 600.0,
        });
        app.pending.cancel();
        app.apply_pending_scroll();
        assert_eq!(app.offset, 0.0);
    }
}
