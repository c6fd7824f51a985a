//! Accordion menu rendering
//!
//! Measures the available area, re-arranges the menu when that area changed,
//! and paints each panel at its computed geometry. Collapsed panels show a
//! vertical label over the peek of their background; the active panel shows
//! its content.

use eframe::egui;
use egui::{Align2, FontId, RichText, Sense, TextStyle, UiBuilder};
use std::f32::consts::FRAC_PI_2;
use accordion::{PanelGeometry, ThemeColors, Viewport};
use crate::app::AppState;
use crate::presentation::panel_style;
use crate::utils::{background_uv, panel_rect};

/// Seconds for a resolved image to fade in
const FADE_SECONDS: f32 = 0.4;
const LABEL_FONT_SIZE: f32 = 18.0;
const CONTENT_MARGIN: f32 = 24.0;

/// Result of user interaction with the menu
pub enum MenuInteraction {
    /// A panel was clicked anywhere inside its area
    PanelClicked(usize),
}

/// Renders the menu into all remaining space of `ui`.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `colors` - Color palette for the current theme
pub fn render_menu(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) -> Option<MenuInteraction> {
    let container = ui.available_rect_before_wrap();
    let root_font_size = ui
        .style()
        .text_styles
        .get(&TextStyle::Body)
        .map(|font| font.size)
        .unwrap_or(14.0);

    // egui has no resize event: measuring every frame stands in for it
    state.sync_viewport(Viewport::new(container.width(), root_font_size));

    ui.allocate_rect(container, Sense::hover());
    let painter = ui.painter_at(container);

    let geometry: Vec<PanelGeometry> = state.menu.geometry().to_vec();
    let mut interaction = None;

    for (index, slot) in geometry.iter().enumerate() {
        let Some(panel) = state.menu.panel(index) else {
            continue;
        };
        let rect = panel_rect(container, slot);
        let id = ui.id().with(("menu_panel", index));
        let response = ui.interact(rect, id, Sense::click());

        painter.rect_filled(rect, 0.0, panel_style::panel_fill(colors, response.hovered()));

        let presentation = panel.presentation();
        // Tracked while still loading so the animation starts from transparent
        let opacity = fade_opacity(ui.ctx(), id.with("fade"), presentation.image_opacity);
        if let Some(texture) = state.textures.get(index) {
            let uv = background_uv(texture.size, rect.size(), slot.background);
            painter.image(texture.handle.id(), rect, uv, panel_style::image_tint(opacity));
        }

        if let Some(overlay) = panel_style::overlay_color(&presentation, colors) {
            painter.rect_filled(rect, 0.0, overlay);
        }

        painter.rect_stroke(
            rect,
            0.0,
            panel_style::panel_stroke(colors, slot.active),
            egui::StrokeKind::Inside,
        );

        if slot.active {
            render_content(ui, rect.intersect(container), slot, panel.content().content(), colors);
        } else {
            paint_vertical_label(&painter, rect, panel.label(), colors);
        }

        if response.clicked() {
            interaction = Some(MenuInteraction::PanelClicked(index));
        }
        response.on_hover_text(panel.label());
    }

    interaction
}

/// Image opacity for this frame, easing toward `target` over [`FADE_SECONDS`].
///
/// Must be called every frame for every panel, not only once an image exists.
pub(crate) fn fade_opacity(ctx: &egui::Context, id: egui::Id, target: f32) -> f32 {
    ctx.animate_value_with_time(id, target, FADE_SECONDS)
}

/// Draws a collapsed panel's label reading bottom-to-top.
fn paint_vertical_label(painter: &egui::Painter, rect: egui::Rect, label: &str, colors: &ThemeColors) {
    let galley = painter.layout_no_wrap(
        label.to_string(),
        FontId::proportional(LABEL_FONT_SIZE),
        colors.label,
    );
    // Rotated a quarter turn counter-clockwise around its top-left corner
    let size = galley.size();
    let pos = egui::pos2(
        rect.center().x - size.y / 2.0,
        rect.bottom() - CONTENT_MARGIN,
    );
    painter.add(egui::epaint::TextShape::new(pos, galley, colors.label).with_angle(-FRAC_PI_2));
}

/// Lays out the active panel's content at its fixed content width.
fn render_content(
    ui: &mut egui::Ui,
    clip: egui::Rect,
    slot: &PanelGeometry,
    content: &accordion::PanelContent,
    colors: &ThemeColors,
) {
    let content_rect = egui::Rect::from_min_size(
        clip.min + egui::vec2(CONTENT_MARGIN, CONTENT_MARGIN),
        egui::vec2(
            (slot.content_width - 2.0 * CONTENT_MARGIN).max(0.0),
            (clip.height() - 2.0 * CONTENT_MARGIN).max(0.0),
        ),
    );

    let mut child = ui.new_child(UiBuilder::new().max_rect(content_rect));
    child.set_clip_rect(clip);
    child.label(RichText::new(&content.heading).heading().color(colors.label));
    child.add_space(8.0);
    for paragraph in &content.paragraphs {
        child.label(RichText::new(paragraph).color(colors.label));
        child.add_space(4.0);
    }

    if content.paragraphs.is_empty() {
        child.painter().text(
            content_rect.left_top() + egui::vec2(0.0, 40.0),
            Align2::LEFT_TOP,
            "(no content)",
            FontId::proportional(14.0),
            colors.text_dim,
        );
    }
}
