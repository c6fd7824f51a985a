//! Screen-space geometry for panels and their backgrounds.
//!
//! Layout geometry is expressed relative to the container's right edge; these
//! helpers turn it into egui rectangles and texture coordinates.

use accordion::{BackgroundPosition, PanelGeometry};
use egui::{pos2, Rect};

/// Screen rectangle of a panel inside `container`.
pub fn panel_rect(container: Rect, geometry: &PanelGeometry) -> Rect {
    let right = container.right() - geometry.right_offset;
    Rect::from_min_max(
        pos2(right - geometry.width, container.top()),
        pos2(right, container.bottom()),
    )
}

/// Texture coordinates that "cover" a panel of `panel_size` with an image of
/// `image_size`, placed horizontally per `position`.
///
/// The image is scaled uniformly until it covers the panel in both directions.
/// `Offset(x)` with negative `x` shifts the image left by `|x|` scaled pixels,
/// clamped so the panel never shows past the image edge. Vertically the image
/// is always centered.
pub fn background_uv(image_size: egui::Vec2, panel_size: egui::Vec2, position: BackgroundPosition) -> Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 || panel_size.x <= 0.0 || panel_size.y <= 0.0 {
        return Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    }

    let scale = (panel_size.x / image_size.x).max(panel_size.y / image_size.y);
    let scaled = image_size * scale;
    let spare_x = (scaled.x - panel_size.x).max(0.0);
    let spare_y = (scaled.y - panel_size.y).max(0.0);

    let left = match position {
        BackgroundPosition::Center => spare_x / 2.0,
        BackgroundPosition::Offset(offset) => (-offset).clamp(0.0, spare_x),
    };
    let top = spare_y / 2.0;

    Rect::from_min_max(
        pos2(left / scaled.x, top / scaled.y),
        pos2((left + panel_size.x) / scaled.x, (top + panel_size.y) / scaled.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn geometry(width: f32, right_offset: f32) -> PanelGeometry {
        PanelGeometry {
            width,
            right_offset,
            active: false,
            content_width: 700.0,
            background: BackgroundPosition::Center,
        }
    }

    #[test]
    fn test_panel_rect_measures_from_right() {
        let container = Rect::from_min_max(pos2(0.0, 10.0), pos2(1000.0, 510.0));
        let rect = panel_rect(container, &geometry(64.0, 100.0));
        assert_eq!(rect.right(), 900.0);
        assert_eq!(rect.left(), 836.0);
        assert_eq!(rect.top(), 10.0);
        assert_eq!(rect.height(), 500.0);
    }

    #[test]
    fn test_center_uv() {
        // 2000x1000 image in a 500x500 panel: scaled to 1000x500, centered
        let uv = background_uv(vec2(2000.0, 1000.0), vec2(500.0, 500.0), BackgroundPosition::Center);
        assert_eq!(uv.left(), 0.25);
        assert_eq!(uv.right(), 0.75);
        assert_eq!(uv.top(), 0.0);
        assert_eq!(uv.bottom(), 1.0);
    }

    #[test]
    fn test_offset_uv_is_clamped() {
        let uv = background_uv(vec2(2000.0, 1000.0), vec2(100.0, 500.0), BackgroundPosition::Offset(-450.0));
        assert_eq!(uv.left(), 0.45);

        let uv = background_uv(vec2(2000.0, 1000.0), vec2(100.0, 500.0), BackgroundPosition::Offset(-5000.0));
        assert_eq!(uv.right(), 1.0);
    }

    #[test]
    fn test_degenerate_sizes_use_full_image() {
        let uv = background_uv(vec2(0.0, 0.0), vec2(100.0, 100.0), BackgroundPosition::Center);
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }
}
