//! Geometry engine for the placeholder label.
//!
//! Everything here is derived from the current bounds and the metrics and is
//! recomputed on every call. The placeholder transform is relative to the
//! label's center, the way a view's anchor point works.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::LabelMetrics;
use crate::state::LabelPhase;

/// Geometry of one control for one set of bounds.
#[derive(Debug, Clone, Copy)]
pub struct LabelGeometry<'a> {
    metrics: &'a LabelMetrics,
    bounds: Size,
}

impl<'a> LabelGeometry<'a> {
    pub fn new(metrics: &'a LabelMetrics, bounds: Size) -> Self {
        Self { metrics, bounds }
    }

    pub fn metrics(&self) -> &LabelMetrics {
        self.metrics
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Rectangle of the text body and the full-size label.
    pub fn bottom_label_frame(&self) -> Rect {
        let insets = self.metrics.bottom_label_insets();
        let width = (self.bounds.width - (insets.x0 + insets.x1)).max(0.0);
        let height = (self.bounds.height - (insets.y0 + insets.y1)).max(0.0);
        Rect::new(insets.x0, insets.y0, insets.x0 + width, insets.y0 + height)
    }

    /// Band reserved at the top for the docked label.
    pub fn top_label_frame(&self) -> Rect {
        let insets = self.metrics.edge_insets;
        let width = (self.bounds.width - (insets.x0 + insets.x1)).max(0.0);
        Rect::new(
            insets.x0,
            insets.y0,
            insets.x0 + width,
            insets.y0 + self.metrics.top_label_height,
        )
    }

    /// Width constraint constant for the placeholder label.
    ///
    /// The docked width is divided by the scale so that after the uniform
    /// scale-down the label still spans the docked band.
    pub fn placeholder_width(&self, phase: LabelPhase) -> f64 {
        let standard = self.bottom_label_frame().width();
        match phase {
            LabelPhase::NoText => standard,
            LabelPhase::EnteredText => standard / self.metrics.scale(),
        }
    }

    /// Transform of the placeholder label about its center.
    pub fn placeholder_transform(&self, phase: LabelPhase) -> Affine {
        match phase {
            LabelPhase::NoText => Affine::IDENTITY,
            LabelPhase::EnteredText => {
                let scale = self.metrics.scale();
                let up_shift = -(self.metrics.top_label_height + self.metrics.gap_between_labels);
                let left_shift = (1.0 - 1.0 / scale) * self.bottom_label_frame().width() / 2.0;
                Affine::new([scale, 0.0, 0.0, scale, left_shift, up_shift])
            }
        }
    }

    /// Untransformed label rectangle: pinned to the body origin, sized by
    /// [`Self::placeholder_width`] and the full label height.
    pub fn placeholder_rest_frame(&self, phase: LabelPhase) -> Rect {
        let origin = self.bottom_label_frame().origin();
        Rect::from_origin_size(
            origin,
            Size::new(
                self.placeholder_width(phase),
                self.metrics.bottom_label_height,
            ),
        )
    }

    /// Where the label is actually drawn once its transform is applied.
    pub fn placeholder_visual_frame(&self, phase: LabelPhase) -> Rect {
        let rest = self.placeholder_rest_frame(phase);
        about_center(self.placeholder_transform(phase), rest.center()).transform_rect_bbox(rest)
    }
}

/// Rebase a center-relative transform onto absolute coordinates.
pub fn about_center(transform: Affine, center: Point) -> Affine {
    let offset = center.to_vec2();
    Affine::translate(offset) * transform * Affine::translate(-offset)
}

/// Uniform scale factor of a label transform.
pub fn transform_scale(transform: Affine) -> f64 {
    transform.as_coeffs()[0]
}

/// Translation part of a label transform.
pub fn transform_shift(transform: Affine) -> Vec2 {
    transform.translation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Insets;

    const EPS: f64 = 1e-9;

    fn scenario_metrics() -> LabelMetrics {
        LabelMetrics::default()
    }

    #[test]
    fn test_scenario_widths() {
        let metrics = scenario_metrics();
        let geometry = LabelGeometry::new(&metrics, Size::new(200.0, metrics.const_height()));
        assert!((geometry.placeholder_width(LabelPhase::NoText) - 200.0).abs() < EPS);
        assert!((geometry.placeholder_width(LabelPhase::EnteredText) - 280.0).abs() < EPS);
    }

    #[test]
    fn test_scenario_transform() {
        let metrics = scenario_metrics();
        let geometry = LabelGeometry::new(&metrics, Size::new(200.0, metrics.const_height()));
        let transform = geometry.placeholder_transform(LabelPhase::EnteredText);
        let [a, b, c, d, tx, ty] = transform.as_coeffs();
        assert!((a - 20.0 / 28.0).abs() < EPS);
        assert!((d - 20.0 / 28.0).abs() < EPS);
        assert_eq!(b, 0.0);
        assert_eq!(c, 0.0);
        assert!((tx + 40.0).abs() < EPS);
        assert!((ty + 15.0).abs() < EPS);
    }

    #[test]
    fn test_no_text_transform_is_identity() {
        let metrics = LabelMetrics::default().with_edge_insets(Insets::new(5.0, 3.0, 7.0, 1.0));
        for width in [0.0, 1.0, 200.0, 1234.5] {
            let geometry = LabelGeometry::new(&metrics, Size::new(width, 80.0));
            assert_eq!(geometry.placeholder_transform(LabelPhase::NoText), Affine::IDENTITY);
        }
    }

    #[test]
    fn test_entered_width_is_no_text_width_over_scale() {
        let metrics = LabelMetrics::default().with_edge_insets(Insets::new(8.0, 0.0, 12.0, 0.0));
        for width in [50.0, 200.0, 321.0, 1024.0] {
            let geometry = LabelGeometry::new(&metrics, Size::new(width, 43.0));
            let no_text = geometry.placeholder_width(LabelPhase::NoText);
            let entered = geometry.placeholder_width(LabelPhase::EnteredText);
            assert!((entered - no_text / metrics.scale()).abs() < EPS);
        }
    }

    #[test]
    fn test_frames_respect_insets() {
        let metrics = LabelMetrics::default().with_edge_insets(Insets::new(10.0, 4.0, 6.0, 2.0));
        let geometry = LabelGeometry::new(&metrics, Size::new(300.0, metrics.const_height()));

        let top = geometry.top_label_frame();
        assert_eq!(top, Rect::new(10.0, 4.0, 294.0, 24.0));

        let bottom = geometry.bottom_label_frame();
        assert_eq!(bottom.x0, 10.0);
        assert_eq!(bottom.y0, 4.0 + 20.0 - 5.0);
        assert_eq!(bottom.width(), 284.0);
        assert!((bottom.height() - metrics.bottom_label_height).abs() < EPS);
    }

    #[test]
    fn test_bounds_narrower_than_insets() {
        let metrics = LabelMetrics::default().with_edge_insets(Insets::new(30.0, 0.0, 30.0, 0.0));
        let geometry = LabelGeometry::new(&metrics, Size::new(40.0, 43.0));
        assert_eq!(geometry.bottom_label_frame().width(), 0.0);
        assert_eq!(geometry.placeholder_width(LabelPhase::EnteredText), 0.0);
    }

    #[test]
    fn test_docked_label_keeps_left_edge() {
        let metrics = LabelMetrics::default().with_edge_insets(Insets::new(12.0, 0.0, 4.0, 0.0));
        let geometry = LabelGeometry::new(&metrics, Size::new(240.0, metrics.const_height()));
        let body = geometry.bottom_label_frame();
        let docked = geometry.placeholder_visual_frame(LabelPhase::EnteredText);

        assert!((docked.x0 - body.x0).abs() < 1e-6);
        assert!((docked.width() - body.width()).abs() < 1e-6);
        assert!((docked.height() - metrics.top_label_height).abs() < 1e-6);
    }

    #[test]
    fn test_floating_label_matches_rest_frame() {
        let metrics = LabelMetrics::default();
        let geometry = LabelGeometry::new(&metrics, Size::new(200.0, 43.0));
        assert_eq!(
            geometry.placeholder_visual_frame(LabelPhase::NoText),
            geometry.placeholder_rest_frame(LabelPhase::NoText)
        );
    }

    #[test]
    fn test_transform_helpers() {
        let transform = Affine::new([0.5, 0.0, 0.0, 0.5, -3.0, 7.0]);
        assert_eq!(transform_scale(transform), 0.5);
        assert_eq!(transform_shift(transform), Vec2::new(-3.0, 7.0));
    }
}
