use euclid::default::Transform3D;

use crate::canvas::CanvasRect;

const NEAR: f32 = -1.0;
const FAR: f32 = 1.0;

/// Orthographic projection for world-space primitives.
///
/// The ortho box spans the active canvas rect and a `(1, -1, 1)` scale is
/// applied after it, flipping the whole clip-space output. Increasing
/// canvas-Y therefore moves down the screen, the conventional 2D canvas
/// direction rather than GL's Y-up. The flip also inverts on-screen rotation
/// direction, which [`crate::pose::Pose`] compensates for by negating its
/// orientation angle.
pub fn world_projection(canvas: &CanvasRect) -> Transform3D<f32> {
    let flip = Transform3D::scale(1.0, -1.0, 1.0);
    Transform3D::ortho(canvas.left, canvas.right, canvas.top, canvas.bottom, NEAR, FAR).then(&flip)
}

/// Orthographic projection for UI/text drawing.
///
/// Y-down is achieved differently here: the ortho call's bottom/top
/// arguments are swapped instead of post-multiplying a flip. Glyph quads
/// (rasterized top-down) render right-side up, and no rotation compensation
/// leaks into text the way the world projection's flip does. Both
/// techniques are kept on purpose.
pub fn ui_projection(canvas: &CanvasRect) -> Transform3D<f32> {
    Transform3D::ortho(canvas.left, canvas.right, canvas.bottom, canvas.top, NEAR, FAR)
}

#[cfg(test)]
mod tests {
    use euclid::default::Point3D;

    use super::{ui_projection, world_projection};
    use crate::canvas::CanvasRect;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "expected {b}, got {a}");
    }

    #[test]
    fn world_projection_is_y_down() {
        let canvas = CanvasRect::from_size(100.0, 100.0);
        let proj = world_projection(&canvas);

        let top = proj.transform_point3d(Point3D::new(50.0, 0.0, 0.0)).unwrap();
        let bottom = proj
            .transform_point3d(Point3D::new(50.0, 100.0, 0.0))
            .unwrap();

        // Canvas y=0 ends up at the top of clip space (+1), y=height at the
        // bottom (-1): growing canvas-Y moves down the screen.
        assert_close(top.y, 1.0);
        assert_close(bottom.y, -1.0);
        assert!(top.y > bottom.y);
    }

    #[test]
    fn world_projection_maps_canvas_corners_to_clip_corners() {
        let canvas = CanvasRect {
            left: -20.0,
            top: 0.0,
            right: 120.0,
            bottom: 100.0,
        };
        let proj = world_projection(&canvas);

        let origin = proj
            .transform_point3d(Point3D::new(-20.0, 0.0, 0.0))
            .unwrap();
        assert_close(origin.x, -1.0);
        assert_close(origin.y, 1.0);

        let far = proj
            .transform_point3d(Point3D::new(120.0, 100.0, 0.0))
            .unwrap();
        assert_close(far.x, 1.0);
        assert_close(far.y, -1.0);
    }

    #[test]
    fn ui_projection_is_y_down_without_a_flip() {
        let canvas = CanvasRect::from_size(100.0, 100.0);
        let proj = ui_projection(&canvas);

        let top = proj.transform_point3d(Point3D::new(50.0, 0.0, 0.0)).unwrap();
        let bottom = proj
            .transform_point3d(Point3D::new(50.0, 100.0, 0.0))
            .unwrap();
        assert_close(top.y, 1.0);
        assert_close(bottom.y, -1.0);
    }

    #[test]
    fn world_and_ui_projections_agree_on_positions() {
        // Same Y-down convention through two different constructions, so
        // text and primitives land in the same place for an unrotated pose.
        let canvas = CanvasRect {
            left: 0.0,
            top: -12.5,
            right: 200.0,
            bottom: 112.5,
        };
        let world = world_projection(&canvas);
        let ui = ui_projection(&canvas);

        for point in [
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(100.0, 50.0, 0.0),
            Point3D::new(200.0, 112.5, 0.0),
        ] {
            let a = world.transform_point3d(point).unwrap();
            let b = ui.transform_point3d(point).unwrap();
            assert_close(a.x, b.x);
            assert_close(a.y, b.y);
        }
    }
}
