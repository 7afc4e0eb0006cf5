use euclid::default::{Box2D, Point2D, Size2D};

/// Window-pixel rectangle bounding the visible canvas area in
/// [`crate::CanvasMode::Fit`].
///
/// The render loop clips the background fill and all primitive draws to this
/// rect so the letterbox/pillarbox bars keep the window background color.
/// Both sizes must be strictly positive. Centered on the padded axis, so the
/// result is the same whether window-Y runs up or down.
pub fn scissor_rect(canvas: Size2D<f32>, window: Size2D<f32>) -> Box2D<f32> {
    let window_aspect = window.width / window.height;
    let canvas_aspect = canvas.width / canvas.height;

    let (x, width) = if window_aspect > canvas_aspect {
        let width = window.height * canvas_aspect;
        ((window.width - width) / 2.0, width)
    } else {
        (0.0, window.width)
    };
    let (y, height) = if canvas_aspect > window_aspect {
        let height = window.width / canvas_aspect;
        ((window.height - height) / 2.0, height)
    } else {
        (0.0, window.height)
    };

    Box2D::from_origin_and_size(Point2D::new(x, y), Size2D::new(width, height))
}
