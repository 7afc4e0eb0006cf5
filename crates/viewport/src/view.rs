use euclid::default::{Box2D, Size2D, Transform3D};
use tracing::{debug, warn};

use crate::{
    canvas::{CanvasMode, CanvasRect},
    clock::FrameClock,
    mapping::WindowToCanvasFactors,
    pose::Pose,
    projection, scissor,
};

/// The viewport context owned by the render loop: canvas configuration, the
/// derived coordinate state, the active pose and the frame clock.
///
/// All derived state (active canvas rect, window→canvas factors, both
/// projections) is recomputed as a unit whenever the window size or the
/// canvas configuration changes. Everything is plain synchronous state with
/// render-loop affinity; nothing here is meant to be shared across threads.
#[derive(Clone, Debug)]
pub struct View {
    mode: CanvasMode,
    requested: Size2D<f32>,
    window: Size2D<f32>,

    canvas: CanvasRect,
    factors: WindowToCanvasFactors,
    world_projection: Transform3D<f32>,
    ui_projection: Transform3D<f32>,

    pose: Pose,
    clock: FrameClock,
}

impl View {
    pub fn new(window: Size2D<u32>) -> Self {
        let mut view = Self {
            mode: CanvasMode::default(),
            requested: Size2D::zero(),
            window: Size2D::zero(),

            canvas: CanvasRect::default(),
            factors: WindowToCanvasFactors::default(),
            world_projection: Transform3D::identity(),
            ui_projection: Transform3D::identity(),

            pose: Pose::new(),
            clock: FrameClock::new(),
        };
        view.resize(window);
        view
    }

    /// Set the logical canvas size, in user units. `(0, 0)` is the sentinel
    /// for "use the window pixel size".
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.requested = Size2D::new(width, height);
        self.recompute();
    }

    /// Switching to [`CanvasMode::Window`] also clears the requested canvas
    /// size back to the sentinel.
    pub fn set_canvas_mode(&mut self, mode: CanvasMode) {
        self.mode = mode;
        if mode == CanvasMode::Window {
            self.requested = Size2D::zero();
        }
        self.recompute();
    }

    /// Handle a window resize, in physical pixels.
    ///
    /// A zero dimension (reported transiently while minimized) is absorbed
    /// without touching the previously valid state.
    pub fn resize(&mut self, window: Size2D<u32>) {
        if window.width == 0 || window.height == 0 {
            warn!("ignoring resize to degenerate window size {window:?}");
            return;
        }
        self.window = window.to_f32();
        self.recompute();
        debug!("resized viewport to {window:?}, canvas is now {:?}", self.canvas);
    }

    fn recompute(&mut self) {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            // No valid window size seen yet; keep the identity defaults.
            return;
        }
        let base = if self.requested.width == 0.0 || self.requested.height == 0.0 {
            self.window
        } else {
            self.requested
        };
        self.canvas = CanvasRect::reconcile(self.mode, base, self.window);
        self.factors = WindowToCanvasFactors::compute(self.mode, base, self.window);
        self.world_projection = projection::world_projection(&self.canvas);
        self.ui_projection = projection::ui_projection(&self.canvas);
    }

    /// Translate a window pixel X coordinate to canvas units. When `clamped`,
    /// the result is held within `[0, right]` of the active canvas (the far
    /// edge, which in `Fit` mode can exceed the requested width).
    pub fn window_to_canvas_x(&self, x: f32, clamped: bool) -> f32 {
        let coord = self.factors.window_to_canvas_x(x);
        if clamped { coord.clamp(0.0, self.canvas.right) } else { coord }
    }

    pub fn window_to_canvas_y(&self, y: f32, clamped: bool) -> f32 {
        let coord = self.factors.window_to_canvas_y(y);
        if clamped { coord.clamp(0.0, self.canvas.bottom) } else { coord }
    }

    /// Inverse of [`Self::window_to_canvas_x`] (never clamped).
    pub fn canvas_to_window_x(&self, x: f32) -> f32 {
        self.factors.canvas_to_window_x(x)
    }

    pub fn canvas_to_window_y(&self, y: f32) -> f32 {
        self.factors.canvas_to_window_y(y)
    }

    /// Projection for world-space primitives (canvas units, Y-down via a
    /// post-flip).
    pub fn world_projection(&self) -> Transform3D<f32> {
        self.world_projection
    }

    /// Projection for UI/text drawing (top-left origin, no flip).
    pub fn ui_projection(&self) -> Transform3D<f32> {
        self.ui_projection
    }

    /// Clip rect for the visible canvas area, in window pixels. `Some` only
    /// in [`CanvasMode::Fit`] with a configured canvas size; other modes
    /// fill the whole viewport and need no clipping.
    pub fn scissor_rect(&self) -> Option<Box2D<f32>> {
        (self.mode == CanvasMode::Fit && self.requested.width > 0.0 && self.requested.height > 0.0)
            .then(|| scissor::scissor_rect(self.requested, self.window))
    }

    /// Far edge of the active canvas; what drawing code should treat as the
    /// canvas width.
    pub fn canvas_width(&self) -> f32 {
        self.canvas.right
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas.bottom
    }

    pub fn canvas_rect(&self) -> CanvasRect {
        self.canvas
    }

    pub fn canvas_mode(&self) -> CanvasMode {
        self.mode
    }

    pub fn window_size(&self) -> Size2D<f32> {
        self.window
    }

    // --- pose ---

    pub fn set_orientation(&mut self, degrees: f32) {
        self.pose.set_orientation(degrees);
    }
    pub fn set_scale(&mut self, sx: f32, sy: f32, sz: f32) {
        self.pose.set_scale(sx, sy, sz);
    }
    pub fn reset_pose(&mut self) {
        self.pose.reset();
    }
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pose.translate(dx, dy);
    }
    pub fn rotate(&mut self, degrees: f32) {
        self.pose.rotate(degrees);
    }
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.pose.scale(sx, sy);
    }
    /// The model transform every primitive draw applies until the next reset.
    pub fn pose_transform(&self) -> &Transform3D<f32> {
        self.pose.transform()
    }
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    // --- frame ---

    /// Advance the frame clock and reset the pose; the render loop calls
    /// this once per frame before the background fill.
    pub fn begin_frame(&mut self) {
        self.clock.tick();
        self.pose.reset();
    }

    pub fn delta_time(&self) -> f32 {
        self.clock.delta_time()
    }
    pub fn global_time(&self) -> f32 {
        self.clock.global_time()
    }
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }
}
