use euclid::default::Size2D;
use serde::{Deserialize, Serialize};

/// How the logical canvas is reconciled with the window's pixel size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum CanvasMode {
    /// Canvas units are window pixels; the requested canvas size is ignored.
    #[default]
    Window,
    /// The canvas fills the window; aspect ratio is not preserved.
    Stretch,
    /// The canvas keeps its own aspect ratio, centered, padded by
    /// letterbox/pillarbox bars where the window aspect differs.
    Fit,
}

/// The currently mapped canvas area, in logical canvas units.
///
/// `right`/`bottom` are far-edge coordinates, not sizes. In
/// [`CanvasMode::Fit`], `left` or `top` can be negative: one axis is inflated
/// to absorb the aspect mismatch and the requested area is centered inside
/// it. The inflated margin is still addressable canvas space, it is just
/// covered by the window background on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl CanvasRect {
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: width,
            bottom: height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Reconcile the canvas size the application asked for with the actual
    /// window size.
    ///
    /// `canvas` must already have the `(0, 0)` sentinel substituted with the
    /// window size; both sizes must be strictly positive.
    ///
    /// For [`CanvasMode::Fit`] the axis that would fall short of the window
    /// is inflated (a window relatively wider than the canvas pillarboxes,
    /// so the width grows) and the requested span is centered inside the
    /// inflated one by giving the near edge a negative offset.
    pub fn reconcile(mode: CanvasMode, canvas: Size2D<f32>, window: Size2D<f32>) -> Self {
        match mode {
            CanvasMode::Window => Self::from_size(window.width, window.height),
            CanvasMode::Stretch => Self::from_size(canvas.width, canvas.height),
            CanvasMode::Fit => {
                let window_aspect = window.width / window.height;
                let canvas_aspect = canvas.width / canvas.height;
                if window_aspect > canvas_aspect {
                    let inflate = window_aspect / canvas_aspect;
                    let left = -canvas.width * (inflate - 1.0) / 2.0;
                    Self {
                        left,
                        top: 0.0,
                        right: inflate * canvas.width + left,
                        bottom: canvas.height,
                    }
                } else {
                    let inflate = canvas_aspect / window_aspect;
                    let top = -canvas.height * (inflate - 1.0) / 2.0;
                    Self {
                        left: 0.0,
                        top,
                        right: canvas.width,
                        bottom: inflate * canvas.height + top,
                    }
                }
            }
        }
    }
}
