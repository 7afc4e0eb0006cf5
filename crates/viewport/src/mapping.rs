use euclid::default::Size2D;
use serde::{Deserialize, Serialize};

use crate::canvas::CanvasMode;

/// Affine coefficients taking window pixel coordinates to canvas units:
/// `canvas = scale * window + offset`, per axis.
///
/// Only used for input translation (pointer positions); the render path goes
/// through the projection matrices instead.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowToCanvasFactors {
    pub x_scale: f32,
    pub x_offset: f32,
    pub y_scale: f32,
    pub y_offset: f32,
}

impl Default for WindowToCanvasFactors {
    fn default() -> Self {
        Self {
            x_scale: 1.0,
            x_offset: 0.0,
            y_scale: 1.0,
            y_offset: 0.0,
        }
    }
}

impl WindowToCanvasFactors {
    /// Derive the factors from the effective canvas size and the window size.
    ///
    /// `canvas` is the requested size with the `(0, 0)` sentinel already
    /// substituted by the window size; both sizes must be strictly positive.
    ///
    /// In [`CanvasMode::Fit`] the constrained axis fixes one uniform scale
    /// for both axes (the inverse mapping preserves aspect too) and the
    /// unconstrained axis gets a centering offset. Other modes map each axis
    /// independently with no offset.
    pub fn compute(mode: CanvasMode, canvas: Size2D<f32>, window: Size2D<f32>) -> Self {
        if mode == CanvasMode::Fit {
            let canvas_aspect = canvas.width / canvas.height;
            let window_aspect = window.width / window.height;
            if canvas_aspect > window_aspect {
                let scale = canvas.width / window.width;
                Self {
                    x_scale: scale,
                    x_offset: 0.0,
                    y_scale: scale,
                    y_offset: canvas.height / 2.0 - window.height * scale / 2.0,
                }
            } else {
                let scale = canvas.height / window.height;
                Self {
                    x_scale: scale,
                    x_offset: canvas.width / 2.0 - window.width * scale / 2.0,
                    y_scale: scale,
                    y_offset: 0.0,
                }
            }
        } else {
            Self {
                x_scale: canvas.width / window.width,
                x_offset: 0.0,
                y_scale: canvas.height / window.height,
                y_offset: 0.0,
            }
        }
    }

    pub fn window_to_canvas_x(&self, x: f32) -> f32 {
        self.x_scale * x + self.x_offset
    }
    pub fn window_to_canvas_y(&self, y: f32) -> f32 {
        self.y_scale * y + self.y_offset
    }

    /// Inverse of [`Self::window_to_canvas_x`]. A zero scale factor (only
    /// possible before the first valid resize) returns the input unchanged.
    pub fn canvas_to_window_x(&self, x: f32) -> f32 {
        if self.x_scale == 0.0 {
            return x;
        }
        (x - self.x_offset) / self.x_scale
    }
    pub fn canvas_to_window_y(&self, y: f32) -> f32 {
        if self.y_scale == 0.0 {
            return y;
        }
        (y - self.y_offset) / self.y_scale
    }
}
