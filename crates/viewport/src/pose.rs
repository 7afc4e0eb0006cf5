use euclid::Angle;
use euclid::default::{Transform3D, Vector3D};
use serde::{Deserialize, Serialize};

/// The model transform applied to every primitive until the next reset.
///
/// Two mutation paths coexist and call sites use both:
///
/// - discrete setters ([`Self::set_orientation`], [`Self::set_scale`]) that
///   rebuild the cached transform as rotate ∘ scale from the stored fields;
/// - cumulative operators ([`Self::translate`], [`Self::rotate`],
///   [`Self::scale`]) that compose an elementary transform onto whatever the
///   cached transform currently is, in the local frame.
///
/// Mixing the two without a [`Self::reset`] in between is allowed but the
/// setters clobber any accumulated composition, so callers normally stick to
/// one path per frame. [`Self::reset`] restores identity on both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    orientation: f32,
    scale: Vector3D<f32>,
    transform: Transform3D<f32>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            orientation: 0.0,
            scale: Vector3D::new(1.0, 1.0, 1.0),
            transform: Transform3D::identity(),
        }
    }
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orientation in degrees; positive reads as counter-clockwise on
    /// screen. A zero scale component is accepted and yields a degenerate
    /// transform that flattens geometry.
    pub fn set_orientation(&mut self, degrees: f32) {
        self.orientation = degrees;
        self.recompute();
    }

    pub fn set_scale(&mut self, sx: f32, sy: f32, sz: f32) {
        self.scale = Vector3D::new(sx, sy, sz);
        self.recompute();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn transform(&self) -> &Transform3D<f32> {
        &self.transform
    }

    /// Compose a local-frame translation onto the current transform.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = Transform3D::translation(dx, dy, 0.0).then(&self.transform);
    }

    /// Compose a local-frame rotation about Z onto the current transform.
    /// Unlike [`Self::set_orientation`] the angle is not negated here.
    pub fn rotate(&mut self, degrees: f32) {
        self.transform =
            Transform3D::rotation(0.0, 0.0, 1.0, Angle::degrees(degrees)).then(&self.transform);
    }

    /// Compose a local-frame scale onto the current transform.
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = Transform3D::scale(sx, sy, 1.0).then(&self.transform);
    }

    fn recompute(&mut self) {
        // Scale first, then rotate. The angle is negated: the world
        // projection mirrors Y afterwards, which would turn a CCW request
        // into CW on screen without this compensation.
        let rotation = Transform3D::rotation(0.0, 0.0, 1.0, Angle::degrees(-self.orientation));
        self.transform =
            Transform3D::scale(self.scale.x, self.scale.y, self.scale.z).then(&rotation);
    }
}
