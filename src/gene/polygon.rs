//! Triangle gene for image approximation.
//!
//! Geometry is normalized: `x` and `y` are fractions of the canvas, `radius` a
//! fraction of the maximum polygon size and `angle` a fraction of a full turn.
//! Turning these into pixels is the renderer's business.

use super::{FieldMut, Gene};
use crate::rng::RandomNumberGenerator;

/// One translucent triangle: position, size, rotation and colour.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonGene {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub angle: f64,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Gene for PolygonGene {
    type Params = ();
    const FIELD_COUNT: usize = 7;

    fn random(_params: &(), rng: &mut RandomNumberGenerator) -> Self {
        Self {
            x: rng.uniform(),
            y: rng.uniform(),
            radius: rng.uniform(),
            angle: rng.uniform(),
            red: rng.gen_range(0..=u8::MAX),
            green: rng.gen_range(0..=u8::MAX),
            blue: rng.gen_range(0..=u8::MAX),
        }
    }

    fn field_mut(&mut self, index: usize, _params: &()) -> Option<FieldMut<'_>> {
        let field = match index {
            0 => FieldMut::Continuous(&mut self.x),
            1 => FieldMut::Continuous(&mut self.y),
            2 => FieldMut::Continuous(&mut self.radius),
            3 => FieldMut::Continuous(&mut self.angle),
            4 => FieldMut::Discrete(&mut self.red),
            5 => FieldMut::Discrete(&mut self.green),
            6 => FieldMut::Discrete(&mut self.blue),
            _ => return None,
        };
        Some(field)
    }

    fn in_bounds(&self, _params: &()) -> bool {
        [self.x, self.y, self.radius, self.angle]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}
