//! Rigid displacements of rod node frames.

use core::ops::Mul;

use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use rv_core::{Real, Tq};

use crate::error::RodResult;

/// Rigid transform (rotation followed by translation) of a node frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displacement(Isometry3<Real>);

impl Default for Displacement {
    fn default() -> Self {
        Self::identity()
    }
}

impl Displacement {
    pub fn identity() -> Self {
        Self(Isometry3::identity())
    }

    pub fn from_translation(t: Vector3<Real>) -> Self {
        Self(Isometry3::from_parts(
            Translation3::from(t),
            UnitQuaternion::identity(),
        ))
    }

    pub fn from_parts(translation: Vector3<Real>, rotation: UnitQuaternion<Real>) -> Self {
        Self(Isometry3::from_parts(Translation3::from(translation), rotation))
    }

    /// Parse `[x, y, z, qx, qy, qz, qw]`.
    pub fn from_tq_array(a: [Real; 7]) -> RodResult<Self> {
        let tq = Tq::from_array(a)?;
        Ok(Self::from_parts(tq.translation, tq.rotation))
    }

    pub fn isometry(&self) -> &Isometry3<Real> {
        &self.0
    }

    pub fn translation(&self) -> Vector3<Real> {
        self.0.translation.vector
    }

    pub fn rotation(&self) -> UnitQuaternion<Real> {
        self.0.rotation
    }

    pub fn inverse(&self) -> Self {
        Self(self.0.inverse())
    }
}

impl Mul for Displacement {
    type Output = Displacement;

    fn mul(self, rhs: Displacement) -> Displacement {
        Displacement(self.0 * rhs.0)
    }
}

/// Convert a displacement into the translation/quaternion pose sent to viewers.
pub fn displacement_to_tq(d: &Displacement) -> Tq {
    Tq::new(d.translation(), d.rotation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn identity_maps_to_identity_tq() {
        assert_eq!(displacement_to_tq(&Displacement::identity()), Tq::identity());
    }

    #[test]
    fn composition_applies_right_then_left() {
        let rot = Displacement::from_parts(
            Vector3::zeros(),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
        );
        let shift = Displacement::from_translation(Vector3::new(1.0, 0.0, 0.0));
        let p = (rot * shift).isometry() * Point3::origin();
        assert!((p - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn inverse_cancels() {
        let d = Displacement::from_tq_array([1.0, -2.0, 0.5, 0.1, 0.2, 0.3, 0.9]).unwrap();
        let tq = displacement_to_tq(&(d * d.inverse()));
        assert!(tq.approx_eq(&Tq::identity(), rv_core::Tolerances { abs: 1e-12, rel: 1e-9 }));
    }

    proptest! {
        #[test]
        fn tq_carries_translation_and_rotation(
            x in -10.0f64..10.0, y in -10.0f64..10.0, z in -10.0f64..10.0,
            angle in -3.0f64..3.0,
        ) {
            let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angle);
            let d = Displacement::from_parts(Vector3::new(x, y, z), rotation);
            let tq = displacement_to_tq(&d);
            prop_assert_eq!(tq.translation, Vector3::new(x, y, z));
            prop_assert!(tq.rotation.angle_to(&rotation) < 1e-12);
        }
    }
}
