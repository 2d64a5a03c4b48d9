//! Translation + quaternion pair, the pose representation viewers consume.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::error::{RvError, RvResult};
use crate::numeric::{Real, Tolerances, ensure_finite, nearly_equal};

/// Pose of a visual object as sent over the wire.
///
/// The array form is `[x, y, z, qx, qy, qz, qw]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tq {
    pub translation: Vector3<Real>,
    pub rotation: UnitQuaternion<Real>,
}

impl Default for Tq {
    fn default() -> Self {
        Self::identity()
    }
}

impl Tq {
    pub fn new(translation: Vector3<Real>, rotation: UnitQuaternion<Real>) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn identity() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }

    pub fn to_array(&self) -> [Real; 7] {
        let q = self.rotation.quaternion();
        [
            self.translation.x,
            self.translation.y,
            self.translation.z,
            q.i,
            q.j,
            q.k,
            q.w,
        ]
    }

    /// Build from `[x, y, z, qx, qy, qz, qw]`.
    ///
    /// The quaternion is normalized; a zero or non-finite quaternion is rejected.
    pub fn from_array(a: [Real; 7]) -> RvResult<Self> {
        for v in a {
            ensure_finite(v, "tq component")?;
        }
        let q = Quaternion::new(a[6], a[3], a[4], a[5]);
        if q.norm() == 0.0 {
            return Err(RvError::InvalidArg {
                what: "tq quaternion has zero norm",
            });
        }
        Ok(Self {
            translation: Vector3::new(a[0], a[1], a[2]),
            rotation: UnitQuaternion::from_quaternion(q),
        })
    }

    /// Component-wise comparison; `q` and `-q` are the same rotation.
    pub fn approx_eq(&self, other: &Tq, tol: Tolerances) -> bool {
        let a = self.to_array();
        let b = other.to_array();
        let translation_close = (0..3).all(|i| nearly_equal(a[i], b[i], tol));
        let same = (3..7).all(|i| nearly_equal(a[i], b[i], tol));
        let flipped = (3..7).all(|i| nearly_equal(a[i], -b[i], tol));
        translation_close && (same || flipped)
    }
}
