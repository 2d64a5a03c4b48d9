// rv-core/src/units.rs

use uom::si::f64::Length as UomLength;

// Public canonical unit types (SI, f64)
pub type Length = UomLength;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

/// Length in meters, the unit viewers expect on the wire.
#[inline]
pub fn meters(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millimeters_convert_to_meters() {
        assert!((meters(mm(10.0)) - 0.01).abs() < 1e-15);
        assert_eq!(meters(m(2.5)), 2.5);
    }
}
