use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// RGBA color forwarded to the viewer as-is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const RED: Color = Color([1.0, 0.0, 0.0, 1.0]);
    pub const GREEN: Color = Color([0.0, 1.0, 0.0, 1.0]);
    pub const BLUE: Color = Color([0.0, 0.0, 1.0, 1.0]);

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "{r},{g},{b},{a}")
    }
}

/// Parses `r,g,b` or `r,g,b,a`; alpha defaults to 1.
impl FromStr for Color {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ViewerError::InvalidColor {
            input: s.to_string(),
        };
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<f32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [r, g, b] => Ok(Self([*r, *g, *b, 1.0])),
            [r, g, b, a] => Ok(Self([*r, *g, *b, *a])),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_and_without_alpha() {
        assert_eq!("1,0,0".parse::<Color>().unwrap(), Color::RED);
        assert_eq!(
            "0.2, 0.4, 0.6, 0.5".parse::<Color>().unwrap(),
            Color::rgba(0.2, 0.4, 0.6, 0.5)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "1,0".parse::<Color>(),
            Err(ViewerError::InvalidColor { .. })
        ));
        assert!("red".parse::<Color>().is_err());
        assert!("1,0,0,1,1".parse::<Color>().is_err());
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_string(&Color::BLUE).unwrap();
        assert_eq!(json, "[0.0,0.0,1.0,1.0]");
    }
}
