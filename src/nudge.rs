//! Moving groups of areas by a fixed step.
//!
//! Canvas space has `y` growing downward, so [`Direction::Up`] decreases `y`.

use crate::error::AreaError;
use crate::polygon::{Polygon, PolygonWithHoles};
use crate::primitives::Vec2;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// One of the four nudge directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward smaller `y`.
    #[cfg_attr(feature = "serde", serde(rename = "top"))]
    Up,
    /// Toward larger `y`.
    #[cfg_attr(feature = "serde", serde(rename = "bottom"))]
    Down,
    /// Toward smaller `x`.
    #[cfg_attr(feature = "serde", serde(rename = "left"))]
    Left,
    /// Toward larger `x`.
    #[cfg_attr(feature = "serde", serde(rename = "right"))]
    Right,
}

impl Direction {
    /// The name used by the drag controls: `top`, `bottom`, `left`, `right`.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "top",
            Direction::Down => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The offset for moving `step` units in this direction.
    pub fn offset<F: Float>(self, step: F) -> Vec2<F> {
        let zero = F::zero();
        match self {
            Direction::Up => Vec2::new(zero, -step),
            Direction::Down => Vec2::new(zero, step),
            Direction::Left => Vec2::new(-step, zero),
            Direction::Right => Vec2::new(step, zero),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Direction::Up),
            "bottom" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(AreaError::UnknownDirection(other.to_string())),
        }
    }
}

/// Shapes that can be moved rigidly.
pub trait Translate<F> {
    /// Moves every vertex by `offset`.
    fn translate_by(&mut self, offset: Vec2<F>);
}

impl<F: Float> Translate<F> for Polygon<F> {
    fn translate_by(&mut self, offset: Vec2<F>) {
        self.translate(offset);
    }
}

impl<F: Float> Translate<F> for PolygonWithHoles<F> {
    fn translate_by(&mut self, offset: Vec2<F>) {
        self.translate(offset);
    }
}

/// Moves every area in `areas` by `step` in `direction`.
///
/// Fails with [`AreaError::InvalidStep`] if `step` is negative, NaN or
/// infinite; the areas are left untouched in that case.
///
/// # Example
///
/// ```
/// use areamark::{nudge, Direction, Point2, Polygon};
///
/// let mut areas = vec![Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]).unwrap()];
/// nudge(&mut areas, Direction::Up, 2.0).unwrap();
/// assert_eq!(areas[0].vertices()[0], Point2::new(0.0, -2.0));
/// ```
pub fn nudge<F, S>(areas: &mut [S], direction: Direction, step: F) -> Result<(), AreaError>
where
    F: Float,
    S: Translate<F>,
{
    if !step.is_finite() || step < F::zero() {
        return Err(AreaError::InvalidStep);
    }

    let offset = direction.offset(step);
    for area in areas.iter_mut() {
        area.translate_by(offset);
    }
    Ok(())
}
