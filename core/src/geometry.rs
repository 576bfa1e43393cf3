//! Planar geometry shared by the parser, validator and update engine.

use std::{
    fmt,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

/// Location in the simulation plane measured in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Center of the simulation domain.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a new position from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance between two positions.
    #[must_use]
    pub fn distance_to(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Vector> for Position {
    type Output = Position;

    fn add(self, rhs: Vector) -> Self::Output {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Vector;

    fn sub(self, rhs: Position) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Displacement between two positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal component.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical component.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean length of the vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Multiplies both components by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Splits the vector into a unit direction and its original length.
    ///
    /// A zero vector keeps a zero direction instead of producing NaN.
    #[must_use]
    pub fn normalize(self) -> Normalized {
        let magnitude = self.length();
        let unit = if magnitude > 0.0 {
            Self::new(self.x / magnitude, self.y / magnitude)
        } else {
            Self::default()
        };
        Normalized { unit, magnitude }
    }
}

/// Unit direction paired with the magnitude it was derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalized {
    unit: Vector,
    magnitude: f64,
}

impl Normalized {
    /// Direction of length one, or zero for a degenerate input.
    #[must_use]
    pub const fn unit(&self) -> Vector {
        self.unit
    }

    /// Length of the vector before normalization.
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

/// Distance from `point` to the infinite line through `from` and `to`.
///
/// The line is not clamped to the segment, so points behind either end still
/// report their perpendicular distance. A degenerate line (`from == to`) is
/// treated as vertical.
#[must_use]
pub fn line_distance(from: Position, to: Position, point: Position) -> f64 {
    let direction = to - from;
    if direction.x() == 0.0 {
        return (point.x() - from.x()).abs();
    }
    if direction.y() == 0.0 {
        return (point.y() - from.y()).abs();
    }

    let slope = direction.y() / direction.x();
    let intercept = from.y() - slope * from.x();
    (slope * point.x() - point.y() + intercept).abs() / (1.0 + slope * slope).sqrt()
}

/// Circle footprint used for every contact test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Position,
    radius: f64,
}

impl Circle {
    /// Creates a circle from its center and radius.
    #[must_use]
    pub const fn new(center: Position, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Center of the circle.
    #[must_use]
    pub const fn center(&self) -> Position {
        self.center
    }

    /// Radius of the circle.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance between the two rims; negative when the circles intersect.
    #[must_use]
    pub fn gap(&self, other: &Circle) -> f64 {
        self.center.distance_to(other.center) - (self.radius + other.radius)
    }

    /// Zero-tolerance contact: touching rims count as an overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.gap(other) <= 0.0
    }

    /// Contact with a tolerance margin so near misses still register.
    #[must_use]
    pub fn touches(&self, other: &Circle, tolerance: f64) -> bool {
        self.gap(other) <= tolerance
    }
}
