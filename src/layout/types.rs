//! Core types for the planar layout engine

use std::ops::{Add, Mul, Sub};

use crate::molecule::{AtomId, BondOrder};

/// A 2D point in the output coordinate system (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Unit vector rotated 90° from this one, or `None` for a zero vector
    pub fn unit_normal(self) -> Option<Point> {
        let len = self.length();
        if !len.is_normal() {
            return None;
        }
        Some(Point::new(-self.y / len, self.x / len))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// An axis-aligned rectangle; used as the view frame of a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Smallest box containing all points, or `None` when there are none
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let start = BoundingBox::new(first.x, first.y, 0.0, 0.0);
        Some(iter.fold(start, |bb, p| bb.expand_to_include(p)))
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Check if a circle lies strictly inside this box
    pub fn strictly_contains_circle(&self, center: Point, radius: f64) -> bool {
        center.x - radius > self.x
            && center.x + radius < self.right()
            && center.y - radius > self.y
            && center.y + radius < self.bottom()
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Grow the box by `margin` on every side
    pub fn inflate(&self, margin: f64) -> BoundingBox {
        BoundingBox::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// An atom placed in the output frame
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAtom {
    pub id: AtomId,
    pub element: String,
    pub position: Point,
    pub lone_pairs: u32,
    pub charge: i32,
}

/// A bond between two normalized atoms (indices into [`LayoutResult::atoms`])
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondLayout {
    pub source: usize,
    pub target: usize,
    pub order: BondOrder,
}

/// One drawn strand of a bond
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// A lone pair drawn as two dots around a radial anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonePairMarker {
    /// Angle in radians, measured in frame coordinates (−π/2 is straight up)
    pub angle: f64,
    pub center: Point,
    pub dots: [Point; 2],
}

/// Sign shown on a charge badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeSign {
    Positive,
    Negative,
}

impl ChargeSign {
    pub fn symbol(self) -> &'static str {
        match self {
            ChargeSign::Positive => "+",
            ChargeSign::Negative => "\u{2212}",
        }
    }
}

/// Small badge at an atom's corner indicating the sign of its formal charge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeBadge {
    pub center: Point,
    pub radius: f64,
    pub sign: ChargeSign,
}

/// Output of a layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub atoms: Vec<NormalizedAtom>,
    pub bonds: Vec<BondLayout>,
    /// Padded view frame, used directly as the SVG viewBox
    pub frame: BoundingBox,
    /// Uniform scale applied to raw coordinates
    pub scale: f64,
}

impl LayoutResult {
    /// Positions of both ends of a bond
    pub fn endpoints(&self, bond: &BondLayout) -> Option<(Point, Point)> {
        Some((
            self.atoms.get(bond.source)?.position,
            self.atoms.get(bond.target)?.position,
        ))
    }
}
