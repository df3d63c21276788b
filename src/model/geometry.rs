//! Geometric primitives for layout analysis.
//!
//! Coordinates follow PDF user space: X grows to the right, Y grows upwards,
//! so the top of a page has the largest Y values. All values are rounded to
//! two decimal digits on construction to keep floating noise out of gap
//! comparisons.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

/// Number of decimal digits kept for coordinates.
const PRECISION: f32 = 100.0;

/// Round a coordinate to the fixed precision.
pub fn round_coordinate(value: f32) -> f32 {
    (value * PRECISION).round() / PRECISION
}

/// An axis-aligned rectangle with `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rectangle {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Rectangle {
    /// Create a rectangle from its extents.
    ///
    /// Returns `None` for non-finite values or inverted extents, which is how
    /// malformed glyph geometry is represented throughout the crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfstruct::model::Rectangle;
    ///
    /// let rect = Rectangle::new(0.0, 0.0, 10.004, 5.0).unwrap();
    /// assert_eq!(rect.max_x(), 10.0);
    /// assert!(Rectangle::new(10.0, 0.0, 0.0, 5.0).is_none());
    /// ```
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<Self> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return None;
        }
        let rect = Self {
            min_x: round_coordinate(min_x),
            min_y: round_coordinate(min_y),
            max_x: round_coordinate(max_x),
            max_y: round_coordinate(max_y),
        };
        if rect.min_x > rect.max_x || rect.min_y > rect.max_y {
            return None;
        }
        Some(rect)
    }

    /// Left edge.
    pub fn min_x(&self) -> f32 {
        self.min_x
    }

    /// Bottom edge.
    pub fn min_y(&self) -> f32 {
        self.min_y
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    /// Top edge.
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f32 {
        self.min_x + self.width() / 2.0
    }

    /// The smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Check whether the rectangles share at least one point.
    ///
    /// Edges are closed intervals, so touching rectangles overlap.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Check whether `other` lies completely inside this rectangle.
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }

    /// Union of the bounding boxes of all elements that have one.
    ///
    /// Returns `None` when no element carries geometry.
    pub fn from_elements<T: HasBoundingBox>(elements: &[T]) -> Option<Rectangle> {
        elements
            .iter()
            .filter_map(HasBoundingBox::bounding_box)
            .reduce(|acc, rect| acc.union(&rect))
    }
}

impl TryFrom<[f32; 4]> for Rectangle {
    type Error = String;

    fn try_from(value: [f32; 4]) -> Result<Self, Self::Error> {
        Rectangle::new(value[0], value[1], value[2], value[3])
            .ok_or_else(|| format!("invalid rectangle extents {:?}", value))
    }
}

impl From<Rectangle> for [f32; 4] {
    fn from(rect: Rectangle) -> Self {
        [rect.min_x, rect.min_y, rect.max_x, rect.max_y]
    }
}

/// Deserialize an optional rectangle, mapping malformed extents to `None`
/// instead of rejecting the whole input.
pub(crate) fn lenient_rectangle<'de, D>(deserializer: D) -> Result<Option<Rectangle>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<[f32; 4]> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|r| Rectangle::new(r[0], r[1], r[2], r[3])))
}

/// Anything that may carry a bounding box.
pub trait HasBoundingBox {
    /// The bounding box, or `None` if the element has no usable geometry.
    fn bounding_box(&self) -> Option<Rectangle>;
}

impl HasBoundingBox for Rectangle {
    fn bounding_box(&self) -> Option<Rectangle> {
        Some(*self)
    }
}

impl<T: HasBoundingBox + ?Sized> HasBoundingBox for &T {
    fn bounding_box(&self) -> Option<Rectangle> {
        (**self).bounding_box()
    }
}

/// One of the four extents of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    MinX,
    MinY,
    MaxX,
    MaxY,
}

impl Extent {
    /// Read this extent from a rectangle.
    pub fn of(self, rect: &Rectangle) -> f32 {
        match self {
            Extent::MinX => rect.min_x,
            Extent::MinY => rect.min_y,
            Extent::MaxX => rect.max_x,
            Extent::MaxY => rect.max_y,
        }
    }
}

/// Compare two elements by one extent of their bounding boxes.
///
/// Elements without a bounding box always sort after elements with one,
/// in both ascending and descending order.
pub fn compare_extent<T: HasBoundingBox>(
    a: &T,
    b: &T,
    extent: Extent,
    descending: bool,
) -> Ordering {
    match (a.bounding_box(), b.bounding_box()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(ra), Some(rb)) => {
            let ord = extent.of(&ra).total_cmp(&extent.of(&rb));
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
    }
}

/// Ascending by left edge, absent boxes last.
pub fn compare_min_x<T: HasBoundingBox>(a: &T, b: &T) -> Ordering {
    compare_extent(a, b, Extent::MinX, false)
}

/// Ascending by bottom edge, absent boxes last.
pub fn compare_min_y<T: HasBoundingBox>(a: &T, b: &T) -> Ordering {
    compare_extent(a, b, Extent::MinY, false)
}

/// Ascending by right edge, absent boxes last.
pub fn compare_max_x<T: HasBoundingBox>(a: &T, b: &T) -> Ordering {
    compare_extent(a, b, Extent::MaxX, false)
}

/// Ascending by top edge, absent boxes last.
pub fn compare_max_y<T: HasBoundingBox>(a: &T, b: &T) -> Ordering {
    compare_extent(a, b, Extent::MaxY, false)
}

/// The location of an element: a page number and a rectangle on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Page number (1-indexed)
    pub page: u32,
    /// Bounding rectangle on the page
    pub rectangle: Rectangle,
}

impl Position {
    pub fn new(page: u32, rectangle: Rectangle) -> Self {
        Self { page, rectangle }
    }
}

/// A straight line segment, used for text-line baselines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
}

impl LineSegment {
    /// A horizontal segment at height `y`.
    pub fn horizontal(start_x: f32, end_x: f32, y: f32) -> Self {
        Self {
            start_x,
            start_y: y,
            end_x,
            end_y: y,
        }
    }
}
