//! Spatial envelope types and operations.

use serde::{Deserialize, Serialize};

use crate::crs::EPSG_WGS84;

/// A two-dimensional bounding box.
///
/// Coordinates are in the units of the owning envelope's CRS; for geographic
/// CRS (EPSG:4326) they are degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// A degenerate box covering a single point.
    pub fn point(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Corners are finite and ordered.
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Check if this bbox intersects another (touching edges count).
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Smallest box covering both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// A bounding box tagged with the EPSG code of its CRS.
///
/// An envelope with no box is *empty*: it exists and carries a CRS, but
/// covers nothing. Whether an envelope is set at all is expressed by the
/// container holding an `Option<Envelope>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub srid: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

impl Envelope {
    pub fn new(bbox: BoundingBox, srid: i32) -> Self {
        Self {
            srid,
            bbox: Some(bbox),
        }
    }

    pub fn empty(srid: i32) -> Self {
        Self { srid, bbox: None }
    }

    pub fn is_empty(&self) -> bool {
        self.bbox.is_none()
    }

    /// True when this envelope has a box (it may still be degenerate).
    pub fn is_set(&self) -> bool {
        self.bbox.is_some()
    }

    /// Extend this envelope to cover `other`.
    ///
    /// Only the geometry is merged; the CRS of `self` is kept. Callers are
    /// expected to supply envelopes in a common CRS.
    pub fn expand_to_include(&mut self, other: &Envelope) {
        self.bbox = match (self.bbox, other.bbox) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (None, b) => b,
            (a, None) => a,
        };
    }

    /// Union of `self` and `other`, keeping the CRS of `self`.
    pub fn union(&self, other: &Envelope) -> Envelope {
        let mut merged = *self;
        merged.expand_to_include(other);
        merged
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.bbox.map(|b| b.contains_point(x, y)).unwrap_or(false)
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::empty(EPSG_WGS84)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, -5.0, 15.0, 8.0);

        let union = a.union(&b);
        assert_eq!(union, BoundingBox::new(0.0, -5.0, 15.0, 10.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_expand_empty_envelope() {
        let mut env = Envelope::empty(4326);
        assert!(env.is_empty());

        env.expand_to_include(&Envelope::new(BoundingBox::point(7.0, 52.0), 4326));
        assert!(env.is_set());
        assert_eq!(env.bbox, Some(BoundingBox::point(7.0, 52.0)));

        // expanding with an empty envelope changes nothing
        env.expand_to_include(&Envelope::empty(4326));
        assert_eq!(env.bbox, Some(BoundingBox::point(7.0, 52.0)));
    }

    #[test]
    fn test_union_keeps_own_srid() {
        let a = Envelope::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), 4326);
        let b = Envelope::new(BoundingBox::new(2.0, 2.0, 3.0, 3.0), 3857);
        let merged = a.union(&b);
        assert_eq!(merged.srid, 4326);
        assert_eq!(merged.bbox, Some(BoundingBox::new(0.0, 0.0, 3.0, 3.0)));
    }

    #[test]
    fn test_is_valid() {
        assert!(BoundingBox::new(-180.0, -90.0, 180.0, 90.0).is_valid());
        assert!(!BoundingBox::new(10.0, 10.0, 5.0, 5.0).is_valid());
        assert!(!BoundingBox::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
    }
}
