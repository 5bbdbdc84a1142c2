//! Axis-aligned room volume the camera is confined to.
use std::fmt;

use bevy::prelude::*;

/// Navigable room volume. Only ever constructed with `min <= max` on every
/// axis and finite corners.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    min: Vec3,
    max: Vec3,
}

impl RoomBounds {
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, BoundsError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(BoundsError::NonFinite);
        }
        if min.cmpgt(max).any() {
            return Err(BoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest box enclosing every point.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Result<Self, BoundsError> {
        let mut points = points.into_iter();
        let first = points.next().ok_or(BoundsError::Empty)?;
        let (min, max) = points.fold((first, first), |(min, max), point| {
            (min.min(point), max.max(point))
        });
        Self::new(min, max)
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Clamps each coordinate independently into `[min, max]`.
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

/// Reasons a box cannot serve as room bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsError {
    Empty,
    NonFinite,
    Inverted { min: Vec3, max: Vec3 },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no geometry to bound"),
            Self::NonFinite => write!(f, "bounds contain non-finite coordinates"),
            Self::Inverted { min, max } => {
                write!(f, "bounds min {:?} exceeds max {:?}", min, max)
            }
        }
    }
}

impl std::error::Error for BoundsError {}
