//! 线上消息与领域类型之间的转换。入站方向在这里做校验。

use crate::error::RouteGuideError;
use crate::geometry::{Coordinate, Rectangle};
use crate::route::RouteSummary;
use crate::storage::{Feature, RouteNote};
use crate::Result;

use super::messages as pb;

impl TryFrom<pb::Point> for Coordinate {
    type Error = RouteGuideError;

    fn try_from(point: pb::Point) -> Result<Self> {
        Coordinate::new(point.latitude, point.longitude).validated()
    }
}

impl From<Coordinate> for pb::Point {
    fn from(c: Coordinate) -> Self {
        pb::Point {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

fn required(point: Option<pb::Point>, field: &str) -> Result<Coordinate> {
    point
        .ok_or_else(|| RouteGuideError::invalid_argument(format!("missing field `{}`", field)))?
        .try_into()
}

impl TryFrom<pb::Rectangle> for Rectangle {
    type Error = RouteGuideError;

    fn try_from(rect: pb::Rectangle) -> Result<Self> {
        Ok(Rectangle::new(
            required(rect.lo, "lo")?,
            required(rect.hi, "hi")?,
        ))
    }
}

impl TryFrom<pb::RouteNote> for RouteNote {
    type Error = RouteGuideError;

    fn try_from(note: pb::RouteNote) -> Result<Self> {
        Ok(RouteNote {
            location: required(note.location, "location")?,
            message: note.message,
        })
    }
}

impl From<RouteNote> for pb::RouteNote {
    fn from(note: RouteNote) -> Self {
        pb::RouteNote {
            location: Some(note.location.into()),
            message: note.message,
        }
    }
}

impl TryFrom<pb::Feature> for Feature {
    type Error = RouteGuideError;

    fn try_from(feature: pb::Feature) -> Result<Self> {
        Ok(Feature {
            name: feature.name,
            location: required(feature.location, "location")?,
        })
    }
}

impl From<Feature> for pb::Feature {
    fn from(feature: Feature) -> Self {
        pb::Feature {
            name: feature.name,
            location: Some(feature.location.into()),
        }
    }
}

fn saturate(n: u64) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl From<RouteSummary> for pb::RouteSummary {
    fn from(summary: RouteSummary) -> Self {
        pb::RouteSummary {
            point_count: saturate(summary.point_count),
            feature_count: saturate(summary.feature_count),
            distance: saturate(summary.distance),
            elapsed_time: saturate(summary.elapsed_time),
        }
    }
}

impl From<pb::RouteSummary> for RouteSummary {
    fn from(summary: pb::RouteSummary) -> Self {
        let widen = |n: i32| u64::try_from(n).unwrap_or(0);
        RouteSummary {
            point_count: widen(summary.point_count),
            feature_count: widen(summary.feature_count),
            distance: widen(summary.distance),
            elapsed_time: widen(summary.elapsed_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_out_of_range_rejected() {
        let point = pb::Point {
            latitude: 900_000_001,
            longitude: 0,
        };
        let err = Coordinate::try_from(point).unwrap_err();
        assert!(matches!(err, RouteGuideError::InvalidArgument(_)));
    }

    #[test]
    fn test_rectangle_requires_both_corners() {
        let rect = pb::Rectangle {
            lo: Some(pb::Point {
                latitude: 1,
                longitude: 1,
            }),
            hi: None,
        };
        let err = Rectangle::try_from(rect).unwrap_err();
        assert!(err.to_string().contains("`hi`"));
    }

    #[test]
    fn test_note_requires_location() {
        let note = pb::RouteNote {
            location: None,
            message: "lost".to_string(),
        };
        assert!(matches!(
            RouteNote::try_from(note),
            Err(RouteGuideError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_note_to_wire_keeps_fields() {
        let note = RouteNote::new(Coordinate::new(5, 5), "hello");
        let wire: pb::RouteNote = note.into();
        assert_eq!(
            wire.location,
            Some(pb::Point {
                latitude: 5,
                longitude: 5
            })
        );
        assert_eq!(wire.message, "hello");
    }

    #[test]
    fn test_summary_saturates() {
        let summary = RouteSummary {
            point_count: 2,
            feature_count: 1,
            distance: u64::MAX,
            elapsed_time: 3,
        };
        let wire: pb::RouteSummary = summary.into();
        assert_eq!(wire.distance, i32::MAX);
        assert_eq!(wire.point_count, 2);
    }
}
