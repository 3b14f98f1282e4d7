use super::coordinate::{Coordinate, COORD_FACTOR};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// 两个 E7 坐标之间的大圆距离（米），使用 Haversine 公式
///
/// 对称、非负，同一点距离为 0。
///
/// https://en.wikipedia.org/wiki/Haversine_formula
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = to_radians(a.latitude);
    let lat2 = to_radians(b.latitude);
    let lon1 = to_radians(a.longitude);
    let lon2 = to_radians(b.longitude);

    let delta_lat = lat2 - lat1;
    let delta_lon = lon2 - lon1;

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

fn to_radians(raw: i32) -> f64 {
    (raw as f64 / COORD_FACTOR).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = Coordinate::new(409_146_138, -746_188_906);
        assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinate::new(409_146_138, -746_188_906);
        let b = Coordinate::new(413_628_156, -749_015_468);
        assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
        assert!(haversine_distance(a, b) > 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // 2πR / 360 ≈ 111194.93 米
        let d = haversine_distance(Coordinate::new(0, 0), Coordinate::new(10_000_000, 0));
        assert!((d - 111_194.93).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_antipodal_points() {
        let d = haversine_distance(
            Coordinate::new(0, 0),
            Coordinate::new(0, 1_800_000_000),
        );
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1e-3);
    }
}
