use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::RouteGuideError;
use crate::Result;

/// 坐标缩放因子：度数 × 10^7 存为整数（E7 表示）
pub const COORD_FACTOR: f64 = 10_000_000.0;

const MAX_LATITUDE: i32 = 900_000_000;
const MAX_LONGITUDE: i32 = 1_800_000_000;

/// E7 整数坐标，相等性为两个字段的精确整数相等
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", latitude, longitude)]
pub struct Coordinate {
    pub latitude: i32,
    pub longitude: i32,
}

impl Coordinate {
    pub const fn new(latitude: i32, longitude: i32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// 由度数构造，四舍五入到最近的 E7 整数
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(RouteGuideError::invalid_argument(format!(
                "coordinate ({}, {}) is not finite",
                latitude, longitude
            )));
        }
        // `as` 转换会饱和到 i32 边界，越界值随后由 validated 拒绝
        let lat = (latitude * COORD_FACTOR).round() as i32;
        let lon = (longitude * COORD_FACTOR).round() as i32;
        Self::new(lat, lon).validated()
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude as f64 / COORD_FACTOR
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude as f64 / COORD_FACTOR
    }

    /// 校验纬度 ±90°、经度 ±180°（含边界）
    pub fn validated(self) -> Result<Self> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            return Err(RouteGuideError::invalid_argument(format!(
                "latitude {} is outside [-90, 90] degrees",
                self.latitude_degrees()
            )));
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude) {
            return Err(RouteGuideError::invalid_argument(format!(
                "longitude {} is outside [-180, 180] degrees",
                self.longitude_degrees()
            )));
        }
        Ok(self)
    }
}
