use std::time::{Duration, Instant};

use derive_more::Display;

use crate::geometry::{haversine_distance, Coordinate};
use crate::storage::FeatureStore;

/// 一次 RecordRoute 调用的统计结果
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[display(
    fmt = "{} points, {} features, {} m, {} s",
    point_count,
    feature_count,
    distance,
    elapsed_time
)]
pub struct RouteSummary {
    pub point_count: u64,
    pub feature_count: u64,
    /// 米，累计后一次性向零截断
    pub distance: u64,
    /// 秒
    pub elapsed_time: u64,
}

/// 每个调用私有的路线累加器
pub struct RouteRecorder<'a> {
    store: &'a FeatureStore,
    created_at: Instant,
    started_at: Option<Instant>,
    previous: Option<Coordinate>,
    point_count: u64,
    feature_count: u64,
    distance: f64,
}

impl<'a> RouteRecorder<'a> {
    pub fn new(store: &'a FeatureStore) -> Self {
        Self {
            store,
            created_at: Instant::now(),
            started_at: None,
            previous: None,
            point_count: 0,
            feature_count: 0,
            distance: 0.0,
        }
    }

    pub fn on_point(&mut self, point: Coordinate) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }

        self.point_count += 1;
        if self.store.match_at(point).is_named() {
            self.feature_count += 1;
        }

        if let Some(previous) = self.previous {
            self.distance += haversine_distance(previous, point);
        }
        self.previous = Some(point);
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.unwrap_or(self.created_at).elapsed()
    }

    pub fn on_complete(self) -> RouteSummary {
        RouteSummary {
            point_count: self.point_count,
            feature_count: self.feature_count,
            distance: self.distance as u64,
            elapsed_time: self.elapsed().as_secs(),
        }
    }
}
