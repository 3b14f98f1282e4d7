use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::transport::Channel;
use tracing::debug;

use crate::geometry::{Coordinate, Rectangle};
use crate::protocol::{self as pb, RouteGuideClient};
use crate::route::RouteSummary;
use crate::storage::{Feature, RouteNote};
use crate::Result;

/// 基于生成客户端的薄封装，收发领域类型
#[derive(Debug, Clone)]
pub struct GuideClient {
    inner: RouteGuideClient<Channel>,
}

impl GuideClient {
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        debug!("Connecting to {}", endpoint);
        let inner = RouteGuideClient::connect(endpoint).await?;
        Ok(Self { inner })
    }

    pub fn new(inner: RouteGuideClient<Channel>) -> Self {
        Self { inner }
    }

    pub async fn get_feature(&mut self, at: Coordinate) -> Result<Feature> {
        let feature = self
            .inner
            .get_feature(pb::Point::from(at))
            .await?
            .into_inner();
        Feature::try_from(feature)
    }

    pub async fn list_features(&mut self, rect: Rectangle) -> Result<Vec<Feature>> {
        let request = pb::Rectangle {
            lo: Some(rect.lo.into()),
            hi: Some(rect.hi.into()),
        };
        let mut stream = self.inner.list_features(request).await?.into_inner();

        let mut features = Vec::new();
        while let Some(feature) = stream.message().await? {
            features.push(Feature::try_from(feature)?);
        }
        Ok(features)
    }

    /// 依次发送路线上的点，每个点之前随机暂停 0..=max_delay
    pub async fn record_route(
        &mut self,
        points: Vec<Coordinate>,
        max_delay: Duration,
    ) -> Result<RouteSummary> {
        let delays = random_delays(points.len(), max_delay);
        let (tx, rx) = mpsc::channel(16);

        tokio::spawn(async move {
            for (point, delay) in points.into_iter().zip(delays) {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                debug!("Visiting point {}", point);
                if tx.send(pb::Point::from(point)).await.is_err() {
                    break;
                }
            }
        });

        let summary = self
            .inner
            .record_route(ReceiverStream::new(rx))
            .await?
            .into_inner();
        Ok(summary.into())
    }

    /// 发送全部留言并收集服务端回放的历史留言
    pub async fn route_chat(&mut self, notes: Vec<RouteNote>) -> Result<Vec<RouteNote>> {
        let outbound: Vec<pb::RouteNote> = notes.into_iter().map(Into::into).collect();
        let mut stream = self
            .inner
            .route_chat(tokio_stream::iter(outbound))
            .await?
            .into_inner();

        let mut replies = Vec::new();
        while let Some(note) = stream.message().await? {
            replies.push(RouteNote::try_from(note)?);
        }
        Ok(replies)
    }
}

fn random_delays(count: usize, max_delay: Duration) -> Vec<Duration> {
    let max_ms = u64::try_from(max_delay.as_millis()).unwrap_or(u64::MAX);
    if max_ms == 0 {
        return vec![Duration::ZERO; count];
    }
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Duration::from_millis(rng.gen_range(0..=max_ms)))
        .collect()
}

/// 从数据集中随机挑选 `count` 个位置（可重复）
pub fn sample_route(features: &[Feature], count: usize) -> Vec<Coordinate> {
    let mut rng = rand::thread_rng();
    (0..count)
        .filter_map(|_| features.choose(&mut rng).map(|f| f.location))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_route_picks_from_dataset() {
        let features = vec![
            Feature::new("A", Coordinate::new(1, 1)),
            Feature::new("B", Coordinate::new(2, 2)),
        ];
        let route = sample_route(&features, 25);
        assert_eq!(route.len(), 25);
        assert!(route
            .iter()
            .all(|p| features.iter().any(|f| f.location == *p)));
    }

    #[test]
    fn test_sample_route_empty_dataset() {
        assert!(sample_route(&[], 5).is_empty());
    }

    #[test]
    fn test_random_delays_bounded() {
        let delays = random_delays(50, Duration::from_millis(20));
        assert_eq!(delays.len(), 50);
        assert!(delays.iter().all(|d| *d <= Duration::from_millis(20)));
        assert!(random_delays(3, Duration::ZERO).iter().all(|d| d.is_zero()));
    }

    #[test]
    fn test_random_delays_huge_bound_saturates() {
        let delays = random_delays(4, Duration::MAX);
        assert_eq!(delays.len(), 4);
        assert!(delays.iter().all(|d| *d <= Duration::from_millis(u64::MAX)));
    }
}
