use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{Stream, StreamExt};
use tonic::{Request, Response, Status, Streaming};
use tracing::{debug, info, warn};

use crate::geometry::{Coordinate, Rectangle};
use crate::protocol::{self as pb, RouteGuide};
use crate::route::{RouteRecorder, RouteSummary};
use crate::storage::{list_in_region, FeatureStore, NoteRegistry, RouteNote};

const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// 四个 RPC 的处理器，持有只读要素集合与共享留言表
#[derive(Debug, Clone)]
pub struct RouteGuideService {
    features: Arc<FeatureStore>,
    notes: Arc<NoteRegistry>,
    channel_capacity: usize,
}

impl RouteGuideService {
    pub fn new(features: FeatureStore) -> Self {
        Self::with_registry(features, NoteRegistry::new())
    }

    pub fn with_registry(features: FeatureStore, notes: NoteRegistry) -> Self {
        Self {
            features: Arc::new(features),
            notes: Arc::new(notes),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// 流式响应的缓冲大小（至少为 1）
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    pub fn features(&self) -> &FeatureStore {
        &self.features
    }

    pub fn notes(&self) -> &NoteRegistry {
        &self.notes
    }

    /// GetFeature：未命中时返回无名要素，不是错误
    pub fn lookup(&self, point: pb::Point) -> Result<pb::Feature, Status> {
        let point = Coordinate::try_from(point)?;
        Ok(self.features.match_at(point).into())
    }

    /// ListFeatures：逐个发送区域内的要素，发送完毕后关闭流
    pub fn features_in(
        &self,
        rect: pb::Rectangle,
    ) -> Result<ReceiverStream<Result<pb::Feature, Status>>, Status> {
        let rect = Rectangle::try_from(rect)?;
        let features = Arc::clone(&self.features);
        let (tx, rx) = mpsc::channel(self.channel_capacity);

        tokio::spawn(async move {
            let mut sent = 0usize;
            for feature in list_in_region(&features, &rect) {
                if tx.send(Ok(feature.clone().into())).await.is_err() {
                    debug!("ListFeatures receiver dropped after {} features", sent);
                    return;
                }
                sent += 1;
            }
            debug!("ListFeatures sent {} features for {:?}", sent, rect.bounds());
        });

        Ok(ReceiverStream::new(rx))
    }

    /// RecordRoute：消费整个点流后返回一次统计
    pub async fn record<S>(&self, points: S) -> Result<RouteSummary, Status>
    where
        S: Stream<Item = Result<pb::Point, Status>>,
    {
        tokio::pin!(points);

        let mut recorder = RouteRecorder::new(&self.features);
        while let Some(point) = points.next().await {
            let point = Coordinate::try_from(point?).map_err(|e| {
                warn!("RecordRoute rejected point: {}", e);
                Status::from(e)
            })?;
            recorder.on_point(point);
        }

        Ok(recorder.on_complete())
    }

    /// RouteChat：每收到一条留言，先回放该位置之前的历史，再把它存入留言表
    pub fn chat<S>(&self, inbound: S) -> ReceiverStream<Result<pb::RouteNote, Status>>
    where
        S: Stream<Item = Result<pb::RouteNote, Status>> + Send + 'static,
    {
        let notes = Arc::clone(&self.notes);
        let (tx, rx) = mpsc::channel(self.channel_capacity);

        tokio::spawn(async move {
            tokio::pin!(inbound);

            while let Some(item) = inbound.next().await {
                let note = match item.and_then(|n| RouteNote::try_from(n).map_err(Status::from)) {
                    Ok(note) => note,
                    Err(status) => {
                        warn!("RouteChat stopped: {}", status.message());
                        let _ = tx.send(Err(status)).await;
                        return;
                    }
                };

                let history = notes.on_note(&note).await;
                debug!(
                    "RouteChat note at {} replays {} earlier notes",
                    note.location,
                    history.len()
                );
                for earlier in history {
                    if tx.send(Ok(earlier.into())).await.is_err() {
                        debug!("RouteChat receiver dropped");
                        return;
                    }
                }
            }

            let stats = notes.stats().await;
            debug!(
                "RouteChat registry: {} notes at {} locations",
                stats.notes, stats.locations
            );
        });

        ReceiverStream::new(rx)
    }
}

#[tonic::async_trait]
impl RouteGuide for RouteGuideService {
    async fn get_feature(&self, request: Request<pb::Point>) -> Result<Response<pb::Feature>, Status> {
        debug!("GetFeature from {:?}", request.remote_addr());
        let feature = self.lookup(request.into_inner())?;
        Ok(Response::new(feature))
    }

    type ListFeaturesStream = ReceiverStream<Result<pb::Feature, Status>>;

    async fn list_features(
        &self,
        request: Request<pb::Rectangle>,
    ) -> Result<Response<Self::ListFeaturesStream>, Status> {
        debug!("ListFeatures from {:?}", request.remote_addr());
        let stream = self.features_in(request.into_inner())?;
        Ok(Response::new(stream))
    }

    async fn record_route(
        &self,
        request: Request<Streaming<pb::Point>>,
    ) -> Result<Response<pb::RouteSummary>, Status> {
        let peer = request.remote_addr();
        let summary = self.record(request.into_inner()).await?;
        info!("RecordRoute from {:?}: {}", peer, summary);
        Ok(Response::new(summary.into()))
    }

    type RouteChatStream = ReceiverStream<Result<pb::RouteNote, Status>>;

    async fn route_chat(
        &self,
        request: Request<Streaming<pb::RouteNote>>,
    ) -> Result<Response<Self::RouteChatStream>, Status> {
        debug!("RouteChat from {:?}", request.remote_addr());
        Ok(Response::new(self.chat(request.into_inner())))
    }
}
