pub mod client;
pub mod config;
pub mod error;
pub mod geometry;
pub mod protocol;
pub mod route;
pub mod server;
pub mod storage;

// 重新导出主要的公共接口
pub use geometry::{haversine_distance, Coordinate, Rectangle};
pub use route::{RouteRecorder, RouteSummary};
pub use storage::{Feature, FeatureStore, NoteRegistry, RouteNote};

// 重新导出常用类型，便于二进制文件使用
pub use client::{ClientArgs, GuideClient, OutputFormatter};
pub use config::RouteGuideConfig;
pub use error::RouteGuideError;
pub use server::{GrpcServer, RouteGuideService};

pub type Result<T> = std::result::Result<T, RouteGuideError>;
