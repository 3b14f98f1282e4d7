//! RouteGuide 的 protobuf 消息与 gRPC 桩代码
//!
//! 消息结构与 proto/route_guide.proto 保持一致；服务端 trait 和客户端由 build.rs 生成。

pub mod convert;
pub mod messages;

pub use messages::{Feature, Point, Rectangle, RouteNote, RouteSummary};

include!(concat!(env!("OUT_DIR"), "/routeguide.RouteGuide.rs"));

pub use route_guide_client::RouteGuideClient;
pub use route_guide_server::{RouteGuide, RouteGuideServer};
