pub mod grpc_server;
pub mod route_guide;

pub use grpc_server::GrpcServer;
pub use route_guide::RouteGuideService;
