pub mod recorder;

pub use recorder::{RouteRecorder, RouteSummary};
