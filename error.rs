use thiserror::Error;

/// RouteGuide 统一错误类型
#[derive(Error, Debug)]
pub enum RouteGuideError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// 请求参数缺失或越界，只影响当前调用
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// 数据集内容不合法（启动期致命错误）
    #[error("invalid dataset: {0}")]
    Dataset(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid listen address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("rpc failed: {0}")]
    Status(#[from] tonic::Status),
}

impl RouteGuideError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        RouteGuideError::InvalidArgument(msg.into())
    }
}

impl From<RouteGuideError> for tonic::Status {
    fn from(err: RouteGuideError) -> Self {
        match err {
            RouteGuideError::InvalidArgument(msg) => tonic::Status::invalid_argument(msg),
            RouteGuideError::Status(status) => status,
            other => tonic::Status::internal(other.to_string()),
        }
    }
}
