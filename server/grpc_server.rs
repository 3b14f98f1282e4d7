use std::future::Future;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::protocol::RouteGuideServer;
use crate::server::RouteGuideService;
use crate::Result;

pub struct GrpcServer {
    config: ServerConfig,
    service: RouteGuideService,
}

impl GrpcServer {
    pub fn new(config: ServerConfig, service: RouteGuideService) -> Self {
        let service = service.with_channel_capacity(config.channel_capacity);
        Self { config, service }
    }

    /// 绑定配置中的地址并一直服务到 Ctrl-C
    pub async fn start(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;

        info!("RouteGuide server listening on {}", listener.local_addr()?);
        info!("Ready to accept connections");

        self.serve(listener, shutdown_signal()).await
    }

    /// 在已绑定的监听器上服务，`shutdown` 完成后优雅退出
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let mut builder =
            Server::builder().concurrency_limit_per_connection(self.config.concurrency_limit);
        if self.config.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(self.config.timeout));
        }

        builder
            .add_service(RouteGuideServer::new(self.service))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
            .await?;

        info!("RouteGuide server shutting down");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C"),
        Err(e) => {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
