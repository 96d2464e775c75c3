//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw TCP sockets. Every accepted connection
//! gets its own MCP session on a cloned server handle; the number of live
//! sessions is capped by `TcpConfig::max_connections`.

use std::net::SocketAddr;
use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the TCP transport. Only returns on bind failure.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC over TCP, max {} sessions)",
            addr, self.config.max_connections
        );

        self.serve_listener(listener, server).await
    }

    /// Accept sessions on an already bound listener. Never returns.
    pub async fn serve_listener(
        self,
        listener: TcpListener,
        server: McpServer,
    ) -> TransportResult<()> {
        let slots = Arc::new(Semaphore::new(self.config.max_connections));

        loop {
            let (stream, peer_addr) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                    continue;
                }
            };

            let Ok(permit) = slots.clone().try_acquire_owned() else {
                warn!("Session limit reached, refusing {}", peer_addr);
                continue;
            };

            if let Err(e) = stream.set_nodelay(true) {
                debug!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
            }

            let server = server.clone();
            tokio::spawn(async move {
                Self::serve_session(server, stream, peer_addr).await;
                drop(permit);
            });
        }
    }

    /// Serve one MCP session until the client disconnects.
    async fn serve_session(server: McpServer, stream: TcpStream, peer_addr: SocketAddr) {
        info!("Accepted connection from {}", peer_addr);

        let service = match server.serve(stream).await {
            Ok(service) => service,
            Err(e) => {
                warn!("Failed to initialize session for {}: {}", peer_addr, e);
                return;
            }
        };

        match service.waiting().await {
            Ok(reason) => info!("Client {} disconnected ({:?})", peer_addr, reason),
            Err(e) => warn!("Session with {} ended with error: {}", peer_addr, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
    use tokio::time::{Duration, timeout};

    const INITIALIZE: &str = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":"#,
        r#"{"protocolVersion":"2024-11-05","capabilities":{},"#,
        r#""clientInfo":{"name":"tcp-test","version":"0.0.0"}}}"#,
        "\n"
    );

    async fn start(max_connections: usize) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let transport = TcpTransport::new(TcpConfig {
            port: addr.port(),
            host: "127.0.0.1".to_string(),
            max_connections,
        });
        tokio::spawn(transport.serve_listener(listener, McpServer::new(Config::default())));
        addr
    }

    async fn initialize(stream: &mut TcpStream) -> String {
        stream.write_all(INITIALIZE.as_bytes()).await.unwrap();
        let mut line = String::new();
        let mut reader = BufReader::new(stream);
        timeout(Duration::from_secs(5), reader.read_line(&mut line))
            .await
            .unwrap()
            .unwrap();
        line
    }

    #[test]
    fn test_address() {
        let transport = TcpTransport::new(TcpConfig::default());
        assert_eq!(transport.address(), "127.0.0.1:3000");
    }

    #[tokio::test]
    async fn test_session_is_served() {
        let addr = start(4).await;
        let mut client = TcpStream::connect(addr).await.unwrap();

        let response = initialize(&mut client).await;
        assert!(response.contains("serverInfo"));
        assert!(response.contains(r#""id":1"#));
    }

    #[tokio::test]
    async fn test_connections_over_limit_are_refused() {
        let addr = start(1).await;

        let mut first = TcpStream::connect(addr).await.unwrap();
        assert!(initialize(&mut first).await.contains("serverInfo"));

        let mut second = TcpStream::connect(addr).await.unwrap();
        let mut buf = [0u8; 64];
        let read = timeout(Duration::from_secs(5), second.read(&mut buf))
            .await
            .unwrap();
        assert!(matches!(read, Ok(0) | Err(_)));

        let messages = concat!(
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
            "\n"
        );
        first.write_all(messages.as_bytes()).await.unwrap();
        let mut line = String::new();
        let mut reader = BufReader::new(&mut first);
        timeout(Duration::from_secs(5), reader.read_line(&mut line))
            .await
            .unwrap()
            .unwrap();
        assert!(line.contains(r#""id":2"#));
    }
}
