use caa_guard_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

/// One-shot UDP exchange with an upstream DNS server.
pub struct DnsForwarder;

impl DnsForwarder {
    pub fn new() -> Self {
        Self
    }

    pub async fn exchange(
        &self,
        server: &str,
        request_bytes: &[u8],
        timeout_ms: u64,
    ) -> Result<Vec<u8>, DomainError> {
        let server_addr: SocketAddr = server
            .parse()
            .map_err(|e| DomainError::InvalidServerAddress(format!("{}: {}", server, e)))?;

        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind socket: {}", e)))?;

        socket.connect(server_addr).await.map_err(|e| {
            DomainError::IoError(format!("Failed to connect to {}: {}", server, e))
        })?;

        socket
            .send(request_bytes)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to send query: {}", e)))?;

        let mut response_buf = vec![0u8; 4096];
        let timeout = Duration::from_millis(timeout_ms);

        let len = tokio::time::timeout(timeout, socket.recv(&mut response_buf))
            .await
            .map_err(|_| DomainError::QueryTimeout {
                server: server.to_string(),
                timeout_ms,
            })?
            .map_err(|e| DomainError::IoError(format!("Failed to receive response: {}", e)))?;

        response_buf.truncate(len);
        Ok(response_buf)
    }
}

impl Default for DnsForwarder {
    fn default() -> Self {
        Self::new()
    }
}
