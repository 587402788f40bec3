use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::Mutex;

use crate::engine::Letter;

use super::error::RelayError;
use super::message::RelayMessage;
use super::GuessSink;

/// Controller-side relay endpoint.
pub struct RelayClient {
    stream: Mutex<TcpStream>,
    channel: String,
}

impl RelayClient {
    pub async fn connect(addr: &str, channel: &str, timeout: Duration) -> Result<Self, RelayError> {
        let stream = match tokio::time::timeout(timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => {
                return Err(RelayError::Connect {
                    addr: addr.to_string(),
                    source,
                })
            }
            Err(_) => {
                return Err(RelayError::Timeout {
                    addr: addr.to_string(),
                    seconds: timeout.as_secs(),
                })
            }
        };
        stream.set_nodelay(true)?;
        tracing::info!(addr, channel, "Connected to relay");
        Ok(Self {
            stream: Mutex::new(stream),
            channel: channel.to_string(),
        })
    }
}

impl GuessSink for RelayClient {
    async fn send(&self, letter: Letter) -> Result<(), RelayError> {
        let line = RelayMessage::new(&self.channel, letter).encode_line()?;
        let mut stream = self.stream.lock().await;
        stream.write_all(line.as_bytes()).await?;
        stream.flush().await?;
        Ok(())
    }
}
