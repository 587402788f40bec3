use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::shutdown::ShutdownHandle;

use super::error::RelayError;
use super::message::{accept_line, Rejected};
use super::GuessHandler;

/// Display-side relay endpoint.
///
/// Accepts any number of controllers. Every valid line on the configured
/// channel is handed to the [`GuessHandler`]; everything else is logged and
/// dropped without closing the connection.
pub struct RelayServer {
    listener: TcpListener,
    channel: Arc<str>,
}

impl RelayServer {
    pub async fn bind(addr: &str, channel: &str) -> Result<Self, RelayError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| RelayError::Bind {
                addr: addr.to_string(),
                source,
            })?;
        tracing::info!(addr, channel, "Relay listening");
        Ok(Self {
            listener,
            channel: Arc::from(channel),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, RelayError> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn run<H: GuessHandler>(self, handler: H, shutdown: ShutdownHandle) {
        let handler = Arc::new(handler);
        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        tracing::info!(%peer, "Controller connected");
                        tokio::spawn(handle_connection(
                            stream,
                            peer,
                            Arc::clone(&self.channel),
                            Arc::clone(&handler),
                            shutdown.clone(),
                        ));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Relay accept failed");
                    }
                },
            }
        }
        tracing::debug!("Relay server stopped");
    }
}

async fn handle_connection<H: GuessHandler>(
    stream: TcpStream,
    peer: SocketAddr,
    channel: Arc<str>,
    handler: Arc<H>,
    shutdown: ShutdownHandle,
) {
    let mut lines = BufReader::new(stream).lines();
    loop {
        let line = tokio::select! {
            _ = shutdown.wait() => break,
            line = lines.next_line() => line,
        };
        match line {
            Ok(Some(line)) => match accept_line(&line, &channel) {
                Ok(letter) => {
                    tracing::debug!(%peer, %letter, "Relayed guess");
                    if !handler.on_receive(letter) {
                        tracing::debug!(%peer, "Guess handler closed");
                        break;
                    }
                }
                Err(Rejected::OtherChannel(other)) => {
                    tracing::debug!(%peer, channel = %other, "Ignoring message for other channel");
                }
                Err(Rejected::InvalidLetter(letter)) => {
                    tracing::warn!(%peer, %letter, "Ignoring invalid relayed letter");
                }
                Err(Rejected::Malformed) => {
                    tracing::warn!(%peer, "Ignoring malformed relay message");
                }
            },
            Ok(None) => break,
            Err(err) => {
                tracing::warn!(%peer, error = %err, "Relay read failed");
                break;
            }
        }
    }
    tracing::info!(%peer, "Controller disconnected");
}
