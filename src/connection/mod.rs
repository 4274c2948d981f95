//! Connection lifecycle for a single IRC transport.
//!
//! A [`Connection`] owns the line buffer, the configured charset and the
//! connection state. Its read loop ([`Connection::run`]) feeds received
//! bytes through framing, decoding and parsing, answers `PING` before
//! anything else happens, tracks registration, and pushes every message
//! onto the [`DispatchQueue`] in arrival order.
//!
//! Sending goes straight to the transport, from the connection itself or
//! from any task holding a [`ConnectionHandle`]. There is no outbound
//! queue and no rate limiting: a slow transport pushes back through the
//! write call.
//!
//! Abnormal closes (peer EOF, transport errors) are reported to the caller
//! as [`ProtocolError::ConnectionLost`]; whether to reconnect is the
//! caller's decision. A fresh transport can be attached with
//! [`Connection::on_connected`].
//!
//! # Example
//!
//! ```no_run
//! use slirc_client::{connect, ConnectionConfig};
//!
//! # async fn demo() -> slirc_client::error::Result<()> {
//! let config = ConnectionConfig::default().with_name("libera");
//! let (mut connection, reader, mut queue) = connect("irc.libera.chat:6667", &config).await?;
//! let handle = connection.handle();
//!
//! tokio::spawn(async move {
//!     while let Some(message) = queue.recv().await {
//!         println!("{}", message);
//!     }
//! });
//!
//! handle.send_message("NICK", ["example_bot"]).await?;
//! handle.send_message("USER", ["example", "0", "*", "Example Bot"]).await?;
//! connection.run(reader).await
//! # }
//! ```

mod tcp;

pub use self::tcp::connect;

use std::sync::Arc;

use futures_util::FutureExt;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{watch, Mutex, Notify};
use tracing::{debug, error, info, warn};

use crate::charset::Charset;
use crate::config::ConnectionConfig;
use crate::error::{MessageParseError, ProtocolError, Result};
use crate::line::{LineBuffer, CRLF};
use crate::message::Message;
use crate::numeric::RPL_WELCOME;
use crate::queue::{dispatch_channel, DispatchQueue, DispatchSender};
use crate::state::ConnectionState;

/// Why a transport went away.
#[derive(Debug)]
pub enum CloseReason {
    /// The caller shut the connection down on purpose.
    Requested,
    /// The peer closed the stream.
    PeerEof,
    /// Reading or writing failed.
    Error(std::io::Error),
}

impl CloseReason {
    /// Whether the close was asked for locally.
    pub fn is_intentional(&self) -> bool {
        matches!(self, CloseReason::Requested)
    }
}

/// Write side and state shared between the connection and its handles.
struct Outbound<W> {
    name: String,
    charset: Charset,
    transport: Mutex<Option<W>>,
    state: watch::Sender<ConnectionState>,
    shutdown: Notify,
}

impl<W: AsyncWrite + Unpin + Send> Outbound<W> {
    async fn send(&self, message: &Message) -> Result<()> {
        let line = message.render();
        let encoded = self.charset.encode(&line)?;

        let mut frame = Vec::with_capacity(encoded.len() + CRLF.len());
        frame.extend_from_slice(&encoded);
        frame.extend_from_slice(CRLF);

        let mut transport = self.transport.lock().await;
        let writer = transport.as_mut().ok_or(ProtocolError::NotConnected)?;
        writer.write_all(&frame).await?;
        writer.flush().await?;

        debug!(connection = %self.name, message = %line, "sent");
        Ok(())
    }
}

/// Cloneable sending and observation handle for a [`Connection`].
pub struct ConnectionHandle<W> {
    outbound: Arc<Outbound<W>>,
}

impl<W> Clone for ConnectionHandle<W> {
    fn clone(&self) -> Self {
        Self {
            outbound: Arc::clone(&self.outbound),
        }
    }
}

impl<W: AsyncWrite + Unpin + Send> ConnectionHandle<W> {
    /// Render, encode and write one message.
    pub async fn send(&self, message: &Message) -> Result<()> {
        self.outbound.send(message).await
    }

    /// Build a message from a command and arguments and write it.
    pub async fn send_message<C, I, S>(&self, command: C, args: I) -> Result<()>
    where
        C: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let message = Message::new(command, args)?;
        self.send(&message).await
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        *self.outbound.state.borrow()
    }

    /// Wait until the server acknowledges registration.
    ///
    /// Fails with [`ProtocolError::NotConnected`] if no transport is
    /// attached, or as soon as the transport is closed or lost.
    pub async fn wait_registered(&self) -> Result<()> {
        let mut state = self.outbound.state.subscribe();
        loop {
            let current = *state.borrow_and_update();
            match current {
                ConnectionState::Registered => return Ok(()),
                ConnectionState::Disconnected => return Err(ProtocolError::NotConnected),
                ConnectionState::Connected => {}
            }
            // The sender lives in `Outbound`, which this handle keeps alive.
            let _ = state.changed().await;
        }
    }

    /// Shut the connection down on purpose.
    ///
    /// The write side is closed immediately, the state becomes
    /// [`ConnectionState::Disconnected`] and a running
    /// [`Connection::run`] loop returns `Ok(())`.
    pub async fn close(&self) -> Result<()> {
        let writer = self.outbound.transport.lock().await.take();
        self.outbound.state.send_replace(ConnectionState::Disconnected);
        self.outbound.shutdown.notify_one();
        if let Some(mut writer) = writer {
            writer.shutdown().await?;
        }
        Ok(())
    }
}

/// Stateful protocol engine bound to one transport at a time.
pub struct Connection<W> {
    name: String,
    read_buffer_size: usize,
    frames: LineBuffer,
    charset: Charset,
    outbound: Arc<Outbound<W>>,
    dispatch: DispatchSender,
}

impl<W: AsyncWrite + Unpin + Send> Connection<W> {
    /// Create a disconnected connection and the queue its messages go to.
    pub fn new(config: &ConnectionConfig) -> Result<(Self, DispatchQueue)> {
        let charset = config.resolve_charset()?;
        let (dispatch, queue) = dispatch_channel();
        let (state, _) = watch::channel(ConnectionState::Disconnected);

        let connection = Self {
            name: config.name.clone(),
            read_buffer_size: config.read_buffer_size.max(1),
            frames: LineBuffer::new(),
            charset,
            outbound: Arc::new(Outbound {
                name: config.name.clone(),
                charset,
                transport: Mutex::new(None),
                state,
                shutdown: Notify::new(),
            }),
            dispatch,
        };
        Ok((connection, queue))
    }

    /// Create a connection that is already attached to `writer`.
    pub async fn with_transport(writer: W, config: &ConnectionConfig) -> Result<(Self, DispatchQueue)> {
        let (mut connection, queue) = Self::new(config)?;
        connection.on_connected(writer).await;
        Ok((connection, queue))
    }

    /// Readable name from the configuration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Charset used for both directions.
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        *self.outbound.state.borrow()
    }

    /// A handle for sending from other tasks.
    pub fn handle(&self) -> ConnectionHandle<W> {
        ConnectionHandle {
            outbound: Arc::clone(&self.outbound),
        }
    }

    /// Attach a newly established transport.
    pub async fn on_connected(&mut self, writer: W) {
        // Forget a close request aimed at the previous transport.
        let _ = self.outbound.shutdown.notified().now_or_never();

        *self.outbound.transport.lock().await = Some(writer);
        self.frames.clear();
        self.outbound.state.send_replace(ConnectionState::Connected);
        debug!(connection = %self.name, "transport established");
    }

    /// Build a message from a command and arguments and write it.
    pub async fn send_message<C, I, S>(&self, command: C, args: I) -> Result<()>
    where
        C: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let message = Message::new(command, args)?;
        self.outbound.send(&message).await
    }

    /// Process a chunk of received bytes.
    ///
    /// Undecodable and malformed lines are logged and dropped. The only
    /// error returned is a transport failure while answering `PING`.
    pub async fn on_bytes_received(&mut self, data: &[u8]) -> Result<()> {
        for raw in self.frames.feed(data) {
            let Some(message) = self.decode_line(&raw) else {
                continue;
            };
            self.react(&message).await?;
            self.dispatch.push(message);
        }
        Ok(())
    }

    fn decode_line(&self, raw: &[u8]) -> Option<Message> {
        let line = match self.charset.decode(raw) {
            Ok(line) => line,
            Err(err) => {
                warn!(connection = %self.name, error = %err, "dropping undecodable line");
                return None;
            }
        };

        match Message::parse(&line) {
            Ok(message) => {
                debug!(connection = %self.name, message = ?message, "recv");
                Some(message)
            }
            Err(MessageParseError::EmptyMessage) => {
                debug!(connection = %self.name, "skipping empty line");
                None
            }
            Err(cause) => {
                let err = ProtocolError::Malformed {
                    line: line.into_owned(),
                    cause,
                };
                warn!(connection = %self.name, error = %err, "dropping malformed line");
                None
            }
        }
    }

    /// Built-in protocol bookkeeping, applied before a message is dispatched.
    async fn react(&mut self, message: &Message) -> Result<()> {
        if message.command() == "PING" {
            let pong = Message::new("PONG", message.last_arg())?;
            match self.outbound.send(&pong).await {
                Ok(()) => {}
                Err(ProtocolError::Io(err)) => return Err(ProtocolError::Io(err)),
                Err(err) => {
                    warn!(connection = %self.name, error = %err, "could not answer PING");
                }
            }
        } else if message.command() == RPL_WELCOME && self.state() == ConnectionState::Connected {
            self.outbound.state.send_replace(ConnectionState::Registered);
            info!(connection = %self.name, "registered");
        }
        Ok(())
    }

    /// Record the loss of the transport.
    ///
    /// Returns `Ok(())` for an intentional close and
    /// [`ProtocolError::ConnectionLost`] otherwise, so the caller can apply
    /// its reconnection policy.
    pub async fn on_transport_closed(&mut self, reason: CloseReason) -> Result<()> {
        self.outbound.state.send_replace(ConnectionState::Disconnected);
        self.frames.clear();
        let writer = self.outbound.transport.lock().await.take();

        match reason {
            CloseReason::Requested => {
                if let Some(mut writer) = writer {
                    if let Err(err) = writer.shutdown().await {
                        debug!(connection = %self.name, error = %err, "shutdown after close failed");
                    }
                }
                debug!(connection = %self.name, "connection closed");
                Ok(())
            }
            CloseReason::PeerEof => {
                info!(connection = %self.name, "EOF received");
                Err(ProtocolError::ConnectionLost { source: None })
            }
            CloseReason::Error(err) => {
                error!(connection = %self.name, error = %err, "connection lost");
                Err(ProtocolError::ConnectionLost { source: Some(err) })
            }
        }
    }

    /// Read from `reader` until the transport closes.
    ///
    /// This is the connection's dedicated read loop. It returns `Ok(())`
    /// after [`ConnectionHandle::close`] and `Err(ConnectionLost)` when the
    /// peer hangs up or the transport fails.
    pub async fn run<R: AsyncRead + Unpin>(&mut self, mut reader: R) -> Result<()> {
        if !self.state().is_connected() {
            return Err(ProtocolError::NotConnected);
        }

        let outbound = Arc::clone(&self.outbound);
        let mut buf = vec![0u8; self.read_buffer_size];

        loop {
            let reason = tokio::select! {
                _ = outbound.shutdown.notified() => CloseReason::Requested,
                read = reader.read(&mut buf) => match read {
                    Ok(0) => CloseReason::PeerEof,
                    Ok(n) => match self.on_bytes_received(&buf[..n]).await {
                        Ok(()) => continue,
                        Err(ProtocolError::Io(err)) => CloseReason::Error(err),
                        Err(err) => return Err(err),
                    },
                    Err(err) => CloseReason::Error(err),
                },
            };
            return self.on_transport_closed(reason).await;
        }
    }
}
