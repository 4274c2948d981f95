//! Plain TCP transport setup.

use std::time::Duration;

use socket2::{SockRef, TcpKeepalive};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpStream, ToSocketAddrs};
use tracing::warn;

use super::Connection;
use crate::config::ConnectionConfig;
use crate::error::Result;
use crate::queue::DispatchQueue;

/// Open a TCP connection and attach a [`Connection`] to its write half.
///
/// The read half is returned for [`Connection::run`].
pub async fn connect<A: ToSocketAddrs>(
    addr: A,
    config: &ConnectionConfig,
) -> Result<(Connection<OwnedWriteHalf>, OwnedReadHalf, DispatchQueue)> {
    let stream = TcpStream::connect(addr).await?;
    if let Err(e) = enable_keepalive(&stream) {
        warn!(connection = %config.name, "failed to enable TCP keepalive: {}", e);
    }

    let (reader, writer) = stream.into_split();
    let (connection, queue) = Connection::with_transport(writer, config).await?;
    Ok((connection, reader, queue))
}

fn enable_keepalive(stream: &TcpStream) -> std::io::Result<()> {
    let sock = SockRef::from(stream);
    let keepalive = TcpKeepalive::new()
        .with_time(Duration::from_secs(120))
        .with_interval(Duration::from_secs(30));

    sock.set_tcp_keepalive(&keepalive)
}
