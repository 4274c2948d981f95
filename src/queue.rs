//! Ordered hand-off of received messages to consumer code.
//!
//! The connection's read loop is the only producer and must never block,
//! so the queue is an unbounded tokio channel. Consumers suspend in
//! [`DispatchQueue::recv`] (or poll it as a `Stream`) until the next
//! message arrives, and see messages in exactly the order they were
//! received.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::mpsc;
use tracing::debug;

use crate::message::Message;

/// Create a connected producer/consumer pair.
pub fn dispatch_channel() -> (DispatchSender, DispatchQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DispatchSender { tx }, DispatchQueue { rx })
}

/// Producer side, owned by the connection.
#[derive(Clone, Debug)]
pub struct DispatchSender {
    tx: mpsc::UnboundedSender<Message>,
}

impl DispatchSender {
    /// Enqueue a message without blocking.
    ///
    /// Returns `false` when the consumer is gone; the message is dropped.
    pub fn push(&self, message: Message) -> bool {
        match self.tx.send(message) {
            Ok(()) => true,
            Err(mpsc::error::SendError(message)) => {
                debug!(command = %message.command(), "dispatch consumer gone, dropping message");
                false
            }
        }
    }

    /// Whether the consumer side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer side, handed to the code that acts on messages.
#[derive(Debug)]
pub struct DispatchQueue {
    rx: mpsc::UnboundedReceiver<Message>,
}

impl DispatchQueue {
    /// Wait for the next message.
    ///
    /// Returns `None` once the connection is dropped and the queue drained.
    pub async fn recv(&mut self) -> Option<Message> {
        self.rx.recv().await
    }

    /// Take the next message if one is already queued.
    pub fn try_recv(&mut self) -> Option<Message> {
        self.rx.try_recv().ok()
    }
}

impl Stream for DispatchQueue {
    type Item = Message;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Message>> {
        self.rx.poll_recv(cx)
    }
}
