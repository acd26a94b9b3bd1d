use crate::chat::events::{ClientEvent, ServerEvent};
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, Receiver, Sender};

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("realtime channel closed")]
    Closed,
    #[error("realtime channel already subscribed")]
    AlreadySubscribed,
}

/// A connected realtime socket.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn emit(&self, event: ClientEvent) -> Result<(), TransportError>;

    /// Hands out the stream of incoming events. Only one subscriber is supported.
    async fn subscribe(&self) -> Result<Receiver<ServerEvent>, TransportError>;

    async fn disconnect(&self);
}

/// An in-process transport; the other end is held by [`ChannelPeer`].
#[derive(Debug)]
pub struct ChannelTransport {
    outgoing: Mutex<Option<Sender<ClientEvent>>>,
    incoming: Mutex<Option<Receiver<ServerEvent>>>,
}

/// The server side of a [`ChannelTransport`].
#[derive(Debug)]
pub struct ChannelPeer {
    pub emitted: Receiver<ClientEvent>,
    pub push: Sender<ServerEvent>,
}

impl ChannelTransport {
    pub fn pair(buffer_size: usize) -> (ChannelTransport, ChannelPeer) {
        let (outgoing_tx, outgoing_rx) = mpsc::channel(buffer_size);
        let (incoming_tx, incoming_rx) = mpsc::channel(buffer_size);

        let transport = ChannelTransport {
            outgoing: Mutex::new(Some(outgoing_tx)),
            incoming: Mutex::new(Some(incoming_rx)),
        };
        let peer = ChannelPeer {
            emitted: outgoing_rx,
            push: incoming_tx,
        };
        (transport, peer)
    }
}

#[async_trait]
impl ChatTransport for ChannelTransport {
    async fn emit(&self, event: ClientEvent) -> Result<(), TransportError> {
        let tx = self.outgoing.lock().await.clone().ok_or(TransportError::Closed)?;
        tx.send(event).await.map_err(|_| TransportError::Closed)
    }

    async fn subscribe(&self) -> Result<Receiver<ServerEvent>, TransportError> {
        self.incoming.lock().await.take().ok_or(TransportError::AlreadySubscribed)
    }

    async fn disconnect(&self) {
        self.outgoing.lock().await.take();
    }
}
