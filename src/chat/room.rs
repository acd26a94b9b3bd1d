use crate::chat::events::{ClientEvent, ServerEvent};
use crate::chat::transport::{ChatTransport, TransportError};
use crate::domain::ChatMessage;
use crate::session::Session;
use futures::Stream;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, instrument};

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("no authentication token found")]
    NotAuthenticated,
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// The chat of a single ride.
pub struct ChatRoom {
    room_id: String,
    transport: Arc<dyn ChatTransport>,
    incoming: Receiver<ServerEvent>,
}

impl ChatRoom {
    /// Joins the room of `ride_id`. Requires a signed-in session.
    #[instrument(skip(transport, session))]
    pub async fn open(ride_id: u64, transport: Arc<dyn ChatTransport>, session: &Session) -> Result<Self, ChatError> {
        if !session.is_authenticated().await {
            return Err(ChatError::NotAuthenticated);
        }

        let room_id = ride_id.to_string();
        transport.emit(ClientEvent::JoinRoom(room_id.clone())).await?;
        let incoming = transport.subscribe().await?;
        info!(room_id = %room_id, "💬 Joined chat room");

        Ok(ChatRoom {
            room_id,
            transport,
            incoming,
        })
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Sends `content` to the room. Blank messages are not sent; returns whether one was.
    pub async fn send(&self, content: &str) -> Result<bool, ChatError> {
        if content.trim().is_empty() {
            return Ok(false);
        }

        self.transport
            .emit(ClientEvent::SendMessage {
                room_id: self.room_id.clone(),
                content: content.to_string(),
            })
            .await?;
        Ok(true)
    }

    /// Waits for the next message of this room. Returns `None` once the transport is gone.
    pub async fn next_message(&mut self) -> Option<ChatMessage> {
        while let Some(event) = self.incoming.recv().await {
            match event {
                ServerEvent::ReceiveMessage(message) if message.room_id == self.room_id => return Some(message),
                ServerEvent::ReceiveMessage(message) => {
                    debug!(room_id = %self.room_id, "Skipping message for room '{}'", message.room_id);
                }
            }
        }
        None
    }

    pub fn into_stream(self) -> impl Stream<Item = ChatMessage> {
        futures::stream::unfold(self, |mut room| async move { room.next_message().await.map(|message| (message, room)) })
    }

    #[instrument(skip(self), fields(room_id = %self.room_id))]
    pub async fn leave(self) {
        self.transport.disconnect().await;
        info!("💬 Left chat room");
    }
}
