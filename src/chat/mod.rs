mod events;
mod room;
mod transport;

pub use events::{ClientEvent, ServerEvent};
pub use room::{ChatError, ChatRoom};
pub use transport::{ChannelPeer, ChannelTransport, ChatTransport, TransportError};
