mod state;
mod token_store;

pub use state::{AuthSession, Session, SessionError};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};
