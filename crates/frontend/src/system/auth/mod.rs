pub mod context;
pub mod guard;
pub mod session;
pub mod storage;

pub use context::{use_session, SessionContext, SessionStatus};
pub use session::{LocalStorageSession, MemorySession, Session, SessionStore};
