//! Daily game: session state machine, context, share text, and the
//! persistence-aware driver used by the front ends

mod context;
mod daily;
mod session;
mod share;

pub use context::SessionContext;
pub use daily::{DailyGame, KeyEffect};
pub use session::{Cursor, GameStatus, Key, Outcome, Session, SessionError};
pub use share::{emoji_rows, share_text};
