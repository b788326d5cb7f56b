//! Commands Layer
//!
//! Async handlers the hosted platform mounts as serverless functions.
//! Domain errors become strings at this boundary so the JS bridge can
//! surface them untouched.

mod board_cmd;
mod card_cmd;
mod user_cmd;
mod event_cmd;

pub use board_cmd::*;
pub use card_cmd::*;
pub use user_cmd::*;
pub use event_cmd::*;
