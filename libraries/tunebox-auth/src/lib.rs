//! TuneBox Auth Session
//!
//! Local mock of the auth collaborator: login/logout and the
//! logged-in/anonymous flag consumed by access-gated pages. There is no
//! credential verification, token handling, or persistence; any plausible
//! email/secret pair is accepted and the display name is derived from the
//! email local part.

#![forbid(unsafe_code)]

mod session;

pub use session::AuthSession;
