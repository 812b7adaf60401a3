//! Session-backend boundary: user DTOs and the current-user lookup.
//!
//! DESIGN
//! ======
//! The auth backend owns the session. This module only reads it, so the
//! guard sees a single async `current_user` call behind `SessionSource`.

pub mod api;
pub mod types;
