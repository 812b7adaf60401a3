//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per named route. Pages assume the auth gate already ran; they
//! never redirect on their own.

pub mod friends;
pub mod group_detail;
pub mod groups;
pub mod history;
pub mod home;
pub mod login;
pub mod profile;
