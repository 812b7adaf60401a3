//! Reusable UI components shared by route pages.

pub mod auth_gate;
pub mod nav_bar;
