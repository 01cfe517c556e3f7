//! Page controllers, one per interactive feature.
//!
//! Every controller binds to the markup it expects and quietly does nothing
//! when that markup is absent, so a page that carries only a subset of the
//! features can load the same bundle.

pub mod access;
pub mod colors;
pub mod donation;
pub mod menu;
pub mod newsletter;
pub mod portfolio;
pub mod rain;
pub mod scrollspy;
pub mod share;
pub mod slider;
pub mod theme;
