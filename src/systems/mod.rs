//! Systems - frame-wise passes over scene state
//!
//! Each system is a free function (or a small stateful driver) operating on
//! the owning scene's data; none of them keep global state.

pub mod interaction;
pub mod physics;

pub use interaction::InteractionDriver;
