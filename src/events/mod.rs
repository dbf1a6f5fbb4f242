//! Event types and observers.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`collision`] – overlap notifications emitted by the collision detector
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`input`] – discrete key presses and releases
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`timer`] – periodic timer firings
pub mod audio;
pub mod collision;
pub mod gamestate;
pub mod input;
pub mod switchdebug;
pub mod timer;
