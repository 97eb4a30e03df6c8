//! Component trait system for the TUI
//!
//! Components declare their capabilities through traits instead of the App
//! knowing how to render, drive or export each one.
//!
//! # Traits Overview
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Interactive`] - Components that handle keyboard input
//! - [`Copyable`] - Components that provide clipboard content

mod component;
mod copyable;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive};
