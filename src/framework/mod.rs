//! Actor plumbing behind the order registry.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be stored by an actor
//! - [`ResourceActor`] - Actor that owns the records and serializes every access
//! - [`ResourceClient`] - Cloneable handle that sends requests to the actor
//! - [`FrameworkError`] - Plumbing errors
//!
//! # Testing
//!
//! See [`mock`] for a scripted stand-in that answers requests without a real actor.

pub mod core;
pub mod mock;

pub use core::*;
