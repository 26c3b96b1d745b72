//! # Pizza Intake
//!
//! > **Order intake and status tracking for a pizza ordering app.**
//!
//! Orders come in over HTTP, are checked against a static menu, get an id, and then
//! move through `created → preparing → done → delivered` on a timer while callers
//! poll their status.
//!
//! ## 🏗️ Design
//!
//! ### One actor owns every order
//! The order registry is a [`ResourceActor`](framework::ResourceActor) that owns a
//! `HashMap<OrderId, Order>` and processes requests one at a time. Inserts, lookups,
//! status changes and deletes are therefore linearizable without a lock, and ids are
//! handed out by the actor itself (starting at 1, never reused).
//!
//! ### One task per order
//! Placing an order spawns a progression task
//! ([`lifecycle::scheduler`]) that sleeps, sends one status change, and repeats.
//! It is never awaited; if the order vanishes it quietly stops.
//!
//! ### Errors per layer
//! [`FrameworkError`](framework::FrameworkError) for plumbing,
//! [`OrderError`](order_actor::OrderError) for the domain,
//! [`ApiError`](api::ApiError) for HTTP. Each converts into the next with `?`.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - the generic registry actor, its client and a mock for tests.
//! - [`model`] - [`Order`](model::Order), [`Status`](model::Status), [`Menu`](model::Menu).
//! - [`order_actor`] - the `Order` entity, its actions and the [`OrderFactory`](order_actor::OrderFactory).
//! - [`clients`] - [`OrderClient`](clients::OrderClient), the typed handle to the registry.
//! - [`lifecycle`] - [`OrderSystem`](lifecycle::OrderSystem), the scheduler, tracing setup.
//! - [`api`] - axum routes and the realtime session proxy.
//! - [`config`] - environment configuration.
//!
//! ## 🚀 Running
//!
//! ```bash
//! OPENAI_API_KEY=sk-... RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
