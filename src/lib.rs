//! # Order Desk
//!
//! > **Purchase-order records with gap-free numbering and a printable page per order.**
//!
//! A small record-management tool: orders issued to suppliers, the supplier and
//! commercial-agent lists behind the order form, and a one-page PDF export.
//!
//! ## Core Concepts
//!
//! ### Gap-free numbering
//! Stored orders are always numbered `1..N`. Creating an order takes `max + 1`;
//! deleting one re-sequences the survivors. See [`sequence`].
//!
//! ### Deterministic layout
//! The printable page is laid out from fixed coordinates, with the content box growing
//! to fit the text and everything below it moving down. See [`document`].
//!
//! ## Architecture Notes
//!
//! Each collection (orders, suppliers, commercials) is owned by one
//! [`ResourceActor`](record_framework::ResourceActor) running in its own Tokio task.
//! Requests are processed one at a time, so a computed order number is always used
//! before anything else can observe the collection. After every mutation the actor hands
//! the whole collection to a [`PersistenceSink`](storage::PersistenceSink), which writes
//! it as a JSON array.
//!
//! ## Module Tour
//!
//! - [`model`]: `Order`, `Supplier`, `Commercial` and their creation payloads.
//! - [`sequence`]: the numbering rules, as pure functions.
//! - [`validation`]: "may this be saved?" checks.
//! - [`browse`]: search, sort and display formatting.
//! - [`order_actor`], [`directory_actor`]: record hooks and actor factories.
//! - [`clients`]: typed handles over the generic client.
//! - [`storage`]: key-value stores, persistence sink, fail-closed loading.
//! - [`document`]: the page composer and its canvases.
//! - [`lifecycle`]: [`OrderDesk`](lifecycle::OrderDesk) startup/shutdown, configuration,
//!   tracing.

pub mod browse;
pub mod clients;
pub mod directory_actor;
pub mod document;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod sequence;
pub mod storage;
pub mod validation;
