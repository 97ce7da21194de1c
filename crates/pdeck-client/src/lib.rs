//! # pdeck-client - Profile Backend Client
//!
//! The HTTP boundary to the backend that spawns browser profiles, injects
//! scripts and reports status. Nothing here touches panel state.
//!
//! ## Public API
//!
//! ### Client (`client`)
//! - [`StatusClient`] - Async trait (Send variant) the app layer is generic over
//! - [`LocalStatusClient`] - Non-Send variant generated by `trait_variant`
//! - [`HttpStatusClient`] - reqwest implementation
//!
//! ### Wire Protocol (`protocol`)
//! - [`StartAck`], [`InjectStats`], [`StatusSnapshot`], [`StatusLookup`] - Parsed results
//! - [`InjectOptions`] - Optional script source for inject
//!
//! ### Test Helpers (`test_utils`, feature `test-helpers`)
//! - `FakeStatusClient` - Scripted in-memory client that records calls

pub mod client;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{HttpStatusClient, LocalStatusClient, StatusClient};
pub use protocol::{InjectOptions, InjectStats, StartAck, StatusLookup, StatusSnapshot};
