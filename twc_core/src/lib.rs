//! This crate implements the core of an iCalendar feed for municipal waste
//! collection in the Twente Milieu service area. It resolves a household
//! address and its pickup schedule via the Ximmio waste API and serializes
//! the pickups into a calendar document that calendar clients can subscribe
//! to.
//!
//! [`feed::get`] ties the pieces together and is what the server and CLI
//! binaries call.

pub mod config;
pub mod error;
pub mod feed;
pub mod ical;
pub mod mapper;
pub mod waste;
pub mod waste_client;
