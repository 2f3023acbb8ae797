//! # Event Bus Module
//!
//! Publish/subscribe channel for decoupled communication between the
//! annotation components and their observers.
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async broadcast receivers
//!
//! The bus is created by the annotation session and shared explicitly
//! (via `Arc`) with the store and capture components; there is no
//! process-global instance.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rastermark_core::event_bus::{
//!     AnnotateEvent, EventBus, EventCategory, EventFilter,
//! };
//!
//! let bus = Arc::new(EventBus::new());
//!
//! // Subscribe to collection events, e.g. to repopulate a selector
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Collection]),
//!     |event| {
//!         if let AnnotateEvent::Collection(change) = event {
//!             println!("collection changed: {}", change.description());
//!         }
//!     },
//! );
//!
//! // Unsubscribe when done
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
