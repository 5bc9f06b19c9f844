//! A Temperature service for GATT servers hosted by an external BLE stack.
//!
//! This crate implements the service-level logic of a Bluetooth Low Energy *Temperature* exposure:
//! it registers a service, a characteristic, and the associated descriptors with an attribute
//! server, tracks the active connection, and pushes updated sensor readings into the attribute
//! table, notifying a subscribed peer when possible.
//!
//! The stack itself (event dispatch, link layer, security manager) is not part of this crate. It
//! is abstracted behind the [`AttributeStore`] trait, which has to be implemented once for every
//! supported stack. Stack events are fed into the service through [`Event`].
//!
//! # Using the service
//!
//! Register the service once at startup and keep it around for the lifetime of the application:
//!
//! ```
//! # use ble_temperature::gatt::{AttributeStore, Event, TemperatureConfig, TemperatureService};
//! # fn demo(store: &mut impl AttributeStore) -> Result<(), ble_temperature::Error> {
//! let mut service = TemperatureService::new(store, &TemperatureConfig::default())?;
//!
//! // Forward stack events:
//! service.on_event(&Event::Connected { conn: ble_temperature::gatt::ConnHandle::from_raw(0) });
//!
//! // Push sensor readings; `InvalidState` just means nobody is listening right now.
//! match service.update(store, 2150) {
//!     Ok(()) | Err(ble_temperature::Error::InvalidState) => {}
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`AttributeStore`]: gatt/trait.AttributeStore.html
//! [`Event`]: gatt/enum.Event.html

// We're `#![no_std]`, except when we're testing
#![cfg_attr(not(test), no_std)]
// Deny a few warnings in doctests, since rustdoc `allow`s many warnings by default
#![doc(test(attr(deny(unused_imports, unused_must_use))))]
#![warn(rust_2018_idioms)]
// The claims of this lint are dubious, disable it
#![allow(clippy::trivially_copy_pass_by_ref)]

#[macro_use]
mod log;
#[macro_use]
mod utils;
pub mod bytes;
mod error;
pub mod gatt;
pub mod uuid;

pub use self::error::Error;
