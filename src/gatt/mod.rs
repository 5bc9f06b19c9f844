//! Service-level GATT support: the attribute-server seam and the Temperature service.
//!
//! GATT exposes device state as a table of attributes grouped into *services* and
//! *characteristics*. This module does not implement the attribute protocol itself (that lives in
//! the external stack); it provides the metadata records and the [`AttributeStore`] trait used to
//! register attributes with such a stack, the [`Event`]s the stack feeds back, and the
//! [`TemperatureService`] built on top.
//!
//! [`AttributeStore`]: trait.AttributeStore.html
//! [`Event`]: enum.Event.html
//! [`TemperatureService`]: struct.TemperatureService.html

mod handle;
mod store;
mod temperature;

pub use self::handle::{AttHandle, ConnHandle, ServiceHandle};
pub use self::store::{
    AttributePermissions, AttributeStore, AttributeValue, CccdFlags, CharacteristicHandles,
    CharacteristicMetadata, Properties, SecurityMode, ServiceType,
};
pub use self::temperature::{
    EventHandler, ReportReference, TemperatureConfig, TemperatureEvent, TemperatureService,
    CCCD_UUID, REPORT_REFERENCE_UUID, TEMPERATURE_CHAR_UUID, TEMPERATURE_INVALID,
    TEMPERATURE_SERVICE_UUID,
};

use crate::utils::HexSlice;
use core::fmt;

/// An event forwarded from the stack's dispatch entry point.
///
/// The stack produces many more event kinds than these; only the three categories below are
/// meaningful to the services in this crate, so only they need to be forwarded. Writes targeting
/// handles a service doesn't own are ignored by that service, so it is fine to forward every
/// attribute write.
#[derive(Copy, Clone)]
pub enum Event<'a> {
    /// A link was established.
    Connected {
        /// Identifier assigned to the new link.
        conn: ConnHandle,
    },

    /// The active link was terminated (for whatever reason; the cause doesn't matter here).
    Disconnected,

    /// The peer wrote the attribute at `handle`.
    AttributeWrite {
        /// Handle of the written attribute.
        handle: AttHandle,
        /// The payload carried by the write.
        value: &'a [u8],
    },
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Connected { conn } => f.debug_struct("Connected").field("conn", conn).finish(),
            Event::Disconnected => f.write_str("Disconnected"),
            Event::AttributeWrite { handle, value } => f
                .debug_struct("AttributeWrite")
                .field("handle", handle)
                .field("value", &HexSlice(*value))
                .finish(),
        }
    }
}
