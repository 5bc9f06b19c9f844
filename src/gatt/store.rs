//! Interface to the external attribute server.
//!
//! Registration hands the stack a set of immutable metadata records (UUID, permissions, storage
//! bounds) and gets opaque handles back; afterwards the stored values are addressed exclusively
//! through those handles. This mirrors the registration/value/notify split of SoftDevice-style
//! vendor stacks, which is the execution environment this crate targets.

use crate::{
    gatt::handle::{AttHandle, ConnHandle, ServiceHandle},
    uuid::AttUuid,
    Error,
};
use bitflags::bitflags;

/// Security requirement for accessing an attribute over a link.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SecurityMode {
    /// The access is not permitted at all.
    NoAccess,
    /// The access is permitted without encryption.
    Open,
    /// The access requires an encrypted link, no MITM protection.
    Encrypted,
    /// The access requires an encrypted link with MITM-protected bonding.
    EncryptedMitm,
}

/// Read and write requirements of a single attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AttributePermissions {
    pub read: SecurityMode,
    pub write: SecurityMode,
}

impl AttributePermissions {
    /// Open read access, no write access. The default for value attributes of read-only
    /// characteristics.
    pub const READ_ONLY: Self = AttributePermissions {
        read: SecurityMode::Open,
        write: SecurityMode::NoAccess,
    };
}

bitflags! {
    /// Characteristic properties, advertised to the peer in the characteristic declaration.
    pub struct Properties: u8 {
        const BROADCAST    = 0x01;
        const READ         = 0x02;
        const WRITE_NO_RSP = 0x04;
        const WRITE        = 0x08;
        const NOTIFY       = 0x10;
        const INDICATE     = 0x20;
        const AUTH_WRITES  = 0x40;
        const EXTENDED     = 0x80;
    }
}

bitflags! {
    /// Value layout of the Client Characteristic Configuration descriptor (CCCD).
    ///
    /// Transmitted as a little-endian `u16` written by the peer.
    pub struct CccdFlags: u16 {
        const NOTIFICATION = 0x0001;
        const INDICATION   = 0x0002;
    }
}

/// The type of a service (primary or secondary).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ServiceType {
    /// Primary service providing the main functionality of the device.
    Primary,
    /// Secondary service only intended to be referenced from another service.
    Secondary,
}

/// Immutable registration record of a single attribute.
///
/// Constructed once during initialization and handed to the attribute server; never mutated after
/// registration.
#[derive(Debug, Copy, Clone)]
pub struct AttributeValue<'a> {
    /// The attribute type.
    pub uuid: AttUuid,
    /// Who may read or write the stored value.
    pub permissions: AttributePermissions,
    /// Initial contents of the attribute.
    pub value: &'a [u8],
    /// Upper bound for the stored value's length in bytes.
    pub max_len: usize,
}

/// Metadata of a characteristic declaration.
#[derive(Debug, Copy, Clone)]
pub struct CharacteristicMetadata {
    /// Properties advertised in the declaration.
    pub properties: Properties,
    /// Permissions of the CCCD, if the characteristic has one.
    ///
    /// The CCCD itself is created by the attribute server as part of characteristic registration
    /// when this is `Some`.
    pub cccd: Option<AttributePermissions>,
}

/// Handles assigned to a characteristic's attributes during registration.
#[derive(Debug, Copy, Clone)]
pub struct CharacteristicHandles {
    /// Handle of the value attribute.
    pub value: AttHandle,
    /// Handle of the CCCD, if one was registered.
    pub cccd: Option<AttHandle>,
}

/// Attribute server hosted by the external stack.
///
/// Implemented once per supported stack; all methods map directly onto the stack's registration,
/// value-write and notification calls. Every failure is the stack's own status code, surfaced
/// unchanged as an [`Error`].
///
/// [`Error`]: ../enum.Error.html
pub trait AttributeStore {
    /// Registers a service record and returns its handle.
    fn add_service(
        &mut self,
        service_type: ServiceType,
        uuid: AttUuid,
    ) -> Result<ServiceHandle, Error>;

    /// Registers a characteristic (declaration, value attribute, and CCCD if requested) under the
    /// service `service`.
    fn add_characteristic(
        &mut self,
        service: ServiceHandle,
        metadata: &CharacteristicMetadata,
        value: &AttributeValue<'_>,
    ) -> Result<CharacteristicHandles, Error>;

    /// Registers a descriptor attached to the characteristic whose value attribute is
    /// `value_handle`.
    fn add_descriptor(
        &mut self,
        value_handle: AttHandle,
        value: &AttributeValue<'_>,
    ) -> Result<AttHandle, Error>;

    /// Overwrites the stored value of the attribute at `handle`.
    ///
    /// `conn` is the link the write is associated with, if any; values that aren't per-connection
    /// (like the temperature reading) can be written without one.
    fn set_value(
        &mut self,
        conn: Option<ConnHandle>,
        handle: AttHandle,
        value: &[u8],
    ) -> Result<(), Error>;

    /// Requests an unacknowledged notification of `value` for the attribute at `handle` to be
    /// pushed to the peer on `conn`.
    ///
    /// Whether the peer has subscribed via the CCCD is the stack's business; an unsubscribed peer
    /// typically results in an invalid-state code.
    fn notify(&mut self, conn: ConnHandle, handle: AttHandle, value: &[u8]) -> Result<(), Error>;
}
