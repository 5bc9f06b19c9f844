//! Attribute, service and connection handles.

use core::fmt;

/// A 16-bit handle uniquely identifying an attribute hosted by the attribute server.
///
/// The `0x0000` handle (`NULL`) is invalid and must not be used for actual attributes.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct AttHandle(u16);

impl AttHandle {
    /// The `0x0000` handle is not used for actual attributes, but as a special placeholder when no
    /// attribute handle is valid (eg. in error responses).
    pub const NULL: Self = AttHandle(0x0000);

    /// Returns the raw 16-bit integer identifying this handle.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Create an attribute handle from a raw u16
    pub fn from_raw(raw: u16) -> Self {
        AttHandle(raw)
    }
}

impl fmt::Debug for AttHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}

/// Handle of a service record registered with the attribute server.
///
/// Only used to attach characteristics to their service; it carries no other meaning to this
/// crate.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct ServiceHandle(u16);

impl ServiceHandle {
    /// Returns the raw 16-bit integer identifying this handle.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Creates a service handle from a raw u16
    pub fn from_raw(raw: u16) -> Self {
        ServiceHandle(raw)
    }
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}

/// Identifier of an established link, assigned by the stack on connection.
///
/// The stack's "invalid connection handle" sentinel has no counterpart here; an absent link is
/// expressed as `Option::<ConnHandle>::None`.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct ConnHandle(u16);

impl ConnHandle {
    /// Returns the raw 16-bit integer identifying this connection.
    pub fn raw(&self) -> u16 {
        self.0
    }

    /// Creates a connection handle from a raw u16
    pub fn from_raw(raw: u16) -> Self {
        ConnHandle(raw)
    }
}

impl fmt::Debug for ConnHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}
