use core::fmt;

enum_with_unknown! {
    /// Status codes reported by this crate and by the external attribute server.
    ///
    /// The numeric values follow the vendor convention of the stacks this crate binds to (`0`
    /// would denote success and is never constructed; successful calls return `Ok`). Codes
    /// produced by the stack are surfaced unchanged: a code without a named variant ends up as
    /// `Unknown`.
    ///
    /// The only error synthesized locally is `InvalidState`, returned by
    /// [`TemperatureService::update`] when no peer can be notified. Callers should treat it as a
    /// normal outcome, not a failure.
    ///
    /// [`TemperatureService::update`]: gatt/struct.TemperatureService.html#method.update
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub enum Error(u32) {
        /// The stack ran out of attribute table or queue memory.
        NoMemory = 4,
        /// No attribute with the given handle exists.
        NotFound = 5,
        /// The operation is not supported in the current configuration.
        NotSupported = 6,
        /// A parameter had an invalid value.
        InvalidParameter = 7,
        /// The operation is not allowed in the current connection state.
        ///
        /// Raised locally when a value update cannot be notified because no peer is connected or
        /// the service was registered without notification support.
        InvalidState = 8,
        /// A buffer or payload had an invalid length.
        InvalidLength = 9,
        /// Invalid data supplied for the operation.
        InvalidData = 11,
        /// Data does not fit into the destination buffer.
        DataSize = 12,
        /// Access to the attribute is forbidden.
        Forbidden = 15,
        /// The stack is busy; retry later.
        Busy = 17
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoMemory => f.write_str("out of memory"),
            Error::NotFound => f.write_str("attribute not found"),
            Error::NotSupported => f.write_str("operation not supported"),
            Error::InvalidParameter => f.write_str("invalid parameter"),
            Error::InvalidState => f.write_str("invalid state for operation"),
            Error::InvalidLength => f.write_str("invalid length"),
            Error::InvalidData => f.write_str("invalid data"),
            Error::DataSize => f.write_str("data does not fit into buffer"),
            Error::Forbidden => f.write_str("access forbidden"),
            Error::Busy => f.write_str("stack busy"),
            Error::Unknown(code) => write!(f, "stack error {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_raw_codes() {
        assert_eq!(Error::from(8), Error::InvalidState);
        assert_eq!(u32::from(Error::InvalidState), 8);
        // Codes this crate doesn't know about pass through unchanged.
        assert_eq!(u32::from(Error::from(0x3001)), 0x3001);
    }
}
