//! The Temperature service.
//!
//! Exposes a single 16-bit temperature reading as a readable (and optionally notifiable)
//! characteristic. The service owns no attribute storage itself; it registers its attributes with
//! an [`AttributeStore`] at construction time and addresses them through the returned handles
//! afterwards.
//!
//! The service tracks exactly one link. Multi-connection setups are out of scope; a second
//! `Connected` event simply replaces the tracked handle.
//!
//! [`AttributeStore`]: trait.AttributeStore.html

use crate::{
    bytes::{ByteReader, ByteWriter, ToBytes},
    gatt::handle::{AttHandle, ConnHandle, ServiceHandle},
    gatt::store::{
        AttributePermissions, AttributeStore, AttributeValue, CccdFlags, CharacteristicHandles,
        CharacteristicMetadata, Properties, SecurityMode, ServiceType,
    },
    gatt::Event,
    uuid::Uuid16,
    Error,
};

/// UUID of the Health Thermometer service.
pub const TEMPERATURE_SERVICE_UUID: Uuid16 = Uuid16(0x1809);

/// UUID of the Temperature characteristic.
pub const TEMPERATURE_CHAR_UUID: Uuid16 = Uuid16(0x2A6E);

/// UUID of the Client Characteristic Configuration descriptor.
pub const CCCD_UUID: Uuid16 = Uuid16(0x2902);

/// UUID of the Report Reference descriptor.
pub const REPORT_REFERENCE_UUID: Uuid16 = Uuid16(0x2908);

/// Sentinel marking the absence of a valid reading.
///
/// [`TemperatureService::update`] suppresses writes of unchanged values, so this value itself can
/// never be pushed to the attribute store once a real reading has been recorded.
///
/// [`TemperatureService::update`]: struct.TemperatureService.html#method.update
pub const TEMPERATURE_INVALID: u16 = 0xFFFF;

/// Encoded size of the temperature value (big-endian `u16`).
const TEMPERATURE_VALUE_LEN: usize = 2;

/// Size of a well-formed CCCD write payload.
const CCCD_VALUE_LEN: usize = 2;

/// Notification configuration change reported to the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TemperatureEvent {
    /// The peer subscribed to value notifications.
    NotificationsEnabled,
    /// The peer unsubscribed from value notifications.
    NotificationsDisabled,
}

/// Application callback invoked (synchronously, from `on_event`) on CCCD changes.
pub type EventHandler = fn(TemperatureEvent);

/// Contents of a Report Reference descriptor.
///
/// Links the characteristic to a report in a higher-level profile (eg. HID).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReportReference {
    /// Identifier of the referenced report.
    pub report_id: u8,
    /// Type of the referenced report.
    pub report_type: u8,
}

impl ReportReference {
    /// Encoded size of a Report Reference value.
    pub const ENCODED_LEN: usize = 2;
}

impl ToBytes for ReportReference {
    fn to_bytes(&self, writer: &mut ByteWriter<'_>) -> Result<(), Error> {
        writer.write_u8(self.report_id)?;
        writer.write_u8(self.report_type)
    }
}

/// Configuration handed to [`TemperatureService::new`].
///
/// Only consulted during registration; the service does not hold on to it.
///
/// [`TemperatureService::new`]: struct.TemperatureService.html#method.new
#[derive(Debug, Copy, Clone)]
pub struct TemperatureConfig {
    /// Whether the characteristic supports notifications (fixed for the service's lifetime).
    pub notifications_supported: bool,
    /// Initial contents of the value attribute.
    pub initial_value: u16,
    /// Access permissions of the value attribute.
    pub value_permissions: AttributePermissions,
    /// Write permission of the CCCD. Reading the CCCD is always possible without authentication.
    pub cccd_write_permission: SecurityMode,
    /// Registers a Report Reference descriptor when present.
    pub report_ref: Option<ReportReference>,
    /// Read permission of the Report Reference descriptor. It is never writable.
    pub report_ref_read_permission: SecurityMode,
    /// Application callback for notification configuration changes.
    pub handler: Option<EventHandler>,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            notifications_supported: true,
            initial_value: TEMPERATURE_INVALID,
            value_permissions: AttributePermissions::READ_ONLY,
            cccd_write_permission: SecurityMode::Open,
            report_ref: None,
            report_ref_read_permission: SecurityMode::Open,
            handler: None,
        }
    }
}

/// A registered Temperature service instance.
///
/// Created once at startup via [`new`] and kept alive for the lifetime of the application. All
/// mutation happens through [`on_event`] and [`update`]; the execution environment is expected to
/// serialize those calls (single event loop, run-to-completion handlers), so no locking is
/// involved.
///
/// [`new`]: #method.new
/// [`on_event`]: #method.on_event
/// [`update`]: #method.update
pub struct TemperatureService {
    handler: Option<EventHandler>,
    conn: Option<ConnHandle>,
    notifications_supported: bool,
    notifications_enabled: bool,
    last_value: u16,
    service_handle: ServiceHandle,
    handles: CharacteristicHandles,
    report_ref_handle: Option<AttHandle>,
}

impl TemperatureService {
    /// Registers the service with `store` according to `config`.
    ///
    /// Registration order: service record, then the characteristic (with a CCCD iff notifications
    /// are supported), then the Report Reference descriptor iff one is configured.
    ///
    /// The first failing registration call aborts the sequence and its status code is returned
    /// unchanged. No cleanup of already-registered records is attempted; the stack is assumed to
    /// discard the partial instance.
    pub fn new(
        store: &mut impl AttributeStore,
        config: &TemperatureConfig,
    ) -> Result<Self, Error> {
        let service_handle =
            store.add_service(ServiceType::Primary, TEMPERATURE_SERVICE_UUID.into())?;

        let mut properties = Properties::READ;
        if config.notifications_supported {
            properties |= Properties::NOTIFY;
        }

        let metadata = CharacteristicMetadata {
            properties,
            cccd: if config.notifications_supported {
                // Reading the CCCD must be possible without authentication.
                Some(AttributePermissions {
                    read: SecurityMode::Open,
                    write: config.cccd_write_permission,
                })
            } else {
                None
            },
        };

        let mut initial = [0; TEMPERATURE_VALUE_LEN];
        ByteWriter::new(&mut initial).write_u16_be(config.initial_value)?;

        let handles = store.add_characteristic(
            service_handle,
            &metadata,
            &AttributeValue {
                uuid: TEMPERATURE_CHAR_UUID.into(),
                permissions: config.value_permissions,
                value: &initial,
                max_len: TEMPERATURE_VALUE_LEN,
            },
        )?;

        let report_ref_handle = match &config.report_ref {
            Some(report_ref) => {
                let mut encoded = [0; ReportReference::ENCODED_LEN];
                report_ref.to_bytes(&mut ByteWriter::new(&mut encoded))?;

                Some(store.add_descriptor(
                    handles.value,
                    &AttributeValue {
                        uuid: REPORT_REFERENCE_UUID.into(),
                        permissions: AttributePermissions {
                            read: config.report_ref_read_permission,
                            write: SecurityMode::NoAccess,
                        },
                        value: &encoded,
                        max_len: ReportReference::ENCODED_LEN,
                    },
                )?)
            }
            None => None,
        };

        info!("temperature service registered: {:?}", handles);

        Ok(Self {
            handler: config.handler,
            conn: None,
            notifications_supported: config.notifications_supported,
            notifications_enabled: false,
            last_value: TEMPERATURE_INVALID,
            service_handle,
            handles,
            report_ref_handle,
        })
    }

    /// Processes an event forwarded from the stack.
    ///
    /// Connect and disconnect events only adjust the tracked link. A disconnect deliberately
    /// leaves the notification flag alone: bonded peers may rely on their CCCD configuration
    /// surviving a reconnect, and the CCCD value itself lives in the attribute server anyway.
    ///
    /// Write events are inspected only when notifications are supported; a write is acted upon iff
    /// it targets the CCCD and carries exactly 2 bytes. Everything else is ignored.
    pub fn on_event(&mut self, event: &Event<'_>) {
        match *event {
            Event::Connected { conn } => {
                trace!("connected: {:?}", conn);
                self.conn = Some(conn);
            }
            Event::Disconnected => {
                trace!("disconnected");
                self.conn = None;
            }
            Event::AttributeWrite { handle, value } => self.on_write(handle, value),
        }
    }

    fn on_write(&mut self, handle: AttHandle, value: &[u8]) {
        if !self.notifications_supported {
            return;
        }

        match self.handles.cccd {
            Some(cccd) if handle == cccd && value.len() == CCCD_VALUE_LEN => {}
            _ => return,
        }

        let raw = match ByteReader::new(value).read_u16_le() {
            Ok(raw) => raw,
            // Unreachable, the length was checked above.
            Err(_) => return,
        };

        let flags = CccdFlags::from_bits_truncate(raw);
        let enabled = flags.contains(CccdFlags::NOTIFICATION);
        debug!("cccd write: {:?} -> notifications_enabled={}", flags, enabled);
        self.notifications_enabled = enabled;

        if let Some(handler) = self.handler {
            handler(if enabled {
                TemperatureEvent::NotificationsEnabled
            } else {
                TemperatureEvent::NotificationsDisabled
            });
        }
    }

    /// Pushes a new reading into the attribute store and notifies the connected peer.
    ///
    /// A value equal to the last recorded one is a complete no-op returning `Ok(())`. Otherwise
    /// the value is encoded as a big-endian `u16`, written to the value attribute, and - when a
    /// peer is connected and the service supports notifications - pushed to that peer.
    ///
    /// `Err(Error::InvalidState)` means the store write went through but nobody could be
    /// notified (no connection, or notifications unsupported). This is the expected outcome while
    /// sampling continues without a subscribed peer and should not be treated as a failure.
    ///
    /// The value is recorded as "last sent" *before* the store write is attempted, so a reading
    /// whose write failed will not be retried when it is reported again. This matches the
    /// behavior of the stacks this service was written against.
    pub fn update(&mut self, store: &mut impl AttributeStore, value: u16) -> Result<(), Error> {
        if value == self.last_value {
            trace!("update: {} unchanged, skipping", value);
            return Ok(());
        }

        let mut encoded = [0; TEMPERATURE_VALUE_LEN];
        ByteWriter::new(&mut encoded).write_u16_be(value)?;

        self.last_value = value;
        store.set_value(self.conn, self.handles.value, &encoded)?;

        match self.conn {
            Some(conn) if self.notifications_supported => {
                trace!("update: notifying {:?} of {}", conn, value);
                store.notify(conn, self.handles.value, &encoded)
            }
            _ => Err(Error::InvalidState),
        }
    }

    /// Returns whether a link is currently tracked.
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Returns whether the peer has notifications enabled via the CCCD.
    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    /// Returns the last value recorded by [`update`], or [`TEMPERATURE_INVALID`] if none was.
    ///
    /// [`update`]: #method.update
    /// [`TEMPERATURE_INVALID`]: constant.TEMPERATURE_INVALID.html
    pub fn last_value(&self) -> u16 {
        self.last_value
    }

    /// Returns the handle of the registered service record.
    pub fn service_handle(&self) -> ServiceHandle {
        self.service_handle
    }

    /// Returns the attribute handles of the temperature characteristic.
    pub fn handles(&self) -> &CharacteristicHandles {
        &self.handles
    }

    /// Returns the handle of the Report Reference descriptor, if one was registered.
    pub fn report_ref_handle(&self) -> Option<AttHandle> {
        self.report_ref_handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uuid::AttUuid;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RegisteredService {
        service_type: ServiceType,
        uuid: AttUuid,
    }

    struct RegisteredCharacteristic {
        service: ServiceHandle,
        properties: Properties,
        cccd: Option<AttributePermissions>,
        uuid: AttUuid,
        initial: Vec<u8>,
        max_len: usize,
    }

    struct RegisteredDescriptor {
        parent: AttHandle,
        uuid: AttUuid,
        permissions: AttributePermissions,
        value: Vec<u8>,
    }

    /// In-memory attribute server recording every call made to it.
    #[derive(Default)]
    struct FakeStore {
        next_handle: u16,
        services: Vec<RegisteredService>,
        characteristics: Vec<RegisteredCharacteristic>,
        descriptors: Vec<RegisteredDescriptor>,
        value_writes: Vec<(Option<ConnHandle>, AttHandle, Vec<u8>)>,
        notifications: Vec<(ConnHandle, AttHandle, Vec<u8>)>,
        fail_add_service: Option<Error>,
        fail_set_value: Option<Error>,
        fail_notify: Option<Error>,
    }

    impl FakeStore {
        fn alloc(&mut self) -> u16 {
            self.next_handle += 1;
            self.next_handle
        }
    }

    impl AttributeStore for FakeStore {
        fn add_service(
            &mut self,
            service_type: ServiceType,
            uuid: AttUuid,
        ) -> Result<ServiceHandle, Error> {
            if let Some(e) = self.fail_add_service {
                return Err(e);
            }
            let handle = ServiceHandle::from_raw(self.alloc());
            self.services.push(RegisteredService { service_type, uuid });
            Ok(handle)
        }

        fn add_characteristic(
            &mut self,
            service: ServiceHandle,
            metadata: &CharacteristicMetadata,
            value: &AttributeValue<'_>,
        ) -> Result<CharacteristicHandles, Error> {
            let handles = CharacteristicHandles {
                value: AttHandle::from_raw(self.alloc()),
                cccd: metadata.cccd.map(|_| AttHandle::from_raw(self.alloc())),
            };
            self.characteristics.push(RegisteredCharacteristic {
                service,
                properties: metadata.properties,
                cccd: metadata.cccd,
                uuid: value.uuid,
                initial: value.value.to_vec(),
                max_len: value.max_len,
            });
            Ok(handles)
        }

        fn add_descriptor(
            &mut self,
            value_handle: AttHandle,
            value: &AttributeValue<'_>,
        ) -> Result<AttHandle, Error> {
            let handle = AttHandle::from_raw(self.alloc());
            self.descriptors.push(RegisteredDescriptor {
                parent: value_handle,
                uuid: value.uuid,
                permissions: value.permissions,
                value: value.value.to_vec(),
            });
            Ok(handle)
        }

        fn set_value(
            &mut self,
            conn: Option<ConnHandle>,
            handle: AttHandle,
            value: &[u8],
        ) -> Result<(), Error> {
            if let Some(e) = self.fail_set_value {
                return Err(e);
            }
            self.value_writes.push((conn, handle, value.to_vec()));
            Ok(())
        }

        fn notify(
            &mut self,
            conn: ConnHandle,
            handle: AttHandle,
            value: &[u8],
        ) -> Result<(), Error> {
            if let Some(e) = self.fail_notify {
                return Err(e);
            }
            self.notifications.push((conn, handle, value.to_vec()));
            Ok(())
        }
    }

    fn service(store: &mut FakeStore) -> TemperatureService {
        TemperatureService::new(store, &TemperatureConfig::default()).unwrap()
    }

    fn connect(svc: &mut TemperatureService, raw: u16) {
        svc.on_event(&Event::Connected {
            conn: ConnHandle::from_raw(raw),
        });
    }

    fn write_cccd(svc: &mut TemperatureService, payload: &[u8]) {
        let cccd = svc.handles().cccd.unwrap();
        svc.on_event(&Event::AttributeWrite {
            handle: cccd,
            value: payload,
        });
    }

    #[test]
    fn registration_with_notifications() {
        let mut store = FakeStore::default();
        let svc = service(&mut store);

        assert_eq!(store.services.len(), 1);
        assert_eq!(store.services[0].service_type, ServiceType::Primary);
        assert_eq!(store.services[0].uuid, AttUuid::from(TEMPERATURE_SERVICE_UUID));

        let ch = &store.characteristics[0];
        assert_eq!(ch.service, svc.service_handle());
        assert_eq!(ch.properties, Properties::READ | Properties::NOTIFY);
        assert_eq!(ch.uuid, AttUuid::from(TEMPERATURE_CHAR_UUID));
        assert_eq!(ch.initial, vec![0xFF, 0xFF]);
        assert_eq!(ch.max_len, 2);
        assert_eq!(
            ch.cccd,
            Some(AttributePermissions {
                read: SecurityMode::Open,
                write: SecurityMode::Open,
            })
        );
        assert!(svc.handles().cccd.is_some());

        assert!(store.descriptors.is_empty());
        assert_eq!(svc.report_ref_handle(), None);
        assert!(!svc.is_connected());
        assert!(!svc.notifications_enabled());
        assert_eq!(svc.last_value(), TEMPERATURE_INVALID);
    }

    #[test]
    fn registration_without_notifications() {
        let mut store = FakeStore::default();
        let config = TemperatureConfig {
            notifications_supported: false,
            initial_value: 0x0102,
            ..TemperatureConfig::default()
        };
        let svc = TemperatureService::new(&mut store, &config).unwrap();

        let ch = &store.characteristics[0];
        assert_eq!(ch.properties, Properties::READ);
        assert_eq!(ch.cccd, None);
        assert_eq!(ch.initial, vec![0x01, 0x02]);
        assert_eq!(svc.handles().cccd, None);
    }

    #[test]
    fn registration_with_report_reference() {
        let mut store = FakeStore::default();
        let config = TemperatureConfig {
            report_ref: Some(ReportReference {
                report_id: 3,
                report_type: 1,
            }),
            report_ref_read_permission: SecurityMode::Encrypted,
            ..TemperatureConfig::default()
        };
        let svc = TemperatureService::new(&mut store, &config).unwrap();

        let desc = &store.descriptors[0];
        assert_eq!(desc.parent, svc.handles().value);
        assert_eq!(desc.uuid, AttUuid::from(REPORT_REFERENCE_UUID));
        assert_eq!(desc.value, vec![3, 1]);
        assert_eq!(
            desc.permissions,
            AttributePermissions {
                read: SecurityMode::Encrypted,
                write: SecurityMode::NoAccess,
            }
        );
        assert!(svc.report_ref_handle().is_some());
    }

    #[test]
    fn registration_failure_propagates() {
        let mut store = FakeStore {
            fail_add_service: Some(Error::NoMemory),
            ..FakeStore::default()
        };
        let result = TemperatureService::new(&mut store, &TemperatureConfig::default());
        assert_eq!(result.err(), Some(Error::NoMemory));
        assert!(store.characteristics.is_empty());
    }

    #[test]
    fn update_dedupes_repeated_values() {
        let mut store = FakeStore::default();
        let mut svc = service(&mut store);
        connect(&mut svc, 1);

        svc.update(&mut store, 42).unwrap();
        svc.update(&mut store, 42).unwrap();

        assert_eq!(store.value_writes.len(), 1);
        assert_eq!(store.notifications.len(), 1);
    }

    #[test]
    fn update_encodes_big_endian() {
        let mut store = FakeStore::default();
        let mut svc = service(&mut store);
        connect(&mut svc, 1);

        svc.update(&mut store, 0x1234).unwrap();
        svc.update(&mut store, 0xABCD).unwrap();

        let conn = Some(ConnHandle::from_raw(1));
        let value_handle = svc.handles().value;
        assert_eq!(store.value_writes.len(), 2);
        assert_eq!(store.value_writes[0], (conn, value_handle, vec![0x12, 0x34]));
        assert_eq!(store.value_writes[1], (conn, value_handle, vec![0xAB, 0xCD]));
    }

    #[test]
    fn update_while_disconnected_writes_but_reports_invalid_state() {
        let mut store = FakeStore::default();
        let mut svc = service(&mut store);

        assert_eq!(svc.update(&mut store, 100), Err(Error::InvalidState));

        assert_eq!(store.value_writes.len(), 1);
        assert!(store.notifications.is_empty());
        assert_eq!(svc.last_value(), 100);
    }

    #[test]
    fn update_without_notification_support_reports_invalid_state() {
        let mut store = FakeStore::default();
        let config = TemperatureConfig {
            notifications_supported: false,
            ..TemperatureConfig::default()
        };
        let mut svc = TemperatureService::new(&mut store, &config).unwrap();
        connect(&mut svc, 1);

        assert_eq!(svc.update(&mut store, 100), Err(Error::InvalidState));
        assert_eq!(store.value_writes.len(), 1);
        assert!(store.notifications.is_empty());
    }

    #[test]
    fn failed_store_write_still_records_value() {
        let mut store = FakeStore::default();
        let mut svc = service(&mut store);
        connect(&mut svc, 1);

        store.fail_set_value = Some(Error::Busy);
        assert_eq!(svc.update(&mut store, 7), Err(Error::Busy));
        assert!(store.notifications.is_empty());

        // The value was recorded before the write was attempted, so reporting the same reading
        // again is treated as unchanged even though it never reached the store.
        store.fail_set_value = None;
        assert_eq!(svc.update(&mut store, 7), Ok(()));
        assert!(store.value_writes.is_empty());
    }

    #[test]
    fn notify_failure_propagates() {
        let mut store = FakeStore::default();
        let mut svc = service(&mut store);
        connect(&mut svc, 1);

        store.fail_notify = Some(Error::NoMemory);
        assert_eq!(svc.update(&mut store, 9), Err(Error::NoMemory));
        // The store write already happened.
        assert_eq!(store.value_writes.len(), 1);
    }

    #[test]
    fn cccd_write_toggles_notifications() {
        let mut store = FakeStore::default();
        let mut svc = service(&mut store);
        connect(&mut svc, 1);

        write_cccd(&mut svc, &[0x01, 0x00]);
        assert!(svc.notifications_enabled());

        write_cccd(&mut svc, &[0x00, 0x00]);
        assert!(!svc.notifications_enabled());

        // Indications-only is not a notification subscription.
        write_cccd(&mut svc, &[0x02, 0x00]);
        assert!(!svc.notifications_enabled());
    }

    #[test]
    fn write_to_other_handle_is_ignored() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn handler(_: TemperatureEvent) {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }

        let mut store = FakeStore::default();
        let config = TemperatureConfig {
            handler: Some(handler),
            ..TemperatureConfig::default()
        };
        let mut svc = TemperatureService::new(&mut store, &config).unwrap();
        connect(&mut svc, 1);

        let value_handle = svc.handles().value;
        svc.on_event(&Event::AttributeWrite {
            handle: value_handle,
            value: &[0x01, 0x00],
        });

        assert!(!svc.notifications_enabled());
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn malformed_cccd_write_is_ignored() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn handler(_: TemperatureEvent) {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }

        let mut store = FakeStore::default();
        let config = TemperatureConfig {
            handler: Some(handler),
            ..TemperatureConfig::default()
        };
        let mut svc = TemperatureService::new(&mut store, &config).unwrap();
        connect(&mut svc, 1);

        write_cccd(&mut svc, &[0x01]);
        write_cccd(&mut svc, &[0x01, 0x00, 0x00]);

        assert!(!svc.notifications_enabled());
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn disconnect_preserves_notification_flag() {
        let mut store = FakeStore::default();
        let mut svc = service(&mut store);
        connect(&mut svc, 1);
        write_cccd(&mut svc, &[0x01, 0x00]);

        svc.on_event(&Event::Disconnected);
        assert!(!svc.is_connected());
        assert!(svc.notifications_enabled());

        // A reconnect without a fresh CCCD write keeps the prior subscription state.
        connect(&mut svc, 2);
        assert!(svc.notifications_enabled());
    }

    #[test]
    fn scenario_connect_subscribe_update() {
        static ENABLED: AtomicUsize = AtomicUsize::new(0);
        static DISABLED: AtomicUsize = AtomicUsize::new(0);
        fn handler(event: TemperatureEvent) {
            match event {
                TemperatureEvent::NotificationsEnabled => ENABLED.fetch_add(1, Ordering::SeqCst),
                TemperatureEvent::NotificationsDisabled => DISABLED.fetch_add(1, Ordering::SeqCst),
            };
        }

        let mut store = FakeStore::default();
        let config = TemperatureConfig {
            notifications_supported: true,
            initial_value: TEMPERATURE_INVALID,
            handler: Some(handler),
            ..TemperatureConfig::default()
        };
        let mut svc = TemperatureService::new(&mut store, &config).unwrap();

        connect(&mut svc, 5);
        write_cccd(&mut svc, &[0x01, 0x00]);
        svc.update(&mut store, 42).unwrap();

        let value_handle = svc.handles().value;
        assert_eq!(
            store.value_writes,
            vec![(Some(ConnHandle::from_raw(5)), value_handle, vec![0x00, 0x2A])]
        );
        assert_eq!(
            store.notifications,
            vec![(ConnHandle::from_raw(5), value_handle, vec![0x00, 0x2A])]
        );
        assert_eq!(ENABLED.load(Ordering::SeqCst), 1);
        assert_eq!(DISABLED.load(Ordering::SeqCst), 0);
        assert_eq!(svc.last_value(), 42);
    }
}
