// Parcel Registry
// A ParcelRegistry owns exactly one Parcel behind its own lock.
// Clones share the record; separately constructed registries never share a lock.
// Every operation runs to completion while holding the lock, so sequences run
// through `atomically` cannot be interleaved by other callers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::warn;

use crate::parcel::{Locale, Parcel, ParcelError};

/// Host-side persistence of the record
///
/// Called with the lock held after every operation that changed the parcel,
/// so persisted snapshots follow the order of the transitions.
pub trait ParcelStore: Send + Sync {
    fn persist(&self, parcel: &Parcel) -> anyhow::Result<()>;
}

#[derive(Clone, Default)]
pub struct ParcelRegistry {
    parcel: Arc<Mutex<Parcel>>,
    locale: Locale,
    store: Option<Arc<dyn ParcelStore>>,
}

impl ParcelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self::from_parcel(Parcel::new(), locale)
    }

    pub fn from_parcel(parcel: Parcel, locale: Locale) -> Self {
        Self {
            parcel: Arc::new(Mutex::new(parcel)),
            locale,
            store: None,
        }
    }

    /// Attach a store notified after each state change
    pub fn with_store(mut self, store: Arc<dyn ParcelStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    // Transitions never leave the record half-written, so a poisoned lock is safe to reuse
    fn lock(&self) -> MutexGuard<'_, Parcel> {
        self.parcel.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the record while holding the lock
    ///
    /// The store is notified once, if the record changed.
    pub fn atomically<R>(&self, f: impl FnOnce(&mut Parcel) -> R) -> R {
        let mut parcel = self.lock();
        let before = parcel.clone();
        let result = f(&mut parcel);
        if *parcel != before {
            self.persist(&parcel);
        }
        result
    }

    fn persist(&self, parcel: &Parcel) {
        if let Some(store) = &self.store {
            if let Err(e) = store.persist(parcel) {
                if log::log_enabled!(log::Level::Warn) {
                    warn!("Failed to persist parcel {}: {:#}", parcel.id, e);
                }
            }
        }
    }

    pub fn register(
        &self,
        id: impl Into<String>,
        owner: impl Into<String>,
        area: impl Into<String>,
        location: impl Into<String>,
    ) -> String {
        let event = self.atomically(|parcel| parcel.register(id, owner, area, location));
        self.locale.render(&event)
    }

    pub fn certify(&self, certificate_number: impl Into<String>) -> String {
        let event = self.atomically(|parcel| parcel.certify(certificate_number));
        self.locale.render(&event)
    }

    pub fn verify(&self) -> String {
        let event = self.atomically(|parcel| parcel.verify());
        self.locale.render(&event)
    }

    /// Transfer ownership, rejected with the localized error text unless verified
    pub fn transfer(&self, new_owner: impl Into<String>) -> Result<String, TransferRejected> {
        self.atomically(|parcel| parcel.transfer(new_owner))
            .map(|event| self.locale.render(&event))
            .map_err(|error| TransferRejected {
                message: self.locale.render_error(&error),
                error,
            })
    }

    pub fn report(&self) -> String {
        self.locale.report(&self.lock())
    }

    pub fn hello(&self, name: &str) -> String {
        self.locale.greeting(name)
    }

    /// Copy of the current record
    pub fn snapshot(&self) -> Parcel {
        self.lock().clone()
    }

    /// Replace the record wholesale
    pub fn restore(&self, parcel: Parcel) {
        self.atomically(|current| *current = parcel);
    }

    /// Return to the empty initial record
    pub fn reset(&self) {
        self.restore(Parcel::new());
    }

    /// Whether both handles point at the same record
    pub fn shares_record_with(&self, other: &ParcelRegistry) -> bool {
        Arc::ptr_eq(&self.parcel, &other.parcel)
    }
}

/// A transfer refused by the verification rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransferRejected {
    pub error: ParcelError,
    pub message: String,
}

impl TransferRejected {
    pub fn code(&self) -> u64 {
        self.error.code()
    }
}

impl From<TransferRejected> for ParcelError {
    fn from(rejected: TransferRejected) -> Self {
        rejected.error
    }
}
