use std::any::{type_name, Any};
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;

use super::{ServiceError, ServiceKind};

/// A type that can occupy a registry slot.
///
/// Concrete managers implement this directly. Pluggable services (window,
/// editor) implement it on their boxed trait object, e.g. `Box<dyn Window>`.
pub trait Service: Any {
    const KIND: ServiceKind;
}

/// Owning map from `ServiceKind` to a single service instance.
///
/// Invariants:
/// - at most one instance per kind
/// - while locked, `register` / `unregister` / `release_all` fail
///
/// Borrows handed out by `get` / `get_mut` are tied to `&self`, so they can
/// never outlive the registry or survive a structural change.
#[derive(Default)]
pub struct ServiceRegistry {
    slots: HashMap<ServiceKind, RefCell<Box<dyn Any>>>,
    locked: bool,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `service` into the registry under `S::KIND`.
    pub fn register<S: Service>(&mut self, service: S) -> Result<(), ServiceError> {
        self.ensure_unlocked()?;

        if self.slots.contains_key(&S::KIND) {
            return Err(ServiceError::DuplicateRegistration(S::KIND));
        }

        self.slots.insert(S::KIND, RefCell::new(Box::new(service)));
        log::debug!("registered {}", S::KIND);
        Ok(())
    }

    /// Removes the instance under `S::KIND` and hands ownership back.
    pub fn unregister<S: Service>(&mut self) -> Result<S, ServiceError> {
        self.ensure_unlocked()?;

        let slot = self
            .slots
            .get_mut(&S::KIND)
            .ok_or(ServiceError::ServiceNotFound(S::KIND))?;

        if !(**slot.get_mut()).is::<S>() {
            return Err(mismatch::<S>());
        }

        let slot = self
            .slots
            .remove(&S::KIND)
            .ok_or(ServiceError::ServiceNotFound(S::KIND))?;

        log::debug!("unregistered {}", S::KIND);

        slot.into_inner()
            .downcast::<S>()
            .map(|boxed| *boxed)
            .map_err(|_| mismatch::<S>())
    }

    /// Shared borrow of the instance under `S::KIND`.
    pub fn get<S: Service>(&self) -> Result<Ref<'_, S>, ServiceError> {
        let cell = self
            .slots
            .get(&S::KIND)
            .ok_or(ServiceError::ServiceNotFound(S::KIND))?;

        let slot = cell
            .try_borrow()
            .map_err(|_| ServiceError::ServiceBusy(S::KIND))?;

        Ref::filter_map(slot, |b| (**b).downcast_ref::<S>()).map_err(|_| mismatch::<S>())
    }

    /// Exclusive borrow of the instance under `S::KIND`.
    ///
    /// Distinct kinds may be borrowed mutably at the same time.
    pub fn get_mut<S: Service>(&self) -> Result<RefMut<'_, S>, ServiceError> {
        let cell = self
            .slots
            .get(&S::KIND)
            .ok_or(ServiceError::ServiceNotFound(S::KIND))?;

        let slot = cell
            .try_borrow_mut()
            .map_err(|_| ServiceError::ServiceBusy(S::KIND))?;

        RefMut::filter_map(slot, |b| (**b).downcast_mut::<S>()).map_err(|_| mismatch::<S>())
    }

    pub fn contains(&self, kind: ServiceKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Registered kinds in declaration order.
    pub fn registered_kinds(&self) -> Vec<ServiceKind> {
        ServiceKind::ALL
            .into_iter()
            .filter(|k| self.slots.contains_key(k))
            .collect()
    }

    /// Mandatory kinds that have no instance yet.
    pub fn missing_required(&self) -> Vec<ServiceKind> {
        ServiceKind::REQUIRED
            .into_iter()
            .filter(|k| !self.slots.contains_key(k))
            .collect()
    }

    /// Startup gate: every mandatory kind has a current registration.
    pub fn all_required_loaded(&self) -> bool {
        ServiceKind::REQUIRED
            .iter()
            .all(|k| self.slots.contains_key(k))
    }

    /// Sets the lock flag. Calling it with the current value is a no-op.
    pub fn lock(&mut self, locked: bool) {
        if self.locked != locked {
            log::debug!("service registry {}", if locked { "locked" } else { "unlocked" });
        }
        self.locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every remaining instance, in reverse declaration order.
    pub fn release_all(&mut self) -> Result<(), ServiceError> {
        self.ensure_unlocked()?;

        for kind in ServiceKind::ALL.into_iter().rev() {
            if self.slots.remove(&kind).is_some() {
                log::debug!("released {kind}");
            }
        }
        Ok(())
    }

    fn ensure_unlocked(&self) -> Result<(), ServiceError> {
        if self.locked {
            Err(ServiceError::RegistryLocked)
        } else {
            Ok(())
        }
    }
}

fn mismatch<S: Service>() -> ServiceError {
    ServiceError::TypeMismatch {
        kind: S::KIND,
        expected: type_name::<S>(),
    }
}
