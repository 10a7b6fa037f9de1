//! Process-wide notification of rejected credentials.
//!
//! Any number of listeners may subscribe. Each subscription is removed when
//! its [`Subscription`] handle is dropped or explicitly unsubscribed, so one
//! subscriber can never replace or remove another subscriber's listener.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// HTTP status reported by the API when credentials are missing or expired.
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Receives unauthorized notifications.
pub trait UnauthorizedListener: Send + Sync {
    fn on_unauthorized(&self);
}

struct FnListener<F>(F);

impl<F> UnauthorizedListener for FnListener<F>
where
    F: Fn() + Send + Sync,
{
    fn on_unauthorized(&self) {
        (self.0)()
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Arc<dyn UnauthorizedListener>)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Observer list for unauthorized events. Clones share the same listeners.
#[derive(Clone, Default)]
pub struct UnauthorizedEvents {
    registry: Arc<Mutex<Registry>>,
}

impl UnauthorizedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` until the returned handle is dropped.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe<L>(&self, listener: L) -> Subscription
    where
        L: UnauthorizedListener + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        log::debug!("Unauthorized listener {id} subscribed");

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Registers a closure until the returned handle is dropped.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe_fn<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe(FnListener(listener))
    }

    /// Notifies every current listener and returns how many were notified.
    ///
    /// Listeners run outside the registry lock, so they may subscribe or
    /// unsubscribe while being notified.
    pub fn emit(&self) -> usize {
        let listeners = lock(&self.registry)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect::<Vec<_>>();

        log::info!("Unauthorized event delivered to {} listener(s)", listeners.len());
        for listener in &listeners {
            listener.on_unauthorized();
        }
        listeners.len()
    }

    /// Emits when `status` is the unauthorized status. Returns whether it did.
    pub fn observe_status(&self, status: u16) -> bool {
        if status == UNAUTHORIZED_STATUS {
            self.emit();
            true
        } else {
            false
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

/// Handle keeping a listener registered.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Removes the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Keeps the listener registered for the lifetime of the event bus.
    pub fn detach(mut self) {
        self.registry = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry)
                .listeners
                .retain(|(id, _)| *id != self.id);
            log::debug!("Unauthorized listener {} unsubscribed", self.id);
        }
    }
}

#[cfg(feature = "test-mocks")]
pub mod mock {
    //! Mock listener for asserting notifications in tests.

    use mockall::mock;

    use super::UnauthorizedListener;

    mock! {
        pub Listener {}

        impl UnauthorizedListener for Listener {
            fn on_unauthorized(&self);
        }
    }
}
