//! Explicit singleton registry.
//!
//! One instance per type, stored in a [`SingletonRegistry`]. A registry can
//! be owned by the caller (scoped lifetime, dropped with its owner) or the
//! process-wide one from [`global`] can be used.
//!
//! Initialization runs at most once per type per registry. Later requests
//! return the stored instance and never re-run initialization, whether they
//! come through [`SingletonRegistry::get_or_init`] or [`Singleton::instance`].
//!
//! Each type gets its own `OnceLock` cell. The registry lock is only held
//! to find or insert that cell, never while `init` runs, so a constructor
//! may request other singletons from the same registry. First construction
//! of one type is still atomic: concurrent callers block on the cell until
//! the winning `init` returns. A constructor must not request its own type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

type Instance = Arc<dyn Any + Send + Sync>;
type Cell = Arc<OnceLock<Instance>>;

/// Registry of shared instances keyed by type
#[derive(Default)]
pub struct SingletonRegistry {
    cells: Mutex<HashMap<TypeId, Cell>>,
}

impl SingletonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // The map is only mutated by single insert/remove/clear calls, so a
    // panic elsewhere cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<TypeId, Cell>> {
        self.cells
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn cell<T: Any>(&self) -> Cell {
        self.lock().entry(TypeId::of::<T>()).or_default().clone()
    }

    fn constructed<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let cell = self.lock().get(&TypeId::of::<T>()).cloned()?;
        cell.get().cloned().map(downcast)
    }

    /// Return the instance for `T`, constructing it with `init` on first use
    pub fn get_or_init<T, F>(&self, init: F) -> Arc<T>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        // The map guard is dropped inside `cell()`; only the per-type cell
        // is held while `init` runs.
        let cell = self.cell::<T>();
        let instance = cell.get_or_init(|| {
            tracing::debug!(type_name = std::any::type_name::<T>(), "constructing singleton");
            let created: Instance = Arc::new(init());
            created
        });
        downcast(instance.clone())
    }

    /// Return the instance for `T` if one has been constructed
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.constructed::<T>()
    }

    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.constructed::<T>().is_some()
    }

    /// Evict the instance for `T`; the next `get_or_init` constructs anew.
    /// Outstanding `Arc`s stay valid.
    pub fn remove<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let cell = self.lock().remove(&TypeId::of::<T>())?;
        cell.get().cloned().map(downcast)
    }

    /// Evict every instance
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of constructed instances
    pub fn len(&self) -> usize {
        self.lock().values().filter(|cell| cell.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Entries are keyed by the TypeId of their own concrete type
fn downcast<T: Any + Send + Sync>(instance: Instance) -> Arc<T> {
    match instance.downcast::<T>() {
        Ok(typed) => typed,
        Err(_) => unreachable!("registry entry stored under a foreign TypeId"),
    }
}

static GLOBAL: OnceLock<SingletonRegistry> = OnceLock::new();

/// The process-wide registry, created on first access
pub fn global() -> &'static SingletonRegistry {
    GLOBAL.get_or_init(SingletonRegistry::new)
}

/// Teardown for the process-wide registry: drop every stored instance
pub fn reset_global() {
    global().clear();
}

/// Type-level singleton backed by the process-wide registry
///
/// ```
/// use nestdiff_core::singleton::Singleton;
/// use std::sync::Arc;
///
/// struct Settings {
///     retries: u32,
/// }
///
/// impl Singleton for Settings {
///     fn create() -> Self {
///         Settings { retries: 3 }
///     }
/// }
///
/// assert!(Arc::ptr_eq(&Settings::instance(), &Settings::instance()));
/// assert_eq!(Settings::instance().retries, 3);
/// ```
pub trait Singleton: Any + Send + Sync + Sized {
    /// Construct the single instance; called at most once per registry
    fn create() -> Self;

    fn instance() -> Arc<Self> {
        global().get_or_init(Self::create)
    }
}
