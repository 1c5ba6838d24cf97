//! Single-threaded reactive primitives.
//!
//! [`Observable`] is a shared, versioned value cell. Subscribers are called
//! synchronously after every change, outside of any internal borrow, so a
//! callback may read (or even write) the observable it watches.
//! [`Memo`] caches a derived value by key.
//!
//! # Invariants
//!
//! 1. The version only advances when the stored value actually changes.
//! 2. Dropping a [`Subscription`] stops further callbacks.
//! 3. A [`Memo`] recomputes only when its key differs from the cached key.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

/// Shared, versioned value with change notification.
///
/// Clones share the same cell.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: 'static> Observable<T> {
    /// Create an observable holding `value` at version 0.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Borrow the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of changes since creation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Call `callback` after every change until the returned guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::new(callback)));
            id
        };
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Clone out the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    fn notify(&self) {
        let (snapshot, callbacks) = {
            let inner = self.inner.borrow();
            let callbacks: Vec<Callback<T>> =
                inner.subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect();
            (inner.value.clone(), callbacks)
        };
        for callback in callbacks {
            callback(&snapshot);
        }
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Store `value`; subscribers run only if it differs from the current value.
    ///
    /// Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
        true
    }

    /// Modify the value in place; same notification rules as [`set`](Self::set).
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }
}

/// Guard for an [`Observable::subscribe`] registration.
///
/// Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keep the callback registered for the lifetime of the observable.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Value cached by key.
pub struct Memo<K, V> {
    cached: RefCell<Option<(K, V)>>,
    computations: Cell<u64>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            cached: RefCell::new(None),
            computations: Cell::new(0),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("key", &self.cached.borrow().as_ref().map(|(k, _)| k))
            .field("computations", &self.computations.get())
            .finish()
    }
}

impl<K: PartialEq + Clone, V: Clone> Memo<K, V> {
    /// Create an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing it when the key changed.
    pub fn get_or_compute(&self, key: &K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some((cached_key, value)) = self.cached.borrow().as_ref()
            && cached_key == key
        {
            return value.clone();
        }
        let value = compute(key);
        self.computations.set(self.computations.get() + 1);
        *self.cached.borrow_mut() = Some((key.clone(), value.clone()));
        value
    }

    /// How many times a value has been computed.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computations.get()
    }

    /// Drop the cached value.
    pub fn invalidate(&self) {
        self.cached.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------------
    // Observable
    // ---------------------------------------------------------------------

    #[test]
    fn set_bumps_version_only_on_change() {
        let obs = Observable::new(1);
        assert_eq!(obs.version(), 0);
        assert!(!obs.set(1));
        assert_eq!(obs.version(), 0);
        assert!(obs.set(2));
        assert_eq!(obs.version(), 1);
        assert_eq!(obs.get(), 2);
    }

    #[test]
    fn subscribers_see_new_value() {
        let obs = Observable::new(String::from("a"));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = obs.subscribe(move |v: &String| sink.borrow_mut().push(v.clone()));
        obs.set("b".into());
        obs.set("b".into());
        obs.set("c".into());
        assert_eq!(*seen.borrow(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let obs = Observable::new(0);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let sub = obs.subscribe(move |_| counter.set(counter.get() + 1));
        obs.set(1);
        drop(sub);
        obs.set(2);
        assert_eq!(hits.get(), 1);
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn detached_subscription_stays() {
        let obs = Observable::new(0);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        obs.subscribe(move |_| counter.set(counter.get() + 1)).detach();
        obs.set(1);
        obs.set(2);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn callbacks_may_read_the_observable() {
        let obs = Observable::new(0);
        let reader = obs.clone();
        let seen = Rc::new(Cell::new(-1));
        let sink = Rc::clone(&seen);
        let _sub = obs.subscribe(move |_| sink.set(reader.get()));
        obs.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn update_mutates_in_place() {
        let obs = Observable::new(vec![1, 2, 3]);
        assert!(obs.update(|v| v[1] = 20));
        assert_eq!(obs.get(), vec![1, 20, 3]);
        assert!(!obs.update(|_| {}));
        assert_eq!(obs.version(), 1);
    }

    #[test]
    fn clones_share_state() {
        let a = Observable::new(1);
        let b = a.clone();
        b.set(5);
        assert_eq!(a.get(), 5);
        assert_eq!(a.version(), b.version());
    }

    // ---------------------------------------------------------------------
    // Memo
    // ---------------------------------------------------------------------

    #[test]
    fn memo_recomputes_on_key_change() {
        let memo: Memo<&str, usize> = Memo::new();
        assert_eq!(memo.get_or_compute(&"abc", |k| k.len()), 3);
        assert_eq!(memo.get_or_compute(&"abc", |_| 99), 3);
        assert_eq!(memo.computations(), 1);
        assert_eq!(memo.get_or_compute(&"hello", |k| k.len()), 5);
        assert_eq!(memo.computations(), 2);
        memo.invalidate();
        assert_eq!(memo.get_or_compute(&"hello", |_| 0), 0);
    }
}
