//! Host-supplied callbacks.

use std::fmt;
use std::rc::Rc;

/// A cheaply clonable handle to a host function.
///
/// Callbacks run synchronously on the UI thread, so they are `Rc`-backed
/// and not `Send`. Two callbacks compare equal only when they share the
/// same underlying function.
///
/// # Examples
///
/// ```
/// use selectfield_core::Callback;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let hits = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&hits);
/// let cb = Callback::new(move |n: u32| counter.set(counter.get() + n));
///
/// cb.emit(2);
/// cb.emit(3);
/// assert_eq!(hits.get(), 5);
/// ```
pub struct Callback<T> {
    func: Rc<dyn Fn(T)>,
}

impl<T> Callback<T> {
    /// Wrap a function.
    pub fn new(func: impl Fn(T) + 'static) -> Self {
        Self {
            func: Rc::new(func),
        }
    }

    /// Callback that ignores its argument.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Invoke the callback.
    pub fn emit(&self, value: T) {
        (self.func)(value);
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
        }
    }
}

impl<T> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback<_>")
    }
}

impl<T, F: Fn(T) + 'static> From<F> for Callback<T> {
    fn from(func: F) -> Self {
        Self::new(func)
    }
}
