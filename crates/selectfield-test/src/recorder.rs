//! Callback recording for interaction tests.

use selectfield_core::Callback;
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

/// Records every value passed to the callbacks it hands out.
///
/// ```
/// use selectfield_test::Recorder;
///
/// let recorder = Recorder::new();
/// let cb = recorder.callback();
/// cb.emit("b".to_string());
/// recorder.assert_called_once_with(&"b".to_string());
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone + 'static> Recorder<T> {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback that appends to this recorder.
    #[must_use]
    pub fn callback(&self) -> Callback<T> {
        let calls = Rc::clone(&self.calls);
        Callback::new(move |value| calls.borrow_mut().push(value))
    }

    /// Recorded values in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Most recent value.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.calls.borrow().last().cloned()
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Assert no call was recorded.
    pub fn assert_not_called(&self)
    where
        T: Debug,
    {
        let calls = self.calls.borrow();
        assert!(calls.is_empty(), "Expected no calls, got {calls:?}");
    }

    /// Assert exactly one call, with `expected`.
    pub fn assert_called_once_with(&self, expected: &T)
    where
        T: Debug + PartialEq,
    {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "Expected exactly one call, got {calls:?}");
        assert_eq!(&calls[0], expected);
    }
}
