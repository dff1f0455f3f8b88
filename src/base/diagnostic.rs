use std::{
    cell::{Cell, RefCell},
    fmt::Display,
};

/// Represents a trait responsible for handling diagnostics in the front end.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive(&self, error: T);
}

/// Prints every received error to stderr and remembers that it did.
#[derive(Debug, Default)]
pub struct PrintHandler {
    printed: Cell<bool>,
}

impl PrintHandler {
    /// Creates a new [`PrintHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one error was received since creation or the last [`Self::reset`].
    #[must_use]
    pub fn has_printed(&self) -> bool {
        self.printed.get()
    }

    /// Forgets about previously received errors.
    pub fn reset(&self) {
        self.printed.set(false);
    }
}

impl<E: Display> Handler<E> for PrintHandler {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Collects every received error without printing it.
#[derive(Debug)]
pub struct SilentHandler<E> {
    received: RefCell<Vec<E>>,
}

impl<E> Default for SilentHandler<E> {
    fn default() -> Self {
        Self {
            received: RefCell::new(Vec::new()),
        }
    }
}

impl<E> SilentHandler<E> {
    /// Creates a new [`SilentHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any error was received.
    #[must_use]
    pub fn has_received(&self) -> bool {
        !self.received.borrow().is_empty()
    }

    /// Consumes the handler and returns the received errors in order.
    #[must_use]
    pub fn into_errors(self) -> Vec<E> {
        self.received.into_inner()
    }
}

impl<E> Handler<E> for SilentHandler<E> {
    fn receive(&self, error: E) {
        self.received.borrow_mut().push(error);
    }
}

/// Discards every received error.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidHandler;

impl<E> Handler<E> for VoidHandler {
    fn receive(&self, _error: E) {}
}
