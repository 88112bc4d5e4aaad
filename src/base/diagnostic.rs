use std::{
    cell::{Cell, RefCell},
    fmt::Display,
};

/// Represents a trait responsible for handling diagnostics in the calculator.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive(&self, error: T);

    /// Whether any error has been received so far.
    fn has_received(&self) -> bool;
}

/// Handler that prints every received error to stderr.
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
}

impl<E: Display> Handler<E> for PrintHandler {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(true);
    }

    fn has_received(&self) -> bool {
        self.printed.get()
    }
}

/// Handler that stores the received errors without printing them.
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

    /// Takes the received errors out of the handler.
    pub fn take(&self) -> Vec<E> {
        self.received.take()
    }
}

impl<E> Handler<E> for SilentHandler<E> {
    fn receive(&self, error: E) {
        self.received.borrow_mut().push(error);
    }

    fn has_received(&self) -> bool {
        !self.received.borrow().is_empty()
    }
}

/// Handler that discards every error.
#[derive(Debug, Default, Clone, Copy)]
pub struct VoidHandler;

impl<E> Handler<E> for VoidHandler {
    fn receive(&self, _error: E) {}

    fn has_received(&self) -> bool {
        false
    }
}
