//! Error catalog
//!
//! Registry mapping integer error codes to multi-locale message bundles.
//! The catalog is populated during process startup and treated as read-only
//! once batch traffic begins. Registering the same code twice, or resolving
//! a code that was never registered, is a programmer error and panics.

pub mod codes;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Identifies a category of failure. Built-in codes are negative, see
/// [`codes`]; consumer-registered codes should be positive.
pub type ErrorCode = i32;

/// Mapping from locale tag (`"en"`, `"dev"`, ...) to human-readable text.
pub type MessageBundle = HashMap<String, String>;

/// Locale used when a bundle has no entry for the requested locale.
pub const DEFAULT_LOCALE: &str = "en";

/// Registry of error codes and their localized messages.
///
/// Use [`ErrorCatalog::builtin`] for a catalog pre-seeded with the reserved
/// codes, or [`global`] for the process-wide instance. The pipeline takes a
/// catalog by reference so tests can run against isolated instances.
#[derive(Debug, Clone, Default)]
pub struct ErrorCatalog {
    entries: HashMap<ErrorCode, MessageBundle>,
}

impl ErrorCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated with the built-in codes.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(
            codes::INTERNAL_SERVER_ERROR,
            bundle(&[
                (
                    "en",
                    "Internal server error occured. Please wait until it has been fixed, before you try again",
                ),
                (
                    "dev",
                    "Internal server error occured. Please wait until it has been fixed, before you try again",
                ),
            ]),
        );
        catalog.register(
            codes::EMPTY_REQUEST_NOT_ALLOWED,
            bundle(&[
                ("en", "Empty request not allowed"),
                (
                    "dev",
                    "This endpoint does not allow the empty request - each request must be defined separately",
                ),
            ]),
        );
        catalog.register(
            codes::MAX_REQUESTS_EXCEEDED,
            bundle(&[
                ("en", "Max number of requests exceeded"),
                (
                    "dev",
                    "MaxRequest parameter has been set for endpoint and is exceeded by the number of request-objects given in the input",
                ),
            ]),
        );
        catalog.register(
            codes::OPERATION_ABORTED,
            bundle(&[
                ("en", "Operation aborted due to other errors"),
                ("dev", "Operation aborted due to other errors"),
            ]),
        );
        catalog.register(
            codes::INPUT_VALIDATION_FAILED,
            bundle(&[
                ("en", "Input validation failed"),
                ("dev", "Struct validations failed on tags for input"),
            ]),
        );
        catalog
    }

    /// Register a new error code.
    ///
    /// # Panics
    /// Panics if `code` is already registered. Registration conflicts are a
    /// startup-time programmer error, not a recoverable condition.
    pub fn register(&mut self, code: ErrorCode, messages: MessageBundle) {
        if self.entries.contains_key(&code) {
            panic!("error code {code} is already registered");
        }
        self.entries.insert(code, messages);
    }

    /// Bulk form of [`register`](Self::register), same fatality rule per
    /// entry.
    pub fn register_all(&mut self, entries: impl IntoIterator<Item = (ErrorCode, MessageBundle)>) {
        for (code, messages) in entries {
            self.register(code, messages);
        }
    }

    /// Resolve the message for `code` in `locale`, falling back to
    /// [`DEFAULT_LOCALE`] when the bundle has no entry for that locale.
    ///
    /// # Panics
    /// Panics if `code` was never registered: the caller asked for a code it
    /// does not own, which is an internal-consistency defect that must not
    /// be papered over with an empty string.
    pub fn resolve(&self, code: ErrorCode, locale: &str) -> &str {
        let messages = match self.entries.get(&code) {
            Some(messages) => messages,
            None => panic!("error code {code} is not registered in the catalog"),
        };

        match messages.get(locale).or_else(|| messages.get(DEFAULT_LOCALE)) {
            Some(text) => text,
            None => panic!("error code {code} has no message for locale {locale:?} or {DEFAULT_LOCALE:?}"),
        }
    }

    /// Whether `code` is registered.
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.entries.contains_key(&code)
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a [`MessageBundle`] from locale/text pairs.
pub fn bundle(messages: &[(&str, &str)]) -> MessageBundle {
    messages
        .iter()
        .map(|(locale, text)| (locale.to_string(), text.to_string()))
        .collect()
}

static GLOBAL: Lazy<RwLock<ErrorCatalog>> = Lazy::new(|| RwLock::new(ErrorCatalog::builtin()));

/// The process-wide catalog, pre-seeded with the built-in codes.
///
/// Expected to reach its final state during process initialization, before
/// any batch is processed. Registration while batches are in flight is a
/// configuration error.
pub fn global() -> &'static RwLock<ErrorCatalog> {
    &GLOBAL
}

/// Register `code` in the process-wide catalog. Startup-time only.
pub fn register(code: ErrorCode, messages: MessageBundle) {
    global().write().register(code, messages);
}

/// Register several codes in the process-wide catalog. Startup-time only.
pub fn register_all(entries: impl IntoIterator<Item = (ErrorCode, MessageBundle)>) {
    global().write().register_all(entries);
}
