//! Mock authorization provider for testing

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use isir_client_core::{AuthHeader, AuthorizationProvider, Credentials, Error, Result};

/// Mock implementation of [`AuthorizationProvider`] for testing
///
/// The outcome is configurable and every authorization attempt is counted,
/// which lets orchestrator tests assert that precondition failures never
/// reach the identity service.
///
/// # Examples
///
/// ```
/// use isir_test_utils::MockAuthProvider;
///
/// let mock = MockAuthProvider::new();
/// mock.expect_failure("invalid_grant");
/// assert_eq!(mock.call_count(), 0);
/// ```
pub struct MockAuthProvider {
    behavior: Mutex<Behavior>,
    calls: AtomicUsize,
}

enum Behavior {
    Succeed(String),
    Fail(String),
}

impl MockAuthProvider {
    /// Create a mock that succeeds with a fixed header value
    pub fn new() -> Self {
        Self {
            behavior: Mutex::new(Behavior::Succeed(
                "WRAP access_token=\"mock-token\"".to_string(),
            )),
            calls: AtomicUsize::new(0),
        }
    }

    /// Configure the mock to succeed with the given header value
    pub fn expect_header(&self, value: &str) {
        *self.behavior.lock().unwrap() = Behavior::Succeed(value.to_string());
    }

    /// Configure the mock to fail with the given diagnostic message
    pub fn expect_failure(&self, message: &str) {
        *self.behavior.lock().unwrap() = Behavior::Fail(message.to_string());
    }

    /// Number of authorization attempts made
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorizationProvider for MockAuthProvider {
    async fn get_auth_header(&self, _credentials: &Credentials, _scope: &str) -> Result<AuthHeader> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &*self.behavior.lock().unwrap() {
            Behavior::Succeed(value) => Ok(AuthHeader::new(value.clone())),
            Behavior::Fail(message) => Err(Error::api(401, message.clone())),
        }
    }
}
