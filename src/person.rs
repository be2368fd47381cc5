//! The holder side of the delegation
//!
//! A [`Person`] owns a remote starter fob and, optionally, a reference to
//! something that answers it. The person never knows the concrete type on
//! the other end of the contract.

use crate::api::RemoteStarter;
use std::sync::Arc;

/// Holder of the remote starter
///
/// Carries an immutable name and an optional, non-owning reference to any
/// [`RemoteStarter`]. The reference is a plain association: the caller keeps
/// its own handle to the implementer, and the slot can be rebound or cleared
/// at any time.
pub struct Person {
    name: String,
    starter: Option<Arc<dyn RemoteStarter>>,
}

impl Person {
    /// Create a person with no starter bound
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            starter: None,
        }
    }

    /// The person's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a starter is currently bound
    pub fn is_bound(&self) -> bool {
        self.starter.is_some()
    }

    /// Hook the fob up to an implementer, replacing any existing binding
    pub fn bind(&mut self, starter: Arc<dyn RemoteStarter>) {
        self.starter = Some(starter);
    }

    /// Drop the current binding, if any
    pub fn clear(&mut self) {
        self.starter = None;
    }

    /// Press the button on the fob
    ///
    /// Forwards to the bound implementer's [`start`](RemoteStarter::start)
    /// exactly once if a binding is present. With nothing bound this is a
    /// no-op, never an error.
    pub fn press_starter(&self) {
        match &self.starter {
            Some(starter) => {
                tracing::debug!("{} pressed the starter, forwarding", self.name);
                starter.start();
            }
            None => {
                tracing::debug!("{} pressed the starter with nothing bound", self.name);
            }
        }
    }
}
