//! Session state owned by the root component.
//!
//! DESIGN
//! ======
//! The current view and the connected-service list are the only state shared
//! across views. They live in one serializable struct held by `App` and handed
//! to pages as parameters; pages request transitions through callbacks rather
//! than writing the struct directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::ServiceId;

/// The four mutually exclusive screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Auth,
    Dashboard,
    Summary,
}

/// Root-held session state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub view: View,
    pub connected: Vec<ServiceId>,
}

impl SessionState {
    /// Landing CTA: open the connect screen.
    pub fn start(&mut self) {
        if self.view == View::Landing {
            self.go(View::Auth);
        }
    }

    /// Single-level back navigation supplied to each view.
    pub fn back(&mut self) {
        match self.view {
            View::Auth => self.go(View::Landing),
            View::Summary => self.go(View::Dashboard),
            View::Landing | View::Dashboard => {}
        }
    }

    /// Dashboard action: start a new brief.
    pub fn open_brief(&mut self) {
        if self.view == View::Dashboard {
            self.go(View::Summary);
        }
    }

    /// Explicit "Continue to Dashboard" from the connect screen.
    pub fn continue_to_dashboard(&mut self) {
        if self.view == View::Auth {
            self.go(View::Dashboard);
        }
    }

    /// Record a completed connection.
    ///
    /// The first connection of the session moves the connect screen on to the
    /// dashboard; later ones leave the view alone. Returns whether the view
    /// advanced.
    pub fn record_connection(&mut self, service: ServiceId) -> bool {
        if self.is_connected(service) {
            return false;
        }
        let first = self.connected.is_empty();
        self.connected.push(service);
        log::info!("session: connected {service} ({} total)", self.connected.len());
        if first && self.view == View::Auth {
            self.go(View::Dashboard);
            return true;
        }
        false
    }

    pub fn is_connected(&self, service: ServiceId) -> bool {
        self.connected.contains(&service)
    }

    fn go(&mut self, to: View) {
        if self.view != to {
            log::debug!("session: {:?} -> {:?}", self.view, to);
            self.view = to;
        }
    }
}
