//! Connect-screen state: which integrations are pending or connected.
//!
//! DESIGN
//! ======
//! Pending connections are tracked per service so each Connect button only
//! blocks its own re-trigger. Completion is idempotent; the session-level list
//! in `SessionState` remains the source of truth across views.

#[cfg(test)]
#[path = "connect_test.rs"]
mod connect_test;

use crate::net::types::ServiceId;

/// Display status of a single integration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectStatus {
    #[default]
    Idle,
    Connecting,
    Connected,
}

/// Local state of the connect screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectState {
    pub pending: Vec<ServiceId>,
    pub connected: Vec<ServiceId>,
}

impl ConnectState {
    /// State for a freshly mounted connect screen, showing services the session
    /// already connected.
    pub fn seeded(connected: &[ServiceId]) -> Self {
        Self { pending: Vec::new(), connected: connected.to_vec() }
    }

    /// Mark `service` as connecting. Returns `false` when the trigger is
    /// blocked because the service is already pending or connected.
    pub fn begin(&mut self, service: ServiceId) -> bool {
        if self.is_pending(service) || self.is_connected(service) {
            return false;
        }
        self.pending.push(service);
        true
    }

    /// Finish a pending connection.
    pub fn complete(&mut self, service: ServiceId) {
        self.pending.retain(|s| *s != service);
        if !self.is_connected(service) {
            self.connected.push(service);
        }
    }

    pub fn is_pending(&self, service: ServiceId) -> bool {
        self.pending.contains(&service)
    }

    pub fn is_connected(&self, service: ServiceId) -> bool {
        self.connected.contains(&service)
    }

    pub fn status(&self, service: ServiceId) -> ConnectStatus {
        if self.is_connected(service) {
            ConnectStatus::Connected
        } else if self.is_pending(service) {
            ConnectStatus::Connecting
        } else {
            ConnectStatus::Idle
        }
    }

    pub fn connected_count(&self) -> usize {
        self.connected.len()
    }
}

/// Confirmation line shown once at least one service is connected.
pub fn connected_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Great! You've connected {count} service{plural}.")
}
