//! Per-request routing overrides.

use std::sync::Arc;

use crate::protocol::{CapabilitySet, HandshakeDocument};

/// Narrows routing for one request to a previously negotiated agreement.
///
/// Deployments that track per-client agreements attach a `RouteContext` to
/// the request extensions (through a tower middleware keyed on the client-id
/// header). When present, the router refuses versions and actions outside the
/// agreement even if the server itself supports them.
#[derive(Debug, Clone)]
pub struct RouteContext {
    agreement: Arc<HandshakeDocument>,
}

impl RouteContext {
    /// Wrap a negotiated agreement.
    pub fn new(agreement: HandshakeDocument) -> Self {
        Self {
            agreement: Arc::new(agreement),
        }
    }

    /// The agreement itself.
    pub fn agreement(&self) -> &HandshakeDocument {
        &self.agreement
    }

    /// Whether the agreement covers the given version.
    pub fn allows_version(&self, version: &str) -> bool {
        self.agreement.contains_version(version)
    }

    /// Whether the agreement covers the given action of the given version.
    pub fn allows_action(&self, version: &str, handshake_name: &str) -> bool {
        self.agreement.capabilities(version, handshake_name).is_some()
    }

    /// Capabilities the agreement grants one action, empty when the action
    /// is present without optional features.
    pub fn capabilities(&self, version: &str, handshake_name: &str) -> CapabilitySet {
        match self.agreement.capabilities(version, handshake_name) {
            Some(Some(tags)) => CapabilitySet::from_tags(tags.iter().cloned()),
            _ => CapabilitySet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ActionCapabilities;

    #[test]
    fn test_context_narrows_versions_and_actions() {
        let mut agreement = HandshakeDocument::new();
        agreement.insert_version(
            "2020-10",
            ActionCapabilities::from([
                ("action_OTA_Ping".to_string(), None),
                (
                    "action_OTA_HotelInvCountNotif".to_string(),
                    Some(vec!["OTA_HotelInvCountNotif_accept_deltas".to_string()]),
                ),
            ]),
        );
        let ctx = RouteContext::new(agreement);

        assert!(ctx.allows_version("2020-10"));
        assert!(!ctx.allows_version("2018-10"));
        assert!(ctx.allows_action("2020-10", "action_OTA_Ping"));
        assert!(!ctx.allows_action("2020-10", "action_OTA_Read"));

        let caps = ctx.capabilities("2020-10", "action_OTA_HotelInvCountNotif");
        assert!(caps.enabled("OTA_HotelInvCountNotif_accept_deltas"));
        assert!(ctx.capabilities("2020-10", "action_OTA_Ping").is_empty());
    }
}
