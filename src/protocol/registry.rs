//! Per-version registration tables for the shipped protocol versions.
//!
//! The four versions share one validation engine; what differs between them
//! is captured entirely by these tables: which actions exist, under which
//! wire names, and which capabilities each action may advertise. Embedding
//! applications feed a table into the router together with their own codec,
//! schema validator, and handlers.

use super::action::ActionId;
use super::capability::caps;

/// One action of one version, with its advertisable capabilities.
#[derive(Debug, Clone)]
pub struct ActionRegistration {
    /// Wire and handshake names.
    pub id: ActionId,
    /// Capability tags this action may advertise during handshake.
    pub capabilities: Vec<&'static str>,
    /// Routable but never advertised (the ping action carries the handshake
    /// itself and is implied).
    pub exclude_from_handshake: bool,
}

impl ActionRegistration {
    fn new(id: ActionId) -> Self {
        Self {
            id,
            capabilities: Vec::new(),
            exclude_from_handshake: false,
        }
    }

    fn with_capabilities(mut self, capabilities: &[&'static str]) -> Self {
        self.capabilities = capabilities.to_vec();
        self
    }
}

/// One protocol version and its full action table.
#[derive(Debug, Clone)]
pub struct VersionRegistration {
    /// Version identifier, `YYYY-MM[letter]`.
    pub id: &'static str,
    /// Actions the version defines.
    pub actions: Vec<ActionRegistration>,
}

/// All versions this crate ships tables for, newest first.
pub fn shipped_versions() -> Vec<VersionRegistration> {
    vec![
        version_2024_10(),
        version_2022_10(),
        version_2020_10(),
        version_2018_10(),
    ]
}

/// 2024-10: handshake only.
pub fn version_2024_10() -> VersionRegistration {
    VersionRegistration {
        id: "2024-10",
        actions: vec![ActionRegistration::new(ActionId::ping())],
    }
}

/// 2022-10: handshake only.
pub fn version_2022_10() -> VersionRegistration {
    VersionRegistration {
        id: "2022-10",
        actions: vec![ActionRegistration::new(ActionId::ping())],
    }
}

/// 2020-10: the full action set.
pub fn version_2020_10() -> VersionRegistration {
    VersionRegistration {
        id: "2020-10",
        actions: vec![
            ActionRegistration::new(ActionId::ping()),
            ActionRegistration::new(ActionId::free_rooms()).with_capabilities(&[
                caps::FREE_ROOMS_ACCEPT_ROOMS,
                caps::FREE_ROOMS_ACCEPT_CATEGORIES,
                caps::FREE_ROOMS_ACCEPT_DELTAS,
                caps::FREE_ROOMS_ACCEPT_OUT_OF_ORDER,
                caps::FREE_ROOMS_ACCEPT_OUT_OF_MARKET,
                caps::FREE_ROOMS_ACCEPT_CLOSING_SEASONS,
            ]),
            ActionRegistration::new(ActionId::read_guest_requests()),
            ActionRegistration::new(ActionId::notif_report_guest_requests()),
            ActionRegistration::new(ActionId::inventory()).with_capabilities(&[
                caps::INVENTORY_USE_ROOMS,
                caps::INVENTORY_OCCUPANCY_CHILDREN,
            ]),
            ActionRegistration::new(ActionId::inventory_info()),
            ActionRegistration::new(ActionId::rate_plans()).with_capabilities(&[
                caps::RATE_PLANS_ACCEPT_ARRIVAL_DOW,
                caps::RATE_PLANS_ACCEPT_DEPARTURE_DOW,
                caps::RATE_PLANS_ACCEPT_BOOKING_RULE,
                caps::RATE_PLANS_ACCEPT_ROOM_TYPE_BOOKING_RULE,
                caps::RATE_PLANS_ACCEPT_MIXED_BOOKING_RULE,
                caps::RATE_PLANS_ACCEPT_SUPPLEMENTS,
                caps::RATE_PLANS_ACCEPT_FREE_NIGHTS_OFFERS,
                caps::RATE_PLANS_ACCEPT_FAMILY_OFFERS,
                caps::RATE_PLANS_ACCEPT_OVERLAY,
                caps::RATE_PLANS_ACCEPT_RATE_PLAN_JOIN,
                caps::RATE_PLANS_ACCEPT_OFFER_RULE_BOOKING_OFFSET,
                caps::RATE_PLANS_ACCEPT_OFFER_RULE_DOW_LOS,
            ]),
        ],
    }
}

/// 2018-10: same operations, but availability updates still ran under the
/// legacy `OTA_HotelAvailNotif` message with its own capability tags.
pub fn version_2018_10() -> VersionRegistration {
    VersionRegistration {
        id: "2018-10",
        actions: vec![
            ActionRegistration::new(ActionId::ping()),
            ActionRegistration::new(ActionId::new(
                "OTA_HotelAvailNotif:FreeRooms",
                "action_OTA_HotelAvailNotif",
            ))
            .with_capabilities(&[
                caps::LEGACY_FREE_ROOMS_ACCEPT_ROOMS,
                caps::LEGACY_FREE_ROOMS_ACCEPT_CATEGORIES,
                caps::LEGACY_FREE_ROOMS_ACCEPT_DELTAS,
                caps::FREE_ROOMS_ACCEPT_BOOKING_THRESHOLD,
            ]),
            ActionRegistration::new(ActionId::read_guest_requests()),
            ActionRegistration::new(ActionId::notif_report_guest_requests()),
            ActionRegistration::new(ActionId::inventory()).with_capabilities(&[
                caps::INVENTORY_USE_ROOMS,
                caps::INVENTORY_OCCUPANCY_CHILDREN,
            ]),
            ActionRegistration::new(ActionId::inventory_info()),
            ActionRegistration::new(ActionId::rate_plans()).with_capabilities(&[
                caps::RATE_PLANS_ACCEPT_ARRIVAL_DOW,
                caps::RATE_PLANS_ACCEPT_DEPARTURE_DOW,
                caps::RATE_PLANS_ACCEPT_BOOKING_RULE,
                caps::RATE_PLANS_ACCEPT_ROOM_TYPE_BOOKING_RULE,
                caps::RATE_PLANS_ACCEPT_MIXED_BOOKING_RULE,
                caps::RATE_PLANS_ACCEPT_SUPPLEMENTS,
                caps::RATE_PLANS_ACCEPT_FREE_NIGHTS_OFFERS,
                caps::RATE_PLANS_ACCEPT_FAMILY_OFFERS,
                caps::RATE_PLANS_ACCEPT_OVERLAY,
                caps::RATE_PLANS_ACCEPT_RATE_PLAN_JOIN,
                caps::RATE_PLANS_ACCEPT_OFFER_RULE_BOOKING_OFFSET,
                caps::RATE_PLANS_ACCEPT_OFFER_RULE_DOW_LOS,
            ]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::validate_version_string;

    #[test]
    fn test_shipped_versions_are_well_formed() {
        let versions = shipped_versions();
        assert_eq!(versions.len(), 4);

        for version in versions {
            validate_version_string(version.id).unwrap();
            assert!(
                version.actions.iter().any(|a| a.id == ActionId::ping()),
                "{} must be able to handshake",
                version.id
            );
        }
    }

    #[test]
    fn test_full_versions_share_the_capability_tables() {
        let v2020 = version_2020_10();
        let v2018 = version_2018_10();

        let rate_plans_2020 = v2020
            .actions
            .iter()
            .find(|a| a.id == ActionId::rate_plans())
            .unwrap();
        let rate_plans_2018 = v2018
            .actions
            .iter()
            .find(|a| a.id == ActionId::rate_plans())
            .unwrap();
        assert_eq!(rate_plans_2020.capabilities, rate_plans_2018.capabilities);
    }
}
