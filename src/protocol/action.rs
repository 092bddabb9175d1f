//! Action identifiers.

use std::fmt;

/// Identifies one operation within a protocol version.
///
/// Every action has two names: the wire name exchanged literally in requests
/// (the `action` multipart field) and the handshake name used only inside
/// negotiation documents. The two often differ; `OTA_Read:GuestRequests` is
/// advertised as `action_OTA_Read`, for example.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionId {
    wire_name: String,
    handshake_name: String,
}

impl ActionId {
    /// Create an action identifier from its wire and handshake names.
    pub fn new(wire_name: impl Into<String>, handshake_name: impl Into<String>) -> Self {
        Self {
            wire_name: wire_name.into(),
            handshake_name: handshake_name.into(),
        }
    }

    /// The name exchanged literally in requests.
    pub fn wire_name(&self) -> &str {
        &self.wire_name
    }

    /// The name used in handshake documents.
    pub fn handshake_name(&self) -> &str {
        &self.handshake_name
    }

    /// Handshake ping.
    pub fn ping() -> Self {
        Self::new("OTA_Ping:Handshaking", "action_OTA_Ping")
    }

    /// Free-rooms availability notification.
    pub fn free_rooms() -> Self {
        Self::new(
            "OTA_HotelInvCountNotif:FreeRooms",
            "action_OTA_HotelInvCountNotif",
        )
    }

    /// Guest request retrieval.
    pub fn read_guest_requests() -> Self {
        Self::new("OTA_Read:GuestRequests", "action_OTA_Read")
    }

    /// Guest request acknowledgement.
    pub fn notif_report_guest_requests() -> Self {
        Self::new(
            "OTA_NotifReport:GuestRequests",
            "action_OTA_HotelResNotif_GuestRequests",
        )
    }

    /// Room inventory (descriptive content) notification.
    pub fn inventory() -> Self {
        Self::new(
            "OTA_HotelDescriptiveContentNotif:Inventory",
            "action_OTA_HotelDescriptiveContentNotif_Inventory",
        )
    }

    /// Hotel info (descriptive content) notification.
    pub fn inventory_info() -> Self {
        Self::new(
            "OTA_HotelDescriptiveContentNotif:Info",
            "action_OTA_HotelDescriptiveContentNotif_Info",
        )
    }

    /// Rate plan notification.
    pub fn rate_plans() -> Self {
        Self::new(
            "OTA_HotelRatePlanNotif:RatePlans",
            "action_OTA_HotelRatePlanNotif_RatePlans",
        )
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_and_handshake_names_differ() {
        let action = ActionId::read_guest_requests();
        assert_eq!(action.wire_name(), "OTA_Read:GuestRequests");
        assert_eq!(action.handshake_name(), "action_OTA_Read");
    }
}
