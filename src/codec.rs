//! Message codec seam.
//!
//! The router never touches payload syntax itself: a [`MessageCodec`] turns
//! the raw `request` multipart field into a typed payload and a typed
//! response back into wire text. Production deployments plug in their XML
//! codec here; the bundled [`JsonCodec`] speaks the same shapes as JSON and
//! is what the test suite and the reference binary run on.

use crate::error::{Result, WireError};
use crate::protocol::ActionId;
use crate::types::{
    FreeRoomsRequest, FreeRoomsResponse, InventoryRequest, InventoryResponse, NotifReportRequest,
    NotifReportResponse, PingRequest, PingResponse, RatePlansRequest, RatePlansResponse,
    ReadRequest, ResRetrieveResponse,
};

/// A decoded request payload, one variant per message family.
///
/// Actions without a typed model pass through as raw text so they stay
/// routable.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPayload {
    /// Handshake ping.
    Ping(PingRequest),
    /// Availability counts.
    FreeRooms(FreeRoomsRequest),
    /// Room inventory.
    Inventory(InventoryRequest),
    /// Hotel descriptive info.
    InventoryInfo(InventoryRequest),
    /// Rate plans.
    RatePlans(RatePlansRequest),
    /// Guest request poll.
    ReadGuestRequests(ReadRequest),
    /// Guest request acknowledgement.
    NotifReport(NotifReportRequest),
    /// Untyped passthrough.
    Raw(String),
}

/// A typed response ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    /// Handshake ping acknowledgement.
    Ping(PingResponse),
    /// Availability acknowledgement.
    FreeRooms(FreeRoomsResponse),
    /// Inventory acknowledgement.
    Inventory(InventoryResponse),
    /// Rate plan acknowledgement.
    RatePlans(RatePlansResponse),
    /// Pending guest request list.
    GuestRequests(ResRetrieveResponse),
    /// Acknowledgement receipt.
    NotifReport(NotifReportResponse),
    /// Untyped passthrough.
    Raw(String),
}

/// Decodes requests and encodes responses for one wire syntax.
///
/// Implementations must be pure with respect to the payload: framing,
/// versioning and capability checks all happen in the router before decode
/// is called.
pub trait MessageCodec: Send + Sync {
    /// Decode the raw `request` field of one action.
    fn decode(&self, action: &ActionId, raw: &str) -> Result<RequestPayload>;

    /// Encode a typed response to wire text.
    fn encode(&self, response: &ResponsePayload) -> Result<String>;

    /// Content type of encoded responses.
    fn content_type(&self) -> &'static str {
        "application/xml; charset=utf-8"
    }
}

/// JSON rendition of the message shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl MessageCodec for JsonCodec {
    fn decode(&self, action: &ActionId, raw: &str) -> Result<RequestPayload> {
        let payload = match action.wire_name() {
            "OTA_Ping:Handshaking" => RequestPayload::Ping(decode_json(raw)?),
            "OTA_HotelInvCountNotif:FreeRooms" | "OTA_HotelAvailNotif:FreeRooms" => {
                RequestPayload::FreeRooms(decode_json(raw)?)
            }
            "OTA_HotelDescriptiveContentNotif:Inventory" => {
                RequestPayload::Inventory(decode_json(raw)?)
            }
            "OTA_HotelDescriptiveContentNotif:Info" => {
                RequestPayload::InventoryInfo(decode_json(raw)?)
            }
            "OTA_HotelRatePlanNotif:RatePlans" => RequestPayload::RatePlans(decode_json(raw)?),
            "OTA_Read:GuestRequests" => RequestPayload::ReadGuestRequests(decode_json(raw)?),
            "OTA_NotifReport:GuestRequests" => RequestPayload::NotifReport(decode_json(raw)?),
            _ => RequestPayload::Raw(raw.to_owned()),
        };
        Ok(payload)
    }

    fn encode(&self, response: &ResponsePayload) -> Result<String> {
        let encoded = match response {
            ResponsePayload::Ping(r) => encode_json(r)?,
            ResponsePayload::FreeRooms(r) => encode_json(r)?,
            ResponsePayload::Inventory(r) => encode_json(r)?,
            ResponsePayload::RatePlans(r) => encode_json(r)?,
            ResponsePayload::GuestRequests(r) => encode_json(r)?,
            ResponsePayload::NotifReport(r) => encode_json(r)?,
            ResponsePayload::Raw(text) => text.clone(),
        };
        Ok(encoded)
    }

    fn content_type(&self) -> &'static str {
        "application/json; charset=utf-8"
    }
}

fn decode_json<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| WireError::Decode(e.to_string()))
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| WireError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Envelope;

    #[test]
    fn test_decode_ping() {
        let raw = r#"{"EchoToken":"abc","EchoData":"{\"versions\":[]}"}"#;
        let payload = JsonCodec.decode(&ActionId::ping(), raw).unwrap();
        match payload {
            RequestPayload::Ping(ping) => assert_eq!(ping.echo_token, "abc"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_carries_serde_context() {
        let err = JsonCodec.decode(&ActionId::ping(), "not json").unwrap_err();
        assert!(matches!(err, WireError::Decode(_)));
    }

    #[test]
    fn test_untyped_action_passes_through() {
        let action = ActionId::new("OTA_HotelStats:Stats", "action_OTA_HotelStats");
        let payload = JsonCodec.decode(&action, "<anything/>").unwrap();
        assert_eq!(payload, RequestPayload::Raw("<anything/>".to_owned()));
    }

    #[test]
    fn test_decode_guest_request_poll() {
        let raw = r#"{"Version":"1.0","HotelReadRequest":{"HotelCode":"123"}}"#;
        let payload = JsonCodec
            .decode(&ActionId::read_guest_requests(), raw)
            .unwrap();
        match payload {
            RequestPayload::ReadGuestRequests(read) => assert_eq!(read.hotel_code(), "123"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_decode_guest_request_acknowledgement() {
        let raw = r#"{"Version":"1.0","Success":{},"HotelReservation":[{"UniqueID":{"Type":14,"ID":"6b32c1"}}]}"#;
        let payload = JsonCodec
            .decode(&ActionId::notif_report_guest_requests(), raw)
            .unwrap();
        match payload {
            RequestPayload::NotifReport(report) => {
                assert_eq!(report.acknowledgements.len(), 1);
                assert_eq!(report.acknowledgements[0].unique_id.id, "6b32c1");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_encode_ping_response() {
        let response = ResponsePayload::Ping(PingResponse {
            envelope: Envelope::success(),
            echo_token: "abc".into(),
            echo_data: "{}".into(),
        });
        let encoded = JsonCodec.encode(&response).unwrap();
        assert!(encoded.contains("\"EchoToken\":\"abc\""));
        assert!(encoded.contains("\"Success\""));
    }
}
