//! Payload data model shared by all protocol versions.
//!
//! These types mirror the OTA-derived message shapes one-to-one; the codec
//! layer maps them to and from the wire, and the validators in
//! [`crate::validate`] enforce the business rules on top. Fields keep their
//! wire casing through serde renames so a JSON codec works out of the box.

mod duration;
mod freerooms;
mod guestrequests;
mod inventory;
mod rateplans;

pub use duration::{Days, Nights};
pub use freerooms::{
    CountType, FreeRoomsRequest, FreeRoomsResponse, InvCount, Inventories, Inventory,
    StatusApplicationControl,
};
pub use guestrequests::{
    Acknowledgement, Address, BasicPropertyInfo, Comment, Commission, CommissionPayableAmount,
    CompanyInfo, CompanyName, CountryName, Customer, Email, Gender, GuestCount, HotelReadRequest,
    HotelReservation, HotelReservationId, ListItem, NotifReportRequest, NotifReportResponse,
    PersonName, Phone, PhoneTechType, Profile, ReadRequest, ResGlobalInfo, ResRatePlan,
    ResRetrieveResponse, ResRoomType, ResStatus, ReservationId, ReservationIdKind, RoomStay,
    SelectionCriteria, StartDateWindow, TimeSpan, Total,
};
pub use inventory::{
    Amenity, GuestRoom, HotelDescriptiveContent, ImageFormat, ImageItem, InfoCode,
    InventoryRequest, InventoryResponse, MultimediaDescription, TypeRoom,
};
pub use rateplans::{
    AdditionalGuestAmount, AgeQualifyingCode, BaseByGuestAmt, BookingRule, ChargeType,
    DaysOfWeek, Discount, GalleryItem, Guest, LengthOfStay, MealPlan, MealsIncluded, Occupancy,
    Offer, OfferRule, PrerequisiteInvType, PrerequisiteInventory, Rate, RatePlan,
    RatePlanDescription, RatePlanNotifType, RatePlans, RatePlansRequest, RatePlansResponse,
    RestrictionStatus, StayType, Supplement, TimeUnit, CODE_CONTEXT_ROOM_TYPE,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed span of calendar dates, `start ≤ end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the span.
    pub start: NaiveDate,
    /// Last day of the span.
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a span from its endpoints.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Anything that covers a span of dates. Overlap checks group values and
/// compare adjacent ranges through this trait.
pub trait DateRanged {
    /// The span this value applies to.
    fn date_range(&self) -> DateRange;
}

impl<T: DateRanged + ?Sized> DateRanged for &T {
    fn date_range(&self) -> DateRange {
        (**self).date_range()
    }
}

/// How free text is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextFormat {
    /// Unformatted text.
    PlainText,
    /// HTML markup.
    #[serde(rename = "HTML")]
    Html,
}

/// A localized piece of free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Description {
    /// Formatting of [`Self::value`].
    pub text_format: TextFormat,
    /// Language code, lowercase ISO 639-1.
    pub language: String,
    /// The text itself.
    pub value: String,
}

/// A plain URL value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    /// The URL string.
    pub value: String,
}

/// Kind of a request-level unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum UniqueIdKind {
    /// Ordinary reference.
    Reference,
    /// Reference to a purged master record.
    PurgedMasterReference,
}

impl From<UniqueIdKind> for u8 {
    fn from(kind: UniqueIdKind) -> Self {
        match kind {
            UniqueIdKind::Reference => 16,
            UniqueIdKind::PurgedMasterReference => 35,
        }
    }
}

impl TryFrom<u8> for UniqueIdKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            16 => Ok(Self::Reference),
            35 => Ok(Self::PurgedMasterReference),
            other => Err(format!("invalid unique id type: {other}")),
        }
    }
}

/// Marker distinguishing a full-state message from a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UniqueIdInstance {
    /// The message replaces all previously sent state.
    CompleteSet,
}

/// Request-level identifier. Its presence marks a message as a full-state
/// resend; deltas omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UniqueId {
    /// Identifier kind.
    #[serde(rename = "Type")]
    pub kind: UniqueIdKind,
    /// Opaque identifier value.
    #[serde(rename = "ID")]
    pub id: String,
    /// Full-state marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<UniqueIdInstance>,
}

/// Severity class of an envelope message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// Informational; the message was still applied.
    Advisory,
    /// A business rule was violated; the message was rejected.
    ApplicationError,
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Advisory => 11,
            Severity::ApplicationError => 13,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            11 => Ok(Self::Advisory),
            13 => Ok(Self::ApplicationError),
            other => Err(format!("invalid severity: {other}")),
        }
    }
}

/// Machine-readable hint telling the client what to resend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResendStatus {
    /// Resend the full room inventory.
    #[serde(rename = "HOTELWIRE_SEND_INVENTORY")]
    SendInventory,
    /// Resend full availability counts.
    #[serde(rename = "HOTELWIRE_SEND_FREEROOMS")]
    SendFreeRooms,
    /// Resend all rate plans.
    #[serde(rename = "HOTELWIRE_SEND_RATEPLANS")]
    SendRatePlans,
    /// Re-run the handshake; the capability agreement is stale.
    #[serde(rename = "HOTELWIRE_HANDSHAKE")]
    Handshake,
}

/// One warning or error inside a response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvelopeMessage {
    /// Severity class.
    #[serde(rename = "Type")]
    pub severity: Severity,
    /// Resend hint, when the client should act on the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResendStatus>,
    /// Human-readable explanation.
    pub value: String,
}

/// Marker for an accepted message. Carries no data; only its presence
/// matters. An empty-struct body (rather than a unit struct) keeps the
/// marker round-trippable through JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Success {}

/// The success/warning/error envelope every response carries.
///
/// Success and errors are mutually exclusive: a response either succeeded
/// (possibly with warnings attached) or failed with at least one error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Envelope {
    /// Present when the message was accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<Success>,
    /// Advisories that did not block acceptance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<EnvelopeMessage>>,
    /// Business rule violations that blocked acceptance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<EnvelopeMessage>>,
}

impl Envelope {
    /// A bare successful envelope.
    pub fn success() -> Self {
        Self {
            success: Some(Success {}),
            ..Self::default()
        }
    }

    /// Mark the envelope successful.
    pub fn set_success(&mut self) {
        self.success = Some(Success {});
    }

    /// Attach a warning.
    pub fn push_warning(&mut self, message: EnvelopeMessage) {
        self.warnings.get_or_insert_with(Vec::new).push(message);
    }

    /// Attach an error and clear the success marker.
    pub fn push_error(&mut self, message: EnvelopeMessage) {
        self.success = None;
        self.errors.get_or_insert_with(Vec::new).push(message);
    }

    /// Whether the envelope reports acceptance.
    pub fn is_success(&self) -> bool {
        self.success.is_some()
    }
}

/// Handshake ping request: free text plus the client's capability document
/// embedded as JSON in the echo field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PingRequest {
    /// Free text, mirrored back verbatim.
    pub echo_token: String,
    /// The client's capability document, serialized JSON.
    pub echo_data: String,
}

/// Handshake ping response: the negotiated intersection travels back inside
/// a warning so legacy clients that ignore it still see a success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PingResponse {
    /// Outcome envelope; the intersection rides in a warning.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// The client's echo token, mirrored back.
    pub echo_token: String,
    /// The intersection document, serialized JSON.
    pub echo_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_error_clears_success() {
        let mut envelope = Envelope::success();
        assert!(envelope.is_success());

        envelope.push_error(EnvelopeMessage {
            severity: Severity::ApplicationError,
            status: Some(ResendStatus::SendInventory),
            value: "missing hotel code".into(),
        });
        assert!(!envelope.is_success());
        assert_eq!(envelope.errors.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_severity_wire_codes() {
        assert_eq!(u8::from(Severity::Advisory), 11);
        assert_eq!(u8::from(Severity::ApplicationError), 13);
        assert!(Severity::try_from(12).is_err());
    }

    #[test]
    fn test_resend_status_wire_names() {
        let json = serde_json::to_string(&ResendStatus::SendFreeRooms).unwrap();
        assert_eq!(json, "\"HOTELWIRE_SEND_FREEROOMS\"");
    }
}
