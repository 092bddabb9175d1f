//! Guest request message shapes: quote requests, reservations and
//! cancellations.
//!
//! Guest requests flow the opposite way from the notif families: the client
//! polls with a read request, the server answers with the pending
//! reservation list, and the client closes the loop by acknowledging the
//! reservation ids it has processed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Envelope, MealsIncluded, Nights};

/// Poll for pending guest requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReadRequest {
    /// Message schema version.
    pub version: String,
    /// Selection of what to read.
    pub hotel_read_request: HotelReadRequest,
}

impl ReadRequest {
    /// Hotel the poll applies to.
    pub fn hotel_code(&self) -> &str {
        &self.hotel_read_request.hotel_code
    }
}

/// Hotel selector of a read request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotelReadRequest {
    /// Hotel identifier.
    pub hotel_code: String,
    /// Optional lower bound on the creation time of returned requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_criteria: Option<SelectionCriteria>,
}

/// Time filter of a read request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelectionCriteria {
    /// Only requests created at or after this instant are returned.
    pub start: DateTime<Utc>,
}

/// The reservation list answering a read request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResRetrieveResponse {
    /// Outcome envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Message schema version.
    pub version: String,
    /// Pending guest requests, possibly empty.
    #[serde(default, rename = "HotelReservation", skip_serializing_if = "Vec::is_empty")]
    pub reservations: Vec<HotelReservation>,
}

/// Lifecycle state of one guest request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResStatus {
    /// Non-binding quote request.
    Requested,
    /// Confirmed reservation.
    Reserved,
    /// Modification of an existing reservation.
    Modify,
    /// Cancellation of an existing reservation.
    Cancelled,
}

impl ResStatus {
    /// Whether the status carries a binding reservation.
    pub fn is_reservation(self) -> bool {
        matches!(self, Self::Reserved | Self::Modify)
    }
}

/// Kind of a reservation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ReservationIdKind {
    /// Identifies a reservation or quote request.
    Reservation,
    /// Identifies a cancellation.
    Cancellation,
}

impl From<ReservationIdKind> for u8 {
    fn from(kind: ReservationIdKind) -> Self {
        match kind {
            ReservationIdKind::Reservation => 14,
            ReservationIdKind::Cancellation => 15,
        }
    }
}

impl TryFrom<u8> for ReservationIdKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            14 => Ok(Self::Reservation),
            15 => Ok(Self::Cancellation),
            other => Err(format!("invalid reservation id type: {other}")),
        }
    }
}

/// Identifier of one guest request. The kind must agree with the
/// reservation status it travels with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationId {
    /// Identifier kind.
    #[serde(rename = "Type")]
    pub kind: ReservationIdKind,
    /// Opaque identifier value.
    #[serde(rename = "ID")]
    pub id: String,
}

/// One guest request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotelReservation {
    /// When the request was created.
    pub create_date_time: DateTime<Utc>,
    /// Lifecycle state.
    pub res_status: ResStatus,
    /// Request identifier.
    #[serde(rename = "UniqueID")]
    pub unique_id: ReservationId,
    /// Requested stays. A quote request may carry one alternative stay with
    /// dates only.
    #[serde(default, rename = "RoomStay", skip_serializing_if = "Vec::is_empty")]
    pub room_stays: Vec<RoomStay>,
    /// The guest.
    pub customer: Customer,
    /// Request-level data.
    pub res_global_info: ResGlobalInfo,
}

/// One requested stay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomStay {
    /// Requested room type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<ResRoomType>,
    /// Requested rate plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_plan: Option<ResRatePlan>,
    /// Guest counts, one adult entry plus per-age child entries.
    #[serde(default, rename = "GuestCount", skip_serializing_if = "Vec::is_empty")]
    pub guest_counts: Vec<GuestCount>,
    /// Requested period, fixed or windowed.
    pub time_span: TimeSpan,
    /// Price of the stay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Total>,
}

impl RoomStay {
    /// An alternative stay carries dates only: no room type, rate plan,
    /// guest counts or total.
    pub fn is_alternative(&self) -> bool {
        self.room_type.is_none()
            && self.rate_plan.is_none()
            && self.guest_counts.is_empty()
            && self.total.is_none()
    }
}

/// Room type reference of a stay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResRoomType {
    /// Room type code, matched against the inventory.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub room_type_code: String,
    /// OTA room classification code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_classification_code: Option<u32>,
}

/// Rate plan reference of a stay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResRatePlan {
    /// Rate plan code.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rate_plan_code: String,
    /// Commission owed to the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<Commission>,
    /// Board basis of the quoted price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals_included: Option<MealsIncluded>,
}

/// Channel commission, as a percentage or an absolute amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Commission {
    /// Commission percentage, at most 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<u32>,
    /// Absolute commission amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_payable_amount: Option<CommissionPayableAmount>,
}

/// Absolute commission amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommissionPayableAmount {
    /// Decimal amount.
    pub amount: String,
    /// ISO 4217 currency.
    pub currency_code: String,
}

/// One guest count entry. An absent age marks the adult entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuestCount {
    /// Number of guests.
    pub count: u32,
    /// Child age; absent for adults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// Requested period: either a fixed start/end pair, or (on quote requests)
/// a duration floating inside a start-date window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeSpan {
    /// Arrival date of a fixed period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// Departure date of a fixed period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    /// Stay length of a windowed period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Nights>,
    /// Arrival window of a windowed period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_window: Option<StartDateWindow>,
}

/// Arrival window of a windowed period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartDateWindow {
    /// Earliest acceptable arrival.
    pub earliest_date: NaiveDate,
    /// Latest acceptable arrival.
    pub latest_date: NaiveDate,
}

/// Price of a stay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Total {
    /// Decimal amount, taxes included.
    pub amount_after_tax: String,
    /// ISO 4217 currency.
    pub currency_code: String,
}

/// Guest gender as declared by the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Not declared.
    Unknown,
}

/// The guest behind a request. May be entirely empty on cancellations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    /// Declared gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Birth date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Preferred language, lowercase ISO 639-1.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,
    /// Name of the guest.
    pub person_name: PersonName,
    /// Contact phone numbers.
    #[serde(default, rename = "Telephone", skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<Phone>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl Customer {
    /// Whether no field at all was supplied.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Structured person name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonName {
    /// Salutation, non-blank when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    /// Given name.
    pub given_name: String,
    /// Family name.
    pub surname: String,
    /// Academic or professional title, non-blank when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_title: Option<String>,
}

/// OTA phone technology codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhoneTechType {
    /// Landline voice.
    #[serde(rename = "1")]
    Voice,
    /// Fax.
    #[serde(rename = "3")]
    Fax,
    /// Mobile.
    #[serde(rename = "5")]
    Mobile,
}

/// One contact phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Phone {
    /// Technology of the number.
    pub phone_tech_type: PhoneTechType,
    /// The number itself.
    pub phone_number: String,
}

/// Contact email with an optional marketing-consent remark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Email {
    /// Consent remark, e.g. `newsletter:yes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// The address itself.
    pub value: String,
}

/// Postal address. Every optional field must be non-blank when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    /// Language of the address fields.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,
    /// Street and number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<CountryName>,
}

/// Country reference of an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountryName {
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
}

/// Request-level data of one guest request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResGlobalInfo {
    /// Free-form comments from the guest or the channel.
    #[serde(default, rename = "Comment", skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    /// Cancellation policy text the reservation was made under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_penalty: Option<String>,
    /// Channel-side reservation reference.
    #[serde(rename = "HotelReservationID", skip_serializing_if = "Option::is_none")]
    pub hotel_reservation_id: Option<HotelReservationId>,
    /// Travel agent profile, when booked through one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// The hotel the request is addressed to.
    pub basic_property_info: BasicPropertyInfo,
}

/// One comment, either free text or a structured list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Comment {
    /// Who the comment is from.
    pub name: String,
    /// Structured list entries.
    #[serde(default, rename = "ListItem", skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<ListItem>,
    /// Free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One entry of a structured comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListItem {
    /// Position within the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_item: Option<u32>,
    /// Language of the entry.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,
    /// The entry text.
    pub value: String,
}

/// Channel-side reservation reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelReservationId {
    /// OTA reference type.
    #[serde(rename = "ResID_Type")]
    pub res_id_type: u32,
    /// Reference value.
    #[serde(rename = "ResID_Value", skip_serializing_if = "Option::is_none")]
    pub res_id_value: Option<String>,
    /// Issuing system.
    #[serde(rename = "ResID_Source", skip_serializing_if = "Option::is_none")]
    pub res_id_source: Option<String>,
    /// Issuing system context.
    #[serde(rename = "ResID_SourceContext", skip_serializing_if = "Option::is_none")]
    pub res_id_source_context: Option<String>,
}

/// Travel agent profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    /// OTA profile type; travel agents are type 4.
    pub profile_type: u32,
    /// The agency itself.
    pub company_info: CompanyInfo,
}

/// Travel agency contact data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyInfo {
    /// Agency name and code.
    pub company_name: CompanyName,
    /// Agency address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_info: Option<Address>,
    /// Agency email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
}

/// Agency name and identifying code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyName {
    /// Agency code.
    pub code: String,
    /// Scheme the code belongs to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code_context: String,
    /// Display name.
    pub value: String,
}

/// The hotel a request is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BasicPropertyInfo {
    /// Hotel identifier.
    pub hotel_code: String,
    /// Display name of the hotel.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hotel_name: String,
}

/// Client acknowledgement of processed guest requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotifReportRequest {
    /// Message schema version.
    pub version: String,
    /// Outcome the client reports for the batch.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Identifiers of the requests the client has processed.
    #[serde(default, rename = "HotelReservation", skip_serializing_if = "Vec::is_empty")]
    pub acknowledgements: Vec<Acknowledgement>,
}

/// One acknowledged guest request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Acknowledgement {
    /// Identifier being acknowledged.
    #[serde(rename = "UniqueID")]
    pub unique_id: ReservationId,
}

/// Acknowledgement receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotifReportResponse {
    /// Outcome envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Message schema version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternative_stay_carries_dates_only() {
        let stay = RoomStay {
            time_span: TimeSpan {
                start: NaiveDate::from_ymd_opt(2026, 8, 1),
                end: NaiveDate::from_ymd_opt(2026, 8, 8),
                ..TimeSpan::default()
            },
            ..RoomStay::default()
        };
        assert!(stay.is_alternative());

        let stay = RoomStay {
            total: Some(Total {
                amount_after_tax: "420.00".into(),
                currency_code: "EUR".into(),
            }),
            ..stay
        };
        assert!(!stay.is_alternative());
    }

    #[test]
    fn test_reservation_statuses() {
        assert!(ResStatus::Reserved.is_reservation());
        assert!(ResStatus::Modify.is_reservation());
        assert!(!ResStatus::Requested.is_reservation());
        assert!(!ResStatus::Cancelled.is_reservation());
    }

    #[test]
    fn test_reservation_id_wire_codes() {
        assert_eq!(u8::from(ReservationIdKind::Reservation), 14);
        assert_eq!(u8::from(ReservationIdKind::Cancellation), 15);
        assert!(ReservationIdKind::try_from(16).is_err());
    }

    #[test]
    fn test_empty_customer_detection() {
        assert!(Customer::default().is_empty());

        let customer = Customer {
            person_name: PersonName {
                given_name: "Maria".into(),
                surname: "Huber".into(),
                ..PersonName::default()
            },
            ..Customer::default()
        };
        assert!(!customer.is_empty());
    }
}
