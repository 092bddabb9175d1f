//! Guest request validation.
//!
//! Two validators cover the family: [`ReadValidator`] checks the poll
//! request, [`ResRetrieveValidator`] checks the reservation list before it
//! leaves the server. Most rules depend on the reservation status: quote
//! requests may float inside a date window and may carry an alternative
//! stay, reservations must be fully specified with fixed dates, and
//! cancellations need little beyond their identifier.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::rules;
use super::{ValidationError, Validator};
use crate::types::{
    Address, Comment, Customer, Email, GuestCount, HotelReservation, HotelReservationId,
    NotifReportRequest, PersonName, Profile, ReadRequest, ResGlobalInfo, ResRatePlan,
    ResRetrieveResponse, ResRoomType, ResStatus, ReservationId, ReservationIdKind, RoomStay,
    TimeSpan,
};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Validates the guest request poll.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadValidator;

impl Validator for ReadValidator {
    type Message = ReadRequest;

    fn validate(&self, message: &ReadRequest) -> Result<(), ValidationError> {
        rules::validate_hotel_code(message.hotel_code())
    }
}

/// Lookup tables for [`ResRetrieveValidator`].
#[derive(Debug, Clone, Default)]
pub struct ResRetrieveValidatorConfig {
    /// Known room type codes; stays referencing other codes are rejected.
    /// `None` disables the lookup.
    pub room_type_codes: Option<HashSet<String>>,
}

impl ResRetrieveValidatorConfig {
    /// Restrict room type codes to the given set.
    pub fn with_room_type_codes(mut self, codes: HashSet<String>) -> Self {
        self.room_type_codes = Some(codes);
        self
    }
}

/// Validates the reservation list answering a guest request poll.
#[derive(Debug, Clone, Default)]
pub struct ResRetrieveValidator {
    config: ResRetrieveValidatorConfig,
}

impl ResRetrieveValidator {
    /// Build a validator over the given lookup tables.
    pub fn new(config: ResRetrieveValidatorConfig) -> Self {
        Self { config }
    }
}

impl Validator for ResRetrieveValidator {
    type Message = ResRetrieveResponse;

    fn validate(&self, message: &ResRetrieveResponse) -> Result<(), ValidationError> {
        for reservation in &message.reservations {
            self.validate_reservation(reservation)?;
        }
        Ok(())
    }
}

impl ResRetrieveValidator {
    fn validate_reservation(&self, reservation: &HotelReservation) -> Result<(), ValidationError> {
        let status = reservation.res_status;
        Self::validate_reservation_id(&reservation.unique_id, status)?;
        self.validate_room_stays(&reservation.room_stays, status)?;
        Self::validate_customer(&reservation.customer, status)?;
        self.validate_global_info(&reservation.res_global_info, status)
    }

    fn validate_reservation_id(
        id: &ReservationId,
        status: ResStatus,
    ) -> Result<(), ValidationError> {
        let expected = if status == ResStatus::Cancelled {
            ReservationIdKind::Cancellation
        } else {
            ReservationIdKind::Reservation
        };
        if id.kind != expected {
            return Err(ValidationError::new(format!(
                "invalid value for attributes ResStatus {:?} and Type {}",
                status,
                u8::from(id.kind)
            )));
        }
        if rules::is_blank(&id.id) {
            return Err(ValidationError::missing_attribute("UniqueID.ID"));
        }
        Ok(())
    }

    fn validate_room_stays(
        &self,
        stays: &[RoomStay],
        status: ResStatus,
    ) -> Result<(), ValidationError> {
        if stays.is_empty() {
            if status == ResStatus::Cancelled {
                return Ok(());
            }
            return Err(ValidationError::missing_element("RoomStay"));
        }

        let mut alternatives = 0;
        for stay in stays {
            if stay.is_alternative() {
                alternatives += 1;
                Self::validate_alternative_room_stay(stay, status)?;
            } else {
                self.validate_room_stay(stay, status)?;
            }
        }
        if alternatives > 1 {
            return Err(ValidationError::new(
                "at most one alternative room stay is allowed",
            ));
        }
        Ok(())
    }

    fn validate_room_stay(&self, stay: &RoomStay, status: ResStatus) -> Result<(), ValidationError> {
        self.validate_room_type(stay.room_type.as_ref(), status)?;
        Self::validate_rate_plan(stay.rate_plan.as_ref(), status)?;
        Self::validate_guest_counts(&stay.guest_counts)?;
        Self::validate_time_span(&stay.time_span, status)?;
        if status.is_reservation() && stay.total.is_none() {
            return Err(ValidationError::missing_element("Total"));
        }
        Ok(())
    }

    // An alternative stay narrows a quote request to a second acceptable
    // period; it has no meaning on reservations or cancellations.
    fn validate_alternative_room_stay(
        stay: &RoomStay,
        status: ResStatus,
    ) -> Result<(), ValidationError> {
        if status != ResStatus::Requested {
            return Err(ValidationError::new(
                "alternative room stay is not allowed",
            ));
        }
        Self::validate_time_span(&stay.time_span, status)
    }

    fn validate_room_type(
        &self,
        room_type: Option<&ResRoomType>,
        status: ResStatus,
    ) -> Result<(), ValidationError> {
        let Some(room_type) = room_type else {
            if status.is_reservation() {
                return Err(ValidationError::missing_element("RoomType"));
            }
            return Ok(());
        };
        if rules::is_blank(&room_type.room_type_code) {
            return Err(ValidationError::missing_attribute("RoomTypeCode"));
        }
        if let Some(codes) = &self.config.room_type_codes {
            if !codes.contains(&room_type.room_type_code) {
                return Err(ValidationError::new(format!(
                    "inv code not found {}",
                    room_type.room_type_code
                )));
            }
        }
        Ok(())
    }

    fn validate_rate_plan(
        rate_plan: Option<&ResRatePlan>,
        status: ResStatus,
    ) -> Result<(), ValidationError> {
        let Some(rate_plan) = rate_plan else {
            if status.is_reservation() {
                return Err(ValidationError::missing_element("RatePlan"));
            }
            return Ok(());
        };
        if rules::is_blank(&rate_plan.rate_plan_code) {
            return Err(ValidationError::missing_attribute("RatePlanCode"));
        }
        if let Some(commission) = &rate_plan.commission {
            if commission.percent.is_some_and(|percent| percent > 100) {
                return Err(ValidationError::new("percent must be ≤ 100"));
            }
        }
        if status.is_reservation() && rate_plan.meals_included.is_none() {
            return Err(ValidationError::missing_element("MealsIncluded"));
        }
        Ok(())
    }

    fn validate_guest_counts(counts: &[GuestCount]) -> Result<(), ValidationError> {
        if counts.is_empty() {
            return Err(ValidationError::missing_element("GuestCount"));
        }
        let mut adults_seen = false;
        for count in counts {
            if count.age.is_none() {
                if adults_seen {
                    return Err(ValidationError::new(
                        "duplicate element GuestCount for adults",
                    ));
                }
                adults_seen = true;
            }
        }
        Ok(())
    }

    fn validate_time_span(span: &TimeSpan, status: ResStatus) -> Result<(), ValidationError> {
        if status.is_reservation() {
            return Self::validate_fixed_period(span);
        }
        let fixed = span.start.is_some() || span.end.is_some();
        let windowed = span.duration.is_some() || span.start_date_window.is_some();
        if !fixed && !windowed {
            return Err(ValidationError::missing_element("TimeSpan"));
        }
        if fixed {
            return Self::validate_fixed_period(span);
        }
        Self::validate_windowed_period(span)
    }

    fn validate_fixed_period(span: &TimeSpan) -> Result<(), ValidationError> {
        let Some(start) = span.start else {
            return Err(ValidationError::missing_attribute("Start"));
        };
        let Some(end) = span.end else {
            return Err(ValidationError::missing_attribute("End"));
        };
        if start > end {
            return Err(ValidationError::new("start must be ≤ end"));
        }
        if span.start_date_window.is_some() {
            return Err(ValidationError::unexpected_element("StartDateWindow"));
        }
        if span.duration.is_some() {
            return Err(ValidationError::unexpected_attribute("Duration"));
        }
        Ok(())
    }

    fn validate_windowed_period(span: &TimeSpan) -> Result<(), ValidationError> {
        let Some(window) = span.start_date_window else {
            return Err(ValidationError::missing_element("StartDateWindow"));
        };
        if window.earliest_date > window.latest_date {
            return Err(ValidationError::new("earliest date must be ≤ latest date"));
        }
        let Some(duration) = span.duration else {
            return Err(ValidationError::missing_attribute("Duration"));
        };
        // The stay must still fit when arriving on the latest allowed day.
        let window_days = (window.latest_date - window.earliest_date).num_days();
        if i64::from(duration.0) >= window_days {
            return Err(ValidationError::new(
                "duration exceeds the allowed date range",
            ));
        }
        Ok(())
    }

    fn validate_customer(customer: &Customer, status: ResStatus) -> Result<(), ValidationError> {
        if customer.is_empty() && status == ResStatus::Cancelled {
            return Ok(());
        }
        Self::validate_person_name(&customer.person_name)?;
        if let Some(email) = &customer.email {
            Self::validate_email(email)?;
        }
        if let Some(address) = &customer.address {
            Self::validate_address(address)?;
        }
        Ok(())
    }

    fn validate_person_name(name: &PersonName) -> Result<(), ValidationError> {
        if name.name_prefix.as_deref().is_some_and(rules::is_blank) {
            return Err(ValidationError::new(
                "invalid value for attribute NamePrefix",
            ));
        }
        if rules::is_blank(&name.given_name) {
            return Err(ValidationError::missing_attribute("GivenName"));
        }
        if rules::is_blank(&name.surname) {
            return Err(ValidationError::missing_attribute("Surname"));
        }
        if name.name_title.as_deref().is_some_and(rules::is_blank) {
            return Err(ValidationError::new(
                "invalid value for attribute NameTitle",
            ));
        }
        Ok(())
    }

    fn validate_email(email: &Email) -> Result<(), ValidationError> {
        if !EMAIL_RE.is_match(email.value.trim()) {
            return Err(ValidationError::new("invalid value for element Email"));
        }
        Ok(())
    }

    fn validate_address(address: &Address) -> Result<(), ValidationError> {
        if address.address_line.as_deref().is_some_and(rules::is_blank) {
            return Err(ValidationError::new(
                "invalid value for attribute AddressLine",
            ));
        }
        if address.city_name.as_deref().is_some_and(rules::is_blank) {
            return Err(ValidationError::new("invalid value for attribute CityName"));
        }
        if address.postal_code.as_deref().is_some_and(rules::is_blank) {
            return Err(ValidationError::new(
                "invalid value for attribute PostalCode",
            ));
        }
        if let Some(country) = &address.country_name {
            if rules::is_blank(&country.code) {
                return Err(ValidationError::new(
                    "invalid value for attribute CountryName.Code",
                ));
            }
        }
        Ok(())
    }

    fn validate_global_info(
        &self,
        info: &ResGlobalInfo,
        status: ResStatus,
    ) -> Result<(), ValidationError> {
        Self::validate_comments(&info.comments)?;
        if status.is_reservation()
            && info.cancel_penalty.as_deref().is_some_and(rules::is_blank)
        {
            return Err(ValidationError::new(
                "invalid value for element PenaltyDescription.Text",
            ));
        }
        if let Some(id) = &info.hotel_reservation_id {
            Self::validate_hotel_reservation_id(id)?;
        }
        if let Some(profile) = &info.profile {
            Self::validate_profile(profile)?;
        }
        if status != ResStatus::Cancelled {
            rules::validate_hotel_code(&info.basic_property_info.hotel_code)?;
        }
        Ok(())
    }

    fn validate_comments(comments: &[Comment]) -> Result<(), ValidationError> {
        for comment in comments {
            for item in &comment.list_items {
                if rules::is_blank(&item.value) {
                    return Err(ValidationError::new("invalid value for element ListItem"));
                }
            }
            if comment.text.as_deref().is_some_and(rules::is_blank) {
                return Err(ValidationError::new(
                    "invalid value for element Comment.Text",
                ));
            }
        }
        Ok(())
    }

    fn validate_hotel_reservation_id(id: &HotelReservationId) -> Result<(), ValidationError> {
        if id.res_id_value.as_deref().is_some_and(rules::is_blank) {
            return Err(ValidationError::new(
                "invalid value for attribute ResID_Value",
            ));
        }
        if id.res_id_source.as_deref().is_some_and(rules::is_blank) {
            return Err(ValidationError::new(
                "invalid value for attribute ResID_Source",
            ));
        }
        if id
            .res_id_source_context
            .as_deref()
            .is_some_and(rules::is_blank)
        {
            return Err(ValidationError::new(
                "invalid value for attribute ResID_SourceContext",
            ));
        }
        Ok(())
    }

    fn validate_profile(profile: &Profile) -> Result<(), ValidationError> {
        let company = &profile.company_info;
        if rules::is_blank(&company.company_name.code) {
            return Err(ValidationError::new(
                "invalid value for attribute CompanyName.Code",
            ));
        }
        if rules::is_blank(&company.company_name.value) {
            return Err(ValidationError::new("invalid value for element CompanyName"));
        }
        if let Some(address) = &company.address_info {
            Self::validate_address(address)?;
        }
        if let Some(email) = &company.email {
            Self::validate_email(email)?;
        }
        Ok(())
    }
}

/// Validates the client acknowledgement of processed guest requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifReportValidator;

impl Validator for NotifReportValidator {
    type Message = NotifReportRequest;

    fn validate(&self, message: &NotifReportRequest) -> Result<(), ValidationError> {
        for acknowledgement in &message.acknowledgements {
            if rules::is_blank(&acknowledgement.unique_id.id) {
                return Err(ValidationError::missing_attribute("UniqueID.ID"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        BasicPropertyInfo, Commission, Envelope, HotelReadRequest, MealPlan, MealsIncluded,
        Nights, StartDateWindow, Total,
    };
    use chrono::{DateTime, NaiveDate, Utc};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    fn guest() -> Customer {
        Customer {
            person_name: PersonName {
                given_name: "Maria".into(),
                surname: "Huber".into(),
                ..PersonName::default()
            },
            email: Some(Email {
                remark: None,
                value: "maria.huber@example.com".into(),
            }),
            ..Customer::default()
        }
    }

    fn stay() -> RoomStay {
        RoomStay {
            room_type: Some(ResRoomType {
                room_type_code: "DZ".into(),
                room_classification_code: None,
            }),
            rate_plan: Some(ResRatePlan {
                rate_plan_code: "STANDARD".into(),
                commission: None,
                meals_included: Some(MealsIncluded {
                    meal_plan_indicator: true,
                    meal_plan_codes: MealPlan::HalfBoard,
                }),
            }),
            guest_counts: vec![GuestCount {
                count: 2,
                age: None,
            }],
            time_span: TimeSpan {
                start: Some(date(1)),
                end: Some(date(8)),
                ..TimeSpan::default()
            },
            total: Some(Total {
                amount_after_tax: "840.00".into(),
                currency_code: "EUR".into(),
            }),
        }
    }

    fn reservation(status: ResStatus, kind: ReservationIdKind) -> HotelReservation {
        HotelReservation {
            create_date_time: "2026-08-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            res_status: status,
            unique_id: ReservationId {
                kind,
                id: "6b32c1".into(),
            },
            room_stays: vec![stay()],
            customer: guest(),
            res_global_info: ResGlobalInfo {
                basic_property_info: BasicPropertyInfo {
                    hotel_code: "123".into(),
                    hotel_name: "Frangart Inn".into(),
                },
                ..ResGlobalInfo::default()
            },
        }
    }

    fn response(reservations: Vec<HotelReservation>) -> ResRetrieveResponse {
        ResRetrieveResponse {
            envelope: Envelope::success(),
            version: "1.0".into(),
            reservations,
        }
    }

    fn validate(reservations: Vec<HotelReservation>) -> Result<(), ValidationError> {
        ResRetrieveValidator::default().validate(&response(reservations))
    }

    #[test]
    fn test_read_request_requires_hotel_code() {
        let request = ReadRequest {
            version: "1.0".into(),
            hotel_read_request: HotelReadRequest {
                hotel_code: "123".into(),
                selection_criteria: None,
            },
        };
        assert!(ReadValidator.validate(&request).is_ok());

        let blank = ReadRequest {
            hotel_read_request: HotelReadRequest {
                hotel_code: "  ".into(),
                selection_criteria: None,
            },
            ..request
        };
        let err = ReadValidator.validate(&blank).unwrap_err();
        assert_eq!(err.message(), "missing required attribute HotelCode");
    }

    #[test]
    fn test_valid_reservation_passes() {
        assert!(validate(vec![reservation(
            ResStatus::Reserved,
            ReservationIdKind::Reservation
        )])
        .is_ok());
    }

    #[test]
    fn test_id_kind_must_agree_with_status() {
        let err = validate(vec![reservation(
            ResStatus::Reserved,
            ReservationIdKind::Cancellation,
        )])
        .unwrap_err();
        assert_eq!(
            err.message(),
            "invalid value for attributes ResStatus Reserved and Type 15"
        );

        let err = validate(vec![reservation(
            ResStatus::Cancelled,
            ReservationIdKind::Reservation,
        )])
        .unwrap_err();
        assert_eq!(
            err.message(),
            "invalid value for attributes ResStatus Cancelled and Type 14"
        );
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        res.unique_id.id = String::new();
        let err = validate(vec![res]).unwrap_err();
        assert_eq!(err.message(), "missing required attribute UniqueID.ID");
    }

    #[test]
    fn test_room_stays_required_except_on_cancellations() {
        let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        res.room_stays.clear();
        let err = validate(vec![res]).unwrap_err();
        assert_eq!(err.message(), "missing required element RoomStay");

        let mut cancel = reservation(ResStatus::Cancelled, ReservationIdKind::Cancellation);
        cancel.room_stays.clear();
        assert!(validate(vec![cancel]).is_ok());
    }

    #[test]
    fn test_reservation_requires_room_type_rate_plan_and_total() {
        let strips: [fn(&mut RoomStay); 3] = [
            |s| s.room_type = None,
            |s| s.rate_plan = None,
            |s| s.total = None,
        ];
        for strip in strips {
            let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
            strip(&mut res.room_stays[0]);
            assert!(validate(vec![res]).is_err());
        }
    }

    #[test]
    fn test_unknown_room_type_code_is_rejected() {
        let validator = ResRetrieveValidator::new(
            ResRetrieveValidatorConfig::default()
                .with_room_type_codes(HashSet::from(["EZ".to_owned()])),
        );
        let err = validator
            .validate(&response(vec![reservation(
                ResStatus::Reserved,
                ReservationIdKind::Reservation,
            )]))
            .unwrap_err();
        assert_eq!(err.message(), "inv code not found DZ");
    }

    #[test]
    fn test_commission_percent_is_capped() {
        let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        if let Some(plan) = res.room_stays[0].rate_plan.as_mut() {
            plan.commission = Some(Commission {
                percent: Some(120),
                commission_payable_amount: None,
            });
        }
        let err = validate(vec![res]).unwrap_err();
        assert_eq!(err.message(), "percent must be ≤ 100");
    }

    #[test]
    fn test_duplicate_adult_guest_count_is_rejected() {
        let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        res.room_stays[0].guest_counts = vec![
            GuestCount { count: 2, age: None },
            GuestCount { count: 1, age: Some(6) },
            GuestCount { count: 1, age: None },
        ];
        let err = validate(vec![res]).unwrap_err();
        assert_eq!(err.message(), "duplicate element GuestCount for adults");
    }

    #[test]
    fn test_reservation_rejects_windowed_period() {
        let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        res.room_stays[0].time_span = TimeSpan {
            duration: Some(Nights(3)),
            start_date_window: Some(StartDateWindow {
                earliest_date: date(1),
                latest_date: date(15),
            }),
            ..TimeSpan::default()
        };
        let err = validate(vec![res]).unwrap_err();
        assert_eq!(err.message(), "missing required attribute Start");
    }

    #[test]
    fn test_fixed_period_rejects_window_leftovers() {
        let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        res.room_stays[0].time_span.start_date_window = Some(StartDateWindow {
            earliest_date: date(1),
            latest_date: date(15),
        });
        let err = validate(vec![res]).unwrap_err();
        assert_eq!(err.message(), "unexpected element found StartDateWindow");
    }

    #[test]
    fn test_quote_windowed_period_must_fit_the_window() {
        let windowed = |nights: u32| {
            let mut res = reservation(ResStatus::Requested, ReservationIdKind::Reservation);
            res.room_stays[0].time_span = TimeSpan {
                duration: Some(Nights(nights)),
                start_date_window: Some(StartDateWindow {
                    earliest_date: date(1),
                    latest_date: date(8),
                }),
                ..TimeSpan::default()
            };
            res
        };
        assert!(validate(vec![windowed(3)]).is_ok());

        let err = validate(vec![windowed(7)]).unwrap_err();
        assert_eq!(err.message(), "duration exceeds the allowed date range");
    }

    #[test]
    fn test_alternative_stay_only_on_quote_requests() {
        let alternative = RoomStay {
            time_span: TimeSpan {
                start: Some(date(10)),
                end: Some(date(17)),
                ..TimeSpan::default()
            },
            ..RoomStay::default()
        };

        let mut quote = reservation(ResStatus::Requested, ReservationIdKind::Reservation);
        quote.room_stays.push(alternative.clone());
        assert!(validate(vec![quote]).is_ok());

        let mut reserved = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        reserved.room_stays.push(alternative.clone());
        let err = validate(vec![reserved]).unwrap_err();
        assert_eq!(err.message(), "alternative room stay is not allowed");

        let mut doubled = reservation(ResStatus::Requested, ReservationIdKind::Reservation);
        doubled.room_stays.push(alternative.clone());
        doubled.room_stays.push(alternative);
        let err = validate(vec![doubled]).unwrap_err();
        assert_eq!(err.message(), "at most one alternative room stay is allowed");
    }

    #[test]
    fn test_customer_may_be_empty_only_on_cancellations() {
        let mut cancel = reservation(ResStatus::Cancelled, ReservationIdKind::Cancellation);
        cancel.customer = Customer::default();
        assert!(validate(vec![cancel]).is_ok());

        let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        res.customer = Customer::default();
        let err = validate(vec![res]).unwrap_err();
        assert_eq!(err.message(), "missing required attribute GivenName");
    }

    #[test]
    fn test_email_format_is_checked() {
        let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        res.customer.email = Some(Email {
            remark: None,
            value: "not-an-address".into(),
        });
        let err = validate(vec![res]).unwrap_err();
        assert_eq!(err.message(), "invalid value for element Email");
    }

    #[test]
    fn test_blank_address_fields_are_rejected() {
        let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        res.customer.address = Some(Address {
            city_name: Some("  ".into()),
            ..Address::default()
        });
        let err = validate(vec![res]).unwrap_err();
        assert_eq!(err.message(), "invalid value for attribute CityName");
    }

    #[test]
    fn test_hotel_code_required_except_on_cancellations() {
        let mut res = reservation(ResStatus::Reserved, ReservationIdKind::Reservation);
        res.res_global_info.basic_property_info.hotel_code = String::new();
        let err = validate(vec![res]).unwrap_err();
        assert_eq!(err.message(), "missing required attribute HotelCode");

        let mut cancel = reservation(ResStatus::Cancelled, ReservationIdKind::Cancellation);
        cancel.res_global_info.basic_property_info.hotel_code = String::new();
        assert!(validate(vec![cancel]).is_ok());
    }

    #[test]
    fn test_acknowledgement_ids_must_not_be_blank() {
        let report = NotifReportRequest {
            version: "1.0".into(),
            envelope: Envelope::success(),
            acknowledgements: vec![crate::types::Acknowledgement {
                unique_id: ReservationId {
                    kind: ReservationIdKind::Reservation,
                    id: String::new(),
                },
            }],
        };
        let err = NotifReportValidator.validate(&report).unwrap_err();
        assert_eq!(err.message(), "missing required attribute UniqueID.ID");
    }
}
