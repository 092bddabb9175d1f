//! Rate plan message validation.
//!
//! The richest validator of the family. A plan entry is validated according
//! to its notification mode (new master, new derived, overlay, remove), and
//! the shape every sub-structure must have per mode is declared in
//! [`policy::FieldRule`] tables rather than scattered conditionals.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use super::policy::{FieldKind, FieldRule};
use super::rules::{self, group_by, OverlapPolicy};
use super::{ValidationError, Validator};
use crate::protocol::{caps, CapabilitySet};
use crate::types::{
    AdditionalGuestAmount, BaseByGuestAmt, BookingRule, Occupancy, Offer, OfferRule,
    PrerequisiteInvType, Rate, RatePlan, RatePlanDescription, RatePlanNotifType,
    RatePlansRequest, ResendStatus, StayType, Supplement, TimeUnit, UniqueIdInstance,
};

lazy_static! {
    static ref DOW_PATTERN_RE: Regex = Regex::new(r"^[0-1]{7}$").unwrap();
}

/// Occupancy bounds configured or negotiated for one age class.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccupancySettings {
    /// Minimum number of guests.
    pub min: Option<u32>,
    /// Maximum number of guests.
    pub max: Option<u32>,
    /// Minimum age of the class.
    pub min_age: Option<u32>,
}

/// Occupancy figures of one known room type.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomTypeOccupancy {
    /// Minimum occupancy.
    pub min: u32,
    /// Standard occupancy.
    pub std: u32,
    /// Maximum occupancy.
    pub max: u32,
}

/// Configuration of the rate plans validator.
///
/// Boolean switches derive from the negotiated capability set; the lookup
/// tables come from the embedding application.
#[derive(Debug, Clone, Default)]
pub struct RatePlansValidatorConfig {
    /// Arrival day-of-week restrictions are accepted.
    pub arrival_dow: bool,
    /// Departure day-of-week restrictions are accepted.
    pub departure_dow: bool,
    /// Plan-wide booking rules are accepted.
    pub generic_booking_rules: bool,
    /// Per-room-type booking rules are accepted.
    pub room_type_booking_rules: bool,
    /// Supplements are accepted.
    pub supplements: bool,
    /// Free-night offers are accepted.
    pub free_night_offers: bool,
    /// Family offers are accepted.
    pub family_offers: bool,
    /// Overlay updates are accepted.
    pub overlay: bool,
    /// Master/derived plan joins are accepted.
    pub rate_plan_join: bool,
    /// Advance-booking offsets in offer rules are accepted.
    pub offer_rule_booking_offset: bool,
    /// Day-of-week and length-of-stay restrictions in offer rules.
    pub offer_rule_dow_los: bool,
    /// Known master plans and the derived codes under each.
    pub rate_plan_mapping: HashMap<String, HashSet<String>>,
    /// Known room types with their occupancy figures.
    pub room_type_mapping: HashMap<String, RoomTypeOccupancy>,
    /// Adult occupancy defaults, refined per plan by offer rules.
    pub adult_occupancy: OccupancySettings,
    /// Child occupancy defaults; `None` rejects child pricing outright.
    pub child_occupancy: Option<OccupancySettings>,
}

impl RatePlansValidatorConfig {
    /// Derive the switches from a negotiated capability set.
    pub fn from_capabilities(capabilities: &CapabilitySet) -> Self {
        Self {
            arrival_dow: capabilities.enabled(caps::RATE_PLANS_ACCEPT_ARRIVAL_DOW),
            departure_dow: capabilities.enabled(caps::RATE_PLANS_ACCEPT_DEPARTURE_DOW),
            generic_booking_rules: capabilities.enabled(caps::RATE_PLANS_ACCEPT_BOOKING_RULE),
            room_type_booking_rules: capabilities
                .enabled(caps::RATE_PLANS_ACCEPT_ROOM_TYPE_BOOKING_RULE),
            supplements: capabilities.enabled(caps::RATE_PLANS_ACCEPT_SUPPLEMENTS),
            free_night_offers: capabilities.enabled(caps::RATE_PLANS_ACCEPT_FREE_NIGHTS_OFFERS),
            family_offers: capabilities.enabled(caps::RATE_PLANS_ACCEPT_FAMILY_OFFERS),
            overlay: capabilities.enabled(caps::RATE_PLANS_ACCEPT_OVERLAY),
            rate_plan_join: capabilities.enabled(caps::RATE_PLANS_ACCEPT_RATE_PLAN_JOIN),
            offer_rule_booking_offset: capabilities
                .enabled(caps::RATE_PLANS_ACCEPT_OFFER_RULE_BOOKING_OFFSET),
            offer_rule_dow_los: capabilities.enabled(caps::RATE_PLANS_ACCEPT_OFFER_RULE_DOW_LOS),
            ..Self::default()
        }
    }

    /// Attach the known rate plans table.
    pub fn with_rate_plan_mapping(
        mut self,
        mapping: HashMap<String, HashSet<String>>,
    ) -> Self {
        self.rate_plan_mapping = mapping;
        self
    }

    /// Attach the known room types table.
    pub fn with_room_type_mapping(mut self, mapping: HashMap<String, RoomTypeOccupancy>) -> Self {
        self.room_type_mapping = mapping;
        self
    }

    /// Configure adult occupancy defaults.
    pub fn with_adult_occupancy(mut self, occupancy: OccupancySettings) -> Self {
        self.adult_occupancy = occupancy;
        self
    }

    /// Allow child pricing with the given defaults.
    pub fn with_child_occupancy(mut self, occupancy: OccupancySettings) -> Self {
        self.child_occupancy = Some(occupancy);
        self
    }
}

/// Per-message mutable state: what earlier plans of the same message have
/// established. Keeping it outside the validator keeps validation reentrant.
#[derive(Debug, Default)]
struct MessageScope {
    supplement_codes: HashSet<String>,
}

/// Per-plan context derived while walking one plan entry.
#[derive(Debug, Clone, Copy)]
struct PlanScope {
    mode: Option<RatePlanNotifType>,
    adult: OccupancySettings,
    child: Option<OccupancySettings>,
}

/// Validates rate plan notifications.
#[derive(Debug, Clone, Default)]
pub struct RatePlansValidator {
    config: RatePlansValidatorConfig,
}

impl RatePlansValidator {
    /// Build from an explicit configuration.
    pub fn new(config: RatePlansValidatorConfig) -> Self {
        Self { config }
    }
}

impl Validator for RatePlansValidator {
    type Message = RatePlansRequest;

    fn validate(&self, message: &RatePlansRequest) -> Result<(), ValidationError> {
        rules::validate_hotel_code(&message.rate_plans.hotel_code)?;

        let is_reset = message
            .unique_id
            .as_ref()
            .is_some_and(|uid| uid.instance == Some(UniqueIdInstance::CompleteSet));

        let mut scope = MessageScope::default();
        for plan in &message.rate_plans.rate_plans {
            if is_reset {
                Self::validate_rate_plan_code(&plan.rate_plan_code)?;
            } else {
                self.validate_rate_plan(plan, &mut scope)?;
            }
        }

        Ok(())
    }
}

impl RatePlansValidator {
    fn validate_rate_plan(
        &self,
        plan: &RatePlan,
        scope: &mut MessageScope,
    ) -> Result<(), ValidationError> {
        Self::validate_rate_plan_code(&plan.rate_plan_code)?;

        if rules::is_blank(&plan.currency_code) {
            return Err(ValidationError::missing_attribute("CurrencyCode"));
        }

        if !self.config.rate_plan_join && !plan.is_master() {
            return Err(ValidationError::new("rate plan join not supported"));
        }

        let mut plan_scope = PlanScope {
            mode: plan.rate_plan_notif_type,
            adult: self.config.adult_occupancy,
            child: self.config.child_occupancy,
        };

        match plan.rate_plan_notif_type {
            Some(RatePlanNotifType::New) => {
                if plan.is_master() {
                    self.validate_new_master(plan, scope, &mut plan_scope)
                } else {
                    self.validate_new_derived(plan, scope, &plan_scope)
                }
            }
            Some(RatePlanNotifType::Overlay) => self.validate_overlay(plan, scope, &plan_scope),
            Some(RatePlanNotifType::Remove) => Self::validate_remove(plan),
            None => Ok(()),
        }
    }

    fn validate_rate_plan_code(code: &str) -> Result<(), ValidationError> {
        if rules::is_blank(code) {
            return Err(ValidationError::missing_attribute("RatePlanCode"));
        }
        Ok(())
    }

    fn validate_new_master(
        &self,
        plan: &RatePlan,
        scope: &mut MessageScope,
        plan_scope: &mut PlanScope,
    ) -> Result<(), ValidationError> {
        self.validate_offers(&plan.offers, plan_scope)?;
        if let Some(descriptions) = &plan.descriptions {
            Self::validate_descriptions(descriptions)?;
        }
        self.validate_booking_rules(&plan.booking_rules)?;
        self.validate_rates(&plan.rates, plan_scope)?;
        self.validate_supplements(&plan.supplements, scope)?;
        Ok(())
    }

    fn validate_new_derived(
        &self,
        plan: &RatePlan,
        scope: &MessageScope,
        plan_scope: &PlanScope,
    ) -> Result<(), ValidationError> {
        let code = if plan.rate_plan_id.is_empty() {
            &plan.rate_plan_code
        } else {
            &plan.rate_plan_id
        };
        if !self.config.rate_plan_mapping.contains_key(code) {
            return Err(ValidationError::new(format!("rate plan not found {code}")));
        }

        self.validate_booking_rules(&plan.booking_rules)?;
        self.validate_rates(&plan.rates, plan_scope)?;
        self.validate_date_depending_supplements(&plan.supplements, scope)?;

        let shape = [
            FieldRule::forbidden("Offers", FieldKind::Element),
            FieldRule::forbidden("Description", FieldKind::Element),
        ];
        let present = [!plan.offers.is_empty(), plan.descriptions.is_some()];
        super::policy::check_table(&shape, &present, &CapabilitySet::new())
    }

    fn validate_overlay(
        &self,
        plan: &RatePlan,
        scope: &MessageScope,
        plan_scope: &PlanScope,
    ) -> Result<(), ValidationError> {
        if !self.config.overlay {
            return Err(
                ValidationError::new("deltas not supported").with_status(ResendStatus::SendRatePlans)
            );
        }

        if !plan.rate_plan_id.is_empty()
            && !self.config.rate_plan_mapping.contains_key(&plan.rate_plan_id)
        {
            return Err(ValidationError::new(format!(
                "rate plan not found {}",
                plan.rate_plan_id
            )));
        }

        let known = self
            .config
            .rate_plan_mapping
            .values()
            .any(|derived| derived.contains(&plan.rate_plan_code));
        if !known {
            return Err(ValidationError::new(format!(
                "rate plan not found {}",
                plan.rate_plan_code
            )));
        }

        self.validate_booking_rules(&plan.booking_rules)?;
        self.validate_date_depending_rates(&plan.rates, plan_scope)?;
        self.validate_date_depending_supplements(&plan.supplements, scope)?;

        let shape = [
            FieldRule::forbidden("Offers", FieldKind::Element),
            FieldRule::forbidden("Description", FieldKind::Element),
        ];
        let present = [!plan.offers.is_empty(), plan.descriptions.is_some()];
        super::policy::check_table(&shape, &present, &CapabilitySet::new())
    }

    fn validate_remove(plan: &RatePlan) -> Result<(), ValidationError> {
        let shape = [
            FieldRule::forbidden("Offers", FieldKind::Element),
            FieldRule::forbidden("Description", FieldKind::Element),
            FieldRule::forbidden("BookingRules", FieldKind::Element),
            FieldRule::forbidden("Rates", FieldKind::Element),
            FieldRule::forbidden("Supplements", FieldKind::Element),
        ];
        let present = [
            !plan.offers.is_empty(),
            plan.descriptions.is_some(),
            !plan.booking_rules.is_empty(),
            !plan.rates.is_empty(),
            !plan.supplements.is_empty(),
        ];
        super::policy::check_table(&shape, &present, &CapabilitySet::new())
    }

    // Offers

    fn validate_offers(
        &self,
        offers: &[Offer],
        plan_scope: &mut PlanScope,
    ) -> Result<(), ValidationError> {
        // A new master plan must open with its offer rule.
        let Some(first) = offers.first() else {
            return Err(ValidationError::missing_element("OfferRule"));
        };
        self.validate_offer_rule(first.offer_rule.as_ref(), plan_scope)?;
        self.validate_additional_offers(&offers[1..])
    }

    fn validate_offer_rule(
        &self,
        offer_rule: Option<&OfferRule>,
        plan_scope: &mut PlanScope,
    ) -> Result<(), ValidationError> {
        let Some(rule) = offer_rule else {
            return Err(ValidationError::missing_element("OfferRule"));
        };

        if !self.config.offer_rule_booking_offset
            && (rule.min_advanced_booking_offset.is_some()
                || rule.max_advanced_booking_offset.is_some())
        {
            return Err(ValidationError::new(
                "offer rule booking offset not supported",
            ));
        }

        if !self.config.offer_rule_dow_los
            && (!rule.lengths_of_stay.is_empty()
                || rule.arrival_days_of_week.is_some()
                || rule.departure_days_of_week.is_some())
        {
            return Err(ValidationError::new(
                "offer rule days of week and lengths of stay not supported",
            ));
        }

        Self::validate_offer_rule_lengths_of_stay(rule)?;
        Self::validate_occupancies(&rule.occupancies, plan_scope)
    }

    fn validate_offer_rule_lengths_of_stay(rule: &OfferRule) -> Result<(), ValidationError> {
        let mut min_arrival = 0;
        let mut max_arrival = 0;
        for los in &rule.lengths_of_stay {
            match los.min_max_message_type {
                StayType::MinArrival => min_arrival = los.time,
                StayType::MaxArrival => max_arrival = los.time,
                StayType::MinThrough | StayType::MaxThrough => {
                    return Err(ValidationError::new(
                        "invalid value for attribute MinMaxMessageType inside element OfferRule",
                    ));
                }
            }
        }

        if max_arrival > 0 && min_arrival > max_arrival {
            return Err(ValidationError::new(format!(
                "min stay arrival must be ≤ max stay arrival, got {min_arrival} and {max_arrival}"
            )));
        }

        Ok(())
    }

    fn validate_occupancies(
        occupancies: &[Occupancy],
        plan_scope: &mut PlanScope,
    ) -> Result<(), ValidationError> {
        let adults: Vec<&Occupancy> = occupancies.iter().filter(|o| o.is_adult()).collect();
        match adults.as_slice() {
            [] => {
                return Err(ValidationError::missing_element(
                    "Occupancy with attribute AgeQualifyingCode = 10",
                ))
            }
            [adult] => {
                Self::validate_occupancy(adult)?;
                plan_scope.adult = OccupancySettings {
                    min: adult.min_occupancy,
                    max: adult.max_occupancy,
                    min_age: adult.min_age,
                };
            }
            _ => {}
        }

        let children: Vec<&Occupancy> = occupancies.iter().filter(|o| o.is_child()).collect();
        match children.as_slice() {
            [] => {}
            [child] => {
                Self::validate_occupancy(child)?;
                plan_scope.child = Some(OccupancySettings {
                    min: child.min_occupancy,
                    max: child.max_occupancy,
                    min_age: child.min_age,
                });
            }
            _ => {
                return Err(ValidationError::new(
                    "duplicate element Occupancy with attribute AgeQualifyingCode = 8",
                ))
            }
        }

        Ok(())
    }

    fn validate_occupancy(occupancy: &Occupancy) -> Result<(), ValidationError> {
        if occupancy.min_occupancy.is_some_and(|min| min > 99) {
            return Err(ValidationError::new("min occupancy must be ≤ 99"));
        }
        if occupancy.max_occupancy.is_some_and(|max| max > 99) {
            return Err(ValidationError::new("max occupancy must be ≤ 99"));
        }
        Ok(())
    }

    fn validate_additional_offers(&self, offers: &[Offer]) -> Result<(), ValidationError> {
        let free_nights: Vec<&Offer> =
            offers.iter().filter(|o| o.is_free_night_offer()).collect();
        match free_nights.as_slice() {
            [] => {}
            [offer] => self.validate_free_night_offer(offer)?,
            _ => return Err(ValidationError::new("duplicate free night offer")),
        }

        let families: Vec<&Offer> = offers.iter().filter(|o| o.is_family_offer()).collect();
        match families.as_slice() {
            [] => {}
            [offer] => self.validate_family_offer(offer)?,
            _ => return Err(ValidationError::new("duplicate family offer")),
        }

        Ok(())
    }

    fn validate_free_night_offer(&self, offer: &Offer) -> Result<(), ValidationError> {
        if !self.config.free_night_offers {
            return Err(ValidationError::new("free night offer not supported"));
        }

        // Classification guarantees the discount is present.
        let Some(discount) = &offer.discount else {
            return Err(ValidationError::missing_element("Discount"));
        };

        if discount.nights_required == 0 {
            return Err(ValidationError::missing_attribute("NightsRequired"));
        }
        if discount.nights_discounted == 0 {
            return Err(ValidationError::missing_attribute("NightsDiscounted"));
        }

        if !discount.discount_pattern.is_empty() {
            let expected =
                rules::discount_pattern(discount.nights_required, discount.nights_discounted);
            if discount.discount_pattern != expected {
                return Err(ValidationError::new(
                    "invalid value for attribute DiscountPattern",
                ));
            }
        }

        if offer.guest.is_some() {
            return Err(ValidationError::unexpected_element("Guest"));
        }

        Ok(())
    }

    fn validate_family_offer(&self, offer: &Offer) -> Result<(), ValidationError> {
        if !self.config.family_offers {
            return Err(ValidationError::new("family offer not supported"));
        }

        let guest_is_child = offer
            .guest
            .as_ref()
            .is_some_and(|g| g.age_qualifying_code == Some(crate::types::AgeQualifyingCode::Child));
        if !guest_is_child {
            return Err(ValidationError::new(
                "invalid value for attribute Guest.AgeQualifyingCode",
            ));
        }

        let Some(discount) = &offer.discount else {
            return Err(ValidationError::missing_element("Discount"));
        };

        let shape = [
            FieldRule::forbidden("NightsRequired", FieldKind::Attribute),
            FieldRule::forbidden("NightsDiscounted", FieldKind::Attribute),
            FieldRule::forbidden("DiscountPattern", FieldKind::Attribute),
        ];
        let present = [
            discount.nights_required > 0,
            discount.nights_discounted > 0,
            !discount.discount_pattern.is_empty(),
        ];
        super::policy::check_table(&shape, &present, &CapabilitySet::new())
    }

    // Descriptions

    fn validate_descriptions(descriptions: &RatePlanDescription) -> Result<(), ValidationError> {
        rules::validate_language_uniqueness(&descriptions.titles)?;
        rules::validate_language_uniqueness(&descriptions.intros)?;
        rules::validate_language_uniqueness(&descriptions.descriptions)?;
        for item in &descriptions.gallery {
            rules::validate_language_uniqueness(&item.descriptions)?;
        }
        Ok(())
    }

    // Booking rules

    fn validate_booking_rules(&self, booking_rules: &[BookingRule]) -> Result<(), ValidationError> {
        for rule in booking_rules {
            self.validate_booking_rule(rule)?;
        }
        self.validate_booking_rule_overlaps(booking_rules)
    }

    fn validate_booking_rule(&self, rule: &BookingRule) -> Result<(), ValidationError> {
        if self.config.room_type_booking_rules {
            if rules::is_blank(&rule.code) {
                return Err(ValidationError::missing_attribute("Code"));
            }
            if !self.config.room_type_mapping.contains_key(&rule.code) {
                return Err(ValidationError::new(format!(
                    "inv type code not found {}",
                    rule.code
                )));
            }
        } else if self.config.generic_booking_rules
            && (!rule.code.is_empty() || !rule.code_context.is_empty())
        {
            return Err(ValidationError::new(
                "room type booking rules not supported",
            ));
        }

        if rule.start > rule.end {
            return Err(ValidationError::new("start must be ≤ end"));
        }

        Self::validate_lengths_of_stay(&rule.lengths_of_stay)?;

        let dow_rules = [
            FieldRule::gated(
                "ArrivalDaysOfWeek",
                FieldKind::Element,
                caps::RATE_PLANS_ACCEPT_ARRIVAL_DOW,
                "arrival days of week not supported",
            ),
            FieldRule::gated(
                "DepartureDaysOfWeek",
                FieldKind::Element,
                caps::RATE_PLANS_ACCEPT_DEPARTURE_DOW,
                "departure days of week not supported",
            ),
        ];
        let present = [
            rule.arrival_days_of_week.is_some(),
            rule.departure_days_of_week.is_some(),
        ];
        let negotiated = self.dow_capabilities();
        super::policy::check_table(&dow_rules, &present, &negotiated)
    }

    fn dow_capabilities(&self) -> CapabilitySet {
        let mut tags = Vec::new();
        if self.config.arrival_dow {
            tags.push(caps::RATE_PLANS_ACCEPT_ARRIVAL_DOW);
        }
        if self.config.departure_dow {
            tags.push(caps::RATE_PLANS_ACCEPT_DEPARTURE_DOW);
        }
        CapabilitySet::from_tags(tags)
    }

    fn validate_lengths_of_stay(
        lengths_of_stay: &[crate::types::LengthOfStay],
    ) -> Result<(), ValidationError> {
        let mut min_arrival = 1;
        let mut min_through = 1;
        let mut max_arrival = u32::MAX;
        let mut max_through = u32::MAX;

        for los in lengths_of_stay {
            match los.min_max_message_type {
                StayType::MinArrival => min_arrival = los.time,
                StayType::MaxArrival => max_arrival = los.time,
                StayType::MinThrough => min_through = los.time,
                StayType::MaxThrough => max_through = los.time,
            }
        }

        let min = min_arrival.max(min_through);
        let max = max_arrival.min(max_through);
        if min > max {
            return Err(ValidationError::new(format!(
                "min stay must be ≤ max stay, got {min} and {max}"
            )));
        }

        Ok(())
    }

    fn validate_booking_rule_overlaps(
        &self,
        booking_rules: &[BookingRule],
    ) -> Result<(), ValidationError> {
        if self.config.room_type_booking_rules {
            for group in group_by(booking_rules, |rule| rule.code.clone()).values() {
                rules::validate_overlaps(group, OverlapPolicy::HalfOpen)?;
            }
        } else if self.config.generic_booking_rules {
            rules::validate_overlaps(booking_rules, OverlapPolicy::HalfOpen)?;
        }
        Ok(())
    }

    // Rates

    fn validate_rates(&self, rates: &[Rate], plan_scope: &PlanScope) -> Result<(), ValidationError> {
        // The static rate leads, dated rates follow.
        let Some(first) = rates.first() else {
            return Err(ValidationError::missing_element("static Rate"));
        };
        Self::validate_static_rate(first)?;
        self.validate_date_depending_rates(&rates[1..], plan_scope)
    }

    fn validate_static_rate(rate: &Rate) -> Result<(), ValidationError> {
        if rate.rate_time_unit.is_some_and(|unit| unit != TimeUnit::Day) {
            return Err(ValidationError::new(
                "invalid value for attribute RateTimeUnit",
            ));
        }

        match rate.base_by_guest_amts.as_slice() {
            [] => return Err(ValidationError::missing_element("BaseByGuestAmt")),
            [base] => {
                let shape = [
                    FieldRule::forbidden("NumberOfGuests", FieldKind::Attribute),
                    FieldRule::forbidden("AgeQualifyingCode", FieldKind::Attribute),
                    FieldRule::forbidden("AmountAfterTax", FieldKind::Attribute),
                ];
                let present = [
                    base.number_of_guests.is_some(),
                    base.age_qualifying_code.is_some(),
                    base.amount_after_tax.is_some(),
                ];
                super::policy::check_table(&shape, &present, &CapabilitySet::new())?;
            }
            _ => {
                return Err(ValidationError::new(
                    "static rates can contain only one element BaseByGuestAmt",
                ))
            }
        }

        if rate.meals_included.is_none() {
            return Err(ValidationError::missing_element("MealsIncluded"));
        }

        let shape = [
            FieldRule::forbidden("InvTypeCode", FieldKind::Attribute),
            FieldRule::forbidden("Start", FieldKind::Attribute),
            FieldRule::forbidden("End", FieldKind::Attribute),
            FieldRule::forbidden("AdditionalGuestAmounts", FieldKind::Element),
        ];
        let present = [
            !rate.inv_type_code.is_empty(),
            rate.start.is_some(),
            rate.end.is_some(),
            !rate.additional_guest_amounts.is_empty(),
        ];
        super::policy::check_table(&shape, &present, &CapabilitySet::new())
    }

    fn validate_date_depending_rates(
        &self,
        rates: &[Rate],
        plan_scope: &PlanScope,
    ) -> Result<(), ValidationError> {
        for rate in rates {
            self.validate_date_depending_rate(rate, plan_scope)?;
        }

        for group in group_by(rates, |rate| rate.inv_type_code.clone()).values() {
            rules::validate_overlaps(group, OverlapPolicy::HalfOpen)?;
        }

        Ok(())
    }

    fn validate_date_depending_rate(
        &self,
        rate: &Rate,
        plan_scope: &PlanScope,
    ) -> Result<(), ValidationError> {
        if rules::is_blank(&rate.inv_type_code) {
            return Err(ValidationError::missing_attribute("InvTypeCode"));
        }

        let room_type = self
            .config
            .room_type_mapping
            .get(&rate.inv_type_code)
            .copied()
            .ok_or_else(|| {
                ValidationError::new(format!("inv type code not found {}", rate.inv_type_code))
            })?;

        let (Some(start), Some(end)) = (rate.start, rate.end) else {
            if rate.start.is_none() {
                return Err(ValidationError::missing_attribute("Start"));
            }
            return Err(ValidationError::missing_attribute("End"));
        };
        if start > end {
            return Err(ValidationError::new("start must be ≤ end"));
        }

        Self::validate_base_by_guest_amts(&rate.base_by_guest_amts, room_type, plan_scope)?;
        Self::validate_additional_guest_amounts(&rate.additional_guest_amounts, plan_scope)?;

        let shape = [
            FieldRule::forbidden("RateTimeUnit", FieldKind::Attribute),
            FieldRule::forbidden("UnitMultiplier", FieldKind::Attribute),
            FieldRule::forbidden("MealsIncluded", FieldKind::Element),
        ];
        let present = [
            rate.rate_time_unit.is_some(),
            rate.unit_multiplier > 0,
            rate.meals_included.is_some(),
        ];
        super::policy::check_table(&shape, &present, &CapabilitySet::new())
    }

    fn validate_base_by_guest_amts(
        amounts: &[BaseByGuestAmt],
        room_type: RoomTypeOccupancy,
        plan_scope: &PlanScope,
    ) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        let mut std_occupancy_seen = false;

        for amount in amounts {
            Self::validate_base_by_guest_amt(amount)?;

            // Presence checked above.
            let number_of_guests = amount.number_of_guests.unwrap_or_default();
            if !seen.insert(number_of_guests) {
                return Err(ValidationError::new(format!(
                    "duplicate element BaseByGuestAmt with attribute NumberOfGuests {number_of_guests}"
                )));
            }

            if number_of_guests == room_type.std {
                std_occupancy_seen = true;
            }
        }

        let std_occupancy_required = plan_scope.mode == Some(RatePlanNotifType::New);
        if std_occupancy_required && !std_occupancy_seen {
            return Err(ValidationError::new(format!(
                "missing element BaseByGuestAmt with attribute NumberOfGuests equal to the standard occupancy {}",
                room_type.std
            )));
        }

        Ok(())
    }

    fn validate_base_by_guest_amt(amount: &BaseByGuestAmt) -> Result<(), ValidationError> {
        if amount.number_of_guests.is_none() {
            return Err(ValidationError::missing_attribute("NumberOfGuests"));
        }
        if amount.age_qualifying_code.is_none() {
            return Err(ValidationError::missing_attribute("AgeQualifyingCode"));
        }
        if amount.amount_after_tax.is_none() {
            return Err(ValidationError::missing_attribute("AmountAfterTax"));
        }
        if amount.charge_type.is_some() {
            return Err(ValidationError::unexpected_attribute("Type"));
        }
        Ok(())
    }

    fn validate_additional_guest_amounts(
        amounts: &[AdditionalGuestAmount],
        plan_scope: &PlanScope,
    ) -> Result<(), ValidationError> {
        let adults: Vec<&AdditionalGuestAmount> =
            amounts.iter().filter(|a| a.is_adult()).collect();
        match adults.as_slice() {
            [] => {}
            [adult] => {
                if adult.amount.is_none() {
                    return Err(ValidationError::missing_attribute("Amount"));
                }
            }
            _ => {
                return Err(ValidationError::new(
                    "duplicate element AdditionalGuestAmount with attribute AgeQualifyingCode = 10",
                ))
            }
        }

        let children: Vec<&AdditionalGuestAmount> =
            amounts.iter().filter(|a| a.is_child()).collect();
        let Some(child_occupancy) = plan_scope.child else {
            if children.is_empty() {
                return Ok(());
            }
            return Err(ValidationError::new("children not allowed"));
        };

        for child in children {
            if child.min_age.is_none() && child.max_age.is_none() {
                return Err(ValidationError::missing_attribute("MinAge"));
            }

            if let (Some(min_age), Some(max_age)) = (child.min_age, child.max_age) {
                if min_age >= max_age {
                    return Err(ValidationError::new(
                        "attribute MinAge must be < attribute MaxAge",
                    ));
                }
            }

            // The child's age window must sit inside the window the plan
            // declares: at or above the plan's child minimum age, below the
            // adult minimum age.
            if let (Some(floor), Some(min_age)) = (child_occupancy.min_age, child.min_age) {
                if min_age < floor {
                    return Err(ValidationError::new(format!(
                        "child min age must be ≥ rate plan child min age, got {min_age} and {floor}"
                    )));
                }
            }
            if let (Some(adult_min_age), Some(max_age)) = (plan_scope.adult.min_age, child.max_age)
            {
                if max_age > adult_min_age {
                    return Err(ValidationError::new(format!(
                        "child max age must be < rate plan adult min age, got {max_age} and {adult_min_age}"
                    )));
                }
            }

            if child.amount.is_none() {
                return Err(ValidationError::missing_attribute("Amount"));
            }
        }

        Ok(())
    }

    // Supplements

    fn validate_supplements(
        &self,
        supplements: &[Supplement],
        scope: &mut MessageScope,
    ) -> Result<(), ValidationError> {
        if !self.config.supplements && !supplements.is_empty() {
            return Err(ValidationError::new("supplements not supported"));
        }

        for supplement in supplements.iter().filter(|s| s.is_static()) {
            Self::validate_static_supplement(supplement)?;
            scope.supplement_codes.insert(supplement.inv_code.clone());
        }

        let date_depending: Vec<Supplement> = supplements
            .iter()
            .filter(|s| s.is_date_depending())
            .cloned()
            .collect();
        self.validate_date_depending_supplements(&date_depending, scope)
    }

    fn validate_static_supplement(supplement: &Supplement) -> Result<(), ValidationError> {
        let shape = [
            FieldRule::required("AddToBasicRateIndicator", FieldKind::Attribute),
            FieldRule::required("MandatoryIndicator", FieldKind::Attribute),
            FieldRule::required("ChargeTypeCode", FieldKind::Attribute),
        ];
        let present = [
            supplement.add_to_basic_rate_indicator.is_some(),
            supplement.mandatory_indicator.is_some(),
            supplement.charge_type_code.is_some(),
        ];
        super::policy::check_table(&shape, &present, &CapabilitySet::new())?;

        if let Some(prerequisite) = &supplement.prerequisite_inventory {
            match prerequisite.inv_type {
                PrerequisiteInvType::DaysOfWeek => {
                    if !DOW_PATTERN_RE.is_match(&prerequisite.inv_code) {
                        return Err(ValidationError::new(
                            "invalid value for attribute InvCode with attribute InvType = HOTELWIRE_DOW",
                        ));
                    }
                }
                PrerequisiteInvType::RoomType => {
                    return Err(ValidationError::new(
                        "invalid value for attribute InvType ROOMTYPE",
                    ));
                }
            }
        }

        if let Some(descriptions) = &supplement.descriptions {
            Self::validate_descriptions(descriptions)?;
        }

        let tail_shape = [
            FieldRule::forbidden("Amount", FieldKind::Attribute),
            FieldRule::forbidden("Start", FieldKind::Attribute),
            FieldRule::forbidden("End", FieldKind::Attribute),
        ];
        let tail_present = [
            supplement.amount.is_some(),
            supplement.start.is_some(),
            supplement.end.is_some(),
        ];
        super::policy::check_table(&tail_shape, &tail_present, &CapabilitySet::new())
    }

    fn validate_date_depending_supplements(
        &self,
        supplements: &[Supplement],
        scope: &MessageScope,
    ) -> Result<(), ValidationError> {
        for supplement in supplements {
            self.validate_date_depending_supplement(supplement, scope)?;
        }

        // Spans of the same supplement must not overlap, except across
        // different room type prerequisites.
        let key_of = |s: &Supplement| {
            let room_type = s
                .prerequisite_inventory
                .as_ref()
                .filter(|p| p.inv_type == PrerequisiteInvType::RoomType)
                .map(|p| p.inv_code.clone())
                .unwrap_or_default();
            (s.inv_code.clone(), room_type)
        };
        for group in group_by(supplements, key_of).values() {
            rules::validate_overlaps(group, OverlapPolicy::HalfOpen)?;
        }

        Ok(())
    }

    fn validate_date_depending_supplement(
        &self,
        supplement: &Supplement,
        scope: &MessageScope,
    ) -> Result<(), ValidationError> {
        if rules::is_blank(&supplement.inv_code) {
            return Err(ValidationError::missing_attribute("InvCode"));
        }

        if !scope.supplement_codes.contains(&supplement.inv_code) {
            return Err(ValidationError::new(format!(
                "inv code not found {}",
                supplement.inv_code
            )));
        }

        let (Some(start), Some(end)) = (supplement.start, supplement.end) else {
            if supplement.start.is_none() {
                return Err(ValidationError::missing_attribute("Start"));
            }
            return Err(ValidationError::missing_attribute("End"));
        };
        if start > end {
            return Err(ValidationError::new("start must be ≤ end"));
        }

        if let Some(prerequisite) = &supplement.prerequisite_inventory {
            match prerequisite.inv_type {
                PrerequisiteInvType::RoomType => {
                    if !self
                        .config
                        .room_type_mapping
                        .contains_key(&prerequisite.inv_code)
                    {
                        return Err(ValidationError::new(format!(
                            "inv code not found {}",
                            prerequisite.inv_code
                        )));
                    }
                }
                PrerequisiteInvType::DaysOfWeek => {
                    return Err(ValidationError::new(
                        "invalid value for attribute InvType HOTELWIRE_DOW",
                    ));
                }
            }
        }

        let shape = [
            FieldRule::forbidden("AddToBasicRateIndicator", FieldKind::Attribute),
            FieldRule::forbidden("MandatoryIndicator", FieldKind::Attribute),
            FieldRule::forbidden("ChargeTypeCode", FieldKind::Attribute),
        ];
        let present = [
            supplement.add_to_basic_rate_indicator.is_some(),
            supplement.mandatory_indicator.is_some(),
            supplement.charge_type_code.is_some(),
        ];
        super::policy::check_table(&shape, &present, &CapabilitySet::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AgeQualifyingCode, Discount, Guest, MealPlan, MealsIncluded, PrerequisiteInventory,
        RatePlans, UniqueId, UniqueIdKind,
    };
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
    }

    fn full_config() -> RatePlansValidatorConfig {
        let caps = CapabilitySet::from_tags([
            caps::RATE_PLANS_ACCEPT_ARRIVAL_DOW,
            caps::RATE_PLANS_ACCEPT_DEPARTURE_DOW,
            caps::RATE_PLANS_ACCEPT_BOOKING_RULE,
            caps::RATE_PLANS_ACCEPT_SUPPLEMENTS,
            caps::RATE_PLANS_ACCEPT_FREE_NIGHTS_OFFERS,
            caps::RATE_PLANS_ACCEPT_FAMILY_OFFERS,
            caps::RATE_PLANS_ACCEPT_OVERLAY,
            caps::RATE_PLANS_ACCEPT_RATE_PLAN_JOIN,
            caps::RATE_PLANS_ACCEPT_OFFER_RULE_BOOKING_OFFSET,
            caps::RATE_PLANS_ACCEPT_OFFER_RULE_DOW_LOS,
        ]);
        RatePlansValidatorConfig::from_capabilities(&caps).with_room_type_mapping(
            [(
                "DZ".to_owned(),
                RoomTypeOccupancy {
                    min: 1,
                    std: 2,
                    max: 4,
                },
            )]
            .into_iter()
            .collect(),
        )
    }

    fn adult_occupancy() -> Occupancy {
        Occupancy {
            age_qualifying_code: Some(AgeQualifyingCode::Adult),
            min_age: Some(18),
            ..Occupancy::default()
        }
    }

    fn static_rate() -> Rate {
        Rate {
            base_by_guest_amts: vec![BaseByGuestAmt::default()],
            meals_included: Some(MealsIncluded {
                meal_plan_indicator: true,
                meal_plan_codes: MealPlan::HalfBoard,
            }),
            ..Rate::default()
        }
    }

    fn dated_rate(start: u32, end: u32) -> Rate {
        Rate {
            inv_type_code: "DZ".into(),
            start: Some(date(start)),
            end: Some(date(end)),
            base_by_guest_amts: vec![BaseByGuestAmt {
                number_of_guests: Some(2),
                age_qualifying_code: Some(AgeQualifyingCode::Adult),
                amount_after_tax: Some("120.00".into()),
                charge_type: None,
            }],
            ..Rate::default()
        }
    }

    fn master_plan() -> RatePlan {
        RatePlan {
            rate_plan_notif_type: Some(RatePlanNotifType::New),
            currency_code: "EUR".into(),
            rate_plan_code: "standard".into(),
            offers: vec![Offer {
                offer_rule: Some(OfferRule {
                    occupancies: vec![adult_occupancy()],
                    ..OfferRule::default()
                }),
                ..Offer::default()
            }],
            rates: vec![static_rate(), dated_rate(1, 10)],
            ..RatePlan::default()
        }
    }

    fn request(plans: Vec<RatePlan>) -> RatePlansRequest {
        RatePlansRequest {
            unique_id: None,
            rate_plans: RatePlans {
                hotel_code: "123".into(),
                hotel_name: "Frangart Inn".into(),
                rate_plans: plans,
            },
        }
    }

    fn validator() -> RatePlansValidator {
        RatePlansValidator::new(full_config())
    }

    #[test]
    fn test_valid_new_master_passes() {
        assert!(validator().validate(&request(vec![master_plan()])).is_ok());
    }

    #[test]
    fn test_missing_currency_code() {
        let mut plan = master_plan();
        plan.currency_code = String::new();
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(err.message(), "missing required attribute CurrencyCode");
    }

    #[test]
    fn test_join_needs_capability() {
        let mut config = full_config();
        config.rate_plan_join = false;
        let mut plan = master_plan();
        plan.rate_plan_id = "other".into();
        plan.rate_plan_qualifier = Some(false);
        let err = RatePlansValidator::new(config)
            .validate(&request(vec![plan]))
            .unwrap_err();
        assert_eq!(err.message(), "rate plan join not supported");
    }

    #[test]
    fn test_new_master_needs_an_offer_rule() {
        let mut plan = master_plan();
        plan.offers.clear();
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(err.message(), "missing required element OfferRule");
    }

    #[test]
    fn test_offer_rule_needs_adult_occupancy() {
        let mut plan = master_plan();
        plan.offers[0].offer_rule.as_mut().unwrap().occupancies.clear();
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(
            err.message(),
            "missing required element Occupancy with attribute AgeQualifyingCode = 10"
        );
    }

    #[test]
    fn test_occupancy_upper_bound() {
        let mut plan = master_plan();
        plan.offers[0].offer_rule.as_mut().unwrap().occupancies[0].max_occupancy = Some(100);
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(err.message(), "max occupancy must be ≤ 99");
    }

    #[test]
    fn test_free_night_discount_pattern_must_match_derivation() {
        let mut plan = master_plan();
        plan.offers.push(Offer {
            discount: Some(Discount {
                percent: 100,
                nights_required: 5,
                nights_discounted: 2,
                discount_pattern: "00011".into(),
            }),
            ..Offer::default()
        });
        assert!(validator().validate(&request(vec![plan.clone()])).is_ok());

        plan.offers[1].discount.as_mut().unwrap().discount_pattern = "11000".into();
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(err.message(), "invalid value for attribute DiscountPattern");
    }

    #[test]
    fn test_family_offer_guest_must_be_a_child() {
        let mut plan = master_plan();
        plan.offers.push(Offer {
            discount: Some(Discount {
                percent: 50,
                ..Discount::default()
            }),
            guest: Some(Guest {
                age_qualifying_code: Some(AgeQualifyingCode::Adult),
                max_age: 12,
                ..Guest::default()
            }),
            ..Offer::default()
        });
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(
            err.message(),
            "invalid value for attribute Guest.AgeQualifyingCode"
        );
    }

    #[test]
    fn test_static_rate_must_lead() {
        let mut plan = master_plan();
        plan.rates = vec![dated_rate(1, 10)];
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        // The dated rate in first position fails the static shape.
        assert!(err.message().contains("unexpected attribute found"));
    }

    #[test]
    fn test_dated_rates_of_same_room_type_must_not_overlap() {
        let mut plan = master_plan();
        plan.rates = vec![static_rate(), dated_rate(1, 10), dated_rate(5, 15)];
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert!(err.message().contains("overlaps"));
    }

    #[test]
    fn test_touching_dated_rates_are_adjacent_not_overlapping() {
        let mut plan = master_plan();
        plan.rates = vec![static_rate(), dated_rate(1, 10), dated_rate(10, 15)];
        assert!(validator().validate(&request(vec![plan])).is_ok());
    }

    #[test]
    fn test_new_plan_needs_std_occupancy_price() {
        let mut plan = master_plan();
        plan.rates[1].base_by_guest_amts[0].number_of_guests = Some(3);
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert!(err
            .message()
            .contains("NumberOfGuests equal to the standard occupancy 2"));
    }

    #[test]
    fn test_child_pricing_needs_child_occupancy() {
        let mut plan = master_plan();
        plan.rates[1].additional_guest_amounts = vec![AdditionalGuestAmount {
            age_qualifying_code: Some(AgeQualifyingCode::Child),
            min_age: Some(3),
            max_age: Some(12),
            amount: Some("20.00".into()),
        }];
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(err.message(), "children not allowed");
    }

    #[test]
    fn test_child_age_window_must_sit_below_adult_min_age() {
        let mut plan = master_plan();
        plan.offers[0]
            .offer_rule
            .as_mut()
            .unwrap()
            .occupancies
            .push(Occupancy {
                age_qualifying_code: Some(AgeQualifyingCode::Child),
                min_age: Some(3),
                ..Occupancy::default()
            });
        plan.rates[1].additional_guest_amounts = vec![AdditionalGuestAmount {
            age_qualifying_code: Some(AgeQualifyingCode::Child),
            min_age: Some(3),
            max_age: Some(21),
            amount: Some("20.00".into()),
        }];
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(
            err.message(),
            "child max age must be < rate plan adult min age, got 21 and 18"
        );
    }

    #[test]
    fn test_supplements_need_capability() {
        let mut config = full_config();
        config.supplements = false;
        let mut plan = master_plan();
        plan.supplements = vec![Supplement::default()];
        let err = RatePlansValidator::new(config)
            .validate(&request(vec![plan]))
            .unwrap_err();
        assert_eq!(err.message(), "supplements not supported");
    }

    #[test]
    fn test_static_supplement_defines_the_code_for_dated_entries() {
        let mut plan = master_plan();
        plan.supplements = vec![
            Supplement {
                inv_type: "EXTRA".into(),
                inv_code: "BIKE".into(),
                add_to_basic_rate_indicator: Some(true),
                mandatory_indicator: Some(false),
                charge_type_code: Some(crate::types::ChargeType::PerPerson),
                ..Supplement::default()
            },
            Supplement {
                inv_type: "EXTRA".into(),
                inv_code: "BIKE".into(),
                start: Some(date(1)),
                end: Some(date(10)),
                amount: Some("15.00".into()),
                ..Supplement::default()
            },
        ];
        assert!(validator().validate(&request(vec![plan.clone()])).is_ok());

        plan.supplements[1].inv_code = "SAUNA".into();
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(err.message(), "inv code not found SAUNA");
    }

    #[test]
    fn test_static_supplement_dow_pattern() {
        let mut plan = master_plan();
        plan.supplements = vec![Supplement {
            inv_type: "EXTRA".into(),
            inv_code: "SKIPASS".into(),
            add_to_basic_rate_indicator: Some(true),
            mandatory_indicator: Some(false),
            charge_type_code: Some(crate::types::ChargeType::PerRoom),
            prerequisite_inventory: Some(PrerequisiteInventory {
                inv_type: PrerequisiteInvType::DaysOfWeek,
                inv_code: "0011001".into(),
            }),
            ..Supplement::default()
        }];
        assert!(validator().validate(&request(vec![plan.clone()])).is_ok());

        plan.supplements[0]
            .prerequisite_inventory
            .as_mut()
            .unwrap()
            .inv_code = "001100".into();
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert!(err.message().contains("InvType = HOTELWIRE_DOW"));
    }

    #[test]
    fn test_remove_must_be_bare() {
        let plan = RatePlan {
            rate_plan_notif_type: Some(RatePlanNotifType::Remove),
            currency_code: "EUR".into(),
            rate_plan_code: "standard".into(),
            rates: vec![static_rate()],
            ..RatePlan::default()
        };
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(err.message(), "unexpected element found Rates");
    }

    #[test]
    fn test_overlay_needs_capability() {
        let mut config = full_config();
        config.overlay = false;
        let plan = RatePlan {
            rate_plan_notif_type: Some(RatePlanNotifType::Overlay),
            currency_code: "EUR".into(),
            rate_plan_code: "standard".into(),
            ..RatePlan::default()
        };
        let err = RatePlansValidator::new(config)
            .validate(&request(vec![plan]))
            .unwrap_err();
        assert_eq!(err.message(), "deltas not supported");
        assert_eq!(err.status(), Some(ResendStatus::SendRatePlans));
    }

    #[test]
    fn test_overlay_requires_a_known_plan() {
        let config = full_config().with_rate_plan_mapping(
            [(
                "standard".to_owned(),
                ["family".to_owned()].into_iter().collect::<HashSet<_>>(),
            )]
            .into_iter()
            .collect(),
        );
        let validator = RatePlansValidator::new(config);

        let mut plan = RatePlan {
            rate_plan_notif_type: Some(RatePlanNotifType::Overlay),
            currency_code: "EUR".into(),
            rate_plan_code: "family".into(),
            ..RatePlan::default()
        };
        assert!(validator.validate(&request(vec![plan.clone()])).is_ok());

        plan.rate_plan_code = "unknown".into();
        let err = validator.validate(&request(vec![plan])).unwrap_err();
        assert_eq!(err.message(), "rate plan not found unknown");
    }

    #[test]
    fn test_reset_checks_only_plan_codes() {
        let mut message = request(vec![RatePlan {
            rate_plan_code: "standard".into(),
            ..RatePlan::default()
        }]);
        message.unique_id = Some(UniqueId {
            kind: UniqueIdKind::Reference,
            id: "1".into(),
            instance: Some(crate::types::UniqueIdInstance::CompleteSet),
        });
        assert!(validator().validate(&message).is_ok());
    }

    #[test]
    fn test_booking_rule_dow_gating() {
        let mut config = full_config();
        config.arrival_dow = false;
        let mut plan = master_plan();
        plan.booking_rules = vec![BookingRule {
            start: date(1),
            end: date(10),
            arrival_days_of_week: Some(crate::types::DaysOfWeek::default()),
            ..BookingRule::default()
        }];
        let err = RatePlansValidator::new(config)
            .validate(&request(vec![plan]))
            .unwrap_err();
        assert_eq!(err.message(), "arrival days of week not supported");
    }

    #[test]
    fn test_booking_rule_stay_bounds() {
        use crate::types::LengthOfStay;
        let mut plan = master_plan();
        plan.booking_rules = vec![BookingRule {
            start: date(1),
            end: date(10),
            lengths_of_stay: vec![
                LengthOfStay {
                    time: 7,
                    time_unit: TimeUnit::Day,
                    min_max_message_type: StayType::MinArrival,
                },
                LengthOfStay {
                    time: 3,
                    time_unit: TimeUnit::Day,
                    min_max_message_type: StayType::MaxArrival,
                },
            ],
            ..BookingRule::default()
        }];
        let err = validator().validate(&request(vec![plan])).unwrap_err();
        assert_eq!(err.message(), "min stay must be ≤ max stay, got 7 and 3");
    }
}
