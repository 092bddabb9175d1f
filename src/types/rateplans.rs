//! Rate plan message shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DateRange, DateRanged, Days, Description, Envelope, UniqueId, Url};

/// A rate plan notification: prices, booking restrictions, supplements and
/// promotional offers for one hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatePlansRequest {
    /// Present on full-state resends; absent on deltas.
    #[serde(rename = "UniqueID", skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<UniqueId>,
    /// The plans themselves.
    pub rate_plans: RatePlans,
}

impl RatePlansRequest {
    /// Hotel the message applies to.
    pub fn hotel_code(&self) -> &str {
        &self.rate_plans.hotel_code
    }
}

/// Container for all plans of one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatePlans {
    /// Hotel identifier.
    pub hotel_code: String,
    /// Display name of the hotel.
    pub hotel_name: String,
    /// Individual plans.
    #[serde(rename = "RatePlan")]
    pub rate_plans: Vec<RatePlan>,
}

/// What a plan entry does to previously sent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatePlanNotifType {
    /// Full definition, replaces the plan entirely.
    New,
    /// Partial update layered over the existing plan.
    Overlay,
    /// Deletes the plan.
    Remove,
}

/// One rate plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatePlan {
    /// What this entry does to previously sent state.
    pub rate_plan_notif_type: Option<RatePlanNotifType>,
    /// Set to 12 (promotional) on offer-bearing plans.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub rate_plan_type: u32,
    /// ISO 4217 currency of all amounts.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency_code: String,
    /// Plan identifier.
    pub rate_plan_code: String,
    /// Master plan this plan derives from, when joined.
    #[serde(rename = "RatePlanID", default, skip_serializing_if = "String::is_empty")]
    pub rate_plan_id: String,
    /// Set when the plan participates in a master/derived join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_plan_qualifier: Option<bool>,
    /// Booking restrictions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub booking_rules: Vec<BookingRule>,
    /// Prices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rates: Vec<Rate>,
    /// Extra bookable services.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supplements: Vec<Supplement>,
    /// Promotional offers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offers: Vec<Offer>,
    /// Localized texts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<RatePlanDescription>,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl RatePlan {
    /// Whether this plan is a master in a master/derived join. A plan with
    /// neither qualifier nor plan id is a plain standalone plan and counts
    /// as its own master.
    pub fn is_master(&self) -> bool {
        match self.rate_plan_qualifier {
            None => self.rate_plan_id.is_empty(),
            Some(qualifier) => qualifier && !self.rate_plan_id.is_empty(),
        }
    }
}

/// Booking restriction over a date span, either plan-wide or scoped to one
/// room type via `code`/`code_context`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookingRule {
    /// First day the rule applies.
    pub start: NaiveDate,
    /// Last day the rule applies, inclusive.
    pub end: NaiveDate,
    /// Room type code the rule is scoped to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    /// Context of [`Self::code`]; only `ROOMTYPE` is defined.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code_context: String,
    /// Length-of-stay bounds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lengths_of_stay: Vec<LengthOfStay>,
    /// Permitted arrival weekdays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_days_of_week: Option<DaysOfWeek>,
    /// Permitted departure weekdays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_days_of_week: Option<DaysOfWeek>,
    /// Open/close marker for derived plans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction_status: Option<RestrictionStatus>,
}

/// Room type scope marker for booking rules.
pub const CODE_CONTEXT_ROOM_TYPE: &str = "ROOMTYPE";

impl BookingRule {
    /// Whether the rule is scoped to a single room type.
    pub fn is_room_type_specific(&self) -> bool {
        !self.code.is_empty() && self.code_context == CODE_CONTEXT_ROOM_TYPE
    }
}

impl DateRanged for BookingRule {
    fn date_range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

/// Which length-of-stay bound a value sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StayType {
    /// Minimum stay counted from arrival.
    #[serde(rename = "SetMinLOS")]
    MinArrival,
    /// Minimum stay spanning the date.
    #[serde(rename = "SetForwardMinStay")]
    MinThrough,
    /// Maximum stay counted from arrival.
    #[serde(rename = "SetMaxLOS")]
    MaxArrival,
    /// Maximum stay spanning the date.
    #[serde(rename = "SetForwardMaxStay")]
    MaxThrough,
}

/// Unit of a length-of-stay value; only days are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar days.
    Day,
}

/// One length-of-stay bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LengthOfStay {
    /// Number of time units.
    pub time: u32,
    /// Unit of [`Self::time`].
    pub time_unit: TimeUnit,
    /// Which bound this sets.
    pub min_max_message_type: StayType,
}

/// Weekday flags; an absent flag means unrestricted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysOfWeek {
    /// Monday.
    #[serde(rename = "Mon", skip_serializing_if = "Option::is_none")]
    pub mon: Option<bool>,
    /// Tuesday.
    #[serde(rename = "Tue", skip_serializing_if = "Option::is_none")]
    pub tue: Option<bool>,
    /// Wednesday.
    #[serde(rename = "Weds", skip_serializing_if = "Option::is_none")]
    pub weds: Option<bool>,
    /// Thursday.
    #[serde(rename = "Thur", skip_serializing_if = "Option::is_none")]
    pub thur: Option<bool>,
    /// Friday.
    #[serde(rename = "Fri", skip_serializing_if = "Option::is_none")]
    pub fri: Option<bool>,
    /// Saturday.
    #[serde(rename = "Sat", skip_serializing_if = "Option::is_none")]
    pub sat: Option<bool>,
    /// Sunday.
    #[serde(rename = "Sun", skip_serializing_if = "Option::is_none")]
    pub sun: Option<bool>,
}

/// Open/close marker carried by derived-plan booking rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestrictionStatus {
    /// Only "Master" is defined.
    pub restriction: String,
    /// "Open" or "Close".
    pub status: String,
}

/// One price entry.
///
/// A master plan carries exactly one static rate (no span, one base amount,
/// meals included); derived and standalone plans carry dated rates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rate {
    /// Unit the price covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_time_unit: Option<TimeUnit>,
    /// Number of units the price covers.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub unit_multiplier: u32,
    /// Room type the rate applies to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub inv_type_code: String,
    /// First day the rate applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// Last day the rate applies, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    /// Base prices per number of guests.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base_by_guest_amts: Vec<BaseByGuestAmt>,
    /// Surcharges and reductions for extra guests.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_guest_amounts: Vec<AdditionalGuestAmount>,
    /// Board included in the price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals_included: Option<MealsIncluded>,
}

impl Rate {
    /// Whether this is the undated single rate of a master plan.
    pub fn is_static_rate(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.base_by_guest_amts.len() == 1
            && self.additional_guest_amounts.is_empty()
            && self.meals_included.is_some()
    }
}

impl DateRanged for Rate {
    fn date_range(&self) -> DateRange {
        match (self.start, self.end) {
            (Some(start), Some(end)) => DateRange::new(start, end),
            _ => DateRange::default(),
        }
    }
}

/// What a charge applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ChargeType {
    /// Per person per unit.
    PerPerson,
    /// Per room per unit.
    PerRoom,
}

impl From<ChargeType> for u8 {
    fn from(kind: ChargeType) -> Self {
        match kind {
            ChargeType::PerPerson => 7,
            ChargeType::PerRoom => 25,
        }
    }
}

impl TryFrom<u8> for ChargeType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            7 => Ok(Self::PerPerson),
            25 => Ok(Self::PerRoom),
            other => Err(format!("invalid charge type: {other}")),
        }
    }
}

/// Whether an amount or occupancy row concerns adults or children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AgeQualifyingCode {
    /// Children.
    Child,
    /// Adults.
    Adult,
}

impl From<AgeQualifyingCode> for u8 {
    fn from(code: AgeQualifyingCode) -> Self {
        match code {
            AgeQualifyingCode::Child => 8,
            AgeQualifyingCode::Adult => 10,
        }
    }
}

impl TryFrom<u8> for AgeQualifyingCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(Self::Child),
            10 => Ok(Self::Adult),
            other => Err(format!("invalid age qualifying code: {other}")),
        }
    }
}

/// Base price for a given number of guests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BaseByGuestAmt {
    /// What the charge applies to.
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<ChargeType>,
    /// Number of guests the amount is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<u32>,
    /// Adult or child pricing row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_qualifying_code: Option<AgeQualifyingCode>,
    /// Decimal amount including tax, as a string to preserve precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_after_tax: Option<String>,
}

/// Surcharge or reduction for guests beyond the base occupancy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalGuestAmount {
    /// Adult or child row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_qualifying_code: Option<AgeQualifyingCode>,
    /// Lower age bound, children only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    /// Upper age bound, children only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    /// Decimal amount, as a string to preserve precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

impl AdditionalGuestAmount {
    /// Whether this row prices extra adults.
    pub fn is_adult(&self) -> bool {
        self.age_qualifying_code == Some(AgeQualifyingCode::Adult)
    }

    /// Whether this row prices extra children.
    pub fn is_child(&self) -> bool {
        self.age_qualifying_code == Some(AgeQualifyingCode::Child)
    }
}

/// OTA meal plan codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MealPlan {
    /// All inclusive.
    AllInclusive,
    /// Bed and breakfast.
    BedAndBreakfast,
    /// Full board.
    FullBoard,
    /// Half board.
    HalfBoard,
    /// Room only.
    RoomOnly,
}

impl From<MealPlan> for u8 {
    fn from(plan: MealPlan) -> Self {
        match plan {
            MealPlan::AllInclusive => 1,
            MealPlan::BedAndBreakfast => 3,
            MealPlan::FullBoard => 10,
            MealPlan::HalfBoard => 12,
            MealPlan::RoomOnly => 14,
        }
    }
}

impl TryFrom<u8> for MealPlan {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::AllInclusive),
            3 => Ok(Self::BedAndBreakfast),
            10 => Ok(Self::FullBoard),
            12 => Ok(Self::HalfBoard),
            14 => Ok(Self::RoomOnly),
            other => Err(format!("invalid meal plan: {other}")),
        }
    }
}

/// Board included in a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MealsIncluded {
    /// Whether any meals are included.
    pub meal_plan_indicator: bool,
    /// Which board.
    pub meal_plan_codes: MealPlan,
}

/// Inventory type a supplement prerequisite refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrerequisiteInvType {
    /// A weekday pattern, `InvCode` is seven `0`/`1` characters Mon..Sun.
    #[serde(rename = "HOTELWIRE_DOW")]
    DaysOfWeek,
    /// A room type code.
    #[serde(rename = "ROOMTYPE")]
    RoomType,
}

/// Restricts a supplement to certain weekdays or room types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrerequisiteInventory {
    /// What the code refers to.
    pub inv_type: PrerequisiteInvType,
    /// The weekday pattern or room type code.
    pub inv_code: String,
}

/// An extra bookable service. A static supplement defines the service
/// itself; date-depending entries price it over spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Supplement {
    /// Always `EXTRA`.
    pub inv_type: String,
    /// Supplement identifier.
    pub inv_code: String,
    /// Whether the supplement is priced into the base rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_to_basic_rate_indicator: Option<bool>,
    /// Whether booking the supplement is mandatory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory_indicator: Option<bool>,
    /// What the charge applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_type_code: Option<ChargeType>,
    /// Weekday or room type restriction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisite_inventory: Option<PrerequisiteInventory>,
    /// Localized texts, static entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<RatePlanDescription>,
    /// First day the price applies, date-depending entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// Last day the price applies, date-depending entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    /// Decimal amount, as a string to preserve precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

impl Supplement {
    /// Whether this entry defines the supplement rather than pricing it.
    pub fn is_static(&self) -> bool {
        self.add_to_basic_rate_indicator == Some(true)
            && self.mandatory_indicator.is_some()
            && self.charge_type_code.is_some()
            && self.start.is_none()
            && self.end.is_none()
            && self.amount.is_none()
    }

    /// Whether this entry prices the supplement over a date span.
    pub fn is_date_depending(&self) -> bool {
        !self.is_static()
    }
}

impl DateRanged for Supplement {
    fn date_range(&self) -> DateRange {
        match (self.start, self.end) {
            (Some(start), Some(end)) => DateRange::new(start, end),
            _ => DateRange::default(),
        }
    }
}

/// A promotional offer attached to a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offer {
    /// Booking restrictions for the offer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_rule: Option<OfferRule>,
    /// The discount granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    /// Guest the discount applies to, family offers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest: Option<Guest>,
}

impl Offer {
    /// Stay N nights, pay fewer.
    pub fn is_free_night_offer(&self) -> bool {
        self.discount
            .as_ref()
            .is_some_and(|d| d.nights_required != 0 && d.nights_discounted != 0)
    }

    /// Discount for a child in a given booking position.
    pub fn is_family_offer(&self) -> bool {
        self.discount.is_some() && self.guest.is_some()
    }
}

/// Booking restrictions of one offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferRule {
    /// Earliest allowed distance between booking and arrival.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_advanced_booking_offset: Option<Days>,
    /// Latest allowed distance between booking and arrival.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_advanced_booking_offset: Option<Days>,
    /// Length-of-stay bounds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lengths_of_stay: Vec<LengthOfStay>,
    /// Permitted arrival weekdays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_days_of_week: Option<DaysOfWeek>,
    /// Permitted departure weekdays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_days_of_week: Option<DaysOfWeek>,
    /// Occupancy bounds per age class.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occupancies: Vec<Occupancy>,
}

/// Occupancy bounds for one age class inside an offer rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Occupancy {
    /// Adult or child row.
    pub age_qualifying_code: Option<AgeQualifyingCode>,
    /// Lower age bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    /// Upper age bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    /// Minimum number of guests of this class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_occupancy: Option<u32>,
    /// Maximum number of guests of this class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_occupancy: Option<u32>,
}

impl Occupancy {
    /// Whether this row bounds adult guests.
    pub fn is_adult(&self) -> bool {
        self.age_qualifying_code == Some(AgeQualifyingCode::Adult)
    }

    /// Whether this row bounds child guests.
    pub fn is_child(&self) -> bool {
        self.age_qualifying_code == Some(AgeQualifyingCode::Child)
    }
}

/// The discount of one offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Discount {
    /// Percentage off.
    pub percent: u32,
    /// Nights that must be booked, free-night offers only.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub nights_required: u32,
    /// Nights granted at discount, free-night offers only.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub nights_discounted: u32,
    /// Redundant night pattern; must equal the canonical derivation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub discount_pattern: String,
}

/// The guest a family offer discounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Guest {
    /// Must be the child code.
    pub age_qualifying_code: Option<AgeQualifyingCode>,
    /// Oldest age the discount applies to.
    pub max_age: u32,
    /// Minimum number of qualifying children.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_count: u32,
    /// First booking position the discount applies to.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub first_qualifying_position: u32,
    /// Last booking position the discount applies to.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_qualifying_position: u32,
}

/// Localized texts of a plan or supplement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatePlanDescription {
    /// Short titles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<Description>,
    /// Introductory texts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intros: Vec<Description>,
    /// Long descriptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<Description>,
    /// Theme codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<String>,
    /// Pictures with captions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryItem>,
}

/// One gallery picture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GalleryItem {
    /// Picture URL.
    pub image: Url,
    /// Localized captions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<Description>,
    /// Copyright notice, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub copyright_notice: String,
    /// Attribution link, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Url>,
}

/// Acknowledgement for a rate plan notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatePlansResponse {
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
    fn test_standalone_plan_is_its_own_master() {
        let plan = RatePlan {
            rate_plan_code: "standard".into(),
            ..RatePlan::default()
        };
        assert!(plan.is_master());
    }

    #[test]
    fn test_joined_master_needs_qualifier_and_id() {
        let plan = RatePlan {
            rate_plan_code: "standard".into(),
            rate_plan_id: "family".into(),
            rate_plan_qualifier: Some(true),
            ..RatePlan::default()
        };
        assert!(plan.is_master());

        let derived = RatePlan {
            rate_plan_code: "family".into(),
            rate_plan_id: "standard".into(),
            rate_plan_qualifier: Some(false),
            ..RatePlan::default()
        };
        assert!(!derived.is_master());
    }

    #[test]
    fn test_static_rate_shape() {
        let rate = Rate {
            base_by_guest_amts: vec![BaseByGuestAmt::default()],
            meals_included: Some(MealsIncluded {
                meal_plan_indicator: true,
                meal_plan_codes: MealPlan::HalfBoard,
            }),
            ..Rate::default()
        };
        assert!(rate.is_static_rate());

        let dated = Rate {
            start: NaiveDate::from_ymd_opt(2026, 1, 1),
            end: NaiveDate::from_ymd_opt(2026, 1, 7),
            ..rate
        };
        assert!(!dated.is_static_rate());
    }

    #[test]
    fn test_offer_classification() {
        let free_night = Offer {
            discount: Some(Discount {
                percent: 100,
                nights_required: 7,
                nights_discounted: 1,
                ..Discount::default()
            }),
            ..Offer::default()
        };
        assert!(free_night.is_free_night_offer());
        assert!(!free_night.is_family_offer());

        let family = Offer {
            discount: Some(Discount {
                percent: 100,
                ..Discount::default()
            }),
            guest: Some(Guest {
                age_qualifying_code: Some(AgeQualifyingCode::Child),
                max_age: 6,
                ..Guest::default()
            }),
            ..Offer::default()
        };
        assert!(family.is_family_offer());
        assert!(!family.is_free_night_offer());
    }
}
