//! Capability tags and negotiated capability sets.

use std::collections::HashSet;

/// Well-known capability tags.
///
/// A capability names one optional behavior of one action. Tags are opaque
/// strings on the wire; uniqueness is only meaningful within an action's
/// capability list.
pub mod caps {
    /// Free-rooms counts may be sent per room instead of per category.
    pub const FREE_ROOMS_ACCEPT_ROOMS: &str = "OTA_HotelInvCountNotif_accept_rooms";
    /// Free-rooms counts may be sent per room category.
    pub const FREE_ROOMS_ACCEPT_CATEGORIES: &str = "OTA_HotelInvCountNotif_accept_categories";
    /// Incremental (delta) free-rooms updates are accepted.
    pub const FREE_ROOMS_ACCEPT_DELTAS: &str = "OTA_HotelInvCountNotif_accept_deltas";
    /// Out-of-order counts are accepted.
    pub const FREE_ROOMS_ACCEPT_OUT_OF_ORDER: &str = "OTA_HotelInvCountNotif_accept_out_of_order";
    /// Out-of-market (free but unsellable) counts are accepted.
    pub const FREE_ROOMS_ACCEPT_OUT_OF_MARKET: &str = "OTA_HotelInvCountNotif_accept_out_of_market";
    /// Closing-season spans are accepted.
    pub const FREE_ROOMS_ACCEPT_CLOSING_SEASONS: &str =
        "OTA_HotelInvCountNotif_accept_closing_seasons";
    /// A booking threshold may accompany free counts.
    pub const FREE_ROOMS_ACCEPT_BOOKING_THRESHOLD: &str =
        "OTA_HotelAvailNotif_accept_BookingThreshold";

    /// 2018-10 spelling of [`FREE_ROOMS_ACCEPT_ROOMS`].
    pub const LEGACY_FREE_ROOMS_ACCEPT_ROOMS: &str = "OTA_HotelAvailNotif_accept_rooms";
    /// 2018-10 spelling of [`FREE_ROOMS_ACCEPT_CATEGORIES`].
    pub const LEGACY_FREE_ROOMS_ACCEPT_CATEGORIES: &str = "OTA_HotelAvailNotif_accept_categories";
    /// 2018-10 spelling of [`FREE_ROOMS_ACCEPT_DELTAS`].
    pub const LEGACY_FREE_ROOMS_ACCEPT_DELTAS: &str = "OTA_HotelAvailNotif_accept_deltas";

    /// Inventory messages may describe individual rooms, not only types.
    pub const INVENTORY_USE_ROOMS: &str = "OTA_HotelDescriptiveContentNotif_Inventory_use_rooms";
    /// Inventory messages may carry child occupancy values.
    pub const INVENTORY_OCCUPANCY_CHILDREN: &str =
        "OTA_HotelDescriptiveContentNotif_Inventory_occupancy_children";

    /// Rate plans may restrict arrival days of week.
    pub const RATE_PLANS_ACCEPT_ARRIVAL_DOW: &str = "OTA_HotelRatePlanNotif_accept_ArrivalDOW";
    /// Rate plans may restrict departure days of week.
    pub const RATE_PLANS_ACCEPT_DEPARTURE_DOW: &str = "OTA_HotelRatePlanNotif_accept_DepartureDOW";
    /// Generic (plan-wide) booking rules are accepted.
    pub const RATE_PLANS_ACCEPT_BOOKING_RULE: &str =
        "OTA_HotelRatePlanNotif_accept_RatePlan_BookingRule";
    /// Per-room-type booking rules are accepted.
    pub const RATE_PLANS_ACCEPT_ROOM_TYPE_BOOKING_RULE: &str =
        "OTA_HotelRatePlanNotif_accept_RatePlan_RoomType_BookingRule";
    /// Generic and room-type booking rules may be mixed in one plan.
    pub const RATE_PLANS_ACCEPT_MIXED_BOOKING_RULE: &str =
        "OTA_HotelRatePlanNotif_accept_RatePlan_mixed_BookingRule";
    /// Supplements are accepted.
    pub const RATE_PLANS_ACCEPT_SUPPLEMENTS: &str = "OTA_HotelRatePlanNotif_accept_Supplements";
    /// Free-night offers are accepted.
    pub const RATE_PLANS_ACCEPT_FREE_NIGHTS_OFFERS: &str =
        "OTA_HotelRatePlanNotif_accept_FreeNightsOffers";
    /// Family offers are accepted.
    pub const RATE_PLANS_ACCEPT_FAMILY_OFFERS: &str = "OTA_HotelRatePlanNotif_accept_FamilyOffers";
    /// Overlay (partial replacement) plan updates are accepted.
    pub const RATE_PLANS_ACCEPT_OVERLAY: &str = "OTA_HotelRatePlanNotif_accept_overlay";
    /// Derived plans joined to a master plan are accepted.
    pub const RATE_PLANS_ACCEPT_RATE_PLAN_JOIN: &str = "OTA_HotelRatePlanNotif_accept_RatePlanJoin";
    /// Offer rules may carry advance-booking offsets.
    pub const RATE_PLANS_ACCEPT_OFFER_RULE_BOOKING_OFFSET: &str =
        "OTA_HotelRatePlanNotif_accept_OfferRule_BookingOffset";
    /// Offer rules may carry day-of-week and length-of-stay restrictions.
    pub const RATE_PLANS_ACCEPT_OFFER_RULE_DOW_LOS: &str =
        "OTA_HotelRatePlanNotif_accept_OfferRule_DOWLOS";
}

/// The set of capability tags negotiated for one action.
///
/// Validator configurations derive their boolean feature switches from
/// membership in this set. The set is immutable once built and safe to share
/// across concurrent requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(HashSet<String>);

impl CapabilitySet {
    /// Empty set: no optional behavior negotiated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from negotiated capability tags.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    /// Whether the given capability was negotiated.
    pub fn enabled(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Number of negotiated capabilities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no capability was negotiated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tags(iter)
    }
}
