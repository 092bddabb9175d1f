//! Free-rooms (availability) message validation.

use std::collections::{HashMap, HashSet};

use super::rules::{self, OverlapPolicy};
use super::{ValidationError, Validator};
use crate::protocol::{caps, CapabilitySet};
use crate::types::{CountType, FreeRoomsRequest, Inventory, ResendStatus, UniqueId};

/// Configuration of the free-rooms validator.
///
/// The boolean switches come from the negotiated capability set; the lookup
/// tables are supplied by the embedding application and checked only when
/// present.
#[derive(Debug, Clone, Default)]
pub struct FreeRoomsValidatorConfig {
    /// Counts arrive per individual room.
    pub rooms: bool,
    /// Counts arrive per room category.
    pub categories: bool,
    /// Incremental updates are accepted.
    pub deltas: bool,
    /// Out-of-order counts are accepted.
    pub out_of_order: bool,
    /// Out-of-market counts are accepted.
    pub out_of_market: bool,
    /// Closing-season spans are accepted.
    pub closing_seasons: bool,
    /// A booking threshold may accompany bookable counts.
    pub booking_threshold: bool,
    /// Known rooms per category; unknown room codes are rejected when set.
    pub room_mapping: Option<HashMap<String, HashSet<String>>>,
    /// Known categories; unknown category codes are rejected when set.
    pub category_mapping: Option<HashSet<String>>,
}

impl FreeRoomsValidatorConfig {
    /// Derive the switches from a negotiated capability set. The 2018-10
    /// tables advertise the legacy tag spellings, so both are recognized.
    pub fn from_capabilities(capabilities: &CapabilitySet) -> Self {
        Self {
            rooms: capabilities.enabled(caps::FREE_ROOMS_ACCEPT_ROOMS)
                || capabilities.enabled(caps::LEGACY_FREE_ROOMS_ACCEPT_ROOMS),
            categories: capabilities.enabled(caps::FREE_ROOMS_ACCEPT_CATEGORIES)
                || capabilities.enabled(caps::LEGACY_FREE_ROOMS_ACCEPT_CATEGORIES),
            deltas: capabilities.enabled(caps::FREE_ROOMS_ACCEPT_DELTAS)
                || capabilities.enabled(caps::LEGACY_FREE_ROOMS_ACCEPT_DELTAS),
            out_of_order: capabilities.enabled(caps::FREE_ROOMS_ACCEPT_OUT_OF_ORDER),
            out_of_market: capabilities.enabled(caps::FREE_ROOMS_ACCEPT_OUT_OF_MARKET),
            closing_seasons: capabilities.enabled(caps::FREE_ROOMS_ACCEPT_CLOSING_SEASONS),
            booking_threshold: capabilities.enabled(caps::FREE_ROOMS_ACCEPT_BOOKING_THRESHOLD),
            room_mapping: None,
            category_mapping: None,
        }
    }

    /// Attach the known-rooms table.
    pub fn with_room_mapping(mut self, mapping: HashMap<String, HashSet<String>>) -> Self {
        self.room_mapping = Some(mapping);
        self
    }

    /// Attach the known-categories table.
    pub fn with_category_mapping(mut self, mapping: HashSet<String>) -> Self {
        self.category_mapping = Some(mapping);
        self
    }
}

/// Validates free-rooms notifications.
#[derive(Debug, Clone, Default)]
pub struct FreeRoomsValidator {
    config: FreeRoomsValidatorConfig,
}

impl FreeRoomsValidator {
    /// Build from an explicit configuration.
    pub fn new(config: FreeRoomsValidatorConfig) -> Self {
        Self { config }
    }
}

impl Validator for FreeRoomsValidator {
    type Message = FreeRoomsRequest;

    fn validate(&self, message: &FreeRoomsRequest) -> Result<(), ValidationError> {
        rules::validate_hotel_code(&message.inventories.hotel_code)?;
        self.validate_unique_id(message.unique_id.as_ref())?;

        // A reset carries no payload beyond the marker.
        if message.inventories.is_reset() {
            return Ok(());
        }

        self.validate_inventories(&message.inventories.inventories)
    }
}

impl FreeRoomsValidator {
    fn validate_unique_id(&self, unique_id: Option<&UniqueId>) -> Result<(), ValidationError> {
        if unique_id.is_none() && !self.config.deltas {
            return Err(ValidationError::new("deltas not supported")
                .with_status(ResendStatus::SendFreeRooms));
        }
        Ok(())
    }

    fn validate_inventories(&self, inventories: &[Inventory]) -> Result<(), ValidationError> {
        let availabilities: Vec<&Inventory> = inventories
            .iter()
            .filter(|inv| inv.is_availability())
            .collect();
        self.validate_availabilities(&availabilities)?;

        let closing_seasons: Vec<&Inventory> = inventories
            .iter()
            .filter(|inv| inv.is_closing_season())
            .collect();
        self.validate_closing_seasons(&closing_seasons)?;

        if self.config.closing_seasons {
            self.validate_closing_seasons_against_bookable(&availabilities, &closing_seasons)?;
        }

        Ok(())
    }

    fn validate_availabilities(&self, availabilities: &[&Inventory]) -> Result<(), ValidationError> {
        for availability in availabilities {
            self.validate_availability(availability)?;
        }

        for group in self.group_by_capability(availabilities).values() {
            rules::validate_overlaps(group, OverlapPolicy::ClosedInterval)?;
        }

        Ok(())
    }

    fn validate_availability(&self, availability: &Inventory) -> Result<(), ValidationError> {
        let sac = availability
            .status_application_control
            .as_ref()
            .ok_or_else(|| ValidationError::missing_element("StatusApplicationControl"))?;

        if rules::is_blank(&sac.inv_type_code) {
            return Err(ValidationError::missing_attribute("InvTypeCode"));
        }

        if self.config.rooms {
            if rules::is_blank(&sac.inv_code) {
                return Err(ValidationError::missing_attribute("InvCode"));
            }
            if let Some(mapping) = &self.config.room_mapping {
                let known = mapping
                    .get(&sac.inv_type_code)
                    .is_some_and(|rooms| rooms.contains(&sac.inv_code));
                if !known {
                    return Err(ValidationError::new(format!(
                        "inv code not found {}",
                        sac.inv_code
                    )));
                }
            }
        } else if self.config.categories {
            if let Some(mapping) = &self.config.category_mapping {
                if !mapping.contains(&sac.inv_type_code) {
                    return Err(ValidationError::new(format!(
                        "inv type code not found {}",
                        sac.inv_type_code
                    )));
                }
            }
        }

        self.validate_inv_counts(availability)?;
        self.validate_booking_threshold(availability)
    }

    fn validate_inv_counts(&self, availability: &Inventory) -> Result<(), ValidationError> {
        let Some(counts) = &availability.inv_counts else {
            return Ok(());
        };

        // Per-room counts are binary: one entry, value at most one.
        if self.config.rooms && counts.len() > 1 {
            return Err(ValidationError::new(format!(
                "invalid value for element InvCounts, expected one element InvCount, got {}",
                counts.len()
            )));
        }

        for count in counts {
            if self.config.rooms && count.count > 1 {
                return Err(ValidationError::new(format!(
                    "inv count must be 1, got {}",
                    count.count
                )));
            }

            match count.count_type {
                CountType::Bookable => {}
                CountType::OutOfOrder => {
                    if !self.config.out_of_order {
                        return Err(ValidationError::new("out of order not supported"));
                    }
                }
                CountType::Free => {
                    if !self.config.out_of_market {
                        return Err(ValidationError::new("out of market not supported"));
                    }
                }
            }
        }

        Ok(())
    }

    fn validate_booking_threshold(&self, availability: &Inventory) -> Result<(), ValidationError> {
        let Some(threshold) = availability.booking_threshold else {
            return Ok(());
        };
        if !self.config.booking_threshold {
            return Err(ValidationError::new(
                "room status free but not bookable (booking threshold) not supported",
            ));
        }

        // The threshold cannot exceed what is bookable in the first place.
        let bookable = availability
            .inv_counts
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|count| count.count_type == CountType::Bookable)
            .map_or(0, |count| count.count);
        if threshold > bookable {
            return Err(ValidationError::new(
                "attribute BookingThreshold must be ≤ the bookable count",
            ));
        }
        Ok(())
    }

    fn validate_closing_seasons(
        &self,
        closing_seasons: &[&Inventory],
    ) -> Result<(), ValidationError> {
        if !self.config.closing_seasons && !closing_seasons.is_empty() {
            return Err(ValidationError::new("closing seasons not supported"));
        }

        for closing_season in closing_seasons {
            if closing_season.inv_counts.is_some() {
                return Err(ValidationError::unexpected_element("InvCounts"));
            }
        }

        rules::validate_overlaps(closing_seasons, OverlapPolicy::ClosedInterval)
    }

    fn validate_closing_seasons_against_bookable(
        &self,
        availabilities: &[&Inventory],
        closing_seasons: &[&Inventory],
    ) -> Result<(), ValidationError> {
        let bookable: Vec<&Inventory> = availabilities
            .iter()
            .copied()
            .filter(|inv| {
                inv.inv_counts.as_ref().is_some_and(|counts| {
                    counts
                        .iter()
                        .any(|count| count.count_type == CountType::Bookable)
                })
            })
            .collect();

        for group in self.group_by_capability(&bookable).values() {
            let mut combined: Vec<&Inventory> = group.clone();
            combined.extend_from_slice(closing_seasons);
            if rules::validate_overlaps(&combined, OverlapPolicy::ClosedInterval).is_err() {
                return Err(ValidationError::new(
                    "availabilities overlap closing seasons",
                ));
            }
        }

        Ok(())
    }

    /// Grouping key depends on the negotiated granularity: room code when
    /// per-room counts are active, category code when per-category, a single
    /// group otherwise.
    fn group_by_capability<'a>(
        &self,
        availabilities: &[&'a Inventory],
    ) -> HashMap<String, Vec<&'a Inventory>> {
        let mut groups: HashMap<String, Vec<&'a Inventory>> = HashMap::new();
        for &inv in availabilities {
            let sac = inv.status_application_control.as_ref();
            let key = if self.config.rooms {
                sac.map(|s| s.inv_code.clone()).unwrap_or_default()
            } else if self.config.categories {
                sac.map(|s| s.inv_type_code.clone()).unwrap_or_default()
            } else {
                String::new()
            };
            groups.entry(key).or_default().push(inv);
        }
        groups
    }
}
