//! Room inventory message validation.

use super::rules::{self, group_by};
use super::{ValidationError, Validator};
use crate::protocol::{caps, CapabilitySet};
use crate::types::{GuestRoom, ImageItem, InfoCode, InventoryRequest, TypeRoom};

/// OTA room classification codes run 1..=83.
const ROOM_CLASSIFICATION_RANGE: std::ops::RangeInclusive<u32> = 1..=83;
/// OTA room amenity codes run 1..=293.
const AMENITY_RANGE: std::ops::RangeInclusive<u32> = 1..=293;
/// OTA picture category codes run 1..=23.
const PICTURE_CATEGORY_RANGE: std::ops::RangeInclusive<u32> = 1..=23;

/// Which classification code each room type requires.
fn required_classification(room_type: u32) -> Option<u32> {
    match room_type {
        1 | 9 => Some(42),     // rooms, resting places
        2..=5 => Some(13),     // apartments through holiday homes
        6..=8 => Some(5),      // camping grounds and pitches
        _ => None,
    }
}

/// Configuration of the inventory validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryValidatorConfig {
    /// Individual rooms may follow the category heading.
    pub rooms: bool,
    /// Child occupancy values are accepted.
    pub occupancy_children: bool,
}

impl InventoryValidatorConfig {
    /// Derive the switches from a negotiated capability set.
    pub fn from_capabilities(capabilities: &CapabilitySet) -> Self {
        Self {
            rooms: capabilities.enabled(caps::INVENTORY_USE_ROOMS),
            occupancy_children: capabilities.enabled(caps::INVENTORY_OCCUPANCY_CHILDREN),
        }
    }
}

/// Validates room inventory notifications.
#[derive(Debug, Clone, Default)]
pub struct InventoryValidator {
    config: InventoryValidatorConfig,
}

impl InventoryValidator {
    /// Build from an explicit configuration.
    pub fn new(config: InventoryValidatorConfig) -> Self {
        Self { config }
    }
}

impl Validator for InventoryValidator {
    type Message = InventoryRequest;

    fn validate(&self, message: &InventoryRequest) -> Result<(), ValidationError> {
        rules::validate_hotel_code(&message.hotel_descriptive_content.hotel_code)?;
        self.validate_guest_rooms(&message.hotel_descriptive_content.guest_rooms)
    }
}

impl InventoryValidator {
    fn validate_guest_rooms(&self, guest_rooms: &[GuestRoom]) -> Result<(), ValidationError> {
        for group in group_by(guest_rooms, |room| room.code.clone()).values() {
            self.validate_category(group)?;
        }
        Ok(())
    }

    /// The first room of a category is the full definition; the rest are
    /// individual rooms identified only by `RoomID`.
    fn validate_category(&self, rooms: &[&GuestRoom]) -> Result<(), ValidationError> {
        let head = rooms[0];
        if rules::is_blank(&head.code) {
            return Err(ValidationError::missing_attribute("Code"));
        }

        self.validate_occupancies(head)?;

        let type_room = head
            .type_room
            .as_ref()
            .ok_or_else(|| ValidationError::missing_element("TypeRoom"))?;
        Self::validate_type_room(type_room)?;

        if let Some(amenities) = &head.amenities {
            for amenity in amenities {
                if !AMENITY_RANGE.contains(&amenity.room_amenity_code) {
                    return Err(ValidationError::new(format!(
                        "invalid value for attribute RoomAmenityCode {}",
                        amenity.room_amenity_code
                    )));
                }
            }
        }

        self.validate_multimedia_descriptions(head)?;
        self.validate_tail_rooms(&rooms[1..])?;

        Ok(())
    }

    fn validate_occupancies(&self, room: &GuestRoom) -> Result<(), ValidationError> {
        let min = room.min_occupancy;
        let std = room.type_room.as_ref().map_or(0, |t| t.standard_occupancy);
        let max = room.max_occupancy;
        let max_child = room.max_child_occupancy;

        if !self.config.occupancy_children && max_child > 0 {
            return Err(ValidationError::new("child occupancy not supported"));
        }

        if max_child > max {
            return Err(ValidationError::new(
                "child occupancy must be ≤ max occupancy",
            ));
        }

        if std < min {
            return Err(ValidationError::new(
                "standard occupancy must be ≥ min occupancy",
            ));
        }

        if max < std {
            return Err(ValidationError::new(
                "max occupancy must be ≥ standard occupancy",
            ));
        }

        Ok(())
    }

    fn validate_type_room(type_room: &TypeRoom) -> Result<(), ValidationError> {
        if !ROOM_CLASSIFICATION_RANGE.contains(&type_room.room_classification_code) {
            return Err(ValidationError::new(format!(
                "invalid value for attribute RoomClassificationCode {}",
                type_room.room_classification_code
            )));
        }

        if type_room.room_type > 0 {
            let required = required_classification(type_room.room_type).ok_or_else(|| {
                ValidationError::new(format!(
                    "invalid value for attribute RoomType {}",
                    type_room.room_type
                ))
            })?;
            if type_room.room_classification_code != required {
                return Err(ValidationError::new(format!(
                    "invalid value for attribute RoomClassificationCode {}",
                    type_room.room_classification_code
                )));
            }
        }

        Ok(())
    }

    fn validate_multimedia_descriptions(&self, room: &GuestRoom) -> Result<(), ValidationError> {
        if room.texts(InfoCode::LongName).map_or(true, <[_]>::is_empty) {
            return Err(ValidationError::missing_element(
                "MultimediaDescription with attribute InfoCode = 25 (Long name)",
            ));
        }

        for md in &room.multimedia_descriptions {
            match md.info_code {
                InfoCode::LongName | InfoCode::Description => {
                    if let Some(texts) = &md.text_items {
                        rules::validate_language_uniqueness(texts)?;
                    }
                }
                InfoCode::Pictures => {
                    if let Some(images) = &md.image_items {
                        Self::validate_images(images)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn validate_images(images: &[ImageItem]) -> Result<(), ValidationError> {
        for image in images {
            if !PICTURE_CATEGORY_RANGE.contains(&image.category) {
                return Err(ValidationError::new(format!(
                    "invalid value for attribute Category {}",
                    image.category
                )));
            }
            rules::validate_language_uniqueness(&image.descriptions)?;
        }
        Ok(())
    }

    fn validate_tail_rooms(&self, rooms: &[&GuestRoom]) -> Result<(), ValidationError> {
        if !self.config.rooms && !rooms.is_empty() {
            return Err(ValidationError::new("rooms not supported"));
        }

        for room in rooms {
            let has_room_id = room
                .type_room
                .as_ref()
                .is_some_and(|t| !rules::is_blank(&t.room_id));
            if !has_room_id {
                return Err(ValidationError::missing_attribute("RoomID"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Description, HotelDescriptiveContent, MultimediaDescription, TextFormat,
    };

    fn long_name(language: &str) -> MultimediaDescription {
        MultimediaDescription {
            info_code: InfoCode::LongName,
            text_items: Some(vec![Description {
                text_format: TextFormat::PlainText,
                language: language.into(),
                value: "Double room".into(),
            }]),
            image_items: None,
        }
    }

    fn category_room(code: &str) -> GuestRoom {
        GuestRoom {
            code: code.into(),
            min_occupancy: 1,
            max_occupancy: 4,
            type_room: Some(TypeRoom {
                standard_occupancy: 2,
                room_classification_code: 42,
                ..TypeRoom::default()
            }),
            multimedia_descriptions: vec![long_name("en")],
            ..GuestRoom::default()
        }
    }

    fn request(rooms: Vec<GuestRoom>) -> InventoryRequest {
        InventoryRequest {
            version: "1.0".into(),
            hotel_descriptive_content: HotelDescriptiveContent {
                hotel_code: "123".into(),
                hotel_name: "Frangart Inn".into(),
                area_id: 0,
                guest_rooms: rooms,
            },
        }
    }

    fn validator() -> InventoryValidator {
        InventoryValidator::new(InventoryValidatorConfig {
            rooms: false,
            occupancy_children: true,
        })
    }

    #[test]
    fn test_valid_category_passes() {
        assert!(validator().validate(&request(vec![category_room("DZ")])).is_ok());
    }

    #[test]
    fn test_occupancy_ordering_is_enforced() {
        let mut room = category_room("DZ");
        room.min_occupancy = 3;
        let err = validator().validate(&request(vec![room])).unwrap_err();
        assert_eq!(err.message(), "standard occupancy must be ≥ min occupancy");

        let mut room = category_room("DZ");
        room.max_occupancy = 1;
        let err = validator().validate(&request(vec![room])).unwrap_err();
        assert_eq!(err.message(), "max occupancy must be ≥ standard occupancy");
    }

    #[test]
    fn test_child_occupancy_needs_capability() {
        let strict = InventoryValidator::new(InventoryValidatorConfig::default());
        let mut room = category_room("DZ");
        room.max_child_occupancy = 2;
        let err = strict.validate(&request(vec![room])).unwrap_err();
        assert_eq!(err.message(), "child occupancy not supported");
    }

    #[test]
    fn test_child_occupancy_capped_by_max() {
        let mut room = category_room("DZ");
        room.max_child_occupancy = 5;
        let err = validator().validate(&request(vec![room])).unwrap_err();
        assert_eq!(err.message(), "child occupancy must be ≤ max occupancy");
    }

    #[test]
    fn test_room_type_must_pair_with_its_classification() {
        let mut room = category_room("DZ");
        room.type_room.as_mut().unwrap().room_type = 2;
        // Room type 2 (apartments) requires classification 13, not 42.
        let err = validator().validate(&request(vec![room])).unwrap_err();
        assert_eq!(
            err.message(),
            "invalid value for attribute RoomClassificationCode 42"
        );
    }

    #[test]
    fn test_unknown_room_type_is_rejected() {
        let mut room = category_room("DZ");
        room.type_room.as_mut().unwrap().room_type = 77;
        let err = validator().validate(&request(vec![room])).unwrap_err();
        assert_eq!(err.message(), "invalid value for attribute RoomType 77");
    }

    #[test]
    fn test_long_name_is_required() {
        let mut room = category_room("DZ");
        room.multimedia_descriptions.clear();
        let err = validator().validate(&request(vec![room])).unwrap_err();
        assert!(err.message().contains("InfoCode = 25"));
    }

    #[test]
    fn test_duplicate_long_name_language_is_rejected() {
        let mut room = category_room("DZ");
        room.multimedia_descriptions[0]
            .text_items
            .as_mut()
            .unwrap()
            .push(Description {
                text_format: TextFormat::PlainText,
                language: "en".into(),
                value: "Another".into(),
            });
        let err = validator().validate(&request(vec![room])).unwrap_err();
        assert_eq!(
            err.message(),
            "duplicate language found for element Description"
        );
    }

    #[test]
    fn test_tail_rooms_need_rooms_capability() {
        let mut tail = GuestRoom {
            code: "DZ".into(),
            ..GuestRoom::default()
        };
        tail.type_room = Some(TypeRoom {
            room_id: "101".into(),
            ..TypeRoom::default()
        });
        let err = validator()
            .validate(&request(vec![category_room("DZ"), tail]))
            .unwrap_err();
        assert_eq!(err.message(), "rooms not supported");
    }

    #[test]
    fn test_tail_rooms_need_a_room_id() {
        let with_rooms = InventoryValidator::new(InventoryValidatorConfig {
            rooms: true,
            occupancy_children: true,
        });
        let tail = GuestRoom {
            code: "DZ".into(),
            ..GuestRoom::default()
        };
        let err = with_rooms
            .validate(&request(vec![category_room("DZ"), tail]))
            .unwrap_err();
        assert_eq!(err.message(), "missing required attribute RoomID");
    }

    #[test]
    fn test_amenity_code_range() {
        use crate::types::Amenity;
        let mut room = category_room("DZ");
        room.amenities = Some(vec![Amenity {
            room_amenity_code: 294,
        }]);
        let err = validator().validate(&request(vec![room])).unwrap_err();
        assert_eq!(
            err.message(),
            "invalid value for attribute RoomAmenityCode 294"
        );
    }
}
