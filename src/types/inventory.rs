//! Room inventory (descriptive content) message shapes.

use serde::{Deserialize, Serialize};

use super::{Description, Envelope, Url};

/// A room inventory notification: the full set of guest rooms of one hotel,
/// with occupancy figures, classification, amenities and media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryRequest {
    /// Message schema version.
    pub version: String,
    /// The hotel's rooms.
    pub hotel_descriptive_content: HotelDescriptiveContent,
}

impl InventoryRequest {
    /// Hotel the message applies to.
    pub fn hotel_code(&self) -> &str {
        &self.hotel_descriptive_content.hotel_code
    }
}

/// All descriptive content of one hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotelDescriptiveContent {
    /// Hotel identifier.
    pub hotel_code: String,
    /// Display name of the hotel.
    pub hotel_name: String,
    /// Optional area grouping.
    #[serde(rename = "AreaID", default, skip_serializing_if = "is_zero")]
    pub area_id: u32,
    /// Room definitions. A category heading room first, then the rooms of
    /// that category when per-room granularity was negotiated.
    pub guest_rooms: Vec<GuestRoom>,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// One guest room definition.
///
/// The first room of a category carries the full occupancy and media
/// payload; follow-up rooms of the same category carry only their code and a
/// `RoomID`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuestRoom {
    /// Room category code.
    pub code: String,
    /// Smallest permitted occupancy.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_occupancy: u32,
    /// Largest permitted occupancy.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_occupancy: u32,
    /// Largest number of children within the occupancy.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_child_occupancy: u32,
    /// Previous category code, set while renaming a category.
    #[serde(rename = "ID", default, skip_serializing_if = "String::is_empty")]
    pub old_code: String,
    /// Classification and standard occupancy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_room: Option<TypeRoom>,
    /// Amenity codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<Amenity>>,
    /// Names, descriptions and pictures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub multimedia_descriptions: Vec<MultimediaDescription>,
}

impl GuestRoom {
    /// Minimum number of adults that counts as full occupancy: the standard
    /// occupancy, capped by what remains of the maximum once the child
    /// places are taken out.
    pub fn min_full(&self) -> u32 {
        let std = self.type_room.as_ref().map_or(0, |t| t.standard_occupancy);
        if self.max_child_occupancy == 0 {
            return std;
        }
        std.min(self.max_occupancy.saturating_sub(self.max_child_occupancy))
    }

    /// Texts of the given information type, if present.
    pub fn texts(&self, code: InfoCode) -> Option<&[Description]> {
        self.multimedia_descriptions
            .iter()
            .find(|md| md.info_code == code)
            .and_then(|md| md.text_items.as_deref())
    }

    /// Picture items, if present.
    pub fn pictures(&self) -> Option<&[ImageItem]> {
        self.multimedia_descriptions
            .iter()
            .find(|md| md.info_code == InfoCode::Pictures)
            .and_then(|md| md.image_items.as_deref())
    }
}

/// Classification and size of a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeRoom {
    /// Number of guests the room is made for.
    pub standard_occupancy: u32,
    /// OTA room classification code.
    pub room_classification_code: u32,
    /// OTA room type code, optional refinement of the classification.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub room_type: u32,
    /// Floor area in square meters.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: u32,
    /// Individual room code, only on follow-up rooms of a category.
    #[serde(rename = "RoomID", default, skip_serializing_if = "String::is_empty")]
    pub room_id: String,
}

/// One amenity of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Amenity {
    /// OTA room amenity code.
    pub room_amenity_code: u32,
}

/// What a multimedia block carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InfoCode {
    /// Long-form descriptions.
    Description,
    /// Picture gallery.
    Pictures,
    /// Display names.
    LongName,
}

impl From<InfoCode> for u8 {
    fn from(code: InfoCode) -> Self {
        match code {
            InfoCode::Description => 1,
            InfoCode::Pictures => 23,
            InfoCode::LongName => 25,
        }
    }
}

impl TryFrom<u8> for InfoCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Description),
            23 => Ok(Self::Pictures),
            25 => Ok(Self::LongName),
            other => Err(format!("invalid info code: {other}")),
        }
    }
}

/// One block of texts or pictures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultimediaDescription {
    /// What the block carries.
    pub info_code: InfoCode,
    /// Localized texts, for text blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_items: Option<Vec<Description>>,
    /// Pictures, for picture blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_items: Option<Vec<ImageItem>>,
}

/// One picture with category, source and captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageItem {
    /// OTA picture category code.
    pub category: u32,
    /// Source URL and copyright.
    pub image_format: ImageFormat,
    /// Localized captions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<Description>,
}

/// Source of one picture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageFormat {
    /// Copyright notice, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub copyright_notice: String,
    /// Where the picture lives.
    #[serde(rename = "URL")]
    pub url: Url,
}

/// Acknowledgement for an inventory notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryResponse {
    /// Outcome envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Message schema version.
    pub version: String,
}
