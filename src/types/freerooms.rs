//! Availability (free rooms) message shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DateRange, DateRanged, Envelope, UniqueId};

/// A free-rooms notification: availability counts per room or category,
/// optionally interleaved with closing-season spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FreeRoomsRequest {
    /// Message schema version.
    pub version: String,
    /// Present on full-state resends; absent on deltas.
    #[serde(rename = "UniqueID", skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<UniqueId>,
    /// The counts themselves.
    pub inventories: Inventories,
}

impl FreeRoomsRequest {
    /// Hotel the message applies to.
    pub fn hotel_code(&self) -> &str {
        &self.inventories.hotel_code
    }
}

/// Container for all counts of one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Inventories {
    /// Hotel identifier.
    pub hotel_code: String,
    /// Display name of the hotel.
    pub hotel_name: String,
    /// Individual count entries.
    #[serde(rename = "Inventory")]
    pub inventories: Vec<Inventory>,
}

impl Inventories {
    /// A reset clears all previously sent availability: exactly one entry
    /// with every field empty.
    pub fn is_reset(&self) -> bool {
        self.inventories.len() == 1 && self.inventories[0] == Inventory::default()
    }
}

/// One count entry: a date span plus the counts applying to it, or a
/// closing-season span with no counts at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Inventory {
    /// Span and room/category selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_application_control: Option<StatusApplicationControl>,
    /// Counts for the span. Absent for closing seasons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inv_counts: Option<Vec<InvCount>>,
    /// Bookable count below which remaining rooms are on request only.
    /// Only meaningful when the booking-threshold capability was negotiated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_threshold: Option<u32>,
}

impl Inventory {
    /// Whether this entry carries availability counts.
    pub fn is_availability(&self) -> bool {
        !self.is_closing_season()
    }

    /// Whether this entry marks a closing season (the all-rooms flag set).
    pub fn is_closing_season(&self) -> bool {
        self.status_application_control
            .as_ref()
            .is_some_and(|sac| sac.all_inv_code)
    }
}

impl DateRanged for Inventory {
    fn date_range(&self) -> DateRange {
        self.status_application_control
            .as_ref()
            .map(|sac| DateRange::new(sac.start, sac.end))
            .unwrap_or_default()
    }
}

/// Date span plus the room or category the counts apply to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusApplicationControl {
    /// First day of the span.
    pub start: NaiveDate,
    /// Last day of the span, inclusive.
    pub end: NaiveDate,
    /// Room category code.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub inv_type_code: String,
    /// Individual room code. Only meaningful when per-room counts were
    /// negotiated.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub inv_code: String,
    /// Set on closing-season spans, which apply to every room.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub all_inv_code: bool,
}

/// What a count value counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CountType {
    /// Rooms bookable right now.
    Bookable,
    /// Rooms out of order (unavailable, not sellable).
    OutOfOrder,
    /// Rooms free but held off-market.
    Free,
}

impl From<CountType> for u8 {
    fn from(kind: CountType) -> Self {
        match kind {
            CountType::Bookable => 2,
            CountType::OutOfOrder => 6,
            CountType::Free => 9,
        }
    }
}

impl TryFrom<u8> for CountType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Bookable),
            6 => Ok(Self::OutOfOrder),
            9 => Ok(Self::Free),
            other => Err(format!("invalid count type: {other}")),
        }
    }
}

/// One typed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvCount {
    /// What is being counted.
    pub count_type: CountType,
    /// The count itself, never negative.
    pub count: u32,
}

/// Acknowledgement for a free-rooms notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FreeRoomsResponse {
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
    fn test_reset_is_a_single_empty_entry() {
        let inventories = Inventories {
            hotel_code: "123".into(),
            hotel_name: "Frangart Inn".into(),
            inventories: vec![Inventory::default()],
        };
        assert!(inventories.is_reset());
    }

    #[test]
    fn test_entry_with_counts_is_not_a_reset() {
        let inventories = Inventories {
            hotel_code: "123".into(),
            hotel_name: "Frangart Inn".into(),
            inventories: vec![Inventory {
                status_application_control: None,
                inv_counts: Some(vec![InvCount {
                    count_type: CountType::Bookable,
                    count: 3,
                }]),
                booking_threshold: None,
            }],
        };
        assert!(!inventories.is_reset());
    }

    #[test]
    fn test_closing_season_detection() {
        let entry = Inventory {
            status_application_control: Some(StatusApplicationControl {
                all_inv_code: true,
                ..StatusApplicationControl::default()
            }),
            ..Inventory::default()
        };
        assert!(entry.is_closing_season());
        assert!(!entry.is_availability());
    }
}
