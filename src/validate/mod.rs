//! Capability-driven message validation.
//!
//! Each message family has one validator built from an explicit
//! configuration struct; the boolean switches of a configuration are derived
//! from the negotiated capability set, the lookup tables come from the
//! embedding application. Validators share one contract: fail fast, return
//! the first violated rule, never wrap unrelated errors.
//!
//! Rule evaluation order is deterministic: field checks first, then
//! structural cross-checks, then collection-level checks such as overlap
//! freedom and language uniqueness.

pub mod freerooms;
pub mod guestrequests;
pub mod inventory;
pub mod policy;
pub mod rateplans;
pub mod rules;

use std::fmt;

use crate::types::{EnvelopeMessage, ResendStatus, Severity};

/// A violated business rule.
///
/// Carries everything the response envelope needs: the severity class, an
/// optional resend hint and the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    severity: Severity,
    status: Option<ResendStatus>,
    message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl ValidationError {
    /// A plain application error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::ApplicationError,
            status: None,
            message: message.into(),
        }
    }

    /// An advisory that does not block acceptance.
    pub fn advisory(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Advisory,
            status: None,
            message: message.into(),
        }
    }

    /// A required attribute is absent.
    pub fn missing_attribute(attribute: &str) -> Self {
        Self::new(format!("missing required attribute {attribute}"))
    }

    /// A required element is absent.
    pub fn missing_element(element: &str) -> Self {
        Self::new(format!("missing required element {element}"))
    }

    /// An attribute is present that the active mode forbids.
    pub fn unexpected_attribute(attribute: &str) -> Self {
        Self::new(format!("unexpected attribute found {attribute}"))
    }

    /// An element is present that the active mode forbids.
    pub fn unexpected_element(element: &str) -> Self {
        Self::new(format!("unexpected element found {element}"))
    }

    /// Attach a resend hint.
    pub fn with_status(mut self, status: ResendStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Severity class.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Resend hint, if any.
    pub fn status(&self) -> Option<ResendStatus> {
        self.status
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render into an envelope warning or error.
    pub fn to_envelope_message(&self) -> EnvelopeMessage {
        EnvelopeMessage {
            severity: self.severity,
            status: self.status,
            value: self.message.clone(),
        }
    }
}

/// The single contract every message validator implements.
pub trait Validator {
    /// The message type this validator checks.
    type Message;

    /// Check the message, returning the first violated rule.
    fn validate(&self, message: &Self::Message) -> Result<(), ValidationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_phrasing_matches_the_wire_vocabulary() {
        assert_eq!(
            ValidationError::missing_attribute("HotelCode").message(),
            "missing required attribute HotelCode"
        );
        assert_eq!(
            ValidationError::unexpected_element("InvCounts").message(),
            "unexpected element found InvCounts"
        );
    }

    #[test]
    fn test_status_rides_into_the_envelope() {
        let err = ValidationError::new("deltas not supported")
            .with_status(ResendStatus::SendFreeRooms);
        let message = err.to_envelope_message();
        assert_eq!(message.severity, Severity::ApplicationError);
        assert_eq!(message.status, Some(ResendStatus::SendFreeRooms));
    }
}
