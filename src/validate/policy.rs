//! Per-field presence policies.
//!
//! Every optional sub-structure of a message falls under exactly one policy
//! with respect to the mode and capability set in force. Validators declare
//! their policies as data and evaluate them through [`FieldRule::check`]
//! instead of re-deriving the same conditional chains per message type; the
//! tables below are part of the wire contract, field by field.

use super::ValidationError;
use crate::protocol::CapabilitySet;

/// Whether a name is an attribute or an element, for error phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// XML attribute.
    Attribute,
    /// XML element.
    Element,
}

/// Presence policy of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// The field may never appear while this rule is in force.
    Forbidden,
    /// The field must appear while this rule is in force.
    Required,
    /// The field may appear only when the capability was negotiated.
    Gated {
        /// Capability tag that unlocks the field.
        capability: &'static str,
        /// Message reported when the field appears without it.
        message: &'static str,
    },
}

/// One field together with its policy.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Wire name of the field.
    pub field: &'static str,
    /// Attribute or element, for error phrasing.
    pub kind: FieldKind,
    /// The policy in force.
    pub policy: FieldPolicy,
}

impl FieldRule {
    /// A field the active mode forbids.
    pub const fn forbidden(field: &'static str, kind: FieldKind) -> Self {
        Self {
            field,
            kind,
            policy: FieldPolicy::Forbidden,
        }
    }

    /// A field the active mode requires.
    pub const fn required(field: &'static str, kind: FieldKind) -> Self {
        Self {
            field,
            kind,
            policy: FieldPolicy::Required,
        }
    }

    /// A field unlocked by a capability.
    pub const fn gated(
        field: &'static str,
        kind: FieldKind,
        capability: &'static str,
        message: &'static str,
    ) -> Self {
        Self {
            field,
            kind,
            policy: FieldPolicy::Gated {
                capability,
                message,
            },
        }
    }

    /// Evaluate the rule against the observed presence of the field.
    pub fn check(
        &self,
        present: bool,
        capabilities: &CapabilitySet,
    ) -> Result<(), ValidationError> {
        match self.policy {
            FieldPolicy::Forbidden if present => Err(self.unexpected()),
            FieldPolicy::Required if !present => Err(self.missing()),
            FieldPolicy::Gated {
                capability,
                message,
            } if present && !capabilities.enabled(capability) => {
                Err(ValidationError::new(message))
            }
            _ => Ok(()),
        }
    }

    fn unexpected(&self) -> ValidationError {
        match self.kind {
            FieldKind::Attribute => ValidationError::unexpected_attribute(self.field),
            FieldKind::Element => ValidationError::unexpected_element(self.field),
        }
    }

    fn missing(&self) -> ValidationError {
        match self.kind {
            FieldKind::Attribute => ValidationError::missing_attribute(self.field),
            FieldKind::Element => ValidationError::missing_element(self.field),
        }
    }
}

/// Evaluate a whole table of rules against per-field presence flags.
///
/// `presence` must be parallel to `rules`; the first violated rule wins.
pub fn check_table(
    rules: &[FieldRule],
    presence: &[bool],
    capabilities: &CapabilitySet,
) -> Result<(), ValidationError> {
    debug_assert_eq!(rules.len(), presence.len());
    for (rule, &present) in rules.iter().zip(presence) {
        rule.check(present, capabilities)?;
    }
    Ok(())
}
