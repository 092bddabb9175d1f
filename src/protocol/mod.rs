//! Capability model and handshake negotiation.
//!
//! The protocol is versioned: each version defines a fixed set of named
//! actions, and each action carries an optional list of fine-grained
//! capabilities a server may or may not support. Client and server agree on
//! a mutually supported subset of {version → action → capability} through a
//! handshake exchange, and that agreement gates every later request.
//!
//! # Negotiation flow
//!
//! ```text
//! Client                                 Server
//!    |                                      |
//!    |--- ping, echo = client document ---->|
//!    |                                      |  intersect with own
//!    |<-- warning, value = intersection ----|  advertisement
//!    |                                      |
//!    |=== requests limited to agreement ===>|
//! ```
//!
//! The intersection keeps a version only if both sides declare it, and for
//! each common action keeps the capability-set intersection. An action both
//! sides support with zero shared optional features stays in the agreement
//! as "present, no capabilities" rather than being dropped.
//!
//! # Wire format
//!
//! Handshake documents travel as JSON under a top-level `versions` array:
//!
//! ```json
//! {"versions":[
//!   {"version":"2020-10","actions":[
//!      {"action":"action_OTA_Ping"},
//!      {"action":"action_OTA_HotelInvCountNotif","supports":["cap_a","cap_b"]}
//!   ]}
//! ]}
//! ```
//!
//! Versions are emitted sorted descending by version string, actions sorted
//! ascending by handshake name, and an action with no capabilities omits the
//! `supports` key entirely.

mod action;
mod capability;
mod handshake;
pub mod registry;

pub use action::ActionId;
pub use capability::{caps, CapabilitySet};
pub use handshake::{ActionCapabilities, HandshakeDocument};
