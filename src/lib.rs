//! # HotelWire - Multi-Version Hotel Data Exchange Protocol
//!
//! Wire protocol used by property-management systems and distribution
//! channels to exchange hotel inventory, rate and reservation data, with
//! per-version capability negotiation and capability-driven validation.
//!
//! ## Features
//!
//! - **Capability negotiation**: versioned handshake documents with a
//!   deterministic intersection algorithm
//! - **Single-endpoint routing**: all traffic over one multipart POST
//!   endpoint, dispatched by version and action
//! - **Capability-driven validation**: per-message-family validators built
//!   from the negotiated capability set plus application lookup tables
//! - **Pluggable syntax**: codec and schema validation are trait seams; the
//!   crate ships a JSON rendition for tests and the reference binary
//!
//! ## Protocol Overview
//!
//! Each protocol version defines a fixed set of named actions, and each
//! action carries an optional list of fine-grained capabilities. Client and
//! server agree on a mutually supported subset through a handshake ping, and
//! that agreement gates every later request:
//!
//! ```text
//! Client                                      Server
//!    |                                           |
//!    |---- POST action=OTA_Ping:Handshaking --->|
//!    |       echo data = client document         |  intersect with own
//!    |<--- warning: HOTELWIRE_HANDSHAKE ---------|  advertisement
//!    |       value = negotiated agreement        |
//!    |                                           |
//!    |==== requests limited to the agreement ==>|
//! ```
//!
//! ### Request pipeline
//!
//! ```text
//! POST / ── headers ── version ── agreement ── multipart ── action
//!    │                                                        │
//!    │   any failure: 400 "ERROR: <message>"                  │
//!    v                                                        v
//! schema ── decode ── handler ── encode ── schema ── 200 response
//!              │ failures here: 500, empty body, logged │
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hotelwire::protocol::registry;
//! use hotelwire::router::ProtocolRouter;
//!
//! let mut builder = ProtocolRouter::builder();
//! for version in registry::shipped_versions() {
//!     builder = builder.version(version);
//! }
//! let router = builder.build();
//!
//! let app = router.into_service();
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! ### Validating a message
//!
//! ```rust,ignore
//! use hotelwire::protocol::CapabilitySet;
//! use hotelwire::validate::freerooms::{FreeRoomsValidator, FreeRoomsValidatorConfig};
//! use hotelwire::validate::Validator;
//!
//! let config = FreeRoomsValidatorConfig::from_capabilities(&capabilities);
//! let validator = FreeRoomsValidator::new(config);
//! validator.validate(&message)?;
//! ```
//!
//! ## Modules
//!
//! - [`protocol`]: versions, actions, capabilities, handshake negotiation
//! - [`router`]: the single-endpoint request pipeline (axum-based)
//! - [`types`]: payload data model shared by all versions
//! - [`validate`]: capability-driven message validators
//! - [`codec`]: payload codec seam and the bundled JSON rendition
//! - [`schema`]: structural validation seam
//! - [`config`]: configuration management
//! - [`error`]: error types and result aliases

pub mod codec;
pub mod config;
pub mod error;
pub mod protocol;
pub mod router;
pub mod schema;
pub mod types;
pub mod validate;
pub mod version;

// Re-exports for convenience
pub use codec::{JsonCodec, MessageCodec, RequestPayload, ResponsePayload};
pub use config::{Config, ServerConfig};
pub use error::{Result, WireError};
pub use protocol::{ActionId, CapabilitySet, HandshakeDocument};
pub use router::{ProtocolRouter, RouteContext, RouterBuilder};
pub use schema::SchemaValidator;
pub use validate::{ValidationError, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
