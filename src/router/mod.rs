//! Request router and protocol state machine.
//!
//! All traffic arrives as `multipart/form-data` POSTs on a single endpoint;
//! the `action` field selects the operation and the `request` field carries
//! the payload. The router walks a fixed pipeline and stops at the first
//! failing step:
//!
//! 1. method and header checks
//! 2. protocol version syntax and registration
//! 3. per-request agreement override ([`RouteContext`])
//! 4. multipart framing
//! 5. action resolution within the version
//! 6. structural validation through the [`SchemaValidator`] seam
//! 7. decode, handler, encode, response validation
//!
//! Steps 1-6 are client errors: HTTP 400 with a plain-text `ERROR: <message>`
//! body. Everything after a well-formed, schema-valid payload is a server
//! concern: HTTP 500 with an empty body, logged through `tracing`.

mod context;

pub use context::RouteContext;

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{DefaultBodyLimit, FromRequest, Multipart, Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::Response;
use axum::routing::any;
use tower_http::trace::TraceLayer;

use crate::codec::{JsonCodec, MessageCodec, RequestPayload, ResponsePayload};
use crate::error::{Result, WireError};
use crate::protocol::registry::VersionRegistration;
use crate::protocol::{ActionCapabilities, ActionId, CapabilitySet, HandshakeDocument};
use crate::schema::{SchemaValidator, Unvalidated};
use crate::types::{Envelope, EnvelopeMessage, PingResponse, ResendStatus, Severity};
use crate::version::{compare_versions_descending, validate_version_string};

/// Header naming the calling client.
pub const CLIENT_ID_HEADER: &str = "X-HotelWire-ClientID";
/// Header carrying the protocol version the client speaks for this request.
pub const PROTOCOL_VERSION_HEADER: &str = "X-HotelWire-ClientProtocolVersion";
/// Response header advertising accepted request encodings.
pub const SERVER_ACCEPT_ENCODING_HEADER: &str = "X-HotelWire-Server-Accept-Encoding";

/// Default cap on the request body, multipart fields included.
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Everything a handler gets to see about the request.
#[derive(Debug, Clone)]
pub struct HandlerContext {
    /// Value of the client-id header.
    pub client_id: String,
    /// Resolved protocol version.
    pub version: String,
    /// Resolved action.
    pub action: ActionId,
    /// Capabilities in force for this action: the agreement's grant when a
    /// [`RouteContext`] rides on the request, the server's full table
    /// otherwise.
    pub capabilities: CapabilitySet,
    /// The server advertisement, narrowed by the agreement when present.
    pub advertisement: HandshakeDocument,
}

/// Business handler for one action of one version.
pub type ActionHandler =
    Arc<dyn Fn(&HandlerContext, RequestPayload) -> Result<ResponsePayload> + Send + Sync>;

/// How a request left the pipeline early.
enum RouteFailure {
    /// Client-side fault, reported in the 400 body.
    Precondition(String),
    /// Server-side fault, logged and hidden behind an empty 500.
    Internal(WireError),
}

fn precondition(message: impl Into<String>) -> RouteFailure {
    RouteFailure::Precondition(message.into())
}

struct RouterState {
    versions: HashMap<&'static str, VersionRegistration>,
    handlers: HashMap<(String, String), ActionHandler>,
    codec: Arc<dyn MessageCodec>,
    schema: Arc<dyn SchemaValidator>,
    advertisement: HandshakeDocument,
    max_request_bytes: usize,
}

/// Builds a [`ProtocolRouter`].
pub struct RouterBuilder {
    versions: Vec<VersionRegistration>,
    handlers: HashMap<(String, String), ActionHandler>,
    codec: Arc<dyn MessageCodec>,
    schema: Arc<dyn SchemaValidator>,
    max_request_bytes: usize,
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self {
            versions: Vec::new(),
            handlers: HashMap::new(),
            codec: Arc::new(JsonCodec),
            schema: Arc::new(Unvalidated),
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

impl RouterBuilder {
    /// Replace the payload codec.
    pub fn codec(mut self, codec: impl MessageCodec + 'static) -> Self {
        self.codec = Arc::new(codec);
        self
    }

    /// Replace the structural validator.
    pub fn schema(mut self, schema: impl SchemaValidator + 'static) -> Self {
        self.schema = Arc::new(schema);
        self
    }

    /// Cap the request body size.
    pub fn max_request_bytes(mut self, bytes: usize) -> Self {
        self.max_request_bytes = bytes;
        self
    }

    /// Register a protocol version and its action table.
    pub fn version(mut self, registration: VersionRegistration) -> Self {
        self.versions.push(registration);
        self
    }

    /// Register the business handler for one action of one version.
    pub fn handler<F>(mut self, version: &str, action: &ActionId, handler: F) -> Self
    where
        F: Fn(&HandlerContext, RequestPayload) -> Result<ResponsePayload> + Send + Sync + 'static,
    {
        self.handlers.insert(
            (version.to_owned(), action.wire_name().to_owned()),
            Arc::new(handler),
        );
        self
    }

    /// Finalize the router. The handshake advertisement is derived here from
    /// the registered versions, skipping excluded actions.
    pub fn build(self) -> ProtocolRouter {
        let mut advertisement = HandshakeDocument::new();
        let mut versions = HashMap::new();

        for registration in self.versions {
            let mut actions = ActionCapabilities::new();
            for action in &registration.actions {
                if action.exclude_from_handshake {
                    continue;
                }
                let capabilities = if action.capabilities.is_empty() {
                    None
                } else {
                    Some(
                        action
                            .capabilities
                            .iter()
                            .map(|c| (*c).to_owned())
                            .collect(),
                    )
                };
                actions.insert(action.id.handshake_name().to_owned(), capabilities);
            }
            advertisement.insert_version(registration.id, actions);
            versions.insert(registration.id, registration);
        }

        ProtocolRouter {
            state: Arc::new(RouterState {
                versions,
                handlers: self.handlers,
                codec: self.codec,
                schema: self.schema,
                advertisement,
                max_request_bytes: self.max_request_bytes,
            }),
        }
    }
}

/// The protocol endpoint.
#[derive(Clone)]
pub struct ProtocolRouter {
    state: Arc<RouterState>,
}

impl ProtocolRouter {
    /// Start building a router.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    /// The handshake advertisement derived from the registered versions.
    pub fn advertisement(&self) -> &HandshakeDocument {
        &self.state.advertisement
    }

    /// Turn the router into an axum service mounted at `/`.
    pub fn into_service(self) -> axum::Router {
        let max = self.state.max_request_bytes;
        axum::Router::new()
            .route("/", any(entry))
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(max))
            .with_state(self.state)
    }
}

async fn entry(State(state): State<Arc<RouterState>>, request: Request) -> Response {
    let context = request.extensions().get::<RouteContext>().cloned();
    let content_type = state.codec.content_type();

    match dispatch(&state, context, request).await {
        Ok(body) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type)
            .header(SERVER_ACCEPT_ENCODING_HEADER, "identity")
            .body(Body::from(body)),
        Err(RouteFailure::Precondition(message)) => {
            tracing::debug!(%message, "rejected request");
            Response::builder()
                .status(StatusCode::BAD_REQUEST)
                .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(Body::from(format!("ERROR: {message}")))
        }
        Err(RouteFailure::Internal(error)) => {
            tracing::error!(error = %error, "request failed");
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::empty())
        }
    }
    .unwrap_or_else(|_| Response::new(Body::empty()))
}

async fn dispatch(
    state: &RouterState,
    context: Option<RouteContext>,
    request: Request,
) -> std::result::Result<String, RouteFailure> {
    if request.method() != Method::POST {
        return Err(precondition("unsupported http method, use POST"));
    }

    let client_id = header_value(&request, CLIENT_ID_HEADER)?;
    let version = header_value(&request, PROTOCOL_VERSION_HEADER)?;

    validate_version_string(&version)
        .map_err(|e| precondition(e.to_string()))?;

    let Some(registration) = state.versions.get(version.as_str()) else {
        return Err(precondition(format!(
            "unsupported protocol version {version}, supported versions are [{}]",
            supported_versions(state).join(", ")
        )));
    };

    if let Some(ctx) = &context {
        if !ctx.allows_version(&version) {
            return Err(precondition(format!(
                "protocol version {version} is not part of the capability agreement, re-run the handshake"
            )));
        }
    }

    let (action_name, raw) = read_multipart(request).await?;

    let action = registration
        .actions
        .iter()
        .find(|a| a.id.wire_name() == action_name)
        .ok_or_else(|| precondition("unknown or missing action"))?;

    if let Some(ctx) = &context {
        // The same message whether the action does not exist or merely sits
        // outside the agreement; existence must not leak.
        if !ctx.allows_action(&version, action.id.handshake_name()) {
            return Err(precondition("unknown or missing action"));
        }
    }

    state
        .schema
        .validate(&version, &raw)
        .map_err(|e| precondition(e.to_string()))?;

    let payload = state
        .codec
        .decode(&action.id, &raw)
        .map_err(RouteFailure::Internal)?;

    let capabilities = match &context {
        Some(ctx) => ctx.capabilities(&version, action.id.handshake_name()),
        None => CapabilitySet::from_tags(action.capabilities.iter().copied()),
    };
    let advertisement = match &context {
        Some(ctx) => state.advertisement.intersect(ctx.agreement()),
        None => state.advertisement.clone(),
    };

    let handler_context = HandlerContext {
        client_id,
        version: version.clone(),
        action: action.id.clone(),
        capabilities,
        advertisement,
    };

    let response = match state.handlers.get(&(version.clone(), action_name)) {
        Some(handler) => handler(&handler_context, payload).map_err(RouteFailure::Internal)?,
        None if action.id == ActionId::ping() => handshake_ping(&handler_context, payload)?,
        None => {
            return Err(RouteFailure::Internal(WireError::Config(format!(
                "no handler registered for {} under {version}",
                action.id
            ))))
        }
    };

    let body = state
        .codec
        .encode(&response)
        .map_err(RouteFailure::Internal)?;
    state
        .schema
        .validate(&version, &body)
        .map_err(RouteFailure::Internal)?;

    Ok(body)
}

fn header_value(request: &Request, name: &str) -> std::result::Result<String, RouteFailure> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map(ToOwned::to_owned)
        .ok_or_else(|| precondition(format!("missing http header {name}")))
}

fn supported_versions(state: &RouterState) -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = state.versions.keys().copied().collect();
    ids.sort_by(|a, b| compare_versions_descending(a, b));
    ids
}

async fn read_multipart(
    request: Request,
) -> std::result::Result<(String, String), RouteFailure> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| precondition(format!("invalid multipart request: {e}")))?;

    let mut action = None;
    let mut raw = None;

    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| precondition(format!("invalid multipart request: {e}")))?;
        let Some(field) = field else { break };

        let name = field.name().map(ToOwned::to_owned);
        let text = field
            .text()
            .await
            .map_err(|e| precondition(format!("invalid multipart request: {e}")))?;
        match name.as_deref() {
            Some("action") => action = Some(text),
            Some("request") => raw = Some(text),
            _ => {}
        }
    }

    let raw = raw.ok_or_else(|| precondition("missing multipart field request"))?;
    // A missing action field resolves exactly like an unknown one.
    Ok((action.unwrap_or_default(), raw))
}

/// Built-in handshake handler: intersect the client document carried in the
/// echo data with the (possibly narrowed) server advertisement, and return
/// the agreement inside an advisory warning.
fn handshake_ping(
    context: &HandlerContext,
    payload: RequestPayload,
) -> std::result::Result<ResponsePayload, RouteFailure> {
    let RequestPayload::Ping(ping) = payload else {
        return Err(RouteFailure::Internal(WireError::Decode(
            "ping action decoded to a non-ping payload".to_owned(),
        )));
    };

    let client: HandshakeDocument = serde_json::from_str(&ping.echo_data)
        .map_err(|e| precondition(format!("invalid handshake document: {e}")))?;

    let agreement = context.advertisement.intersect(&client);
    let agreement_json =
        serde_json::to_string(&agreement).map_err(|e| RouteFailure::Internal(e.into()))?;

    let mut envelope = Envelope::success();
    envelope.push_warning(EnvelopeMessage {
        severity: Severity::Advisory,
        status: Some(ResendStatus::Handshake),
        value: agreement_json.clone(),
    });

    Ok(ResponsePayload::Ping(PingResponse {
        envelope,
        echo_token: ping.echo_token,
        echo_data: agreement_json,
    }))
}
