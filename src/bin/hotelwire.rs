//! HotelWire CLI binary.
//!
//! Multi-version hotel data exchange protocol.
//!
//! # Commands
//!
//! - `serve` - Start the protocol endpoint
//! - `negotiate` - Intersect a client handshake document with the server
//!   advertisement

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hotelwire::codec::{RequestPayload, ResponsePayload};
use hotelwire::protocol::{registry, ActionId, HandshakeDocument};
use hotelwire::router::{HandlerContext, ProtocolRouter};
use hotelwire::types::{
    Envelope, FreeRoomsResponse, InventoryResponse, NotifReportResponse, RatePlansResponse,
    ResRetrieveResponse,
};
use hotelwire::validate::freerooms::{FreeRoomsValidator, FreeRoomsValidatorConfig};
use hotelwire::validate::guestrequests::{NotifReportValidator, ReadValidator};
use hotelwire::validate::inventory::{InventoryValidator, InventoryValidatorConfig};
use hotelwire::validate::rateplans::{RatePlansValidator, RatePlansValidatorConfig};
use hotelwire::validate::Validator;
use hotelwire::{Config, Result, ValidationError, WireError, VERSION};

#[derive(Parser)]
#[command(name = "hotelwire")]
#[command(version = VERSION)]
#[command(about = "HotelWire - multi-version hotel data exchange protocol", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the protocol endpoint
    Serve {
        /// Config file path (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Listen host
        #[arg(long)]
        host: Option<String>,

        /// Maximum request body size in bytes
        #[arg(long)]
        max_request_bytes: Option<usize>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Intersect a client handshake document with the server advertisement
    Negotiate {
        /// Client document file (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output as pretty-printed JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            port,
            host,
            max_request_bytes,
            verbose,
        } => cmd_serve(config, port, host, max_request_bytes, verbose),

        Commands::Negotiate {
            input,
            file,
            pretty,
        } => cmd_negotiate(input, file, pretty),
    }
}

fn cmd_serve(
    config_path: Option<PathBuf>,
    port: Option<u16>,
    host: Option<String>,
    max_request_bytes: Option<usize>,
    verbose: bool,
) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(path) => Config::from_env().merge(Config::from_file(path)?),
        None => Config::from_env(),
    };
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(max) = max_request_bytes {
        config.server.max_request_bytes = max;
    }

    // Initialize logging
    let log_level = if verbose {
        "debug"
    } else {
        &config.server.log_level
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let router = build_router(config.server.max_request_bytes);
    let addr = config.server.addr()?;
    let app = router.into_service();

    tracing::info!("Starting HotelWire server on {addr}");
    tracing::info!(
        "Serving protocol versions [{}]",
        registry::shipped_versions()
            .iter()
            .map(|v| v.id)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;
        Ok::<_, anyhow::Error>(())
    })
}

/// Wire the shipped version tables to the validation handlers.
///
/// Room, category and rate plan lookup tables stay empty here; a deployment
/// fronting a real property-management system fills them from its inventory.
fn build_router(max_request_bytes: usize) -> ProtocolRouter {
    let mut builder = ProtocolRouter::builder().max_request_bytes(max_request_bytes);
    for version in registry::shipped_versions() {
        builder = builder.version(version);
    }

    for version in ["2020-10", "2018-10"] {
        let free_rooms = if version == "2018-10" {
            ActionId::new("OTA_HotelAvailNotif:FreeRooms", "action_OTA_HotelAvailNotif")
        } else {
            ActionId::free_rooms()
        };
        builder = builder
            .handler(version, &free_rooms, handle_free_rooms)
            .handler(version, &ActionId::inventory(), handle_inventory)
            .handler(version, &ActionId::inventory_info(), handle_inventory_info)
            .handler(version, &ActionId::rate_plans(), handle_rate_plans)
            .handler(
                version,
                &ActionId::read_guest_requests(),
                handle_read_guest_requests,
            )
            .handler(
                version,
                &ActionId::notif_report_guest_requests(),
                handle_notif_report,
            );
    }

    builder.build()
}

fn envelope_for(outcome: std::result::Result<(), ValidationError>) -> Envelope {
    match outcome {
        Ok(()) => Envelope::success(),
        Err(err) => {
            let mut envelope = Envelope::default();
            envelope.push_error(err.to_envelope_message());
            envelope
        }
    }
}

fn handle_free_rooms(
    ctx: &HandlerContext,
    payload: RequestPayload,
) -> Result<ResponsePayload> {
    let RequestPayload::FreeRooms(message) = payload else {
        return Err(unexpected_payload(ctx));
    };
    let config = FreeRoomsValidatorConfig::from_capabilities(&ctx.capabilities);
    let outcome = FreeRoomsValidator::new(config).validate(&message);
    Ok(ResponsePayload::FreeRooms(FreeRoomsResponse {
        envelope: envelope_for(outcome),
        version: ctx.version.clone(),
    }))
}

fn handle_inventory(ctx: &HandlerContext, payload: RequestPayload) -> Result<ResponsePayload> {
    let RequestPayload::Inventory(message) = payload else {
        return Err(unexpected_payload(ctx));
    };
    let config = InventoryValidatorConfig::from_capabilities(&ctx.capabilities);
    let outcome = InventoryValidator::new(config).validate(&message);
    Ok(ResponsePayload::Inventory(InventoryResponse {
        envelope: envelope_for(outcome),
        version: ctx.version.clone(),
    }))
}

fn handle_inventory_info(
    ctx: &HandlerContext,
    payload: RequestPayload,
) -> Result<ResponsePayload> {
    let RequestPayload::InventoryInfo(_) = payload else {
        return Err(unexpected_payload(ctx));
    };
    Ok(ResponsePayload::Inventory(InventoryResponse {
        envelope: Envelope::success(),
        version: ctx.version.clone(),
    }))
}

fn handle_rate_plans(ctx: &HandlerContext, payload: RequestPayload) -> Result<ResponsePayload> {
    let RequestPayload::RatePlans(message) = payload else {
        return Err(unexpected_payload(ctx));
    };
    let config = RatePlansValidatorConfig::from_capabilities(&ctx.capabilities);
    let outcome = RatePlansValidator::new(config).validate(&message);
    Ok(ResponsePayload::RatePlans(RatePlansResponse {
        envelope: envelope_for(outcome),
        version: ctx.version.clone(),
    }))
}

/// Answer a guest request poll. This reference binary fronts no booking
/// store, so a valid poll always yields an empty reservation list.
fn handle_read_guest_requests(
    ctx: &HandlerContext,
    payload: RequestPayload,
) -> Result<ResponsePayload> {
    let RequestPayload::ReadGuestRequests(message) = payload else {
        return Err(unexpected_payload(ctx));
    };
    let outcome = ReadValidator.validate(&message);
    Ok(ResponsePayload::GuestRequests(ResRetrieveResponse {
        envelope: envelope_for(outcome),
        version: ctx.version.clone(),
        reservations: Vec::new(),
    }))
}

fn handle_notif_report(ctx: &HandlerContext, payload: RequestPayload) -> Result<ResponsePayload> {
    let RequestPayload::NotifReport(message) = payload else {
        return Err(unexpected_payload(ctx));
    };
    let outcome = NotifReportValidator.validate(&message);
    Ok(ResponsePayload::NotifReport(NotifReportResponse {
        envelope: envelope_for(outcome),
        version: ctx.version.clone(),
    }))
}

fn unexpected_payload(ctx: &HandlerContext) -> WireError {
    WireError::Decode(format!(
        "payload does not match action {} under {}",
        ctx.action, ctx.version
    ))
}

fn cmd_negotiate(
    input: Option<String>,
    file: Option<PathBuf>,
    pretty: bool,
) -> anyhow::Result<()> {
    let raw = read_input(input, file)?;
    let client: HandshakeDocument = serde_json::from_str(&raw)?;

    let router = build_router(hotelwire::router::DEFAULT_MAX_REQUEST_BYTES);
    let agreement = router.advertisement().intersect(&client);

    if let Some((version, _)) = agreement.negotiated_version() {
        eprintln!("negotiated version: {version}");
    } else {
        eprintln!("no version in common");
    }

    let output = if pretty {
        serde_json::to_string_pretty(&agreement)?
    } else {
        serde_json::to_string(&agreement)?
    };
    println!("{output}");
    Ok(())
}

fn read_input(input: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    match input.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(text) => Ok(text.to_owned()),
    }
}
