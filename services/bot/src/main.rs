//! HTTP facade over the tugrik engine.
//!
//! Stands in for the chat transport: each route normalizes one user
//! interaction into an engine event and returns the structured reply as
//! JSON. Message rendering (keyboards, localization) belongs to whatever
//! transport sits in front of this service.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::{info, warn};
use tugrik_engine::{Casino, Config, LedgerError, MemoryLedger, RngDrawSource, SystemClock};
use tugrik_types::{Event, UserId};

type Bot = Casino<MemoryLedger, SystemClock, RngDrawSource<StdRng>>;

#[derive(Parser, Debug)]
#[command(name = "tugrik-bot", about = "Chat casino engine behind an HTTP facade")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:9130")]
    listen: SocketAddr,

    /// Users allowed to read /v1/stats, comma separated.
    #[arg(long, value_delimiter = ',')]
    admin: Vec<UserId>,

    /// Seed the draw RNG for reproducible runs; entropy-seeded when absent.
    #[arg(long)]
    draw_seed: Option<u64>,
}

#[derive(Deserialize)]
struct BetBody {
    text: String,
}

fn respond(result: Result<tugrik_types::Reply, LedgerError>) -> Response {
    match result {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => {
            warn!(?err, "ledger fault");
            (StatusCode::SERVICE_UNAVAILABLE, err.to_string()).into_response()
        }
    }
}

async fn login(State(bot): State<Arc<Bot>>, Path(user): Path<UserId>) -> Response {
    respond(bot.handle(Event::LoginRequested { user }))
}

async fn play(State(bot): State<Arc<Bot>>, Path(user): Path<UserId>) -> Response {
    respond(bot.handle(Event::PlayRequested { user }))
}

async fn bet(
    State(bot): State<Arc<Bot>>,
    Path(user): Path<UserId>,
    Json(body): Json<BetBody>,
) -> Response {
    respond(bot.handle(Event::BetSubmitted {
        user,
        text: body.text,
    }))
}

async fn claim(State(bot): State<Arc<Bot>>, Path(user): Path<UserId>) -> Response {
    respond(bot.handle(Event::ClaimRequested { user }))
}

async fn cancel(State(bot): State<Arc<Bot>>, Path(user): Path<UserId>) -> Response {
    respond(bot.handle(Event::CancelRequested { user }))
}

async fn balance(State(bot): State<Arc<Bot>>, Path(user): Path<UserId>) -> Response {
    respond(bot.handle(Event::BalanceRequested { user }))
}

async fn stats(State(bot): State<Arc<Bot>>, Path(user): Path<UserId>) -> Response {
    respond(bot.handle(Event::StatsRequested { user }))
}

async fn healthz() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = Config {
        admins: args.admin.iter().copied().collect(),
        ..Config::default()
    };
    let rng = match args.draw_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let bot = Arc::new(Casino::new(
        config,
        MemoryLedger::new(),
        SystemClock,
        RngDrawSource::new(rng),
    ));

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/login/:user", post(login))
        .route("/v1/play/:user", post(play))
        .route("/v1/bet/:user", post(bet))
        .route("/v1/claim/:user", post(claim))
        .route("/v1/cancel/:user", post(cancel))
        .route("/v1/balance/:user", get(balance))
        .route("/v1/stats/:user", get(stats))
        .with_state(bot);

    info!(addr = %args.listen, "tugrik bot service listening");
    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .context("failed to bind listen address")?;
    axum::serve(listener, app).await?;
    Ok(())
}
