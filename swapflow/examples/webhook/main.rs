// SwapFlow example serving the exchange dialogue over HTTP:
// POST /chat/{chat_id} with {"text": "..."} or {"photo": "<base64>", "text": "caption"}
//   runs one message through the dialogue and returns the replies
// GET /chat/{chat_id} shows where the chat's dialogue stands
//
// Pricing and orders are stubs. A "photo" is decoded by reading its bytes as the QR payload.

use std::sync::Arc;
use base64::Engine;
use serde::Deserialize;
use tracing::{event, Level};
use tracing_attributes::instrument;
use warp::{Filter, Rejection, Reply as WarpReply};

use swapflow::{ChatId, Dispatch, Dispatcher, Error, FlowConfig, FlowEngine};
use swapflow::action::{Reply, Services};
use swapflow::data::{Input, Photo};

mod helpers;
use helpers::{StubPricing, StubOrders, TextDecoder, Outbox};

#[derive(Debug)]
struct WarpError(Error);
impl warp::reject::Reject for WarpError {}

#[derive(Debug)]
struct PhotoError(base64::DecodeError);
impl warp::reject::Reject for PhotoError {}

#[derive(Debug)]
struct TaskError(tokio::task::JoinError);
impl warp::reject::Reject for TaskError {}

const CHAT_ROOT_PATH: &str = "chat";
const MAX_BODY_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    text: Option<String>,
    // base64 encoded image
    #[serde(default)]
    photo: Option<String>,
}

impl Message {
    fn into_input(self) -> Result<Input, base64::DecodeError> {
        match self.photo {
            Some(encoded) => {
                let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
                Ok(Input::from(Photo::new(bytes, self.text)))
            },
            None => Ok(Input::text(self.text.unwrap_or_default())),
        }
    }
}

fn new_dispatcher() -> Result<Dispatcher, Error> {
    let config = FlowConfig::from_env()?;
    event!(Level::INFO, currencies = ?config.currencies, "configured");

    let services = Services {
        pricing: Arc::new(StubPricing),
        orders: Arc::new(StubOrders::default()),
        decoder: Arc::new(TextDecoder),
    };
    let engine = FlowEngine::new(config, services)?;
    Ok(Dispatcher::new(Arc::new(engine)))
}

// sessions are behind std mutexes and collaborators block, keep both off the runtime threads
async fn dispatch_message(dispatcher: Arc<Dispatcher>, chat_id: ChatId, input: Input)
    -> Result<Result<(Dispatch, Vec<Reply>), Error>, tokio::task::JoinError>
{
    tokio::task::spawn_blocking(move || {
        let outbox = Outbox::default();
        dispatcher
            .handle(chat_id, input, &outbox)
            .map(|dispatch| (dispatch, outbox.into_replies()))
    })
    .await
}

#[instrument(skip(dispatcher))]
async fn chat_handler(chat_id: ChatId, message: Message, dispatcher: Arc<Dispatcher>) -> Result<impl WarpReply, Rejection> {
    let input = message.into_input().map_err(|e| warp::reject::custom(PhotoError(e)))?;

    let (dispatch, replies) = dispatch_message(dispatcher, chat_id, input)
        .await
        .map_err(|e| warp::reject::custom(TaskError(e)))?
        .map_err(|e| warp::reject::custom(WarpError(e)))?;

    // passthrough messages would go to the bot's other command handlers
    let (routed, next_step) = match dispatch {
        Dispatch::Routed(next_step) => (true, next_step),
        Dispatch::Passthrough => (false, None),
    };
    Ok(warp::reply::json(&serde_json::json!({
        "routed": routed,
        "next_step": next_step,
        "replies": replies,
    })))
}

#[instrument(skip(dispatcher))]
async fn session_handler(chat_id: ChatId, dispatcher: Arc<Dispatcher>) -> Result<impl WarpReply, Rejection> {
    let view = tokio::task::spawn_blocking(move || -> Result<Option<serde_json::Value>, Error> {
        let session = match dispatcher.sessions().get(&chat_id)? {
            Some(session) => session,
            None => return Ok(None),
        };
        let session = session.lock().map_err(|_e| Error::Poisoned)?;
        Ok(Some(serde_json::json!({
            "position": session.position(),
            "context": session.context(),
            "history_len": session.history().len(),
        })))
    })
    .await
    .map_err(|e| warp::reject::custom(TaskError(e)))?
    .map_err(|e| warp::reject::custom(WarpError(e)))?
    .ok_or_else(warp::reject::not_found)?;
    Ok(warp::reply::json(&view))
}

fn with_dispatcher(dispatcher: Arc<Dispatcher>) -> impl Filter<Extract = (Arc<Dispatcher>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || dispatcher.clone())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug,warp=info".to_owned());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let dispatcher = match new_dispatcher() {
        Ok(dispatcher) => Arc::new(dispatcher),
        Err(err) => {
            event!(Level::ERROR, error = %err, "cannot start");
            std::process::exit(1);
        }
    };
    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(8080);

    let chat_path = warp::path(CHAT_ROOT_PATH)
        .and(warp::path::param::<ChatId>())
        .and(warp::path::end());

    // route to feed a message to the chat's dialogue
    let message_route = chat_path
        .clone()
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_dispatcher(dispatcher.clone()))
        .and_then(chat_handler);

    // route to inspect the chat's session
    let session_route = chat_path
        .and(warp::get())
        .and(with_dispatcher(dispatcher))
        .and_then(session_handler);

    println!("Server started on port {}", port);
    warp::serve(message_route.or(session_route).with(warp::trace::request()))
        .run(([0, 0, 0, 0], port))
        .await;
}
