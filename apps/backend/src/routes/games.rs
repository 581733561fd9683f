//! Game-related HTTP routes.
//!
//! These endpoints mirror the command set of the original line-based game
//! protocol: start, state, play, captures, finalize, score. Each handler
//! performs exactly one engine call under the game's lock.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::score_round;
use crate::domain::snapshot::{snapshot, RoundSnapshot};
use crate::domain::turns::{finalize_round, legal_captures, play_card, FinalizeOutcome, PlayOutcome};
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    /// Optional display names for the two seats.
    #[serde(default)]
    pub names: Option<[String; PLAYERS]>,
}

#[derive(Debug, Serialize)]
struct CreateGameResponse {
    game_id: String,
    snapshot: RoundSnapshot,
}

/// POST /api/games
///
/// Create a game and deal its first round.
async fn create_game(
    app_state: web::Data<AppState>,
    body: Option<web::Json<CreateGameRequest>>,
) -> Result<HttpResponse, AppError> {
    let names = body.and_then(|b| b.into_inner().names);
    let (game_id, snapshot) = app_state.games.create(names);
    Ok(HttpResponse::Created().json(CreateGameResponse { game_id, snapshot }))
}

/// POST /api/games/{game_id}/start
///
/// Reshuffle and deal a fresh round for an existing game.
async fn start_round(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let snap = app_state.games.restart(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(snap))
}

/// GET /api/games/{game_id}
///
/// Current snapshot of the round.
async fn get_snapshot(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let snap = app_state
        .games
        .with_round(&path.into_inner(), |state| Ok(snapshot(state)))?;
    Ok(HttpResponse::Ok().json(snap))
}

/// A capture option on the wire: table positions plus the cards there.
#[derive(Debug, Serialize)]
struct CaptureOptionView {
    indices: Vec<usize>,
    cards: Vec<Card>,
}

#[derive(Debug, Serialize)]
struct CapturesResponse {
    captures: Vec<CaptureOptionView>,
}

/// GET /api/games/{game_id}/captures/{hand_index}
///
/// Legal capture options for the acting player's card at `hand_index`.
/// An empty list means the card can only be laid on the table.
async fn get_captures(
    app_state: web::Data<AppState>,
    path: web::Path<(String, usize)>,
) -> Result<HttpResponse, AppError> {
    let (id, hand_index) = path.into_inner();
    let captures = app_state.games.with_round(&id, |state| {
        let options = legal_captures(state, hand_index)?;
        Ok(options
            .into_iter()
            .map(|opt| CaptureOptionView {
                cards: opt.cards(&state.table),
                indices: opt.indices,
            })
            .collect::<Vec<_>>())
    })?;
    Ok(HttpResponse::Ok().json(CapturesResponse { captures }))
}

#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub hand_index: usize,
    /// Index into the list `captures` returns; omit to lay the card down.
    #[serde(default)]
    pub capture: Option<usize>,
}

#[derive(Debug, Serialize)]
struct PlayResponse {
    outcome: PlayOutcome,
    snapshot: RoundSnapshot,
}

/// POST /api/games/{game_id}/play
async fn play(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PlayRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let (outcome, snap) = app_state.games.with_round(&path.into_inner(), |state| {
        let outcome = play_card(state, req.hand_index, req.capture)?;
        Ok((outcome, snapshot(state)))
    })?;
    Ok(HttpResponse::Ok().json(PlayResponse {
        outcome,
        snapshot: snap,
    }))
}

#[derive(Debug, Serialize)]
struct FinalizeResponse {
    outcome: FinalizeOutcome,
    snapshot: RoundSnapshot,
}

/// POST /api/games/{game_id}/finalize
///
/// Sweep the leftover table cards to the last capturer. Only valid once
/// the round is over.
async fn finalize(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let (outcome, snap) = app_state.games.with_round(&path.into_inner(), |state| {
        let outcome = finalize_round(state)?;
        Ok((outcome, snapshot(state)))
    })?;
    Ok(HttpResponse::Ok().json(FinalizeResponse {
        outcome,
        snapshot: snap,
    }))
}

#[derive(Debug, Serialize)]
struct ScoreResponse {
    points: [u8; PLAYERS],
}

/// GET /api/games/{game_id}/score
///
/// Point totals over the piles as they stand. Meaningful once the round
/// is over and finalized; computing earlier is allowed and harmless.
async fn get_score(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let score = app_state.games.with_round(&path.into_inner(), |state| {
        Ok(score_round(
            [
                state.players[0].captured.as_slice(),
                state.players[1].captured.as_slice(),
            ],
            [state.players[0].scopa_count, state.players[1].scopa_count],
        ))
    })?;
    Ok(HttpResponse::Ok().json(ScoreResponse {
        points: score.points,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_snapshot)));
    cfg.service(web::resource("/{game_id}/start").route(web::post().to(start_round)));
    cfg.service(
        web::resource("/{game_id}/captures/{hand_index}").route(web::get().to(get_captures)),
    );
    cfg.service(web::resource("/{game_id}/play").route(web::post().to(play)));
    cfg.service(web::resource("/{game_id}/finalize").route(web::post().to(finalize)));
    cfg.service(web::resource("/{game_id}/score").route(web::get().to(get_score)));
}
