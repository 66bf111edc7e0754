//! Single binary JSON API over one career save slot.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, SAVE_PATH (save file, default tennis_career_save.json).

use actix_web::{
    get, post,
    web::{Data, Json, Query},
    App, HttpResponse, HttpServer, Responder,
};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use std::time::Duration;
use tennis_career::logic::DEFAULT_SAVE_FILE;
use tennis_career::{
    entries_for_tier, list_entries, save_snapshot, BracketView, CareerError, Gender, JsonFileStore, MatchInfo,
    PlayerProfile, RngSource, RoundResult, SaveStore, SavedBlob, Strategy, TierCode, TournamentId, TournamentPhase,
    TournamentSession,
};

/// The one career this server hosts, plus the tournament being played right now.
struct CareerState {
    store: Box<dyn SaveStore>,
    blob: Option<SavedBlob>,
    session: Option<TournamentSession>,
    rng: RngSource<StdRng>,
    /// Blob changed since the last write.
    dirty: bool,
}

impl CareerState {
    /// Write the blob, with the live session parked in the copy on disk.
    /// Stays dirty if the session cannot be parked yet.
    fn persist(&mut self) -> Result<(), CareerError> {
        if let Some(blob) = self.blob.as_mut() {
            blob.touch();
            let Some(snapshot) = save_snapshot(blob, self.session.as_ref()) else {
                return Ok(());
            };
            self.store.save(&snapshot)?;
        }
        self.dirty = false;
        Ok(())
    }

    fn in_tournament(&self) -> bool {
        self.session.is_some() || self.blob.as_ref().is_some_and(|b| b.ongoing_tournament.is_some())
    }
}

type AppState = Data<RwLock<CareerState>>;

/// Unsaved progress is flushed this often.
const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateCareerBody {
    name: String,
    #[serde(default)]
    gender: Gender,
}

#[derive(Deserialize)]
struct CalendarQuery {
    tier: Option<String>,
}

#[derive(Deserialize)]
struct JoinBody {
    entry_id: String,
}

#[derive(Deserialize)]
struct PlayBody {
    /// Rejects requests aimed at a tournament that is no longer active.
    tournament_id: Option<TournamentId>,
    strategy: String,
}

#[derive(Serialize)]
struct SessionResponse<'a> {
    tournament_id: TournamentId,
    event_name: &'a str,
    tier: TierCode,
    phase: TournamentPhase,
    match_info: &'a MatchInfo,
    bracket: BracketView<'a>,
}

impl<'a> From<&'a TournamentSession> for SessionResponse<'a> {
    fn from(s: &'a TournamentSession) -> Self {
        Self {
            tournament_id: s.tournament.id,
            event_name: &s.event_name,
            tier: s.tier,
            phase: s.phase,
            match_info: &s.match_info,
            bracket: s.bracket_view(),
        }
    }
}

#[derive(Serialize)]
struct PlayResponse<'a> {
    result: RoundResult,
    match_info: &'a MatchInfo,
    player: &'a PlayerProfile,
}

fn error_response(e: &CareerError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        CareerError::NoActiveTournament | CareerError::EntryNotFound(_) => HttpResponse::NotFound().json(body),
        CareerError::TournamentFinished => HttpResponse::Conflict().json(body),
        CareerError::Io(_) | CareerError::Serialization(_) => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn no_career() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No career" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tennis-career",
    })
}

/// Current save blob (404 before a career is created).
#[get("/api/career")]
async fn api_get_career(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.blob.as_ref() {
        Some(blob) => HttpResponse::Ok().json(blob),
        None => no_career(),
    }
}

/// Start a new career, replacing the save slot.
#[post("/api/career")]
async fn api_create_career(state: AppState, body: Json<CreateCareerBody>) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name must not be empty" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.session = None;
    g.blob = Some(SavedBlob::new(PlayerProfile::new(name, body.gender)));
    if let Err(e) = g.persist() {
        return error_response(&e);
    }
    log::info!("New career for {}", name);
    HttpResponse::Ok().json(&g.blob)
}

/// Delete the save slot.
#[post("/api/career/reset")]
async fn api_reset_career(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.session = None;
    g.blob = None;
    g.dirty = false;
    match g.store.clear() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Move the clock on one week (not while a tournament is running).
#[post("/api/career/next-week")]
async fn api_next_week(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if g.in_tournament() {
        return HttpResponse::Conflict().json(serde_json::json!({ "error": "Finish or quit the tournament first" }));
    }
    let rollover = match g.blob.as_mut() {
        Some(blob) => blob.advance_week(),
        None => return no_career(),
    };
    if let Err(e) = g.persist() {
        return error_response(&e);
    }
    HttpResponse::Ok().json(serde_json::json!({ "rollover": rollover, "career": &g.blob }))
}

/// Take the week off: recover fatigue and energy, maybe regain form.
#[post("/api/career/rest")]
async fn api_rest(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if g.in_tournament() {
        return HttpResponse::Conflict().json(serde_json::json!({ "error": "Finish or quit the tournament first" }));
    }
    let CareerState { blob, rng, .. } = &mut *g;
    let recovery = match blob.as_mut() {
        Some(blob) => blob.player.rest(rng),
        None => return no_career(),
    };
    if let Err(e) = g.persist() {
        return error_response(&e);
    }
    HttpResponse::Ok().json(serde_json::json!({ "recovery": recovery, "career": &g.blob }))
}

/// Events open this week for the player's tour, optionally one tier only (`?tier=ATP500`).
#[get("/api/calendar")]
async fn api_calendar(state: AppState, query: Query<CalendarQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(blob) = g.blob.as_ref() else {
        return no_career();
    };
    match query.tier.as_deref() {
        Some(tier) => match entries_for_tier(&blob.clock, blob.player.gender, tier.trim()) {
            Ok(entries) => HttpResponse::Ok().json(entries),
            Err(e) => error_response(&e),
        },
        None => HttpResponse::Ok().json(list_entries(&blob.clock, blob.player.gender)),
    }
}

/// Enter one of this week's events.
#[post("/api/tournament/join")]
async fn api_join(state: AppState, body: Json<JoinBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let CareerState {
        blob, session, rng, ..
    } = &mut *g;
    let Some(blob) = blob.as_mut() else {
        return no_career();
    };
    if session.is_some() || blob.ongoing_tournament.is_some() {
        return HttpResponse::Conflict().json(serde_json::json!({ "error": "Already in a tournament" }));
    }
    match TournamentSession::join(&mut blob.player, &blob.clock, body.entry_id.trim(), rng) {
        Ok(s) => *session = Some(s),
        Err(e) => return error_response(&e),
    }
    g.dirty = true;
    match g.session.as_ref() {
        Some(s) => HttpResponse::Ok().json(SessionResponse::from(s)),
        None => error_response(&CareerError::NoActiveTournament),
    }
}

/// Active tournament; a tournament parked in the save slot is resumed here.
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if g.session.is_none() {
        let resumed = g.blob.as_mut().and_then(TournamentSession::resume);
        if resumed.is_some() {
            g.session = resumed;
            g.dirty = true;
        }
    }
    match g.session.as_ref() {
        Some(s) => HttpResponse::Ok().json(SessionResponse::from(s)),
        None => error_response(&CareerError::NoActiveTournament),
    }
}

/// Move to the match screen and show the next opponent.
#[post("/api/tournament/match")]
async fn api_enter_match(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let CareerState { session, rng, .. } = &mut *g;
    match session.as_mut() {
        Some(s) => HttpResponse::Ok().json(s.enter_match(rng)),
        None => error_response(&CareerError::NoActiveTournament),
    }
}

/// Play the current round with the chosen strategy.
#[post("/api/tournament/play")]
async fn api_play(state: AppState, body: Json<PlayBody>) -> HttpResponse {
    let strategy: Strategy = match body.strategy.parse() {
        Ok(s) => s,
        Err(e) => return error_response(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let CareerState {
        blob, session, rng, ..
    } = &mut *g;
    let (Some(blob), Some(s)) = (blob.as_mut(), session.as_mut()) else {
        return error_response(&CareerError::NoActiveTournament);
    };
    if body.tournament_id.is_some_and(|id| id != s.tournament.id) {
        return HttpResponse::Conflict().json(serde_json::json!({ "error": "Stale tournament id" }));
    }
    let result = match s.play_round(&mut blob.player, strategy, rng) {
        Ok(r) => r,
        Err(e) => return error_response(&e),
    };
    g.dirty = true;
    match (g.blob.as_ref(), g.session.as_ref()) {
        (Some(blob), Some(s)) => HttpResponse::Ok().json(PlayResponse {
            result,
            match_info: &s.match_info,
            player: &blob.player,
        }),
        _ => error_response(&CareerError::NoActiveTournament),
    }
}

/// Back to the draw after a result.
#[post("/api/tournament/bracket")]
async fn api_back_to_bracket(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let CareerState { session, rng, .. } = &mut *g;
    match session.as_mut() {
        Some(s) => {
            s.back_to_bracket(rng);
            HttpResponse::Ok().json(SessionResponse::from(&*s))
        }
        None => error_response(&CareerError::NoActiveTournament),
    }
}

/// Leave mid-tournament; it is parked in the save slot until the next visit.
#[post("/api/tournament/exit")]
async fn api_exit(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(session) = g.session.take() else {
        return error_response(&CareerError::NoActiveTournament);
    };
    let stored = match g.blob.as_mut() {
        Some(blob) => session.suspend(blob),
        None => return no_career(),
    };
    if let Err(e) = g.persist() {
        return error_response(&e);
    }
    HttpResponse::Ok().json(serde_json::json!({ "suspended": stored }))
}

/// Wrap up a tournament the player is out of (or has won).
#[post("/api/tournament/finish")]
async fn api_finish(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let CareerState {
        blob, session, rng, ..
    } = &mut *g;
    let Some(blob) = blob.as_mut() else {
        return no_career();
    };
    let Some(active) = session.take() else {
        return error_response(&CareerError::NoActiveTournament);
    };
    if !active.tournament.is_finished() {
        *session = Some(active);
        return error_response(&CareerError::NoActiveTournament);
    }
    let summary = match active.finish(blob, rng) {
        Ok(summary) => summary,
        Err(e) => return error_response(&e),
    };
    if let Err(e) = g.persist() {
        return error_response(&e);
    }
    HttpResponse::Ok().json(summary)
}

/// Withdraw from the tournament.
#[post("/api/tournament/quit")]
async fn api_quit(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let active = match g.session.take() {
        Some(s) => Some(s),
        None => g.blob.as_mut().and_then(TournamentSession::resume),
    };
    let (Some(active), Some(blob)) = (active, g.blob.as_mut()) else {
        return error_response(&CareerError::NoActiveTournament);
    };
    active.quit(blob);
    if let Err(e) = g.persist() {
        return error_response(&e);
    }
    HttpResponse::NoContent().finish()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let save_path = std::env::var("SAVE_PATH").unwrap_or_else(|_| DEFAULT_SAVE_FILE.to_string());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let store = JsonFileStore::new(&save_path);
    let blob = match store.load() {
        Ok(blob) => blob,
        Err(e) => {
            log::warn!("Ignoring unreadable save at {}: {}", save_path, e);
            None
        }
    };
    if let Some(blob) = &blob {
        log::info!("Loaded career of {} from {}", blob.player.name, save_path);
    }
    let state = Data::new(RwLock::new(CareerState {
        store: Box::new(store),
        blob,
        session: None,
        rng: RngSource::from_entropy(),
        dirty: false,
    }));

    // Background task: flush unsaved progress every few minutes
    let state_autosave = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(AUTOSAVE_INTERVAL);
        loop {
            interval.tick().await;
            let mut g = match state_autosave.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            if !g.dirty {
                continue;
            }
            match g.persist() {
                Ok(()) => log::debug!("Autosaved career"),
                Err(e) => log::warn!("Autosave failed: {}", e),
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_get_career)
            .service(api_create_career)
            .service(api_reset_career)
            .service(api_next_week)
            .service(api_rest)
            .service(api_calendar)
            .service(api_join)
            .service(api_get_tournament)
            .service(api_enter_match)
            .service(api_play)
            .service(api_back_to_bracket)
            .service(api_exit)
            .service(api_finish)
            .service(api_quit)
    })
    .bind(bind)?
    .run()
    .await
}
