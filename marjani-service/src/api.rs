//! HTTP API: move-list payloads in, stored run summaries out.

use crate::storage::{SessionStore, SessionSummary};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use marjani_path::{unique_visited_cells, CoverageError, Move, Position};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
}

/// Request body for `POST /cleaning-sessions`.
#[derive(Debug, Deserialize)]
pub struct MovementRequest {
    /// Cell the robot starts on
    pub start: Position,
    /// Ordered move commands
    #[serde(default)]
    pub commands: Vec<MoveCommand>,
}

/// One move command as carried on the wire.
///
/// Direction stays a plain string and steps stay signed here, so the
/// conversion below can reject bad values with a readable 400 instead of
/// a deserializer error.
#[derive(Debug, Deserialize)]
pub struct MoveCommand {
    pub direction: String,
    pub steps: i64,
}

fn parse_moves(commands: &[MoveCommand]) -> Result<Vec<Move>, CoverageError> {
    commands
        .iter()
        .map(|command| Move::parse(&command.direction, command.steps))
        .collect()
}

/// Build the service router.
pub fn build_router(store: SessionStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cleaning-sessions", post(create_session).get(list_sessions))
        .with_state(Arc::new(AppState { store }))
}

async fn health() -> &'static str {
    "ok"
}

async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MovementRequest>,
) -> Result<Json<SessionSummary>, (StatusCode, String)> {
    let moves =
        parse_moves(&request.commands).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let started = Instant::now();
    let result = unique_visited_cells(request.start, &moves);
    let duration = started.elapsed().as_secs_f64();

    info!(
        commands = moves.len(),
        result, duration, "cleaning session computed"
    );

    let stored = state
        .store
        .insert(moves.len() as i64, result, duration)
        .map_err(|e| {
            // the computation succeeded; only the bookkeeping failed
            error!("failed to store session summary: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to store session summary".to_string(),
            )
        })?;

    Ok(Json(stored))
}

async fn list_sessions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SessionSummary>>, (StatusCode, String)> {
    let sessions = state.store.list().map_err(|e| {
        error!("failed to list session summaries: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to list session summaries".to_string(),
        )
    })?;
    Ok(Json(sessions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marjani_path::Direction;

    #[test]
    fn test_parse_moves_accepts_valid_commands() {
        let commands = [
            MoveCommand {
                direction: "East".to_string(),
                steps: 10,
            },
            MoveCommand {
                direction: "South".to_string(),
                steps: 0,
            },
        ];
        let moves = parse_moves(&commands).unwrap();
        assert_eq!(
            moves,
            vec![
                Move::new(Direction::East, 10),
                Move::new(Direction::South, 0),
            ]
        );
    }

    #[test]
    fn test_parse_moves_rejects_unknown_direction() {
        let commands = [MoveCommand {
            direction: "Up".to_string(),
            steps: 1,
        }];
        assert_eq!(
            parse_moves(&commands),
            Err(CoverageError::InvalidDirection("Up".to_string()))
        );
    }

    #[test]
    fn test_parse_moves_rejects_negative_steps() {
        let commands = [MoveCommand {
            direction: "North".to_string(),
            steps: -5,
        }];
        assert_eq!(
            parse_moves(&commands),
            Err(CoverageError::InvalidStepCount(-5))
        );
    }
}
