use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::generators::{generate_grid, generate_random};
use crate::web::models::*;
use crate::Error;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    pub max_generated_nodes: usize,
}

impl AppState {
    pub fn new(max_sessions: usize, max_generated_nodes: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
            max_generated_nodes,
        }
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_poisoned",
                "Session store is unavailable".to_string(),
            )
        })
    }

    fn insert_session(&self, session: Session) -> Result<(), ApiError> {
        let mut sessions = self.sessions()?;
        if sessions.len() >= self.max_sessions {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions can be stored", self.max_sessions),
            ));
        }
        sessions.insert(session.id, session);
        Ok(())
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/shortest-paths", post(shortest_paths))
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/queries/:session_id", post(run_query))
        .route("/api/sessions", get(list_sessions))
        .route(
            "/api/sessions/:session_id",
            get(get_session).delete(delete_session),
        )
        .route("/api/health", get(health_check))
}

/// Answer a query against a graph sent in the request body
pub async fn shortest_paths(
    Json(request): Json<ShortestPathRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let query = QueryRequest {
        start: request.start,
        targets: request.targets,
    };
    Ok(Json(execute_query(&request.graph, &query)))
}

/// Store a caller-supplied graph in a new session
pub async fn create_graph(
    State(state): State<AppState>,
    Json(graph): Json<WebGraph>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let session = Session::new(graph);
    state.insert_session(session.clone())?;
    info!("stored graph session {}", session.id);
    Ok((StatusCode::CREATED, Json(session)))
}

/// Generate a new graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let generated = match request.graph_type.as_str() {
        "random" => check_node_limit(Some(request.node_count), state.max_generated_nodes)
            .and_then(|_| {
                generate_random(
                    request.node_count,
                    request.edges_per_node,
                    request.max_weight,
                    request.seed.unwrap_or_else(rand::random),
                )
            }),
        "grid" => {
            let (width, height) = request.grid_dimensions.unwrap_or_else(|| {
                let side = (request.node_count as f64).sqrt().ceil() as usize;
                (side, side)
            });
            check_node_limit(width.checked_mul(height), state.max_generated_nodes)
                .and_then(|_| generate_grid(width, height, request.max_weight))
        }
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            ));
        }
    };

    let graph = generated
        .map_err(library_error)?
        .map_nodes(|v| format!("v{}", v));

    let session = Session::new(graph);
    state.insert_session(session.clone())?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = state.sessions()?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.graph.clone())),
        None => Err(session_not_found()),
    }
}

/// Run a query against a stored graph
pub async fn run_query(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    // Work on a snapshot so the lock is not held while searching
    let graph = {
        let sessions = state.sessions()?;
        match sessions.get(&session_id) {
            Some(session) => session.graph.clone(),
            None => return Err(session_not_found()),
        }
    };

    let response = execute_query(&graph, &request);

    {
        let mut sessions = state.sessions()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = state.sessions()?;
    Ok(Json(sessions.keys().cloned().collect()))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = state.sessions()?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Delete a session, freeing its slot
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.sessions()?;
    match sessions.remove(&session_id) {
        Some(_) => {
            info!("deleted graph session {}", session_id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Runs one query and shapes the result for the wire
pub fn execute_query(graph: &WebGraph, request: &QueryRequest) -> QueryResponse {
    let dijkstra = Dijkstra::new();

    let start_time = Instant::now();
    let result = dijkstra.compute_shortest_paths(graph, &request.start);
    let execution_time = start_time.elapsed();

    let mut warnings = Vec::new();
    if let Err(err) = result.check() {
        warn!("query rejected start node: {}", err);
        warnings.push(err.to_string());
    }

    let paths = request
        .targets
        .iter()
        .map(|target| match result.path_to(target) {
            Ok(nodes) => PathReport {
                target: target.clone(),
                found: true,
                nodes,
                // The trivial path to the start costs nothing, even for an unknown start
                distance: if *target == request.start {
                    Some(0)
                } else {
                    result.distance(target)
                },
                reason: None,
            },
            Err(err) => PathReport {
                target: target.clone(),
                found: false,
                nodes: Vec::new(),
                distance: None,
                reason: Some(err.to_string()),
            },
        })
        .collect();

    QueryResponse {
        execution_id: Uuid::new_v4(),
        algorithm: dijkstra.name().to_string(),
        source: request.start.clone(),
        source_found: result.source_found,
        warnings,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances: result.distances.into_iter().collect(),
        predecessors: result.predecessors.into_iter().collect(),
        paths,
        stats: result.stats,
    }
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "session_not_found",
        "Session not found".to_string(),
    )
}

/// `None` means the requested size overflowed
fn check_node_limit(requested: Option<usize>, limit: usize) -> crate::Result<()> {
    match requested {
        Some(count) if count <= limit => Ok(()),
        Some(count) => Err(Error::InvalidRequest(format!(
            "graph of {} nodes exceeds the limit of {}",
            count, limit
        ))),
        None => Err(Error::InvalidRequest(format!(
            "graph size overflows, the limit is {} nodes",
            limit
        ))),
    }
}

fn library_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
        Error::InvalidVertex(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::UnknownStartNode(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unknown_start_node"),
        Error::Unreachable { .. } | Error::MalformedPredecessorChain { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "no_path")
        }
    };
    api_error(status, code, err.to_string())
}
