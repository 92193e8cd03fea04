use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::algorithm::SearchStats;
use crate::graph::AdjacencyGraph;

/// Graph as exchanged over HTTP: `{"A": {"B": 1}, "B": {}}`
pub type WebGraph = AdjacencyGraph<String, u64>;

/// Query against a stored graph
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub start: String,
    /// Destinations to reconstruct paths for
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Stateless query carrying its own graph
#[derive(Debug, Clone, Deserialize)]
pub struct ShortestPathRequest {
    pub graph: WebGraph,
    pub start: String,
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    /// "random" or "grid"
    pub graph_type: String,
    pub node_count: usize,
    #[serde(default = "default_edges_per_node")]
    pub edges_per_node: usize,
    #[serde(default = "default_max_weight")]
    pub max_weight: u64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub grid_dimensions: Option<(usize, usize)>,
}

fn default_edges_per_node() -> usize { 3 }
fn default_max_weight() -> u64 { 100 }

/// Reconstructed path to one requested destination
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub target: String,
    pub found: bool,
    pub nodes: Vec<String>,
    pub distance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Response containing query results
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: String,
    pub source_found: bool,
    pub warnings: Vec<String>,
    pub execution_time_ms: f64,
    /// `null` marks an unreachable vertex
    pub distances: BTreeMap<String, Option<u64>>,
    pub predecessors: BTreeMap<String, Option<String>>,
    pub paths: Vec<PathReport>,
    pub stats: SearchStats,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing a graph and its most recent query
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub last_result: Option<QueryResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WebGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            last_result: None,
            created_at: Utc::now(),
        }
    }
}
