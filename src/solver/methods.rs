//! Request and response types for the six method endpoints.
//!
//! Field names are fixed by the backend's published schema and must not be
//! changed here; where a wire name is not a usable Rust identifier (the
//! bisection endpoint speaks Spanish, Newton-Raphson labels two columns
//! `f(x)` and `f'(x)`, the linear systems call their matrix `A`), the Rust
//! field carries a serde rename.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for the bisection method: a bracketing interval, a tolerance
/// and an iteration cap.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct BisectionRequest {
    pub equation: String,
    pub a: f64,
    pub b: f64,
    pub tol: f64,
    pub max_iter: u32,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct BisectionResponse {
    #[serde(rename = "raiz")]
    pub root: Option<f64>,
    #[serde(rename = "iteraciones")]
    pub iterations: Option<u32>,
    #[serde(rename = "mensaje")]
    pub message: Option<String>,
    #[serde(rename = "pasos", default)]
    pub steps: Vec<BisectionStep>,
}

/// One row of the bisection iteration table.
#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct BisectionStep {
    #[serde(rename = "iteracion")]
    pub iteration: u32,
    #[serde(rename = "punto_a")]
    pub a: f64,
    #[serde(rename = "punto_b")]
    pub b: f64,
    #[serde(rename = "punto_medio")]
    pub midpoint: f64,
    #[serde(rename = "error_porcentual")]
    pub percent_error: Option<f64>,
}

/// Parameters for Newton-Raphson: a single starting point.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct NewtonRaphsonRequest {
    pub equation: String,
    pub x0: f64,
    pub tolerance: f64,
    pub max_iterations: u32,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct NewtonRaphsonResponse {
    pub root: Option<f64>,
    pub converged: bool,
    pub iterations: Option<u32>,
    pub message: Option<String>,
    #[serde(default)]
    pub all_iterations: Vec<NewtonRaphsonStep>,
}

/// One row of the Newton-Raphson iteration table.
#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct NewtonRaphsonStep {
    pub iteration: u32,
    pub x: f64,
    #[serde(rename = "f(x)")]
    pub fx: Option<f64>,
    #[serde(rename = "f'(x)")]
    pub dfx: Option<f64>,
    pub next_x: f64,
    pub error: Option<f64>,
}

/// Parameters for fixed-point iteration. The solver wants both the original
/// equation and the rearranged iteration function `g`.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct FixedPointRequest {
    pub equation: String,
    pub g_function: String,
    pub initial_x: f64,
    pub tolerance: f64,
    pub max_iterations: u32,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct FixedPointResponse {
    pub root: Option<f64>,
    pub converged: bool,
    pub message: Option<String>,
    pub error: Option<f64>,
    /// Unlike the other root-finding methods, this endpoint's `iterations`
    /// field is the trace itself rather than a count.
    #[serde(default)]
    pub iterations: Vec<FixedPointStep>,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct FixedPointStep {
    pub iteration: u32,
    pub x_value: f64,
    pub error: Option<f64>,
}

/// Parameters for the secant method: two starting points.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct SecantRequest {
    pub equation: String,
    pub x0: f64,
    pub x1: f64,
    pub tolerance: f64,
    pub max_iterations: u32,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct SecantResponse {
    pub root: Option<f64>,
    pub converged: bool,
    pub iterations: Option<u32>,
    pub message: Option<String>,
    #[serde(default)]
    pub all_iterations: Vec<SecantStep>,
}

/// One row of the secant iteration table.
#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct SecantStep {
    pub iteration: u32,
    pub x_prev: f64,
    pub x_curr: f64,
    pub x_next: f64,
    pub f_prev: Option<f64>,
    pub f_curr: Option<f64>,
    pub error: Option<f64>,
}

/// Parameters for the Jacobi method: a square system `Ax = b`.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct JacobiRequest {
    #[serde(rename = "A")]
    pub matrix: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    pub initial_guess: Vec<f64>,
    pub tolerance: f64,
    pub max_iterations: u32,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct JacobiResponse {
    pub converged: bool,
    pub solution: Option<Vec<f64>>,
    pub iterations: Option<u32>,
    pub error: Option<f64>,
    #[serde(default)]
    pub warnings: Vec<String>,
    /// An open map of diagnostics (spectral radius, diagonal dominance and so
    /// on), rendered verbatim by the presentation layer.
    pub convergence_details: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    pub iteration_history: Vec<JacobiStep>,
}

/// One row of the Jacobi iteration table. The row number is its position in
/// the history.
#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct JacobiStep {
    pub values: Vec<f64>,
    pub error: Option<f64>,
}

/// Parameters for Gauss-Seidel: a square system `Ax = b`. The starting vector
/// field is named differently from Jacobi's on the wire.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct GaussSeidelRequest {
    #[serde(rename = "A")]
    pub matrix: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    pub x0: Vec<f64>,
    pub tolerance: f64,
    pub max_iterations: u32,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct GaussSeidelResponse {
    pub converged: bool,
    pub solution: Option<Vec<f64>>,
    pub iterations: Option<u32>,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub convergence_details: Option<BTreeMap<String, Value>>,
    pub comparison_with_jacobi: Option<JacobiComparison>,
    #[serde(default)]
    pub iteration_history: Vec<GaussSeidelStep>,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct GaussSeidelStep {
    pub iteration: u32,
    pub solution: Vec<f64>,
    pub error: Option<f64>,
}

/// The Gauss-Seidel endpoint's comparison against Jacobi on the same system.
#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct JacobiComparison {
    pub jacobi_spectral_radius: Option<f64>,
    pub gauss_seidel_spectral_radius: Option<f64>,
    pub estimated_speedup: Option<f64>,
    pub conclusion: Option<String>,
}
