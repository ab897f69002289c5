//! The solver client: one call per method endpoint, a transport seam for the
//! embedder's HTTP stack, and the failure taxonomy.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{SolverError, TransportError};

use super::{
    BisectionRequest, BisectionResponse, FixedPointRequest, FixedPointResponse,
    GaussSeidelRequest, GaussSeidelResponse, JacobiRequest, JacobiResponse, NewtonRaphsonRequest,
    NewtonRaphsonResponse, SecantRequest, SecantResponse,
};

/// The paths of the solver's endpoints, relative to whatever base URL the
/// transport is configured with.
pub mod endpoints {
    pub const BISECTION: &str = "/metodos/biseccion";
    pub const NEWTON_RAPHSON: &str = "/metodos/newton-raphson";
    pub const FIXED_POINT: &str = "/metodos/punto-fijo";
    pub const SECANT: &str = "/metodos/secante";
    pub const JACOBI: &str = "/metodos/jacobi";
    pub const GAUSS_SEIDEL: &str = "/metodos/gauss-seidel";
    pub const HEALTH: &str = "/health";
}

/// The wire seam between [SolverClient] and the embedder. Implementations
/// own the base URL and the HTTP stack; test doubles answer from memory.
pub trait Transport {
    /// POSTs a JSON body to a path and returns the decoded JSON response.
    fn post(&mut self, path: &str, body: &Value) -> Result<Value, TransportError>;

    /// GETs a path and returns the decoded JSON response.
    fn get(&mut self, path: &str) -> Result<Value, TransportError>;
}

/// Tracks whether a request is outstanding. While one is, no second request
/// may be issued: the submitting control stays disabled until the first
/// completes, successfully or not. This is the only concurrency control there
/// is - no cancellation, no retry.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct RequestGate {
    in_flight: bool,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a request as outstanding. Returns false (and changes nothing) if
    /// one already is.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    /// Marks the outstanding request as finished.
    pub fn end(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

/// A client for the remote solver. This does no transformation beyond field
/// packaging: requests serialize as-is, responses deserialize as-is, and
/// failures are classified per the taxonomy on [SolverError].
pub struct SolverClient<T: Transport> {
    transport: T,
    gate: RequestGate,
}

impl<T: Transport> SolverClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            gate: RequestGate::new(),
        }
    }

    /// Whether a solve request is outstanding on this client.
    pub fn is_busy(&self) -> bool {
        self.gate.in_flight()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn bisection(
        &mut self,
        request: &BisectionRequest,
    ) -> Result<BisectionResponse, SolverError> {
        self.solve(endpoints::BISECTION, request)
    }

    pub fn newton_raphson(
        &mut self,
        request: &NewtonRaphsonRequest,
    ) -> Result<NewtonRaphsonResponse, SolverError> {
        self.solve(endpoints::NEWTON_RAPHSON, request)
    }

    pub fn fixed_point(
        &mut self,
        request: &FixedPointRequest,
    ) -> Result<FixedPointResponse, SolverError> {
        self.solve(endpoints::FIXED_POINT, request)
    }

    pub fn secant(&mut self, request: &SecantRequest) -> Result<SecantResponse, SolverError> {
        self.solve(endpoints::SECANT, request)
    }

    pub fn jacobi(&mut self, request: &JacobiRequest) -> Result<JacobiResponse, SolverError> {
        self.solve(endpoints::JACOBI, request)
    }

    pub fn gauss_seidel(
        &mut self,
        request: &GaussSeidelRequest,
    ) -> Result<GaussSeidelResponse, SolverError> {
        self.solve(endpoints::GAUSS_SEIDEL, request)
    }

    /// Probes the service's health endpoint. The body's shape is the
    /// service's own business and is returned as-is.
    pub fn health(&mut self) -> Result<Value, SolverError> {
        if !self.gate.begin() {
            return Err(SolverError::Busy);
        }
        let result = self.transport.get(endpoints::HEALTH).map_err(classify);
        self.gate.end();
        result
    }

    fn solve<R: Serialize, P: DeserializeOwned>(
        &mut self,
        path: &str,
        request: &R,
    ) -> Result<P, SolverError> {
        if !self.gate.begin() {
            return Err(SolverError::Busy);
        }
        let result = self.dispatch(path, request);
        self.gate.end();
        result
    }

    fn dispatch<R: Serialize, P: DeserializeOwned>(
        &mut self,
        path: &str,
        request: &R,
    ) -> Result<P, SolverError> {
        let body = serde_json::to_value(request)
            .map_err(|e| SolverError::Unexpected(e.to_string()))?;

        let response = self.transport.post(path, &body).map_err(classify)?;

        // The solver reports validation failures as a `detail` message, on a
        // success status as well as on error statuses
        if let Some(detail) = response.get("detail").and_then(Value::as_str) {
            return Err(SolverError::Rejected {
                detail: detail.into(),
            });
        }

        serde_json::from_value(response).map_err(|e| SolverError::Unexpected(e.to_string()))
    }
}

/// Classifies a transport failure: a structured `detail` body is a rejection
/// to show verbatim, any other body is unexpected, and everything without a
/// body is a transport problem.
fn classify(error: TransportError) -> SolverError {
    match error {
        TransportError::Status {
            body: Some(body), ..
        } => {
            if let Some(detail) = body.get("detail").and_then(Value::as_str) {
                SolverError::Rejected {
                    detail: detail.into(),
                }
            } else {
                SolverError::Unexpected(body.to_string())
            }
        }

        error @ TransportError::Status { body: None, .. } => {
            SolverError::Transport(error.to_string())
        }

        TransportError::Network(message) => SolverError::Transport(message),
    }
}
