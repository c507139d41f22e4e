//! Identifier extraction from request paths.
//!
//! [`PathId`] is the axum face of the identifier binder: it looks up
//! the kind's parameter name among the matched path parameters, runs
//! the shared binding pass, and rejects with a 400 problem document
//! carrying the recorded field errors when the value does not bind.

use axum::extract::rejection::RawPathParamsRejection;
use axum::extract::{FromRequestParts, RawPathParams};
use axum::http::request::Parts;
use storefront_id::{bind_id, BindError, BindOutcome, BindingState, Id, Kind, ValueSource};
use tracing::debug;

use crate::api::error::{ApiError, FieldError};

/// A typed identifier bound from a path parameter.
///
/// The parameter name comes from the kind (`K::PARAM`), so a route
/// like `/customers/{customer_id}` binds `PathId<CustomerKind>`.
#[derive(Debug)]
pub struct PathId<K: Kind>(pub Id<K>);

struct PathSource<'a>(&'a RawPathParams);

impl ValueSource for PathSource<'_> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| *key == name).map(|(_, v)| v)
    }
}

/// Collects the binder's per-field state for the response.
#[derive(Default)]
struct FieldState {
    visited: Vec<String>,
    errors: Vec<FieldError>,
}

impl BindingState for FieldState {
    fn mark_visited(&mut self, name: &str) {
        self.visited.push(name.to_string());
    }

    fn record_error(&mut self, name: &str, message: String) {
        self.errors.push(FieldError {
            field: name.to_string(),
            message,
        });
    }
}

impl<S, K> FromRequestParts<S> for PathId<K>
where
    S: Send + Sync,
    K: Kind,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = match RawPathParams::from_request_parts(parts, state).await {
            Ok(params) => Some(params),
            // No router context at all; treated as framework misuse,
            // not as a recordable field error.
            Err(RawPathParamsRejection::MissingPathParams(_)) => None,
            Err(err) => {
                return Err(ApiError::bad_request(
                    "invalid_path",
                    format!("path parameters could not be read: {err}"),
                ));
            }
        };

        let mut field_state = FieldState::default();
        let source = params.as_ref().map(PathSource);
        let outcome = bind_id::<K, _, _>(source.as_ref(), &mut field_state, K::PARAM);

        match outcome {
            Ok(BindOutcome::Bound(id)) => Ok(PathId(id)),
            Ok(BindOutcome::Failed) => {
                debug!(
                    kind = K::NAME,
                    param = K::PARAM,
                    visited = field_state.visited.len(),
                    errors = field_state.errors.len(),
                    "identifier binding failed"
                );
                Err(ApiError::bad_request(
                    "invalid_identifier",
                    format!("request binding failed for {}", K::NAME),
                )
                .with_details(field_state.errors))
            }
            Err(BindError::MissingContext) => Err(ApiError::internal(
                "missing_binding_context",
                format!("no binding context available for {}", K::NAME),
            )),
        }
    }
}
