//! Request-value binding for identifiers.
//!
//! Binds a named raw value from an inbound request source (route,
//! query, form) to a typed identifier. Rejections are recovered into
//! the host's per-field error channel so one pass can report several
//! bad fields; only a missing binding context — framework misuse —
//! fails hard.

use std::collections::HashMap;

use thiserror::Error;

use crate::identifier::{Id, Kind};

/// A named-value lookup capability over an inbound request.
pub trait ValueSource {
    /// Looks up the raw text for `name`, if the source carries it.
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl ValueSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// The host's per-field state tracking for one binding pass.
///
/// Every field the binder touches is marked visited, success or not,
/// so the host's error-aggregation machinery can find the recorded
/// errors afterwards.
pub trait BindingState {
    /// Marks `name` as visited by the binder.
    fn mark_visited(&mut self, name: &str);

    /// Records one field error against `name`.
    fn record_error(&mut self, name: &str, message: String);
}

/// Fatal binding failures. These indicate adapter or framework misuse
/// and are never recovered into field errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The binding context itself was absent.
    #[error("binding context is missing")]
    MissingContext,
}

/// Outcome of one non-fatal binding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome<T> {
    /// The field bound to a populated identifier.
    Bound(T),
    /// The field did not bind; the reason was recorded as a field
    /// error on the binding state.
    Failed,
}

impl<T> BindOutcome<T> {
    /// Returns the bound value, if any.
    pub fn into_bound(self) -> Option<T> {
        match self {
            BindOutcome::Bound(value) => Some(value),
            BindOutcome::Failed => None,
        }
    }
}

/// Binds the named field to an identifier of kind `K`.
///
/// `source` is `None` only when the caller has no binding context at
/// all, which is misuse and fails with [`BindError::MissingContext`].
/// All other rejections mark the field visited, record exactly one
/// field error naming the kind (echoing the raw input where there was
/// any), and return [`BindOutcome::Failed`].
///
/// Textual nil rejects here just as it does in
/// [`Id::parse`](crate::Id::parse); the two boundaries share one
/// policy.
pub fn bind_id<K, S, B>(
    source: Option<&S>,
    state: &mut B,
    name: &str,
) -> Result<BindOutcome<Id<K>>, BindError>
where
    K: Kind,
    S: ValueSource + ?Sized,
    B: BindingState + ?Sized,
{
    let Some(source) = source else {
        return Err(BindError::MissingContext);
    };

    let Some(raw) = source.lookup(name) else {
        state.mark_visited(name);
        state.record_error(name, format!("a value is required for {}", K::NAME));
        return Ok(BindOutcome::Failed);
    };

    if raw.trim().is_empty() {
        state.mark_visited(name);
        state.record_error(name, format!("value cannot be empty for {}", K::NAME));
        return Ok(BindOutcome::Failed);
    }

    match Id::<K>::parse(raw) {
        Ok(id) => {
            state.mark_visited(name);
            Ok(BindOutcome::Bound(id))
        }
        Err(err) if err.is_nil_rejection() => {
            state.mark_visited(name);
            state.record_error(
                name,
                format!("'{raw}' must not be the nil UUID for {}", K::NAME),
            );
            Ok(BindOutcome::Failed)
        }
        Err(_) => {
            state.mark_visited(name);
            state.record_error(name, format!("'{raw}' is not a valid {}", K::NAME));
            Ok(BindOutcome::Failed)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CustomerId;

    const NIL_TEXT: &str = "00000000-0000-0000-0000-000000000000";

    #[derive(Default)]
    struct RecordingState {
        visited: Vec<String>,
        errors: Vec<(String, String)>,
    }

    impl BindingState for RecordingState {
        fn mark_visited(&mut self, name: &str) {
            self.visited.push(name.to_string());
        }

        fn record_error(&mut self, name: &str, message: String) {
            self.errors.push((name.to_string(), message));
        }
    }

    fn source(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn binds_a_valid_guid_with_no_errors() {
        let id = CustomerId::new();
        let source = source(&[("testField", &id.to_string())]);
        let mut state = RecordingState::default();

        let outcome: BindOutcome<CustomerId> =
            bind_id(Some(&source), &mut state, "testField").unwrap();

        assert_eq!(outcome, BindOutcome::Bound(id));
        assert_eq!(outcome.into_bound(), Some(id));
        assert_eq!(state.visited, vec!["testField"]);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn missing_context_fails_fatally() {
        let mut state = RecordingState::default();
        let result: Result<BindOutcome<CustomerId>, _> =
            bind_id(None::<&HashMap<String, String>>, &mut state, "testField");

        assert_eq!(result, Err(BindError::MissingContext));
        assert!(state.visited.is_empty());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn absent_value_records_required_error() {
        let source = source(&[]);
        let mut state = RecordingState::default();

        let outcome: BindOutcome<CustomerId> =
            bind_id(Some(&source), &mut state, "testField").unwrap();

        assert_eq!(outcome, BindOutcome::Failed);
        assert_eq!(state.visited, vec!["testField"]);
        assert_eq!(state.errors.len(), 1);
        assert!(state.errors[0].1.contains("required"));
        assert!(state.errors[0].1.contains("Customer"));
    }

    #[test]
    fn blank_value_records_empty_error() {
        for raw in ["", "   "] {
            let source = source(&[("testField", raw)]);
            let mut state = RecordingState::default();

            let outcome: BindOutcome<CustomerId> =
                bind_id(Some(&source), &mut state, "testField").unwrap();

            assert_eq!(outcome, BindOutcome::Failed);
            assert_eq!(state.visited, vec!["testField"]);
            assert_eq!(state.errors.len(), 1);
            assert!(state.errors[0].1.contains("cannot be empty"));
        }
    }

    #[test]
    fn malformed_value_records_error_echoing_the_input() {
        let source = source(&[("testField", "invalid-guid")]);
        let mut state = RecordingState::default();

        let outcome: BindOutcome<CustomerId> =
            bind_id(Some(&source), &mut state, "testField").unwrap();

        assert_eq!(outcome, BindOutcome::Failed);
        assert_eq!(state.visited, vec!["testField"]);
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.errors[0].0, "testField");
        assert!(state.errors[0].1.contains("invalid-guid"));
    }

    #[test]
    fn nil_guid_records_nil_error() {
        let source = source(&[("testField", NIL_TEXT)]);
        let mut state = RecordingState::default();

        let outcome: BindOutcome<CustomerId> =
            bind_id(Some(&source), &mut state, "testField").unwrap();

        assert_eq!(outcome, BindOutcome::Failed);
        assert_eq!(state.errors.len(), 1);
        assert!(state.errors[0].1.contains("nil UUID"));
        assert!(state.errors[0].1.contains(NIL_TEXT));
    }

    #[test]
    fn every_rejection_still_marks_the_field_visited() {
        for raw in ["", "junk", NIL_TEXT] {
            let source = source(&[("f", raw)]);
            let mut state = RecordingState::default();
            let _: BindOutcome<CustomerId> = bind_id(Some(&source), &mut state, "f").unwrap();
            assert_eq!(state.visited, vec!["f"], "input {raw:?} skipped visit");
        }
    }
}
