//! Success/failure result algebra.
//!
//! [`Outcome`] is the value every fallible front-end operation returns
//! instead of panicking. Callers branch on the variant. When an outcome
//! crosses an untyped boundary it travels as a tagged object:
//!
//! ```text
//! {"tag": "ok",      "value":  <S>}
//! {"tag": "failure", "reason": <E>}
//! ```
//!
//! [`is_ok`], [`is_failure`] and [`is_result`] validate that shape on a
//! [`serde_json::Value`]; [`Outcome::from_value`] narrows it to a typed
//! outcome.

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use super::constants::{FAILURE_TAG, OK_TAG, REASON_FIELD, TAG_FIELD, VALUE_FIELD};

/// The outcome of an operation: a success value or a failure reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<S, E> {
    /// The operation succeeded with a value.
    Ok(S),
    /// The operation failed with a reason.
    Failure(E),
}

impl<S, E> Outcome<S, E> {
    /// Wrap a success value.
    pub const fn ok(value: S) -> Self {
        Self::Ok(value)
    }

    /// Wrap a failure reason.
    pub const fn failure(reason: E) -> Self {
        Self::Failure(reason)
    }

    /// The discriminant as it appears on the wire.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Ok(_) => OK_TAG,
            Self::Failure(_) => FAILURE_TAG,
        }
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub const fn value(&self) -> Option<&S> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub const fn reason(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    pub fn into_value(self) -> Option<S> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn into_reason(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    /// Transform the success value, leaving a failure untouched.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Outcome<T, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Transform the failure reason, leaving a success untouched.
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<S, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Failure(reason) => Outcome::Failure(f(reason)),
        }
    }

    /// Chain another fallible step after a success.
    pub fn and_then<T>(self, f: impl FnOnce(S) -> Outcome<T, E>) -> Outcome<T, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Convert into a standard `Result` so `?` can be used.
    pub fn into_result(self) -> Result<S, E> {
        self.into()
    }
}

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(reason) => Self::Failure(reason),
        }
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, E> {
    fn from(outcome: Outcome<S, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Failure(reason) => Err(reason),
        }
    }
}

impl<S: Serialize, E: Serialize> Serialize for Outcome<S, E> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        state.serialize_field(TAG_FIELD, self.tag())?;
        match self {
            Self::Ok(value) => state.serialize_field(VALUE_FIELD, value)?,
            Self::Failure(reason) => state.serialize_field(REASON_FIELD, reason)?,
        }
        state.end()
    }
}

/// Wire form used to deserialize an [`Outcome`].
#[derive(Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
enum TaggedOutcome<S, E> {
    Ok { value: S },
    Failure { reason: E },
}

impl<'de, S, E> Deserialize<'de> for Outcome<S, E>
where
    S: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match TaggedOutcome::<S, E>::deserialize(deserializer)? {
            TaggedOutcome::Ok { value } => Self::Ok(value),
            TaggedOutcome::Failure { reason } => Self::Failure(reason),
        })
    }
}

/// Errors from narrowing an untyped value to an [`Outcome`].
#[derive(Debug, Error)]
pub enum OutcomeError {
    /// The value is not an object tagged `ok` or `failure`.
    #[error("Value is not an outcome: {0}")]
    NotAnOutcome(String),

    /// The tag is valid but the payload has the wrong shape.
    #[error("Invalid outcome payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl OutcomeError {
    pub fn not_an_outcome(candidate: &Value) -> Self {
        Self::NotAnOutcome(candidate.to_string())
    }
}

impl<S: DeserializeOwned, E: DeserializeOwned> Outcome<S, E> {
    /// Narrow an untyped value to a typed outcome.
    ///
    /// The shape is checked with [`is_result`] before the payload is decoded.
    pub fn from_value(candidate: Value) -> Result<Self, OutcomeError> {
        if !is_result(&candidate) {
            return Err(OutcomeError::not_an_outcome(&candidate));
        }
        Ok(serde_json::from_value(candidate)?)
    }
}

fn has_tag(candidate: &Value, tag: &str) -> bool {
    // `as_object` rejects null, primitives and arrays
    candidate
        .as_object()
        .and_then(|fields| fields.get(TAG_FIELD))
        .and_then(Value::as_str)
        == Some(tag)
}

/// Check whether an untyped value has the shape of a successful outcome.
pub fn is_ok(candidate: &Value) -> bool {
    has_tag(candidate, OK_TAG)
}

/// Check whether an untyped value has the shape of a failed outcome.
pub fn is_failure(candidate: &Value) -> bool {
    has_tag(candidate, FAILURE_TAG)
}

/// Check whether an untyped value has the shape of any outcome.
pub fn is_result(candidate: &Value) -> bool {
    is_ok(candidate) || is_failure(candidate)
}
