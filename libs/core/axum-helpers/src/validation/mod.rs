//! Declarative request validation.
//!
//! A request type lists its constraints as a static table of [`FieldRule`]s.
//! Each rule names a field, where it comes from (path or JSON body) and an
//! ordered list of [`Check`]s. [`validate`] runs every check of every rule and
//! collects all failures, so a client sees each problem in one response.
//!
//! ```rust
//! use axum_helpers::validation::{Check, FieldRule, RequestInput, rules, validate};
//! use serde_json::json;
//!
//! static RULES: &[FieldRule] = &[FieldRule::body(
//!     "price",
//!     &[
//!         Check::new(rules::is_numeric, "Price must be a number"),
//!         Check::new(rules::is_positive, "Price must be greater than 0"),
//!     ],
//! )];
//!
//! let input = RequestInput::from_body(json!({ "price": -1 }));
//! let errors = validate(RULES, &input).unwrap_err();
//! assert_eq!(errors[0].message, "Price must be greater than 0");
//! ```

pub mod rules;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Where a validated field is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Path,
    Body,
}

/// A predicate over a possibly missing value
pub type Predicate = fn(Option<&Value>) -> bool;

/// One predicate with the message reported when it fails
#[derive(Clone, Copy)]
pub struct Check {
    pub test: Predicate,
    pub message: &'static str,
}

impl Check {
    pub const fn new(test: Predicate, message: &'static str) -> Self {
        Self { test, message }
    }
}

/// Constraints on a single request field
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub source: Source,
    pub checks: &'static [Check],
}

impl FieldRule {
    pub const fn path(field: &'static str, checks: &'static [Check]) -> Self {
        Self {
            field,
            source: Source::Path,
            checks,
        }
    }

    pub const fn body(field: &'static str, checks: &'static [Check]) -> Self {
        Self {
            field,
            source: Source::Body,
            checks,
        }
    }
}

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field
    #[schema(example = "price")]
    pub field: String,
    /// What is wrong with it
    #[schema(example = "Price must be greater than 0")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Raw request data that rules are evaluated against.
///
/// Path parameters are kept as JSON strings so checks see one value type
/// regardless of where a field came from.
#[derive(Debug, Clone)]
pub struct RequestInput {
    path: Map<String, Value>,
    body: Value,
}

impl RequestInput {
    pub fn new(path: HashMap<String, String>, body: Value) -> Self {
        Self {
            path: path
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect(),
            body,
        }
    }

    pub fn from_body(body: Value) -> Self {
        Self::new(HashMap::new(), body)
    }

    /// Look up a field; `None` when absent or when the body is not an object
    pub fn get(&self, source: Source, field: &str) -> Option<&Value> {
        match source {
            Source::Path => self.path.get(field),
            Source::Body => self.body.get(field),
        }
    }
}

impl Default for RequestInput {
    fn default() -> Self {
        Self::from_body(Value::Object(Map::new()))
    }
}

/// Run every check in `rules` against `input`.
///
/// Failures are returned in rule order, then check order within a rule.
pub fn validate(rules: &[FieldRule], input: &RequestInput) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = rules
        .iter()
        .flat_map(|rule| {
            let value = input.get(rule.source, rule.field);
            rule.checks
                .iter()
                .filter(move |check| !(check.test)(value))
                .map(move |check| FieldError::new(rule.field, check.message))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
