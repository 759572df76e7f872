use crate::error::DispatchError;
use crate::services::numeric::{as_integer, MAX_FIBONACCI_TERMS};
use serde_json::Value;
use std::fmt;

/// The five request kinds, keyed by their JSON field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Fibonacci,
    Prime,
    Lcm,
    Hcf,
    Ai,
}

impl Variant {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "fibonacci" => Some(Variant::Fibonacci),
            "prime" => Some(Variant::Prime),
            "lcm" => Some(Variant::Lcm),
            "hcf" => Some(Variant::Hcf),
            "AI" => Some(Variant::Ai),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Fibonacci => "fibonacci",
            Variant::Prime => "prime",
            Variant::Lcm => "lcm",
            Variant::Hcf => "hcf",
            Variant::Ai => "AI",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `/bfhl` body whose shape and payload have been validated.
#[derive(Debug, Clone, PartialEq)]
pub enum BfhlRequest {
    Fibonacci(usize),
    /// Raw elements; non-integers are dropped when filtering.
    Prime(Vec<Value>),
    Lcm(Vec<i64>),
    Hcf(Vec<i64>),
    /// Trimmed, non-empty question.
    Ai(String),
}

impl BfhlRequest {
    /// Validate an untyped body: exactly one recognised key with a payload
    /// of the right type.
    pub fn parse(body: &Value) -> Result<Self, DispatchError> {
        let object = body.as_object().ok_or(DispatchError::MalformedRequest)?;
        if object.len() != 1 {
            return Err(DispatchError::MalformedRequest);
        }

        let Some((key, payload)) = object.iter().next() else {
            return Err(DispatchError::MalformedRequest);
        };
        let variant = Variant::from_key(key).ok_or(DispatchError::MalformedRequest)?;

        match variant {
            Variant::Fibonacci => {
                let n = as_integer(payload)
                    .filter(|n| *n >= 0)
                    .ok_or_else(|| invalid("fibonacci must be a non-negative integer"))?;
                let n = usize::try_from(n)
                    .ok()
                    .filter(|n| *n <= MAX_FIBONACCI_TERMS)
                    .ok_or_else(|| {
                        DispatchError::InvalidPayload(format!(
                            "fibonacci must not exceed {}",
                            MAX_FIBONACCI_TERMS
                        ))
                    })?;
                Ok(BfhlRequest::Fibonacci(n))
            }
            Variant::Prime => payload
                .as_array()
                .map(|values| BfhlRequest::Prime(values.clone()))
                .ok_or_else(|| invalid("prime must be an array of integers")),
            Variant::Lcm => {
                integer_list(payload, "lcm must be a non-empty array of integers")
                    .map(BfhlRequest::Lcm)
            }
            Variant::Hcf => {
                integer_list(payload, "hcf must be a non-empty array of integers")
                    .map(BfhlRequest::Hcf)
            }
            Variant::Ai => payload
                .as_str()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(|q| BfhlRequest::Ai(q.to_string()))
                .ok_or_else(|| invalid("AI must be a non-empty string")),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            BfhlRequest::Fibonacci(_) => Variant::Fibonacci,
            BfhlRequest::Prime(_) => Variant::Prime,
            BfhlRequest::Lcm(_) => Variant::Lcm,
            BfhlRequest::Hcf(_) => Variant::Hcf,
            BfhlRequest::Ai(_) => Variant::Ai,
        }
    }
}

fn invalid(message: &str) -> DispatchError {
    DispatchError::InvalidPayload(message.to_string())
}

fn integer_list(payload: &Value, message: &str) -> Result<Vec<i64>, DispatchError> {
    let values = payload
        .as_array()
        .filter(|values| !values.is_empty())
        .ok_or_else(|| invalid(message))?;

    values
        .iter()
        .map(|v| as_integer(v).ok_or_else(|| invalid(message)))
        .collect()
}
