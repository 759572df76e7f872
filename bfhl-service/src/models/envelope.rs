use serde::Serialize;

/// Successful computation result, serialized as the bare `data` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Fibonacci prefix.
    Sequence(Vec<u64>),
    /// Primes kept from the input.
    Integers(Vec<i64>),
    /// LCM or HCF.
    Integer(i64),
    /// One-word AI answer.
    Answer(String),
}

/// Uniform JSON body for every `/bfhl` response.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Output>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResponseEnvelope {
    pub fn success(official_email: impl Into<String>, data: Output) -> Self {
        Self {
            is_success: true,
            official_email: Some(official_email.into()),
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: Option<String>) -> Self {
        Self {
            is_success: false,
            official_email: None,
            data: None,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let envelope = ResponseEnvelope::success("me@example.com", Output::Integers(vec![2, 7]));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"is_success": true, "official_email": "me@example.com", "data": [2, 7]})
        );
    }

    #[test]
    fn scalar_outputs_serialize_bare() {
        let integer = ResponseEnvelope::success("e", Output::Integer(12));
        let answer = ResponseEnvelope::success("e", Output::Answer("Paris".to_string()));
        assert_eq!(serde_json::to_value(&integer).unwrap()["data"], json!(12));
        assert_eq!(serde_json::to_value(&answer).unwrap()["data"], json!("Paris"));
    }

    #[test]
    fn empty_sequence_is_still_data() {
        let envelope = ResponseEnvelope::success("e", Output::Sequence(vec![]));
        assert_eq!(serde_json::to_value(&envelope).unwrap()["data"], json!([]));
    }

    #[test]
    fn failure_envelope_omits_absent_fields() {
        assert_eq!(
            serde_json::to_value(ResponseEnvelope::failure(None)).unwrap(),
            json!({"is_success": false})
        );
        assert_eq!(
            serde_json::to_value(ResponseEnvelope::failure(Some("nope".to_string()))).unwrap(),
            json!({"is_success": false, "message": "nope"})
        );
    }
}
