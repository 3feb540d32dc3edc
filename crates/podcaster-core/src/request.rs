use serde_json::Value;

use crate::error::{Field, InvalidInputError};

/// Validated podcast generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodcastRequest {
    /// Record identifier; also names the audio artifact
    pub podcast_id: String,
    /// Text to synthesize
    pub script: String,
}

impl PodcastRequest {
    /// Extract and validate the request from a runtime event
    ///
    /// The event carries the payload under `input`; an event without an
    /// object there is treated as missing both fields.
    pub fn from_event(event: &Value) -> Result<Self, InvalidInputError> {
        validate_input(event.get("input").unwrap_or(&Value::Null))
    }
}

/// Validate an untyped payload and extract `podcast_id` and `podcast_script`
///
/// Both fields must be non-empty strings. All offending fields are reported
/// together.
pub fn validate_input(input: &Value) -> Result<PodcastRequest, InvalidInputError> {
    let podcast_id = non_empty_str(input, Field::PodcastId);
    let script = non_empty_str(input, Field::PodcastScript);

    let (Some(podcast_id), Some(script)) = (podcast_id, script) else {
        tracing::error!(
            podcast_id = podcast_id.unwrap_or_default(),
            script_length = script.map_or(0, str::len),
            "missing required input parameters"
        );

        let missing = [(Field::PodcastId, podcast_id), (Field::PodcastScript, script)]
            .into_iter()
            .filter_map(|(field, value)| value.is_none().then_some(field))
            .collect();

        return Err(InvalidInputError::Missing(missing));
    };

    if !is_plain_file_stem(podcast_id) {
        tracing::error!(podcast_id, "podcast_id is not usable as a file name");
        return Err(InvalidInputError::UnsafeIdentifier(podcast_id.to_string()));
    }

    tracing::info!(
        podcast_id,
        script_length = script.chars().count(),
        "processing podcast request"
    );

    Ok(PodcastRequest {
        podcast_id: podcast_id.to_string(),
        script: script.to_string(),
    })
}

fn non_empty_str(input: &Value, field: Field) -> Option<&str> {
    input
        .get(field.as_str())
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// The identifier becomes `{id}.mp3` inside the artifact directory and the
/// object key in the bucket, so it must not escape either.
fn is_plain_file_stem(id: &str) -> bool {
    id != "." && id != ".." && !id.contains(['/', '\\', '\0'])
}
