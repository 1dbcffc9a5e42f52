//! Narration-script generation from sampled frames.

use base64::Engine;
use edvid_models::NarrationScript;
use tracing::info;

use crate::chat::{ChatClient, ChatMessage, ContentPart};
use crate::error::LlmResult;
use crate::extract::parse_json_response;

/// Model used for vision scripting.
const NARRATION_MODEL: &str = "gpt-4o";

/// A sampled frame handed to the narration generator.
#[derive(Debug, Clone)]
pub struct NarrationFrame {
    /// Source-video time of the frame in seconds.
    pub timestamp: f64,
    /// JPEG-encoded image bytes.
    pub jpeg: Vec<u8>,
}

/// Ask the vision model for a timestamped narration script.
///
/// The frame sequence may be empty; the model call is still issued. The
/// response must contain a JSON object with a `narration` array of
/// `{timestamp, dialogue}` entries, possibly wrapped in fences or prose.
pub async fn generate_narration(
    chat: &ChatClient,
    topic: &str,
    frames: &[NarrationFrame],
) -> LlmResult<NarrationScript> {
    info!(
        "Requesting narration script: topic={:?}, frames={}",
        topic,
        frames.len()
    );

    let mut content = vec![ContentPart::text(scripting_instructions(topic))];

    let b64 = base64::engine::general_purpose::STANDARD;
    for frame in frames {
        content.push(ContentPart::text(format!(
            "Frame at timestamp: {:.2} seconds",
            frame.timestamp
        )));
        content.push(ContentPart::jpeg_data_url(&b64.encode(&frame.jpeg)));
    }

    let messages = [ChatMessage::user(content)];
    let response = chat.complete(NARRATION_MODEL, &messages).await?;

    let script: NarrationScript = parse_json_response(&response)?;
    info!("Narration script has {} lines", script.narration.len());
    Ok(script)
}

fn scripting_instructions(topic: &str) -> String {
    format!(
        "You are an expert scriptwriter for educational videos. Your task is to create a \
         narration script for a video about '{}'. I will provide you with a series of frames \
         from the video, each with its exact timestamp. Your script should be engaging, clear, \
         and synchronized with the visuals. The dialogue must follow whatever the video is \
         currently showing or explaining. Please output the script as a JSON object with a \
         'narration' key, which is a list of objects, each with 'timestamp' and 'dialogue'. \
         Ensure the timestamps in your output correspond to the ones I provide. \
         Here are the frames:",
        topic
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn chat_response(content: &str) -> serde_json::Value {
        serde_json::json!({"choices": [{"message": {"content": content}}]})
    }

    #[tokio::test]
    async fn test_fenced_script_parses() {
        let server = MockServer::start().await;
        let fenced = "```json\n{\"narration\": [{\"timestamp\": 0, \"dialogue\": \"Hi\"}]}\n```";
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(fenced)))
            .mount(&server)
            .await;

        let chat = ChatClient::new("k").with_base_url(server.uri());
        let script = generate_narration(&chat, "algebra", &[]).await.unwrap();
        assert_eq!(script.narration.len(), 1);
        assert_eq!(script.narration[0].dialogue, "Hi");
    }

    #[tokio::test]
    async fn test_prose_wrapped_script_parses() {
        let server = MockServer::start().await;
        let wrapped =
            "Sure! Here is the script:\n{\"narration\": [{\"timestamp\": 2.5, \"dialogue\": \"A\"}]}\nEnjoy.";
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(wrapped)))
            .mount(&server)
            .await;

        let chat = ChatClient::new("k").with_base_url(server.uri());
        let script = generate_narration(&chat, "algebra", &[]).await.unwrap();
        assert!((script.narration[0].timestamp - 2.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_missing_narration_field_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(chat_response("{\"scenes\": []}")),
            )
            .mount(&server)
            .await;

        let chat = ChatClient::new("k").with_base_url(server.uri());
        let err = generate_narration(&chat, "algebra", &[]).await.unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_narration_not_a_sequence_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_response("{\"narration\": \"hello\"}")),
            )
            .mount(&server)
            .await;

        let chat = ChatClient::new("k").with_base_url(server.uri());
        let err = generate_narration(&chat, "algebra", &[]).await.unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }
}
