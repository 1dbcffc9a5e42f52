//! Main-content generation: summary plus quiz questions.

use edvid_models::MainContent;
use tracing::info;

use crate::chat::{ChatClient, ChatMessage, ContentPart};
use crate::error::LlmResult;
use crate::extract::parse_json_response;

/// Model used for content generation.
const CONTENT_MODEL: &str = "gpt-4o-mini";

/// Generate a summary and question set from retrieved document context.
pub async fn generate_main_content(chat: &ChatClient, context: &str) -> LlmResult<MainContent> {
    let messages = [
        ChatMessage::system(
            "You are an expert educational content creator. Generate summary and questions in JSON.",
        ),
        ChatMessage::user(vec![ContentPart::text(content_prompt(context))]),
    ];

    let response = chat.complete(CONTENT_MODEL, &messages).await?;
    let content: MainContent = parse_json_response(&response)?;

    info!(
        "Generated main content: {} questions",
        content.questions.len()
    );
    Ok(content)
}

fn content_prompt(context: &str) -> String {
    format!(
        "Given the following context from educational materials, generate:\n\
         1. A concise summary (2-4 sentences).\n\
         2. 2-4 questions (some written, some MCQ with options and answers) that test \
         understanding of the material. Generate 10 flashcard-style questions, with a question \
         and answer pair, and specify as 'flashcard'.\n\
         Format your output as JSON with a 'summary' field and a 'questions' array. Each \
         question should have: id, type ('written' or 'mcq' or 'flashcard'), question, options \
         (if mcq), answer. Answer should be there for all question types. Output only the JSON \
         and nothing else.\n\
         Context: {}",
        context
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_main_content() {
        let server = MockServer::start().await;
        let body = "```json\n{\"summary\": \"S\", \"questions\": [\
                    {\"id\": 1, \"type\": \"flashcard\", \"question\": \"Q\", \"answer\": \"A\"}\
                    ]}\n```";
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": body}}]
            })))
            .mount(&server)
            .await;

        let chat = ChatClient::new("k").with_base_url(server.uri());
        let content = generate_main_content(&chat, "the chain rule").await.unwrap();
        assert_eq!(content.summary, "S");
        assert_eq!(content.questions.len(), 1);
    }

    #[test]
    fn test_prompt_includes_context() {
        let prompt = content_prompt("Newton's laws");
        assert!(prompt.contains("Newton's laws"));
        assert!(prompt.contains("'flashcard'"));
    }
}
