use serde::{Deserialize, Serialize};

/// One entry in the locally held chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}

/// Append-only transcript for one chat session. The server never sees it;
/// each request upstream is stateless. A user submission appends exactly one
/// user message up front; a reply is appended only when the request succeeds.
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            text: text.into(),
            is_user: true,
        });
    }

    pub fn push_reply(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            text: text.into(),
            is_user: false,
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorBody {
    pub error: Option<GeminiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorDetail {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_preserves_submission_order() {
        let mut transcript = ChatTranscript::new();
        transcript.push_user("how much protein should I eat?");
        transcript.push_reply("Plenty.");
        transcript.push_user("and fiber?");

        let messages = transcript.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].is_user);
        assert!(!messages[1].is_user);
        assert!(messages[2].is_user);
        assert_eq!(messages[2].text, "and fiber?");
    }

    #[test]
    fn failed_request_leaves_user_message_unanswered() {
        let mut transcript = ChatTranscript::new();
        transcript.push_user("question");
        // No reply pushed when the upstream call fails.
        assert_eq!(transcript.len(), 1);
        assert!(transcript.messages()[0].is_user);
    }

    #[test]
    fn request_serializes_with_upstream_field_names() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".into(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 800,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 800);
    }
}
