//! LLM client for SQL generation

use crate::config::{LlmProvider, NlqConfig};
use crate::nlq::{NlqError, NlqResult, DEFAULT_SYSTEM_PROMPT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct NlqClient {
    client: Client,
    config: NlqConfig,
    api_base_url: String,
}

impl NlqClient {
    pub fn new(config: &NlqConfig) -> NlqResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| NlqError::Config(e.to_string()))?;

        let api_base_url = config.api_base_url.clone().unwrap_or_else(|| {
            match config.provider {
                LlmProvider::OpenAI => "https://api.openai.com/v1".to_string(),
                LlmProvider::Ollama => "http://localhost:11434".to_string(),
                LlmProvider::Gemini => {
                    "https://generativelanguage.googleapis.com/v1beta".to_string()
                }
            }
        });

        Ok(Self {
            client,
            config: config.clone(),
            api_base_url,
        })
    }

    fn system_prompt(&self) -> String {
        self.config
            .system_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string())
    }

    pub async fn generate_sql(&self, question: &str) -> NlqResult<String> {
        match self.config.provider {
            LlmProvider::OpenAI => self.openai_chat(question).await,
            LlmProvider::Ollama => self.ollama_chat(question).await,
            LlmProvider::Gemini => self.gemini_chat(question).await,
        }
    }

    async fn openai_chat(&self, question: &str) -> NlqResult<String> {
        #[derive(Serialize)]
        struct Message {
            role: String,
            content: String,
        }

        #[derive(Serialize)]
        struct Request<'a> {
            model: &'a str,
            messages: Vec<Message>,
            temperature: f32,
        }

        #[derive(Deserialize)]
        struct Response {
            choices: Vec<Choice>,
        }

        #[derive(Deserialize)]
        struct Choice {
            message: MessageContent,
        }

        #[derive(Deserialize)]
        struct MessageContent {
            content: String,
        }

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| NlqError::Config("OpenAI requires an API key".to_string()))?;

        let url = format!("{}/chat/completions", self.api_base_url);
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&Request {
                model: &self.config.model,
                messages: vec![
                    Message {
                        role: "system".to_string(),
                        content: self.system_prompt(),
                    },
                    Message {
                        role: "user".to_string(),
                        content: question.to_string(),
                    },
                ],
                temperature: 0.0,
            })
            .send()
            .await
            .map_err(|e| NlqError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(NlqError::Api(format!("OpenAI error: {}", resp.status())));
        }

        let result: Response = resp
            .json()
            .await
            .map_err(|e| NlqError::Serialization(e.to_string()))?;
        Ok(result
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default())
    }

    async fn ollama_chat(&self, question: &str) -> NlqResult<String> {
        #[derive(Serialize)]
        struct Request<'a> {
            model: &'a str,
            prompt: String,
            system: String,
            stream: bool,
        }

        #[derive(Deserialize)]
        struct Response {
            response: String,
        }

        let url = format!("{}/api/generate", self.api_base_url);
        let resp = self
            .client
            .post(&url)
            .json(&Request {
                model: &self.config.model,
                prompt: question.to_string(),
                system: self.system_prompt(),
                stream: false,
            })
            .send()
            .await
            .map_err(|e| NlqError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(NlqError::Api(format!("Ollama error: {}", resp.status())));
        }

        let result: Response = resp
            .json()
            .await
            .map_err(|e| NlqError::Serialization(e.to_string()))?;
        Ok(result.response)
    }

    async fn gemini_chat(&self, question: &str) -> NlqResult<String> {
        #[derive(Serialize)]
        struct Request {
            contents: Vec<Content>,
            #[serde(rename = "generationConfig")]
            generation_config: GenerationConfig,
        }

        #[derive(Serialize, Deserialize)]
        struct Content {
            role: Option<String>,
            parts: Vec<Part>,
        }

        #[derive(Serialize, Deserialize)]
        struct Part {
            text: String,
        }

        #[derive(Serialize)]
        struct GenerationConfig {
            temperature: f32,
        }

        #[derive(Deserialize)]
        struct Response {
            candidates: Option<Vec<Candidate>>,
        }

        #[derive(Deserialize)]
        struct Candidate {
            content: Content,
        }

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| NlqError::Config("Gemini requires an API key".to_string()))?;

        // Gemini v1beta has no dedicated system role; prepend the instruction
        let full_prompt = format!("{}\n\nQuestion: {}", self.system_prompt(), question);

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base_url, self.config.model, api_key
        );

        let resp = self
            .client
            .post(&url)
            .json(&Request {
                contents: vec![Content {
                    role: Some("user".to_string()),
                    parts: vec![Part { text: full_prompt }],
                }],
                generation_config: GenerationConfig { temperature: 0.0 },
            })
            .send()
            .await
            .map_err(|e| NlqError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(NlqError::Api(format!("Gemini error: {}", text)));
        }

        let result: Response = resp
            .json()
            .await
            .map_err(|e| NlqError::Serialization(e.to_string()))?;

        if let Some(candidates) = result.candidates {
            if let Some(first) = candidates.first() {
                if let Some(part) = first.content.parts.first() {
                    return Ok(part.text.clone());
                }
            }
        }

        Ok(String::new())
    }
}
