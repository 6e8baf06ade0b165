use crate::config::Config;
use crate::errors::ApiError;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::{config::OpenAIConfig, Client as OpenAIClient};
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;

/// A text-completion backend the post pipeline can talk to.
pub trait Agent {
    fn name(&self) -> String;
    fn system_message(&self) -> String;

    /// Send a single instruction and return the raw completion text.
    async fn prompt(&self, input: &str) -> Result<String, ApiError>;
}

/// Writes social posts through an OpenAI-compatible chat completion API.
#[derive(Clone)]
pub struct PostWriter {
    system: Option<String>,
    model: String,
    client: OpenAIClient<OpenAIConfig>,
}

impl PostWriter {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut openai_config = OpenAIConfig::new().with_api_key(&config.api_key);
        if let Some(base) = &config.api_base {
            openai_config = openai_config.with_api_base(base);
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        // One attempt per submission; a failure goes straight to the offline tier.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = OpenAIClient::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(no_retry);

        Ok(Self {
            system: None,
            model: config.model.clone(),
            client,
        })
    }

    /// Replace the default research-agent persona.
    pub fn with_system_message(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Agent for PostWriter {
    fn name(&self) -> String {
        "PostWriter".to_string()
    }

    fn system_message(&self) -> String {
        if let Some(message) = &self.system {
            message.to_owned()
        } else {
            "You are an advanced AI research agent powered by Google DeepMind and Gemini technologies.

        You write social media posts for LinkedIn and X (formerly Twitter).
        Make the content engaging, professional, and relevant to the topic. Include appropriate hashtags and emojis where suitable.
        Always answer with the JSON object you are asked for and nothing else.
        ".to_string()
        }
    }

    async fn prompt(&self, input: &str) -> Result<String, ApiError> {
        let res = self
            .client
            .chat()
            .create(
                CreateChatCompletionRequestArgs::default()
                    .model(&self.model)
                    .messages(vec![
                        ChatCompletionRequestMessage::System(
                            ChatCompletionRequestSystemMessageArgs::default()
                                .content(self.system_message())
                                .build()?,
                        ),
                        ChatCompletionRequestMessage::User(
                            ChatCompletionRequestUserMessageArgs::default()
                                .content(input)
                                .build()?,
                        ),
                    ])
                    .build()?,
            )
            .await?;

        let content = res
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ApiError::EmptyCompletion)?;

        tracing::debug!(
            agent = %self.name(),
            model = %self.model,
            chars = content.chars().count(),
            "retrieved completion"
        );

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    #[test]
    fn default_system_message_asks_for_json() {
        let writer = PostWriter::new(&Config::new("sk-test")).unwrap();
        assert!(writer.system_message().contains("JSON"));
        assert_eq!(writer.model(), "gpt-4o");
    }

    #[test]
    fn custom_system_message() {
        let writer = PostWriter::new(&Config::new("sk-test"))
            .unwrap()
            .with_system_message("Be brief.");
        assert_eq!(writer.system_message(), "Be brief.");
    }

    /// Serve every request with the given status and body, counting hits.
    async fn serve_status(status: &'static str, body: &'static str) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                read_request(&mut socket).await;
                counter.fetch_add(1, Ordering::SeqCst);
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{addr}/v1"), hits)
    }

    /// Read headers and the declared body so the client sees a clean exchange.
    async fn read_request(socket: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => n,
            };
            buf.extend_from_slice(&chunk[..n]);

            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let body_len = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|len| len.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                return;
            }
        }
    }

    fn writer_for(api_base: String) -> PostWriter {
        let mut config = Config::new("sk-test");
        config.api_base = Some(api_base);
        config.request_timeout = Duration::from_secs(5);
        PostWriter::new(&config).unwrap()
    }

    const RATE_LIMITED: &str = r#"{"error":{"message":"Rate limit reached","type":"requests","param":null,"code":"rate_limit_exceeded"}}"#;
    const SERVER_ERROR: &str = r#"{"error":{"message":"The server had an error","type":"server_error","param":null,"code":null}}"#;

    #[tokio::test]
    async fn rate_limited_call_is_attempted_once() {
        let (base, hits) = serve_status("429 Too Many Requests", RATE_LIMITED).await;
        let writer = writer_for(base);

        let result = tokio::time::timeout(Duration::from_secs(8), writer.prompt("hi"))
            .await
            .expect("rate-limited call should fail fast");

        assert!(matches!(result, Err(ApiError::OpenAI(_))));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn server_error_is_attempted_once() {
        let (base, hits) = serve_status("500 Internal Server Error", SERVER_ERROR).await;
        let writer = writer_for(base);

        let result = tokio::time::timeout(Duration::from_secs(8), writer.prompt("hi"))
            .await
            .expect("server error should fail fast");

        assert!(result.is_err());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rate_limited_submission_uses_offline_posts_after_one_call() {
        let (base, hits) = serve_status("429 Too Many Requests", RATE_LIMITED).await;
        let writer = writer_for(base);

        let generation = tokio::time::timeout(
            Duration::from_secs(8),
            crate::pipeline::generate(&writer, "edge caching"),
        )
        .await
        .expect("generation should fall back fast");

        assert_eq!(generation.source, crate::pipeline::PostSource::Offline);
        assert!(generation.posts.linkedin.content.contains("edge caching"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        let mut config = Config::new("sk-test");
        config.api_base = Some("http://127.0.0.1:9/v1".to_string());
        config.request_timeout = std::time::Duration::from_secs(2);

        let writer = PostWriter::new(&config).unwrap();
        let result = writer.prompt("hello").await;
        assert!(matches!(result, Err(ApiError::OpenAI(_))));
    }
}
