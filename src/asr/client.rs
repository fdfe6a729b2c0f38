use async_trait::async_trait;
use tracing::{debug, error};

use super::interface::ASRInterface;
use super::payload::asr_payload;
use super::response::Recognition;
use crate::config_manager::ASRConfig;
use crate::errors::Result;
use crate::pipeline_service::Transport;

/// ASR client that sends one pipeline request per recognition
pub struct ASRClient<T> {
    transport: T,
    asr_config: ASRConfig,
}

impl<T: Transport> ASRClient<T> {
    /// Create a new ASR client
    pub fn new(transport: T, asr_config: ASRConfig) -> Self {
        Self {
            transport,
            asr_config,
        }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Recognize speech in base64-encoded audio.
    ///
    /// Transport failures come back unchanged; a body without
    /// `pipelineResponse[0].output[0].source` is an invalid-response error.
    pub async fn recognize(&self, source_lang: &str, base64_audio: &str) -> Result<String> {
        let payload = asr_payload(&self.asr_config, source_lang, base64_audio)?;

        let body = self.transport.post(&payload).await.map_err(|e| {
            error!("Error in response: {}", e);
            e
        })?;

        let recognition = Recognition::from(body);
        match &recognition {
            Recognition::Success { text } => {
                debug!("ASR recognized {} chars for {}", text.len(), source_lang);
            }
            Recognition::Invalid(reason) => {
                error!("Error in response: invalid response structure: {}", reason);
            }
        }
        recognition.into_result()
    }
}

#[async_trait]
impl<T: Transport> ASRInterface for ASRClient<T> {
    async fn recognize(&self, source_lang: &str, base64_audio: &str) -> Result<String> {
        ASRClient::recognize(self, source_lang, base64_audio).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asr::payload::ASRPayload;
    use crate::errors::{BhashiniError, ErrorKind, InvalidStructure};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Replays a fixed outcome and records what it was sent
    struct ScriptedTransport {
        reply: Box<dyn Fn() -> Result<Value> + Send + Sync>,
        calls: AtomicUsize,
        sent: Mutex<Vec<ASRPayload>>,
    }

    impl ScriptedTransport {
        fn replying(body: Value) -> Self {
            Self::with(move || Ok(body.clone()))
        }

        fn with(reply: impl Fn() -> Result<Value> + Send + Sync + 'static) -> Self {
            Self {
                reply: Box::new(reply),
                calls: AtomicUsize::new(0),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn post(&self, payload: &ASRPayload) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.sent.lock().unwrap().push(payload.clone());
            (self.reply)()
        }
    }

    fn client(transport: ScriptedTransport) -> ASRClient<ScriptedTransport> {
        ASRClient::new(transport, ASRConfig::default())
    }

    #[tokio::test]
    async fn returns_first_source() {
        let client = client(ScriptedTransport::replying(
            json!({ "pipelineResponse": [{ "output": [{ "source": "hello" }] }] }),
        ));

        let text = client.recognize("en", "UklGRg==").await.unwrap();
        assert_eq!(text, "hello");

        let sent = client.transport().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].pipeline_tasks[0].config.language.source_language, "en");
        assert_eq!(sent[0].input_data.audio[0].audio_content, "UklGRg==");
    }

    #[tokio::test]
    async fn malformed_bodies_are_invalid_response() {
        let bodies = [
            json!({ "pipelineResponse": [] }),
            json!({ "pipelineResponse": [{ "output": [] }] }),
            json!({ "pipelineResponse": [{ "output": [{ "target": "x" }] }] }),
            json!({ "somethingElse": true }),
        ];
        for body in bodies {
            let client = client(ScriptedTransport::replying(body));
            let err = client.recognize("en", "AAAA").await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidResponse);
            assert!(err.to_string().contains("Invalid response structure"));
        }
    }

    #[tokio::test]
    async fn transport_error_is_not_rewrapped() {
        let client = client(ScriptedTransport::with(|| {
            Err(BhashiniError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            })
        }));

        let err = client.recognize("en", "AAAA").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        match err {
            BhashiniError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "bad gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn config_error_skips_the_network() {
        let transport = ScriptedTransport::replying(json!({}));
        let client = ASRClient::new(
            transport,
            ASRConfig {
                require_service_id: true,
                ..Default::default()
            },
        );

        let err = client.recognize("kn", "AAAA").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(client.transport().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn repeated_calls_are_identical_and_independent() {
        let client = client(ScriptedTransport::replying(
            json!({ "pipelineResponse": [{ "output": [{ "source": "namaste" }] }] }),
        ));

        let first = client.recognize("hi", "AAAA").await.unwrap();
        let second = client.recognize("hi", "AAAA").await.unwrap();
        assert_eq!(first, second);

        let sent = client.transport().sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
    }

    #[tokio::test]
    async fn concurrent_calls_share_nothing_mutable() {
        let client = Arc::new(client(ScriptedTransport::replying(
            json!({ "pipelineResponse": [{ "output": [{ "source": "same" }] }] }),
        )));

        let (a, b) = tokio::join!(client.recognize("en", "AAAA"), client.recognize("ta", "BBBB"));
        assert_eq!(a.unwrap(), "same");
        assert_eq!(b.unwrap(), "same");
        assert_eq!(client.transport().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn works_through_the_trait_object() {
        let asr: Arc<dyn ASRInterface> = Arc::new(client(ScriptedTransport::replying(
            json!({ "pipelineResponse": [{ "output": [{}] }] }),
        )));

        let err = asr.recognize("en", "AAAA").await.unwrap_err();
        assert!(matches!(
            err,
            BhashiniError::InvalidResponse(InvalidStructure::MissingSource)
        ));
    }
}
