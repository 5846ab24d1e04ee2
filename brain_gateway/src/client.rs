//! Typed HTTP wrappers over the gateway routes.
//!
//! [`AdminClient`] curates the brain; [`FrontEndClient`] is what a player UI
//! talks to. Both surface any non-2xx answer as [`ClientError::Status`].

use agent_brain::{AgentResponse, BuildReadiness, VoiceDesign};
use brain_registry::{
    CommandDraft, CommandSpec, GraphSnapshot, KnowledgeDraft, KnowledgeItem, LanguageProfile,
    Module, ModuleId,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::api::{
    AddCommandRequest, AddKnowledgeRequest, ConnectLanguageRequest, CreateModuleRequest,
    MessageRequest, VoiceDesignRequest,
};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or decoding failure, including an unreadable error body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
struct Transport {
    http: Client,
    base_url: String,
}

impl Transport {
    fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await?;
        Err(ClientError::Status { status, body })
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    async fn post_no_content<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> ClientResult<T> {
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        Ok(response.json().await?)
    }
}

/// Client for the `/admin` routes.
#[derive(Debug, Clone)]
pub struct AdminClient {
    transport: Transport,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            transport: Transport::new(base_url),
        }
    }

    pub async fn add_language(&self, profile: &LanguageProfile) -> ClientResult<LanguageProfile> {
        self.transport.post("/admin/languages", profile).await
    }

    pub async fn create_module(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> ClientResult<Module> {
        let request = CreateModuleRequest {
            title: title.into(),
            description: description.into(),
        };
        self.transport.post("/admin/modules", &request).await
    }

    pub async fn connect_language(&self, module_id: &ModuleId, language_code: &str) -> ClientResult<()> {
        let request = ConnectLanguageRequest {
            module_id: module_id.to_string(),
            language_code: language_code.to_string(),
        };
        self.transport
            .post_no_content("/admin/modules/connect-language", &request)
            .await
    }

    pub async fn add_knowledge(
        &self,
        module_id: &ModuleId,
        draft: KnowledgeDraft,
    ) -> ClientResult<KnowledgeItem> {
        let request = AddKnowledgeRequest {
            module_id: module_id.to_string(),
            draft,
        };
        self.transport.post("/admin/knowledge", &request).await
    }

    pub async fn add_command(&self, module_id: &ModuleId, draft: CommandDraft) -> ClientResult<CommandSpec> {
        let request = AddCommandRequest {
            module_id: module_id.to_string(),
            draft,
        };
        self.transport.post("/admin/commands", &request).await
    }

    /// Fetch the full brain snapshot.
    pub async fn brain_summary(&self) -> ClientResult<GraphSnapshot> {
        self.transport.get("/admin/brain", &[]).await
    }
}

/// Optional routing for a chat or voice-design request.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    pub module_id: Option<ModuleId>,
    pub preferred_language: Option<String>,
    pub voice: bool,
}

impl ChatOptions {
    pub fn for_module(module_id: ModuleId) -> Self {
        Self {
            module_id: Some(module_id),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.preferred_language = Some(code.into());
        self
    }

    pub fn with_voice(mut self) -> Self {
        self.voice = true;
        self
    }
}

/// Client for the `/agent` routes.
#[derive(Debug, Clone)]
pub struct FrontEndClient {
    transport: Transport,
}

impl FrontEndClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            transport: Transport::new(base_url),
        }
    }

    pub async fn chat(&self, prompt: &str, options: &ChatOptions) -> ClientResult<AgentResponse> {
        let request = MessageRequest {
            prompt: prompt.to_string(),
            module_id: options.module_id.map(|id| id.to_string()),
            preferred_language: options.preferred_language.clone(),
            voice: options.voice,
        };
        self.transport.post("/agent/message", &request).await
    }

    pub async fn readiness(&self, module_id: Option<&ModuleId>) -> ClientResult<BuildReadiness> {
        let query: Vec<(&str, String)> = module_id
            .map(|id| ("moduleId", id.to_string()))
            .into_iter()
            .collect();
        self.transport.get("/agent/readiness", &query).await
    }

    /// Draft a game and fetch its narration. `options.voice` is ignored.
    pub async fn voice_design(&self, prompt: &str, options: &ChatOptions) -> ClientResult<VoiceDesign> {
        let request = VoiceDesignRequest {
            prompt: prompt.to_string(),
            module_id: options.module_id.map(|id| id.to_string()),
            preferred_language: options.preferred_language.clone(),
        };
        self.transport.post("/agent/voice-design", &request).await
    }
}
