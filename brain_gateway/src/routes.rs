//! HTTP routes over a shared brain.
//!
//! Admin routes take the write guard, agent routes and the snapshot take the
//! read guard. Nothing awaits while a guard is held.

use std::sync::Arc;

use agent_brain::{AgentResponse, Brain, BuildReadiness, VoiceDesign};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post, MethodRouter};
use axum::{Json, Router};
use brain_registry::{
    CommandSpec, GraphSnapshot, KnowledgeItem, LanguageProfile, Module, ModuleId,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::api::{
    parse_module_id, present, AddCommandRequest, AddKnowledgeRequest, ConnectLanguageRequest,
    CreateModuleRequest, MessageRequest, ReadinessQuery, VoiceDesignRequest,
};
use crate::error::ApiError;

pub type SharedBrain = Arc<RwLock<Brain>>;

/// State handed to every handler.
#[derive(Clone, Default)]
pub struct AppState {
    brain: SharedBrain,
}

impl AppState {
    pub fn new(brain: Brain) -> Self {
        Self {
            brain: Arc::new(RwLock::new(brain)),
        }
    }

    pub fn brain(&self) -> &SharedBrain {
        &self.brain
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/admin/languages", only(post(add_language)))
        .route("/admin/modules", only(post(create_module)))
        .route("/admin/modules/connect-language", only(post(connect_language)))
        .route("/admin/knowledge", only(post(add_knowledge)))
        .route("/admin/commands", only(post(add_command)))
        .route("/admin/brain", only(get(brain_snapshot)))
        .route("/agent/message", only(post(agent_message)))
        .route("/agent/readiness", only(get(agent_readiness)))
        .route("/agent/voice-design", only(post(voice_design)))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(log_requests))
}

/// A wrong method on a known path is reported like an unknown path.
fn only(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    info!(%method, %path, status = response.status().as_u16(), "request handled");
    response
}

async fn add_language(
    State(state): State<AppState>,
    payload: Result<Json<LanguageProfile>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LanguageProfile>)> {
    let Json(profile) = payload?;
    let profile = state.brain.write().await.graph_mut().register_language(profile)?;
    Ok((StatusCode::CREATED, Json(profile)))
}

async fn create_module(
    State(state): State<AppState>,
    payload: Result<Json<CreateModuleRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Module>)> {
    let Json(request) = payload?;
    let module = state
        .brain
        .write()
        .await
        .graph_mut()
        .create_module(request.title, request.description)?;
    Ok((StatusCode::CREATED, Json(module)))
}

async fn connect_language(
    State(state): State<AppState>,
    payload: Result<Json<ConnectLanguageRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = payload?;
    let module_id = ModuleId::parse(&request.module_id)?;
    state
        .brain
        .write()
        .await
        .graph_mut()
        .link_language(&module_id, &request.language_code)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_knowledge(
    State(state): State<AppState>,
    payload: Result<Json<AddKnowledgeRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<KnowledgeItem>)> {
    let Json(request) = payload?;
    let module_id = ModuleId::parse(&request.module_id)?;
    let item = state
        .brain
        .write()
        .await
        .graph_mut()
        .add_knowledge(&module_id, request.draft)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn add_command(
    State(state): State<AppState>,
    payload: Result<Json<AddCommandRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CommandSpec>)> {
    let Json(request) = payload?;
    let module_id = ModuleId::parse(&request.module_id)?;
    let command = state
        .brain
        .write()
        .await
        .graph_mut()
        .add_command(&module_id, request.draft)?;
    Ok((StatusCode::CREATED, Json(command)))
}

async fn brain_snapshot(State(state): State<AppState>) -> Json<GraphSnapshot> {
    Json(state.brain.read().await.graph().snapshot())
}

async fn agent_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> ApiResult<Json<AgentResponse>> {
    let Json(request) = payload?;
    let module_id = parse_module_id(request.module_id.as_deref())?;
    let response = state.brain.read().await.respond(
        &request.prompt,
        module_id.as_ref(),
        present(request.preferred_language.as_deref()),
        request.voice,
    )?;
    Ok(Json(response))
}

async fn agent_readiness(
    State(state): State<AppState>,
    query: Result<Query<ReadinessQuery>, QueryRejection>,
) -> ApiResult<Json<BuildReadiness>> {
    let Query(query) = query?;
    let module_id = parse_module_id(query.module_id.as_deref())?;
    let report = state.brain.read().await.build_readiness(module_id.as_ref())?;
    Ok(Json(report))
}

async fn voice_design(
    State(state): State<AppState>,
    payload: Result<Json<VoiceDesignRequest>, JsonRejection>,
) -> ApiResult<Json<VoiceDesign>> {
    let Json(request) = payload?;
    let module_id = parse_module_id(request.module_id.as_deref())?;
    let outcome = state.brain.read().await.voice_design(
        &request.prompt,
        module_id.as_ref(),
        present(request.preferred_language.as_deref()),
    )?;
    Ok(Json(outcome))
}
