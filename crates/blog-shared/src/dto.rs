//! Data Transfer Objects - request/response types for the API.
//!
//! Request types only carry client-editable fields. Anything else a client
//! sends (`id`, `dataCriacao`, ...) is ignored during deserialisation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body for creating or replacing a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub conteudo: Option<String>,
}

/// Body for creating or replacing a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    pub texto: Option<String>,
}

/// Outbound post representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub conteudo: String,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: DateTime<Utc>,
}

/// Outbound comment representation. The owning post is not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub texto: String,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: DateTime<Utc>,
}

/// Query string accepted by list endpoints: `?page=0&size=20&sort=titulo,desc`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}
