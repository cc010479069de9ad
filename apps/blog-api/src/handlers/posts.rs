//! Post handlers - `/api/publicacao`.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Post, PostInput, PostSortField};
use blog_shared::dto::{PageParams, PostRequest, PostResponse};

use super::{page_request, page_response};
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_input(req: PostRequest) -> PostInput {
    PostInput {
        title: req.titulo,
        description: req.descricao,
        content: req.conteudo,
    }
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        titulo: post.title,
        descricao: post.description,
        conteudo: post.content,
        data_criacao: post.audit.created_at,
        data_atualizacao: post.audit.updated_at,
    }
}

/// GET /api/publicacao/all
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PageParams>,
) -> AppResult<HttpResponse> {
    let request = page_request::<PostSortField>(&state, &query)?;
    let page = state.posts.list(&request).await?;

    Ok(HttpResponse::Ok().json(page_response(page, to_response)))
}

/// POST /api/publicacao/create
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(to_input(body.into_inner())).await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /api/publicacao/replace/{id}
pub async fn replace(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update(id.into_inner(), to_input(body.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/publicacao/delete/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<i64>) -> AppResult<HttpResponse> {
    state.posts.delete(id.into_inner()).await?;

    Ok(HttpResponse::Ok().finish())
}
