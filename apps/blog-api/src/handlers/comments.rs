//! Comment handlers - `/api/comentario`.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Comment, CommentInput, CommentSortField};
use blog_shared::dto::{CommentRequest, CommentResponse, PageParams};

use super::{page_request, page_response};
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_input(req: CommentRequest) -> CommentInput {
    CommentInput { text: req.texto }
}

/// The owning post is deliberately left out of the representation.
fn to_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        texto: comment.text,
        data_criacao: comment.audit.created_at,
        data_atualizacao: comment.audit.updated_at,
    }
}

/// GET /api/comentario/search/{post_id}/comentarios
pub async fn list_by_post(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
    query: web::Query<PageParams>,
) -> AppResult<HttpResponse> {
    let request = page_request::<CommentSortField>(&state, &query)?;
    let page = state
        .comments
        .list_by_post(post_id.into_inner(), &request)
        .await?;

    Ok(HttpResponse::Ok().json(page_response(page, to_response)))
}

/// POST /api/comentario/{post_id}/publicacao
pub async fn create(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let comment = state
        .comments
        .create(post_id.into_inner(), to_input(body.into_inner()))
        .await?;

    Ok(HttpResponse::Created().json(to_response(comment)))
}

/// PUT /api/comentario/replace/{comment_id}/publicacao/{post_id}
pub async fn replace(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let (comment_id, post_id) = path.into_inner();
    let comment = state
        .comments
        .update(comment_id, post_id, to_input(body.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(to_response(comment)))
}

/// DELETE /api/comentario/{comment_id}/delete//publicacao/{post_id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> AppResult<HttpResponse> {
    let (comment_id, post_id) = path.into_inner();
    state.comments.delete(comment_id, post_id).await?;

    Ok(HttpResponse::Ok().finish())
}
