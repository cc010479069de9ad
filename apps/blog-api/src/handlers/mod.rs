//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;

use actix_web::web;
use blog_core::{Page, PageRequest, SortField};
use blog_shared::PageResponse;
use blog_shared::dto::PageParams;

use crate::middleware::error::{AppResult, json_config, path_config, query_config};
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                // Post routes
                .service(
                    web::scope("/publicacao")
                        .route("/all", web::get().to(posts::list))
                        .route("/create", web::post().to(posts::create))
                        .route("/replace/{id}", web::put().to(posts::replace))
                        .route("/delete/{id}", web::delete().to(posts::delete)),
                )
                // Comment routes
                .service(
                    web::scope("/comentario")
                        .route(
                            "/search/{post_id}/comentarios",
                            web::get().to(comments::list_by_post),
                        )
                        .route("/{post_id}/publicacao", web::post().to(comments::create))
                        .route(
                            "/replace/{comment_id}/publicacao/{post_id}",
                            web::put().to(comments::replace),
                        )
                        // The double slash is part of the published path.
                        .route(
                            "/{comment_id}/delete//publicacao/{post_id}",
                            web::delete().to(comments::delete),
                        ),
                ),
        );
}

/// Turn query parameters into a bounded page request.
fn page_request<F: SortField>(
    state: &AppState,
    params: &PageParams,
) -> AppResult<PageRequest<F>> {
    Ok(state
        .page_limits
        .request(params.page, params.size, params.sort.as_deref())?)
}

fn page_response<T, U>(page: Page<T>, f: impl FnMut(T) -> U) -> PageResponse<U> {
    let (total_pages, first, last) = (page.total_pages(), page.is_first(), page.is_last());
    let page = page.map(f);

    PageResponse {
        number_of_elements: page.items.len() as u64,
        empty: page.items.is_empty(),
        content: page.items,
        total_elements: page.total,
        total_pages,
        number: page.page,
        size: page.size,
        first,
        last,
    }
}
