use gallery_shared::responses::{
    gallery_error_response, json_response, method_not_allowed, preflight_response,
};
use gallery_shared::search::SearchQuery;
use gallery_shared::types::GalleryPage;
use gallery_shared::GalleryState;
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use std::sync::Arc;

/// Main Lambda handler - one gallery page per GET
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<GalleryState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    tracing::info!("Gallery Lambda invoked - Method: {} Path: {}", method, event.uri().path());

    // Handle CORS preflight
    if method == Method::OPTIONS {
        return preflight_response();
    }

    if method != Method::GET {
        return method_not_allowed();
    }

    let cursor = event
        .query_string_parameters_ref()
        .and_then(|params| params.first("next_cursor"));

    let query = SearchQuery::new(state.config.folder.as_deref(), cursor);

    match state.search_api.search(&query).await {
        Ok(response) => {
            let page = GalleryPage::from(response);
            tracing::info!("Returning {} files", page.files.len());
            json_response(StatusCode::OK, &page)
        }
        Err(err) => {
            tracing::error!("Gallery search failed: {}", err);
            gallery_error_response(&err)
        }
    }
}
