pub mod routes;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::SharedDirectory;

/// Build the application router around one shared activity directory.
pub fn router(directory: SharedDirectory) -> Router {
    Router::new()
        // Landing page
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        // Activity directory API
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(routes::activities::unregister_handler),
        )
        // Static files
        .nest_service("/static", get_service(ServeDir::new("static")))
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        // State
        .with_state(directory)
}
