/*
 * Responsibility
 * - URL 構造の定義 (GET / のみ)
 * - それ以外の path / method は axum 既定の 404 / 405 に任せる
 */
use axum::{Router, routing::get};

use crate::api::handlers::root::root;

pub fn routes() -> Router {
    Router::new().route("/", get(root))
}
