use axum::{
    Router,
    routing::{delete, get},
};

use super::controller::{create_teacher, delete_teacher, list_teachers};
use crate::state::AppState;

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers).post(create_teacher))
        .route("/{id}", delete(delete_teacher))
}
