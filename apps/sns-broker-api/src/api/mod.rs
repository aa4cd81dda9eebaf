mod health;
mod publish;
mod router;
mod topic;

pub(crate) use router::to_app_error;

use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    router::router().merge(health::router())
}
