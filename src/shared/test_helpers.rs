#[cfg(test)]
use crate::features::auth::models::AdminSession;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_admin_session() -> AdminSession {
    AdminSession {
        username: "admin".to_string(),
        issued_at: 0,
        expires_at: i64::MAX,
    }
}

#[cfg(test)]
async fn inject_admin_session_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_session());
    next.run(request).await
}

#[cfg(test)]
pub fn with_admin_session(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_session_middleware))
}
