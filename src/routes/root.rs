use axum::Json;
use serde::Serialize;

pub const GREETING: &str = "hello from flask 😎";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResponse {
    pub ok: bool,
    pub msg: &'static str,
}

impl RootResponse {
    pub fn greeting() -> Self {
        RootResponse {
            ok: true,
            msg: GREETING,
        }
    }
}

pub async fn handler() -> Json<RootResponse> {
    Json(RootResponse::greeting())
}
