use crate::server::api::Api;

#[derive(Clone)]
pub struct AppState {
    pub api: Api,
    /// Origin trusted to call the state-changing auth endpoints
    pub trusted_origin: String,
}
