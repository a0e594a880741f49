use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("asset request failed: {0}")]
    AssetFetch(#[from] gloo_net::Error),
    #[error("asset {path} answered with status {status}")]
    AssetStatus { path: String, status: u16 },
    #[error("model could not be parsed: {0}")]
    Model(#[from] gltf::Error),
    #[error("model contains no triangles")]
    EmptyModel,
    #[error("WebGL2 is not available")]
    WebGlUnavailable,
    #[error("shader error: {0}")]
    Shader(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
