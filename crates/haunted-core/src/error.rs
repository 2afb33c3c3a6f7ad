use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("viewport must have a non-zero area, got {width}x{height}")]
    DegenerateViewport { width: u32, height: u32 },
    #[error("no debug slider labelled `{0}`")]
    UnknownSlider(String),
}
