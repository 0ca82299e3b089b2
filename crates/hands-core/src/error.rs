/// Result alias carrying the core [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// How the session reacts to a failure of a given class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// Stop the session and tell the user.
    EndSession,
    /// Keep showing the raw camera feed without the hand overlay.
    Passthrough,
    /// Skip this frame's overlay and keep looping.
    SkipFrame,
    /// Log and forget.
    Drop,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("landmark buffer holds {got} values, expected {expected}")]
    LandmarkCount { expected: usize, got: usize },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("config json: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error("camera unavailable: {0}")]
    CaptureUnavailable(String),
    #[error("hand tracker unavailable: {0}")]
    TrackerUnavailable(String),
    #[error("frame processing failed: {0}")]
    FrameProcessing(String),
    #[error("snapshot upload failed: {0}")]
    Upload(String),
}

impl Error {
    /// Recovery policy for this error class. Nothing is retried except by the
    /// next natural tick or timer period.
    pub fn recovery(&self) -> Recovery {
        match self {
            Error::CaptureUnavailable(_) => Recovery::EndSession,
            Error::TrackerUnavailable(_) => Recovery::Passthrough,
            Error::LandmarkCount { .. } | Error::FrameProcessing(_) => Recovery::SkipFrame,
            Error::Upload(_) | Error::Config(_) | Error::ConfigJson(_) => Recovery::Drop,
        }
    }

    /// Message suitable for showing to the user when the session ends.
    pub fn user_message(&self) -> String {
        match self {
            Error::CaptureUnavailable(_) => {
                "Camera is unavailable or permission was denied.".to_string()
            }
            Error::TrackerUnavailable(_) => {
                "Hand tracking is not supported on this device; showing the camera only."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}
