use thiserror::Error;

/// Everything that can go wrong between the motion sensor and the tilt
/// vector. None of these stop the frame loop; at worst the scene runs
/// windless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    #[error("no motion sensor API on this host")]
    Unavailable,
    #[error("motion permission denied by the user")]
    PermissionDenied,
    #[error("motion permission request failed: {0}")]
    PermissionRequestFailed(String),
    #[error("motion sample carried no gravity acceleration")]
    MalformedSample,
}
