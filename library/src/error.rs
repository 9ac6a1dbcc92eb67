use std::io;
use std::process::ExitStatus;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Can't open {0}: {1}")]
    FileOpenError(String, io::Error),
    #[error("Can't memory-map {0}: {1}")]
    FileMapError(String, io::Error),
    #[error("Can't write {0}: {1}")]
    FileWriteError(String, io::Error),
    #[error("{0}: file is {1} bytes, shorter than its {2}-byte header")]
    TruncatedHeader(String, usize, usize),
    #[error("Unsupported element size {0} (expected 4 or 8)")]
    UnsupportedElementSize(u32),
    #[error("{path}: header declares {expected} bytes but file is {actual} bytes")]
    LengthMismatch {
        path: String,
        expected: u64,
        actual: u64,
    },
    #[error("{0}: header declares a payload too large to address")]
    HeaderOverflow(String),
    #[error("Element type mismatch: file holds {file}-byte values, requested {requested}-byte")]
    ElementTypeMismatch { file: usize, requested: usize },
    #[error("Can only support 2 or 3 dimensions, got {0}")]
    UnsupportedDimensions(usize),
    #[error("Axis {axis} has non-finite limits ({min}, {max})")]
    NonFiniteBounds { axis: usize, min: f64, max: f64 },
    #[error("Axis {axis} holds {len} entries, more than a u32 header can record")]
    AxisTooLong { axis: &'static str, len: usize },
    #[error("Trajectory has no steps or no bodies")]
    EmptyTrajectory,
    #[error("Galaxy animation needs at least 2 bodies, got {0}")]
    TooFewBodies(usize),
    #[error("Array shape error: {0}")]
    ShapeError(ndarray::ShapeError),
    #[error("Can't render frame: {0}")]
    RenderError(String),
    #[error("Can't spawn ffmpeg: {0}")]
    EncoderSpawnError(io::Error),
    #[error("Can't feed frames to ffmpeg: {0}")]
    EncoderPipeError(io::Error),
    #[error("ffmpeg exited with {0}")]
    EncoderFailed(ExitStatus),
}
