use thiserror::Error;

/// Top-level error type for arc segment construction and queries.
#[derive(Debug, Error)]
pub enum ArcsegError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Errors raised while validating geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("radius must be positive, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("{parameter} must be finite")]
    NonFinite { parameter: &'static str },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("sampling an arc needs at least 2 points, got {count}")]
    InvalidSampleCount { count: usize },
}

/// Errors raised when mapping an arc through a point transform.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("transform is not rigid: endpoint strays {deviation} from the arc radius")]
    NonRigid { deviation: f64 },
}

/// Convenience type alias for results using [`ArcsegError`].
pub type Result<T> = std::result::Result<T, ArcsegError>;
