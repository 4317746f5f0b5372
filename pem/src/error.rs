use base64::DecodeError;
use thiserror::Error;

/// Errors from the strict single-block PEM parser.
///
/// The multi-block [`crate::scan`] never surfaces these; it treats any of
/// them as the end of the scannable region and stops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No `-----BEGIN <label>-----` line found
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// The block started but no `-----END <label>-----` line followed
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    /// No base64 data between the boundary lines
    #[error("missing PEM data")]
    MissingData,

    /// The BEGIN and END labels do not match
    #[error("begin and end labels don't match")]
    LabelMismatch,

    /// A second BEGIN line appeared inside an open block
    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,

    /// A blank line inside the base64 body
    #[error("invalid base64 line")]
    InvalidBase64Line,

    /// The base64 body does not decode
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
