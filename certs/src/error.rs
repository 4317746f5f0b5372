use thiserror::Error;
use x509_parser::error::X509Error;

/// Errors from the certificate/key codec.
///
/// Malformed container framing never shows up here; the scanner resolves
/// that locally by stopping. Zero blocks, zero certificates and zero
/// payloads are ordinary empty results, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A bare certificate block carried a payload that does not decode as
    /// an X.509 certificate. `index` is the position of the offending block
    /// in the scanned sequence.
    #[error("certificate block {index}: {source}")]
    InvalidCertificate {
        index: usize,
        #[source]
        source: X509Error,
    },

    /// PKCS#1 serialization of private key material failed
    #[error("PKCS#1 encode: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),
}
