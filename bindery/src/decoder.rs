//! Decoder trait for type-safe conversions toward parsed representations.
//!
//! A `Decoder<T, D>` turns a source value of type `T` into a destination
//! value of type `D`. The companion marker trait `DecodableFrom<T>` must be
//! implemented by `D`, which pins down the set of valid conversions at
//! compile time: a buffer decodes to a PEM block, a certificate-typed block
//! decodes to a parsed certificate, and nothing else decodes to anything.

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type `T`. The destination type must implement
/// [`DecodableFrom<T>`].
///
/// ```no_run
/// use bindery::decoder::{DecodableFrom, Decoder};
///
/// struct Framed(String);
///
/// #[derive(Debug)]
/// struct FrameError;
///
/// impl DecodableFrom<Framed> for Vec<u8> {}
///
/// impl Decoder<Framed, Vec<u8>> for Framed {
///     type Error = FrameError;
///
///     fn decode(&self) -> Result<Vec<u8>, Self::Error> {
///         Ok(self.0.as_bytes().to_vec())
///     }
/// }
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails; the conditions depend on
    /// the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// Has no methods; exists so that a `Decoder` implementation can only be
/// written for a (source, destination) pair that was explicitly declared
/// valid.
pub trait DecodableFrom<T> {}
