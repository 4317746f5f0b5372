//! Encoder trait, the inverse direction of [`crate::decoder`].
//!
//! An `Encoder<T, E>` turns a source value of type `T` back into its outer
//! representation `E`, such as a parsed certificate back into a PEM block.
//! `EncodableTo<T>` is the marker constraining valid pairs, same scheme as
//! `DecodableFrom`.

/// Encoder trait for converting from type `T` to type `E`.
///
/// Implemented by the source type `T`; the destination must implement
/// [`EncodableTo<T>`].
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be encoded from type `T`.
pub trait EncodableTo<T> {}
