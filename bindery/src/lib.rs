//! # bindery
//!
//! Core traits for encoding and decoding in the bindery PEM codec.
//!
//! The codec moves data through a fixed pipeline:
//! ```text
//! bytes → pem::Block → certs::ParsedCertificate
//! ```
//! and back out again. Each step of that pipeline is expressed through the
//! [`decoder::Decoder`] and [`encoder::Encoder`] traits defined here, so
//! that only the conversions the pipeline actually supports exist at
//! compile time.
//!
//! The traits carry marker companions (`DecodableFrom`, `EncodableTo`)
//! that constrain which (source, destination) pairs are valid. A crate
//! adds a step to the pipeline by implementing the marker for the
//! destination and the conversion on the source:
//!
//! ```no_run
//! use bindery::decoder::{DecodableFrom, Decoder};
//!
//! struct Armored(String);
//! struct Payload(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct ParseError;
//!
//! impl DecodableFrom<Armored> for Payload {}
//!
//! impl Decoder<Armored, Payload> for Armored {
//!     type Error = ParseError;
//!
//!     fn decode(&self) -> Result<Payload, Self::Error> {
//!         Ok(Payload(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
