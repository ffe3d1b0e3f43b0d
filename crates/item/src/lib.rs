//! Self-describing CBOR data-item model, codec, and diagnostic notation.
//!
//! The crate is built around [`DataItem`], a variant type covering every
//! value shape of the wire format: unsigned/negative integers, byte and
//! text strings, arrays, maps, tagged values, simple values, and floats.
//! [`CborDecoder`] turns bytes into a `DataItem`, [`CborEncoder`] turns
//! one back into bytes, and a deterministic total order over values
//! keeps map keys sorted so equal maps encode to identical bytes.
//!
//! # Example
//!
//! ```
//! use cbor_item::{decode, encode, map, DataItem};
//!
//! let item = map([("a", DataItem::Unsigned(1))]);
//! let bytes = encode(&item);
//! assert_eq!(bytes, [0xa1, 0x61, b'a', 0x01]);
//! assert_eq!(decode(&bytes).unwrap(), item);
//! ```

pub mod constants;
mod convert;
mod decoder;
mod diag;
mod encoder;
mod error;
mod item;
mod iter;
mod ord;
mod shared;

pub use convert::{item_to_json, json_to_item};
pub use decoder::{CborDecoder, DEFAULT_MAX_DEPTH};
pub use diag::dump;
pub use encoder::CborEncoder;
pub use error::CborError;
pub use item::{array, map, DataItem, Kind};
pub use iter::{ItemIter, ItemRef};
pub use shared::{decode, encode, validate};
