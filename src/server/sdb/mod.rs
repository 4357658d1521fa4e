//! The SDB document: the XML format exchanged with the external binary codec.
//!
//! [`serialize`] turns a resolved project or build into a document, [`deserialize`] reads a
//! document (usually produced by the codec from a `.bin` file) back into storable records.
//! Reading back a document this crate wrote reproduces every field it was given; documents
//! derived from `.bin` files lack names and some fields, which are synthesized or left blank.

pub mod deserialize;
mod document;
pub mod schema;
pub mod serialize;
mod writer;

pub use deserialize::deserialize;
pub use serialize::serialize;
