//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs get their own structs (`NewUrlRecord`) so stored rows and insert
//! payloads stay distinct types.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
