//! Domain types and pure logic for the studio site.
//!
//! Nothing in this crate performs I/O. The content client, mailer and HTTP
//! layer all build on the types defined here.

pub mod carousel;
pub mod contact;
pub mod error;
pub mod film;
pub mod streaming;
pub mod studio;
