//! Request authentication.
//!
//! See [`Credentials`] for the supported schemes.

mod credentials;

pub use credentials::{Credentials, ACCESS_TOKEN_HEADER, AUTHORIZATION_HEADER};
