//! OAuth2 token acquisition for the MOT History trade API.
//!
//! The API authenticates through the Microsoft identity platform with the
//! client-credentials grant: one form POST against the tenant token
//! endpoint yields a short-lived bearer token. The provider caches the
//! token in-process and renews it when it is absent or inside the expiry
//! margin, so callers never duplicate the caching.

mod client_credentials;

pub use client_credentials::{
    AUTHORITY_BASE, ClientCredentials, DEFAULT_SCOPE, parse_token_response, token_form_params,
    token_url,
};
