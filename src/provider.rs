//! Provider-facing descriptors (data) and the Twitter profile API (behavior).
//!
//! `descriptor` exposes validated endpoint metadata (`ProviderDescriptor`) covering the three
//! OAuth 1.0a legs plus the verify-credentials call. `twitter` holds the profile model and the
//! predicate that decides whether a verify-credentials response identifies a real user.

pub mod descriptor;
pub mod twitter;

pub use descriptor::*;
pub use twitter::*;
