//! Network layer: the bearer-token HTTP client and the REST wire types.

pub mod http;
pub mod types;
