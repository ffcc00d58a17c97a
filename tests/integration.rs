//! Live API test suite (requires a real API token).
//!
//! Run all live tests with:
//!   ROYALE_API_TOKEN=... cargo test --test integration -- --ignored --nocapture

#[path = "integration/common.rs"]
mod common;
#[path = "integration/live.rs"]
mod live;
