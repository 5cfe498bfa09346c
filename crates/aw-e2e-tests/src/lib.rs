//! Test-only crate. See `tests/` for end-to-end scenarios that run the
//! assistant against a live gateway backed by mocked providers.
