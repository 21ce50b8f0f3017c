//! Shared response payload types for API handlers.

use serde::Serialize;

/// Acknowledgement body returned by operations with no resource to echo,
/// serialized as `{ "ok": true }`.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub ok: bool,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
