/// HTTP endpoint paths for the receipt processor.
pub mod endpoints {
    pub const PROCESS: &str = "/receipts/process";
    pub const POINTS: &str = "/receipts/:id/points";
    pub const HEALTH: &str = "/health";

    /// Concrete points path for one receipt id.
    pub fn points_path(id: impl std::fmt::Display) -> String {
        format!("/receipts/{id}/points")
    }
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
