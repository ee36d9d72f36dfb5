use crate::HealthRes;

/// Health check shared by every surface that exposes one.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Reports the service as alive. The document store is not probed.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Cookbook is alive".into(),
        }
    }
}
