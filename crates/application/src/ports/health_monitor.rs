use ferrous_gslb_domain::HealthSnapshot;

/// Read side of the health monitor.
///
/// The monitor updates its state asynchronously; callers take one snapshot
/// per request and never re-read it mid-request.
pub trait HealthMonitor: Send + Sync {
    fn snapshot(&self) -> HealthSnapshot;
}
