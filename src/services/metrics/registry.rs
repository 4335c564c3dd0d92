use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, IntCounter, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

const NAMESPACE: &str = "event_portal";

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("metrics output is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Central metrics registry for the portal
pub struct MetricsRegistry {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,

    // Account Metrics
    pub signups_total: CounterVec,
    pub logins_total: CounterVec,

    // Gate Metrics
    pub auth_rejections_total: CounterVec,

    // Business Metrics
    pub registrations_created_total: IntCounter,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, MetricsError> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests").namespace(NAMESPACE),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .namespace(NAMESPACE)
                .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        let signups_total = CounterVec::new(
            Opts::new("signups_total", "Signup attempts by outcome").namespace(NAMESPACE),
            &["outcome"],
        )?;
        registry.register(Box::new(signups_total.clone()))?;

        let logins_total = CounterVec::new(
            Opts::new("logins_total", "Login attempts by outcome").namespace(NAMESPACE),
            &["outcome"],
        )?;
        registry.register(Box::new(logins_total.clone()))?;

        let auth_rejections_total = CounterVec::new(
            Opts::new("auth_rejections_total", "Requests rejected by the auth gate")
                .namespace(NAMESPACE),
            &["reason"],
        )?;
        registry.register(Box::new(auth_rejections_total.clone()))?;

        let registrations_created_total = IntCounter::with_opts(
            Opts::new("registrations_created_total", "Event registrations created")
                .namespace(NAMESPACE),
        )?;
        registry.register(Box::new(registrations_created_total.clone()))?;

        Ok(Arc::new(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            signups_total,
            logins_total,
            auth_rejections_total,
            registrations_created_total,
        }))
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
