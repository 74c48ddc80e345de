use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static CUSTOMERS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "customers_created_total",
        "Total customers registered"
    )
    .expect("register customers_created_total")
});

pub static CUSTOMERS_UPDATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "customers_updated_total",
        "Total customer updates persisted"
    )
    .expect("register customers_updated_total")
});

pub static CUSTOMERS_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "customers_deleted_total",
        "Total customers deleted"
    )
    .expect("register customers_deleted_total")
});

/// Service errors labelled by kind (`not_found`, `conflict`, `validation`, `db`).
pub static SERVICE_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "customers_service_errors_total",
        "Total customer service errors by kind",
        &["kind"]
    )
    .expect("register customers_service_errors_total")
});

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
