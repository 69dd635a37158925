use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static STATDS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("crm_hooks_statds")
        .with_description("CRM webhook service statistics")
        .with_unit("attempt")
        .build()
});

fn incr_statds(metric: String, value: String) {
    STATDS.add(1, &[KeyValue::new(metric, value)]);
}

pub fn incr_secret_action_statds(action: &str) {
    incr_statds("webhook_secret".to_string(), action.into())
}

pub fn incr_handshake_statds(outcome: &str) {
    incr_statds("webhook_handshake".to_string(), outcome.into())
}
