use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static STATDS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("horse_index_statds")
        .with_description("Horse index app statistics")
        .with_unit("action")
        .build()
});

fn incr_statds(metric: String, value: String) {
    STATDS.add(1, &[KeyValue::new(metric, value)]);
}

pub fn incr_horse_action_statds(action: &str) {
    incr_statds("horse".to_string(), action.into())
}

pub fn incr_medical_record_action_statds(action: &str) {
    incr_statds("medical_record".to_string(), action.into())
}
