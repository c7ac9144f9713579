//! Tracing spans and events emitted by the core.

use interactome_core::{GraphModel, RawEdgeList};
use interactome_test_support::{fixtures::TOY_EXAMPLE, tracing::RecordingLayer};
use tracing::{Level, subscriber::with_default};
use tracing_subscriber::{Registry, layer::SubscriberExt};

fn capture<T>(body: impl FnOnce() -> T) -> (T, RecordingLayer) {
    let layer = RecordingLayer::default();
    let subscriber = Registry::default().with(layer.clone());
    let value = with_default(subscriber, body);
    (value, layer)
}

#[test]
fn build_span_records_network_size() {
    let (_, layer) = capture(|| GraphModel::from_pairs("toy", TOY_EXAMPLE.iter().copied()));
    let span = layer.span("core.build").expect("build span closed");
    assert_eq!(span.field("network"), Some("toy"));
    assert_eq!(span.field("pairs"), Some("6"));
    assert_eq!(span.field("vertices"), Some("6"));
    assert_eq!(span.field("edges"), Some("6"));
    assert_eq!(layer.events_with_message("network constructed").len(), 1);
}

#[test]
fn empty_network_emits_warning() {
    let (_, layer) = capture(|| GraphModel::from_pairs("void", std::iter::empty::<(&str, &str)>()));
    let warnings = layer.events_with_message("network has no interactions");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].level, Level::WARN);
}

#[test]
fn rejected_source_logs_format_code() {
    let raw = RawEdgeList::new("broken", "two", Vec::new());
    let (result, layer) = capture(|| GraphModel::from_source(&raw));
    result.expect_err("header is not numeric");

    let rejected = layer.events_with_message("interaction source rejected");
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].field("code"), Some("FORMAT_INVALID_HEADER"));

    let span = layer.span("core.validate").expect("validate span closed");
    assert_eq!(span.field("data_source"), Some("broken"));
    assert!(layer.events().iter().any(|event| event.level == Level::ERROR));
}

#[test]
fn component_span_records_count() {
    let (_, layer) = capture(|| {
        let graph = GraphModel::from_pairs("pair", [("A", "B"), ("C", "D")]);
        graph.component_count_and_sizes()
    });
    let span = layer.span("core.components").expect("components span closed");
    assert_eq!(span.field("components"), Some("2"));
    assert_eq!(span.field("vertices"), Some("4"));
}
