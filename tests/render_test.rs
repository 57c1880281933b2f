//! Unit tests for formatting helpers and the panel store.
//!
//! Run with: cargo test --test render_test

use pws_dash::render::{
    PanelStore, PanelView, TimelapseView, fmt_compact, fmt_reading, group_thousands,
};

#[test]
fn readings_format_with_placeholders() {
    assert_eq!(fmt_reading(Some(21.43), 1, "°C"), "21.4 °C");
    assert_eq!(fmt_reading(Some(55.0), 2, "%"), "55.00 %");
    assert_eq!(fmt_reading(None, 1, "°C"), "-- °C");
    assert_eq!(fmt_reading(Some(f64::NAN), 1, "°C"), "-- °C");
    assert_eq!(fmt_reading(Some(3.0), 0, "strikes"), "3 strikes");
    assert_eq!(fmt_reading(None, 0, ""), "--");

    assert_eq!(fmt_compact(Some(25.55), 1, "°C"), "25.6°C");
    assert_eq!(fmt_compact(None, 1, "%"), "--%");
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0.0), "0");
    assert_eq!(group_thousands(999.0), "999");
    assert_eq!(group_thousands(1000.0), "1,000");
    assert_eq!(group_thousands(1_234_567.4), "1,234,567");
    assert_eq!(group_thousands(-42_000.0), "-42,000");
}

#[test]
fn store_replaces_views_per_panel() {
    let store = PanelStore::new();
    store.publish("timelapse", PanelView::Timelapse(TimelapseView { date: None }));
    store.publish(
        "timelapse",
        PanelView::Timelapse(TimelapseView {
            date: Some("03 Jul 2025".to_string()),
        }),
    );

    let panel = store.get("timelapse").unwrap();
    match panel.view {
        PanelView::Timelapse(view) => assert_eq!(view.date.as_deref(), Some("03 Jul 2025")),
        other => panic!("unexpected view {other:?}"),
    }
    assert!(store.get("nope").is_none());
}

#[test]
fn an_error_in_one_panel_leaves_the_rest_alone() {
    let store = PanelStore::new();
    store.publish("a", PanelView::Timelapse(TimelapseView { date: None }));
    store.publish("b", PanelView::Timelapse(TimelapseView { date: None }));

    store.publish_error("a", "backend unreachable");

    assert!(matches!(store.get("a").unwrap().view, PanelView::Error { .. }));
    assert!(matches!(
        store.get("b").unwrap().view,
        PanelView::Timelapse(_)
    ));
}

#[test]
fn all_returns_panels_in_stable_order() {
    let store = PanelStore::new();
    store.publish("zulu", PanelView::Timelapse(TimelapseView { date: None }));
    store.publish("alpha", PanelView::Timelapse(TimelapseView { date: None }));

    let ids: Vec<&str> = store.all().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["alpha", "zulu"]);
}

#[test]
fn views_serialize_with_a_kind_tag() {
    let value = serde_json::to_value(PanelView::Error {
        message: "boom".to_string(),
    })
    .unwrap();
    assert_eq!(value["kind"], "error");
    assert_eq!(value["message"], "boom");
}
