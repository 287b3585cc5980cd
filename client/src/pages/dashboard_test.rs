use super::*;

fn metrics(avg: f64, trend: Option<&str>) -> DashboardMetrics {
    DashboardMetrics { avg_lead_score: avg, lead_quality_trend: trend.map(str::to_owned), ..DashboardMetrics::default() }
}

#[test]
fn campaign_activity_threshold_is_exclusive() {
    assert_eq!(campaign_activity(6), ("📈 High Activity Volume", Tone::Success));
    assert_eq!(campaign_activity(5), ("🟡 Moderate Activity", Tone::Muted));
    assert_eq!(campaign_activity(0).0, "🟡 Moderate Activity");
}

#[test]
fn hot_lead_trend_waits_without_leads() {
    assert_eq!(hot_lead_trend(0, 0), ("Waiting for data...", Tone::Muted));
}

#[test]
fn hot_lead_trend_uses_ratio() {
    assert_eq!(hot_lead_trend(4, 10).0, "🔥 High Conversion Potential");
    assert_eq!(hot_lead_trend(3, 10).0, "❄️ Needs Better Targeting");
    assert_eq!(hot_lead_trend(3, 10).1, Tone::Warning);
}

#[test]
fn backend_quality_trend_wins() {
    assert_eq!(quality_trend(&metrics(90.0, Some("Declining"))), "📉 Declining");
    assert_eq!(quality_trend(&metrics(10.0, Some("Improving"))), "📈 Improving");
    assert_eq!(quality_trend(&metrics(10.0, Some("Stable"))), "➡️ Stable");
}

#[test]
fn quality_trend_buckets_average_score() {
    assert_eq!(quality_trend(&metrics(71.0, None)), "✅ Premium Lead Quality");
    assert_eq!(quality_trend(&metrics(70.0, None)), "⚠️ Mixed Lead Quality");
    assert_eq!(quality_trend(&metrics(41.0, None)), "⚠️ Mixed Lead Quality");
    assert_eq!(quality_trend(&metrics(40.0, None)), "🔻 Low Quality Detect");
}

#[test]
fn quality_label_appends_percent() {
    assert_eq!(quality_label(56.5), "56.5%");
    assert_eq!(quality_label(48.0), "48%");
}

#[test]
fn tone_classes_are_distinct() {
    assert_ne!(Tone::Success.class(), Tone::Warning.class());
    assert_ne!(Tone::Warning.class(), Tone::Muted.class());
}
