use super::*;

fn request() -> PredictionRequest {
    PredictionRequest { platform: "LinkedIn".to_owned(), goal: "Lead Generation".to_owned() }
}

#[test]
fn probability_drops_trailing_zero_fraction() {
    assert_eq!(probability_label(62.0), "62%");
    assert_eq!(probability_label(18.5), "18.5%");
}

#[test]
fn only_high_risk_warns() {
    assert_eq!(high_risk_warning("High"), Some(HIGH_RISK_WARNING));
    assert_eq!(high_risk_warning("Medium"), None);
    assert_eq!(high_risk_warning("Low"), None);
}

#[test]
fn metrics_lines_use_requested_platform_and_goal() {
    let metrics = MetricsUsed {
        total_leads: 15,
        avg_lead_score: 55.2,
        platform_campaigns: 3,
        goal_campaigns: Some(2),
        hot_leads: 4,
    };
    let lines = metrics_used_lines(&request(), &metrics);
    let labels: Vec<&str> = lines.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, ["Total Leads", "Avg Lead Score", "LinkedIn Campaigns", "Lead Generation Campaigns", "Hot Leads"]);
    assert_eq!(lines[1].1, "55.2/100");
}

#[test]
fn metrics_lines_skip_missing_goal_count() {
    let lines = metrics_used_lines(&request(), &MetricsUsed::default());
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|(label, _)| label != "Lead Generation Campaigns"));
}
