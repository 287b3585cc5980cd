use super::*;

#[test]
fn blank_industry_defaults_to_saas() {
    let req = market_analysis_request("  ", "Europe", "Long");
    assert_eq!(req.industry, "SaaS");
    assert_eq!(req.region, "Europe");
    assert_eq!(req.time_horizon, "Long");
}

#[test]
fn bar_percent_scales_and_clamps() {
    assert_eq!(bar_percent(60.0, DEMAND_MAX), 50.0);
    assert_eq!(bar_percent(150.0, DEMAND_MAX), 100.0);
    assert_eq!(bar_percent(-5.0, MATRIX_MAX), 0.0);
    assert_eq!(bar_percent(f64::NAN, MATRIX_MAX), 0.0);
    assert_eq!(bar_percent(10.0, 0.0), 0.0);
}

#[test]
fn demand_bars_label_months_in_order() {
    let bars = demand_bars(&[80.0, 82.0, 85.0, 87.0, 90.0, 92.0, 99.0]);
    assert_eq!(bars.len(), 6);
    assert_eq!(bars[0], ("M1", 80.0));
    assert_eq!(bars[5], ("M6", 92.0));
}

#[test]
fn matrix_bars_keep_fixed_order() {
    let matrix = MarketMatrix { competition: 85.0, opportunity: 60.0, saturation: 70.0 };
    let labels: Vec<&str> = matrix_bars(&matrix).iter().map(|(l, _, _)| *l).collect();
    assert_eq!(labels, ["Competition", "Opportunity", "Saturation"]);
}

#[test]
fn channel_shares_follow_backend_order() {
    let channels = vec![("LinkedIn".to_owned(), 50.0), ("Email".to_owned(), 30.0), ("Instagram".to_owned(), 20.0)];
    let shares = channel_shares(&channels);
    assert_eq!(shares[0].0, "LinkedIn");
    assert_eq!(shares[0].1, 50.0);
    assert_eq!(shares[2].0, "Instagram");
    assert_eq!(shares[2].1, 20.0);
}

#[test]
fn channel_shares_of_zero_total_are_zero() {
    let shares = channel_shares(&[("Email".to_owned(), 0.0)]);
    assert_eq!(shares[0].1, 0.0);
}
