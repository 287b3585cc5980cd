use super::*;

fn lead(id: i64, category: &str, score: i64) -> LeadSummary {
    LeadSummary { id, category: category.to_owned(), score }
}

fn list(leads: Vec<LeadSummary>) -> LeadList {
    LeadList { leads }
}

#[test]
fn option_label_names_id_category_and_score() {
    assert_eq!(lead_option_label(&lead(4, "Hot", 88)), "Lead #4 — Hot — Score 88");
}

#[test]
fn selection_parses_lead_ids() {
    assert_eq!(parse_selection("12"), Selection::Selected(12));
    assert_eq!(parse_selection(""), Selection::Cleared);
    assert_eq!(Selection::Untouched.lead_id(), None);
    assert_eq!(Selection::Selected(3).lead_id(), Some(3));
}

#[test]
fn status_is_blank_while_loading() {
    assert_eq!(lead_status(None, false, Selection::Untouched), None);
}

#[test]
fn status_reports_load_failure() {
    assert_eq!(lead_status(None, true, Selection::Untouched).as_deref(), Some(LEADS_FAILED));
}

#[test]
fn status_reports_empty_list() {
    assert_eq!(
        lead_status(Some(&list(vec![])), false, Selection::Untouched).as_deref(),
        Some("⚠️ No leads found. Generate leads first.")
    );
}

#[test]
fn status_follows_selection() {
    let leads = list(vec![lead(1, "Warm", 60), lead(2, "Cold", 20)]);
    assert_eq!(lead_status(Some(&leads), false, Selection::Untouched).as_deref(), Some("✅ 2 leads available"));
    assert_eq!(lead_status(Some(&leads), false, Selection::Selected(2)).as_deref(), Some("✅ Lead #2 selected"));
    assert_eq!(lead_status(Some(&leads), false, Selection::Cleared).as_deref(), Some("⚠️ Please select a lead"));
}

#[test]
fn day_labels_are_upper_cased() {
    assert_eq!(day_label("day 14"), "DAY 14");
}
