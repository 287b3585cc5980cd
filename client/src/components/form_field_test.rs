use super::*;

#[test]
fn submit_label_switches_while_busy() {
    assert_eq!(submit_label(false, "Generate Campaign", "Generating..."), "Generate Campaign");
    assert_eq!(submit_label(true, "Generate Campaign", "Generating..."), "Generating...");
}
