//! End-to-end library flows: scan a template, drive a form session, resolve.

use linkfill::template::{Classification, FormState, classify, display_name, resolve, scan};

#[test]
fn full_flow_with_numeric_and_text_fields() {
    let template = "app://user/{id#}/name/{label}";

    let names = scan(template);
    assert_eq!(names, vec!["id#", "label"]);

    let labels: Vec<&str> = names.iter().map(|n| display_name(n)).collect();
    assert_eq!(labels, vec!["id", "label"]);
    assert_eq!(classify(&names[0]), Classification::Numeric);
    assert_eq!(classify(&names[1]), Classification::Text);

    let mut form = FormState::new(names);
    form.set_value(0, "7");
    form.set_value(1, "alice");
    assert!(form.is_form_valid());

    assert_eq!(resolve(template, form.values()), "app://user/7/name/alice");
}

#[test]
fn invalid_numeric_value_blocks_submission() {
    let template = "app://user/{id#}/name/{label}";
    let mut form = FormState::new(scan(template));

    form.set_value(0, "7a");
    form.set_value(1, "alice");
    assert!(!form.is_form_valid());
    assert!(form.ensure_valid().is_err());

    let invalid = form.invalid_fields();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].label, "id");
}

#[test]
fn duplicate_names_resolve_positionally() {
    let template = "{id}/{id}";
    let mut form = FormState::new(scan(template));
    form.set_value(0, "1");
    form.set_value(1, "2");
    assert!(form.is_form_valid());
    assert_eq!(resolve(template, form.values()), "1/2");
}

#[test]
fn placeholder_free_template_passes_straight_through() {
    let template = "app://settings/general";
    let form = FormState::new(scan(template));
    assert!(form.is_empty());
    assert!(form.is_form_valid());
    assert_eq!(resolve(template, form.values()), template);
}

#[test]
fn malformed_braces_survive_the_whole_pipeline() {
    let template = "app://odd/{unclosed and }bare/{real}";
    let names = scan(template);
    // "{unclosed and }" is a matched span; "}bare" keeps its bare '}'.
    assert_eq!(names, vec!["unclosed and ", "real"]);

    let mut form = FormState::new(names);
    form.set_value(0, "A");
    form.set_value(1, "B");
    assert_eq!(resolve(template, form.values()), "app://odd/Abare/B");
}

#[test]
fn resolved_output_contains_no_original_spans() {
    let template = "x{a}y{b#}z{a}";
    let names = scan(template);
    let mut form = FormState::new(names);
    form.set_value(0, "1");
    form.set_value(1, "2");
    form.set_value(2, "3");
    let resolved = resolve(template, form.values());
    assert_eq!(resolved, "x1y2z3");
    assert!(scan(&resolved).is_empty());
}

#[test]
fn session_can_be_reset_and_reused_without_leaking() {
    let template = "app://user/{id#}";
    let mut form = FormState::new(scan(template));

    // First interaction: submitted.
    form.set_value(0, "1");
    assert!(form.is_form_valid());
    assert_eq!(resolve(template, form.values()), "app://user/1");
    form.reset();

    // Second interaction starts from a blank slate.
    assert_eq!(form.value(0), "");
    assert!(!form.is_form_valid());
    form.set_value(0, "2");
    assert_eq!(resolve(template, form.values()), "app://user/2");
}

#[test]
fn independent_sessions_share_nothing() {
    let template = "{id#}";
    let mut one = FormState::new(scan(template));
    let mut two = FormState::new(scan(template));

    one.set_value(0, "1");
    two.set_value(0, "nope");

    assert!(one.is_form_valid());
    assert!(!two.is_form_valid());
    assert_eq!(one.value(0), "1");
}
