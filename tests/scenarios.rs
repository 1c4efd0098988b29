use form_infer::{materialize, parse, FieldType, FormDraft};
use std::collections::HashSet;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "confidence {} != {}",
        actual,
        expected
    );
}

#[test]
fn test_scenario_required_email() {
    let questions = parse("What is your email address? *");
    assert_eq!(questions.len(), 1);

    let q = &questions[0];
    assert_eq!(q.text, "What is your email address?");
    assert_eq!(q.field_type, FieldType::Email);
    assert!(q.required);
    assert!(q.options.is_none());
    assert_close(q.confidence, 1.0);
    assert_eq!(q.confidence_percent(), 100);
}

#[test]
fn test_scenario_options_without_choice_keyword() {
    let q = &parse("Which services do you need? (Medical, Dental, Vision)")[0];
    assert_eq!(q.field_type, FieldType::Text);
    assert!(q.options.is_none());
    assert_close(q.confidence, 0.5);
}

#[test]
fn test_scenario_select_with_options() {
    let q = &parse("Select the services you need (Medical, Dental, Vision)")[0];
    assert_eq!(q.field_type, FieldType::Select);
    assert_eq!(q.options(), ["Medical", "Dental", "Vision"]);
    assert_close(q.confidence, 0.9);
    assert_eq!(q.text, "Select the services you need");
}

#[test]
fn test_scenario_confidence_is_stored_unclamped() {
    let q = &parse("Choose one shift (Day, Night) *")[0];
    assert_eq!(q.field_type, FieldType::Radio);
    assert!(q.required);
    assert_eq!(q.options(), ["Day", "Night"]);
    assert_eq!(q.text, "Choose one shift");
    assert_close(q.confidence, 1.1);
    assert_eq!(q.confidence_percent(), 100);
}

#[test]
fn test_scenario_yes_no() {
    let q = &parse("Are you currently employed? (Yes/No)")[0];
    assert_eq!(q.field_type, FieldType::Yesno);
    assert!(q.options.is_none());
    assert_close(q.confidence, 0.9);
    assert_eq!(q.text, "Are you currently employed?");
}

#[test]
fn test_scenario_blank_lines_dropped() {
    let questions = parse("Full name\n   \nAge:");
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].text, "Full name");
    assert_eq!(questions[1].field_type, FieldType::Number);
}

#[test]
fn test_scenario_append_to_existing() {
    let questions = parse("First name\nPhone number *\nChoose one shift: Day, Night");
    let fields = materialize(&questions, 5);

    let orders: Vec<usize> = fields.iter().map(|f| f.order).collect();
    assert_eq!(orders, vec![5, 6, 7]);
    let ids: HashSet<&str> = fields.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids.len(), 3);

    let shift = &fields[2];
    assert_eq!(shift.field_type, FieldType::Radio);
    let values: Vec<&str> = shift
        .options
        .as_ref()
        .unwrap()
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(values, vec!["day", "night"]);
}

#[test]
fn test_parse_is_deterministic() {
    let text = "Email *\nPick many (A, B)\nDescribe yourself\nWhen did you start?";
    assert_eq!(parse(text), parse(text));
}

#[test]
fn test_required_marker_detection() {
    let questions = parse("Name *\nNotes (Required)\nNickname\nMiddle * name");
    let required: Vec<bool> = questions.iter().map(|q| q.required).collect();
    assert_eq!(required, vec![true, true, false, true]);
    assert_eq!(questions[3].text, "Middle * name");
}

#[test]
fn test_options_present_only_for_choice_types() {
    let text = "Pick multiple (Spanish, English)\nEmail (work, home)\nSelect a county\nComments: none";
    for q in parse(text) {
        if !q.options().is_empty() {
            assert!(q.field_type.is_choice(), "{:?} carries options", q);
        }
    }
    let questions = parse(text);
    assert_eq!(questions[0].field_type, FieldType::Checkbox);
    assert_eq!(questions[0].options().len(), 2);
    assert!(questions[2].options.is_none());
}

#[test]
fn test_names_are_machine_safe() {
    let text = "What is the full legal name of your organization, including any DBA names?\nE-mail!!";
    for field in materialize(&parse(text), 0) {
        assert!(field.name.len() <= 50);
        assert!(field
            .name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
    }
}

#[test]
fn test_questions_serialize_with_wire_names() {
    let json = serde_json::to_value(parse("Pick one (A, B)")).unwrap();
    assert_eq!(json[0]["type"], "radio");
    assert_eq!(json[0]["options"][1], "B");
    assert!(json[0].get("field_type").is_none());
}

#[test]
fn test_draft_end_to_end() {
    let mut draft = FormDraft::new();
    draft.analyze("Your name *\nHow many children do you have?");
    assert_eq!(draft.generate(), 2);

    let blank_id = draft.add_blank_field().id.clone();
    assert!(draft.finalize().is_err());

    draft.delete_field(&blank_id).unwrap();
    let fields = draft.finalize().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].field_type, FieldType::Number);
    assert_eq!(fields[1].name, "how_many_children_do_you_have");
}
