use form_infer::FormDraft;

fn main() -> Result<(), form_infer::FormError> {
    // Questions as a coordinator might paste them from an old paper intake form
    let pasted = "\
Full name *
What is your email address? *
Mobile phone
Date of birth
Choose one preferred shift: Day, Evening, Night
Do you have health insurance? (Yes/No)
Describe any barriers to care";

    let mut draft = FormDraft::new();
    for question in draft.analyze(pasted) {
        println!(
            "{:<45} {:<9} required={:<5} confidence={}%",
            question.text,
            question.field_type,
            question.required,
            question.confidence_percent()
        );
    }

    draft.generate();
    let fields = draft.finalize()?;
    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}
