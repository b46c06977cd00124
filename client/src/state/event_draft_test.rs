use super::*;

fn complete() -> EventDraft {
    EventDraft {
        title: "Intern Fair".to_owned(),
        date: "2026-11-03".to_owned(),
        location: "Hall B".to_owned(),
        description: "Meet recruiters.".to_owned(),
    }
}

#[test]
fn default_draft_is_empty() {
    let draft = EventDraft::default();
    for field in EventField::ALL {
        assert_eq!(draft.get(field), "");
    }
}

#[test]
fn typing_title_leaves_other_fields_empty() {
    let mut draft = EventDraft::default();
    assert!(draft.set_by_name("title", "Intern Fair".to_owned()));
    assert_eq!(
        draft,
        EventDraft { title: "Intern Fair".to_owned(), ..EventDraft::default() }
    );
}

#[test]
fn set_overwrites_only_named_field() {
    let mut draft = complete();
    draft.set(EventField::Location, "Online".to_owned());
    assert_eq!(draft.location, "Online");
    assert_eq!(draft.title, "Intern Fair");
    assert_eq!(draft.date, "2026-11-03");
    assert_eq!(draft.description, "Meet recruiters.");
}

#[test]
fn unknown_input_name_is_ignored() {
    let mut draft = complete();
    assert!(!draft.set_by_name("organizer", "Acme".to_owned()));
    assert_eq!(draft, complete());
}

#[test]
fn field_names_round_trip() {
    for field in EventField::ALL {
        assert_eq!(EventField::from_name(field.name()), Some(field));
    }
}

#[test]
fn missing_fields_lists_empty_fields_in_form_order() {
    let draft = EventDraft { title: "Intern Fair".to_owned(), description: "x".to_owned(), ..EventDraft::default() };
    assert_eq!(draft.missing_fields(), vec![EventField::Date, EventField::Location]);
}

#[test]
fn whitespace_counts_as_a_value() {
    let mut draft = complete();
    draft.set(EventField::Location, "  ".to_owned());
    assert!(draft.missing_fields().is_empty());
}

#[test]
fn submit_rejects_incomplete_draft() {
    let draft = EventDraft { title: "Intern Fair".to_owned(), ..EventDraft::default() };
    assert_eq!(
        submit(&draft),
        Err(vec![EventField::Date, EventField::Location, EventField::Description])
    );
}

#[test]
fn submit_accepts_complete_draft() {
    assert_eq!(submit(&complete()), Ok(()));
}

#[test]
fn missing_fields_message_joins_labels() {
    assert_eq!(
        missing_fields_message(&[EventField::Date, EventField::Location]),
        "Please fill in: Date, Location."
    );
}

#[test]
fn draft_serializes_with_input_names() {
    let json = serde_json::to_value(complete()).unwrap();
    assert_eq!(json["title"], "Intern Fair");
    assert_eq!(json["date"], "2026-11-03");
}

#[test]
fn submitted_message_does_not_claim_persistence() {
    assert!(!SUBMITTED_MESSAGE.to_lowercase().contains("saved"));
    assert!(SUBMITTED_MESSAGE.contains("not connected"));
}
