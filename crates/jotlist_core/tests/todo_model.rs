use jotlist_core::{Todo, TodoValidationError};

#[test]
fn todo_new_keeps_text_as_entered() {
    let todo = Todo::new(1, "  Buy milk ").unwrap();

    assert_eq!(todo.id, 1);
    assert_eq!(todo.text, "  Buy milk ");
}

#[test]
fn todo_new_rejects_empty_and_whitespace_text() {
    let err = Todo::new(1, "").unwrap_err();
    assert_eq!(err, TodoValidationError::EmptyText);

    let err = Todo::new(1, "   \t ").unwrap_err();
    assert_eq!(err, TodoValidationError::EmptyText);
}

#[test]
fn todo_new_rejects_non_positive_ids() {
    let err = Todo::new(0, "valid text").unwrap_err();
    assert_eq!(err, TodoValidationError::NonPositiveId(0));

    let err = Todo::new(-1, "valid text").unwrap_err();
    assert_eq!(err, TodoValidationError::NonPositiveId(-1));
}

#[test]
fn todo_serialization_uses_expected_wire_fields() {
    let todo = Todo::new(7, "Walk dog").unwrap();

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["text"], "Walk dog");

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn validation_errors_render_readable_messages() {
    assert_eq!(
        TodoValidationError::EmptyText.to_string(),
        "todo text must not be empty"
    );
    assert_eq!(
        TodoValidationError::NonPositiveId(-3).to_string(),
        "todo id must be positive, got -3"
    );
}
