use roster::{
    Field, ManagerConfig, MutationOutcome, RecordDraft, RecordManager, RecordSchema, RosterError,
    Severity, SortDirection,
};
use std::time::{Duration, Instant};

fn student(name: &str) -> RecordDraft {
    RecordDraft::new(name, "20")
        .father_name("Omar")
        .mobile("5551234")
}

fn manager_with(count: usize) -> RecordManager {
    let mut m = RecordManager::new(ManagerConfig::default()).unwrap();
    let names = ["Ana", "Bo", "Cy", "Di", "Ed", "Flo", "Gus", "Hal", "Ida", "Jo", "Kai", "Lu"];
    for name in names.iter().take(count) {
        m.on_add_clicked(student(name)).unwrap();
    }
    m
}

#[test]
fn test_add_clicked_clears_form_on_success() {
    let mut m = manager_with(0);
    m.on_form_changed(Field::Name, "Ana");

    m.on_add_clicked(student("Ana")).unwrap();
    assert_eq!(m.form(), &RecordDraft::default());
    assert_eq!(
        m.notification(Instant::now()).unwrap().message,
        "Student 'Ana' added successfully"
    );
}

#[test]
fn test_add_clicked_keeps_form_on_rejection() {
    let mut m = manager_with(0);
    let bad = student("Ana").mobile("12a3");

    m.on_add_clicked(bad.clone()).unwrap();
    assert_eq!(m.form(), &bad);
    let note = m.notification(Instant::now()).unwrap();
    assert_eq!(note.severity, Severity::Warning);
    assert_eq!(note.message, "Mobile number must contain digits only");
}

#[test]
fn test_edit_flow() {
    let mut m = manager_with(2);

    assert!(m.on_edit_requested(2));
    let dialog = m.edit_dialog().unwrap();
    assert_eq!(dialog.id, 2);
    assert_eq!(dialog.draft.name, "Bo");

    let outcome = m.on_edit_saved(2, student("Bea")).unwrap();
    assert!(matches!(outcome, MutationOutcome::Updated(_)));
    assert!(m.edit_dialog().is_none());
    assert_eq!(m.collection().get(2).unwrap().name(), "Bea");
}

#[test]
fn test_rejected_edit_keeps_dialog_open() {
    let mut m = manager_with(1);
    m.on_edit_requested(1);

    let bad = student("An4");
    m.on_edit_saved(1, bad.clone()).unwrap();

    assert_eq!(m.edit_dialog().unwrap().draft, bad);
    assert_eq!(m.collection().get(1).unwrap().name(), "Ana");
}

#[test]
fn test_edit_of_vanished_record_warns() {
    let mut m = manager_with(1);
    m.on_edit_requested(1);
    m.delete(1).unwrap();

    let outcome = m.on_edit_saved(1, student("Bea")).unwrap();
    assert_eq!(outcome, MutationOutcome::NotFound(1));
    assert!(m.edit_dialog().is_none());
    assert_eq!(
        m.notification(Instant::now()).unwrap().severity,
        Severity::Warning
    );
}

#[test]
fn test_edit_cancelled() {
    let mut m = manager_with(1);
    m.on_edit_requested(1);
    m.on_edit_cancelled();
    assert!(m.edit_dialog().is_none());
    assert!(!m.on_edit_requested(77));
}

#[test]
fn test_delete_flow() {
    let mut m = manager_with(3);

    assert!(m.on_delete_requested(2));
    assert_eq!(m.delete_dialog().unwrap().id, 2);

    m.on_delete_confirmed(2).unwrap();
    assert!(m.delete_dialog().is_none());
    assert_eq!(m.collection().ids(), vec![1, 3]);
    assert_eq!(
        m.notification(Instant::now()).unwrap().severity,
        Severity::Info
    );
}

#[test]
fn test_delete_cancelled_keeps_record() {
    let mut m = manager_with(1);
    m.on_delete_requested(1);
    m.on_delete_cancelled();

    assert!(m.delete_dialog().is_none());
    assert_eq!(m.collection().len(), 1);
}

#[test]
fn test_sort_header_toggles_then_switches() {
    let mut m = manager_with(3);

    m.on_sort_header_clicked(Field::Name);
    assert_eq!(m.view_state().sort_field, Field::Name);
    assert_eq!(m.view_state().sort_direction, SortDirection::Asc);

    m.on_sort_header_clicked(Field::Name);
    assert_eq!(m.view_state().sort_direction, SortDirection::Desc);
    assert_eq!(m.view().ids(), vec![3, 2, 1]);

    m.on_sort_header_clicked(Field::Age);
    assert_eq!(m.view_state().sort_field, Field::Age);
    assert_eq!(m.view_state().sort_direction, SortDirection::Asc);
}

#[test]
fn test_sort_on_field_outside_schema_ignored() {
    let mut m = RecordManager::new(ManagerConfig::new(RecordSchema::Minimal)).unwrap();
    m.on_sort_header_clicked(Field::Mobile);
    assert_eq!(m.view_state().sort_field, Field::Id);
}

#[test]
fn test_search_resets_page() {
    let mut m = manager_with(12);
    m.on_page_changed(2);
    assert_eq!(m.view_state().page, 2);

    m.on_search_changed("a");
    assert_eq!(m.view_state().page, 0);
}

#[test]
fn test_page_clamped_after_delete() {
    let mut m = manager_with(6);
    m.on_page_changed(1);
    assert_eq!(m.view().row_count(), 1);

    m.on_delete_confirmed(6).unwrap();
    assert_eq!(m.view_state().page, 0);
    assert_eq!(m.view().row_count(), 5);
}

#[test]
fn test_page_changed_past_end_is_clamped() {
    let mut m = manager_with(7);
    m.on_page_changed(9);
    assert_eq!(m.view_state().page, 1);
}

#[test]
fn test_page_size_change() {
    let mut m = manager_with(12);
    m.on_page_changed(1);

    m.on_page_size_changed(10).unwrap();
    assert_eq!(m.view_state().page, 0);
    assert_eq!(m.view().row_count(), 10);

    assert!(matches!(
        m.on_page_size_changed(7),
        Err(RosterError::InvalidPageSize(7))
    ));
    assert_eq!(m.view_state().page_size, 10);
}

#[test]
fn test_save_reports_success() {
    let mut m = manager_with(2);
    m.on_save_clicked().unwrap();

    let note = m.notification(Instant::now()).unwrap();
    assert_eq!(note.severity, Severity::Success);
    assert_eq!(note.message, "Students saved successfully!");
    assert_eq!(m.collection().len(), 2);
}

#[test]
fn test_notification_expires_and_closes() {
    let config = ManagerConfig::default().notification_ttl(Duration::from_millis(500));
    let mut m = RecordManager::new(config).unwrap();
    m.on_add_clicked(student("Ana")).unwrap();

    let later = Instant::now() + Duration::from_secs(1);
    assert!(m.notification(later).is_none());

    m.on_save_clicked().unwrap();
    assert!(m.notification(Instant::now()).is_some());
    m.on_notification_closed();
    assert!(m.notification(Instant::now()).is_none());
}
