use common::error::{ApiError, Recovery};
use common::grid::actions::{Effect, RowActions, RowEvent};
use common::grid::inflight::RowAction;
use common::grid::GridState;
use common::model::subscriber::NewsletterSubscriber;
use common::model::RecordId;

fn subscriber(id: usize, active: bool) -> NewsletterSubscriber {
    NewsletterSubscriber {
        id: RecordId::new(id.to_string()),
        email: format!("user{}@example.com", id),
        name: None,
        is_active: active,
        source: None,
        subscribed_at: None,
        created_at: None,
        updated_at: None,
    }
}

fn visible_ids(grid: &GridState, records: &[NewsletterSubscriber]) -> Vec<RecordId> {
    grid.project(records)
        .rows
        .into_iter()
        .map(|record| record.id.clone())
        .collect()
}

#[test]
fn dismissed_delete_confirmation_sends_nothing() {
    let records: Vec<_> = (1..=3).map(|i| subscriber(i, true)).collect();
    let grid = GridState::default();
    let before = visible_ids(&grid, &records);
    let mut rows = RowActions::default();
    let id = RecordId::from("2");

    assert_eq!(rows.apply(RowEvent::AskDelete(id.clone()), true), Effect::Render);
    assert_eq!(rows.confirm_delete(), Some(&id));

    assert_eq!(rows.apply(RowEvent::CancelDelete, true), Effect::Render);
    assert_eq!(rows.confirm_delete(), None);
    assert!(rows.in_flight().is_empty());

    // A stray confirm after the sheet closed has no target.
    assert_eq!(rows.apply(RowEvent::ConfirmDelete, true), Effect::None);
    assert!(rows.in_flight().is_empty());
    assert_eq!(visible_ids(&grid, &records), before);
}

#[test]
fn confirmed_delete_is_sent_once_while_pending() {
    let mut rows = RowActions::default();
    let id = RecordId::from("7");

    rows.apply(RowEvent::AskDelete(id.clone()), true);
    assert_eq!(
        rows.apply(RowEvent::ConfirmDelete, true),
        Effect::Send(id.clone(), RowAction::Delete)
    );
    assert_eq!(rows.confirm_delete(), None);

    // Asked and confirmed again before the first request came back.
    rows.apply(RowEvent::AskDelete(id.clone()), true);
    let second = rows.apply(RowEvent::ConfirmDelete, true);
    assert!(!matches!(second, Effect::Send(..)));
    assert_eq!(rows.confirm_delete(), None);

    rows.apply(RowEvent::Settled(id.clone(), RowAction::Delete), true);
    rows.apply(RowEvent::AskDelete(id.clone()), true);
    assert_eq!(
        rows.apply(RowEvent::ConfirmDelete, true),
        Effect::Send(id, RowAction::Delete)
    );
}

#[test]
fn rejected_credential_on_toggle_signs_out_without_refetch() {
    let records: Vec<_> = (1..=12).map(|i| subscriber(i, i % 2 == 0)).collect();
    let grid = GridState::default();
    let before = visible_ids(&grid, &records);
    let mut rows = RowActions::default();
    let id = RecordId::from("4");

    assert_eq!(
        rows.apply(RowEvent::ChangeStatus(id.clone()), true),
        Effect::Send(id.clone(), RowAction::Status)
    );

    let error = ApiError::from_response(401, r#"{"message":"Unauthorized"}"#);
    assert_eq!(rows.apply(RowEvent::Failed(error), true), Effect::Recover(Recovery::SignIn));
    rows.apply(RowEvent::Settled(id.clone(), RowAction::Status), true);

    assert!(!rows.in_flight().is_row_busy(&id));
    assert_eq!(visible_ids(&grid, &records), before);
    assert!(records[3].is_active);
}

#[test]
fn successful_toggle_asks_for_a_refetch() {
    let mut rows = RowActions::default();
    let id = RecordId::from("1");
    rows.apply(RowEvent::ChangeStatus(id.clone()), true);
    assert_eq!(rows.apply(RowEvent::Succeeded, true), Effect::Refetch);
    assert!(rows.apply(RowEvent::Settled(id, RowAction::Status), true).should_render());
}

#[test]
fn forbidden_change_sends_the_user_home() {
    let mut rows = RowActions::default();
    let error = ApiError::from_response(403, "{}");
    assert_eq!(rows.apply(RowEvent::Failed(error), true), Effect::Recover(Recovery::GoHome));
}
