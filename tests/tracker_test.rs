use chrono::{Duration, Utc};
use order_tracker::clients::OrderClient;
use order_tracker::framework::mock::MockClient;
use order_tracker::framework::FrameworkError;
use order_tracker::model::{LineItem, Order, OrderId, OrderKind, OrderStatus, OrderType, ProductId};
use order_tracker::order_actor::OrderError;
use order_tracker::settings::{SettingsHandle, ThresholdSettings};
use order_tracker::tracker::{OrderDraft, OrderLifecycleTracker, TrackerError, Urgency, ValidationError};

/// Tracker against a scripted Order Store.
///
/// Every test checks `received()` so that guards which must not reach the store are verified
/// by what the mock saw, not only by the returned error.
fn order(id: &str, status: OrderStatus, total: f64, method: Option<&str>) -> Order {
    let mut order = Order::new(
        OrderId::from(id),
        "Ana",
        OrderType::Pickup,
        vec![LineItem::new(ProductId::from(1), "Taco", total)],
        Utc::now(),
    );
    order.status = status;
    order.payment_method = method.map(str::to_string);
    order
}

fn tracker_for(mock: &MockClient<Order>, settings: &SettingsHandle) -> OrderLifecycleTracker {
    OrderLifecycleTracker::new(OrderClient::new(mock.client()), settings.subscribe())
}

#[tokio::test]
async fn test_advance_refetches_both_statuses() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let a = order("a", OrderStatus::InProgress, 10.0, None);
    let mut a_pending = a.clone();
    a_pending.status = OrderStatus::PendingPayment;

    mock.expect_list().return_ok(vec![a.clone()]);
    mock.expect_action(a.id.clone()).return_ok(a_pending.clone());
    mock.expect_list().return_ok(Vec::new());
    mock.expect_list().return_ok(vec![a_pending.clone()]);

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::InProgress).await.unwrap();
    tracker
        .advance_order(&a.id, OrderStatus::PendingPayment)
        .await
        .unwrap();

    assert!(tracker.in_progress().is_empty());
    assert_eq!(tracker.pending_payment(), vec![&a_pending]);
    assert_eq!(mock.received(), vec!["list", "action", "list", "list"]);
    mock.verify();
}

#[tokio::test]
async fn test_invalid_transitions_never_reach_the_store() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let a = order("a", OrderStatus::InProgress, 10.0, None);
    mock.expect_list().return_ok(vec![a.clone()]);

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::InProgress).await.unwrap();

    assert_eq!(
        tracker.advance_order(&a.id, OrderStatus::Paid).await,
        Err(TrackerError::InvalidTransition {
            from: OrderStatus::InProgress,
            to: OrderStatus::Paid,
        })
    );
    assert!(matches!(
        tracker.mark_paid(&a.id, "cash").await,
        Err(TrackerError::InvalidTransition { .. })
    ));
    assert_eq!(
        tracker
            .advance_order(&OrderId::from("ghost"), OrderStatus::PendingPayment)
            .await,
        Err(TrackerError::UnknownOrder(OrderId::from("ghost")))
    );

    assert_eq!(mock.received(), vec!["list"]);
    mock.verify();
}

#[tokio::test]
async fn test_failed_advance_leaves_state_unchanged() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let a = order("a", OrderStatus::InProgress, 10.0, None);

    mock.expect_list().return_ok(vec![a.clone()]);
    mock.expect_action(a.id.clone())
        .return_err(FrameworkError::EntityError(Box::new(OrderError::NotFound("a".into()))));

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::InProgress).await.unwrap();

    let result = tracker.advance_order(&a.id, OrderStatus::PendingPayment).await;
    assert_eq!(result, Err(TrackerError::Store(OrderError::NotFound("a".into()))));
    assert_eq!(tracker.in_progress(), vec![&a]);
    assert_eq!(mock.received(), vec!["list", "action"]);
    mock.verify();
}

#[tokio::test]
async fn test_mark_paid_records_method_and_updates_aggregates() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let p = order("p", OrderStatus::PendingPayment, 12.0, None);
    let mut paid = p.clone();
    paid.status = OrderStatus::Paid;
    paid.payment_method = Some("card".into());

    mock.expect_list().return_ok(vec![p.clone()]);
    mock.expect_action(p.id.clone()).return_ok(paid.clone());
    mock.expect_list().return_ok(Vec::new());
    mock.expect_list().return_ok(vec![paid.clone()]);

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::PendingPayment).await.unwrap();
    tracker.mark_paid(&p.id, "card").await.unwrap();

    assert_eq!(tracker.paid(), vec![&paid]);
    assert_eq!(tracker.aggregates().earnings, 12.0);
    mock.verify();
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let a = order("a", OrderStatus::InProgress, 10.0, None);
    mock.expect_list().return_ok(vec![a.clone()]);
    mock.expect_delete(a.id.clone()).return_ok();

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::InProgress).await.unwrap();

    for wrong in ["", "DELET", " DELETE", "DELETE ", "remove"] {
        assert_eq!(
            tracker.delete_order(&a.id, wrong).await,
            Err(TrackerError::ConfirmationMismatch)
        );
    }
    assert_eq!(mock.received(), vec!["list"]);

    tracker.delete_order(&a.id, "dElEtE").await.unwrap();
    assert!(tracker.order(&a.id).is_none());
    assert_eq!(mock.received(), vec!["list", "delete"]);
    mock.verify();
}

#[tokio::test]
async fn test_deleting_paid_order_adjusts_earnings_only() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let cash = order("p1", OrderStatus::Paid, 10.0, Some("cash"));
    let courtesy = order("p2", OrderStatus::Paid, 20.0, Some("courtesy"));
    let big = order("p3", OrderStatus::Paid, 30.0, Some("cash"));

    mock.expect_list()
        .return_ok(vec![cash.clone(), courtesy.clone(), big.clone()]);
    mock.expect_delete(big.id.clone()).return_ok();
    mock.expect_delete(courtesy.id.clone()).return_ok();

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::Paid).await.unwrap();
    assert_eq!(tracker.aggregates().earnings, 40.0);
    assert_eq!(tracker.aggregates().courtesy_total, 20.0);

    tracker.delete_order(&big.id, "DELETE").await.unwrap();
    assert_eq!(tracker.aggregates().earnings, 10.0);
    assert_eq!(tracker.aggregates().courtesy_total, 20.0);

    // Courtesy totals wait for the next paid refresh.
    tracker.delete_order(&courtesy.id, "delete").await.unwrap();
    assert_eq!(tracker.aggregates().earnings, 10.0);
    assert_eq!(tracker.aggregates().courtesy_total, 20.0);
    mock.verify();
}

#[tokio::test]
async fn test_deleting_old_paid_order_keeps_earnings() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let today = order("t", OrderStatus::Paid, 15.0, Some("cash"));
    let mut old = order("o", OrderStatus::Paid, 50.0, Some("cash"));
    old.created_at = Utc::now() - Duration::days(3);

    mock.expect_list().return_ok(vec![today, old.clone()]);
    mock.expect_delete(old.id.clone()).return_ok();

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::Paid).await.unwrap();
    assert_eq!(tracker.aggregates().earnings, 15.0);

    tracker.delete_order(&old.id, "DELETE").await.unwrap();
    assert_eq!(tracker.aggregates().earnings, 15.0);
    mock.verify();
}

#[tokio::test]
async fn test_failed_delete_changes_nothing() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let paid = order("p", OrderStatus::Paid, 25.0, Some("cash"));

    mock.expect_list().return_ok(vec![paid.clone()]);
    mock.expect_delete(paid.id.clone())
        .return_err(FrameworkError::ActorClosed);

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::Paid).await.unwrap();

    let result = tracker.delete_order(&paid.id, "DELETE").await;
    assert!(matches!(
        result,
        Err(TrackerError::Store(OrderError::ActorCommunicationError(_)))
    ));
    assert_eq!(tracker.aggregates().earnings, 25.0);
    assert_eq!(tracker.paid(), vec![&paid]);
    mock.verify();
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_orders() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let a = order("a", OrderStatus::InProgress, 10.0, None);

    mock.expect_list().return_ok(vec![a.clone()]);
    mock.expect_list().return_err(FrameworkError::ActorDropped);

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::InProgress).await.unwrap();
    assert!(tracker.refresh(OrderStatus::InProgress).await.is_err());
    assert_eq!(tracker.in_progress(), vec![&a]);
    mock.verify();
}

#[tokio::test]
async fn test_refresh_all_continues_past_a_failed_status() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let pending = order("p", OrderStatus::PendingPayment, 4.0, None);
    let paid = order("q", OrderStatus::Paid, 9.0, Some("cash"));

    mock.expect_list().return_err(FrameworkError::ActorDropped);
    mock.expect_list().return_ok(vec![pending.clone()]);
    mock.expect_list().return_ok(vec![paid.clone()]);

    let mut tracker = tracker_for(&mock, &settings);
    let result = tracker.refresh_all().await;

    assert!(matches!(
        result,
        Err(TrackerError::Store(OrderError::ActorCommunicationError(_)))
    ));
    assert_eq!(tracker.pending_payment(), vec![&pending]);
    assert_eq!(tracker.paid(), vec![&paid]);
    assert_eq!(tracker.aggregates().earnings, 9.0);
    assert_eq!(mock.received(), vec!["list", "list", "list"]);
    mock.verify();
}

#[tokio::test]
async fn test_invalid_draft_is_not_submitted() {
    let mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let mut tracker = tracker_for(&mock, &settings);

    let mut draft = OrderDraft::new();
    draft.client = "Ana".into();
    assert_eq!(
        tracker.submit_draft(&mut draft).await,
        Err(TrackerError::Validation(ValidationError::NoItems))
    );

    draft.client = " ".into();
    draft.add_item(LineItem::new(ProductId::from(1), "Taco", 2.0));
    assert_eq!(
        tracker.submit_draft(&mut draft).await,
        Err(TrackerError::Validation(ValidationError::MissingClient))
    );

    assert!(mock.received().is_empty());
    assert_eq!(draft.items().len(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_submit_creates_then_edit_patches() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let created = order("a", OrderStatus::InProgress, 2.0, None);
    let mut edited = created.clone();
    edited.client = "Ana Maria".into();

    mock.expect_create().return_ok(created.clone());
    mock.expect_list().return_ok(vec![created.clone()]);
    mock.expect_update(created.id.clone()).return_ok(edited.clone());
    mock.expect_list().return_ok(vec![edited.clone()]);

    let mut tracker = tracker_for(&mock, &settings);
    let mut draft = OrderDraft::new();
    draft.client = "Ana".into();
    draft.kind = OrderKind::Pickup;
    draft.add_item(LineItem::new(ProductId::from(1), "Taco", 2.0));

    let order = tracker.submit_draft(&mut draft).await.unwrap();
    assert_eq!(order.id, created.id);
    assert!(draft.items().is_empty());

    let mut draft = tracker.edit_order(&created.id).unwrap();
    draft.client = "Ana Maria".into();
    tracker.submit_draft(&mut draft).await.unwrap();

    assert_eq!(tracker.in_progress()[0].client, "Ana Maria");
    assert!(draft.editing().is_none());
    assert_eq!(mock.received(), vec!["create", "list", "update", "list"]);
    mock.verify();
}

#[tokio::test]
async fn test_only_in_progress_orders_are_editable() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let p = order("p", OrderStatus::PendingPayment, 5.0, None);
    mock.expect_list().return_ok(vec![p.clone()]);

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::PendingPayment).await.unwrap();

    assert_eq!(
        tracker.edit_order(&p.id),
        Err(TrackerError::NotEditable {
            id: p.id.clone(),
            status: OrderStatus::PendingPayment,
        })
    );
    mock.verify();
}

#[tokio::test]
async fn test_threshold_changes_apply_to_existing_tracker() {
    let mut mock = MockClient::<Order>::new();
    let settings = SettingsHandle::default();
    let mut a = order("a", OrderStatus::InProgress, 10.0, None);
    a.created_at = Utc::now() - Duration::minutes(12);
    mock.expect_list().return_ok(vec![a.clone()]);

    let mut tracker = tracker_for(&mock, &settings);
    tracker.refresh(OrderStatus::InProgress).await.unwrap();

    let now = Utc::now();
    assert_eq!(tracker.in_progress_cards(now)[0].urgency, Urgency::Yellow);

    settings.set_thresholds(ThresholdSettings {
        yellow_limit_minutes: 20.0,
        red_limit_minutes: 30.0,
    });
    assert_eq!(tracker.in_progress_cards(now)[0].urgency, Urgency::Green);

    settings.set_thresholds(ThresholdSettings {
        yellow_limit_minutes: 5.0,
        red_limit_minutes: 8.0,
    });
    assert_eq!(tracker.urgency_at(&a, now), Urgency::Red);
    mock.verify();
}
