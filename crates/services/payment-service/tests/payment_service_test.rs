//! Payment service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;
use rust_decimal::Decimal;

use common::AppError;
use domain::{Payment, PAYMENT_STATUS_PROCESSED};
use payment_service_lib::repository::{MockPaymentRepository, PaymentDraft};
use payment_service_lib::service::{PaymentManager, PaymentService};

fn payment_from_draft(id: i64, draft: PaymentDraft) -> Payment {
    Payment {
        id,
        transaction_id: draft.transaction_id,
        user_id: draft.user_id,
        amount: draft.amount,
        currency: draft.currency,
        status: draft.status,
        payment_method: draft.payment_method,
        created_at: draft.created_at,
    }
}

#[tokio::test]
async fn process_payment_stamps_generated_fields() {
    let mut repo = MockPaymentRepository::new();
    repo.expect_create()
        .withf(|draft| {
            draft.status == PAYMENT_STATUS_PROCESSED && !draft.transaction_id.is_empty()
        })
        .returning(|draft| Ok(payment_from_draft(1, draft)));

    let service = PaymentManager::new(Arc::new(repo));
    let payment = service
        .process_payment(
            42,
            Decimal::new(9999, 2),
            "USD".to_string(),
            "CREDIT_CARD".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(payment.status, PAYMENT_STATUS_PROCESSED);
    assert_eq!(payment.user_id, 42);
    assert_eq!(payment.amount, Decimal::new(9999, 2));
    // transaction_id is a UUID v4 string
    assert_eq!(payment.transaction_id.len(), 36);
}

#[tokio::test]
async fn process_payment_generates_unique_transaction_ids() {
    let mut repo = MockPaymentRepository::new();
    repo.expect_create()
        .times(2)
        .returning(|draft| Ok(payment_from_draft(1, draft)));

    let service = PaymentManager::new(Arc::new(repo));
    let first = service
        .process_payment(1, Decimal::ONE, "EUR".to_string(), "PAYPAL".to_string())
        .await
        .unwrap();
    let second = service
        .process_payment(1, Decimal::ONE, "EUR".to_string(), "PAYPAL".to_string())
        .await
        .unwrap();

    assert_ne!(first.transaction_id, second.transaction_id);
}

#[tokio::test]
async fn get_payment_not_found() {
    let mut repo = MockPaymentRepository::new();
    repo.expect_find_by_id().with(eq(99)).returning(|_| Ok(None));

    let service = PaymentManager::new(Arc::new(repo));
    let result = service.get_payment(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn get_payments_by_status_passes_filter_through() {
    let mut repo = MockPaymentRepository::new();
    repo.expect_find_by_status()
        .withf(|status| status == "PROCESSED")
        .returning(|_| Ok(vec![]));

    let service = PaymentManager::new(Arc::new(repo));
    let payments = service.get_payments_by_status("PROCESSED").await.unwrap();

    assert!(payments.is_empty());
}

#[tokio::test]
async fn update_missing_payment_is_not_found() {
    let mut repo = MockPaymentRepository::new();
    repo.expect_update()
        .returning(|_, _, _, _, _| Err(AppError::NotFound));

    let service = PaymentManager::new(Arc::new(repo));
    let result = service
        .update_payment(
            99,
            Decimal::ONE,
            "USD".to_string(),
            "REFUNDED".to_string(),
            "CREDIT_CARD".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn delete_missing_payment_is_not_found() {
    let mut repo = MockPaymentRepository::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let service = PaymentManager::new(Arc::new(repo));
    let result = service.delete_payment(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}
