//! Data access layer.

pub mod entities;
pub mod payment_repository;

pub use payment_repository::{PaymentDraft, PaymentRepository, PaymentStore};

#[cfg(any(test, feature = "test-utils"))]
pub use payment_repository::MockPaymentRepository;
