mod payment_service;

pub use payment_service::{PaymentManager, PaymentService};
