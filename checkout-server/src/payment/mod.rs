//! Payment gateway integration
//!
//! The gateway delivers asynchronous status notifications; [`reconciler`]
//! translates them into idempotent order-status updates.

pub mod notification;
pub mod reconciler;

pub use notification::{PaymentNotification, map_status};
pub use reconciler::{ReconcileOutcome, handle_notification};
