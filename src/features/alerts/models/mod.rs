mod alert;
mod dispatch_outcome;
mod language;
mod subscriber;

pub use alert::{Alert, CreateAlert};
pub use dispatch_outcome::{DeliveryStatus, DispatchOutcome};
pub use language::Language;
pub use subscriber::{Recipient, Subscriber};
