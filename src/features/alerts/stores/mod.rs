mod alert_store;
mod subscriber_store;

pub use alert_store::{AlertStore, PgAlertStore};
pub use subscriber_store::{PgSubscriberStore, SubscriberStore};
