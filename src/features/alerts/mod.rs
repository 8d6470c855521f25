//! Multilingual SMS alerts.
//!
//! An alert carries one text per language code. Every subscriber in the target
//! districts receives the text in their preferred language, falling back to the
//! dominant language of the first target district and then to English. When no
//! subscriber matches, a configurable demo recipient list is used instead.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/sms/alert` | Record and send an alert |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use clients::{AfricasTalkingClient, SmsSender};
pub use services::{AlertDispatcher, LanguageMap};
pub use stores::{AlertStore, PgAlertStore, PgSubscriberStore, SubscriberStore};
