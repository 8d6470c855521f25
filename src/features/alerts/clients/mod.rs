mod africas_talking_client;
mod sms_sender;

pub use africas_talking_client::AfricasTalkingClient;
pub use sms_sender::SmsSender;
