mod alert_dto;

pub use alert_dto::{AlertDispatchResponseDto, AlertResultDto, SendAlertDto};
