mod outbreak_dto;

pub use outbreak_dto::OutbreakQueryParams;
