mod district_resolver;
mod district_service;

pub use district_resolver::DistrictResolver;
pub use district_service::DistrictService;
