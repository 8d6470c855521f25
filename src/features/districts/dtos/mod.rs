mod district_dto;

pub use district_dto::{CreateDistrictDto, DistrictResponseDto, ResolvePointDto};
