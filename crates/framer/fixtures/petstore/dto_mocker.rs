//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Swagger Petstore
//! Source: fixtures/petstore.yaml
//! Version: 1.0.0
//! Generated by `framer`
//!
//! A sample API

use framer_support::mock;
use super::{dto, types};
pub fn create_pet_factory() -> dto::PetDto {
    create_pet_factory_with(|_| {})
}
pub fn create_pet_factory_with(
    overrides: impl FnOnce(&mut types::Pet),
) -> dto::PetDto {
    let mut model = types::Pet {
        id: Some(mock::int(100, 999)),
        name: mock::words(1, 3),
        category: Some(create_category_factory().into_inner()),
        photo_urls: mock::non_empty_vec(1, 10, || mock::words(1, 3)),
        tags: mock::vec(1, 10, || create_tag_factory().into_inner()),
        status: Some(mock::pick(types::StatusEnum::VARIANTS)),
    };
    overrides(&mut model);
    dto::PetDto::new(model)
}
pub fn create_category_factory() -> dto::CategoryDto {
    create_category_factory_with(|_| {})
}
pub fn create_category_factory_with(
    overrides: impl FnOnce(&mut types::Category),
) -> dto::CategoryDto {
    let mut model = types::Category {
        id: Some(mock::int(100, 999)),
        name: Some(mock::words(1, 3)),
    };
    overrides(&mut model);
    dto::CategoryDto::new(model)
}
pub fn create_tag_factory() -> dto::TagDto {
    create_tag_factory_with(|_| {})
}
pub fn create_tag_factory_with(
    overrides: impl FnOnce(&mut types::Tag),
) -> dto::TagDto {
    let mut model = types::Tag {
        id: Some(mock::int(100, 999)),
        name: mock::words(1, 3),
    };
    overrides(&mut model);
    dto::TagDto::new(model)
}
pub fn create_get_pets_pet_id_default_response_factory() -> dto::GetPetsPetIdDefaultResponseDto {
    create_get_pets_pet_id_default_response_factory_with(|_| {})
}
pub fn create_get_pets_pet_id_default_response_factory_with(
    overrides: impl FnOnce(&mut types::GetPetsPetIdDefaultResponse),
) -> dto::GetPetsPetIdDefaultResponseDto {
    let mut model = types::GetPetsPetIdDefaultResponse {
        code: mock::int_from(1),
        message: mock::words(1, 3),
    };
    overrides(&mut model);
    dto::GetPetsPetIdDefaultResponseDto::new(model)
}
