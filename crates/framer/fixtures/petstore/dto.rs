//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Swagger Petstore
//! Source: fixtures/petstore.yaml
//! Version: 1.0.0
//! Generated by `framer`
//!
//! A sample API

use framer_support::NonEmptyVec;
use serde::{Deserialize, Serialize};
use super::types;
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetDto(types::Pet);
impl PetDto {
    pub fn new(model: types::Pet) -> Self {
        Self(model)
    }
    pub fn into_inner(self) -> types::Pet {
        self.0
    }
    /// Copies every present value of `source` into this DTO.
    pub fn map(&mut self, source: &types::Pet) -> &mut Self {
        if let Some(value) = &source.id {
            self.0.id = Some(value.clone());
        }
        self.0.name = source.name.clone();
        if let Some(value) = &source.category {
            self.0.category = Some(value.clone());
        }
        self.0.photo_urls = source.photo_urls.clone();
        if !source.tags.is_empty() {
            self.0.tags = source.tags.clone();
        }
        if let Some(value) = &source.status {
            self.0.status = Some(value.clone());
        }
        self
    }
    pub fn id(&self) -> &Option<i64> {
        &self.0.id
    }
    pub fn set_id(&mut self, value: Option<i64>) -> &mut Self {
        self.0.id = value;
        self
    }
    pub fn name(&self) -> &String {
        &self.0.name
    }
    pub fn set_name(&mut self, value: String) -> &mut Self {
        self.0.name = value;
        self
    }
    pub fn category(&self) -> &Option<types::Category> {
        &self.0.category
    }
    pub fn set_category(&mut self, value: Option<types::Category>) -> &mut Self {
        self.0.category = value;
        self
    }
    pub fn photo_urls(&self) -> &NonEmptyVec<String> {
        &self.0.photo_urls
    }
    pub fn set_photo_urls(&mut self, value: NonEmptyVec<String>) -> &mut Self {
        self.0.photo_urls = value;
        self
    }
    pub fn tags(&self) -> &Vec<types::Tag> {
        &self.0.tags
    }
    pub fn set_tags(&mut self, value: Vec<types::Tag>) -> &mut Self {
        self.0.tags = value;
        self
    }
    pub fn status(&self) -> &Option<types::StatusEnum> {
        &self.0.status
    }
    pub fn set_status(&mut self, value: Option<types::StatusEnum>) -> &mut Self {
        self.0.status = value;
        self
    }
}
impl From<types::Pet> for PetDto {
    fn from(model: types::Pet) -> Self {
        Self(model)
    }
}
impl From<PetDto> for types::Pet {
    fn from(dto: PetDto) -> Self {
        dto.0
    }
}
impl framer_support::Dto for PetDto {
    type Model = types::Pet;
    const PROPERTIES: &'static [&'static str] = &["id", "name", "category", "photoUrls", "tags", "status"];
    fn model(&self) -> &Self::Model {
        &self.0
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryDto(types::Category);
impl CategoryDto {
    pub fn new(model: types::Category) -> Self {
        Self(model)
    }
    pub fn into_inner(self) -> types::Category {
        self.0
    }
    /// Copies every present value of `source` into this DTO.
    pub fn map(&mut self, source: &types::Category) -> &mut Self {
        if let Some(value) = &source.id {
            self.0.id = Some(value.clone());
        }
        if let Some(value) = &source.name {
            self.0.name = Some(value.clone());
        }
        self
    }
    pub fn id(&self) -> &Option<i64> {
        &self.0.id
    }
    pub fn set_id(&mut self, value: Option<i64>) -> &mut Self {
        self.0.id = value;
        self
    }
    pub fn name(&self) -> &Option<String> {
        &self.0.name
    }
    pub fn set_name(&mut self, value: Option<String>) -> &mut Self {
        self.0.name = value;
        self
    }
}
impl From<types::Category> for CategoryDto {
    fn from(model: types::Category) -> Self {
        Self(model)
    }
}
impl From<CategoryDto> for types::Category {
    fn from(dto: CategoryDto) -> Self {
        dto.0
    }
}
impl framer_support::Dto for CategoryDto {
    type Model = types::Category;
    const PROPERTIES: &'static [&'static str] = &["id", "name"];
    fn model(&self) -> &Self::Model {
        &self.0
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagDto(types::Tag);
impl TagDto {
    pub fn new(model: types::Tag) -> Self {
        Self(model)
    }
    pub fn into_inner(self) -> types::Tag {
        self.0
    }
    /// Copies every present value of `source` into this DTO.
    pub fn map(&mut self, source: &types::Tag) -> &mut Self {
        if let Some(value) = &source.id {
            self.0.id = Some(value.clone());
        }
        self.0.name = source.name.clone();
        self
    }
    pub fn id(&self) -> &Option<i64> {
        &self.0.id
    }
    pub fn set_id(&mut self, value: Option<i64>) -> &mut Self {
        self.0.id = value;
        self
    }
    pub fn name(&self) -> &String {
        &self.0.name
    }
    pub fn set_name(&mut self, value: String) -> &mut Self {
        self.0.name = value;
        self
    }
}
impl From<types::Tag> for TagDto {
    fn from(model: types::Tag) -> Self {
        Self(model)
    }
}
impl From<TagDto> for types::Tag {
    fn from(dto: TagDto) -> Self {
        dto.0
    }
}
impl framer_support::Dto for TagDto {
    type Model = types::Tag;
    const PROPERTIES: &'static [&'static str] = &["id", "name"];
    fn model(&self) -> &Self::Model {
        &self.0
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GetPetsPetIdDefaultResponseDto(types::GetPetsPetIdDefaultResponse);
impl GetPetsPetIdDefaultResponseDto {
    pub fn new(model: types::GetPetsPetIdDefaultResponse) -> Self {
        Self(model)
    }
    pub fn into_inner(self) -> types::GetPetsPetIdDefaultResponse {
        self.0
    }
    /// Copies every present value of `source` into this DTO.
    pub fn map(&mut self, source: &types::GetPetsPetIdDefaultResponse) -> &mut Self {
        self.0.code = source.code.clone();
        self.0.message = source.message.clone();
        self
    }
    pub fn code(&self) -> &i64 {
        &self.0.code
    }
    pub fn set_code(&mut self, value: i64) -> &mut Self {
        self.0.code = value;
        self
    }
    pub fn message(&self) -> &String {
        &self.0.message
    }
    pub fn set_message(&mut self, value: String) -> &mut Self {
        self.0.message = value;
        self
    }
}
impl From<types::GetPetsPetIdDefaultResponse> for GetPetsPetIdDefaultResponseDto {
    fn from(model: types::GetPetsPetIdDefaultResponse) -> Self {
        Self(model)
    }
}
impl From<GetPetsPetIdDefaultResponseDto> for types::GetPetsPetIdDefaultResponse {
    fn from(dto: GetPetsPetIdDefaultResponseDto) -> Self {
        dto.0
    }
}
impl framer_support::Dto for GetPetsPetIdDefaultResponseDto {
    type Model = types::GetPetsPetIdDefaultResponse;
    const PROPERTIES: &'static [&'static str] = &["code", "message"];
    fn model(&self) -> &Self::Model {
        &self.0
    }
}
