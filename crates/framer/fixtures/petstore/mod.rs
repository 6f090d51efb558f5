//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Swagger Petstore
//! Source: fixtures/petstore.yaml
//! Version: 1.0.0
//! Generated by `framer`
//!
//! A sample API

pub mod types;
pub mod dto;
pub mod dto_mocker;
