//! Infrastructure layer: storage and wire conversion.

pub mod dto;
pub mod repository;
