pub mod entity;
pub mod policy;
pub mod repository;
pub mod value_object;
