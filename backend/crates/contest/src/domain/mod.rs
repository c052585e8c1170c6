pub mod entity;
pub mod read_model;
pub mod repository;
pub mod value_object;
