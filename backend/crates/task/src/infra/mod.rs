pub mod postgres;

pub use postgres::PgTaskRepository;
