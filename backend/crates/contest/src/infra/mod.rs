pub mod postgres;

pub use postgres::PgContestRepository;
