pub mod calculator;
pub mod numeric;
pub mod projection;
pub mod repository;
