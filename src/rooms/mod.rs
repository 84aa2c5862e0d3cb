use time::Date;

pub mod dto;
pub mod repo;
pub mod repo_types;
pub mod services;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
