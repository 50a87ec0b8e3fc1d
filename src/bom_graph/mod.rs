pub mod domain;
pub mod services;
