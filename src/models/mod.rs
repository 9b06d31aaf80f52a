pub mod account;
pub mod product;

pub use account::{LoginAttempt, NewLoginAttempt, NewRegistration, UserRegistration};
pub use product::Product;
