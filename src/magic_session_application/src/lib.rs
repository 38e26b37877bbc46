pub mod login_service;

pub use login_service::{Completion, LoginService, Outcome, completion};
