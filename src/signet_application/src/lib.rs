pub mod use_cases;

pub use use_cases::login::{AuthAttempt, AuthError, LoginUseCase, RejectionCause};
