pub mod session_authenticator;
