pub mod argon2_verifier;
