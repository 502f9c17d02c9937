//! Admin credential utilities

mod password;

pub use password::{
    generate_password, hash_password, validate_password_strength, verify_password,
    GENERATED_PASSWORD_LENGTH,
};
