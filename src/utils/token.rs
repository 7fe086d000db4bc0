use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::distributions::Alphanumeric;
use rand::Rng;
use rand_core::OsRng;
use totp_rs::{Algorithm, Secret, TOTP};

/// Length of API tokens and temporary tokens.
const TOKEN_LENGTH: usize = 32;

/// Generate a random alphanumeric token string.
pub fn new_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Generate a fresh base32 encoded TOTP secret.
pub fn new_second_factor_secret() -> String {
    Secret::generate_secret().to_encoded().to_string()
}

/// Verify a TOTP code against a base32 encoded secret.
pub fn verify_totp(secret: &str, code: &str) -> bool {
    let Ok(bytes) = Secret::Encoded(secret.to_string()).to_bytes() else {
        return false;
    };
    let Ok(totp) = TOTP::new(Algorithm::SHA1, 6, 1, 30, bytes) else {
        return false;
    };
    totp.check_current(code).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_alphanumeric_and_sized() {
        let token = new_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn password_hash_roundtrip() {
        let hash = hash_password("secret_pw").unwrap();
        assert!(verify_password("secret_pw", &hash));
        assert!(!verify_password("wrong_pw", &hash));
    }

    #[test]
    fn totp_accepts_current_code() {
        let secret = new_second_factor_secret();
        let bytes = Secret::Encoded(secret.clone()).to_bytes().unwrap();
        let totp = TOTP::new(Algorithm::SHA1, 6, 1, 30, bytes).unwrap();
        let code = totp.generate_current().unwrap();
        assert!(verify_totp(&secret, &code));
        assert!(!verify_totp(&secret, "000000"));
    }

    #[test]
    fn totp_rejects_garbage_secret() {
        assert!(!verify_totp("not base32!!", "123456"));
    }
}
