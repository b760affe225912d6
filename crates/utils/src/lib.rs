use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Generates a random alphanumeric secret of the given length
pub fn create_random_secret(secret_len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}
