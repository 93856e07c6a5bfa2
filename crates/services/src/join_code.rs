use crate::error::{Result, ServiceError};
use mentorship_database::OrganizationRepository;
use mentorship_models::JOIN_CODE_LENGTH;
use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// Collisions are a birthday-bound rarity at 36^8 codes; the bound just
// turns a pathological store into an observable error instead of a
// busy loop.
const MAX_ATTEMPTS: usize = 32;

/// Existence probe the generator samples against.
pub trait JoinCodeProbe {
    async fn join_code_exists(&self, code: &str) -> Result<bool>;
}

impl JoinCodeProbe for OrganizationRepository {
    async fn join_code_exists(&self, code: &str) -> Result<bool> {
        Ok(OrganizationRepository::join_code_exists(self, code).await?)
    }
}

fn sample_code<R: Rng>(rng: &mut R) -> String {
    (0..JOIN_CODE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a join code that no existing organization uses, resampling
/// on collision.
pub async fn generate<P: JoinCodeProbe>(probe: &P) -> Result<String> {
    for _ in 0..MAX_ATTEMPTS {
        let code = {
            let mut rng = rand::thread_rng();
            sample_code(&mut rng)
        };

        if !probe.join_code_exists(&code).await? {
            return Ok(code);
        }

        tracing::warn!(%code, "join code collision, resampling");
    }

    Err(ServiceError::Internal(
        "exhausted join code generation attempts".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentorship_models::is_valid_join_code;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;

    struct CollideFirst {
        remaining: Mutex<usize>,
    }

    impl JoinCodeProbe for CollideFirst {
        async fn join_code_exists(&self, _code: &str) -> Result<bool> {
            let mut remaining = self.remaining.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }

    #[test]
    fn test_sampled_codes_have_the_right_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = sample_code(&mut rng);
            assert_eq!(code.len(), JOIN_CODE_LENGTH);
            assert!(is_valid_join_code(&code), "bad code: {}", code);
        }
    }

    #[tokio::test]
    async fn test_resamples_until_no_collision() {
        let probe = CollideFirst {
            remaining: Mutex::new(3),
        };

        let code = generate(&probe).await.unwrap();
        assert!(is_valid_join_code(&code));
        assert_eq!(*probe.remaining.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_gives_up_after_bounded_attempts() {
        let probe = CollideFirst {
            remaining: Mutex::new(usize::MAX),
        };

        let result = generate(&probe).await;
        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }
}
