use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use zeroize::Zeroizing;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const PUNCTUATION: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Which character classes the emitted secret draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetPolicy {
    Lowercase,
    /// One uppercase letter, one digit and one punctuation mark, lowercase
    /// for the rest.
    Mixed,
    Digits,
}

impl CharsetPolicy {
    /// Search space a minimum length alone implies; the entropy floor when
    /// reporting bits.
    pub fn minimum_length_combinations(self, minimum_length: usize) -> f64 {
        let lowercase = LOWERCASE.len() as f64;
        match self {
            CharsetPolicy::Lowercase => lowercase.powi(minimum_length as i32),
            CharsetPolicy::Digits => (DIGITS.len() as f64).powi(minimum_length as i32),
            CharsetPolicy::Mixed => {
                let seeded = (UPPERCASE.len() * DIGITS.len() * PUNCTUATION.len()) as f64;
                seeded * lowercase.powi(minimum_length.saturating_sub(3) as i32)
            }
        }
    }
}

/// Generates a secret whose own search space covers `required_combinations`
/// and whose length reaches `minimum_length`, drawing from the OS CSPRNG.
pub fn generate(
    policy: CharsetPolicy,
    required_combinations: f64,
    minimum_length: usize,
) -> Zeroizing<String> {
    generate_with(&mut OsRng, policy, required_combinations, minimum_length)
}

/// `uniqueness` tracks the product of alphabet sizes over the drawn
/// characters; it grows geometrically, so the loop is bounded for any
/// finite requirement.
pub fn generate_with<R: Rng + CryptoRng>(
    rng: &mut R,
    policy: CharsetPolicy,
    required_combinations: f64,
    minimum_length: usize,
) -> Zeroizing<String> {
    let mut characters = Zeroizing::new(Vec::new());
    let mut uniqueness = 1f64;

    if policy == CharsetPolicy::Mixed {
        for alphabet in [UPPERCASE, DIGITS, PUNCTUATION] {
            characters.push(pick(rng, alphabet));
            uniqueness *= alphabet.len() as f64;
        }
    }

    let filler = match policy {
        CharsetPolicy::Lowercase | CharsetPolicy::Mixed => LOWERCASE,
        CharsetPolicy::Digits => DIGITS,
    };

    while uniqueness < required_combinations || characters.len() < minimum_length {
        // Fillers slot in behind the leading seed character; composition and
        // length carry the entropy, not position.
        let at = characters.len().min(1);
        characters.insert(at, pick(rng, filler));
        uniqueness *= filler.len() as f64;
    }

    Zeroizing::new(characters.iter().map(|&b| char::from(b)).collect())
}

fn pick<R: Rng + CryptoRng>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}
