//! Particle guard.
//!
//! Stops a bare particle, or a short noun followed by a multi-mora particle
//! (み + まで), from being read as a verb stem plus an ending.
use crate::config::DeinflectConfig;
use ahash::AHashSet;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ParticleGuard {
    exact: AHashSet<String>,
    /// Longest first, so けれど is tried before けど.
    suffixes: Vec<String>,
    max_noun_chars: usize,
}

impl ParticleGuard {
    pub fn new<I, J>(particles: I, suffix_particles: J, max_noun_chars: usize) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        let mut suffixes: Vec<String> = suffix_particles.into_iter().map(Into::into).collect();
        suffixes.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        Self {
            exact: particles.into_iter().map(Into::into).collect(),
            suffixes,
            max_noun_chars,
        }
    }

    pub fn from_config(config: &DeinflectConfig) -> Self {
        Self::new(
            config.particles.iter().cloned(),
            config.suffix_particles.iter().cloned(),
            config.max_noun_chars,
        )
    }

    /// True when `word` must not be deinflected.
    pub fn blocks(&self, word: &str) -> bool {
        if self.exact.contains(word) || self.suffixes.iter().any(|p| p == word) {
            debug!("particle guard: {:?} is a particle", word);
            return true;
        }
        for particle in &self.suffixes {
            if let Some(head) = word.strip_suffix(particle.as_str()) {
                let n = head.chars().count();
                if n >= 1 && n <= self.max_noun_chars {
                    debug!("particle guard: {:?} + {:?}", head, particle);
                    return true;
                }
            }
        }
        false
    }
}

impl Default for ParticleGuard {
    fn default() -> Self {
        Self::from_config(&DeinflectConfig::default())
    }
}
