//! Synthetic activity generation.
//!
//! An [`ActivityGenerator`] owns its random source, so a fixed seed
//! reproduces ids and probabilities exactly.

use rand::prelude::*;
use tracing::debug;
use uuid::Builder;

use crate::constants;
use crate::error::GenError;
use crate::output::check_prefixed_name;
use crate::timestamp;

/// Fixed fields shared by every generated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityTemplate {
    /// Subject prefix; the UUID is appended to it.
    pub id_prefix: String,
    /// `suite:source` URI.
    pub source: String,
    /// `suite:activityID` integer.
    pub activity_id: i64,
    /// `suite:activityType` term.
    pub activity_type: String,
    /// `suite:state` term.
    pub state: String,
    /// Instant `suite:from` is offset from.
    pub base_timestamp: String,
}

impl Default for ActivityTemplate {
    fn default() -> Self {
        Self {
            id_prefix: constants::ID_PREFIX.to_string(),
            source: constants::SOURCE_URI.to_string(),
            activity_id: constants::ACTIVITY_ID,
            activity_type: constants::ACTIVITY_TYPE.to_string(),
            state: constants::STATE.to_string(),
            base_timestamp: constants::BASE_TIMESTAMP.to_string(),
        }
    }
}

impl ActivityTemplate {
    /// Check every field that is written without quoting, and the base
    /// timestamp.
    pub fn validate(&self) -> Result<(), GenError> {
        // The subject is the prefix plus a UUID, so probe it with one digit.
        if check_prefixed_name("id prefix", &format!("{}0", self.id_prefix)).is_err() {
            return Err(GenError::InvalidTerm {
                field: "id prefix",
                value: self.id_prefix.clone(),
            });
        }
        check_prefixed_name("activity type", &self.activity_type)?;
        check_prefixed_name("state", &self.state)?;
        timestamp::parse_iso(&self.base_timestamp)?;
        Ok(())
    }
}

/// Configuration for the activity generator.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

/// One synthetic activity, with every field already rendered except the
/// probability.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: String,
    pub source: String,
    pub activity_id: i64,
    pub activity_type: String,
    pub probability: f64,
    pub from: String,
    pub to: String,
    pub state: String,
}

/// Generator that creates synthetic activity records.
pub struct ActivityGenerator {
    template: ActivityTemplate,
    rng: StdRng,
}

impl ActivityGenerator {
    /// Create a generator, seeding from OS entropy unless `config.seed` is set.
    ///
    /// Fails if the template does not validate.
    pub fn new(template: ActivityTemplate, config: GeneratorConfig) -> Result<Self, GenError> {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
        debug!(seed, "seeding activity generator");
        Self::from_rng(template, StdRng::seed_from_u64(seed))
    }

    /// Create a generator drawing from an existing random source.
    pub fn from_rng(template: ActivityTemplate, rng: StdRng) -> Result<Self, GenError> {
        template.validate()?;
        Ok(Self { template, rng })
    }

    pub fn template(&self) -> &ActivityTemplate {
        &self.template
    }

    /// A fresh subject such as `suite:activity_3f0c…`, with a v4 UUID built
    /// from the generator's random source.
    pub fn generate_id(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.r#gen();
        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        format!("{}{}", self.template.id_prefix, uuid.hyphenated())
    }

    /// Uniform in `[0, 1)`.
    pub fn generate_probability(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// The base timestamp shifted by `day_offset` days.
    pub fn generate_from_date(&self, day_offset: i64) -> Result<String, GenError> {
        timestamp::shift_days(&self.template.base_timestamp, day_offset)
    }

    /// `from` shifted by the fixed activity duration.
    pub fn generate_to_date(&self, from: &str) -> Result<String, GenError> {
        timestamp::shift_seconds(from, constants::DURATION_SECS)
    }

    /// Compose one record for `day_offset`.
    pub fn generate_activity(&mut self, day_offset: i64) -> Result<ActivityRecord, GenError> {
        let id = self.generate_id();
        let probability = self.generate_probability();
        let from = self.generate_from_date(day_offset)?;
        let to = self.generate_to_date(&from)?;
        Ok(ActivityRecord {
            id,
            source: self.template.source.clone(),
            activity_id: self.template.activity_id,
            activity_type: self.template.activity_type.clone(),
            probability,
            from,
            to,
            state: self.template.state.clone(),
        })
    }
}
