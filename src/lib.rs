pub mod activity;
pub mod constants;
pub mod error;
pub mod number;
pub mod output;
pub mod timestamp;

pub use activity::{ActivityGenerator, ActivityRecord, ActivityTemplate, GeneratorConfig};
pub use error::GenError;
pub use output::{LineEnding, write_activity, write_batch};

/// Render one record for `day_offset` with a throwaway entropy-seeded
/// generator and the default template.
pub fn generate_activity(day_offset: i64) -> Result<String, GenError> {
    let mut generator =
        ActivityGenerator::new(ActivityTemplate::default(), GeneratorConfig::default())?;
    Ok(generator.generate_activity(day_offset)?.to_string())
}
