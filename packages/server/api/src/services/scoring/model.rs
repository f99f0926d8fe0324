use super::features::FeatureVector;

/// Seam for the base prediction. The reference implementation is a fixed
/// lookup table; a remote model or an embedded one can stand behind the
/// same trait as long as it stays a deterministic type -> [0,1] mapping
/// with a documented default.
pub trait BaseScoreModel: Send + Sync {
    fn predict(&self, issue_type: &str, features: &FeatureVector) -> f32;
}

/// Base score when the type is missing or unrecognized.
pub const DEFAULT_BASE_SCORE: f32 = 0.5;

/// Reference type -> base score table.
pub struct LookupModel;

impl BaseScoreModel for LookupModel {
    fn predict(&self, issue_type: &str, _features: &FeatureVector) -> f32 {
        match issue_type {
            "Pothole" => 0.7,
            "Garbage" => 0.4,
            "Streetlight" => 0.3,
            _ => DEFAULT_BASE_SCORE,
        }
    }
}
