use chrono::Timelike;
use shared::dto::{IssueId, IssueInput, Priority};

use super::features::{
    self, FeatureVector, ImageQualityProbe, DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
    DENSITY_RADIUS_DEGREES,
};
use super::model::BaseScoreModel;
use super::roster::{IssueRoster, RosterEntry};

const SCORE_MIN: f32 = 0.1;
const SCORE_MAX: f32 = 0.99;

/// Where the engine reads the hour-of-day from.
///
/// Priority reflects conditions at scoring time, not report time, so the
/// wall clock is the production source. Fixed exists for tests and for
/// replaying a batch under known conditions.
#[derive(Debug, Clone, Copy)]
pub enum HourSource {
    Wall,
    Fixed(u32),
}

impl HourSource {
    fn current(&self) -> u32 {
        match self {
            HourSource::Wall => chrono::Local::now().hour(),
            HourSource::Fixed(h) => *h,
        }
    }
}

/// Scored outcome for one issue. `score` is already clamped.
#[derive(Debug, Clone)]
pub struct ScoredIssue {
    pub id: Option<IssueId>,
    pub score: f32,
    pub priority: Priority,
    pub features: FeatureVector,
}

/// Combines the base score for an issue's type with contextual boosts and
/// classifies the result into a tier.
///
/// Owns its collaborators: the roster (density lookups), the base model and
/// the image-quality probe are injected at construction so tests get a
/// fresh, deterministic engine.
pub struct PriorityEngine {
    roster: IssueRoster,
    model: Box<dyn BaseScoreModel>,
    probe: Box<dyn ImageQualityProbe>,
    hours: HourSource,
}

impl PriorityEngine {
    pub fn new(model: Box<dyn BaseScoreModel>, probe: Box<dyn ImageQualityProbe>) -> Self {
        Self::with_hour_source(model, probe, HourSource::Wall)
    }

    pub fn with_hour_source(
        model: Box<dyn BaseScoreModel>,
        probe: Box<dyn ImageQualityProbe>,
        hours: HourSource,
    ) -> Self {
        Self {
            roster: IssueRoster::new(),
            model,
            probe,
            hours,
        }
    }

    pub fn roster(&self) -> &IssueRoster {
        &self.roster
    }

    /// Derive the feature vector for a location at the given hour, reading
    /// the roster as it currently stands.
    fn extract_features(&self, lat: f64, lon: f64, hour: u32) -> FeatureVector {
        FeatureVector {
            weather_boost: features::weather_boost(lat, lon, hour),
            traffic_boost: features::traffic_boost(lat, lon, hour),
            image_quality_penalty: self.probe.estimate(),
            local_density: self.roster.count_near(lat, lon, DENSITY_RADIUS_DEGREES),
            hour_of_day: hour,
        }
    }

    /// Score one issue. Never fails: missing coordinates and unknown types
    /// are repaired, not rejected.
    ///
    /// Of the extracted features only the weather and traffic boosts
    /// currently perturb the base score; the image-quality penalty and the
    /// local density are surfaced on the result but unused. Folding them in
    /// is an extension, not a silent change.
    pub fn score_one(&self, issue: &IssueInput) -> ScoredIssue {
        let (lat, lon) = self.resolve_location(issue);
        let hour = self.hours.current();

        let features = self.extract_features(lat, lon, hour);
        let issue_type = match issue.issue_type.as_deref() {
            Some(t) => t,
            None => {
                tracing::debug!(id = ?issue.id, "issue missing type, scoring with default base");
                "Unknown"
            }
        };

        let base = self.model.predict(issue_type, &features);
        let score =
            (base + features.weather_boost + features.traffic_boost).clamp(SCORE_MIN, SCORE_MAX);
        let priority = Priority::from_score(score);

        self.roster.append(RosterEntry {
            id: issue.id.clone(),
            issue_type: issue_type.to_string(),
            latitude: lat,
            longitude: lon,
            score,
        });

        tracing::info!(
            issue_type,
            score = format!("{score:.3}").as_str(),
            priority = priority.as_str(),
            density = features.local_density,
            "priority calculated"
        );

        ScoredIssue {
            id: issue.id.clone(),
            score,
            priority,
            features,
        }
    }

    /// Score a batch, one result per input, in input order.
    ///
    /// Runs genuinely sequentially so earlier elements are visible to the
    /// density reads of later ones, same as calling `score_one` in a loop.
    pub fn score_many(&self, issues: &[IssueInput]) -> Vec<ScoredIssue> {
        issues.iter().map(|issue| self.score_one(issue)).collect()
    }

    fn resolve_location(&self, issue: &IssueInput) -> (f64, f64) {
        match (issue.latitude, issue.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => (lat, lon),
            _ => {
                tracing::debug!(
                    id = ?issue.id,
                    "issue missing usable coordinates, using region centroid"
                );
                (DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
            }
        }
    }
}
