//! Mood tracking domain module.

mod insight;
mod model;
mod repository;

pub use insight::{
    ChartPoint, InsightTone, MoodStats, WeeklyInsight, chart_series, mood_stats, weekly_insight,
};
pub use model::{MAX_SCORE, MIN_SCORE, MoodEntry, MoodLog, score_label};
pub use repository::MoodRepository;
