//! Weekly insight, summary statistics and chart series.

use chrono::Duration;
use serde::Serialize;
use strum::Display;

use super::model::MoodEntry;
use crate::clock::Clock;
use crate::config::MoodConfig;

/// Coarse classification of the trailing window's average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InsightTone {
    Thriving,
    Balanced,
    Tough,
    Struggling,
}

impl InsightTone {
    pub fn from_average(average: f64) -> Self {
        if average >= 4.0 {
            Self::Thriving
        } else if average >= 3.0 {
            Self::Balanced
        } else if average >= 2.0 {
            Self::Tough
        } else {
            Self::Struggling
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Thriving => "You've had a generally positive week! Keep up the good work.",
            Self::Balanced => "Your mood has been balanced. Routine helps maintain this stability.",
            Self::Tough => "It's been a tough week. Remember to be kind to yourself and take breaks.",
            Self::Struggling => {
                "This week has been really hard. Consider talking to someone you trust or a professional."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyInsight {
    pub average: f64,
    pub entries: usize,
    pub tone: InsightTone,
}

impl WeeklyInsight {
    pub fn message(&self) -> &'static str {
        self.tone.message()
    }
}

/// Insight over entries in the trailing window (today inclusive).
///
/// Returns `None` when fewer than `min_entries_for_insight` fall in the window.
pub fn weekly_insight(
    entries: &[MoodEntry],
    config: &MoodConfig,
    clock: &dyn Clock,
) -> Option<WeeklyInsight> {
    let today = clock.today();
    let window = i64::from(config.insight_window_days.max(1));
    let first_day = today - Duration::days(window - 1);

    let scores: Vec<u8> = entries
        .iter()
        .filter(|e| {
            let day = clock.day_of(&e.recorded_at);
            day >= first_day && day <= today
        })
        .map(|e| e.score)
        .collect();

    if scores.is_empty() || scores.len() < config.min_entries_for_insight {
        return None;
    }

    let average = mean(&scores);
    Some(WeeklyInsight {
        average,
        entries: scores.len(),
        tone: InsightTone::from_average(average),
    })
}

/// Totals over the whole stored log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodStats {
    pub total_entries: usize,
    /// Average rounded to one decimal.
    pub average: Option<f64>,
    pub best_score: Option<u8>,
}

pub fn mood_stats(entries: &[MoodEntry]) -> MoodStats {
    let scores: Vec<u8> = entries.iter().map(|e| e.score).collect();
    MoodStats {
        total_entries: scores.len(),
        average: (!scores.is_empty()).then(|| (mean(&scores) * 10.0).round() / 10.0),
        best_score: scores.iter().copied().max(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub score: u8,
}

/// One point per entry, labelled like "05 Jun" in the user's local day.
pub fn chart_series(entries: &[MoodEntry], clock: &dyn Clock) -> Vec<ChartPoint> {
    entries
        .iter()
        .map(|e| ChartPoint {
            label: clock.day_of(&e.recorded_at).format("%d %b").to_string(),
            score: e.score,
        })
        .collect()
}

fn mean(scores: &[u8]) -> f64 {
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    f64::from(sum) / scores.len() as f64
}
