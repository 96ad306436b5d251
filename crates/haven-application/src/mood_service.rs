//! Mood check-in use case.

use std::sync::Arc;

use haven_core::Clock;
use haven_core::config::MoodConfig;
use haven_core::error::Result;
use haven_core::mood::{
    ChartPoint, MoodEntry, MoodLog, MoodRepository, MoodStats, WeeklyInsight, chart_series,
    mood_stats, weekly_insight,
};
use haven_core::subscription::SubscriptionRepository;
use serde::Serialize;

/// Weekly insight as seen by the current user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum InsightView {
    /// Insights are a premium feature.
    Locked,
    /// Too few check-ins in the window.
    NotEnoughData { entries: usize, required: usize },
    Ready(WeeklyInsight),
}

pub struct MoodService {
    repository: Arc<dyn MoodRepository>,
    subscription_repository: Arc<dyn SubscriptionRepository>,
    clock: Arc<dyn Clock>,
    config: MoodConfig,
}

impl MoodService {
    pub fn new(
        repository: Arc<dyn MoodRepository>,
        subscription_repository: Arc<dyn SubscriptionRepository>,
        clock: Arc<dyn Clock>,
        config: MoodConfig,
    ) -> Self {
        Self {
            repository,
            subscription_repository,
            clock,
            config,
        }
    }

    /// Records today's check-in.
    ///
    /// Fails with `InvalidInput` for scores outside 1..=5 and with
    /// `AlreadyCheckedIn` when today already has an entry.
    pub async fn log(&self, score: u8, note: &str) -> Result<MoodEntry> {
        let entry = MoodEntry::new(score, note, self.clock.now())?;
        let mut log = self.load_log().await?;
        log.record(entry.clone(), self.config.max_entries, self.clock.as_ref())?;
        self.repository.save(&log).await?;
        tracing::info!("mood logged: {}", entry.score);
        Ok(entry)
    }

    pub async fn has_logged_today(&self) -> Result<bool> {
        Ok(self.load_log().await?.has_logged_today(self.clock.as_ref()))
    }

    /// All stored entries, oldest first.
    pub async fn entries(&self) -> Result<Vec<MoodEntry>> {
        Ok(self.load_log().await?.entries)
    }

    pub async fn insight(&self) -> Result<InsightView> {
        let is_premium = self.subscription_repository.load().await?.is_premium;
        if !is_premium {
            return Ok(InsightView::Locked);
        }

        let log = self.load_log().await?;
        Ok(
            match weekly_insight(&log.entries, &self.config, self.clock.as_ref()) {
                Some(insight) => InsightView::Ready(insight),
                None => InsightView::NotEnoughData {
                    entries: self.entries_in_window(&log),
                    required: self.config.min_entries_for_insight,
                },
            },
        )
    }

    pub async fn stats(&self) -> Result<MoodStats> {
        Ok(mood_stats(&self.load_log().await?.entries))
    }

    pub async fn chart(&self) -> Result<Vec<ChartPoint>> {
        let log = self.load_log().await?;
        Ok(chart_series(&log.entries, self.clock.as_ref()))
    }

    fn entries_in_window(&self, log: &MoodLog) -> usize {
        let today = self.clock.today();
        let window = i64::from(self.config.insight_window_days.max(1));
        let first_day = today - chrono::Duration::days(window - 1);
        log.entries
            .iter()
            .map(|e| self.clock.day_of(&e.recorded_at))
            .filter(|day| *day >= first_day && *day <= today)
            .count()
    }

    async fn load_log(&self) -> Result<MoodLog> {
        match self.repository.load().await {
            Ok(log) => Ok(log),
            Err(e) if e.is_corrupt_data() => {
                tracing::warn!("mood entries unreadable, starting fresh: {}", e);
                Ok(MoodLog::default())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use chrono::Duration;
    use haven_core::FixedClock;
    use haven_core::mood::InsightTone;

    fn service(
        mood: Arc<MemoryMoodLog>,
        subscription: Arc<MemorySubscription>,
        clock: FixedClock,
    ) -> MoodService {
        MoodService::new(mood, subscription, Arc::new(clock), MoodConfig::default())
    }

    #[tokio::test]
    async fn test_log_once_per_day() {
        let mood = Arc::new(MemoryMoodLog::default());
        let service = service(mood.clone(), Arc::default(), clock());

        assert!(!service.has_logged_today().await.unwrap());
        let entry = service.log(4, "  walked outside ").await.unwrap();
        assert_eq!(entry.note, "walked outside");
        assert!(service.has_logged_today().await.unwrap());

        let err = service.log(2, "").await.unwrap_err();
        assert!(err.is_already_checked_in());
        assert_eq!(mood.log.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_score_rejected() {
        let service = service(Arc::default(), Arc::default(), clock());
        assert!(service.log(0, "").await.unwrap_err().is_invalid_input());
        assert!(service.log(6, "").await.unwrap_err().is_invalid_input());
    }

    #[tokio::test]
    async fn test_log_never_exceeds_max_entries() {
        let mood = Arc::new(MemoryMoodLog::default());
        let start = clock();
        for day in 0..20 {
            let clock = start.at(noon() + Duration::days(day));
            service(mood.clone(), Arc::default(), clock)
                .log(3, "")
                .await
                .unwrap();
            assert!(mood.log.lock().unwrap().len() <= MoodConfig::default().max_entries);
        }
        assert_eq!(mood.log.lock().unwrap().len(), 14);
    }

    #[tokio::test]
    async fn test_insight_locked_for_free_users() {
        let service = service(Arc::default(), Arc::default(), clock());
        assert_eq!(service.insight().await.unwrap(), InsightView::Locked);
    }

    #[tokio::test]
    async fn test_insight_for_premium() {
        let mood = Arc::new(MemoryMoodLog::default());
        let premium = Arc::new(MemorySubscription::premium());
        let start = clock();

        service(mood.clone(), premium.clone(), start.at(noon() - Duration::days(1)))
            .log(5, "")
            .await
            .unwrap();
        let today = service(mood.clone(), premium.clone(), start);
        assert_eq!(
            today.insight().await.unwrap(),
            InsightView::NotEnoughData {
                entries: 1,
                required: 2
            }
        );

        today.log(4, "").await.unwrap();
        match today.insight().await.unwrap() {
            InsightView::Ready(insight) => {
                assert_eq!(insight.entries, 2);
                assert!((insight.average - 4.5).abs() < f64::EPSILON);
                assert_eq!(insight.tone, InsightTone::Thriving);
            }
            other => panic!("expected insight, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_stats_and_chart() {
        let mood = Arc::new(MemoryMoodLog::default());
        let start = clock();
        for (offset, score) in [(2, 2), (1, 3), (0, 5)] {
            service(mood.clone(), Arc::default(), start.at(noon() - Duration::days(offset)))
                .log(score, "")
                .await
                .unwrap();
        }

        let service = service(mood, Arc::default(), start);
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.average, Some(3.3));
        assert_eq!(stats.best_score, Some(5));

        let chart = service.chart().await.unwrap();
        assert_eq!(chart.len(), 3);
        assert_eq!(chart[2].label, "20 May");
    }
}
