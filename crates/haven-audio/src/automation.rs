//! Parameter timelines with Web Audio ramp semantics.
//!
//! A timeline is a list of events ordered by time. Between an event and a
//! following ramp event the value is interpolated; otherwise the most recent
//! event's value holds.

#[derive(Debug, Clone, Copy, PartialEq)]
enum EventKind {
    Set,
    Linear,
    Exponential,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Event {
    kind: EventKind,
    value: f32,
    time: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamTimeline {
    default: f32,
    events: Vec<Event>,
}

impl ParamTimeline {
    pub fn new(default: f32) -> Self {
        Self {
            default,
            events: Vec::new(),
        }
    }

    /// Jumps to `value` at `time` seconds.
    pub fn set_value_at(mut self, value: f32, time: f32) -> Self {
        self.insert(EventKind::Set, value, time);
        self
    }

    /// Ramps linearly from the previous event to `value`, reaching it at `time`.
    pub fn linear_ramp_to(mut self, value: f32, time: f32) -> Self {
        self.insert(EventKind::Linear, value, time);
        self
    }

    /// Ramps exponentially to `value` at `time`.
    ///
    /// When either end is not strictly positive the previous value holds
    /// until `time` and then jumps.
    pub fn exponential_ramp_to(mut self, value: f32, time: f32) -> Self {
        self.insert(EventKind::Exponential, value, time);
        self
    }

    fn insert(&mut self, kind: EventKind, value: f32, time: f32) {
        let time = time.max(0.0);
        let index = self.events.partition_point(|e| e.time <= time);
        self.events.insert(index, Event { kind, value, time });
    }

    /// Value at `time` seconds.
    pub fn value_at(&self, time: f32) -> f32 {
        let next_index = self.events.partition_point(|e| e.time <= time);
        let (start_value, start_time) = match next_index.checked_sub(1) {
            Some(i) => (self.events[i].value, self.events[i].time),
            None => (self.default, 0.0),
        };

        let Some(next) = self.events.get(next_index) else {
            return start_value;
        };

        let span = next.time - start_time;
        if span <= 0.0 {
            return start_value;
        }
        let progress = ((time - start_time) / span).clamp(0.0, 1.0);

        match next.kind {
            EventKind::Set => start_value,
            EventKind::Linear => start_value + (next.value - start_value) * progress,
            EventKind::Exponential => {
                if start_value <= 0.0 || next.value <= 0.0 {
                    start_value
                } else {
                    start_value * (next.value / start_value).powf(progress)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_default_before_events() {
        let timeline = ParamTimeline::new(0.5).set_value_at(1.0, 0.2);
        assert_eq!(timeline.value_at(0.1), 0.5);
        assert_eq!(timeline.value_at(0.3), 1.0);
    }

    #[test]
    fn test_linear_ramp() {
        let timeline = ParamTimeline::new(0.0)
            .set_value_at(200.0, 0.0)
            .linear_ramp_to(50.0, 0.15);
        assert!(close(timeline.value_at(0.075), 125.0));
        assert!(close(timeline.value_at(0.15), 50.0));
        assert!(close(timeline.value_at(1.0), 50.0));
    }

    #[test]
    fn test_exponential_ramp_halfway_is_geometric_mean() {
        let timeline = ParamTimeline::new(0.0)
            .set_value_at(800.0, 0.0)
            .exponential_ramp_to(100.0, 0.1);
        assert!(close(timeline.value_at(0.05), (800.0f32 * 100.0).sqrt()));
    }

    #[test]
    fn test_exponential_ramp_to_zero_holds() {
        let timeline = ParamTimeline::new(0.0)
            .set_value_at(0.1, 0.0)
            .exponential_ramp_to(0.0, 0.3);
        assert_eq!(timeline.value_at(0.29), 0.1);
        assert_eq!(timeline.value_at(0.3), 0.0);
    }

    #[test]
    fn test_set_after_set_is_step() {
        let timeline = ParamTimeline::new(0.0)
            .set_value_at(400.0, 0.0)
            .set_value_at(600.0, 0.1);
        assert_eq!(timeline.value_at(0.05), 400.0);
        assert_eq!(timeline.value_at(0.1), 600.0);
    }
}
