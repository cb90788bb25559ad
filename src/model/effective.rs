//! Effective-time windows on elements, classifications and relationships.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The period during which an instance is considered in force.
///
/// Either bound may be open. `from` is inclusive, `to` is exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,
}

impl EffectiveWindow {
    /// A window with no bounds, in force at every instant.
    pub fn always() -> Self {
        Self::default()
    }

    pub fn between(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { effective_from: from, effective_to: to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.effective_from.is_none() && self.effective_to.is_none()
    }

    /// Whether the window contains the given instant.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.effective_from.is_none_or(|from| from <= at)
            && self.effective_to.is_none_or(|to| at < to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_open_window_contains_everything() {
        let w = EffectiveWindow::always();
        assert!(w.is_unbounded());
        assert!(w.contains(Utc::now()));
    }

    #[test]
    fn test_bounds_are_half_open() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let w = EffectiveWindow::between(Some(from), Some(to));
        assert!(w.contains(from));
        assert!(!w.contains(to));
        assert!(!w.contains(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap()));
    }
}
