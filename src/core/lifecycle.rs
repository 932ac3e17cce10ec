//! Lifecycle status of a part and its presentation tokens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a product (ISO 55000 asset lifecycle stages)
///
/// The set is closed. There is no transition guard: any status may be set
/// to any other status through an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifecycleStatus {
    #[default]
    Design,
    Testing,
    #[serde(rename = "In Production")]
    InProduction,
    Obsolete,
}

impl LifecycleStatus {
    /// All statuses, in form display order
    pub const ALL: [LifecycleStatus; 4] = [
        LifecycleStatus::Design,
        LifecycleStatus::Testing,
        LifecycleStatus::InProduction,
        LifecycleStatus::Obsolete,
    ];

    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleStatus::Design => "Design",
            LifecycleStatus::Testing => "Testing",
            LifecycleStatus::InProduction => "In Production",
            LifecycleStatus::Obsolete => "Obsolete",
        }
    }

    /// Always true: edits may move a product between any two statuses.
    pub fn can_transition_to(&self, _next: LifecycleStatus) -> bool {
        true
    }

    /// Presentation tokens for this status
    pub fn style(&self) -> StatusStyle {
        match self {
            LifecycleStatus::Design => StatusStyle {
                badge: "border-status-design text-status-design bg-status-design/10",
                dot: "bg-status-design",
            },
            LifecycleStatus::InProduction => StatusStyle {
                badge: "border-status-production text-status-production bg-status-production/10",
                dot: "bg-status-production",
            },
            LifecycleStatus::Testing => StatusStyle {
                badge: "border-status-testing text-status-testing bg-status-testing/10",
                dot: "bg-status-testing",
            },
            LifecycleStatus::Obsolete => StatusStyle {
                badge: "border-status-obsolete text-status-obsolete bg-status-obsolete/10",
                dot: "bg-status-obsolete",
            },
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a label outside the closed status set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lifecycle status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for LifecycleStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Style tokens consumed by the views
///
/// `badge` decorates the status pill on the detail page, `dot` is the small
/// colored marker in list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub badge: &'static str,
    pub dot: &'static str,
}

impl StatusStyle {
    /// Neutral style for anything outside the closed set
    pub const FALLBACK: StatusStyle = StatusStyle {
        badge: "border-gray-400 text-gray-500 bg-gray-100",
        dot: "bg-gray-400",
    };

    /// Look up the style for a raw status label.
    ///
    /// Unknown labels get [`StatusStyle::FALLBACK`]; this never fails.
    pub fn for_label(label: &str) -> StatusStyle {
        label
            .parse::<LifecycleStatus>()
            .map(|status| status.style())
            .unwrap_or(StatusStyle::FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_labels() {
        assert_eq!(
            serde_json::to_value(LifecycleStatus::InProduction).unwrap(),
            "In Production"
        );
        let parsed: LifecycleStatus = serde_json::from_str("\"Obsolete\"").unwrap();
        assert_eq!(parsed, LifecycleStatus::Obsolete);
    }

    #[test]
    fn test_style_for_each_status() {
        assert_eq!(LifecycleStatus::Design.style().dot, "bg-status-design");
        assert_eq!(LifecycleStatus::Testing.style().dot, "bg-status-testing");
        assert_eq!(
            LifecycleStatus::InProduction.style().dot,
            "bg-status-production"
        );
        assert_eq!(LifecycleStatus::Obsolete.style().dot, "bg-status-obsolete");
        assert_eq!(
            LifecycleStatus::Testing.style().badge,
            "border-status-testing text-status-testing bg-status-testing/10"
        );
    }

    #[test]
    fn test_style_for_label_falls_back() {
        assert_eq!(
            StatusStyle::for_label("In Production"),
            LifecycleStatus::InProduction.style()
        );
        assert_eq!(StatusStyle::for_label("Retired"), StatusStyle::FALLBACK);
        assert_eq!(StatusStyle::for_label(""), StatusStyle::FALLBACK);
        assert_eq!(StatusStyle::for_label("design"), StatusStyle::FALLBACK);
    }

    #[test]
    fn test_any_to_any_transition() {
        for from in LifecycleStatus::ALL {
            for to in LifecycleStatus::ALL {
                assert!(from.can_transition_to(to));
            }
        }
    }

    #[test]
    fn test_label_round_trips_through_from_str() {
        for status in LifecycleStatus::ALL {
            assert_eq!(status.label().parse::<LifecycleStatus>(), Ok(status));
        }
        assert!("Archived".parse::<LifecycleStatus>().is_err());
    }
}
