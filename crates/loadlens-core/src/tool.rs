//! The recommended-tool label set and its justification texts.

use serde::{Deserialize, Serialize};

/// Justification shown when K6 is recommended.
pub const K6_JUSTIFICATION: &str = "K6 is best for high-throughput, low-error APIs, \
     making it ideal for performance and stress testing.";

/// Justification shown when JMeter is recommended.
pub const JMETER_JUSTIFICATION: &str = "JMeter is better suited for APIs with slow \
     response times or high error rates, ideal for complex and functional load testing.";

/// Fallback justification for any label outside the known set.
pub const UNKNOWN_TOOL_JUSTIFICATION: &str =
    "No guidance is available for this tool; consult its documentation for suitable workloads.";

/// A load-testing tool label decoded from the classifier output.
///
/// The known variants carry fixed justification texts. The classifier's
/// label vocabulary lives in the artifact bundle, so a bundle trained with
/// additional tools decodes to [`ToolLabel::Other`], which maps to a defined
/// fallback text rather than an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolLabel {
    /// Grafana K6.
    K6,
    /// Apache JMeter.
    JMeter,
    /// Any label outside the known set.
    Other(String),
}

impl ToolLabel {
    /// Parse a decoded label string into a tool label.
    pub fn from_name(name: &str) -> Self {
        match name {
            "K6" => Self::K6,
            "JMeter" => Self::JMeter,
            other => Self::Other(other.to_string()),
        }
    }

    /// The display name of the tool.
    pub fn name(&self) -> &str {
        match self {
            Self::K6 => "K6",
            Self::JMeter => "JMeter",
            Self::Other(name) => name,
        }
    }

    /// Fixed natural-language justification for recommending this tool.
    pub fn justification(&self) -> &'static str {
        match self {
            Self::K6 => K6_JUSTIFICATION,
            Self::JMeter => JMETER_JUSTIFICATION,
            Self::Other(_) => UNKNOWN_TOOL_JUSTIFICATION,
        }
    }
}

impl std::fmt::Display for ToolLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(ToolLabel::from_name("K6"), ToolLabel::K6);
        assert_eq!(ToolLabel::from_name("JMeter"), ToolLabel::JMeter);
    }

    #[test]
    fn test_unknown_label() {
        let label = ToolLabel::from_name("Gatling");
        assert_eq!(label, ToolLabel::Other("Gatling".to_string()));
        assert_eq!(label.name(), "Gatling");
    }

    #[test]
    fn test_justification_mapping() {
        assert_eq!(ToolLabel::K6.justification(), K6_JUSTIFICATION);
        assert_eq!(ToolLabel::JMeter.justification(), JMETER_JUSTIFICATION);
        assert_eq!(
            ToolLabel::from_name("Locust").justification(),
            UNKNOWN_TOOL_JUSTIFICATION
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ToolLabel::K6.to_string(), "K6");
        assert_eq!(ToolLabel::from_name("Locust").to_string(), "Locust");
    }
}
