//! Advisory request and prompt construction.

use serde::Deserialize;

use crate::domain::CoachClass;

/// Persona given to the chat model.
pub const SYSTEM_PROMPT: &str = "You are an assistant providing concise, commuter-friendly live status updates for Mumbai local trains. \
Be brief, actionable, and specific. If uncertain, state likelihoods and give practical guidance.";

/// What the commuter wants a live status for.
///
/// Names are display strings. They are not checked against the station
/// directory here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    pub route_name: String,
    pub station_name: String,
    #[serde(rename = "coachType")]
    pub coach_class: CoachClass,
}

/// The system/user instruction pair sent to the chat model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl AdvisoryRequest {
    pub fn new(
        route_name: impl Into<String>,
        station_name: impl Into<String>,
        coach_class: CoachClass,
    ) -> Self {
        Self {
            route_name: route_name.into(),
            station_name: station_name.into(),
            coach_class,
        }
    }

    /// Build the prompt for the remote advisor.
    pub fn prompt(&self) -> Prompt {
        let user = format!(
            "Provide a short live status update for:\n\
             - Line: {}\n\
             - Destination station: {}\n\
             - Coach type: {}\n\
             \n\
             Include:\n\
             - On-time vs delays (estimate minutes if applicable)\n\
             - Crowd level (light / moderate / heavy)\n\
             - Practical tip (e.g., boarding window or exit coach advantage)\n\
             Keep it to 1-2 sentences, friendly tone, no markdown.",
            self.route_name, self.station_name, self.coach_class
        );

        Prompt {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }

    /// Label prefixed to offline advisories, e.g.
    /// "Western Line → Dadar (First Class): ".
    pub fn header(&self) -> String {
        format!(
            "{} → {} ({}): ",
            self.route_name,
            self.station_name,
            self.coach_class.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AdvisoryRequest {
        AdvisoryRequest::new("Western Line", "Dadar", CoachClass::FirstClass)
    }

    #[test]
    fn header_uses_coach_label() {
        assert_eq!(request().header(), "Western Line → Dadar (First Class): ");
    }

    #[test]
    fn prompt_mentions_request_fields() {
        let prompt = request().prompt();

        assert_eq!(prompt.system, SYSTEM_PROMPT);
        assert!(prompt.user.starts_with("Provide a short live status update for:"));
        assert!(prompt.user.contains("- Line: Western Line\n"));
        assert!(prompt.user.contains("- Destination station: Dadar\n"));
        assert!(prompt.user.contains("- Coach type: firstClass\n"));
        assert!(prompt.user.ends_with("no markdown."));
    }

    #[test]
    fn deserialize_from_client_payload() {
        let request: AdvisoryRequest = serde_json::from_str(
            r#"{"routeName":"Central Line","stationName":"Sion","coachType":"ladies"}"#,
        )
        .unwrap();

        assert_eq!(
            request,
            AdvisoryRequest::new("Central Line", "Sion", CoachClass::Ladies)
        );
    }
}
