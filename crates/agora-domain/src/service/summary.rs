//! SummaryComposer - The closing narrative
//!
//! The summary depends only on the topic and round count. It never reads
//! the transcript: each persona gets the same boilerplate paragraph about
//! its general stance regardless of what was actually said.

use crate::model::agent::Agent;

/// Composes the fixed-shape closing summary
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryComposer;

impl SummaryComposer {
    pub fn new() -> Self {
        Self
    }

    /// Pure function of `topic` and `rounds`
    pub fn compose(&self, topic: &str, rounds: u32) -> String {
        let mut summary = format!(
            "After {} rounds of debate on \"{}\", the agents presented diverse perspectives:",
            rounds, topic
        );

        for agent in Agent::all() {
            summary.push_str("\n\n");
            summary.push_str(stance(*agent));
        }

        summary.push_str(
            "\n\nThis multi-perspective analysis demonstrates the value of diverse viewpoints \
             in addressing complex questions. Each agent's unique lens contributed to a more \
             comprehensive understanding of the topic.",
        );
        summary
    }
}

fn stance(agent: Agent) -> &'static str {
    match agent {
        Agent::Engineer => {
            "The Engineer emphasized practical feasibility and technical constraints, \
             highlighting implementation challenges and resource requirements."
        }
        Agent::Visionary => {
            "The Visionary pushed for innovative approaches and transformative thinking, \
             encouraging the group to consider revolutionary possibilities."
        }
        Agent::Ethicist => {
            "The Ethicist ensured moral implications and societal impacts were thoroughly \
             examined, advocating for fairness and accountability."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_names_topic_and_rounds() {
        let summary = SummaryComposer::new().compose("Should AI have rights?", 2);
        assert!(summary.starts_with("After 2 rounds of debate on \"Should AI have rights?\""));
    }

    #[test]
    fn test_summary_has_one_paragraph_per_persona() {
        let summary = SummaryComposer::new().compose("X", 1);
        let paragraphs: Vec<&str> = summary.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 5);
        assert!(paragraphs[1].starts_with("The Engineer"));
        assert!(paragraphs[2].starts_with("The Visionary"));
        assert!(paragraphs[3].starts_with("The Ethicist"));
    }

    #[test]
    fn test_summary_is_pure() {
        let composer = SummaryComposer::new();
        assert_eq!(composer.compose("X", 3), composer.compose("X", 3));
        assert_ne!(composer.compose("X", 3), composer.compose("X", 4));
    }

    #[test]
    fn test_summary_for_zero_rounds() {
        let summary = SummaryComposer::new().compose("X", 0);
        assert!(summary.starts_with("After 0 rounds"));
    }
}
