//! MessageSynthesizer - Turns a persona template into a statement
//!
//! One template is picked uniformly at random per call. Slots are
//! located in the template itself before anything is substituted, so
//! a topic that happens to contain `{context}` is never rewritten.

use crate::model::agent::Agent;
use crate::model::persona::{PersonaRegistry, CONTEXT_SLOT, TOPIC_SLOT};
use crate::service::random::RandomSource;

/// Renders persona templates
#[derive(Debug, Clone, Copy)]
pub struct MessageSynthesizer {
    registry: &'static PersonaRegistry,
}

impl MessageSynthesizer {
    pub fn new(registry: &'static PersonaRegistry) -> Self {
        Self { registry }
    }

    /// Render one statement for `agent`
    ///
    /// The topic is taken verbatim; rejecting empty topics is the
    /// caller's job.
    pub fn render<R: RandomSource + ?Sized>(
        &self,
        agent: Agent,
        topic: &str,
        context: &str,
        rng: &mut R,
    ) -> String {
        let templates = self.registry.templates_for(agent);
        let template = templates[rng.index(templates.len())];
        fill_template(template, topic, context)
    }
}

impl Default for MessageSynthesizer {
    fn default() -> Self {
        Self::new(PersonaRegistry::standard())
    }
}

/// Replace the first `{topic}` and first `{context}` slot of `template`
pub fn fill_template(template: &str, topic: &str, context: &str) -> String {
    let mut slots: Vec<(usize, &str, &str)> = Vec::with_capacity(2);
    if let Some(at) = template.find(TOPIC_SLOT) {
        slots.push((at, TOPIC_SLOT, topic));
    }
    if let Some(at) = template.find(CONTEXT_SLOT) {
        slots.push((at, CONTEXT_SLOT, context));
    }
    slots.sort_by_key(|(at, _, _)| *at);

    let mut rendered = String::with_capacity(template.len() + topic.len() + context.len());
    let mut cursor = 0;
    for (at, slot, value) in slots {
        rendered.push_str(&template[cursor..at]);
        rendered.push_str(value);
        cursor = at + slot.len();
    }
    rendered.push_str(&template[cursor..]);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::random::testing::ScriptedRandom;

    #[test]
    fn test_fill_template() {
        let rendered = fill_template("On {topic}: {context} Done.", "AI", "Per docs,");
        assert_eq!(rendered, "On AI: Per docs, Done.");
    }

    #[test]
    fn test_fill_template_context_before_topic() {
        let rendered = fill_template("{context} then {topic}", "T", "C");
        assert_eq!(rendered, "C then T");
    }

    #[test]
    fn test_fill_template_only_first_occurrence() {
        let rendered = fill_template("{topic} {topic} {context}", "T", "C");
        assert_eq!(rendered, "T {topic} C");
    }

    #[test]
    fn test_slot_text_inside_topic_is_left_alone() {
        let rendered = fill_template("A {topic} B {context}", "{context}", "ctx");
        assert_eq!(rendered, "A {context} B ctx");
    }

    #[test]
    fn test_render_contains_topic_and_context() {
        let synthesizer = MessageSynthesizer::default();
        for agent in Agent::all() {
            for pick in 0..2 {
                let mut rng = ScriptedRandom::new([pick]);
                let text = synthesizer.render(
                    *agent,
                    "Should AI have rights?",
                    "Based on fundamental knowledge,",
                    &mut rng,
                );
                assert!(text.contains("Should AI have rights?"));
                assert!(text.contains("Based on fundamental knowledge,"));
                assert!(!text.contains(TOPIC_SLOT));
                assert!(!text.contains(CONTEXT_SLOT));
            }
        }
    }

    #[test]
    fn test_render_picks_scripted_template() {
        let synthesizer = MessageSynthesizer::default();
        let mut rng = ScriptedRandom::new([1]);
        let text = synthesizer.render(Agent::Engineer, "X", "C", &mut rng);
        assert!(text.starts_with("Let's break down X systematically. C"));
    }

    #[test]
    fn test_render_accepts_empty_topic() {
        let synthesizer = MessageSynthesizer::default();
        let text = synthesizer.render(Agent::Ethicist, "", "C", &mut ScriptedRandom::default());
        assert!(text.contains("ethical dimensions of ."));
    }
}
