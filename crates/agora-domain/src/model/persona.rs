//! Persona - The voice behind each agent
//!
//! Every agent owns exactly one persona: a style label and an ordered,
//! non-empty list of message templates. A template carries one
//! `{topic}` slot and one `{context}` slot.
//!
//! The registry is a process-wide static table. It is built at compile
//! time and never mutated.

use super::agent::{Agent, UnknownAgentError};

/// Slot replaced with the debate topic
pub const TOPIC_SLOT: &str = "{topic}";

/// Slot replaced with the retrieved context snippet
pub const CONTEXT_SLOT: &str = "{context}";

/// Style and templates for one agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    agent: Agent,
    style: &'static str,
    templates: &'static [&'static str],
}

impl Persona {
    pub fn agent(&self) -> Agent {
        self.agent
    }

    /// Descriptive only; rendering never looks at it
    pub fn style(&self) -> &'static str {
        self.style
    }

    pub fn templates(&self) -> &'static [&'static str] {
        self.templates
    }
}

static ENGINEER: Persona = Persona {
    agent: Agent::Engineer,
    style: "technical, practical, focused on feasibility and implementation details",
    templates: &[
        "From a technical standpoint, {topic} raises several implementation concerns. {context} We need to consider scalability, security, and maintainability. The infrastructure requirements alone would demand significant resources.",
        "Let's break down {topic} systematically. {context} The engineering challenges include data integrity, system reliability, and performance optimization. These aren't trivial problems.",
    ],
};

static VISIONARY: Persona = Persona {
    agent: Agent::Visionary,
    style: "innovative, future-oriented, creative and expansive thinking",
    templates: &[
        "I see {topic} as an opportunity to reimagine our entire approach. {context} What if we thought beyond current constraints? The potential for transformation is immense if we dare to innovate.",
        "Looking at {topic} through a visionary lens, {context} we're not just solving today's problems, we're shaping tomorrow's possibilities. This could be revolutionary.",
    ],
};

static ETHICIST: Persona = Persona {
    agent: Agent::Ethicist,
    style: "moral, thoughtful, concerned with implications and fairness",
    templates: &[
        "We must carefully consider the ethical dimensions of {topic}. {context} Questions of fairness, accountability, and societal impact cannot be overlooked. Who benefits and who might be harmed?",
        "From an ethical perspective, {topic} demands scrutiny. {context} We have a responsibility to examine the moral implications, potential biases, and long-term consequences for society.",
    ],
};

static REGISTRY: PersonaRegistry = PersonaRegistry;

/// Read-only lookup over the three personas
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonaRegistry;

impl PersonaRegistry {
    /// The process-wide registry
    pub fn standard() -> &'static PersonaRegistry {
        &REGISTRY
    }

    /// Persona owned by `agent`
    pub fn persona(&self, agent: Agent) -> &'static Persona {
        match agent {
            Agent::Engineer => &ENGINEER,
            Agent::Visionary => &VISIONARY,
            Agent::Ethicist => &ETHICIST,
        }
    }

    /// Non-empty, ordered template list for `agent`
    pub fn templates_for(&self, agent: Agent) -> &'static [&'static str] {
        self.persona(agent).templates
    }

    pub fn style_of(&self, agent: Agent) -> &'static str {
        self.persona(agent).style
    }

    /// String-keyed lookup for boundaries that receive agent names as text
    pub fn lookup(&self, name: &str) -> Result<&'static Persona, UnknownAgentError> {
        let agent: Agent = name.parse()?;
        Ok(self.persona(agent))
    }

    /// All personas in speaking order
    pub fn iter(&self) -> impl Iterator<Item = &'static Persona> + '_ {
        Agent::all().iter().map(move |agent| self.persona(*agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_agent_has_templates() {
        let registry = PersonaRegistry::standard();
        for agent in Agent::all() {
            assert!(!registry.templates_for(*agent).is_empty());
            assert!(!registry.style_of(*agent).is_empty());
            assert_eq!(registry.persona(*agent).agent(), *agent);
        }
    }

    #[test]
    fn test_templates_have_exactly_one_slot_each() {
        let registry = PersonaRegistry::standard();
        for persona in registry.iter() {
            for template in persona.templates() {
                assert_eq!(template.matches(TOPIC_SLOT).count(), 1, "{}", template);
                assert_eq!(template.matches(CONTEXT_SLOT).count(), 1, "{}", template);
            }
        }
    }

    #[test]
    fn test_visionary_template_text() {
        let templates = PersonaRegistry::standard().templates_for(Agent::Visionary);
        assert!(templates[1].contains("solving today's problems, we're shaping tomorrow's"));
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = PersonaRegistry::standard();
        let persona = registry.lookup("ethicist").unwrap();
        assert_eq!(persona.agent(), Agent::Ethicist);

        let err = registry.lookup("Moderator").unwrap_err();
        assert_eq!(err.name, "Moderator");
    }

    #[test]
    fn test_iter_follows_speaking_order() {
        let agents: Vec<Agent> = PersonaRegistry::standard()
            .iter()
            .map(|p| p.agent())
            .collect();
        assert_eq!(agents, Agent::ORDER.to_vec());
    }
}
