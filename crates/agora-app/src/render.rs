//! Terminal presentation of a debate

use agora_domain::{Agent, DebateMessage, Persona, Transcript};
use console::{style, StyledObject};

/// Agent name in its signature color
pub fn agent_badge(agent: Agent) -> StyledObject<&'static str> {
    let name = style(agent.display_name()).bold();
    match agent {
        Agent::Engineer => name.blue(),
        Agent::Visionary => name.magenta(),
        Agent::Ethicist => name.green(),
    }
}

pub fn format_message(message: &DebateMessage) -> String {
    format!(
        "{} {}\n  {}\n",
        style(format!("[Round {}]", message.round)).dim(),
        agent_badge(message.agent),
        message.message
    )
}

pub fn format_summary(summary: &str) -> String {
    format!("{}\n{}\n", style("Debate Summary").bold().underlined(), summary)
}

/// Per-agent message counts
pub fn format_tally(transcript: &Transcript) -> String {
    let mut out = format!("{}\n", style("Consensus Map").bold().underlined());
    for (agent, count) in transcript.agent_counts() {
        out.push_str(&format!("  {:<10} {}\n", agent.display_name(), count));
    }
    out
}

pub fn format_persona(persona: &Persona) -> String {
    format!(
        "{}\n  style: {}\n  templates: {}\n",
        agent_badge(persona.agent()),
        persona.style(),
        persona.templates().len()
    )
}
