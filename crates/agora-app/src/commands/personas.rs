//! agora personas command

use agora_domain::PersonaRegistry;
use clap::Args;

use crate::render::format_persona;

#[derive(Debug, Args)]
pub struct PersonasCommand {}

impl PersonasCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        for persona in PersonaRegistry::standard().iter() {
            println!("{}", format_persona(persona));
        }
        Ok(())
    }
}
