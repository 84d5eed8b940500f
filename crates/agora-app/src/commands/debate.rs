//! agora debate command

use std::path::PathBuf;

use agora_adapter::{KeyValueDocumentRepository, StdRandom, TranscriptExport};
use agora_domain::{Agent, DocumentSource, RandomSource, Transcript};
use agora_usecase::{start_debate, DebateConfig, DebateScheduler};
use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::render::{format_message, format_summary, format_tally};

#[derive(Debug, Args)]
pub struct DebateCommand {
    /// Topic for the agents to debate
    pub topic: String,

    /// Number of rounds (defaults to the configured value)
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Seed the random source to replay a debate
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the simulated thinking delays
    #[arg(long)]
    pub fast: bool,

    /// Write the transcript as JSON to this path
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

impl DebateCommand {
    pub async fn run(&self, config: &AppConfig) -> anyhow::Result<()> {
        if self.topic.trim().is_empty() {
            anyhow::bail!("Please enter a debate topic");
        }

        let rounds = self.rounds.unwrap_or(config.default_rounds);
        let pacing = if self.fast {
            DebateConfig::instant()
        } else {
            config.debate_config()
        };
        let rng = self.seed.map(StdRandom::seeded).unwrap_or_default();
        let documents = KeyValueDocumentRepository::open(&config.store_path);
        let scheduler = DebateScheduler::new(documents, rng).with_config(pacing);

        let run_id = Uuid::new_v4();
        let transcript = stream_to_terminal(scheduler, &self.topic, rounds)
            .instrument(tracing::info_span!("run", %run_id))
            .await?;

        if let Some(summary) = transcript.summary() {
            println!("{}", format_summary(summary));
        }
        println!("{}", format_tally(&transcript));

        if let Some(path) = &self.export {
            TranscriptExport::from_transcript(&transcript, chrono::Utc::now())
                .write_to(path)
                .with_context(|| format!("Failed to export transcript to {}", path.display()))?;
            info!("Exported transcript to {}", path.display());
            println!("✓ Transcript exported to {}", path.display());
        }

        Ok(())
    }
}

/// Run the debate, printing each message as it arrives
///
/// Returns the completed transcript. If the run fails, messages already
/// printed stay printed and the error is returned.
pub async fn stream_to_terminal<S, R>(
    scheduler: DebateScheduler<S, R>,
    topic: &str,
    rounds: u32,
) -> anyhow::Result<Transcript>
where
    S: DocumentSource + Send + 'static,
    R: RandomSource + Send + 'static,
{
    let mut stream = start_debate(scheduler, topic, rounds)?;

    let progress = ProgressBar::new(rounds as u64 * Agent::ORDER.len() as u64);
    progress.set_style(ProgressStyle::with_template(
        "{spinner} {bar:30.cyan/blue} {pos}/{len} {msg}",
    )?);
    progress.set_message(format!("Round 0 of {}", rounds));

    let mut transcript = Transcript::new(topic);
    while let Some(message) = stream.messages.recv().await {
        progress.println(format_message(&message));
        transcript.push(message);
        progress.set_message(format!(
            "Round {} of {}",
            transcript.current_round(),
            rounds
        ));
        progress.inc(1);
    }

    match stream.finish().await {
        Ok(result) => {
            progress.finish_with_message("Debate complete");
            transcript.complete(result);
            Ok(transcript)
        }
        Err(err) => {
            progress.abandon_with_message("Debate failed");
            Err(err.into())
        }
    }
}
