//! agora docs command - Manage the knowledge base

use agora_adapter::KeyValueDocumentRepository;
use agora_domain::{
    DocumentDraft, DocumentId, DocumentRepository, DocumentSource, KnowledgeDocument,
};
use anyhow::Context;
use clap::{Args, Subcommand};
use console::style;
use tracing::info;

use crate::config::AppConfig;

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Args)]
pub struct DocsCommand {
    #[command(subcommand)]
    pub command: DocsSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum DocsSubcommand {
    /// Add a document to the knowledge base
    Add {
        /// Document title
        #[arg(short, long)]
        title: String,
        /// Document content
        #[arg(short, long)]
        content: String,
    },
    /// List stored documents
    List,
    /// Remove a document by id
    Remove {
        /// Document id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl DocsCommand {
    pub fn run(&self, config: &AppConfig) -> anyhow::Result<()> {
        let mut repo = KeyValueDocumentRepository::open(&config.store_path);

        match &self.command {
            DocsSubcommand::Add { title, content } => {
                let document = add_document(&mut repo, title, content)?;
                println!(
                    "{} Added '{}' ({})",
                    style("✓").green(),
                    document.title(),
                    document.id()
                );
            }
            DocsSubcommand::List => {
                let documents = repo.list()?.unwrap_or_default();
                print!("{}", format_documents(&documents));
            }
            DocsSubcommand::Remove { id, yes } => {
                let id = DocumentId::new(id.clone());
                let Some(document) = repo.find_by_id(&id)? else {
                    anyhow::bail!("No document with id {}", id);
                };

                if !yes {
                    let confirmed = dialoguer::Confirm::new()
                        .with_prompt(format!("Remove '{}'?", document.title()))
                        .default(false)
                        .interact()?;
                    if !confirmed {
                        println!("Cancelled");
                        return Ok(());
                    }
                }

                repo.delete(&id)?;
                info!("Removed document {}", id);
                println!("{} Removed '{}'", style("✓").green(), document.title());
            }
        }
        Ok(())
    }
}

/// Validate and store a new document
pub fn add_document<D: DocumentRepository>(
    repo: &mut D,
    title: &str,
    content: &str,
) -> anyhow::Result<KnowledgeDocument> {
    let draft = DocumentDraft::new(title, content)?;
    let document = repo.add(draft).context("Failed to save document")?;
    info!("Added document {}", document.id());
    Ok(document)
}

pub fn format_documents(documents: &[KnowledgeDocument]) -> String {
    if documents.is_empty() {
        return "No documents in the knowledge base\n".to_string();
    }

    let mut out = format!("{} document(s)\n", documents.len());
    for doc in documents {
        let preview = doc.excerpt(PREVIEW_CHARS);
        let ellipsis = if preview.len() < doc.content().len() {
            "..."
        } else {
            ""
        };
        out.push_str(&format!(
            "\n{} {}  {}\n  {}{}\n",
            style(doc.id()).dim(),
            style(doc.title()).bold(),
            style(added_on(doc.created_at())).dim(),
            preview,
            ellipsis
        ));
    }
    out
}

/// Calendar date of an RFC 3339 timestamp, or the raw value if it does not parse
fn added_on(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_adapter::InMemoryDocumentRepository;
    use tempfile::TempDir;

    #[test]
    fn test_add_document_trims_and_stores() {
        let mut repo = InMemoryDocumentRepository::new();
        let document = add_document(&mut repo, "  Ethics  ", " Fairness first. ").unwrap();

        assert_eq!(document.title(), "Ethics");
        assert_eq!(document.content(), "Fairness first.");
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_add_document_rejects_blank_fields() {
        let mut repo = InMemoryDocumentRepository::new();
        assert!(add_document(&mut repo, "   ", "content").is_err());
        assert!(add_document(&mut repo, "title", "").is_err());
        assert_eq!(repo.list().unwrap(), None);
    }

    #[test]
    fn test_format_documents() {
        let long = "x".repeat(200);
        let documents = vec![
            KnowledgeDocument::new(
                DocumentId::new("1"),
                "Short",
                "tiny",
                "2025-03-04T10:00:00.000Z",
            ),
            KnowledgeDocument::new(DocumentId::new("2"), "Long", long, "yesterday"),
        ];

        let text = format_documents(&documents);
        assert!(text.contains("2 document(s)"));
        assert!(text.contains("2025-03-04"));
        assert!(text.contains("tiny\n"));
        assert!(text.contains(&format!("{}...", "x".repeat(80))));
        assert!(text.contains("yesterday"));
    }

    #[test]
    fn test_format_empty_collection() {
        assert_eq!(format_documents(&[]), "No documents in the knowledge base\n");
    }

    #[test]
    fn test_add_and_remove_through_store() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            store_path: dir.path().join("store.json"),
            ..AppConfig::default()
        };

        DocsCommand {
            command: DocsSubcommand::Add {
                title: "Doc".to_string(),
                content: "Body".to_string(),
            },
        }
        .run(&config)
        .unwrap();

        let repo = KeyValueDocumentRepository::open(&config.store_path);
        let stored = repo.list().unwrap().unwrap();
        assert_eq!(stored.len(), 1);

        DocsCommand {
            command: DocsSubcommand::Remove {
                id: stored[0].id().to_string(),
                yes: true,
            },
        }
        .run(&config)
        .unwrap();

        assert_eq!(repo.list().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_remove_unknown_id_fails() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            store_path: dir.path().join("store.json"),
            ..AppConfig::default()
        };

        let err = DocsCommand {
            command: DocsSubcommand::Remove {
                id: "missing".to_string(),
                yes: true,
            },
        }
        .run(&config)
        .unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
