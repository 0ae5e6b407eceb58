//! `atelier save` — push a staged edit through the conflict-checked
//! saver.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use atelier_api::{libraries, plugins, recipes, server, webapps, wiki};
use atelier_core::model::{RecipeAndPayload, WebAppFile, WikiArticle};
use atelier_sync::adapters::{
    LibraryFileAdapter, PluginFileAdapter, RecipeAdapter, WebAppAdapter, WikiAdapter,
};
use atelier_sync::session::{self, OpenDocument};
use atelier_sync::{RemoteSaver, SaveOutcome};

use crate::context::AppContext;
use crate::prompts::TerminalConflictPrompt;

/// Arguments for `atelier save`.
#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Staged path returned by `atelier open`.
    pub path: PathBuf,
}

impl SaveArgs {
    pub async fn run(self) -> Result<()> {
        let ctx = AppContext::load()?;
        let mut session = session::load_at(&ctx.home)?;
        let document = session.document_at(&self.path)?.clone();
        let edited = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read staged file {}", self.path.display()))?;
        let prompt = TerminalConflictPrompt;

        match document {
            OpenDocument::Recipe { recipe } => {
                let local = RecipeAndPayload {
                    recipe,
                    payload: edited,
                };
                let saver = RemoteSaver::new(RecipeAdapter::new(ctx.client.clone()));
                let outcome = saver.save(&local, &ctx.cache, &prompt).await?;

                let fresh =
                    recipes::fetch(&ctx.client, &local.recipe.project_key, &local.recipe.name)
                        .await?;
                session.record(&self.path, OpenDocument::Recipe { recipe: fresh.recipe });
                report(outcome, "recipe");
            }

            OpenDocument::WebApp { mut webapp, file } => {
                let Some(kind) = WebAppFile::from_file_name(&file) else {
                    bail!("'{file}' is not a webapp source file");
                };
                if !webapp.apply_edit(kind, edited) {
                    bail!("'{file}' does not belong to a {:?} webapp", webapp.kind);
                }
                let saver = RemoteSaver::new(WebAppAdapter::new(ctx.client.clone()));
                let outcome = saver.save(&webapp, &ctx.cache, &prompt).await?;

                let fresh = webapps::fetch(&ctx.client, &webapp.project_key, &webapp.id).await?;
                session.record(
                    &self.path,
                    OpenDocument::WebApp {
                        webapp: fresh,
                        file,
                    },
                );
                report(outcome, "webapp");
            }

            OpenDocument::WikiArticle { article } => {
                let local = WikiArticle {
                    article,
                    payload: edited,
                };
                let saver = RemoteSaver::new(WikiAdapter::new(ctx.client.clone()));
                let outcome = saver.save(&local, &ctx.cache, &prompt).await?;

                let fresh = wiki::fetch_article(
                    &ctx.client,
                    &local.article.project_key,
                    &local.article.id,
                )
                .await?;
                session.record(
                    &self.path,
                    OpenDocument::WikiArticle {
                        article: fresh.article,
                    },
                );
                report(outcome, "wiki article");
            }

            OpenDocument::PluginFile { plugin_id, item } => {
                let info = server::discover(&ctx.client).await?;
                let safe = info.version.supports_safe_save();
                let adapter =
                    PluginFileAdapter::new(ctx.client.clone(), plugin_id.as_str(), edited, safe);
                let outcome = RemoteSaver::new(adapter)
                    .save(&item, &ctx.cache, &prompt)
                    .await?;

                if safe {
                    let fresh = plugins::item_details(&ctx.client, &plugin_id, &item.path).await?;
                    session.record(
                        &self.path,
                        OpenDocument::PluginFile {
                            plugin_id,
                            item: fresh,
                        },
                    );
                }
                report(outcome, "file");
            }

            OpenDocument::LibraryFile { project_key, item } => {
                let adapter =
                    LibraryFileAdapter::new(ctx.client.clone(), project_key.as_str(), edited);
                let outcome = RemoteSaver::new(adapter)
                    .save(&item, &ctx.cache, &prompt)
                    .await?;

                let fresh = libraries::file(&ctx.client, &project_key, &item.path).await?;
                session.record(
                    &self.path,
                    OpenDocument::LibraryFile {
                        project_key,
                        item: fresh,
                    },
                );
                report(outcome, "file");
            }
        }

        session::save_at(&ctx.home, &session)?;
        Ok(())
    }
}

fn report(outcome: SaveOutcome, subject: &str) {
    match outcome {
        SaveOutcome::Saved => {
            println!("{} The {subject} has been saved to the studio", "✓".green());
        }
        SaveOutcome::DiscardedLocalChanges => {
            println!(
                "{} Local changes discarded; the staged file now mirrors the studio",
                "↩".yellow()
            );
        }
    }
}
