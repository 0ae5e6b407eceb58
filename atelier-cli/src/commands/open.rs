//! `atelier open` — fetch a remote object, stage it, remember it.

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;

use atelier_api::{libraries, plugins, recipes, server, webapps, wiki};
use atelier_sync::session::{self, OpenDocument};
use atelier_sync::{FileBody, StagedFile};

use crate::context::AppContext;

#[derive(Subcommand, Debug)]
pub enum OpenCommand {
    /// A code recipe's source.
    Recipe {
        project_key: String,
        name: String,
    },

    /// All of a webapp's source files.
    Webapp {
        project_key: String,
        id: String,
    },

    /// A wiki article as markdown.
    WikiArticle {
        project_key: String,
        article_id: String,
    },

    /// A file from a dev plugin.
    PluginFile {
        plugin_id: String,
        path: String,
    },

    /// A file from a project's library.
    LibraryFile {
        project_key: String,
        path: String,
    },
}

pub async fn run(command: OpenCommand) -> Result<()> {
    let ctx = AppContext::load()?;
    let mut session = session::load_at(&ctx.home)?;

    match command {
        OpenCommand::Recipe { project_key, name } => {
            let rnp = recipes::fetch(&ctx.client, &project_key, &name).await?;
            let path = ctx.cache.materialize(&StagedFile::from_recipe(&rnp))?;
            session.record(&path, OpenDocument::Recipe { recipe: rnp.recipe });
            println!("{} {}", "✓".green(), path.display());
        }

        OpenCommand::Webapp { project_key, id } => {
            let info = server::discover(&ctx.client).await?;
            if !info.version.supports_webapp_editing() {
                bail!(
                    "studio {} does not support webapp editing through the public API",
                    info.version
                );
            }
            let webapp = webapps::fetch(&ctx.client, &project_key, &id).await?;
            for file in StagedFile::from_webapp(&webapp) {
                let name = file.name.clone();
                let path = ctx.cache.materialize(&file)?;
                session.record(
                    &path,
                    OpenDocument::WebApp {
                        webapp: webapp.clone(),
                        file: name,
                    },
                );
                println!("{} {}", "✓".green(), path.display());
            }
        }

        OpenCommand::WikiArticle {
            project_key,
            article_id,
        } => {
            let article = wiki::fetch_article(&ctx.client, &project_key, &article_id).await?;
            let path = ctx
                .cache
                .materialize(&StagedFile::from_wiki_article(&article))?;
            session.record(
                &path,
                OpenDocument::WikiArticle {
                    article: article.article,
                },
            );
            println!("{} {}", "✓".green(), path.display());
        }

        OpenCommand::PluginFile { plugin_id, path } => {
            let info = server::discover(&ctx.client).await?;
            if !info.dev_plugins.iter().any(|p| p.id == plugin_id) {
                bail!("plugin '{plugin_id}' is not a dev plugin; its files are read-only");
            }

            let content = plugins::file_content(&ctx.client, &plugin_id, &path).await?;
            if content.is_image() {
                bail!("'{path}' is an image; open it in the studio instead");
            }

            // Old servers cannot report item metadata; a zero stamp makes
            // every later save a conflict-checked one on new servers and
            // a blind write on old ones.
            let item = if info.version.supports_safe_save() {
                plugins::item_details(&ctx.client, &plugin_id, &path).await?
            } else {
                atelier_core::model::PluginItem {
                    name: file_name_of(&path),
                    path: path.clone(),
                    last_modified: 0,
                    children: None,
                }
            };

            let staged = ctx.cache.materialize(&StagedFile::from_plugin(
                &plugin_id,
                &path,
                FileBody::Bytes(content.bytes),
            ))?;
            session.record(&staged, OpenDocument::PluginFile { plugin_id, item });
            println!("{} {}", "✓".green(), staged.display());
        }

        OpenCommand::LibraryFile { project_key, path } => {
            let item = libraries::file(&ctx.client, &project_key, &path).await?;
            let staged = ctx.cache.materialize(&StagedFile::from_library(
                &project_key,
                &path,
                FileBody::Text(item.data.clone()),
            ))?;
            session.record(&staged, OpenDocument::LibraryFile { project_key, item });
            println!("{} {}", "✓".green(), staged.display());
        }
    }

    session::save_at(&ctx.home, &session)?;
    Ok(())
}

fn file_name_of(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}
