//! Mapping from remote entities to the files they stage as.
//!
//! The mapping is a pure function of the entity's shape: a recipe is one
//! source file named after its language, a webapp is the fixed file set
//! its kind declares, a wiki article is one markdown file, plugin and
//! library items mirror their remote relative paths.

use std::path::PathBuf;

use atelier_core::model::{
    language_extension, RecipeAndPayload, WebApp, WebAppFile, WebAppParams, WikiArticle,
};

/// Directory namespaces under the staging root, one per object kind.
pub mod namespace {
    pub const RECIPES: &str = "RECIPES";
    pub const WEBAPPS: &str = "WEBAPPS";
    pub const WIKI: &str = "WIKI";
    pub const PLUGINS: &str = "PLUGINS";
    pub const LIBRARY: &str = "LIBRARY";
}

/// File content to stage — text for sources, bytes for plugin resources
/// such as images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileBody {
    Text(String),
    Bytes(Vec<u8>),
}

impl FileBody {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileBody::Text(text) => text.as_bytes(),
            FileBody::Bytes(bytes) => bytes,
        }
    }
}

/// One file to place in the staging cache: a name, its content, and the
/// directory (relative to the staging root) it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub body: FileBody,
    pub dir: PathBuf,
}

impl StagedFile {
    /// `<project>/RECIPES/<name>.<ext>`
    pub fn from_recipe(rnp: &RecipeAndPayload) -> Self {
        let extension = language_extension(&rnp.recipe.kind).unwrap_or("txt");
        Self {
            name: format!("{}.{extension}", rnp.recipe.name),
            body: FileBody::Text(rnp.payload.clone()),
            dir: PathBuf::from(&rnp.recipe.project_key).join(namespace::RECIPES),
        }
    }

    /// `<project>/WEBAPPS/<name>/<fixed file set>` — the webapp's kind
    /// selects which files exist.
    pub fn from_webapp(webapp: &WebApp) -> Vec<Self> {
        let dir = PathBuf::from(&webapp.project_key)
            .join(namespace::WEBAPPS)
            .join(&webapp.name);
        let file = |kind: WebAppFile, content: &str| Self {
            name: kind.file_name().to_string(),
            body: FileBody::Text(content.to_string()),
            dir: dir.clone(),
        };

        match &webapp.params {
            WebAppParams::Bokeh { python } => vec![file(WebAppFile::Backend, python)],
            WebAppParams::Shiny { ui, server } => vec![
                file(WebAppFile::Server, server),
                file(WebAppFile::Ui, ui),
            ],
            WebAppParams::Standard {
                html,
                css,
                js,
                python,
                backend_enabled,
            } => {
                let mut files = vec![
                    file(WebAppFile::Html, html),
                    file(WebAppFile::Css, css),
                    file(WebAppFile::Js, js),
                ];
                if *backend_enabled {
                    files.push(file(WebAppFile::Backend, python));
                }
                files
            }
        }
    }

    /// `<project>/WIKI/<sanitised name>.md`
    pub fn from_wiki_article(article: &WikiArticle) -> Self {
        Self {
            name: format!("{}.md", sanitize_article_name(&article.article.name)),
            body: FileBody::Text(article.payload.clone()),
            dir: PathBuf::from(&article.article.project_key).join(namespace::WIKI),
        }
    }

    /// `PLUGINS/<plugin id>/<relative path>`
    pub fn from_plugin(plugin_id: &str, path: &str, body: FileBody) -> Self {
        let (sub_dir, file_name) = split_remote_path(path);
        let mut dir = PathBuf::from(namespace::PLUGINS).join(plugin_id);
        if !sub_dir.is_empty() {
            dir = dir.join(sub_dir);
        }
        Self {
            name: file_name.to_string(),
            body,
            dir,
        }
    }

    /// `<project>/LIBRARY/<relative path>`
    pub fn from_library(project_key: &str, path: &str, body: FileBody) -> Self {
        let (sub_dir, file_name) = split_remote_path(path);
        let mut dir = PathBuf::from(project_key).join(namespace::LIBRARY);
        if !sub_dir.is_empty() {
            dir = dir.join(sub_dir);
        }
        Self {
            name: file_name.to_string(),
            body,
            dir,
        }
    }
}

/// Split a remote `/`-separated path into (directory part, file name).
fn split_remote_path(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Article names become file names with every non-alphanumeric character
/// replaced by `_`.
pub fn sanitize_article_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
