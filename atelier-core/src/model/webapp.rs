//! Web applications: three kinds, each staged as a fixed set of files.

use serde::{Deserialize, Serialize};

use super::version::VersionTag;

/// A web application. Keyed by `(project_key, id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApp {
    pub project_key: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WebAppKind,
    pub params: WebAppParams,
    pub version_tag: VersionTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebAppKind {
    Bokeh,
    Shiny,
    Standard,
}

/// Kind-selected source holder. Untagged on the wire: the `type` field
/// lives on the webapp itself, so variants are told apart by field shape
/// — Standard first (largest field set), then Shiny, then Bokeh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WebAppParams {
    Standard {
        html: String,
        css: String,
        js: String,
        #[serde(default)]
        python: String,
        #[serde(rename = "backendEnabled", default)]
        backend_enabled: bool,
    },
    Shiny {
        ui: String,
        server: String,
    },
    Bokeh {
        python: String,
    },
}

/// The fixed file names a webapp's sources are staged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebAppFile {
    Backend,
    Server,
    Ui,
    Html,
    Css,
    Js,
}

impl WebAppFile {
    pub fn file_name(&self) -> &'static str {
        match self {
            WebAppFile::Backend => "backend.py",
            WebAppFile::Server => "server.r",
            WebAppFile::Ui => "ui.r",
            WebAppFile::Html => "template.html",
            WebAppFile::Css => "style.css",
            WebAppFile::Js => "javascript.js",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        match name {
            "backend.py" => Some(WebAppFile::Backend),
            "server.r" => Some(WebAppFile::Server),
            "ui.r" => Some(WebAppFile::Ui),
            "template.html" => Some(WebAppFile::Html),
            "style.css" => Some(WebAppFile::Css),
            "javascript.js" => Some(WebAppFile::Js),
            _ => None,
        }
    }
}

impl WebApp {
    /// Route edited text back into the params field the staged file
    /// mirrors. Returns `false` when the file does not belong to this
    /// webapp's kind.
    pub fn apply_edit(&mut self, file: WebAppFile, text: String) -> bool {
        match (&mut self.params, file) {
            (WebAppParams::Bokeh { python }, WebAppFile::Backend) => *python = text,
            (WebAppParams::Shiny { ui, .. }, WebAppFile::Ui) => *ui = text,
            (WebAppParams::Shiny { server, .. }, WebAppFile::Server) => *server = text,
            (WebAppParams::Standard { html, .. }, WebAppFile::Html) => *html = text,
            (WebAppParams::Standard { css, .. }, WebAppFile::Css) => *css = text,
            (WebAppParams::Standard { js, .. }, WebAppFile::Js) => *js = text,
            (WebAppParams::Standard { python, .. }, WebAppFile::Backend) => *python = text,
            _ => return false,
        }
        true
    }
}
