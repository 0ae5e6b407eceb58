//! Terminal implementations of the core's prompt traits.

use std::sync::Mutex;

use async_trait::async_trait;
use colored::Colorize;
use dialoguer::{Input, Select};

use atelier_jobs::{LogSink, PartitionPrompt};
use atelier_sync::{ConflictChoice, ConflictPrompt};

/// Conflict resolution as a terminal select. Interrupting the prompt
/// (esc, ctrl-c) maps to Cancel.
pub struct TerminalConflictPrompt;

#[async_trait]
impl ConflictPrompt for TerminalConflictPrompt {
    async fn resolve(&self, message: &str) -> ConflictChoice {
        let message = message.to_string();
        let choice = tokio::task::spawn_blocking(move || {
            eprintln!("{}", message.yellow());
            let selection = Select::new()
                .with_prompt("How do you want to proceed?")
                .items(&["Save anyway", "Discard my changes", "Cancel"])
                .default(2)
                .interact_opt();
            match selection {
                Ok(Some(0)) => ConflictChoice::SaveAnyway,
                Ok(Some(1)) => ConflictChoice::Discard,
                _ => ConflictChoice::Cancel,
            }
        })
        .await;
        choice.unwrap_or(ConflictChoice::Cancel)
    }
}

/// Partition input as a terminal prompt. Remembers the last answer so
/// the caller can pin it for future runs.
#[derive(Default)]
pub struct TerminalPartitionPrompt {
    last: Mutex<Option<String>>,
}

impl TerminalPartitionPrompt {
    /// The most recent non-empty answer, if any.
    pub fn last_answer(&self) -> Option<String> {
        self.last.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl PartitionPrompt for TerminalPartitionPrompt {
    async fn request(&self, placeholder: &str) -> Option<String> {
        let hint = placeholder.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            Input::<String>::new()
                .with_prompt(format!("This recipe requires partitions: {hint}"))
                .allow_empty(true)
                .interact_text()
                .ok()
                .filter(|value| !value.is_empty())
        })
        .await
        .ok()
        .flatten();

        if let (Some(value), Ok(mut guard)) = (&answer, self.last.lock()) {
            *guard = Some(value.clone());
        }
        answer
    }
}

/// Prints only the log suffix that arrived since the previous flush —
/// a terminal cannot clear-and-replace the way an editor panel does.
#[derive(Default)]
pub struct StdoutLogSink {
    printed: usize,
}

impl LogSink for StdoutLogSink {
    fn replace(&mut self, content: &str) {
        if content.len() <= self.printed {
            return;
        }
        // `get` keeps us safe if the server rewrites earlier log bytes
        // and the old length no longer falls on a char boundary.
        match content.get(self.printed..) {
            Some(suffix) => print!("{suffix}"),
            None => print!("{content}"),
        }
        self.printed = content.len();
    }
}
