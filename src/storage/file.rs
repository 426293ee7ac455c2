//! File-backed storage for tickets, labels, and label colors.
//!
//! Every save is a whole-file rewrite and every load reads the file fresh;
//! nothing is cached between operations. Concurrent writers can therefore
//! lose updates (last writer wins on the entire file).

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::{Ticket, label};
use crate::error::{Result, TicketLabelError};

/// Ticket file name inside the data directory.
pub const TICKETS_FILE: &str = "tickets.csv";
/// Label list file name.
pub const LABELS_FILE: &str = "labels.json";
/// Label color file name.
pub const LABEL_COLORS_FILE: &str = "label_colors.json";

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Strips a UTF-8 byte-order mark and decodes the rest leniently.
pub(crate) fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}

/// One row of the ticket file. Kept separate from [`Ticket`] so the
/// CSV field names stay fixed even if the domain type grows.
#[derive(Debug, Deserialize)]
struct TicketRow {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    label: Option<String>,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            label: label::normalize(row.label.as_deref()),
        }
    }
}

/// File storage rooted at a data directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at `root`. The directory is not created here;
    /// loads treat missing files as empty and saves fail with an I/O error.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory this storage reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tickets_path(&self) -> PathBuf {
        self.root.join(TICKETS_FILE)
    }

    pub fn labels_path(&self) -> PathBuf {
        self.root.join(LABELS_FILE)
    }

    pub fn label_colors_path(&self) -> PathBuf {
        self.root.join(LABEL_COLORS_FILE)
    }

    /// Loads all tickets, failing soft: a missing file is an empty store,
    /// and an unreadable one degrades to empty with a warning.
    pub fn load_tickets(&self) -> Vec<Ticket> {
        let path = self.tickets_path();
        if !path.exists() {
            debug!(path = %path.display(), "ticket file absent, starting empty");
            return Vec::new();
        }
        match self.read_tickets(&path) {
            Ok(tickets) => tickets,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    %err,
                    "ticket file unreadable, treating store as empty"
                );
                Vec::new()
            },
        }
    }

    fn read_tickets(&self, path: &Path) -> Result<Vec<Ticket>> {
        let bytes = fs::read(path)?;
        let text = decode_text(&bytes);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let mut tickets = Vec::new();
        for row in reader.deserialize::<TicketRow>() {
            tickets.push(row?.into());
        }
        Ok(tickets)
    }

    /// Rewrites the entire ticket file, header first, BOM included for
    /// compatibility with spreadsheet tools.
    pub fn save_tickets(&self, tickets: &[Ticket]) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["id", "title", "content", "label"])?;
        for ticket in tickets {
            writer.write_record([
                ticket.id.to_string().as_str(),
                ticket.title.as_str(),
                ticket.content.as_str(),
                ticket.label.as_deref().unwrap_or(""),
            ])?;
        }
        writer.flush()?;
        let data = writer
            .into_inner()
            .map_err(|err| TicketLabelError::custom(format!("csv writer: {err}")))?;

        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + data.len());
        bytes.extend_from_slice(UTF8_BOM);
        bytes.extend_from_slice(&data);
        fs::write(self.tickets_path(), bytes)?;
        Ok(())
    }

    /// Loads the label list verbatim; defaults only when the file is absent
    /// or unreadable. Missing defaults are re-added on save, not on load.
    pub fn load_labels(&self) -> Vec<String> {
        let path = self.labels_path();
        if !path.exists() {
            debug!(path = %path.display(), "label file absent, using defaults");
            return label::default_labels();
        }
        match self.read_json::<Vec<String>>(&path) {
            Ok(labels) => labels,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    %err,
                    "label file unreadable, using defaults"
                );
                label::default_labels()
            },
        }
    }

    /// Writes the label list with any missing default appended at the end.
    pub fn save_labels(&self, labels: &[String]) -> Result<()> {
        let mut all = labels.to_vec();
        label::ensure_defaults(&mut all);
        self.write_json(&self.labels_path(), &all)
    }

    /// Loads label colors with defaults merged in last, so default entries
    /// override whatever the file says for the same keys.
    pub fn load_label_colors(&self) -> HashMap<String, String> {
        let path = self.label_colors_path();
        if !path.exists() {
            debug!(path = %path.display(), "label color file absent, using defaults");
            return label::default_colors();
        }
        match self.read_json::<HashMap<String, String>>(&path) {
            Ok(mut colors) => {
                label::apply_default_colors(&mut colors);
                colors
            },
            Err(err) => {
                warn!(
                    path = %path.display(),
                    %err,
                    "label color file unreadable, using defaults"
                );
                label::default_colors()
            },
        }
    }

    /// Writes label colors with the defaults-win merge applied first.
    pub fn save_label_colors(&self, colors: &HashMap<String, String>) -> Result<()> {
        let mut all = colors.clone();
        label::apply_default_colors(&mut all);
        self.write_json(&self.label_colors_path(), &all)
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        fs::write(path, text)?;
        Ok(())
    }
}
