use chrono::{DateTime, Local, SecondsFormat};
use std::path::Path;
use std::time::SystemTime;

/// Column order expected by the KeePassXC CSV importer. `Icon` is reserved
/// for the importer and always left empty.
pub const FIELD_NAMES: [&str; 10] = [
    "Group",
    "Title",
    "Username",
    "Password",
    "URL",
    "Notes",
    "TOTP",
    "Icon",
    "Last Modified",
    "Created",
];

/// One exported credential. Optional fields stay `None` when the entry had
/// no such line — an absent field and an empty value are different things
/// to the importer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub group: String,
    pub title: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub totp: Option<String>,
    pub last_modified: String,
    pub created: String,
}

impl Record {
    /// Build a record from one decrypted entry.
    ///
    /// The first plaintext line is the password (omitted when empty, and an
    /// entirely empty file is tolerated). Every later line is either a
    /// recognized `tag: value` line (`login`, `url`, `otpauth` — exact,
    /// case-sensitive) or gets collected verbatim into Notes.
    pub fn from_entry(
        store_root: &Path,
        path: &Path,
        plaintext: &str,
        created: SystemTime,
        modified: SystemTime,
    ) -> Self {
        let group = match path.parent().and_then(|p| p.strip_prefix(store_root).ok()) {
            Some(rel) if !rel.as_os_str().is_empty() => rel.to_string_lossy().into_owned(),
            _ => ".".to_string(),
        };
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut lines = plaintext.lines();

        let password = match lines.next() {
            Some(first) if !first.is_empty() => Some(first.to_string()),
            _ => None,
        };

        let mut username = None;
        let mut url = None;
        let mut totp = None;
        let mut note_lines = Vec::new();

        for line in lines {
            match split_tag(line) {
                Some(("login", value)) => username = Some(value.to_string()),
                Some(("url", value)) => url = Some(value.to_string()),
                // Restore the colon the split consumed.
                Some(("otpauth", value)) => totp = Some(format!("otpauth:{}", value)),
                _ => note_lines.push(line),
            }
        }

        let notes = if note_lines.is_empty() {
            None
        } else {
            Some(note_lines.join("\n"))
        };

        Self {
            group,
            title,
            username,
            password,
            url,
            notes,
            totp,
            last_modified: format_timestamp(modified),
            created: format_timestamp(created),
        }
    }

    /// Look a field up by its schema column name. Unset optional fields and
    /// the reserved `Icon` column come back as `None`.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "Group" => Some(&self.group),
            "Title" => Some(&self.title),
            "Username" => self.username.as_deref(),
            "Password" => self.password.as_deref(),
            "URL" => self.url.as_deref(),
            "Notes" => self.notes.as_deref(),
            "TOTP" => self.totp.as_deref(),
            "Last Modified" => Some(&self.last_modified),
            "Created" => Some(&self.created),
            _ => None,
        }
    }
}

/// Split a `tag: value` line at the first colon, consuming at most one
/// space after it. A second space is part of the value, not the separator.
fn split_tag(line: &str) -> Option<(&str, &str)> {
    let (tag, rest) = line.split_once(':')?;
    Some((tag, rest.strip_prefix(' ').unwrap_or(rest)))
}

fn format_timestamp(ts: SystemTime) -> String {
    DateTime::<Local>::from(ts).to_rfc3339_opts(SecondsFormat::Secs, true)
}
