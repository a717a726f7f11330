//! File-backed session storing all users in one JSON document.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use common::{AppResult, PokedexConfig};
use domain::User;

use super::Session;

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    users: BTreeMap<String, User>,
}

/// Session persisting committed users to a JSON file.
///
/// The whole document is rewritten on every commit through a sibling temp
/// file and a rename, so readers never observe a half-written store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    document: StoreDocument,
    pending: Vec<User>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => StoreDocument::default(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), users = document.users.len(), "opened json store");
        Ok(Self {
            path,
            document,
            pending: Vec::new(),
        })
    }

    /// Open the store named by the configuration.
    pub fn from_config(config: &PokedexConfig) -> AppResult<Self> {
        Self::open(config.store_path.clone())
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Committed copy of a user, if any
    pub fn load_user(&self, username: &str) -> Option<User> {
        self.document.users.get(username).cloned()
    }

    /// Committed usernames in sorted order
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.document.users.keys().map(String::as_str)
    }

    /// Number of committed users
    pub fn len(&self) -> usize {
        self.document.users.len()
    }

    /// Whether no user has been committed
    pub fn is_empty(&self) -> bool {
        self.document.users.is_empty()
    }

    /// Number of records staged but not yet committed
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn write_document(&self, document: &StoreDocument) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(document)?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let written = fs::File::create(&tmp_path).and_then(|mut file| {
            file.write_all(&json)?;
            file.sync_all()?;
            fs::rename(&tmp_path, &self.path)
        });

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl Session for JsonFileStore {
    fn add(&mut self, user: &User) -> AppResult<()> {
        self.pending.push(user.clone());
        Ok(())
    }

    fn commit(&mut self) -> AppResult<()> {
        // Build the next document first; staged records survive a failed write
        let mut next = StoreDocument {
            users: self.document.users.clone(),
        };
        for user in &self.pending {
            next.users.insert(user.username.clone(), user.clone());
        }

        self.write_document(&next)?;

        self.document = next;
        self.pending.clear();
        tracing::debug!(path = %self.path.display(), users = self.document.users.len(), "json store committed");
        Ok(())
    }
}
