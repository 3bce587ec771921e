//! # Database
//!
//! The facade over the three flat-file stores.
//!
//! ## Store Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Database                                      │
//! │                                                                         │
//! │  stock file          read on every products() call, overwritten        │
//! │                      whole by write_products()                          │
//! │                                                                         │
//! │  user accounts file  read once at open(), cached for the session,      │
//! │                      never written back                                 │
//! │                                                                         │
//! │  activity log file   append-only, never read back                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation opens its file, does the full read or write, and
//! closes it before returning. There is no caching of stock (two calls
//! to [`Database::products`] can observe an external edit in between)
//! and no file locking: the model is single process, single user.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use cas_core::{ActivityLog, Inventory, User};
use tracing::warn;

use crate::codec;
use crate::error::{StoreError, StoreResult};

/// Facade over the stock, user-accounts, and activity-log files.
#[derive(Debug)]
pub struct Database {
    stock_path: PathBuf,
    user_accounts_path: PathBuf,
    activity_log_path: PathBuf,
    users: Vec<User>,
}

impl Database {
    /// Opens the database over the three store files.
    ///
    /// The user accounts file is read eagerly and cached; a single
    /// malformed account line fails the whole call. The stock file must
    /// be readable and the activity log appendable (it is created if
    /// missing), so a misconfigured path surfaces here rather than on
    /// the first purchase.
    pub fn open(
        stock_path: impl Into<PathBuf>,
        user_accounts_path: impl Into<PathBuf>,
        activity_log_path: impl Into<PathBuf>,
    ) -> StoreResult<Self> {
        let stock_path = stock_path.into();
        let user_accounts_path = user_accounts_path.into();
        let activity_log_path = activity_log_path.into();

        File::open(&stock_path).map_err(|e| StoreError::io(&stock_path, e))?;
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&activity_log_path)
            .map_err(|e| StoreError::io(&activity_log_path, e))?;

        let users = read_users(&user_accounts_path)?;

        Ok(Database {
            stock_path,
            user_accounts_path,
            activity_log_path,
            users,
        })
    }

    // Path accessors, mostly for diagnostics.

    pub fn stock_path(&self) -> &Path {
        &self.stock_path
    }

    pub fn user_accounts_path(&self) -> &Path {
        &self.user_accounts_path
    }

    pub fn activity_log_path(&self) -> &Path {
        &self.activity_log_path
    }

    // ===== Stock file =====

    /// Reads the stock file and returns a fresh [`Inventory`].
    ///
    /// The file is re-read in full on every call; there is no cache, so
    /// the result always reflects the file's current contents. Malformed
    /// lines are logged and skipped, and reading continues with the next
    /// line.
    pub fn products(&self) -> StoreResult<Inventory> {
        let file =
            File::open(&self.stock_path).map_err(|e| StoreError::io(&self.stock_path, e))?;
        let reader = BufReader::new(file);

        let mut inventory = Inventory::new();
        for line in reader.lines() {
            let line = line.map_err(|e| StoreError::io(&self.stock_path, e))?;
            match codec::parse_product_line(&line) {
                Ok(product) => {
                    inventory.add(product);
                }
                Err(err) => {
                    warn!(line = %line, error = %err, "skipping malformed stock line");
                }
            }
        }

        Ok(inventory)
    }

    /// Overwrites the stock file with the inventory's products, one line
    /// per product, in the inventory's current order.
    pub fn write_products(&self, products: &Inventory) -> StoreResult<()> {
        let file =
            File::create(&self.stock_path).map_err(|e| StoreError::io(&self.stock_path, e))?;
        let mut writer = BufWriter::new(file);

        for product in products.iter() {
            writeln!(writer, "{}", codec::format_product_line(product))
                .map_err(|e| StoreError::io(&self.stock_path, e))?;
        }

        writer
            .flush()
            .map_err(|e| StoreError::io(&self.stock_path, e))
    }

    // ===== User accounts file =====

    /// The user accounts loaded at [`Database::open`], in file order.
    ///
    /// Accounts are read-only for the session; there is no write-back
    /// path, so edits to the file while running are not observed.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Mutable access to the cached accounts, used to reach a signed-in
    /// customer's basket.
    pub fn users_mut(&mut self) -> &mut [User] {
        &mut self.users
    }

    /// Finds a cached account by id.
    pub fn user_by_id(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id() == id)
    }

    // ===== Activity log file =====

    /// Appends one log record, followed by a newline, to the activity
    /// log. The log is an audit trail; nothing in the application reads
    /// it back.
    pub fn write_activity_log(&self, log: &ActivityLog) -> StoreResult<()> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.activity_log_path)
            .map_err(|e| StoreError::io(&self.activity_log_path, e))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", codec::format_activity_line(log))
            .map_err(|e| StoreError::io(&self.activity_log_path, e))?;
        writer
            .flush()
            .map_err(|e| StoreError::io(&self.activity_log_path, e))
    }
}

/// Reads the user accounts file in full. The first malformed line aborts
/// the load with its line number.
fn read_users(path: &Path) -> StoreResult<Vec<User>> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut users = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| StoreError::io(path, e))?;
        let user = codec::parse_user_line(&line).map_err(|source| StoreError::UserRecord {
            line: index + 1,
            source,
        })?;
        users.push(user);
    }

    Ok(users)
}

// =============================================================================
// Unit Tests
// =============================================================================
