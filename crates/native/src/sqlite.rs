// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite has no sequence objects; each native sequence is a row of the
//! `native_sequence` table, advanced on a dedicated autocommit connection so
//! that values handed out survive the rollback of any host transaction.

use std::path::PathBuf;

use parking_lot::Mutex;
use rusqlite::{Connection, ErrorCode, OptionalExtension, TransactionBehavior, params};
use tracing::{debug, instrument};

use crate::{NativeError, NativeSequenceState, NativeSequences, NativeStatement, check_bounds, successor};

const ENGINE: &str = "sqlite";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS native_sequence (
	name TEXT PRIMARY KEY NOT NULL,
	increment_by INTEGER NOT NULL,
	next_value INTEGER NOT NULL
)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbPath {
	File(PathBuf),
	Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteConfig {
	pub path: DbPath,
	pub busy_timeout_ms: u64,
}

impl SqliteConfig {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: DbPath::File(path.into()),
			busy_timeout_ms: 5_000,
		}
	}

	pub fn in_memory() -> Self {
		Self {
			path: DbPath::Memory,
			busy_timeout_ms: 5_000,
		}
	}

	pub fn busy_timeout_ms(mut self, busy_timeout_ms: u64) -> Self {
		self.busy_timeout_ms = busy_timeout_ms;
		self
	}
}

pub struct SqliteNativeSequences {
	conn: Mutex<Connection>,
}

impl SqliteNativeSequences {
	#[instrument(name = "native::sqlite::new", level = "info", skip(config), fields(db_path = ?config.path))]
	pub fn new(config: SqliteConfig) -> crate::Result<Self> {
		let conn = match &config.path {
			DbPath::File(path) => Connection::open(path),
			DbPath::Memory => Connection::open_in_memory(),
		}
		.map_err(|err| engine_error("open", err))?;

		conn.busy_timeout(std::time::Duration::from_millis(config.busy_timeout_ms))
			.map_err(|err| engine_error("busy_timeout", err))?;
		conn.execute_batch(SCHEMA).map_err(|err| engine_error(SCHEMA, err))?;

		Ok(Self {
			conn: Mutex::new(conn),
		})
	}

	pub fn in_memory() -> crate::Result<Self> {
		Self::new(SqliteConfig::in_memory())
	}
}

fn engine_error(statement: impl ToString, err: rusqlite::Error) -> seqid_type::Error {
	NativeError::Engine {
		engine: ENGINE,
		statement: statement.to_string(),
		reason: err.to_string(),
	}
	.into()
}

fn missing(name: &str) -> seqid_type::Error {
	NativeError::Missing {
		name: name.to_string(),
	}
	.into()
}

/// Values are kept below `MAX_VALUE` by `check_bounds` and `successor`.
fn to_sql(value: u64) -> i64 {
	i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_sql(value: i64) -> u64 {
	u64::try_from(value).unwrap_or(0)
}

impl NativeSequences for SqliteNativeSequences {
	fn engine(&self) -> &'static str {
		ENGINE
	}

	#[instrument(name = "native::sqlite::execute", level = "trace", skip_all, fields(statement = %statement))]
	fn execute(&self, statement: &NativeStatement<'_>) -> crate::Result<Option<u64>> {
		check_bounds(ENGINE, statement)?;

		let mut conn = self.conn.lock();
		match *statement {
			NativeStatement::Create {
				name,
				increment,
				start,
			} => {
				conn.execute(
					"INSERT INTO native_sequence (name, increment_by, next_value) VALUES (?1, ?2, ?3)",
					params![name, to_sql(increment), to_sql(start)],
				)
				.map_err(|err| match err.sqlite_error_code() {
					Some(ErrorCode::ConstraintViolation) => NativeError::AlreadyExists {
						name: name.to_string(),
					}
					.into(),
					_ => engine_error(statement, err),
				})?;
				debug!(%statement, "created native sequence");
				Ok(None)
			}
			NativeStatement::Alter {
				name,
				increment,
				restart,
			} => {
				let changed = conn
					.execute(
						"UPDATE native_sequence SET increment_by = ?2, next_value = ?3 WHERE name = ?1",
						params![name, to_sql(increment), to_sql(restart)],
					)
					.map_err(|err| engine_error(statement, err))?;
				if changed == 0 {
					return Err(missing(name));
				}
				debug!(%statement, "altered native sequence");
				Ok(None)
			}
			NativeStatement::Drop {
				name,
			} => {
				let changed = conn
					.execute("DELETE FROM native_sequence WHERE name = ?1", params![name])
					.map_err(|err| engine_error(statement, err))?;
				if changed == 0 {
					return Err(missing(name));
				}
				debug!(%statement, "dropped native sequence");
				Ok(None)
			}
			NativeStatement::NextVal {
				name,
			} => {
				let tx = conn
					.transaction_with_behavior(TransactionBehavior::Immediate)
					.map_err(|err| engine_error(statement, err))?;

				let current: Option<(i64, i64)> = tx
					.query_row(
						"SELECT next_value, increment_by FROM native_sequence WHERE name = ?1",
						params![name],
						|row| Ok((row.get(0)?, row.get(1)?)),
					)
					.optional()
					.map_err(|err| engine_error(statement, err))?;

				let Some((value, increment)) = current else {
					return Err(missing(name));
				};
				let value = from_sql(value);
				let next = successor(name, value, from_sql(increment))?;

				tx.execute(
					"UPDATE native_sequence SET next_value = ?2 WHERE name = ?1",
					params![name, to_sql(next)],
				)
				.map_err(|err| engine_error(statement, err))?;
				tx.commit().map_err(|err| engine_error(statement, err))?;

				Ok(Some(value))
			}
		}
	}

	fn state(&self, name: &str) -> crate::Result<Option<NativeSequenceState>> {
		let conn = self.conn.lock();
		let state = conn
			.query_row(
				"SELECT increment_by, next_value FROM native_sequence WHERE name = ?1",
				params![name],
				|row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
			)
			.optional()
			.map_err(|err| engine_error("SELECT increment_by, next_value FROM native_sequence", err))?;

		Ok(state.map(|(increment, next)| NativeSequenceState {
			increment: from_sql(increment),
			next: from_sql(next),
		}))
	}
}
