// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{path::PathBuf, sync::Arc};

use seqid_catalog::{SequenceConfig, SequenceManager};
use seqid_native::{MemoryNativeSequences, NativeSequences, SqliteConfig, SqliteNativeSequences};
#[cfg(feature = "sub_tracing")]
use seqid_sub_tracing::{TracingBuilder, TracingConfigurator};
use seqid_transaction::{TransactionConfig, TransactionSvl};
use tracing::{debug, instrument};

use crate::Sequences;

/// Engine backing sequences that use the native strategy.
pub enum NativeEngine {
	None,
	Memory,
	Sqlite(SqliteConfig),
	Custom(Arc<dyn NativeSequences>),
}

pub struct SequencesBuilder {
	config: SequenceConfig,
	transaction: TransactionConfig,
	native: NativeEngine,
	#[cfg(feature = "sub_tracing")]
	tracing_configurator: Option<TracingConfigurator>,
}

impl Default for SequencesBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl SequencesBuilder {
	pub fn new() -> Self {
		Self {
			config: SequenceConfig::default(),
			transaction: TransactionConfig::default(),
			native: NativeEngine::None,
			#[cfg(feature = "sub_tracing")]
			tracing_configurator: None,
		}
	}

	pub fn with_config(mut self, config: SequenceConfig) -> Self {
		self.config = config;
		self
	}

	pub fn with_transaction_config(mut self, transaction: TransactionConfig) -> Self {
		self.transaction = transaction;
		self
	}

	pub fn in_memory_native(mut self) -> Self {
		self.native = NativeEngine::Memory;
		self
	}

	pub fn sqlite_native(mut self, path: impl Into<PathBuf>) -> Self {
		self.native = NativeEngine::Sqlite(SqliteConfig::new(path));
		self
	}

	pub fn sqlite_native_in_memory(mut self) -> Self {
		self.native = NativeEngine::Sqlite(SqliteConfig::in_memory());
		self
	}

	pub fn with_native_engine(mut self, engine: Arc<dyn NativeSequences>) -> Self {
		self.native = NativeEngine::Custom(engine);
		self
	}

	pub fn without_native(mut self) -> Self {
		self.native = NativeEngine::None;
		self
	}

	#[cfg(feature = "sub_tracing")]
	pub fn with_tracing<F>(mut self, configurator: F) -> Self
	where
		F: FnOnce(TracingBuilder) -> TracingBuilder + Send + 'static,
	{
		self.tracing_configurator = Some(Box::new(configurator));
		self
	}

	#[instrument(name = "seqid::build", level = "debug", skip(self))]
	pub fn build(self) -> crate::Result<Sequences> {
		#[cfg(feature = "sub_tracing")]
		if let Some(configurator) = self.tracing_configurator {
			configurator(TracingBuilder::new()).init();
		}

		let engine: Option<Arc<dyn NativeSequences>> = match self.native {
			NativeEngine::None => None,
			NativeEngine::Memory => Some(Arc::new(MemoryNativeSequences::new())),
			NativeEngine::Sqlite(config) => Some(Arc::new(SqliteNativeSequences::new(config)?)),
			NativeEngine::Custom(engine) => Some(engine),
		};

		let mut manager = SequenceManager::new(self.config);
		if let Some(engine) = engine {
			debug!(engine = engine.engine(), "attached native engine");
			manager = manager.with_native_engine(engine);
		}

		Ok(Sequences::new(TransactionSvl::new(self.transaction), manager))
	}
}
