// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

use crate::{SvlCommandTransaction, TransactionConfig, TransactionSvl};

pub fn create_test_engine() -> TransactionSvl {
	TransactionSvl::testing()
}

/// Engine whose lock waits give up quickly, for tests that expect contention.
pub fn create_test_engine_with_timeout(timeout: Duration) -> TransactionSvl {
	TransactionSvl::new(TransactionConfig::new().lock_timeout(timeout))
}

pub fn create_test_command_transaction() -> SvlCommandTransaction {
	create_test_engine().begin_command()
}
