// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no peripheral named `{0}` (try `regmap list`)")]
    UnknownPeripheral(String),

    #[error("audit found {0} problem(s)")]
    AuditFailed(usize),

    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}
