// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod branch;
mod change;
mod commit;
mod outcome;

pub use branch::*;
pub use change::*;
pub use commit::*;
pub use outcome::*;
