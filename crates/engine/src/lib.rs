//! Ledger engine for the thu-chi bot.
//!
//! One shared ledger of income ("thu") and expense ("chi") entries, stored in
//! a single `entries` table. Amounts are integers in thousand-VND units.

pub use amount::{MAX_AMOUNT, format_amount, parse_amount};
pub use cadence::{AutoSummary, span_days};
pub use entry::{Entry, EntryKind};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use period::{DateRange, DeleteScope, YearMonth, parse_date};
pub use totals::Totals;

mod amount;
mod cadence;
mod entry;
mod error;
mod ops;
mod period;
mod totals;

type ResultEngine<T> = Result<T, EngineError>;
