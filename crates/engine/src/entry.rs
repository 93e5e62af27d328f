//! The module contains the `Entry` type, one recorded income or expense.
use core::fmt;

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{EngineError, ResultEngine, format_amount};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Short Vietnamese label used in chat replies.
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "thu",
            Self::Expense => "chi",
        }
    }

    /// Sign shown in front of amounts in listings.
    pub fn sign(self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl TryFrom<&str> for EntryKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::Corrupted(format!("invalid entry kind: {other}"))),
        }
    }
}

/// Represent a movement in the ledger. Amounts are thousand-VND units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub kind: EntryKind,
    pub amount: i64,
    pub note: String,
    pub date: NaiveDate,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.kind.label(),
            format_amount(self.amount),
            self.note
        )
    }
}

impl TryFrom<Model> for Entry {
    type Error = EngineError;

    fn try_from(model: Model) -> ResultEngine<Self> {
        Ok(Self {
            id: model.id,
            kind: EntryKind::try_from(model.kind.as_str())?,
            amount: model.amount,
            note: model.note,
            date: model.date,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub kind: String,
    pub amount: i64,
    pub note: String,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Builds the row for a new entry, leaving the id to the store.
pub(crate) fn new_active_model(
    kind: EntryKind,
    amount: i64,
    note: &str,
    date: NaiveDate,
) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        kind: ActiveValue::Set(kind.as_str().to_string()),
        amount: ActiveValue::Set(amount),
        note: ActiveValue::Set(note.to_string()),
        date: ActiveValue::Set(date),
    }
}
