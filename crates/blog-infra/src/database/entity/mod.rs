//! SeaORM entities for the `publicacoes` and `comentarios` tables.

pub mod comment;
pub mod post;

use sea_orm::ActiveValue;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Current time in the column representation, for audit columns.
pub(crate) fn now() -> DateTimeWithTimeZone {
    chrono::Utc::now().fixed_offset()
}

/// `updated_at` for a row being updated: the current time, but never
/// earlier than the value the row already carries.
pub(crate) fn touched(previous: &ActiveValue<DateTimeWithTimeZone>) -> DateTimeWithTimeZone {
    let now = now();
    match previous {
        ActiveValue::Set(prev) | ActiveValue::Unchanged(prev) => now.max(*prev),
        ActiveValue::NotSet => now,
    }
}
