//! Reading "now" from a `mockable::Clock`.

use mockable::Clock;

use crate::event::DateTime;

/// The clock's local wall-clock time, truncated to whole seconds.
pub fn now(clock: &dyn Clock) -> DateTime {
    DateTime::from_naive(clock.local().naive_local())
}
