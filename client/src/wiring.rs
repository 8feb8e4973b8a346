//! Per-control outcome reporting for listener wiring.

#[cfg(test)]
#[path = "wiring_test.rs"]
mod wiring_test;

use std::fmt::Display;

/// Log every failed `(control, result)` pair under `scope` and return how
/// many controls were wired. Each result is evaluated by the caller before it
/// gets here, so one failure never prevents the next control from wiring.
pub fn report<L, E, I>(scope: &str, outcomes: I) -> usize
where
    L: Display,
    E: Display,
    I: IntoIterator<Item = (L, Result<(), E>)>,
{
    let mut wired = 0;
    for (control, result) in outcomes {
        match result {
            Ok(()) => wired += 1,
            Err(err) => log::warn!("{scope}: {control} not wired: {err}"),
        }
    }
    wired
}
