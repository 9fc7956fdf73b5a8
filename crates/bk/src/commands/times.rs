//! `bk times` -- current time around the world.
//!
//! Shows local time, UTC, and a random handful of IANA timezones, sorted by
//! clock time. Zone names render with spaces instead of underscores.

use anyhow::Result;
use chrono::{Local, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use rand::seq::SliceRandom;

use bundlekit_core::feedback::{Feedback, Item};

use crate::cli::TimesArgs;
use crate::context::RuntimeContext;
use crate::output::emit_feedback;

/// Execute the `bk times` command.
pub fn run(_ctx: &RuntimeContext, args: &TimesArgs) -> Result<()> {
    let utc_now = Utc::now();
    let local_now = Local::now();

    let mut times: Vec<(String, String)> = vec![
        (local_now.format("%H:%M").to_string(), "Local time".to_string()),
        (utc_now.format("%H:%M").to_string(), "UTC".to_string()),
    ];

    for tz in random_zones(args.zones) {
        let clock = utc_now.with_timezone(&tz).format("%H:%M").to_string();
        times.push((clock, tz.name().replace('_', " ")));
    }

    times.sort();

    let mut feedback = Feedback::new();
    for (clock, name) in times {
        feedback.push(Item::new(format!("{clock} {name}")));
    }
    emit_feedback(&feedback)
}

/// Sample `n` distinct zones from the IANA database.
fn random_zones(n: usize) -> Vec<Tz> {
    let mut rng = rand::thread_rng();
    TZ_VARIANTS.choose_multiple(&mut rng, n).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_zones_are_distinct_and_valid() {
        let zones = random_zones(10);
        assert_eq!(zones.len(), 10);
        for pair in zones.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        for zone in zones {
            // Round-trip through the name proves it is a valid IANA zone.
            assert_eq!(zone.name().parse::<Tz>().unwrap(), zone);
        }
    }

    #[test]
    fn zone_conversion_matches_utc_offset() {
        let utc_now = Utc::now();
        let utc_clock = utc_now.format("%H:%M").to_string();
        let in_utc_zone = utc_now.with_timezone(&Tz::UTC).format("%H:%M").to_string();
        assert_eq!(utc_clock, in_utc_zone);
    }
}
