//! Opaque identifier generation for admission and employee numbers.
//!
//! Numbers follow the `PREFIX@<random><year>` convention, e.g.
//! `STU@x4Kp9a2026`. The random segment makes collisions improbable; the
//! database's unique constraint is the final arbiter.

use chrono::{Datelike, Utc};
use rand::{Rng, distributions::Alphanumeric};

const RANDOM_LEN: usize = 6;

fn tagged_number(prefix: &str) -> String {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_LEN)
        .map(char::from)
        .collect();

    format!("{}@{}{}", prefix, token, Utc::now().year())
}

pub fn admission_number() -> String {
    tagged_number("STU")
}

pub fn employee_number() -> String {
    tagged_number("TCH")
}
