//! Entropy sources for [`Engine::randomize`](crate::Engine::randomize)

use super::Absorber;
use chrono::Local;
use std::env;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Process-lifetime counter, distinguishes instances seeded in the same tick.
static RANDOMIZE_COUNT: AtomicU64 = AtomicU64::new(0);

pub(super) fn absorb_all(absorber: &mut Absorber<'_>) {
    // in the same process
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let instance = address_of(&*absorber.engine);
    absorber.word(now);
    absorber.word(instance);
    absorber.word(RANDOMIZE_COUNT.fetch_add(1, Ordering::Relaxed) + 1);

    // on the same computer
    absorber.word(u64::from(std::process::id()));
    absorber.word(parent_id());
    absorber.word(address_of(&now));
    absorb_list(absorber, env::args_os().map(|a| a.to_string_lossy().into_owned()));

    // on different computers
    let (offset, zone) = local_zone();
    absorb_location(absorber, offset, &zone);
    absorb_list(
        absorber,
        env::vars_os().map(|(k, v)| format!("{}={}", k.to_string_lossy(), v.to_string_lossy())),
    );
}

fn address_of<T>(value: &T) -> u64 {
    value as *const T as usize as u64
}

/// Item count, then the concatenation of all items.
fn absorb_list(absorber: &mut Absorber<'_>, items: impl Iterator<Item = String>) {
    let mut count = 0u64;
    let mut joined = String::new();
    for item in items {
        joined.push_str(&item);
        count += 1;
    }
    absorber.word(count);
    absorber.bytes(joined.as_bytes());
}

/// UTC offset, then zone, locale, host name and working directory.
fn absorb_location(absorber: &mut Absorber<'_>, offset: i32, zone: &str) {
    absorber.word(offset as i64 as u64);

    let mut place = zone.to_string();
    for key in ["TZ", "LANG", "LC_ALL"] {
        place.push_str(&env::var(key).unwrap_or_default());
    }
    place.push_str(&hostname());
    if let Ok(dir) = env::current_dir() {
        place.push_str(&dir.to_string_lossy());
    }
    absorber.bytes(place.as_bytes());
}

/// Local UTC offset in seconds and its rendered zone.
fn local_zone() -> (i32, String) {
    let now = Local::now();
    (now.offset().local_minus_utc(), now.format("%Z").to_string())
}

#[cfg(unix)]
fn parent_id() -> u64 {
    u64::from(std::os::unix::process::parent_id())
}

#[cfg(not(unix))]
fn parent_id() -> u64 {
    0
}

fn hostname() -> String {
    if let Ok(name) = std::fs::read_to_string("/etc/hostname") {
        return name.trim().to_string();
    }
    env::var("HOSTNAME")
        .or_else(|_| env::var("COMPUTERNAME"))
        .unwrap_or_default()
}
