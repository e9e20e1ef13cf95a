//! Entity services.
//!
//! Each service wraps one persistence gateway and applies the record
//! lifecycle rules before delegating:
//!
//! - create: duplicate-title check in the parent scope, fresh id,
//!   `created_at == updated_at`, slug derived from the title when blank,
//!   version 1
//! - update: re-read the persisted row, keep its `created_at`, parent ids and
//!   creator, bump the version by one and write with a compare-and-swap on
//!   the persisted version
//! - delete: soft delete, no existence check, no cascade
//!
//! Services never call each other.

pub mod course;
pub mod lesson;
pub mod skill;
pub mod unit;

pub use course::CourseService;
pub use lesson::LessonService;
pub use skill::SkillService;
pub use unit::UnitService;

use chrono::{SubsecRound, Utc};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Version assigned to every newly created record.
pub const INITIAL_VERSION: i32 = 1;

/// Current time at the microsecond precision PostgreSQL stores, so a record
/// returned from create or update equals the one read back later.
fn db_now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Reject an update whose caller-supplied version no longer matches storage.
fn check_expected_version(
    entity: &'static str,
    id: DbId,
    persisted: i32,
    expected: Option<i32>,
) -> Result<(), CoreError> {
    match expected {
        Some(expected) if expected != persisted => Err(CoreError::Conflict(format!(
            "{entity} {id} is at version {persisted}, not {expected}"
        ))),
        _ => Ok(()),
    }
}

/// Case-insensitive title comparison used to decide whether the duplicate
/// check must run again on update.
fn title_changed(old: &str, new: &str) -> bool {
    old.to_lowercase() != new.to_lowercase()
}

/// Error for a compare-and-swap write that matched no row.
fn concurrent_modification(entity: &'static str, id: DbId) -> CoreError {
    CoreError::Conflict(format!("{entity} {id} was modified concurrently"))
}


#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn missing_expected_version_always_passes() {
        assert!(check_expected_version("Course", DbId::nil(), 4, None).is_ok());
        assert!(check_expected_version("Course", DbId::nil(), 4, Some(4)).is_ok());
    }

    #[test]
    fn stale_expected_version_is_a_conflict() {
        assert_matches!(
            check_expected_version("Course", DbId::nil(), 4, Some(3)),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn title_change_ignores_case() {
        assert!(!title_changed("Intro to Rhythm", "INTRO TO RHYTHM"));
        assert!(title_changed("Intro to Rhythm", "Intro to Harmony"));
    }
}
