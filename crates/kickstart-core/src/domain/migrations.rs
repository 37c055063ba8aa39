//! Migration prerequisites for seeding a kickstart template.
//!
//! Seeding needs the users table, and the teams table when the project has
//! teams support. A missing migration is common (e.g. a project generated
//! without an auth starter kit), so the result is a report, not an error.

use std::fmt;

use crate::domain::{catalog::Template, inflection::plural};

const USERS_MIGRATION_SUFFIX: &str = "create_users_table.php";
const TEAMS_MIGRATION_SUFFIX: &str = "create_teams_table.php";

/// A migration the template's seeder depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MigrationPrerequisite {
    User,
    Team,
}

impl MigrationPrerequisite {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Team => "team",
        }
    }

    /// File-name suffix of the migration creating this table, i.e. the glob
    /// `*create_<table>_table.php`.
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::User => USERS_MIGRATION_SUFFIX,
            Self::Team => TEAMS_MIGRATION_SUFFIX,
        }
    }

    pub fn matches(self, file_name: &str) -> bool {
        file_name.ends_with(self.file_suffix())
    }
}

impl fmt::Display for MigrationPrerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which prerequisite migrations a project provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub has_users: bool,
    pub has_teams: bool,
}

impl MigrationReport {
    /// Inspect a (non-recursive) migrations listing.
    ///
    /// With teams disabled the teams migration counts as present. A stray
    /// teams migration in such a project is not reported.
    pub fn scan<I, S>(file_names: I, using_teams: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = Self {
            has_users: false,
            has_teams: !using_teams,
        };

        for name in file_names {
            let name = name.as_ref();
            if MigrationPrerequisite::User.matches(name) {
                report.has_users = true;
            }
            if MigrationPrerequisite::Team.matches(name) {
                report.has_teams = true;
            }
        }

        report
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_users && self.has_teams
    }

    /// Missing prerequisites, always ordered `user` then `team`.
    pub fn missing(&self) -> Vec<MigrationPrerequisite> {
        [
            (MigrationPrerequisite::User, self.has_users),
            (MigrationPrerequisite::Team, self.has_teams),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(prerequisite, _)| prerequisite)
        .collect()
    }

    /// Human-readable advisory, or `None` when seeding can go ahead.
    pub fn advisory(&self, template: Template) -> Option<String> {
        if self.is_satisfied() {
            return None;
        }

        let missing = self.missing();
        let names: Vec<&str> = missing.iter().map(|m| m.as_str()).collect();
        let verb = if missing.len() > 1 { "are" } else { "is" };

        Some(format!(
            "{} seeder bypassed: the {} {} {} missing",
            template,
            names.join(" and "),
            plural("migration", missing.len()),
            verb,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS: &str = "0001_01_01_000000_create_users_table.php";
    const TEAMS: &str = "2024_05_01_101010_create_teams_table.php";
    const CACHE: &str = "0001_01_01_000001_create_cache_table.php";

    #[test]
    fn both_present_with_teams_is_satisfied() {
        let report = MigrationReport::scan([USERS, CACHE, TEAMS], true);
        assert!(report.is_satisfied());
        assert_eq!(report.advisory(Template::Blog), None);
    }

    #[test]
    fn neither_present_with_teams_names_both() {
        let report = MigrationReport::scan([CACHE], true);
        assert_eq!(
            report.missing(),
            [MigrationPrerequisite::User, MigrationPrerequisite::Team]
        );
        assert_eq!(
            report.advisory(Template::Podcast).unwrap(),
            "podcast seeder bypassed: the user and team migrations are missing"
        );
    }

    #[test]
    fn teams_requirement_waived_without_teams() {
        let report = MigrationReport::scan([USERS], false);
        assert!(report.is_satisfied());
        assert_eq!(report.advisory(Template::Blog), None);
    }

    #[test]
    fn only_users_missing_is_singular() {
        let report = MigrationReport::scan([TEAMS], true);
        assert_eq!(
            report.advisory(Template::PhoneBook).unwrap(),
            "phone-book seeder bypassed: the user migration is missing"
        );

        let report = MigrationReport::scan(Vec::<String>::new(), false);
        assert_eq!(report.missing(), [MigrationPrerequisite::User]);
    }

    #[test]
    fn only_teams_missing_is_singular() {
        let report = MigrationReport::scan([USERS], true);
        assert_eq!(
            report.advisory(Template::Blog).unwrap(),
            "blog seeder bypassed: the team migration is missing"
        );
    }

    #[test]
    fn matching_is_by_suffix() {
        assert!(MigrationPrerequisite::User.matches("create_users_table.php"));
        assert!(!MigrationPrerequisite::User.matches("create_users_table.php.bak"));
        assert!(!MigrationPrerequisite::User.matches("add_role_to_users_table.php"));
    }
}
