//! Kickstart template catalog.
//!
//! # Design
//!
//! The catalog is closed: a [`Template`] is one of a fixed set of variants,
//! and everything the pipeline needs to know about a template lives in exactly
//! one [`TemplateDef`] entry of [`TEMPLATE_REGISTRY`]. Catalog membership,
//! stub directory names and seeder class names all derive from that table.
//!
//! # Adding a New Template
//!
//! 1. Add a variant to [`Template`] (and to [`Template::ALL`])
//! 2. Add one [`TemplateDef`] entry to [`TEMPLATE_REGISTRY`], in the same
//!    position as the variant
//! 3. Ship `stubs/kickstart/<name>/` with the draft and seeder stubs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Template ─────────────────────────────────────────────────────────────────

/// A kickstart template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    Blog,
    Podcast,
    PhoneBook,
}

impl Template {
    /// Every template, in registry order.
    pub const ALL: [Template; 3] = [Self::Blog, Self::Podcast, Self::PhoneBook];

    /// The registry entry describing this template.
    pub const fn def(self) -> &'static TemplateDef {
        &TEMPLATE_REGISTRY[self as usize]
    }

    /// The template name as used in stub paths and on the command line.
    pub const fn as_str(self) -> &'static str {
        self.def().name
    }

    /// Class name of the seeder that replaces the generic ones.
    pub const fn seeder_class(self) -> &'static str {
        self.def().seeder_class
    }

    /// `<SeederClass>.php`
    pub fn seeder_file_name(self) -> String {
        format!("{}.php", self.seeder_class())
    }

    pub const fn description(self) -> &'static str {
        self.def().description
    }

    /// Names of all templates, for error messages and completions.
    pub fn names() -> Vec<&'static str> {
        TEMPLATE_REGISTRY.iter().map(|d| d.name).collect()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        TEMPLATE_REGISTRY
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.template)
            .ok_or_else(|| DomainError::InvalidTemplate {
                name: name.to_string(),
                available: Template::names(),
            })
    }
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// Everything the pipeline needs to know about one template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDef {
    /// The variant this entry describes.
    pub template: Template,

    /// Catalog name; also the stub sub-directory.
    pub name: &'static str,

    /// Seeder class deployed into `database/seeders`.
    pub seeder_class: &'static str,

    pub description: &'static str,
}

/// Single source of truth for the template catalog.
///
/// Entries are indexed by `Template as usize`, so the order here must match
/// the declaration order of [`Template`].
pub const TEMPLATE_REGISTRY: &[TemplateDef] = &[
    TemplateDef {
        template: Template::Blog,
        name: "blog",
        seeder_class: "BlogKickstartSeeder",
        description: "Posts, comments and authors",
    },
    TemplateDef {
        template: Template::Podcast,
        name: "podcast",
        seeder_class: "PodcastKickstartSeeder",
        description: "Podcasts, episodes and subscriptions",
    },
    TemplateDef {
        template: Template::PhoneBook,
        name: "phone-book",
        seeder_class: "PhoneBookKickstartSeeder",
        description: "Contacts, phone numbers and addresses",
    },
];
