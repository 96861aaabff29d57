//! Section registry and resolver for the admin navigation surface

use tracing::debug;

use super::evaluator::can_access;
use super::policy::RolePolicy;
use super::types::{Permission, Role, Section};

/// Ordered catalog of admin areas.
///
/// Order is presentation order for the dashboard and sidebar; sections have
/// no hierarchy beyond what the external router encodes. Adding an admin
/// area means adding one record to [`SectionRegistry::defaults`] and wiring
/// permissions that already exist in the catalog.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build a registry from an explicit section list.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// The production admin areas, in presentation order.
    pub fn defaults() -> Self {
        let sections = vec![
            // No required permissions: visible to every known role.
            Section::new(
                "overview",
                "Overview",
                "Admin home and recent activity",
                "home",
                [],
            ),
            Section::new(
                "content",
                "Content Management",
                "Publish sermons and articles",
                "library-books",
                [Permission::SermonsCreate, Permission::ArticlesCreate],
            ),
            Section::new(
                "topics-series",
                "Topics & Series",
                "Organize content into topics and series",
                "collections-bookmark",
                [Permission::TopicsCreate, Permission::SeriesCreate],
            ),
            Section::new(
                "media",
                "Media Library",
                "Upload and organize audio and images",
                "perm-media",
                [Permission::MediaUpload, Permission::MediaManage],
            ),
            Section::new(
                "users",
                "User Management",
                "Members, roles, and account status",
                "people",
                [Permission::UsersView],
            ),
            Section::new(
                "notifications",
                "Notifications",
                "Compose and send push notifications",
                "notifications",
                [Permission::NotificationsManage],
            ),
            Section::new(
                "analytics",
                "Analytics",
                "Engagement and listening statistics",
                "insert-chart",
                [Permission::AnalyticsView],
            ),
            Section::new(
                "settings",
                "Settings",
                "Application-wide configuration",
                "settings",
                [Permission::SettingsManage],
            ),
        ];

        debug!(sections = sections.len(), "Initialized default section registry");
        Self::new(sections)
    }

    /// Iterate sections in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Look up a section by id.
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Number of registered sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::defaults()
    }
}

/// The ordered subset of `registry` that `role` may access.
///
/// Recomputed from scratch on every call; both the dashboard list and the
/// sidebar consume this one resolver so the two surfaces cannot drift.
pub fn available_sections<'a>(
    policy: &RolePolicy,
    registry: &'a SectionRegistry,
    role: Role,
) -> Vec<&'a Section> {
    registry
        .iter()
        .filter(|section| can_access(policy, role, &section.required_permissions))
        .collect()
}
