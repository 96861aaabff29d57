//! RBAC type definitions

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::utils::error::RbacError;

/// A fine-grained capability in the admin surface.
///
/// The set of permissions is closed: a grant or a section requirement can
/// only reference a variant that exists, so a dangling permission reference
/// is a compile error rather than a runtime lookup failure. The dotted
/// string id (`resource.action`) is the boundary representation used in
/// session payloads, audit views, and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Permission {
    /// View user accounts and profiles
    UsersView,
    /// Create, update, and deactivate user accounts
    UsersManage,
    /// Send push notifications to selected users
    UsersSendNotifications,
    /// Create sermons
    SermonsCreate,
    /// Edit existing sermons
    SermonsEdit,
    /// Delete sermons
    SermonsDelete,
    /// Create articles
    ArticlesCreate,
    /// Edit existing articles
    ArticlesEdit,
    /// Delete articles
    ArticlesDelete,
    /// Create topics
    TopicsCreate,
    /// Create series
    SeriesCreate,
    /// Upload audio and image media
    MediaUpload,
    /// Organize and delete uploaded media
    MediaManage,
    /// Manage broadcast notifications
    NotificationsManage,
    /// View engagement analytics
    AnalyticsView,
    /// Manage application settings
    SettingsManage,
}

impl Permission {
    /// Every permission in the catalog, in catalog order.
    pub const ALL: &'static [Permission] = &[
        Permission::UsersView,
        Permission::UsersManage,
        Permission::UsersSendNotifications,
        Permission::SermonsCreate,
        Permission::SermonsEdit,
        Permission::SermonsDelete,
        Permission::ArticlesCreate,
        Permission::ArticlesEdit,
        Permission::ArticlesDelete,
        Permission::TopicsCreate,
        Permission::SeriesCreate,
        Permission::MediaUpload,
        Permission::MediaManage,
        Permission::NotificationsManage,
        Permission::AnalyticsView,
        Permission::SettingsManage,
    ];

    /// Stable dotted id, e.g. `content.sermons.create`.
    pub fn as_id(&self) -> &'static str {
        match self {
            Permission::UsersView => "users.view",
            Permission::UsersManage => "users.manage",
            Permission::UsersSendNotifications => "users.send_notifications",
            Permission::SermonsCreate => "content.sermons.create",
            Permission::SermonsEdit => "content.sermons.edit",
            Permission::SermonsDelete => "content.sermons.delete",
            Permission::ArticlesCreate => "content.articles.create",
            Permission::ArticlesEdit => "content.articles.edit",
            Permission::ArticlesDelete => "content.articles.delete",
            Permission::TopicsCreate => "topics.create",
            Permission::SeriesCreate => "series.create",
            Permission::MediaUpload => "media.upload",
            Permission::MediaManage => "media.manage",
            Permission::NotificationsManage => "notifications.manage",
            Permission::AnalyticsView => "analytics.view",
            Permission::SettingsManage => "settings.manage",
        }
    }

    /// Resolve a dotted id. Unknown ids are "not found", never an error.
    pub fn from_id(id: &str) -> Option<Permission> {
        Permission::ALL.iter().copied().find(|p| p.as_id() == id)
    }

    /// Human-readable permission name
    pub fn name(&self) -> &'static str {
        match self {
            Permission::UsersView => "View Users",
            Permission::UsersManage => "Manage Users",
            Permission::UsersSendNotifications => "Notify Users",
            Permission::SermonsCreate => "Create Sermons",
            Permission::SermonsEdit => "Edit Sermons",
            Permission::SermonsDelete => "Delete Sermons",
            Permission::ArticlesCreate => "Create Articles",
            Permission::ArticlesEdit => "Edit Articles",
            Permission::ArticlesDelete => "Delete Articles",
            Permission::TopicsCreate => "Create Topics",
            Permission::SeriesCreate => "Create Series",
            Permission::MediaUpload => "Upload Media",
            Permission::MediaManage => "Manage Media",
            Permission::NotificationsManage => "Manage Notifications",
            Permission::AnalyticsView => "View Analytics",
            Permission::SettingsManage => "Manage Settings",
        }
    }

    /// Human-readable permission description
    pub fn description(&self) -> &'static str {
        match self {
            Permission::UsersView => "Read member accounts and profiles",
            Permission::UsersManage => "Create, update, and deactivate member accounts",
            Permission::UsersSendNotifications => "Send push notifications to selected members",
            Permission::SermonsCreate => "Publish new sermons",
            Permission::SermonsEdit => "Edit published sermons",
            Permission::SermonsDelete => "Remove sermons from the library",
            Permission::ArticlesCreate => "Publish new articles",
            Permission::ArticlesEdit => "Edit published articles",
            Permission::ArticlesDelete => "Remove articles from the library",
            Permission::TopicsCreate => "Create content topics",
            Permission::SeriesCreate => "Create sermon and article series",
            Permission::MediaUpload => "Upload audio and image files",
            Permission::MediaManage => "Organize and delete uploaded media",
            Permission::NotificationsManage => "Compose and send broadcast notifications",
            Permission::AnalyticsView => "View engagement and listening analytics",
            Permission::SettingsManage => "Change application-wide settings",
        }
    }

    /// Resource segment of the id (everything before the final dot).
    pub fn resource(&self) -> &'static str {
        self.as_id()
            .rsplit_once('.')
            .map(|(resource, _)| resource)
            .unwrap_or_default()
    }

    /// Action verb of the id (the final segment).
    pub fn action(&self) -> &'static str {
        self.as_id()
            .rsplit_once('.')
            .map(|(_, action)| action)
            .unwrap_or_default()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_id())
    }
}

impl FromStr for Permission {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::from_id(s).ok_or_else(|| RbacError::UnknownPermission(s.to_string()))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_id())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = Permission;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a dotted permission id")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Permission, E> {
                Permission::from_id(value)
                    .ok_or_else(|| E::custom(format!("unknown permission id: {value}")))
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}

/// Staff role assigned to an authenticated actor.
///
/// The role set is closed and supplied by the external identity provider;
/// this crate never authenticates actors or mutates role assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to every admin area
    SuperAdmin,
    /// Creates and curates sermons, articles, topics, and media
    ContentManager,
    /// Reviews content and handles member communication
    Moderator,
}

impl Role {
    /// Every role, for iteration in admin UIs.
    pub const ALL: &'static [Role] = &[Role::SuperAdmin, Role::ContentManager, Role::Moderator];

    /// Canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::ContentManager => "content_manager",
            Role::Moderator => "moderator",
        }
    }

    /// Parse a raw role value from the session layer.
    ///
    /// This is the single place raw role strings enter the system. The
    /// legacy `"admin"` value is an alias for `super_admin` and is
    /// normalized here, never inside the evaluator. Anything unrecognized
    /// resolves to `None` and the caller must treat that as no access.
    pub fn from_session_value(value: &str) -> Option<Role> {
        match value {
            "super_admin" | "admin" => Some(Role::SuperAdmin),
            "content_manager" => Some(Role::ContentManager),
            "moderator" => Some(Role::Moderator),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = RbacError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Role::from_session_value(value).ok_or_else(|| RbacError::UnknownRole(value.to_string()))
    }
}

/// A navigable admin area gated behind a required permission set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Stable section id used by the router
    pub id: String,
    /// Menu title
    pub title: String,
    /// Menu subtitle / description
    pub description: String,
    /// Icon reference for the menu renderer
    pub icon: String,
    /// Permissions an actor must hold (all of them) to see this section.
    /// An empty set means the section is visible to every known role.
    pub required_permissions: BTreeSet<Permission>,
}

impl Section {
    /// Build a section record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        required_permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            required_permissions: required_permissions.into_iter().collect(),
        }
    }
}
