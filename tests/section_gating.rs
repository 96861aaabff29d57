//! Integration tests exercising the public authorization surface the way
//! the app's route guards and navigation renderer consume it.

use sanctuary_rbac::{Permission, RbacSystem, Role, Section};

#[test]
fn route_guard_decisions_for_each_role() {
    let rbac = RbacSystem::new();

    // Content manager publishing flow.
    assert!(rbac.can_access(
        Role::ContentManager,
        &[Permission::SermonsCreate, Permission::MediaUpload]
    ));
    // Content manager must not reach user management.
    assert!(!rbac.can_access(Role::ContentManager, &[Permission::UsersView]));

    // Moderator notification flow.
    assert!(rbac.can_access(
        Role::Moderator,
        &[Permission::UsersView, Permission::UsersSendNotifications]
    ));
    // Moderator edits content but never deletes it.
    assert!(rbac.has_permission(Role::Moderator, Permission::SermonsEdit));
    assert!(!rbac.has_permission(Role::Moderator, Permission::SermonsDelete));
}

#[test]
fn navigation_list_for_a_session_role_value() {
    let rbac = RbacSystem::new();

    // The sidebar and the dashboard both render from this one list.
    let sections = rbac.available_sections_for("content_manager");
    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["overview", "content", "topics-series", "media", "analytics"]
    );

    // Unauthenticated or unknown role values see nothing.
    assert!(rbac.available_sections_for("member").is_empty());
}

#[test]
fn navigation_descriptors_serialize_for_the_client() {
    let rbac = RbacSystem::new();

    let sections: Vec<&Section> = rbac.available_sections(Role::Moderator);
    let payload = serde_json::to_value(&sections).unwrap();

    let titles: Vec<&str> = payload
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Overview"));
    assert!(titles.contains(&"Notifications"));
    assert!(titles.contains(&"Analytics"));
    assert!(!titles.contains(&"Settings"));
}
