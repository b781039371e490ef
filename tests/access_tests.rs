use ooh_erp_routing::{
    AccessDecision, AreaGuard, Role, RoleRoutes,
    access::{ERP_AREAS, ModuleArea},
};

fn check(role: Option<&str>, path: &str) -> AccessDecision {
    AreaGuard::DEFAULT.check(role, path)
}

#[test]
fn test_admin_enters_every_area() {
    for path in [
        "/accounting", "/admin/dashboard", "/cms/details/1", "/finance/reports",
        "/it", "/logistics/sites", "/sales/dashboard", "/quotations/new",
    ] {
        assert_eq!(check(Some("admin"), path), AccessDecision::Allowed, "{}", path);
    }
}

#[test]
fn test_roles_enter_their_own_areas() {
    assert_eq!(check(Some("sales"), "/sales/dashboard"), AccessDecision::Allowed);
    assert_eq!(check(Some("sales"), "/quotations/new"), AccessDecision::Allowed);
    assert_eq!(check(Some("cms"), "/cms"), AccessDecision::Allowed);
    assert_eq!(check(Some("Logistics"), "/logistics/sites"), AccessDecision::Allowed);
}

#[test]
fn test_refused_roles_are_sent_to_their_default_route() {
    assert_eq!(check(Some("cms"), "/finance"), AccessDecision::Redirect("/cms/dashboard"));
    assert_eq!(check(Some("sales"), "/admin/users"), AccessDecision::Redirect("/sales/dashboard"));
    assert_eq!(
        check(Some("logistics"), "/quotations/7"),
        AccessDecision::Redirect("/logistics/dashboard")
    );
}

#[test]
fn test_unknown_roles_are_denied_without_redirect() {
    assert_eq!(check(None, "/sales"), AccessDecision::Denied);
    assert_eq!(check(Some("intern"), "/sales/dashboard"), AccessDecision::Denied);
    assert_eq!(check(Some("intern"), "/admin/dashboard"), AccessDecision::Denied);
    // Unguarded paths stay open to everyone.
    assert_eq!(check(Some("intern"), "/help"), AccessDecision::Unguarded);
}

#[test]
fn test_following_a_redirect_never_redirects_again() {
    let roles = [None, Some(""), Some("intern"), Some("admin"), Some("sales"), Some("Cms"), Some("logistics")];
    let paths = [
        "/accounting", "/admin/users", "/cms/details/1", "/finance", "/it/assets",
        "/logistics/sites", "/sales/dashboard", "/quotations/new",
    ];

    for role in roles {
        for path in paths {
            if let AccessDecision::Redirect(target) = check(role, path) {
                let next = check(role, target);
                assert!(
                    matches!(next, AccessDecision::Allowed | AccessDecision::Unguarded),
                    "role {:?}: {} -> {} gave {:?}",
                    role,
                    path,
                    target,
                    next
                );
            }
        }
    }
}

#[test]
fn test_redirect_kept_when_default_route_is_outside_every_area() {
    const ROUTES: RoleRoutes = RoleRoutes::new(&[], "/welcome");
    let guard = AreaGuard::new(ERP_AREAS, ROUTES);

    assert_eq!(guard.check(Some("intern"), "/sales"), AccessDecision::Redirect("/welcome"));
}

#[test]
fn test_paths_outside_areas_are_unguarded() {
    assert_eq!(check(None, "/help"), AccessDecision::Unguarded);
    assert_eq!(check(Some("sales"), "/salesforce"), AccessDecision::Unguarded);
    assert_eq!(check(Some("cms"), "/"), AccessDecision::Unguarded);
}

#[test]
fn test_composed_areas() {
    const AREAS: &[ModuleArea] = &[ModuleArea::new("/reports", &[Role::Sales, Role::Cms])];
    let guard = AreaGuard::new(AREAS, RoleRoutes::DEFAULT);

    assert_eq!(guard.check(Some("cms"), "/reports/q3"), AccessDecision::Allowed);
    assert_eq!(
        guard.check(Some("logistics"), "/reports"),
        AccessDecision::Redirect("/logistics/dashboard")
    );
    assert_eq!(guard.check(Some("cms"), "/finance"), AccessDecision::Unguarded);
}
