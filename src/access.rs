use crate::roles::{Role, RoleRoutes};

/// ModuleArea
///
/// A top-level section of the ERP (e.g. `/sales`) and the roles allowed into it.
/// `Role::Admin` is always allowed and does not need to be listed.
#[derive(Debug, Clone, Copy)]
pub struct ModuleArea {
    pub prefix: &'static str,
    pub roles: &'static [Role],
}

impl ModuleArea {
    pub const fn new(prefix: &'static str, roles: &'static [Role]) -> Self {
        Self { prefix, roles }
    }

    /// True for the prefix itself and anything below it.
    pub fn contains(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    pub fn admits(&self, role: Role) -> bool {
        role == Role::Admin || self.roles.contains(&role)
    }
}

/// AccessDecision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The path is not inside any module area.
    Unguarded,
    Allowed,
    /// The role may not enter the area; send it to its default route instead.
    Redirect(&'static str),
    /// The role may not enter the area and its default route is refused too.
    Denied,
}

/// AreaGuard
///
/// Role-based guard over the ERP's module areas. Refused roles are redirected to
/// their default route as resolved by the composed `RoleRoutes` table.
#[derive(Debug, Clone, Copy)]
pub struct AreaGuard {
    areas: &'static [ModuleArea],
    routes: RoleRoutes,
}

pub const ERP_AREAS: &[ModuleArea] = &[
    ModuleArea::new("/accounting", &[]),
    ModuleArea::new("/admin", &[]),
    ModuleArea::new("/cms", &[Role::Cms]),
    ModuleArea::new("/finance", &[]),
    ModuleArea::new("/it", &[]),
    ModuleArea::new("/logistics", &[Role::Logistics]),
    ModuleArea::new("/sales", &[Role::Sales]),
    ModuleArea::new("/quotations", &[Role::Sales]),
];

impl AreaGuard {
    pub const DEFAULT: AreaGuard = AreaGuard::new(ERP_AREAS, RoleRoutes::DEFAULT);

    pub const fn new(areas: &'static [ModuleArea], routes: RoleRoutes) -> Self {
        Self { areas, routes }
    }

    /// The area `path` falls into, if any.
    pub fn area_for(&self, path: &str) -> Option<&ModuleArea> {
        self.areas.iter().find(|area| area.contains(path))
    }

    /// check
    ///
    /// Decides whether `role` may open `path`. The role string is compared
    /// case-insensitively; an absent or unknown role is admitted nowhere.
    ///
    /// A refused role is redirected to its default route only when that route
    /// would itself be admitted, so following a redirect never leads to another one.
    pub fn check(&self, role: Option<&str>, path: &str) -> AccessDecision {
        let Some(area) = self.area_for(path) else {
            return AccessDecision::Unguarded;
        };

        if Self::role_admitted(area, role) {
            return AccessDecision::Allowed;
        }

        let target = self.routes.default_route(role);
        match self.area_for(target) {
            Some(target_area) if !Self::role_admitted(target_area, role) => AccessDecision::Denied,
            _ => AccessDecision::Redirect(target),
        }
    }

    fn role_admitted(area: &ModuleArea, role: Option<&str>) -> bool {
        role.and_then(Role::from_name)
            .is_some_and(|known| area.admits(known))
    }
}

impl Default for AreaGuard {
    fn default() -> Self {
        Self::DEFAULT
    }
}
