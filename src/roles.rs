/// Role
///
/// The closed set of roles the ERP knows about. Session tokens carry the role as a
/// free-form string, so parsing is lenient: comparison is case-insensitive and
/// anything outside the set is simply "no role" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Sales,
    Logistics,
    Cms,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Sales, Role::Logistics, Role::Cms];

    /// Parses a role name, ignoring ASCII case. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Role> {
        match name.to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "sales" => Some(Role::Sales),
            "logistics" => Some(Role::Logistics),
            "cms" => Some(Role::Cms),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Sales => "sales",
            Role::Logistics => "logistics",
            Role::Cms => "cms",
        }
    }
}

/// RoleRoutes
///
/// Maps a role to the route it lands on after sign-in. The table is a plain value
/// so that it can be composed into the application state (see `AppState`) and
/// swapped in tests without any global setup.
///
/// Lookups are total: an absent, empty or unrecognized role resolves to `fallback`.
#[derive(Debug, Clone, Copy)]
pub struct RoleRoutes {
    entries: &'static [(Role, &'static str)],
    fallback: &'static str,
}

impl RoleRoutes {
    /// The ERP's landing table. Unknown roles fall back to the admin dashboard.
    pub const DEFAULT: RoleRoutes = RoleRoutes::new(
        &[
            (Role::Admin, "/admin/dashboard"),
            (Role::Sales, "/sales/dashboard"),
            (Role::Logistics, "/logistics/dashboard"),
            (Role::Cms, "/cms/dashboard"),
        ],
        "/admin/dashboard",
    );

    pub const fn new(entries: &'static [(Role, &'static str)], fallback: &'static str) -> Self {
        Self { entries, fallback }
    }

    /// dashboard_route
    ///
    /// Returns the dashboard route for `role`. Never fails.
    pub fn dashboard_route(&self, role: Option<&str>) -> &'static str {
        role.and_then(Role::from_name)
            .and_then(|role| self.route_for(role))
            .unwrap_or(self.fallback)
    }

    /// default_route
    ///
    /// Where a role lands by default outside the dashboard context. Same mapping
    /// as `dashboard_route`.
    pub fn default_route(&self, role: Option<&str>) -> &'static str {
        self.dashboard_route(role)
    }

    /// The configured route for a known role, if the table has one.
    pub fn route_for(&self, role: Role) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == role)
            .map(|(_, route)| *route)
    }
}

impl Default for RoleRoutes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Dashboard route for `role` using the built-in table.
pub fn dashboard_route_for_role(role: Option<&str>) -> &'static str {
    RoleRoutes::DEFAULT.dashboard_route(role)
}

/// Default landing route for `role` using the built-in table.
pub fn default_route_for_role(role: Option<&str>) -> &'static str {
    RoleRoutes::DEFAULT.default_route(role)
}
