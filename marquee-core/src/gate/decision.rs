use marquee_config::GateConfig;
use tracing::debug;

use super::routes::{RouteClass, RouteTable, RouteTableError};
use super::session::SessionProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl GateDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateDecision::Allow => "allow",
            GateDecision::RedirectToLogin => "redirect_login",
            GateDecision::RedirectToHome => "redirect_home",
        }
    }

    pub fn is_redirect(&self) -> bool {
        !matches!(self, GateDecision::Allow)
    }
}

/// Stateless per-request classifier over a [`RouteTable`].
#[derive(Debug, Clone)]
pub struct RouteGate {
    routes: RouteTable,
    login_path: String,
    home_path: String,
}

impl RouteGate {
    pub fn new(
        routes: RouteTable,
        login_path: impl Into<String>,
        home_path: impl Into<String>,
    ) -> Self {
        Self {
            routes,
            login_path: login_path.into(),
            home_path: home_path.into(),
        }
    }

    pub fn from_config(config: &GateConfig) -> Result<Self, RouteTableError> {
        let routes = RouteTable::from_config(config)?;
        Ok(Self::new(
            routes,
            config.login_path.clone(),
            config.home_path.clone(),
        ))
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Whether the gate evaluates `path` at all.
    pub fn applies_to(&self, path: &str) -> bool {
        !self.routes.is_excluded(path)
    }

    /// Decide for `path`. The session is consulted only for protected and
    /// public paths.
    pub fn evaluate(
        &self,
        path: &str,
        session: &dyn SessionProvider,
    ) -> GateDecision {
        if !self.applies_to(path) {
            return GateDecision::Allow;
        }

        let class = self.routes.classify(path);
        let decision = match class {
            RouteClass::Unlisted => GateDecision::Allow,
            RouteClass::Protected | RouteClass::Public => {
                self.decide(class, session.is_authenticated(), path)
            }
        };

        if decision.is_redirect() {
            debug!(path, decision = decision.as_str(), "route gate redirect");
        }
        decision
    }

    /// The decision table, as a pure function.
    pub fn decide(
        &self,
        class: RouteClass,
        authenticated: bool,
        path: &str,
    ) -> GateDecision {
        match (class, authenticated) {
            (RouteClass::Protected, false) => GateDecision::RedirectToLogin,
            (RouteClass::Protected, true) => GateDecision::Allow,
            (RouteClass::Public, true) if path != self.home_path => {
                GateDecision::RedirectToHome
            }
            (RouteClass::Public, _) => GateDecision::Allow,
            (RouteClass::Unlisted, _) => GateDecision::Allow,
        }
    }

    pub fn redirect_target(&self, decision: GateDecision) -> Option<&str> {
        match decision {
            GateDecision::Allow => None,
            GateDecision::RedirectToLogin => Some(self.login_path.as_str()),
            GateDecision::RedirectToHome => Some(self.home_path.as_str()),
        }
    }
}
