//! Ordered authorization stages for protected routes.
//!
//! A [`Pipeline`] is a fixed list of [`Stage`]s evaluated front to back. Each
//! stage either continues with an enriched [`RequestContext`] or rejects the
//! request, in which case no later stage runs.
//!
//! CORS handling is not a stage here: it wraps the whole router as a layer and
//! has already run by the time a pipeline is evaluated.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use skripsi_auth::{Claims, TokenService};
use skripsi_core::{AppError, Role};
use tracing::debug;

pub const MISSING_HEADER_MESSAGE: &str = "Authorization header missing";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// Which roles may pass a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGate {
    AdminOnly,
    TeacherOrAdmin,
}

impl RoleGate {
    pub fn allows(&self, role: Role) -> bool {
        match self {
            RoleGate::AdminOnly => role == Role::Superadmin,
            RoleGate::TeacherOrAdmin => matches!(role, Role::Teacher | Role::Superadmin),
        }
    }

    pub fn denial_message(&self) -> &'static str {
        match self {
            RoleGate::AdminOnly => "Access denied. Administrator privileges required.",
            RoleGate::TeacherOrAdmin => {
                "Access denied. Teacher or administrator privileges required."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Authenticate,
    Gate(RoleGate),
}

/// What the stages have established about the caller so far.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub claims: Option<Claims>,
}

#[derive(Debug)]
pub enum Outcome {
    Continue(RequestContext),
    Reject(AppError),
}

impl Stage {
    pub fn apply(&self, ctx: RequestContext, headers: &HeaderMap, tokens: &TokenService) -> Outcome {
        match self {
            Stage::Authenticate => authenticate(headers, tokens),
            Stage::Gate(gate) => {
                let Some(claims) = ctx.claims.as_ref() else {
                    return Outcome::Reject(AppError::internal_error(
                        "role gate evaluated before authentication",
                    ));
                };

                if !gate.allows(claims.peran) {
                    debug!(user.id = %claims.user_id, user.role = %claims.peran, ?gate, "Role gate rejected request");
                    return Outcome::Reject(AppError::forbidden(gate.denial_message()));
                }

                Outcome::Continue(ctx)
            }
        }
    }
}

fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Outcome {
    if !headers.contains_key(AUTHORIZATION) {
        return Outcome::Reject(AppError::unauthorized(MISSING_HEADER_MESSAGE));
    }

    let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() else {
        return Outcome::Reject(AppError::unauthorized(INVALID_TOKEN_MESSAGE));
    };

    match tokens.verify(bearer.token()) {
        Ok(claims) => Outcome::Continue(RequestContext {
            claims: Some(claims),
        }),
        Err(e) => {
            debug!(error = %e, "Token verification failed");
            Outcome::Reject(AppError::unauthorized(INVALID_TOKEN_MESSAGE))
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    stages: &'static [Stage],
}

impl Pipeline {
    pub const AUTHENTICATED: Pipeline = Pipeline {
        stages: &[Stage::Authenticate],
    };
    pub const ADMIN_ONLY: Pipeline = Pipeline {
        stages: &[Stage::Authenticate, Stage::Gate(RoleGate::AdminOnly)],
    };
    pub const TEACHER_OR_ADMIN: Pipeline = Pipeline {
        stages: &[Stage::Authenticate, Stage::Gate(RoleGate::TeacherOrAdmin)],
    };

    pub fn stages(&self) -> &'static [Stage] {
        self.stages
    }

    /// Runs every stage in order and returns the authenticated claims.
    pub fn run(&self, headers: &HeaderMap, tokens: &TokenService) -> Result<Claims, AppError> {
        let mut ctx = RequestContext::default();

        for stage in self.stages {
            match stage.apply(ctx, headers, tokens) {
                Outcome::Continue(next) => ctx = next,
                Outcome::Reject(err) => return Err(err),
            }
        }

        ctx.claims
            .ok_or_else(|| AppError::internal_error("pipeline finished without authenticating"))
    }
}
