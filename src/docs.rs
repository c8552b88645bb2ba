use skripsi_auth::Claims;
use skripsi_core::Role;
use skripsi_models::{
    Class, CreateClassDto, CreateUserDto, CreatedUserResponse, LoginRequest, LoginResponse,
    MessageResponse, User,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::health::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::list_teachers,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::list_classes,
        crate::modules::health::controller::hello,
        crate::modules::health::controller::health,
    ),
    components(
        schemas(
            User,
            Role,
            Claims,
            CreateUserDto,
            CreatedUserResponse,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            Class,
            CreateClassDto,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Teachers", description = "Teacher management (superadmin only)"),
        (name = "Classes", description = "Classes owned by the calling teacher"),
        (name = "Health", description = "Liveness endpoints")
    ),
    info(
        title = "Skripsi Essay Scoring API",
        version = "0.1.0",
        description = "Backend for the essay scoring application: authentication, teacher management and classes.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
