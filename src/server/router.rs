//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI specification, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `/api/equipment/{type}` - Equipment CRUD per kind and duplicate-name checks
/// - `/api/satellites` - Satellite CRUD, equipment selection and duplicate-name checks
/// - `/api/projects` - Project CRUD, duplicate-name checks and import from a parsed document
/// - `/api/projects/{id}/builds`, `/api/builds` - Build CRUD
/// - `/api/mappings/{ownerKind}/{ownerId}` - Project and build equipment mappings
/// - `/api/project/{id}/xml`, `/api/build/{id}/xml` - SDB document generation
/// - `/api/bin` - `.bin` generation, import and codec status
/// - `/api/activities` - Activity log
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from((db, codec)));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "SDB Tool", description = "Satellite equipment and SDB configuration API"), tags(
        (name = controller::equipment::EQUIPMENT_TAG, description = "LNB, switch, motor and unicable records"),
        (name = controller::satellite::SATELLITE_TAG, description = "Satellites with carriers and services"),
        (name = controller::project::PROJECT_TAG, description = "Projects"),
        (name = controller::build::BUILD_TAG, description = "Builds of a project"),
        (name = controller::mapping::MAPPING_TAG, description = "Equipment mapped to projects and builds"),
        (name = controller::bin::BIN_TAG, description = "SDB documents and .bin files"),
        (name = controller::activity::ACTIVITY_TAG, description = "Activity log"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::equipment::list_equipment,
            controller::equipment::create_equipment
        ))
        .routes(routes!(
            controller::equipment::update_equipment,
            controller::equipment::delete_equipment
        ))
        .routes(routes!(controller::equipment::check_equipment_duplicate))
        .routes(routes!(
            controller::satellite::list_satellites,
            controller::satellite::create_satellite
        ))
        .routes(routes!(
            controller::satellite::get_satellite,
            controller::satellite::update_satellite,
            controller::satellite::delete_satellite
        ))
        .routes(routes!(
            controller::satellite::get_satellite_equipment,
            controller::satellite::assign_satellite_equipment
        ))
        .routes(routes!(controller::satellite::check_satellite_duplicate))
        .routes(routes!(
            controller::project::list_projects,
            controller::project::create_project
        ))
        .routes(routes!(
            controller::project::get_project,
            controller::project::update_project,
            controller::project::delete_project
        ))
        .routes(routes!(controller::project::check_project_duplicate))
        .routes(routes!(controller::project::import_project))
        .routes(routes!(controller::build::list_project_builds))
        .routes(routes!(controller::build::create_build))
        .routes(routes!(
            controller::build::get_build,
            controller::build::update_build,
            controller::build::delete_build
        ))
        .routes(routes!(
            controller::mapping::list_mappings,
            controller::mapping::add_mapping
        ))
        .routes(routes!(controller::mapping::remove_mapping))
        .routes(routes!(controller::bin::get_project_xml))
        .routes(routes!(controller::bin::get_build_xml))
        .routes(routes!(controller::bin::generate_bin))
        .routes(routes!(controller::bin::import_bin))
        .routes(routes!(controller::bin::codec_status))
        .routes(routes!(
            controller::activity::list_activities,
            controller::activity::record_activity
        ))
        .routes(routes!(controller::activity::list_project_activities))
        .routes(routes!(controller::activity::cleanup_activities))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
