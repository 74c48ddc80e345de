use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: i32, pub name: String, pub email: String, pub age: i32 }

#[derive(ToSchema)]
pub struct CustomerRegistrationRequestDoc { pub name: String, pub email: String, pub age: i32 }

#[derive(ToSchema)]
pub struct CustomerUpdateRequestDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc { pub error: String, pub message: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            CustomerRegistrationRequestDoc,
            CustomerUpdateRequestDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;
