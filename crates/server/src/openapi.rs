use utoipa::openapi::path::{OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder, PathItemType};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::{Content, ObjectBuilder, Ref, Required, Response, ResponseBuilder, Schema, SchemaType};
use utoipa::{OpenApi, ToSchema};

use service::{Offers, Orders, RecordService, Users};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String, pub message: String }

/// Writable user fields. Responses add `id`.
#[derive(ToSchema)]
pub struct UserDoc {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

/// Writable order fields. Responses add `id`.
#[derive(ToSchema)]
pub struct OrderDoc {
    pub name: String,
    /// At most 200 characters.
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    /// At most 100 characters.
    pub address: String,
    pub price: i32,
    pub customer_id: Option<i32>,
    pub executor_id: Option<i32>,
}

/// Writable offer fields. Responses add `id`.
#[derive(ToSchema)]
pub struct OfferDoc {
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index,
        crate::routes::health,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            UserDoc,
            OrderDoc,
            OfferDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "orders"),
        (name = "offers")
    )
)]
pub struct ApiDoc;

fn json_body(schema: &str) -> RequestBodyBuilder {
    RequestBodyBuilder::new()
        .content("application/json", Content::new(Ref::from_schema_name(schema)))
        .required(Some(Required::True))
}

fn text_response(description: &str) -> Response {
    let text = Schema::Object(ObjectBuilder::new().schema_type(SchemaType::String).build());
    ResponseBuilder::new().description(description).content("text/plain", Content::new(text)).build()
}

fn json_response(description: &str) -> Response {
    ResponseBuilder::new().description(description).build()
}

fn error_response(description: &str) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content("application/json", Content::new(Ref::from_schema_name("ErrorResponse")))
        .build()
}

// The record handlers are generic, so their paths are assembled here instead
// of through `#[utoipa::path]`.
fn add_record_paths<S: RecordService>(doc: &mut utoipa::openapi::OpenApi, schema: &str) {
    let tag = S::COLLECTION;
    let id_param = ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .schema(Some(Schema::Object(ObjectBuilder::new().schema_type(SchemaType::Integer).build())))
        .build();

    let collection = PathItemBuilder::new()
        .operation(
            PathItemType::Get,
            OperationBuilder::new()
                .tag(tag)
                .summary(Some(format!("List every {}", S::ENTITY)))
                .response("200", json_response("All records in id order"))
                .build(),
        )
        .operation(
            PathItemType::Post,
            OperationBuilder::new()
                .tag(tag)
                .summary(Some(format!("Create a {}", S::ENTITY)))
                .request_body(Some(json_body(schema).build()))
                .response("201", text_response("Confirmation; `Location` carries the new id"))
                .response("400", error_response("Missing, unknown or invalid field"))
                .build(),
        )
        .build();

    let item = PathItemBuilder::new()
        .operation(
            PathItemType::Get,
            OperationBuilder::new()
                .tag(tag)
                .summary(Some(format!("Get a {}", S::ENTITY)))
                .parameter(id_param.clone())
                .response("200", json_response("The record"))
                .response("404", error_response("No such id"))
                .build(),
        )
        .operation(
            PathItemType::Put,
            OperationBuilder::new()
                .tag(tag)
                .summary(Some(format!("Replace every field of a {}", S::ENTITY)))
                .parameter(id_param.clone())
                .request_body(Some(json_body(schema).build()))
                .response("200", text_response("Confirmation"))
                .response("400", error_response("Missing, unknown or invalid field"))
                .response("404", error_response("No such id"))
                .build(),
        )
        .operation(
            PathItemType::Delete,
            OperationBuilder::new()
                .tag(tag)
                .summary(Some(format!("Delete a {}", S::ENTITY)))
                .parameter(id_param)
                .response("200", text_response("Confirmation"))
                .response("404", error_response("No such id"))
                .build(),
        )
        .build();

    doc.paths.paths.insert(format!("/{}/", S::COLLECTION), collection);
    doc.paths.paths.insert(format!("/{}/{{id}}", S::COLLECTION), item);
}

/// The served OpenAPI document.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    add_record_paths::<Users>(&mut doc, "UserDoc");
    add_record_paths::<Orders>(&mut doc, "OrderDoc");
    add_record_paths::<Offers>(&mut doc, "OfferDoc");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_collection() {
        let doc = api_doc();
        for path in ["/", "/health", "/users/", "/users/{id}", "/orders/{id}", "/offers/"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["components"]["schemas"]["OrderDoc"].is_object());
    }
}
