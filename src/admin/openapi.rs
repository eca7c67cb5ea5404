//! OpenAPI description of the generated admin endpoints.
//!
//! The handlers come out of `admin_resource!`, so their paths are described
//! here from each resource's [`ResourceMeta`] instead of `#[utoipa::path]`.

use utoipa::openapi::{
    OpenApi, OpenApiBuilder, Required,
    path::{
        HttpMethod, Operation, OperationBuilder, ParameterBuilder, ParameterIn, PathItem,
        PathItemBuilder, PathsBuilder,
    },
    request_body::RequestBodyBuilder,
    response::Response,
};

use crate::admin::{ResourceMeta, resources};

const TAG: &str = "Admin";

fn query_param(name: &str, description: &str) -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Query)
        .required(Required::False)
        .description(Some(description))
        .build()
}

fn path_param(name: &str, description: &str) -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(description))
        .build()
}

fn operation(id: String, summary: String) -> OperationBuilder {
    OperationBuilder::new()
        .tag(TAG)
        .operation_id(Some(id))
        .summary(Some(summary))
        .parameter(
            ParameterBuilder::new()
                .name("x-admin-user")
                .parameter_in(ParameterIn::Header)
                .required(Required::False)
                .description(Some("Admin user recorded in the audit trail"))
                .build(),
        )
}

fn json_body(description: &str) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .description(Some(description))
        .required(Some(Required::True))
        .build()
}

/// Query parameters a resource's list and export endpoints accept.
fn list_params(meta: &ResourceMeta, builder: OperationBuilder) -> OperationBuilder {
    let mut builder = builder
        .parameter(query_param("page", "Page number, from 1"))
        .parameter(query_param("page_size", "Rows per page"))
        .parameter(query_param(
            "ordering",
            &format!("One of: {} (prefix `-` for descending)", meta.ordering.join(", ")),
        ))
        .parameter(query_param("ids", "Comma-separated ids"));

    if !meta.search_fields.is_empty() {
        builder = builder.parameter(query_param(
            "q",
            &format!("Search in {}", meta.search_fields.join(", ")),
        ));
    }
    for field in meta.list_filter {
        builder = builder.parameter(query_param(field, &format!("Exact match on `{}`", field)));
    }
    if let Some(field) = meta.date_hierarchy {
        builder = builder.parameter(query_param(
            "date_range",
            &format!("today, week, month or year on `{}`", field),
        ));
    }
    if let Some(field) = meta.price_field {
        builder = builder.parameter(query_param(
            "price_range",
            &format!("`lo-hi` or `lo+` on `{}`", field),
        ));
    }
    builder
}

fn collection(meta: &ResourceMeta) -> PathItem {
    let list: Operation = list_params(
        meta,
        operation(format!("admin_list_{}", meta.name), format!("List {}", meta.title)),
    )
    .response("200", Response::new("Page of rows"))
    .response("400", Response::new("Unknown filter, ordering or malformed value"))
    .build();

    let mut item = PathItemBuilder::new().operation(HttpMethod::Get, list);
    if !meta.readonly {
        let create = operation(format!("admin_create_{}", meta.name), format!("Create {}", meta.title))
            .request_body(Some(json_body("Fields of the new row")))
            .response("201", Response::new("Created row"))
            .response("400", Response::new("Invalid field value"))
            .response("409", Response::new("Unique constraint violated"))
            .build();
        item = item.operation(HttpMethod::Post, create);
    }
    item.build()
}

fn member(meta: &ResourceMeta) -> PathItem {
    let id = || path_param("id", "Primary key");

    let detail = operation(format!("admin_get_{}", meta.name), format!("Get one {}", meta.title))
        .parameter(id())
        .response("200", Response::new("The row"))
        .response("404", Response::new("Not found"))
        .build();
    let delete = operation(format!("admin_delete_{}", meta.name), format!("Delete one {}", meta.title))
        .parameter(id())
        .response("200", Response::new("The deleted row"))
        .response("404", Response::new("Not found"))
        .build();

    let mut item = PathItemBuilder::new()
        .operation(HttpMethod::Get, detail)
        .operation(HttpMethod::Delete, delete);
    if !meta.readonly {
        let update = operation(format!("admin_update_{}", meta.name), format!("Update one {}", meta.title))
            .parameter(id())
            .request_body(Some(json_body("Fields to change")))
            .response("200", Response::new("The updated row"))
            .response("400", Response::new("Invalid field value"))
            .response("404", Response::new("Not found"))
            .build();
        item = item.operation(HttpMethod::Patch, update);
    }
    item.build()
}

fn export(meta: &ResourceMeta) -> PathItem {
    let export = list_params(
        meta,
        operation(format!("admin_export_{}", meta.name), format!("Export {} as CSV", meta.title)),
    )
    .response("200", Response::new("CSV attachment with a header row"))
    .build();
    PathItemBuilder::new().operation(HttpMethod::Get, export).build()
}

fn actions(meta: &ResourceMeta) -> PathItem {
    let run = operation(format!("admin_action_{}", meta.name), format!("Bulk action on {}", meta.title))
        .parameter(path_param("action", &format!("One of: {}", meta.actions.join(", "))))
        .request_body(Some(json_body("`{\"ids\": [...]}`")))
        .response("200", Response::new("Number of rows changed"))
        .response("400", Response::new("Unknown action or empty selection"))
        .build();
    PathItemBuilder::new().operation(HttpMethod::Post, run).build()
}

fn relation(meta: &ResourceMeta, name: &str) -> PathItem {
    let id = || path_param("id", "Primary key");

    let linked = operation(
        format!("admin_list_{}_{}", meta.name, name),
        format!("Linked {} of one {}", name, meta.title),
    )
    .parameter(id())
    .response("200", Response::new("Sorted related ids"))
    .response("404", Response::new("Not found"))
    .build();
    let replace = operation(
        format!("admin_set_{}_{}", meta.name, name),
        format!("Replace linked {} of one {}", name, meta.title),
    )
    .parameter(id())
    .request_body(Some(json_body("`{\"ids\": [...]}`, the complete new set")))
    .response("200", Response::new("Linked ids after the change"))
    .response("400", Response::new("Unknown related id"))
    .response("404", Response::new("Not found"))
    .build();

    PathItemBuilder::new()
        .operation(HttpMethod::Get, linked)
        .operation(HttpMethod::Put, replace)
        .build()
}

/// Paths of every registered resource, to merge into the service document.
pub fn document() -> OpenApi {
    let mut paths = PathsBuilder::new();
    for meta in resources::all() {
        let base = format!("/admin/{}", meta.name);
        paths = paths
            .path(base.clone(), collection(meta))
            .path(format!("{}/{{id}}", base), member(meta))
            .path(format!("{}/export", base), export(meta));
        if !meta.actions.is_empty() {
            paths = paths.path(format!("{}/actions/{{action}}", base), actions(meta));
        }
        for name in meta.relations {
            paths = paths.path(format!("{}/{{id}}/{}", base, name), relation(meta, name));
        }
    }

    OpenApiBuilder::new().paths(paths).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_is_documented() {
        let doc = document();
        for meta in resources::all() {
            let base = format!("/admin/{}", meta.name);
            let item = doc.paths.paths.get(&base).unwrap();
            assert!(item.get.is_some(), "{} has no list", meta.name);
            assert_eq!(item.post.is_some(), !meta.readonly, "{} create", meta.name);
            assert!(doc.paths.paths.contains_key(&format!("{}/export", base)));
        }
    }

    #[test]
    fn audit_trail_has_no_write_operations() {
        let doc = document();
        let item = doc.paths.paths.get("/admin/audit_logs/{id}").unwrap();
        assert!(item.get.is_some());
        assert!(item.patch.is_none());
        assert!(!doc.paths.paths.contains_key("/admin/audit_logs/actions/{action}"));
    }

    #[test]
    fn links_are_documented_per_relation() {
        let doc = document();
        for path in [
            "/admin/government_schemes/{id}/coverage_areas",
            "/admin/government_schemes/{id}/target_crops",
            "/admin/quality_inspectors/{id}/specialization",
        ] {
            let item = doc.paths.paths.get(path).unwrap();
            assert!(item.get.is_some() && item.put.is_some(), "{}", path);
        }
        assert!(!doc.paths.paths.contains_key("/admin/orders/{id}/counties"));
    }

    #[test]
    fn list_documents_declared_filters() {
        let doc = document();
        let list = doc.paths.paths["/admin/products"].get.as_ref().unwrap();
        let names: Vec<&str> = list
            .parameters
            .iter()
            .flatten()
            .map(|param| param.name.as_str())
            .collect();
        for name in ["page", "ordering", "q", "status", "date_range", "price_range"] {
            assert!(names.contains(&name), "missing {}", name);
        }
    }
}
