//! TypeScript rendering: interfaces for shapes, typed signatures for
//! functions.

use super::fragment::{BodyShape, FunctionFragment, ShapeFragment};
use super::{render_call_sequence, FragmentRenderer};
use crate::config::RequestHandler;

pub(crate) struct TypeScriptRenderer;

impl FragmentRenderer for TypeScriptRenderer {
    fn render_shape(&self, shape: &ShapeFragment) -> crate::Result<String> {
        let mut out = String::new();
        out.push_str(&format!("export interface {} {{\n", shape.identifier));
        for key in &shape.query_fields {
            out.push_str(&format!("  {}: string;\n", key));
        }
        match &shape.body {
            Some(BodyShape::Json(value)) => {
                // Literal echo of the sample payload, indented to sit
                // under the field.
                let pretty = serde_json::to_string_pretty(value)?;
                let mut lines = pretty.lines();
                if let Some(first) = lines.next() {
                    out.push_str(&format!("  body: {}", first));
                    for line in lines {
                        out.push_str(&format!("\n  {}", line));
                    }
                    out.push_str(";\n");
                }
            }
            Some(BodyShape::Opaque) => out.push_str("  body: any;\n"),
            None => {}
        }
        out.push_str("}\n");
        Ok(out)
    }

    fn render_function(
        &self,
        function: &FunctionFragment,
        handler: RequestHandler,
    ) -> crate::Result<String> {
        let mut parameters = Vec::new();
        if function.has_params {
            parameters.push(format!("params: {}", function.shape_identifier));
        }
        if function.has_body {
            parameters.push(format!("body: {}['body']", function.shape_identifier));
        }

        let mut out = String::new();
        out.push_str(&format!(
            "export async function {}({}): Promise<Response> {{\n",
            function.name,
            parameters.join(", ")
        ));
        render_call_sequence(function, handler, &mut out);
        Ok(out)
    }

    fn shape_import(&self, identifiers: &[String]) -> Option<String> {
        if identifiers.is_empty() {
            return None;
        }
        Some(format!(
            "import {{ {} }} from './api-types';\n",
            identifiers.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(identifier: &str, query_fields: &[&str], body: Option<BodyShape>) -> ShapeFragment {
        ShapeFragment {
            identifier: identifier.to_string(),
            query_fields: query_fields.iter().map(|s| s.to_string()).collect(),
            body,
        }
    }

    #[test]
    fn test_render_shape_with_query_fields() {
        let rendered = TypeScriptRenderer
            .render_shape(&shape("SearchRequest", &["q", "page", "limit"], None))
            .unwrap();
        assert!(rendered.starts_with("export interface SearchRequest {\n"));
        assert!(rendered.contains("  q: string;\n"));
        assert!(rendered.contains("  page: string;\n"));
        assert!(rendered.contains("  limit: string;\n"));
        assert!(rendered.ends_with("}\n"));

        let q = rendered.find("  q: string;").unwrap();
        let page = rendered.find("  page: string;").unwrap();
        let limit = rendered.find("  limit: string;").unwrap();
        assert!(q < page && page < limit);
    }

    #[test]
    fn test_render_shape_echoes_json_body_literally() {
        let body = BodyShape::parse(r#"{"name":"John Doe","email":"john@example.com","age":30}"#);
        let rendered = TypeScriptRenderer
            .render_shape(&shape("UsersRequest", &[], Some(body)))
            .unwrap();
        assert!(rendered.contains("  body: {\n"));
        assert!(rendered.contains("    \"age\": 30,\n"));
        assert!(rendered.contains("    \"email\": \"john@example.com\",\n"));
        assert!(rendered.contains("    \"name\": \"John Doe\"\n"));
        assert!(rendered.contains("  };\n"));
    }

    #[test]
    fn test_render_shape_opaque_body_is_any() {
        let rendered = TypeScriptRenderer
            .render_shape(&shape("UsersRequest", &[], Some(BodyShape::Opaque)))
            .unwrap();
        assert!(rendered.contains("  body: any;\n"));
    }

    #[test]
    fn test_render_function_signature_params_before_body() {
        let function = FunctionFragment {
            name: "create_user".to_string(),
            shape_identifier: "UsersRequest".to_string(),
            method: "POST".to_string(),
            url_raw: "https://api.example.com/users?notify=true".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            has_params: true,
            has_body: true,
        };
        let rendered = TypeScriptRenderer
            .render_function(&function, RequestHandler::Fetch)
            .unwrap();
        assert!(rendered.starts_with(
            "export async function create_user(params: UsersRequest, body: UsersRequest['body']): Promise<Response> {\n"
        ));
        assert!(rendered.contains("  const url = new URL('https://api.example.com/users?notify=true');\n"));
        assert!(rendered.contains("    url.searchParams.append(key, value);\n"));
        assert!(rendered.contains("    'Content-Type': 'application/json',\n"));
        assert!(rendered.contains("    method: 'POST',\n"));
        assert!(rendered.contains("    body: JSON.stringify(body),\n"));
    }

    #[test]
    fn test_render_function_without_query_takes_body_only() {
        let function = FunctionFragment {
            name: "create_user".to_string(),
            shape_identifier: "UsersRequest".to_string(),
            method: "POST".to_string(),
            url_raw: "https://api.example.com/users".to_string(),
            headers: Vec::new(),
            has_params: false,
            has_body: true,
        };
        let rendered = TypeScriptRenderer
            .render_function(&function, RequestHandler::Fetch)
            .unwrap();
        assert!(rendered.starts_with(
            "export async function create_user(body: UsersRequest['body']): Promise<Response> {\n"
        ));
        assert!(!rendered.contains("searchParams.append"));
    }

    #[test]
    fn test_render_function_axios_call_shape() {
        let function = FunctionFragment {
            name: "create_user".to_string(),
            shape_identifier: "UsersRequest".to_string(),
            method: "POST".to_string(),
            url_raw: "https://api.example.com/users".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            has_params: false,
            has_body: true,
        };
        let rendered = TypeScriptRenderer
            .render_function(&function, RequestHandler::Axios)
            .unwrap();
        assert!(rendered.contains("  return axios({\n"));
        assert!(rendered.contains("    method: 'post',\n"));
        assert!(rendered.contains("    url: url.toString(),\n"));
        assert!(rendered.contains("    headers: Object.fromEntries(headers.entries()),\n"));
        assert!(rendered.contains("    data: body,\n"));
        assert!(!rendered.contains("return fetch("));
        assert!(!rendered.contains("JSON.stringify"));
    }

    #[test]
    fn test_shape_import_lists_identifiers() {
        let identifiers = vec!["ARequest".to_string(), "BRequest".to_string()];
        assert_eq!(
            TypeScriptRenderer.shape_import(&identifiers),
            Some("import { ARequest, BRequest } from './api-types';\n".to_string())
        );
        assert_eq!(TypeScriptRenderer.shape_import(&[]), None);
    }
}
