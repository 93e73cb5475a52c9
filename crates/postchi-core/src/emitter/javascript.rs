//! JavaScript rendering: JSDoc typedefs for shapes, annotated untyped
//! signatures for functions.

use super::fragment::{BodyShape, FunctionFragment, ShapeFragment};
use super::{render_call_sequence, FragmentRenderer};
use crate::config::RequestHandler;

use serde_json::Value as JsonValue;

pub(crate) struct JavaScriptRenderer;

impl FragmentRenderer for JavaScriptRenderer {
    fn render_shape(&self, shape: &ShapeFragment) -> crate::Result<String> {
        let mut out = String::new();
        out.push_str("/**\n");
        out.push_str(&format!(" * @typedef {{Object}} {}\n", shape.identifier));
        for key in &shape.query_fields {
            out.push_str(&format!(" * @property {{string}} {}\n", key));
        }
        match &shape.body {
            Some(BodyShape::Json(value)) => {
                out.push_str(" * @property {Object} body\n");
                if let JsonValue::Object(map) = value {
                    for (key, entry) in map {
                        out.push_str(&format!(
                            " * @property {{{}}} body.{}\n",
                            js_typeof(entry),
                            key
                        ));
                    }
                }
            }
            Some(BodyShape::Opaque) => out.push_str(" * @property {*} body\n"),
            None => {}
        }
        out.push_str(" */\n");
        Ok(out)
    }

    fn render_function(
        &self,
        function: &FunctionFragment,
        handler: RequestHandler,
    ) -> crate::Result<String> {
        let mut out = String::new();
        out.push_str("/**\n");
        if function.has_params {
            out.push_str(&format!(
                " * @param {{{}}} params\n",
                function.shape_identifier
            ));
        }
        if function.has_body {
            out.push_str(" * @param {Object} body\n");
        }
        out.push_str(" * @returns {Promise<Response>}\n */\n");

        let mut parameters = Vec::new();
        if function.has_params {
            parameters.push("params");
        }
        if function.has_body {
            parameters.push("body");
        }
        out.push_str(&format!(
            "export async function {}({}) {{\n",
            function.name,
            parameters.join(", ")
        ));
        render_call_sequence(function, handler, &mut out);
        Ok(out)
    }

    fn shape_import(&self, _identifiers: &[String]) -> Option<String> {
        None
    }
}

/// JavaScript `typeof` classification of a JSON literal, as it would read
/// in a JSDoc annotation. Arrays and null classify as `object`, matching
/// the runtime operator.
fn js_typeof(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::String(_) => "string",
        JsonValue::Number(_) => "number",
        JsonValue::Bool(_) => "boolean",
        _ => "object",
    }
}
