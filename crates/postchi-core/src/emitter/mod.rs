//! Code emission: tree traversal, fragment rendering, document assembly.
//!
//! The emitter walks the collection tree depth-first, turning every item
//! that carries a request into one shape fragment and one function
//! fragment, then assembles the rendered fragments into one or two output
//! documents depending on the configured file strategy. The whole pass is
//! synchronous and deterministic; file I/O happens in the caller.

pub mod fragment;
mod javascript;
mod typescript;

// Internal imports (std, crate)
use crate::collection::{Collection, Item};
use crate::config::{Config, Language, RequestHandler, Strategy};

pub use fragment::{BodyShape, FunctionFragment, ShapeFragment};

const GENERATED_HEADER: &str = "// Do not modify this file manually";
const AXIOS_IMPORT: &str = "import axios from 'axios';";

/// One generated output document, named relative to the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub name: String,
    pub content: String,
}

/// Everything produced by one emission pass.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// Output documents in write order.
    pub files: Vec<GeneratedFile>,
    /// Number of request functions emitted.
    pub endpoint_count: usize,
}

/// Per-language rendering of fragments into source text.
pub(crate) trait FragmentRenderer {
    fn render_shape(&self, shape: &ShapeFragment) -> crate::Result<String>;
    fn render_function(
        &self,
        function: &FunctionFragment,
        handler: RequestHandler,
    ) -> crate::Result<String>;
    /// Import of the named shape declarations for the split functions
    /// document, when the language needs one.
    fn shape_import(&self, identifiers: &[String]) -> Option<String>;
}

pub(crate) fn renderer(language: Language) -> Box<dyn FragmentRenderer> {
    match language {
        Language::TypeScript => Box::new(typescript::TypeScriptRenderer),
        Language::JavaScript => Box::new(javascript::JavaScriptRenderer),
    }
}

/// Statement lines shared by both language targets: URL construction,
/// query appends, header table, transport call, closing brace.
pub(crate) fn render_call_sequence(
    function: &FunctionFragment,
    handler: RequestHandler,
    out: &mut String,
) {
    out.push_str(&format!("  const url = new URL('{}');\n", function.url_raw));
    if function.has_params {
        // Appends the runtime argument's keys, not the declared list.
        out.push_str("  Object.entries(params).forEach(([key, value]) => {\n");
        out.push_str("    url.searchParams.append(key, value);\n");
        out.push_str("  });\n");
    }

    out.push_str("  const headers = new Headers({\n");
    for (key, value) in &function.headers {
        out.push_str(&format!("    '{}': '{}',\n", key, value));
    }
    out.push_str("  });\n");

    match handler {
        RequestHandler::Fetch => {
            out.push_str("  return fetch(url.toString(), {\n");
            out.push_str(&format!("    method: '{}',\n", function.method));
            out.push_str("    headers,\n");
            if function.has_body {
                out.push_str("    body: JSON.stringify(body),\n");
            }
            out.push_str("  });\n");
        }
        RequestHandler::Axios => {
            out.push_str("  return axios({\n");
            out.push_str(&format!(
                "    method: '{}',\n",
                function.method.to_lowercase()
            ));
            out.push_str("    url: url.toString(),\n");
            out.push_str("    headers: Object.fromEntries(headers.entries()),\n");
            if function.has_body {
                out.push_str("    data: body,\n");
            }
            out.push_str("  });\n");
        }
    }
    out.push_str("}\n");
}

/// Run the emission pass over a parsed collection.
pub fn emit(collection: &Collection, config: &Config) -> crate::Result<GeneratedOutput> {
    let mut shapes = Vec::new();
    let mut functions = Vec::new();
    for item in &collection.item {
        collect_fragments(item, &mut shapes, &mut functions);
    }
    let endpoint_count = functions.len();
    let files = assemble(&shapes, &functions, config)?;
    Ok(GeneratedOutput {
        files,
        endpoint_count,
    })
}

/// Depth-first, order-preserving walk. An item with both a request and
/// children contributes its own fragments first, then its children's.
fn collect_fragments(
    item: &Item,
    shapes: &mut Vec<ShapeFragment>,
    functions: &mut Vec<FunctionFragment>,
) {
    if let Some(request) = &item.request {
        shapes.push(ShapeFragment::from_request(request));
        functions.push(FunctionFragment::from_request(request, &item.name));
    }
    for child in &item.item {
        collect_fragments(child, shapes, functions);
    }
}

fn assemble(
    shapes: &[ShapeFragment],
    functions: &[FunctionFragment],
    config: &Config,
) -> crate::Result<Vec<GeneratedFile>> {
    let renderer = renderer(config.language);
    let extension = config.language.extension();

    let rendered_shapes = shapes
        .iter()
        .map(|shape| renderer.render_shape(shape))
        .collect::<crate::Result<Vec<_>>>()?;
    let rendered_functions = functions
        .iter()
        .map(|function| renderer.render_function(function, config.request_handler))
        .collect::<crate::Result<Vec<_>>>()?;

    match config.strategy {
        Strategy::SingleFile => {
            let mut content = format!("// Generated API client\n{}\n\n", GENERATED_HEADER);
            if config.request_handler == RequestHandler::Axios {
                content.push_str(AXIOS_IMPORT);
                content.push_str("\n\n");
            }
            push_blocks(&mut content, &rendered_shapes);
            push_blocks(&mut content, &rendered_functions);

            Ok(vec![GeneratedFile {
                name: format!("api-client.{}", extension),
                content,
            }])
        }
        Strategy::MultiFile => {
            let mut types_content = format!("// Generated API types\n{}\n\n", GENERATED_HEADER);
            push_blocks(&mut types_content, &rendered_shapes);

            let mut functions_content =
                format!("// Generated API functions\n{}\n\n", GENERATED_HEADER);
            if config.request_handler == RequestHandler::Axios {
                functions_content.push_str(AXIOS_IMPORT);
                functions_content.push_str("\n\n");
            }
            let identifiers: Vec<String> = shapes
                .iter()
                .map(|shape| shape.identifier.clone())
                .collect();
            if let Some(import) = renderer.shape_import(&identifiers) {
                functions_content.push_str(&import);
                functions_content.push('\n');
            }
            push_blocks(&mut functions_content, &rendered_functions);

            Ok(vec![
                GeneratedFile {
                    name: format!("api-types.{}", extension),
                    content: types_content,
                },
                GeneratedFile {
                    name: format!("api-functions.{}", extension),
                    content: functions_content,
                },
            ])
        }
    }
}

fn push_blocks(out: &mut String, blocks: &[String]) {
    for block in blocks {
        out.push_str(block);
        out.push('\n');
    }
}
