use indexmap::IndexMap;

use super::{
  context::ProcessorContext,
  stage::{GeneratedOutput, OutputTarget, Stage},
};
use crate::{
  generator::{
    ast::{DefinitionKind, FieldType, TypeDefinition},
    codegen::{self, TYPES_MODULE, Visibility},
    converter::{LookupTable, REQUEST_BODY_SUFFIX, RESPONSE_SUFFIX, TypeDefinitions, resolve, resolver},
    document::{ApiDescription, Body, Method, Operation, SchemaNode},
    errors::PipelineError,
    metrics::{GenerationStats, GenerationWarning},
  },
  naming::identifiers::{to_pascal_segment, to_rust_type_name},
  utils::SchemaExt,
};

pub const STAGE_NAME: &str = "types";

/// Resolves named schemas and operation bodies into type definitions and
/// renders them as plain serde models.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypesStage {
  visibility: Visibility,
  all_schemas: bool,
}

impl TypesStage {
  pub fn new(visibility: Visibility, all_schemas: bool) -> Self {
    Self {
      visibility,
      all_schemas,
    }
  }
}

/// PascalCase operation name: the `operationId`, or the method followed by the
/// path segments.
pub fn operation_name(path: &str, method: Method, operation: &Operation) -> String {
  match operation.operation_id.as_deref().filter(|id| !id.trim().is_empty()) {
    Some(operation_id) => to_rust_type_name(operation_id),
    None => to_rust_type_name(&format!("{method}{path}")),
  }
}

/// Status codes and ranges (`200`, `4XX`) are kept as-is; `default` is PascalCased.
pub fn status_label(status: &str) -> String {
  if status.starts_with(|c: char| c.is_ascii_digit()) {
    status.to_ascii_uppercase()
  } else {
    to_pascal_segment(status)
  }
}

/// Collects definitions from a sequence of roots.
struct DefinitionCollector<'a> {
  lookup: &'a LookupTable,
  definitions: TypeDefinitions,
  sources: IndexMap<String, SchemaNode>,
}

impl<'a> DefinitionCollector<'a> {
  fn new(lookup: &'a LookupTable) -> Self {
    Self {
      lookup,
      definitions: TypeDefinitions::new(),
      sources: IndexMap::new(),
    }
  }

  /// Resolves one root and returns its decorated node.
  fn add_root(&mut self, name: &str, node: &SchemaNode) -> Result<SchemaNode, PipelineError> {
    let resolution = resolve(name, node, self.lookup)?;
    self.definitions.absorb(resolution.definitions)?;
    for (struct_name, source) in resolution.sources {
      self.sources.entry(struct_name).or_insert(source);
    }

    let decorated = resolution.node;
    if let Some(alias) = root_alias(name, &decorated, self.lookup)? {
      self.definitions.absorb(vec![alias])?;
    }
    Ok(decorated)
  }
}

/// A collection or map root has no definition of its own, and an object root
/// registered first under another name resolves to that name. Both get an alias.
fn root_alias(name: &str, node: &SchemaNode, lookup: &LookupTable) -> Result<Option<TypeDefinition>, PipelineError> {
  let target = if node.is_collection() || node.is_map() {
    resolver::field_type(node, name, false, name, lookup)?
  } else if node.properties.is_some() {
    match node.resolved_name.as_deref() {
      Some(resolved) if resolved != name => FieldType::Named(resolved.to_string()),
      _ => return Ok(None),
    }
  } else {
    return Ok(None);
  };

  Ok(Some(
    TypeDefinition::new(name, DefinitionKind::Alias { target }).with_docs(node.description.clone()),
  ))
}

impl Stage for TypesStage {
  fn name(&self) -> &'static str {
    STAGE_NAME
  }

  fn target(&self) -> OutputTarget {
    OutputTarget::single(format!("{TYPES_MODULE}.rs"))
  }

  fn add_context(&self, api: &ApiDescription, _context: &ProcessorContext) -> Result<ProcessorContext, PipelineError> {
    let types = api.components.schemas.clone();
    let lookup = LookupTable::from_schemas(&types)?;
    let mut collector = DefinitionCollector::new(&lookup);

    if self.all_schemas {
      for (name, node) in &types {
        collector.add_root(&to_rust_type_name(name), node)?;
      }
    }

    let mut responses = IndexMap::new();
    for (path, item) in &api.paths {
      for (method, operation) in item.operations() {
        let operation_name = operation_name(path, method, operation);

        let request = operation.request_body.as_ref().and_then(Body::json_schema);
        let responses_by_status = operation
          .responses
          .iter()
          .filter_map(|(status, body)| body.json_schema().map(|node| (status, node)));

        let bodies = request
          .map(|node| (format!("{operation_name}{REQUEST_BODY_SUFFIX}"), node))
          .into_iter()
          .chain(responses_by_status.map(|(status, node)| {
            (format!("{operation_name}{}{RESPONSE_SUFFIX}", status_label(status)), node)
          }));

        for (inline_name, node) in bodies {
          let name = lookup.lookup(node)?.map_or(inline_name, String::from);
          let decorated = collector.add_root(&name, node)?;
          responses.entry(name).or_insert(decorated);
        }
      }
    }

    let DefinitionCollector { definitions, sources, .. } = collector;

    Ok(
      ProcessorContext::new()
        .with_types(types)
        .with_signatures(lookup)
        .with_responses(responses)
        .with_type_definitions(definitions)
        .with_definition_sources(sources),
    )
  }

  fn generate(&self, context: &ProcessorContext) -> Result<GeneratedOutput, PipelineError> {
    let definitions = context.require_type_definitions(STAGE_NAME)?;
    let tokens = codegen::types::generate_types(definitions, self.visibility);
    let target = self.target().file_name_for(STAGE_NAME);
    Ok(GeneratedOutput::Single(codegen::format_file(&target, tokens)?))
  }

  fn record_stats(&self, api: &ApiDescription, context: &ProcessorContext, stats: &mut GenerationStats) {
    if let Some(definitions) = context.type_definitions() {
      stats.record_definitions(definitions);

      if let Some(types) = context.types() {
        let duplicates = types.keys().filter_map(|name| {
          let name = to_rust_type_name(name);
          match definitions.get(&name).map(|definition| &definition.kind) {
            Some(DefinitionKind::Alias {
              target: FieldType::Named(canonical),
            }) => Some(GenerationWarning::DuplicateSchema {
              schema: name.clone(),
              canonical: canonical.clone(),
            }),
            _ => None,
          }
        });
        stats.record_warnings(duplicates);
      }
    }

    if let Some(responses) = context.responses() {
      stats.record_bodies(responses.len());
    }

    for (path, item) in &api.paths {
      for (method, operation) in item.operations() {
        let request = operation
          .request_body
          .as_ref()
          .map(|body| (REQUEST_BODY_SUFFIX.to_string(), body));
        let statuses = operation
          .responses
          .iter()
          .map(|(status, body)| (status.clone(), body));

        for (status, body) in request.into_iter().chain(statuses) {
          if body.json_schema().is_some() {
            continue;
          }
          if let Some(media_type) = body.content.keys().next() {
            stats.record_warning(GenerationWarning::NonJsonBody {
              operation: operation_name(path, method, operation),
              status,
              media_type: media_type.clone(),
            });
          }
        }
      }
    }
  }
}
