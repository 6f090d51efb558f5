use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};

use crate::{
  generator::{
    ast::{DefinitionKind, TypeDefinition},
    codegen::Visibility,
    pipeline::{ProcessorContext, Stage, TypesStage},
  },
  ui::{Colors, colors::table_color, term_width},
  utils::spec::load_description,
};

/// The one-line summary shown in the DETAILS column.
pub(crate) fn describe(definition: &TypeDefinition) -> String {
  match &definition.kind {
    DefinitionKind::Struct { fields, required } => {
      let fields: Vec<String> = fields
        .iter()
        .map(|(name, field_type)| {
          let marker = if required.contains(name) { "" } else { "?" };
          format!("{name}{marker}: {}", field_type.describe())
        })
        .collect();
      format!("{{ {} }}", fields.join(", "))
    }
    DefinitionKind::Enum { values, .. } => values.join(" | "),
    DefinitionKind::Alias { target } => format!("= {}", target.describe()),
  }
}

pub async fn list_types(api: &Path, all_schemas: bool, colors: &Colors) -> anyhow::Result<()> {
  let description = load_description(api).await?;
  let context = TypesStage::new(Visibility::default(), all_schemas).add_context(&description, &ProcessorContext::new())?;
  let definitions = context.require_type_definitions("list")?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["NAME", "KIND", "DETAILS"] {
    header.add_cell(Cell::new(title).fg(table_color(colors.label())));
  }
  table.set_header(header);

  for definition in definitions {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&definition.name)
        .fg(table_color(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(definition.kind.to_string()).fg(table_color(colors.accent())));
    row.add_cell(Cell::new(describe(definition)).fg(table_color(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;

  use super::*;
  use crate::generator::ast::{FieldType, Primitive};

  #[test]
  fn test_describe_struct() {
    let definition = TypeDefinition::new(
      "Pet",
      DefinitionKind::Struct {
        fields: IndexMap::from([
          ("name".to_string(), FieldType::Primitive(Primitive::Text)),
          (
            "photoUrls".to_string(),
            FieldType::list(FieldType::Primitive(Primitive::Text), true),
          ),
          ("tags".to_string(), FieldType::list(FieldType::Named("Tag".to_string()), false)),
        ]),
        required: vec!["name".to_string(), "photoUrls".to_string()],
      },
    );
    assert_eq!(
      describe(&definition),
      "{ name: string, photoUrls: [string, ...], tags?: [Tag] }"
    );
  }

  #[test]
  fn test_describe_enum_and_alias() {
    let status = TypeDefinition::new(
      "StatusEnum",
      DefinitionKind::Enum {
        values: vec!["available".to_string(), "sold".to_string()],
        owner: None,
      },
    );
    assert_eq!(describe(&status), "available | sold");

    let inventory = TypeDefinition::new(
      "Inventory",
      DefinitionKind::Alias {
        target: FieldType::map(FieldType::Primitive(Primitive::Integer)),
      },
    );
    assert_eq!(describe(&inventory), "= {string: integer}");
  }
}
