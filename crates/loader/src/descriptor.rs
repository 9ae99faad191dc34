//! YAML table descriptors.

use crate::error::DescriptorError;
use serde::Deserialize;
use sift_core::schema::Field;
use sift_core::DataType;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DEFAULT_SEP: &str = ";";

/// A field entry of a table descriptor.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Table descriptor as written in YAML.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TableDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_sep")]
    pub sep: String,
    #[serde(rename = "lazyQuotes", default)]
    pub lazy_quotes: bool,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

fn default_sep() -> String {
    DEFAULT_SEP.to_string()
}

/// Validated loading instructions for one table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableSchema {
    pub name: String,
    pub sep: char,
    /// When set, quote characters carry no meaning and are kept in cell values.
    pub lazy_quotes: bool,
    pub fields: Vec<Field>,
}

impl TableDescriptor {
    /// Decodes a descriptor from YAML.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DescriptorError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Reads and decodes a descriptor file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DescriptorError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DescriptorError::NotFound(path.to_path_buf()),
            _ => DescriptorError::Io(e),
        })?;
        Self::from_reader(file)
    }

    /// Validates the descriptor into a schema.
    ///
    /// The name must be non-blank and the separator exactly one ASCII character.
    /// Every field type is either `number` or `string`.
    pub fn into_schema(self) -> Result<TableSchema, DescriptorError> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }

        let mut chars = self.sep.chars();
        let sep = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => c,
            _ => return Err(DescriptorError::InvalidSeparator(self.sep)),
        };

        let mut seen = HashSet::with_capacity(self.fields.len());
        let mut fields = Vec::with_capacity(self.fields.len());
        for field in self.fields {
            let data_type = DataType::from_name(&field.type_name).ok_or_else(|| {
                DescriptorError::UnknownType {
                    field: field.name.clone(),
                    type_name: field.type_name.clone(),
                }
            })?;
            if !seen.insert(field.name.clone()) {
                return Err(DescriptorError::DuplicateField(field.name));
            }
            fields.push(Field::new(field.name, data_type));
        }

        Ok(TableSchema {
            name: self.name,
            sep,
            lazy_quotes: self.lazy_quotes,
            fields,
        })
    }
}
