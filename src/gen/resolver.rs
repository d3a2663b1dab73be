// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::fmt;

use crate::error::GenError;
use crate::ir::{Decl, Schema, ThriftType};

use super::runtime;

/// The one-byte Thrift type identifier written into the stream alongside
/// each field, and its symbolic `TType` constant name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WireCode {
    Stop,
    Bool,
    Byte,
    Double,
    I16,
    I32,
    I64,
    String,
    Struct,
    Map,
    Set,
    List,
    Enum,
}

impl WireCode {
    pub fn value(self) -> u8 {
        match self {
            WireCode::Stop => 0,
            WireCode::Bool => 1,
            WireCode::Byte => 3,
            WireCode::Double => 4,
            WireCode::I16 => 6,
            WireCode::I32 => 8,
            WireCode::I64 => 10,
            WireCode::String => 11,
            WireCode::Struct => 12,
            WireCode::Map => 13,
            WireCode::Set => 14,
            WireCode::List => 15,
            WireCode::Enum => 16,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            WireCode::Stop => "STOP",
            WireCode::Bool => "BOOL",
            WireCode::Byte => "BYTE",
            WireCode::Double => "DOUBLE",
            WireCode::I16 => "I16",
            WireCode::I32 => "I32",
            WireCode::I64 => "I64",
            WireCode::String => "STRING",
            WireCode::Struct => "STRUCT",
            WireCode::Map => "MAP",
            WireCode::Set => "SET",
            WireCode::List => "LIST",
            WireCode::Enum => "ENUM",
        }
    }
}

/// A Java class reference. `java.lang` members print bare, which is how
/// generated code suppresses imports of the intrinsic namespace.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JavaClass {
    pub package: String,
    pub name: String,
}

impl JavaClass {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self { package: package.into(), name: name.into() }
    }

    /// Splits a fully qualified class name into package and simple name.
    pub fn parse(fqcn: &str) -> Result<Self, GenError> {
        let fqcn = fqcn.trim();
        if fqcn.is_empty() {
            return Err(GenError::config("container class name must not be empty"));
        }
        match fqcn.rsplit_once('.') {
            Some((package, name)) if !package.is_empty() && !name.is_empty() => {
                Ok(Self::new(package, name))
            }
            _ => Err(GenError::config(format!(
                "'{fqcn}' is not a fully qualified class name"
            ))),
        }
    }
}

impl fmt::Display for JavaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package == "java.lang" {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

/// A structured Java type expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum JavaType {
    Class(JavaClass),
    Parameterized(JavaClass, Vec<JavaType>),
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Class(class) => write!(f, "{class}"),
            JavaType::Parameterized(raw, args) => {
                write!(f, "{raw}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
        }
    }
}

impl From<JavaClass> for JavaType {
    fn from(class: JavaClass) -> Self {
        JavaType::Class(class)
    }
}

fn java_lang(name: &str) -> JavaType {
    JavaClass::new("java.lang", name).into()
}

fn class_of(fqcn: &str) -> JavaClass {
    let (package, name) = fqcn.rsplit_once('.').expect("runtime names are fully qualified");
    JavaClass::new(package, name)
}

/// Maps Thrift types to Java type expressions and wire codes.
///
/// The three container classes are the concrete implementations used for
/// allocation; fields and constants are always declared through the
/// matching `java.util` interface so callers are not tied to them.
pub struct TypeResolver {
    list_class: JavaClass,
    set_class: JavaClass,
    map_class: JavaClass,
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self {
            list_class: JavaClass::new("java.util", "ArrayList"),
            set_class: JavaClass::new("java.util", "HashSet"),
            map_class: JavaClass::new("java.util", "HashMap"),
        }
    }
}

impl TypeResolver {
    pub fn set_list_class(&mut self, class: JavaClass) {
        self.list_class = class;
    }

    pub fn set_set_class(&mut self, class: JavaClass) {
        self.set_class = class;
    }

    pub fn set_map_class(&mut self, class: JavaClass) {
        self.map_class = class;
    }

    /// The Java type a value of `ty` is declared as. Builtins resolve to
    /// their boxed reference types so that nullability can express
    /// optionality; collections resolve to the `java.util` interface.
    pub fn java_type_of(&self, schema: &Schema, ty: &ThriftType) -> Result<JavaType, GenError> {
        match ty.true_type() {
            ThriftType::Bool => Ok(java_lang("Boolean")),
            ThriftType::Byte => Ok(java_lang("Byte")),
            ThriftType::I16 => Ok(java_lang("Short")),
            ThriftType::I32 => Ok(java_lang("Integer")),
            ThriftType::I64 => Ok(java_lang("Long")),
            ThriftType::Double => Ok(java_lang("Double")),
            ThriftType::String => Ok(java_lang("String")),
            ThriftType::Binary => Ok(class_of(runtime::BYTE_STRING).into()),
            ThriftType::Void => {
                Err(GenError::invariant("void cannot be used as a field type"))
            }
            ThriftType::Enum { name } | ThriftType::Struct { name } => {
                self.user_class(schema, name)
            }
            ThriftType::List { element } => {
                let element = self.java_type_of(schema, element)?;
                Ok(JavaType::Parameterized(JavaClass::new("java.util", "List"), vec![element]))
            }
            ThriftType::Set { element } => {
                let element = self.java_type_of(schema, element)?;
                Ok(JavaType::Parameterized(JavaClass::new("java.util", "Set"), vec![element]))
            }
            ThriftType::Map { key, value } => {
                let key = self.java_type_of(schema, key)?;
                let value = self.java_type_of(schema, value)?;
                Ok(JavaType::Parameterized(JavaClass::new("java.util", "Map"), vec![key, value]))
            }
            ThriftType::Typedef { alias, .. } => Err(GenError::invariant(format!(
                "typedef '{alias}' survived true-type resolution"
            ))),
        }
    }

    fn user_class(&self, schema: &Schema, name: &str) -> Result<JavaType, GenError> {
        let decl = schema
            .get_decl(name)
            .ok_or_else(|| GenError::schema(format!("reference to unknown type '{name}'")))?;
        let package = decl.java_package().ok_or_else(|| {
            GenError::config(format!(
                "A Java package name must be given for java code generation: '{name}'"
            ))
        })?;
        Ok(JavaClass::new(package, decl.name()).into())
    }

    /// The concrete list implementation type used for allocation.
    pub fn list_of(&self, element: JavaType) -> JavaType {
        JavaType::Parameterized(self.list_class.clone(), vec![element])
    }

    /// The concrete set implementation type used for allocation.
    pub fn set_of(&self, element: JavaType) -> JavaType {
        JavaType::Parameterized(self.set_class.clone(), vec![element])
    }

    /// The concrete map implementation type used for allocation.
    pub fn map_of(&self, key: JavaType, value: JavaType) -> JavaType {
        JavaType::Parameterized(self.map_class.clone(), vec![key, value])
    }

    /// The wire code written for values of `ty`. Enums travel as i32.
    pub fn wire_code_of(&self, ty: &ThriftType) -> Result<WireCode, GenError> {
        match ty.true_type() {
            ThriftType::Bool => Ok(WireCode::Bool),
            ThriftType::Byte => Ok(WireCode::Byte),
            ThriftType::I16 => Ok(WireCode::I16),
            ThriftType::I32 => Ok(WireCode::I32),
            ThriftType::I64 => Ok(WireCode::I64),
            ThriftType::Double => Ok(WireCode::Double),
            ThriftType::String | ThriftType::Binary => Ok(WireCode::String),
            ThriftType::Enum { .. } => Ok(WireCode::I32),
            ThriftType::List { .. } => Ok(WireCode::List),
            ThriftType::Set { .. } => Ok(WireCode::Set),
            ThriftType::Map { .. } => Ok(WireCode::Map),
            ThriftType::Struct { .. } => Ok(WireCode::Struct),
            ThriftType::Void => {
                Err(GenError::invariant("void has no wire representation"))
            }
            ThriftType::Typedef { alias, .. } => Err(GenError::invariant(format!(
                "typedef '{alias}' survived true-type resolution"
            ))),
        }
    }
}

/// The unboxed Java primitive for builtin numeric and boolean types, used
/// for constant holder fields.
pub fn unboxed_name(ty: &ThriftType) -> Option<&'static str> {
    match ty.true_type() {
        ThriftType::Bool => Some("boolean"),
        ThriftType::Byte => Some("byte"),
        ThriftType::I16 => Some("short"),
        ThriftType::I32 => Some("int"),
        ThriftType::I64 => Some("long"),
        ThriftType::Double => Some("double"),
        _ => None,
    }
}
