// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Java code generation from a resolved Thrift schema.

mod code;
mod constants;
mod consts;
mod enums;
mod names;
mod reader;
mod resolver;
mod runtime;
mod structs;
mod util;
mod writer;

#[cfg(test)]
mod gen_tests;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::GenError;
use crate::ir::{Constant, Decl, EnumType, Schema, StructType};

pub use self::resolver::{JavaClass, JavaType, TypeResolver, WireCode};

/// The fixed header line carried by every generated file.
pub const FILE_COMMENT: &str = "Automatically generated by the Thrifty compiler; do not edit!";

/// One generated Java source file: a package, one top-level type, and the
/// header comments that precede it.
pub struct CompilationUnit {
    pub package: String,
    pub type_name: String,
    pub source_location: Option<String>,
    pub body: Vec<u8>,
}

impl CompilationUnit {
    pub fn file_name(&self) -> String {
        format!("{}.java", self.type_name)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "// {FILE_COMMENT}")?;
        if let Some(location) = &self.source_location {
            writeln!(out, "// Source: {location}")?;
        }
        writeln!(out, "package {};", self.package)?;
        writeln!(out)?;
        out.write_all(&self.body)
    }

    /// The full file text, for diagnostics and tests.
    pub fn source(&self) -> String {
        let mut buf = Vec::new();
        self.write_to(&mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Receives generated compilation units, in generation order.
pub trait Sink {
    fn write(&mut self, unit: &CompilationUnit) -> Result<(), GenError>;
}

/// Writes one `.java` file per unit under a root directory, nesting
/// directories by package.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Sink for DirectorySink {
    fn write(&mut self, unit: &CompilationUnit) -> Result<(), GenError> {
        let mut dir = self.root.clone();
        for part in unit.package.split('.') {
            dir.push(part);
        }
        fs::create_dir_all(&dir)?;
        let file = fs::File::create(dir.join(unit.file_name()))?;
        let mut out = io::BufWriter::new(file);
        unit.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Appends every unit to one output stream, separated by blank lines.
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write(&mut self, unit: &CompilationUnit) -> Result<(), GenError> {
        unit.write_to(&mut self.out)?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// Generates Java source for every declaration of a schema.
///
/// A generator is configured once, then drives a single pass over the
/// schema; nothing it emits is mutated afterwards. Two generators over
/// disjoint schemas may run in parallel as long as they do not share a
/// sink.
pub struct Generator<'a> {
    schema: &'a Schema,
    resolver: TypeResolver,
    generated_annotations: bool,
    date_stamp: String,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            resolver: TypeResolver::default(),
            generated_annotations: false,
            // Captured once so every unit of a run carries the same stamp.
            date_stamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        }
    }

    /// Uses `class` to allocate list fields and constants.
    pub fn with_list_type(mut self, class: &str) -> Result<Self, GenError> {
        self.resolver.set_list_class(JavaClass::parse(class)?);
        Ok(self)
    }

    /// Uses `class` to allocate set fields and constants.
    pub fn with_set_type(mut self, class: &str) -> Result<Self, GenError> {
        self.resolver.set_set_class(JavaClass::parse(class)?);
        Ok(self)
    }

    /// Uses `class` to allocate map fields and constants.
    pub fn with_map_type(mut self, class: &str) -> Result<Self, GenError> {
        self.resolver.set_map_class(JavaClass::parse(class)?);
        Ok(self)
    }

    /// Stamps every generated type with `@javax.annotation.Generated`.
    /// Off by default so that outputs stay byte-identical run to run.
    pub fn with_generated_annotations(mut self) -> Self {
        self.generated_annotations = true;
        self
    }

    pub(crate) fn schema(&self) -> &Schema {
        self.schema
    }

    pub(crate) fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    pub(crate) fn emit_generated_annotation<W: Write>(
        &self,
        out: &mut code::CodeWriter<W>,
    ) -> io::Result<()> {
        if !self.generated_annotations {
            return Ok(());
        }
        out.line(format!(
            "@{}(value = \"thriftgen\", date = \"{}\")",
            runtime::GENERATED,
            self.date_stamp,
        ))
    }

    /// Drives the schema in a fixed order: enums, then structs, then
    /// exceptions, then unions, then constants grouped by package.
    /// Enums come first so struct defaults can reference their members;
    /// constants come last because they may reference any type.
    pub fn generate(&self, sink: &mut dyn Sink) -> Result<(), GenError> {
        for enum_type in &self.schema.enums {
            debug!(name = %enum_type.name, "generating enum");
            sink.write(&self.enum_unit(enum_type)?)?;
        }

        let structs = self
            .schema
            .structs
            .iter()
            .chain(&self.schema.exceptions)
            .chain(&self.schema.unions);
        for struct_type in structs {
            debug!(name = %struct_type.name, "generating struct");
            sink.write(&self.struct_unit(struct_type)?)?;
        }

        let mut constants_by_package: BTreeMap<&str, Vec<&Constant>> = BTreeMap::new();
        for constant in &self.schema.constants {
            let package = constant.java_package().ok_or_else(|| {
                GenError::config(format!(
                    "A Java package name must be given for java code generation: constant '{}'",
                    constant.name,
                ))
            })?;
            constants_by_package.entry(package).or_default().push(constant);
        }
        for (package, constants) in &constants_by_package {
            debug!(package = %package, count = constants.len(), "generating constants");
            sink.write(&self.constants_unit(package, constants)?)?;
        }

        // TODO: generate service interfaces and client stubs.
        Ok(())
    }

    /// Generates into `root`, one file per type.
    pub fn generate_to_directory(&self, root: impl Into<PathBuf>) -> Result<(), GenError> {
        self.generate(&mut DirectorySink::new(root))
    }

    fn enum_unit(&self, enum_type: &EnumType) -> Result<CompilationUnit, GenError> {
        let package = self.package_of(enum_type)?;
        let mut body = Vec::new();
        enums::emit_enum(self, &mut code::CodeWriter::new(&mut body), enum_type)?;
        Ok(CompilationUnit {
            package,
            type_name: enum_type.name.clone(),
            source_location: source_location(enum_type),
            body,
        })
    }

    fn struct_unit(&self, struct_type: &StructType) -> Result<CompilationUnit, GenError> {
        let package = self.package_of(struct_type)?;
        let mut body = Vec::new();
        structs::emit_struct(self, &mut code::CodeWriter::new(&mut body), struct_type)?;
        Ok(CompilationUnit {
            package,
            type_name: struct_type.name.clone(),
            source_location: source_location(struct_type),
            body,
        })
    }

    fn constants_unit(
        &self,
        package: &str,
        constants: &[&Constant],
    ) -> Result<CompilationUnit, GenError> {
        let mut body = Vec::new();
        constants::emit_constants(self, &mut code::CodeWriter::new(&mut body), constants)?;
        Ok(CompilationUnit {
            package: package.to_string(),
            type_name: "Constants".to_string(),
            source_location: None,
            body,
        })
    }

    fn package_of(&self, decl: &dyn Decl) -> Result<String, GenError> {
        decl.java_package().map(str::to_string).ok_or_else(|| {
            GenError::config(format!(
                "A Java package name must be given for java code generation: '{}'",
                decl.name(),
            ))
        })
    }
}

fn source_location(decl: &dyn Decl) -> Option<String> {
    let location = decl.location();
    if location.path.is_empty() {
        None
    } else {
        Some(location.to_string())
    }
}
