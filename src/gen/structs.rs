// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::io::Write;

use crate::error::GenError;
use crate::ir::{Decl, Field, StructType, ThriftType};

use super::code::CodeWriter;
use super::names::NameAllocator;
use super::util::emit_javadoc;
use super::{consts, reader, runtime, writer, Generator};

/// Emits the value class for a struct, exception, or union, together with
/// its nested `Builder` and hidden `Adapter`.
pub fn emit_struct<W: Write>(
    gen: &Generator<'_>,
    out: &mut CodeWriter<W>,
    struct_type: &StructType,
) -> Result<(), GenError> {
    let name = &struct_type.name;

    emit_javadoc(out, struct_type.doc())?;
    gen.emit_generated_annotation(out)?;
    if struct_type.is_exception() {
        out.open(format!("public final class {name} extends Exception {{"))?;
    } else {
        out.open(format!("public final class {name} {{"))?;
    }

    out.line(format!(
        "public static final {}<{name}, {name}.Builder> ADAPTER = new {name}Adapter();",
        runtime::ADAPTER,
    ))?;

    for field in &struct_type.fields {
        out.blank()?;
        emit_javadoc(out, field.doc.as_deref())?;
        out.line(field_annotation(field))?;
        let java_ty = gen.resolver().java_type_of(gen.schema(), &field.ty).map_err(|e| {
            e.context(format!("field '{}' of '{name}'", field.name))
        })?;
        out.line(format!("public final {java_ty} {};", field.name))?;
    }

    out.blank()?;
    emit_value_ctor(out, struct_type)?;
    emit_equals(out, struct_type)?;
    emit_hash_code(out, struct_type)?;
    emit_to_string(out, struct_type)?;

    out.blank()?;
    emit_builder(gen, out, struct_type)?;
    out.blank()?;
    emit_adapter(gen, out, struct_type)?;

    out.close("}")?;
    Ok(())
}

fn field_annotation(field: &Field) -> String {
    let mut annotation = format!(
        "@{}(fieldId = {}, isRequired = {}",
        runtime::THRIFT_FIELD,
        field.id,
        field.required,
    );
    if let Some(typedef) = field.typedef_name() {
        annotation.push_str(&format!(", typedefName = \"{typedef}\""));
    }
    annotation.push(')');
    annotation
}

// Collection fields are exposed as unmodifiable views over the builder's
// backing storage; optional fields keep null as null.
fn emit_value_ctor<W: Write>(
    out: &mut CodeWriter<W>,
    struct_type: &StructType,
) -> Result<(), GenError> {
    out.open(format!("private {}(Builder builder) {{", struct_type.name))?;
    for field in &struct_type.fields {
        let name = &field.name;
        let view = match field.ty.true_type() {
            ThriftType::List { .. } => Some("unmodifiableList"),
            ThriftType::Set { .. } => Some("unmodifiableSet"),
            ThriftType::Map { .. } => Some("unmodifiableMap"),
            _ => None,
        };
        match view {
            Some(view) if field.required => out.line(format!(
                "this.{name} = {}.{view}(builder.{name});",
                runtime::COLLECTIONS,
            ))?,
            Some(view) => out.line(format!(
                "this.{name} = builder.{name} == null ? null : {}.{view}(builder.{name});",
                runtime::COLLECTIONS,
            ))?,
            None => out.line(format!("this.{name} = builder.{name};"))?,
        }
    }
    out.close("}")?;
    Ok(())
}

fn emit_equals<W: Write>(
    out: &mut CodeWriter<W>,
    struct_type: &StructType,
) -> Result<(), GenError> {
    let name = &struct_type.name;

    out.blank()?;
    out.line("@Override")?;
    out.open("public boolean equals(Object other) {")?;
    out.line("if (this == other) return true;")?;
    out.line("if (other == null) return false;")?;
    out.line(format!("if (!(other instanceof {name})) return false;"))?;

    if struct_type.fields.is_empty() {
        out.line("return true;")?;
    } else {
        out.line(format!("{name} that = ({name}) other;"))?;
        let last = struct_type.fields.len() - 1;
        for (i, field) in struct_type.fields.iter().enumerate() {
            let f = &field.name;
            let clause = format!(
                "(this.{f} == that.{f} || (this.{f} != null && this.{f}.equals(that.{f})))"
            );
            let line = match (i == 0, i == last) {
                (true, true) => format!("return {clause};"),
                (true, false) => format!("return {clause}"),
                (false, true) => format!("    && {clause};"),
                (false, false) => format!("    && {clause}"),
            };
            out.line(line)?;
        }
    }
    out.close("}")?;
    Ok(())
}

// FNV-1a-style mixing over field hash codes, nulls hashing as zero.
fn emit_hash_code<W: Write>(
    out: &mut CodeWriter<W>,
    struct_type: &StructType,
) -> Result<(), GenError> {
    out.blank()?;
    out.line("@Override")?;
    out.open("public int hashCode() {")?;
    out.line("int code = 16777619;")?;
    for field in &struct_type.fields {
        let f = &field.name;
        out.line(format!("code ^= (this.{f} == null) ? 0 : this.{f}.hashCode();"))?;
        out.line("code *= 0x811c9dc5;")?;
    }
    out.line("return code;")?;
    out.close("}")?;
    Ok(())
}

fn emit_to_string<W: Write>(
    out: &mut CodeWriter<W>,
    struct_type: &StructType,
) -> Result<(), GenError> {
    let name = &struct_type.name;

    out.blank()?;
    out.line("@Override")?;
    out.open("public String toString() {")?;
    if struct_type.fields.is_empty() {
        out.line(format!("return \"{name}{{}}\";"))?;
    } else {
        out.line("StringBuilder sb = new StringBuilder();")?;
        out.line(format!("sb.append(\"{name}\").append(\"{{\\n  \");"))?;
        let last = struct_type.fields.len() - 1;
        for (i, field) in struct_type.fields.iter().enumerate() {
            let f = &field.name;
            out.line(format!("sb.append(\"{f}=\");"))?;
            out.line(format!("sb.append(this.{f} == null ? \"null\" : this.{f});"))?;
            if i == last {
                out.line("sb.append(\"\\n}\");")?;
            } else {
                out.line("sb.append(\",\\n  \");")?;
            }
        }
        out.line("return sb.toString();")?;
    }
    out.close("}")?;
    Ok(())
}

fn emit_builder<W: Write>(
    gen: &Generator<'_>,
    out: &mut CodeWriter<W>,
    struct_type: &StructType,
) -> Result<(), GenError> {
    let name = &struct_type.name;

    out.open(format!(
        "public static final class Builder implements {}<{name}> {{",
        runtime::STRUCT_BUILDER,
    ))?;

    for (i, field) in struct_type.fields.iter().enumerate() {
        if i > 0 {
            out.blank()?;
        }
        emit_javadoc(out, field.doc.as_deref())?;
        let java_ty = gen.resolver().java_type_of(gen.schema(), &field.ty)?;
        out.line(format!("private {java_ty} {};", field.name))?;
    }

    // Default initializers are rendered once per field and reused by both
    // the default constructor and reset(), so temporaries keep the same
    // names in both bodies.
    let mut allocator = NameAllocator::new();
    for field in &struct_type.fields {
        allocator.reserve(&field.name);
    }
    let mut initializers = Vec::with_capacity(struct_type.fields.len());
    for field in &struct_type.fields {
        let block = match &field.default {
            Some(default) => {
                let mut buf = Vec::new();
                consts::emit_init(
                    gen,
                    &mut CodeWriter::with_depth(&mut buf, 3),
                    &mut allocator,
                    &format!("this.{}", field.name),
                    field.ty.true_type(),
                    default,
                )
                .map_err(|e| {
                    e.context(format!("default value of field '{}' in '{name}'", field.name))
                })?;
                Some(buf)
            }
            None => None,
        };
        initializers.push(block);
    }

    out.blank()?;
    out.open("public Builder() {")?;
    for block in initializers.iter().flatten() {
        out.raw(block)?;
    }
    out.close("}")?;

    out.blank()?;
    out.open(format!("public Builder({name} struct) {{"))?;
    for field in &struct_type.fields {
        out.line(format!("this.{f} = struct.{f};", f = field.name))?;
    }
    out.close("}")?;

    for field in &struct_type.fields {
        let f = &field.name;
        let java_ty = gen.resolver().java_type_of(gen.schema(), &field.ty)?;

        out.blank()?;
        out.open(format!("public Builder {f}({java_ty} {f}) {{"))?;
        if field.required {
            out.open(format!("if ({f} == null) {{"))?;
            out.line(format!(
                "throw new NullPointerException(\"Required field '{f}' cannot be null\");"
            ))?;
            out.close("}")?;
        }
        out.line(format!("this.{f} = {f};"))?;
        out.line("return this;")?;
        out.close("}")?;
    }

    out.blank()?;
    out.line("@Override")?;
    out.open(format!("public {name} build() {{"))?;
    if struct_type.is_union() {
        out.line("int setFields = 0;")?;
        for field in &struct_type.fields {
            out.line(format!("if (this.{} != null) ++setFields;", field.name))?;
        }
        out.open("if (setFields != 1) {")?;
        out.line(
            "throw new IllegalStateException(\"Invalid union; \" + setFields + \" field(s) were set\");",
        )?;
        out.close("}")?;
    } else {
        for field in struct_type.fields.iter().filter(|f| f.required) {
            out.open(format!("if (this.{} == null) {{", field.name))?;
            out.line(format!(
                "throw new IllegalStateException(\"Required field '{}' is missing\");",
                field.name,
            ))?;
            out.close("}")?;
        }
    }
    out.line(format!("return new {name}(this);"))?;
    out.close("}")?;

    out.blank()?;
    out.line("@Override")?;
    out.open("public void reset() {")?;
    for (field, block) in struct_type.fields.iter().zip(&initializers) {
        match block {
            Some(block) => out.raw(block)?,
            None => out.line(format!("this.{} = null;", field.name))?,
        }
    }
    out.close("}")?;

    out.close("}")?;
    Ok(())
}

fn emit_adapter<W: Write>(
    gen: &Generator<'_>,
    out: &mut CodeWriter<W>,
    struct_type: &StructType,
) -> Result<(), GenError> {
    let name = &struct_type.name;

    out.open(format!(
        "private static final class {name}Adapter implements {}<{name}, Builder> {{",
        runtime::ADAPTER,
    ))?;

    out.line("@Override")?;
    out.open(format!(
        "public void write({} protocol, {name} struct) throws java.io.IOException {{",
        runtime::PROTOCOL,
    ))?;
    out.line(format!("protocol.writeStructBegin(\"{name}\");"))?;
    for field in &struct_type.fields {
        let mut allocator = NameAllocator::new();
        allocator.reserve("protocol");
        allocator.reserve("struct");
        for f in &struct_type.fields {
            allocator.reserve(&f.name);
        }
        writer::emit_write_field(gen, out, &mut allocator, field).map_err(|e| {
            e.context(format!("field '{}' of '{name}'", field.name))
        })?;
    }
    out.line("protocol.writeFieldStop();")?;
    out.line("protocol.writeStructEnd();")?;
    out.close("}")?;

    out.blank()?;
    out.line("@Override")?;
    out.open(format!(
        "public {name} read({} protocol, Builder builder) throws java.io.IOException {{",
        runtime::PROTOCOL,
    ))?;
    out.line("protocol.readStructBegin();")?;
    out.open("while (true) {")?;
    out.line(format!("{} field = protocol.readFieldBegin();", runtime::FIELD_METADATA))?;
    out.open(format!("if (field.typeId == {}.STOP) {{", runtime::TTYPE))?;
    out.line("break;")?;
    out.close("}")?;
    out.open("switch (field.fieldId) {")?;
    for field in &struct_type.fields {
        let mut allocator = NameAllocator::new();
        allocator.reserve("protocol");
        allocator.reserve("builder");
        allocator.reserve("field");
        for f in &struct_type.fields {
            allocator.reserve(&f.name);
        }
        reader::emit_read_field(gen, out, &mut allocator, field).map_err(|e| {
            e.context(format!("field '{}' of '{name}'", field.name))
        })?;
    }
    out.open("default: {")?;
    out.line(format!("{}.skip(protocol, field.typeId);", runtime::PROTO_UTIL))?;
    out.close("}")?;
    out.line("break;")?;
    out.close("}")?;
    out.line("protocol.readFieldEnd();")?;
    out.close("}")?;
    out.line("return builder.build();")?;
    out.close("}")?;

    out.blank()?;
    out.line("@Override")?;
    out.open(format!(
        "public {name} read({} protocol) throws java.io.IOException {{",
        runtime::PROTOCOL,
    ))?;
    out.line("return read(protocol, new Builder());")?;
    out.close("}")?;

    out.close("}")?;
    Ok(())
}
