// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::io::Write;

use crate::error::GenError;
use crate::ir::{Field, ThriftType};

use super::code::CodeWriter;
use super::names::NameAllocator;
use super::runtime;
use super::Generator;

/// Emits one `case` of the adapter's field-reading switch.
///
/// The received wire type is validated against the declared code; on a
/// mismatch the value is skipped and the field left unassigned.
pub fn emit_read_field<W: Write>(
    gen: &Generator<'_>,
    out: &mut CodeWriter<W>,
    allocator: &mut NameAllocator,
    field: &Field,
) -> Result<(), GenError> {
    let code = gen.resolver().wire_code_of(&field.ty)?;

    out.open(format!("case {}: {{", field.id))?;
    out.open(format!(
        "if (field.typeId == {}.{}) {{",
        runtime::TTYPE,
        code.type_name(),
    ))?;
    let value = emit_read_value(gen, out, allocator, field.ty.true_type())?;
    out.line(format!("builder.{}({value});", field.name))?;
    out.next("} else {")?;
    out.line(format!("{}.skip(protocol, field.typeId);", runtime::PROTO_UTIL))?;
    out.close("}")?;
    out.close("}")?;
    out.line("break;")?;
    Ok(())
}

/// Emits the statements that read one value of `ty` (already unwrapped to
/// its true type) from the protocol, and returns the name of the local
/// holding it.
pub fn emit_read_value<W: Write>(
    gen: &Generator<'_>,
    out: &mut CodeWriter<W>,
    allocator: &mut NameAllocator,
    ty: &ThriftType,
) -> Result<String, GenError> {
    let name = allocator.allocate("value");
    match ty {
        ThriftType::Bool => out.line(format!("Boolean {name} = protocol.readBool();"))?,
        ThriftType::Byte => out.line(format!("Byte {name} = protocol.readByte();"))?,
        ThriftType::I16 => out.line(format!("Short {name} = protocol.readI16();"))?,
        ThriftType::I32 => out.line(format!("Integer {name} = protocol.readI32();"))?,
        ThriftType::I64 => out.line(format!("Long {name} = protocol.readI64();"))?,
        ThriftType::Double => out.line(format!("Double {name} = protocol.readDouble();"))?,
        ThriftType::String => out.line(format!("String {name} = protocol.readString();"))?,
        ThriftType::Binary => out.line(format!(
            "{} {name} = protocol.readBinary();",
            runtime::BYTE_STRING,
        ))?,
        ThriftType::Enum { .. } => {
            let class = gen.resolver().java_type_of(gen.schema(), ty)?;
            out.line(format!("{class} {name} = {class}.fromCode(protocol.readI32());"))?;
        }
        ThriftType::Struct { .. } => {
            let class = gen.resolver().java_type_of(gen.schema(), ty)?;
            out.line(format!("{class} {name} = {class}.ADAPTER.read(protocol);"))?;
        }
        ThriftType::List { element } => {
            let element = element.true_type();
            let element_java = gen.resolver().java_type_of(gen.schema(), element)?;
            let impl_ty = gen.resolver().list_of(element_java.clone());
            let metadata = allocator.allocate("listMetadata");
            let i = allocator.allocate("i");

            out.line(format!(
                "{} {metadata} = protocol.readListBegin();",
                runtime::LIST_METADATA,
            ))?;
            out.line(format!(
                "java.util.List<{element_java}> {name} = new {impl_ty}({metadata}.size);"
            ))?;
            out.open(format!("for (int {i} = 0; {i} < {metadata}.size; ++{i}) {{"))?;
            let item = emit_read_value(gen, out, allocator, element)?;
            out.line(format!("{name}.add({item});"))?;
            out.close("}")?;
            out.line("protocol.readListEnd();")?;
        }
        ThriftType::Set { element } => {
            let element = element.true_type();
            let element_java = gen.resolver().java_type_of(gen.schema(), element)?;
            let impl_ty = gen.resolver().set_of(element_java.clone());
            let metadata = allocator.allocate("setMetadata");
            let i = allocator.allocate("i");

            out.line(format!(
                "{} {metadata} = protocol.readSetBegin();",
                runtime::SET_METADATA,
            ))?;
            out.line(format!(
                "java.util.Set<{element_java}> {name} = new {impl_ty}({metadata}.size);"
            ))?;
            out.open(format!("for (int {i} = 0; {i} < {metadata}.size; ++{i}) {{"))?;
            let item = emit_read_value(gen, out, allocator, element)?;
            out.line(format!("{name}.add({item});"))?;
            out.close("}")?;
            out.line("protocol.readSetEnd();")?;
        }
        ThriftType::Map { key, value } => {
            let key = key.true_type();
            let value_ty = value.true_type();
            let key_java = gen.resolver().java_type_of(gen.schema(), key)?;
            let val_java = gen.resolver().java_type_of(gen.schema(), value_ty)?;
            let impl_ty = gen.resolver().map_of(key_java.clone(), val_java.clone());
            let metadata = allocator.allocate("mapMetadata");
            let i = allocator.allocate("i");

            out.line(format!(
                "{} {metadata} = protocol.readMapBegin();",
                runtime::MAP_METADATA,
            ))?;
            out.line(format!(
                "java.util.Map<{key_java}, {val_java}> {name} = new {impl_ty}({metadata}.size);"
            ))?;
            out.open(format!("for (int {i} = 0; {i} < {metadata}.size; ++{i}) {{"))?;
            let key_local = emit_read_value(gen, out, allocator, key)?;
            let val_local = emit_read_value(gen, out, allocator, value_ty)?;
            out.line(format!("{name}.put({key_local}, {val_local});"))?;
            out.close("}")?;
            out.line("protocol.readMapEnd();")?;
        }
        ThriftType::Void => {
            return Err(GenError::invariant("void cannot be read as a value"));
        }
        ThriftType::Typedef { alias, .. } => {
            return Err(GenError::invariant(format!(
                "typedef '{alias}' survived true-type resolution"
            )));
        }
    }
    Ok(name)
}
