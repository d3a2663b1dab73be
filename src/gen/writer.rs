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

/// Emits the statements that write one field of `struct` to the protocol.
///
/// Optional fields are guarded by a null check; the field framing calls
/// bracket a recursive value write dispatched on the true type.
pub fn emit_write_field<W: Write>(
    gen: &Generator<'_>,
    out: &mut CodeWriter<W>,
    allocator: &mut NameAllocator,
    field: &Field,
) -> Result<(), GenError> {
    let name = &field.name;
    let code = gen.resolver().wire_code_of(&field.ty)?;

    if !field.required {
        out.open(format!("if (struct.{name} != null) {{"))?;
    }

    out.line(format!(
        "protocol.writeFieldBegin(\"{name}\", {}, {}.{});",
        field.id,
        runtime::TTYPE,
        code.type_name(),
    ))?;
    emit_write_value(gen, out, allocator, field.ty.true_type(), &format!("struct.{name}"))?;
    out.line("protocol.writeFieldEnd();")?;

    if !field.required {
        out.close("}")?;
    }
    Ok(())
}

/// Emits the statements that write one value of `ty` (already unwrapped to
/// its true type) to the protocol. `value` is the Java expression holding
/// the value.
pub fn emit_write_value<W: Write>(
    gen: &Generator<'_>,
    out: &mut CodeWriter<W>,
    allocator: &mut NameAllocator,
    ty: &ThriftType,
    value: &str,
) -> Result<(), GenError> {
    match ty {
        ThriftType::Bool => out.line(format!("protocol.writeBool({value});"))?,
        ThriftType::Byte => out.line(format!("protocol.writeByte({value});"))?,
        ThriftType::I16 => out.line(format!("protocol.writeI16({value});"))?,
        ThriftType::I32 => out.line(format!("protocol.writeI32({value});"))?,
        ThriftType::I64 => out.line(format!("protocol.writeI64({value});"))?,
        ThriftType::Double => out.line(format!("protocol.writeDouble({value});"))?,
        ThriftType::String => out.line(format!("protocol.writeString({value});"))?,
        ThriftType::Binary => out.line(format!("protocol.writeBinary({value});"))?,
        ThriftType::Enum { .. } => out.line(format!("protocol.writeI32({value}.code);"))?,
        ThriftType::List { element } => {
            let element = element.true_type();
            let element_code = gen.resolver().wire_code_of(element)?;
            let element_java = gen.resolver().java_type_of(gen.schema(), element)?;
            let item = allocator.allocate("item");

            out.line(format!(
                "protocol.writeListBegin({}.{}, {value}.size());",
                runtime::TTYPE,
                element_code.type_name(),
            ))?;
            out.open(format!("for ({element_java} {item} : {value}) {{"))?;
            emit_write_value(gen, out, allocator, element, &item)?;
            out.close("}")?;
            out.line("protocol.writeListEnd();")?;
        }
        ThriftType::Set { element } => {
            let element = element.true_type();
            let element_code = gen.resolver().wire_code_of(element)?;
            let element_java = gen.resolver().java_type_of(gen.schema(), element)?;
            let item = allocator.allocate("item");

            out.line(format!(
                "protocol.writeSetBegin({}.{}, {value}.size());",
                runtime::TTYPE,
                element_code.type_name(),
            ))?;
            out.open(format!("for ({element_java} {item} : {value}) {{"))?;
            emit_write_value(gen, out, allocator, element, &item)?;
            out.close("}")?;
            out.line("protocol.writeSetEnd();")?;
        }
        ThriftType::Map { key, value: val } => {
            let key = key.true_type();
            let val = val.true_type();
            let key_code = gen.resolver().wire_code_of(key)?;
            let val_code = gen.resolver().wire_code_of(val)?;
            let key_java = gen.resolver().java_type_of(gen.schema(), key)?;
            let val_java = gen.resolver().java_type_of(gen.schema(), val)?;
            let entry = allocator.allocate("entry");

            out.line(format!(
                "protocol.writeMapBegin({ttype}.{}, {ttype}.{}, {value}.size());",
                key_code.type_name(),
                val_code.type_name(),
                ttype = runtime::TTYPE,
            ))?;
            out.open(format!(
                "for (java.util.Map.Entry<{key_java}, {val_java}> {entry} : {value}.entrySet()) {{"
            ))?;
            emit_write_value(gen, out, allocator, key, &format!("{entry}.getKey()"))?;
            emit_write_value(gen, out, allocator, val, &format!("{entry}.getValue()"))?;
            out.close("}")?;
            out.line("protocol.writeMapEnd();")?;
        }
        ThriftType::Struct { .. } => {
            let class = gen.resolver().java_type_of(gen.schema(), ty)?;
            out.line(format!("{class}.ADAPTER.write(protocol, {value});"))?;
        }
        ThriftType::Void => {
            return Err(GenError::invariant("void cannot be written as a value"));
        }
        ThriftType::Typedef { alias, .. } => {
            return Err(GenError::invariant(format!(
                "typedef '{alias}' survived true-type resolution"
            )));
        }
    }
    Ok(())
}
