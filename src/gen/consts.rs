// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::io::Write;

use crate::error::GenError;
use crate::ir::{ConstValue, ThriftType};

use super::code::CodeWriter;
use super::names::NameAllocator;
use super::util::escape_java_string;
use super::Generator;

/// Renders a constant as a single Java initializer expression.
///
/// Only scalars, strings, and enum members fit in an expression; callers
/// route collections through [`emit_init`] instead.
pub fn render_expr(
    gen: &Generator<'_>,
    ty: &ThriftType,
    value: &ConstValue,
) -> Result<String, GenError> {
    match ty.true_type() {
        ThriftType::Bool => render_bool(value),
        ThriftType::Byte => Ok(format!("(byte) {}", int_of(ty, value)?)),
        ThriftType::I16 => Ok(format!("(short) {}", int_of(ty, value)?)),
        ThriftType::I32 => Ok(format!("{}", int_of(ty, value)?)),
        ThriftType::I64 => Ok(format!("{}", int_of(ty, value)?)),
        ThriftType::Double => match value.as_double() {
            Some(d) => Ok(format!("(double) {d}")),
            None => Err(kind_mismatch(ty, value)),
        },
        ThriftType::String => match value.as_str() {
            Some(s) => Ok(format!("\"{}\"", escape_java_string(s))),
            None => Err(kind_mismatch(ty, value)),
        },
        ThriftType::Binary => Err(GenError::unsupported("binary literals")),
        ThriftType::Void => Err(GenError::unsupported("void literals")),
        tt @ ThriftType::Enum { name } => render_enum_member(gen, tt, name, value),
        ThriftType::List { .. } | ThriftType::Set { .. } | ThriftType::Map { .. } => {
            Err(GenError::unsupported(format!(
                "nested {} constants",
                ty.true_type().describe()
            )))
        }
        ThriftType::Struct { name } => Err(GenError::unsupported(format!(
            "struct-typed constant values ('{name}')"
        ))),
        ThriftType::Typedef { alias, .. } => Err(GenError::invariant(format!(
            "typedef '{alias}' survived true-type resolution"
        ))),
    }
}

fn render_bool(value: &ConstValue) -> Result<String, GenError> {
    match value {
        ConstValue::Identifier(name) => {
            Ok(if name == "true" { "true" } else { "false" }.to_string())
        }
        // The IDL accepts integer booleans; non-zero means true.
        ConstValue::Int(n) => Ok(if *n == 0 { "false" } else { "true" }.to_string()),
        _ => Err(GenError::invariant(format!(
            "invalid boolean constant of kind {}",
            value.kind()
        ))),
    }
}

fn render_enum_member(
    gen: &Generator<'_>,
    ty: &ThriftType,
    enum_name: &str,
    value: &ConstValue,
) -> Result<String, GenError> {
    let enum_type = gen
        .schema()
        .enum_for(ty)
        .ok_or_else(|| GenError::schema(format!("missing enum type '{enum_name}'")))?;

    // An integer id wins over a member name when the value is an integer.
    let member = match value {
        ConstValue::Int(id) => enum_type.member_by_id(*id),
        ConstValue::Identifier(name) => enum_type.member_by_name(name),
        _ => {
            return Err(GenError::invariant(format!(
                "constant value kind {} cannot name an enum member",
                value.kind()
            )))
        }
    };
    let member = member.ok_or_else(|| {
        GenError::schema(format!(
            "No enum member in {} with value {value:?}",
            enum_type.name
        ))
    })?;

    let class = gen.resolver().java_type_of(gen.schema(), ty)?;
    Ok(format!("{class}.{}", member.name))
}

fn int_of(ty: &ThriftType, value: &ConstValue) -> Result<i64, GenError> {
    value.as_int().ok_or_else(|| kind_mismatch(ty, value))
}

fn kind_mismatch(ty: &ThriftType, value: &ConstValue) -> GenError {
    GenError::invariant(format!(
        "invalid {} constant of kind {}",
        ty.true_type().describe(),
        value.kind()
    ))
}

/// Emits the initializer statements assigning a constant to `target`.
///
/// Scalar and enum constants assign a single expression; collections
/// allocate a concrete container sized to the element count and add each
/// element through [`render_expr`].
pub fn emit_init<W: Write>(
    gen: &Generator<'_>,
    out: &mut CodeWriter<W>,
    allocator: &mut NameAllocator,
    target: &str,
    ty: &ThriftType,
    value: &ConstValue,
) -> Result<(), GenError> {
    match ty.true_type() {
        ThriftType::List { element } => {
            let ConstValue::List(items) = value else {
                return Err(kind_mismatch(ty, value));
            };
            let element = element.true_type();
            let element_java = gen.resolver().java_type_of(gen.schema(), element)?;
            let impl_ty = gen.resolver().list_of(element_java.clone());

            if items.is_empty() {
                out.line(format!("{target} = new {impl_ty}();"))?;
            } else {
                let local = allocator.allocate("list");
                out.line(format!(
                    "java.util.List<{element_java}> {local} = new {impl_ty}({});",
                    items.len()
                ))?;
                for item in items {
                    let expr = render_expr(gen, element, item)?;
                    out.line(format!("{local}.add({expr});"))?;
                }
                out.line(format!("{target} = {local};"))?;
            }
            Ok(())
        }
        ThriftType::Set { element } => {
            let ConstValue::List(items) = value else {
                return Err(kind_mismatch(ty, value));
            };
            let element = element.true_type();
            let element_java = gen.resolver().java_type_of(gen.schema(), element)?;
            let impl_ty = gen.resolver().set_of(element_java.clone());

            if items.is_empty() {
                out.line(format!("{target} = new {impl_ty}();"))?;
            } else {
                let local = allocator.allocate("set");
                out.line(format!(
                    "java.util.Set<{element_java}> {local} = new {impl_ty}({});",
                    items.len()
                ))?;
                for item in items {
                    let expr = render_expr(gen, element, item)?;
                    out.line(format!("{local}.add({expr});"))?;
                }
                out.line(format!("{target} = {local};"))?;
            }
            Ok(())
        }
        ThriftType::Map { key, value: val } => {
            let ConstValue::Map(entries) = value else {
                return Err(kind_mismatch(ty, value));
            };
            let key = key.true_type();
            let val = val.true_type();
            let key_java = gen.resolver().java_type_of(gen.schema(), key)?;
            let val_java = gen.resolver().java_type_of(gen.schema(), val)?;
            let impl_ty = gen.resolver().map_of(key_java.clone(), val_java.clone());

            if entries.is_empty() {
                out.line(format!("{target} = new {impl_ty}();"))?;
            } else {
                let local = allocator.allocate("map");
                out.line(format!(
                    "java.util.Map<{key_java}, {val_java}> {local} = new {impl_ty}({});",
                    entries.len()
                ))?;
                for (k, v) in entries {
                    let key_expr = render_expr(gen, key, k)?;
                    let val_expr = render_expr(gen, val, v)?;
                    out.line(format!("{local}.put({key_expr}, {val_expr});"))?;
                }
                out.line(format!("{target} = {local};"))?;
            }
            Ok(())
        }
        ThriftType::Struct { name } => Err(GenError::unsupported(format!(
            "struct-typed default values are not yet implemented ('{name}')"
        ))),
        _ => {
            let expr = render_expr(gen, ty, value)?;
            out.line(format!("{target} = {expr};"))?;
            Ok(())
        }
    }
}
