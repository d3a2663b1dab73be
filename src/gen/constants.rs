// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::io::Write;

use crate::error::GenError;
use crate::ir::Constant;

use super::code::CodeWriter;
use super::names::NameAllocator;
use super::resolver::unboxed_name;
use super::util::emit_javadoc;
use super::{consts, Generator};

/// Emits the uninstantiable `Constants` holder for one output package.
///
/// Scalar and enum constants are initialized inline; collection constants
/// are declared first and filled in a single static block, in schema
/// order.
pub fn emit_constants<W: Write>(
    gen: &Generator<'_>,
    out: &mut CodeWriter<W>,
    constants: &[&Constant],
) -> Result<(), GenError> {
    out.open("public final class Constants {")?;

    let mut allocator = NameAllocator::new();
    allocator.reserve("Constants");
    for constant in constants {
        allocator.reserve(&constant.name);
    }

    let mut needs_static_init = Vec::new();
    for (i, constant) in constants.iter().enumerate() {
        if i > 0 {
            out.blank()?;
        }
        emit_javadoc(out, constant.doc.as_deref())?;

        let true_type = constant.ty.true_type();
        let declared = match unboxed_name(true_type) {
            Some(primitive) => primitive.to_string(),
            None => gen
                .resolver()
                .java_type_of(gen.schema(), true_type)
                .map_err(|e| e.context(format!("constant '{}'", constant.name)))?
                .to_string(),
        };

        if true_type.is_collection() {
            out.line(format!("public static final {declared} {};", constant.name))?;
            needs_static_init.push(*constant);
        } else {
            let expr = consts::render_expr(gen, true_type, &constant.value)
                .map_err(|e| e.context(format!("constant '{}'", constant.name)))?;
            out.line(format!("public static final {declared} {} = {expr};", constant.name))?;
        }
    }

    if !needs_static_init.is_empty() {
        out.blank()?;
        out.open("static {")?;
        for constant in needs_static_init {
            consts::emit_init(
                gen,
                out,
                &mut allocator,
                &constant.name,
                constant.ty.true_type(),
                &constant.value,
            )
            .map_err(|e| e.context(format!("constant '{}'", constant.name)))?;
        }
        out.close("}")?;
    }

    out.blank()?;
    out.open("private Constants() {")?;
    out.line("// no instances")?;
    out.close("}")?;

    out.close("}")?;
    Ok(())
}
