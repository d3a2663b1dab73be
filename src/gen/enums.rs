// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::io::Write;

use crate::error::GenError;
use crate::ir::{Decl, EnumType};

use super::code::CodeWriter;
use super::util::emit_javadoc;
use super::Generator;

/// Emits the Java enum for a Thrift enum declaration.
///
/// Each member carries its declared numeric value in a final `code` field;
/// `fromCode` maps an incoming code back to the member, or null when the
/// code is unknown.
pub fn emit_enum<W: Write>(
    gen: &Generator<'_>,
    out: &mut CodeWriter<W>,
    enum_type: &EnumType,
) -> Result<(), GenError> {
    let name = &enum_type.name;

    emit_javadoc(out, enum_type.doc())?;
    gen.emit_generated_annotation(out)?;
    out.open(format!("public enum {name} {{"))?;

    for (i, member) in enum_type.members.iter().enumerate() {
        emit_javadoc(out, member.doc.as_deref())?;
        let terminator = if i + 1 == enum_type.members.len() { ';' } else { ',' };
        out.line(format!("{}({}){terminator}", member.name, member.value))?;
    }
    if enum_type.members.is_empty() {
        out.line(";")?;
    }

    out.blank()?;
    out.line("public final int code;")?;
    out.blank()?;
    out.open(format!("{name}(int code) {{"))?;
    out.line("this.code = code;")?;
    out.close("}")?;
    out.blank()?;
    out.open(format!("public static {name} fromCode(int code) {{"))?;
    out.open("switch (code) {")?;
    for member in &enum_type.members {
        out.line(format!("case {}: return {};", member.value, member.name))?;
    }
    out.line("default: return null;")?;
    out.close("}")?;
    out.close("}")?;
    out.close("}")?;
    Ok(())
}
