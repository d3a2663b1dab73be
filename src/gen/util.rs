// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::io::{Error, Write};

use super::code::CodeWriter;

/// Escapes a string for inclusion in a Java string literal (without the
/// surrounding quotes).
pub fn escape_java_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Emits a javadoc block when the declaration carries documentation.
pub fn emit_javadoc<W: Write>(out: &mut CodeWriter<W>, doc: Option<&str>) -> Result<(), Error> {
    let Some(doc) = doc else {
        return Ok(());
    };

    out.line("/**")?;
    for line in doc.trim_end().lines() {
        if line.is_empty() {
            out.line(" *")?;
        } else {
            out.line(format!(" * {line}"))?;
        }
    }
    out.line(" */")
}
