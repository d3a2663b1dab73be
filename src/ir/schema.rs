// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use serde::Deserialize;

use super::{Constant, Decl, EnumType, StructType, ThriftType};

/// A fully resolved and validated Thrift schema.
///
/// Declaration lists preserve schema order; generation iterates them in
/// that order so output is stable run to run.
#[derive(Debug, Default, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub enums: Vec<EnumType>,
    #[serde(default)]
    pub structs: Vec<StructType>,
    #[serde(default)]
    pub exceptions: Vec<StructType>,
    #[serde(default)]
    pub unions: Vec<StructType>,
    #[serde(default)]
    pub constants: Vec<Constant>,
}

impl Schema {
    /// Looks up the enum declaration behind an `enum` type reference.
    pub fn enum_for(&self, ty: &ThriftType) -> Option<&EnumType> {
        match ty {
            ThriftType::Enum { name } => self.enums.iter().find(|e| e.name == *name),
            _ => None,
        }
    }

    /// Looks up any user-defined declaration by name.
    pub fn get_decl(&self, name: &str) -> Option<&dyn Decl> {
        if let Some(e) = self.enums.iter().find(|e| e.name == name) {
            return Some(e);
        }
        self.structs
            .iter()
            .chain(&self.exceptions)
            .chain(&self.unions)
            .find(|s| s.name == name)
            .map(|s| s as &dyn Decl)
    }
}
