// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use serde::Deserialize;

/// A resolved Thrift type reference.
///
/// Typedefs carry their resolved target inline, so unwrapping a chain of
/// aliases never needs to consult the schema. The linker guarantees that
/// typedef chains are acyclic.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThriftType {
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
    Void,
    Enum {
        name: String,
    },
    List {
        element: Box<ThriftType>,
    },
    Set {
        element: Box<ThriftType>,
    },
    Map {
        key: Box<ThriftType>,
        value: Box<ThriftType>,
    },
    Struct {
        name: String,
    },
    Typedef {
        alias: String,
        target: Box<ThriftType>,
    },
}

impl ThriftType {
    /// The type obtained by transitively unwrapping all typedefs.
    pub fn true_type(&self) -> &ThriftType {
        let mut ty = self;
        while let ThriftType::Typedef { target, .. } = ty {
            ty = target;
        }
        ty
    }

    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            ThriftType::List { .. } | ThriftType::Set { .. } | ThriftType::Map { .. }
        )
    }

    /// A short name for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            ThriftType::Bool => "bool",
            ThriftType::Byte => "byte",
            ThriftType::I16 => "i16",
            ThriftType::I32 => "i32",
            ThriftType::I64 => "i64",
            ThriftType::Double => "double",
            ThriftType::String => "string",
            ThriftType::Binary => "binary",
            ThriftType::Void => "void",
            ThriftType::Enum { .. } => "enum",
            ThriftType::List { .. } => "list",
            ThriftType::Set { .. } => "set",
            ThriftType::Map { .. } => "map",
            ThriftType::Struct { .. } => "struct",
            ThriftType::Typedef { .. } => "typedef",
        }
    }
}
