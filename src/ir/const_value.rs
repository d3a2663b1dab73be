// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use serde::Deserialize;

/// A constant value as written in the IDL.
///
/// Identifiers are unresolved names: either `true`/`false` for booleans or
/// an enum member name. Map entries preserve declaration order.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ConstValue {
    Int(i64),
    Double(f64),
    String(String),
    Identifier(String),
    List(Vec<ConstValue>),
    Map(Vec<(ConstValue, ConstValue)>),
}

impl ConstValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConstValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            ConstValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            ConstValue::Identifier(s) => Some(s),
            _ => None,
        }
    }

    /// A short name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConstValue::Int(_) => "integer",
            ConstValue::Double(_) => "double",
            ConstValue::String(_) => "string",
            ConstValue::Identifier(_) => "identifier",
            ConstValue::List(_) => "list",
            ConstValue::Map(_) => "map",
        }
    }
}
