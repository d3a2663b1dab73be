// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{ConstValue, Decl, Location, ThriftType};

/// Distinguishes the three struct-shaped declaration forms.
#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StructKind {
    Struct,
    Union,
    Exception,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StructType {
    pub name: String,
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub location: Location,
    pub kind: StructKind,
    pub fields: Vec<Field>,
}

impl StructType {
    pub fn is_union(&self) -> bool {
        self.kind == StructKind::Union
    }

    pub fn is_exception(&self) -> bool {
        self.kind == StructKind::Exception
    }
}

impl Decl for StructType {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespaces(&self) -> &BTreeMap<String, String> {
        &self.namespaces
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn location(&self) -> &Location {
        &self.location
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Field {
    pub id: i16,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ThriftType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<ConstValue>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Field {
    /// The typedef alias this field was declared through, if any.
    pub fn typedef_name(&self) -> Option<&str> {
        match &self.ty {
            ThriftType::Typedef { alias, .. } => Some(alias),
            _ => None,
        }
    }
}
