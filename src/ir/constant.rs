// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{ConstValue, Decl, Location, ThriftType};

#[derive(Clone, Debug, Deserialize)]
pub struct Constant {
    pub name: String,
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(rename = "type")]
    pub ty: ThriftType,
    pub value: ConstValue,
}

impl Decl for Constant {
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
