// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Decl, Location};

#[derive(Clone, Debug, Deserialize)]
pub struct EnumType {
    pub name: String,
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub location: Location,
    pub members: Vec<EnumMember>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: i32,
    #[serde(default)]
    pub doc: Option<String>,
}

impl EnumType {
    pub fn member_by_id(&self, id: i64) -> Option<&EnumMember> {
        self.members.iter().find(|m| i64::from(m.value) == id)
    }

    pub fn member_by_name(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }
}

impl Decl for EnumType {
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
