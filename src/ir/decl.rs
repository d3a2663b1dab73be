// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeMap;

use super::Location;

/// The namespace scope that names the generated Java package.
pub const JAVA_NAMESPACE: &str = "java";

/// Shared surface of every named schema declaration.
pub trait Decl {
    fn name(&self) -> &str;
    fn namespaces(&self) -> &BTreeMap<String, String>;
    fn doc(&self) -> Option<&str>;
    fn location(&self) -> &Location;

    fn namespace_for(&self, scope: &str) -> Option<&str> {
        self.namespaces().get(scope).map(String::as_str)
    }

    fn java_package(&self) -> Option<&str> {
        self.namespace_for(JAVA_NAMESPACE).filter(|p| !p.is_empty())
    }
}
