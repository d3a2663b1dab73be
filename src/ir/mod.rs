// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

mod const_value;
mod constant;
mod decl;
mod r#enum;
mod location;
mod schema;
mod r#struct;
mod r#type;

pub use self::const_value::*;
pub use self::constant::*;
pub use self::decl::*;
pub use self::location::*;
pub use self::r#enum::*;
pub use self::r#struct::*;
pub use self::r#type::*;
pub use self::schema::*;
