// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Java code generator for resolved Thrift schemas.
//!
//! Given a fully resolved schema, [`Generator`] emits one Java
//! compilation unit per enum, struct, exception, and union, plus one
//! constant holder per output package. Each struct's unit contains an
//! immutable value class, a validating `Builder`, and a hidden `Adapter`
//! that reads and writes the Thrift field-framing protocol through the
//! Thrifty runtime's `Protocol` abstraction.
//!
//! Parsing and linking `.thrift` IDL is out of scope; the schema arrives
//! already validated, typically as a JSON IR document.

pub mod error;
pub mod gen;
pub mod ir;

pub use self::error::GenError;
pub use self::gen::{
    CompilationUnit, DirectorySink, Generator, Sink, WriterSink, FILE_COMMENT,
};
