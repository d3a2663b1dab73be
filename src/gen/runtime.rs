// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Fully qualified names of the Thrifty runtime types that generated code
//! links against. The generator itself never touches these classes; it
//! only writes references to them.

pub const ADAPTER: &str = "com.bendb.thrifty.Adapter";
pub const STRUCT_BUILDER: &str = "com.bendb.thrifty.StructBuilder";
pub const THRIFT_FIELD: &str = "com.bendb.thrifty.ThriftField";
pub const TTYPE: &str = "com.bendb.thrifty.TType";

pub const PROTOCOL: &str = "com.bendb.thrifty.protocol.Protocol";
pub const FIELD_METADATA: &str = "com.bendb.thrifty.protocol.FieldMetadata";
pub const LIST_METADATA: &str = "com.bendb.thrifty.protocol.ListMetadata";
pub const SET_METADATA: &str = "com.bendb.thrifty.protocol.SetMetadata";
pub const MAP_METADATA: &str = "com.bendb.thrifty.protocol.MapMetadata";
pub const PROTO_UTIL: &str = "com.bendb.thrifty.util.ProtoUtil";

pub const BYTE_STRING: &str = "okio.ByteString";
pub const COLLECTIONS: &str = "java.util.Collections";
pub const GENERATED: &str = "javax.annotation.Generated";
