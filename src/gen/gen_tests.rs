// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! End-to-end generator tests over small hand-built schemas.

use std::collections::BTreeMap;

use indoc::indoc;
use pretty_assertions::assert_eq;

use crate::gen::{Generator, WriterSink};
use crate::ir::{
    ConstValue, Constant, EnumMember, EnumType, Field, Location, Schema, StructKind, StructType,
    ThriftType,
};

fn java_namespace(package: &str) -> BTreeMap<String, String> {
    let mut namespaces = BTreeMap::new();
    namespaces.insert("java".to_string(), package.to_string());
    namespaces
}

fn location(path: &str) -> Location {
    Location { path: path.to_string(), line: 1, column: 1 }
}

fn field(id: i16, name: &str, ty: ThriftType, required: bool) -> Field {
    Field { id, name: name.to_string(), ty, required, default: None, doc: None }
}

fn struct_type(name: &str, kind: StructKind, fields: Vec<Field>) -> StructType {
    StructType {
        name: name.to_string(),
        namespaces: java_namespace("com.test"),
        doc: None,
        location: location("test.thrift"),
        kind,
        fields,
    }
}

fn point_schema() -> Schema {
    Schema {
        structs: vec![struct_type(
            "Point",
            StructKind::Struct,
            vec![
                field(1, "x", ThriftType::I32, true),
                field(2, "y", ThriftType::I32, true),
            ],
        )],
        ..Schema::default()
    }
}

fn generate(schema: &Schema) -> String {
    let generator = Generator::new(schema);
    let mut sink = WriterSink::new(Vec::new());
    generator.generate(&mut sink).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

#[test]
fn point_struct_generates_value_builder_and_adapter() {
    let expected = indoc! {r#"
        // Automatically generated by the Thrifty compiler; do not edit!
        // Source: test.thrift at 1:1
        package com.test;

        public final class Point {
          public static final com.bendb.thrifty.Adapter<Point, Point.Builder> ADAPTER = new PointAdapter();

          @com.bendb.thrifty.ThriftField(fieldId = 1, isRequired = true)
          public final Integer x;

          @com.bendb.thrifty.ThriftField(fieldId = 2, isRequired = true)
          public final Integer y;

          private Point(Builder builder) {
            this.x = builder.x;
            this.y = builder.y;
          }

          @Override
          public boolean equals(Object other) {
            if (this == other) return true;
            if (other == null) return false;
            if (!(other instanceof Point)) return false;
            Point that = (Point) other;
            return (this.x == that.x || (this.x != null && this.x.equals(that.x)))
                && (this.y == that.y || (this.y != null && this.y.equals(that.y)));
          }

          @Override
          public int hashCode() {
            int code = 16777619;
            code ^= (this.x == null) ? 0 : this.x.hashCode();
            code *= 0x811c9dc5;
            code ^= (this.y == null) ? 0 : this.y.hashCode();
            code *= 0x811c9dc5;
            return code;
          }

          @Override
          public String toString() {
            StringBuilder sb = new StringBuilder();
            sb.append("Point").append("{\n  ");
            sb.append("x=");
            sb.append(this.x == null ? "null" : this.x);
            sb.append(",\n  ");
            sb.append("y=");
            sb.append(this.y == null ? "null" : this.y);
            sb.append("\n}");
            return sb.toString();
          }

          public static final class Builder implements com.bendb.thrifty.StructBuilder<Point> {
            private Integer x;

            private Integer y;

            public Builder() {
            }

            public Builder(Point struct) {
              this.x = struct.x;
              this.y = struct.y;
            }

            public Builder x(Integer x) {
              if (x == null) {
                throw new NullPointerException("Required field 'x' cannot be null");
              }
              this.x = x;
              return this;
            }

            public Builder y(Integer y) {
              if (y == null) {
                throw new NullPointerException("Required field 'y' cannot be null");
              }
              this.y = y;
              return this;
            }

            @Override
            public Point build() {
              if (this.x == null) {
                throw new IllegalStateException("Required field 'x' is missing");
              }
              if (this.y == null) {
                throw new IllegalStateException("Required field 'y' is missing");
              }
              return new Point(this);
            }

            @Override
            public void reset() {
              this.x = null;
              this.y = null;
            }
          }

          private static final class PointAdapter implements com.bendb.thrifty.Adapter<Point, Builder> {
            @Override
            public void write(com.bendb.thrifty.protocol.Protocol protocol, Point struct) throws java.io.IOException {
              protocol.writeStructBegin("Point");
              protocol.writeFieldBegin("x", 1, com.bendb.thrifty.TType.I32);
              protocol.writeI32(struct.x);
              protocol.writeFieldEnd();
              protocol.writeFieldBegin("y", 2, com.bendb.thrifty.TType.I32);
              protocol.writeI32(struct.y);
              protocol.writeFieldEnd();
              protocol.writeFieldStop();
              protocol.writeStructEnd();
            }

            @Override
            public Point read(com.bendb.thrifty.protocol.Protocol protocol, Builder builder) throws java.io.IOException {
              protocol.readStructBegin();
              while (true) {
                com.bendb.thrifty.protocol.FieldMetadata field = protocol.readFieldBegin();
                if (field.typeId == com.bendb.thrifty.TType.STOP) {
                  break;
                }
                switch (field.fieldId) {
                  case 1: {
                    if (field.typeId == com.bendb.thrifty.TType.I32) {
                      Integer value = protocol.readI32();
                      builder.x(value);
                    } else {
                      com.bendb.thrifty.util.ProtoUtil.skip(protocol, field.typeId);
                    }
                  }
                  break;
                  case 2: {
                    if (field.typeId == com.bendb.thrifty.TType.I32) {
                      Integer value = protocol.readI32();
                      builder.y(value);
                    } else {
                      com.bendb.thrifty.util.ProtoUtil.skip(protocol, field.typeId);
                    }
                  }
                  break;
                  default: {
                    com.bendb.thrifty.util.ProtoUtil.skip(protocol, field.typeId);
                  }
                  break;
                }
                protocol.readFieldEnd();
              }
              return builder.build();
            }

            @Override
            public Point read(com.bendb.thrifty.protocol.Protocol protocol) throws java.io.IOException {
              return read(protocol, new Builder());
            }
          }
        }

    "#};

    assert_eq!(generate(&point_schema()), expected);
}

#[test]
fn unions_enforce_single_field_arity_at_build_time() {
    let schema = Schema {
        unions: vec![struct_type(
            "Either",
            StructKind::Union,
            vec![
                field(1, "left", ThriftType::I32, false),
                field(2, "right", ThriftType::String, false),
            ],
        )],
        ..Schema::default()
    };

    let code = generate(&schema);
    assert!(code.contains("int setFields = 0;"), "{code}");
    assert!(code.contains("if (this.left != null) ++setFields;"), "{code}");
    assert!(code.contains("if (this.right != null) ++setFields;"), "{code}");
    assert!(
        code.contains(
            "throw new IllegalStateException(\"Invalid union; \" + setFields + \" field(s) were set\");"
        ),
        "{code}",
    );
    // Union fields are not required, so setters carry no null check.
    assert!(!code.contains("NullPointerException"), "{code}");
}

#[test]
fn exceptions_extend_the_java_base_exception() {
    let schema = Schema {
        exceptions: vec![struct_type(
            "NotFound",
            StructKind::Exception,
            vec![field(1, "message", ThriftType::String, false)],
        )],
        ..Schema::default()
    };

    let code = generate(&schema);
    assert!(code.contains("public final class NotFound extends Exception {"), "{code}");
}

#[test]
fn optional_fields_write_behind_a_null_guard() {
    let schema = Schema {
        structs: vec![struct_type(
            "Msg",
            StructKind::Struct,
            vec![field(1, "body", ThriftType::String, false)],
        )],
        ..Schema::default()
    };

    let code = generate(&schema);
    assert!(code.contains("if (struct.body != null) {"), "{code}");
    // Optional setters accept null.
    assert!(!code.contains("NullPointerException"), "{code}");
    // Optional collections stay null through the value constructor; plain
    // optionals assign straight through.
    assert!(code.contains("this.body = builder.body;"), "{code}");
}

#[test]
fn collection_fields_are_wrapped_in_unmodifiable_views() {
    let schema = Schema {
        structs: vec![struct_type(
            "Bag",
            StructKind::Struct,
            vec![
                field(
                    1,
                    "items",
                    ThriftType::List { element: Box::new(ThriftType::String) },
                    true,
                ),
                field(
                    2,
                    "tags",
                    ThriftType::Set { element: Box::new(ThriftType::String) },
                    false,
                ),
            ],
        )],
        ..Schema::default()
    };

    let code = generate(&schema);
    assert!(
        code.contains("this.items = java.util.Collections.unmodifiableList(builder.items);"),
        "{code}",
    );
    assert!(
        code.contains(
            "this.tags = builder.tags == null ? null : java.util.Collections.unmodifiableSet(builder.tags);"
        ),
        "{code}",
    );
}

#[test]
fn typedef_fields_unwrap_and_record_the_alias() {
    let schema = Schema {
        structs: vec![struct_type(
            "User",
            StructKind::Struct,
            vec![field(
                1,
                "id",
                ThriftType::Typedef {
                    alias: "UserId".to_string(),
                    target: Box::new(ThriftType::I64),
                },
                true,
            )],
        )],
        ..Schema::default()
    };

    let code = generate(&schema);
    assert!(
        code.contains(
            "@com.bendb.thrifty.ThriftField(fieldId = 1, isRequired = true, typedefName = \"UserId\")"
        ),
        "{code}",
    );
    assert!(code.contains("public final Long id;"), "{code}");
    assert!(code.contains("protocol.writeI64(struct.id);"), "{code}");
}

#[test]
fn struct_fields_delegate_to_the_referenced_adapter() {
    let mut schema = point_schema();
    schema.structs.push(struct_type(
        "Segment",
        StructKind::Struct,
        vec![
            field(1, "start", ThriftType::Struct { name: "Point".to_string() }, true),
            field(2, "end", ThriftType::Struct { name: "Point".to_string() }, true),
        ],
    ));

    let code = generate(&schema);
    assert!(code.contains("com.test.Point.ADAPTER.write(protocol, struct.start);"), "{code}");
    assert!(
        code.contains("com.test.Point value = com.test.Point.ADAPTER.read(protocol);"),
        "{code}",
    );
}

#[test]
fn enum_fields_write_their_code_and_read_through_from_code() {
    let schema = Schema {
        enums: vec![EnumType {
            name: "Color".to_string(),
            namespaces: java_namespace("com.test"),
            doc: None,
            location: location("test.thrift"),
            members: vec![
                EnumMember { name: "RED".to_string(), value: 1, doc: None },
                EnumMember { name: "GREEN".to_string(), value: 2, doc: None },
            ],
        }],
        structs: vec![struct_type(
            "Pixel",
            StructKind::Struct,
            vec![field(1, "color", ThriftType::Enum { name: "Color".to_string() }, true)],
        )],
        ..Schema::default()
    };

    let code = generate(&schema);
    // Enums travel as i32 on the wire.
    assert!(
        code.contains("protocol.writeFieldBegin(\"color\", 1, com.bendb.thrifty.TType.I32);"),
        "{code}",
    );
    assert!(code.contains("protocol.writeI32(struct.color.code);"), "{code}");
    assert!(
        code.contains("com.test.Color value = com.test.Color.fromCode(protocol.readI32());"),
        "{code}",
    );
}

#[test]
fn list_constant_emits_holder_with_static_initializer() {
    let schema = Schema {
        constants: vec![Constant {
            name: "xs".to_string(),
            namespaces: java_namespace("com.test"),
            doc: None,
            location: location("test.thrift"),
            ty: ThriftType::List { element: Box::new(ThriftType::I32) },
            value: ConstValue::List(vec![
                ConstValue::Int(1),
                ConstValue::Int(2),
                ConstValue::Int(3),
            ]),
        }],
        ..Schema::default()
    };

    let expected = indoc! {r#"
        // Automatically generated by the Thrifty compiler; do not edit!
        package com.test;

        public final class Constants {
          public static final java.util.List<Integer> xs;

          static {
            java.util.List<Integer> list = new java.util.ArrayList<Integer>(3);
            list.add(1);
            list.add(2);
            list.add(3);
            xs = list;
          }

          private Constants() {
            // no instances
          }
        }

    "#};

    assert_eq!(generate(&schema), expected);
}

#[test]
fn scalar_constants_are_unboxed_and_inline() {
    let schema = Schema {
        constants: vec![
            Constant {
                name: "MAX_RETRIES".to_string(),
                namespaces: java_namespace("com.test"),
                doc: None,
                location: location("test.thrift"),
                ty: ThriftType::I32,
                value: ConstValue::Int(5),
            },
            Constant {
                name: "GREETING".to_string(),
                namespaces: java_namespace("com.test"),
                doc: None,
                location: location("test.thrift"),
                ty: ThriftType::String,
                value: ConstValue::String("hello".to_string()),
            },
        ],
        ..Schema::default()
    };

    let code = generate(&schema);
    assert!(code.contains("public static final int MAX_RETRIES = 5;"), "{code}");
    assert!(code.contains("public static final String GREETING = \"hello\";"), "{code}");
}

#[test]
fn constants_group_by_declared_package() {
    let constant = |name: &str, package: &str| Constant {
        name: name.to_string(),
        namespaces: java_namespace(package),
        doc: None,
        location: location("test.thrift"),
        ty: ThriftType::I32,
        value: ConstValue::Int(1),
    };
    let schema = Schema {
        constants: vec![
            constant("A", "com.zebra"),
            constant("B", "com.apple"),
            constant("C", "com.zebra"),
        ],
        ..Schema::default()
    };

    let code = generate(&schema);
    // One holder per package, packages in sorted order.
    let apple = code.find("package com.apple;").unwrap();
    let zebra = code.find("package com.zebra;").unwrap();
    assert!(apple < zebra, "{code}");
    assert_eq!(code.matches("public final class Constants {").count(), 2);
}

#[test]
fn missing_java_namespace_is_a_configuration_error() {
    let schema = Schema {
        structs: vec![StructType {
            name: "Orphan".to_string(),
            namespaces: BTreeMap::new(),
            doc: None,
            location: location("test.thrift"),
            kind: StructKind::Struct,
            fields: Vec::new(),
        }],
        ..Schema::default()
    };

    let generator = Generator::new(&schema);
    let mut sink = WriterSink::new(Vec::new());
    let err = generator.generate(&mut sink).unwrap_err();
    assert!(err.to_string().contains("Orphan"), "{err}");
    assert!(err.to_string().contains("Java package name"), "{err}");
}

#[test]
fn generation_order_is_enums_structs_exceptions_unions_constants() {
    let schema = Schema {
        enums: vec![EnumType {
            name: "Color".to_string(),
            namespaces: java_namespace("com.test"),
            doc: None,
            location: location("test.thrift"),
            members: vec![EnumMember { name: "RED".to_string(), value: 1, doc: None }],
        }],
        structs: vec![struct_type("S", StructKind::Struct, Vec::new())],
        exceptions: vec![struct_type("E", StructKind::Exception, Vec::new())],
        unions: vec![struct_type(
            "U",
            StructKind::Union,
            vec![field(1, "only", ThriftType::I32, false)],
        )],
        constants: vec![Constant {
            name: "K".to_string(),
            namespaces: java_namespace("com.test"),
            doc: None,
            location: location("test.thrift"),
            ty: ThriftType::I32,
            value: ConstValue::Int(1),
        }],
        ..Schema::default()
    };

    let code = generate(&schema);
    let positions = [
        code.find("public enum Color").unwrap(),
        code.find("public final class S ").unwrap(),
        code.find("public final class E ").unwrap(),
        code.find("public final class U ").unwrap(),
        code.find("public final class Constants").unwrap(),
    ];
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{code}");
}

#[test]
fn output_is_deterministic_modulo_the_date_stamp() {
    let schema = point_schema();

    let strip_dates = |code: &str| {
        code.lines()
            .filter(|line| !line.trim_start().starts_with("@javax.annotation.Generated"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let run = || {
        let generator = Generator::new(&schema).with_generated_annotations();
        let mut sink = WriterSink::new(Vec::new());
        generator.generate(&mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    };

    let first = run();
    assert!(first.contains("@javax.annotation.Generated(value = \"thriftgen\""), "{first}");
    assert_eq!(strip_dates(&first), strip_dates(&run()));
}

#[test]
fn builder_defaults_apply_in_constructor_and_reset() {
    let schema = Schema {
        structs: vec![struct_type(
            "Config",
            StructKind::Struct,
            vec![
                Field {
                    id: 1,
                    name: "retries".to_string(),
                    ty: ThriftType::I32,
                    required: false,
                    default: Some(ConstValue::Int(3)),
                    doc: None,
                },
                Field {
                    id: 2,
                    name: "hosts".to_string(),
                    ty: ThriftType::List { element: Box::new(ThriftType::String) },
                    required: false,
                    default: Some(ConstValue::List(vec![ConstValue::String(
                        "localhost".to_string(),
                    )])),
                    doc: None,
                },
                field(3, "name", ThriftType::String, false),
            ],
        )],
        ..Schema::default()
    };

    let code = generate(&schema);
    // Applied once in the default constructor and once in reset(), with
    // identical temporaries.
    assert_eq!(code.matches("this.retries = 3;").count(), 2, "{code}");
    assert_eq!(
        code.matches("java.util.List<String> list = new java.util.ArrayList<String>(1);").count(),
        2,
        "{code}",
    );
    assert_eq!(code.matches("list.add(\"localhost\");").count(), 2, "{code}");
    assert_eq!(code.matches("this.hosts = list;").count(), 2, "{code}");
    // Fields without defaults reset to null.
    assert_eq!(code.matches("this.name = null;").count(), 1, "{code}");
}

#[test]
fn directory_sink_lays_files_out_by_package() {
    let root = std::env::temp_dir().join(format!("thriftgen-test-{}", std::process::id()));
    let schema = point_schema();
    let generator = Generator::new(&schema);
    generator.generate_to_directory(&root).unwrap();

    let path = root.join("com").join("test").join("Point.java");
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("// Automatically generated by the Thrifty compiler"), "{text}");
    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn configured_container_types_flow_through_generation() {
    let schema = Schema {
        structs: vec![struct_type(
            "Bag",
            StructKind::Struct,
            vec![field(
                1,
                "items",
                ThriftType::List { element: Box::new(ThriftType::I32) },
                true,
            )],
        )],
        ..Schema::default()
    };

    let generator = Generator::new(&schema).with_list_type("java.util.LinkedList").unwrap();
    let mut sink = WriterSink::new(Vec::new());
    generator.generate(&mut sink).unwrap();
    let code = String::from_utf8(sink.into_inner()).unwrap();

    assert!(code.contains("new java.util.LinkedList<Integer>(listMetadata.size)"), "{code}");
    // Declared types stay on the interface.
    assert!(code.contains("public final java.util.List<Integer> items;"), "{code}");
}

#[test]
fn blank_container_class_is_rejected() {
    let schema = Schema::default();
    assert!(Generator::new(&schema).with_list_type("").is_err());
    assert!(Generator::new(&schema).with_map_type("NoPackage").is_err());
}
