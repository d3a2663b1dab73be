// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Thrift schema to Java source generator.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use argh::FromArgs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use thriftgen::ir::Schema;
use thriftgen::{GenError, Generator};

/// Generate Java sources from a resolved Thrift schema IR
#[derive(FromArgs)]
struct Thriftgen {
    /// source JSON IR file path
    #[argh(option)]
    json: PathBuf,
    /// output directory for generated .java files
    #[argh(option)]
    output_directory: PathBuf,
    /// fully qualified class used to allocate list fields
    #[argh(option)]
    list_type: Option<String>,
    /// fully qualified class used to allocate set fields
    #[argh(option)]
    set_type: Option<String>,
    /// fully qualified class used to allocate map fields
    #[argh(option)]
    map_type: Option<String>,
    /// stamp generated types with @javax.annotation.Generated
    #[argh(switch)]
    generated_annotations: bool,
}

fn run(args: Thriftgen) -> Result<(), GenError> {
    let file = File::open(&args.json)?;
    let schema = serde_json::from_reader::<_, Schema>(BufReader::new(file))
        .map_err(|e| GenError::schema(format!("failed to parse schema IR: {e}")))?;

    let mut generator = Generator::new(&schema);
    if let Some(class) = &args.list_type {
        generator = generator.with_list_type(class)?;
    }
    if let Some(class) = &args.set_type {
        generator = generator.with_set_type(class)?;
    }
    if let Some(class) = &args.map_type {
        generator = generator.with_map_type(class)?;
    }
    if args.generated_annotations {
        generator = generator.with_generated_annotations();
    }

    generator.generate_to_directory(&args.output_directory)?;
    info!(directory = %args.output_directory.display(), "generation complete");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = argh::from_env::<Thriftgen>();
    if let Err(err) = run(args) {
        eprintln!("thriftgen: {err}");
        std::process::exit(1);
    }
}
