//! srg: CLI for the spatial-relation scene generator.
//!
//! Subcommands:
//! - annotate: score the fixed demo scene and print graded predicates
//! - generate: sample labeled scenes in batches, logging run stats
//! - probes: print evaluation probe-set dimensions

use std::env;
use std::path::PathBuf;
use std::process;

use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use srg_batch::{BatchBuilder, SceneSample};
use srg_core::config::GenerateConfig;
use srg_core::encode::PREDICATE_SCHEMA_ID;
use srg_logging::{
    hash_config_bytes, now_ms, write_manifest_atomic, GenerateStatsEventV1, NdjsonWriter,
    RunManifestV1, VersionInfoV1, RUN_MANIFEST_VERSION,
};
use srg_scene::{
    annotate_scene, demo_scene, false_predicates, label_scene, sample_scene, DEMO_MAX_BOUNDS,
    SCORER_ID,
};

fn parse_flag_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    if i + 1 >= args.len() {
        eprintln!("Missing value for {}", flag);
        process::exit(1);
    }
    args[i + 1].parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, args[i + 1]);
        process::exit(1);
    })
}

/// Score the fixed four-object demo scene and print everything over the
/// threshold.
fn cmd_annotate(args: &[String]) {
    let mut threshold: f32 = 0.3;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"srg annotate

USAGE:
    srg annotate [--threshold T]

OPTIONS:
    --threshold T    Minimum truth value to print (default: 0.3)
"#
                );
                return;
            }
            "--threshold" => {
                threshold = parse_flag_value(args, i, "--threshold");
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `srg annotate`: {}", other);
                eprintln!("Run `srg annotate --help` for usage.");
                process::exit(1);
            }
        }
    }

    let objects = demo_scene();
    let rows = annotate_scene(&objects, DEMO_MAX_BOUNDS, 4.0);

    println!("---");
    for (p, v) in rows {
        if v > threshold {
            println!("{}: {:.3}", p, v);
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut config_path: Option<PathBuf> = None;
    let mut seed_override: Option<u64> = None;
    let mut batches_override: Option<u32> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"srg generate

USAGE:
    srg generate [--config PATH] [--seed S] [--batches N]

OPTIONS:
    --config PATH    YAML generation config (default: built-in defaults)
    --seed S         Override the config's RNG seed
    --batches N      Override the config's batch count
"#
                );
                return;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --config");
                    process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--seed" => {
                seed_override = Some(parse_flag_value(args, i, "--seed"));
                i += 2;
            }
            "--batches" => {
                batches_override = Some(parse_flag_value(args, i, "--batches"));
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `srg generate`: {}", other);
                eprintln!("Run `srg generate --help` for usage.");
                process::exit(1);
            }
        }
    }

    let (mut cfg, config_hash) = match &config_path {
        Some(p) => {
            let bytes = std::fs::read(p).unwrap_or_else(|e| {
                eprintln!("Failed to read config {}: {}", p.display(), e);
                process::exit(1);
            });
            let cfg = GenerateConfig::load(p).unwrap_or_else(|e| {
                eprintln!("Failed to load config {}: {}", p.display(), e);
                process::exit(1);
            });
            (cfg, Some(hash_config_bytes(&bytes)))
        }
        None => (GenerateConfig::default(), None),
    };
    if let Some(s) = seed_override {
        cfg.seed = s;
    }
    if let Some(n) = batches_override {
        cfg.num_batches = n;
    }

    let total = cfg.num_batches as u64 * cfg.batch_size as u64;
    println!(
        "Generating {} * {} = {} scenes",
        cfg.num_batches, cfg.batch_size, total
    );

    std::fs::create_dir_all(&cfg.logs_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create logs dir {}: {}", cfg.logs_dir, e);
        process::exit(1);
    });
    let run_id = format!("run-{}", now_ms());
    let events_path = PathBuf::from(&cfg.logs_dir).join(format!("{}.ndjson", run_id));
    let mut events = NdjsonWriter::open_append(&events_path).unwrap_or_else(|e| {
        eprintln!("Failed to open event log: {:?}", e);
        process::exit(1);
    });

    // Positives and negatives are built separately so the run stats can
    // count them.
    let mut scene_cfg = cfg.scene.clone();
    let requested_negatives = scene_cfg.num_false_predicates as usize;
    scene_cfg.num_false_predicates = 0;

    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    let mut scenes_completed = 0u64;

    for batch_idx in 0..cfg.num_batches as u64 {
        let started_ms = now_ms();
        let mut builder = BatchBuilder::new(cfg.batch_size as usize);
        let mut positives_count = 0u64;
        let mut negatives_count = 0u64;

        for _ in 0..cfg.batch_size {
            let objects = sample_scene(&mut rng, &scene_cfg).unwrap_or_else(|e| {
                eprintln!("Sampling failed: {}", e);
                process::exit(1);
            });
            let mut rows = label_scene(&objects, &scene_cfg, &mut rng);
            let negatives = false_predicates(&rows, requested_negatives, &mut rng);
            positives_count += rows.len() as u64;
            negatives_count += negatives.len() as u64;
            rows.extend(negatives);

            builder.push(SceneSample::new(rows));
            scenes_completed += 1;
        }

        let batches = builder.into_batches(&mut rng);
        debug_assert_eq!(batches.len(), 1);

        let ev = GenerateStatsEventV1 {
            event: "generate_stats",
            ts_ms: now_ms(),
            v: VersionInfoV1 {
                predicate_schema_id: PREDICATE_SCHEMA_ID,
                scorer_id: SCORER_ID,
            },
            run_id: run_id.clone(),
            batch_idx,
            scenes: cfg.batch_size as u64,
            positives: positives_count,
            negatives: negatives_count,
            elapsed_ms: now_ms().saturating_sub(started_ms),
        };
        if let Err(e) = events.write_event(&ev) {
            eprintln!("Failed to write event: {:?}", e);
            process::exit(1);
        }
    }

    if let Err(e) = events.flush() {
        eprintln!("Failed to flush event log: {:?}", e);
        process::exit(1);
    }

    let manifest = RunManifestV1 {
        run_manifest_version: RUN_MANIFEST_VERSION,
        run_id: run_id.clone(),
        created_ts_ms: now_ms(),
        predicate_schema_id: PREDICATE_SCHEMA_ID,
        scorer_id: SCORER_ID.to_string(),
        config_hash,
        seed: cfg.seed,
        logs_dir: cfg.logs_dir.clone(),
        scenes_completed,
        batches_completed: cfg.num_batches as u64,
    };
    let manifest_path = PathBuf::from(&cfg.logs_dir).join(format!("{}.json", run_id));
    if let Err(e) = write_manifest_atomic(&manifest_path, &manifest) {
        eprintln!("Failed to write manifest: {:?}", e);
        process::exit(1);
    }

    println!("Done: {} scenes, logs in {}", scenes_completed, cfg.logs_dir);
}

fn cmd_probes(args: &[String]) {
    let mut on_only = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"srg probes

USAGE:
    srg probes [--on-only]

OPTIONS:
    --on-only    Restrict table probes to the ON relation
"#
                );
                return;
            }
            "--on-only" => {
                on_only = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option for `srg probes`: {}", other);
                eprintln!("Run `srg probes --help` for usage.");
                process::exit(1);
            }
        }
    }

    let table = srg_probes::on_table_probes(!on_only);
    println!("table probes: {} x {}", table.rows(), table.cols());

    if !on_only {
        let near = srg_probes::near_probes();
        println!("near probes:  {} x {}", near.rows(), near.cols());
    }
}

fn print_usage() {
    println!(
        r#"srg - spatial-relation scene generator

USAGE:
    srg <SUBCOMMAND>

SUBCOMMANDS:
    annotate    Score the fixed demo scene and print graded predicates
    generate    Sample labeled scenes in batches and log run stats
    probes      Print evaluation probe-set dimensions
"#
    );
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("annotate") => cmd_annotate(&args[1..]),
        Some("generate") => cmd_generate(&args[1..]),
        Some("probes") => cmd_probes(&args[1..]),
        Some("--help") | Some("-h") | None => print_usage(),
        Some(other) => {
            eprintln!("Unknown subcommand: {}", other);
            print_usage();
            process::exit(1);
        }
    }
}
