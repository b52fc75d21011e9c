use clap::Parser;
use loadlens_cli::{Cli, Commands};
use tempfile::tempdir;

#[test]
fn cli_parses_seed_flags() {
    let cli = Cli::parse_from([
        "loadlens", "seed", "--out", "/tmp/bundle.json", "--format", "json", "--gzip",
    ]);
    match cli.command {
        Commands::Seed(cmd) => {
            assert!(cmd.gzip);
            assert_eq!(cmd.out.to_str(), Some("/tmp/bundle.json"));
        }
        other => panic!("expected seed command, got {other:?}"),
    }
}

#[test]
fn cli_parses_predict_flags() {
    let cli = Cli::parse_from([
        "loadlens",
        "predict",
        "--bundle",
        "loadlens.artifacts",
        "--category",
        "Users",
        "--method",
        "get",
    ]);
    assert!(matches!(cli.command, Commands::Predict(_)));
}

#[test]
fn seed_then_inspect_and_predict() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bundle.bin");
    let path_str = path.to_str().unwrap();

    let cli = Cli::parse_from(["loadlens", "seed", "--out", path_str]);
    match cli.command {
        Commands::Seed(cmd) => cmd.run().unwrap(),
        _ => unreachable!(),
    }
    assert!(path.exists());

    let cli = Cli::parse_from(["loadlens", "inspect", "--bundle", path_str]);
    match cli.command {
        Commands::Inspect(cmd) => cmd.run().unwrap(),
        _ => unreachable!(),
    }

    let cli = Cli::parse_from([
        "loadlens", "predict", "--bundle", path_str, "--category", "Users", "--method", "get",
    ]);
    match cli.command {
        Commands::Predict(cmd) => cmd.run().unwrap(),
        _ => unreachable!(),
    }
}

#[test]
fn seed_gzipped_json_roundtrips_through_predict() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bundle.json.gz");
    let path_str = path.to_str().unwrap();

    let cli = Cli::parse_from([
        "loadlens", "seed", "--out", path_str, "--format", "json", "--gzip",
    ]);
    match cli.command {
        Commands::Seed(cmd) => cmd.run().unwrap(),
        _ => unreachable!(),
    }

    let cli = Cli::parse_from([
        "loadlens", "predict", "--bundle", path_str, "--category", "Auth", "--method", "POST",
    ]);
    match cli.command {
        Commands::Predict(cmd) => cmd.run().unwrap(),
        _ => unreachable!(),
    }
}

#[test]
fn predict_with_unknown_method_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bundle.bin");
    let path_str = path.to_str().unwrap();

    let cli = Cli::parse_from(["loadlens", "seed", "--out", path_str]);
    match cli.command {
        Commands::Seed(cmd) => cmd.run().unwrap(),
        _ => unreachable!(),
    }

    let cli = Cli::parse_from([
        "loadlens", "predict", "--bundle", path_str, "--category", "Users", "--method", "PATCH",
    ]);
    match cli.command {
        Commands::Predict(cmd) => assert!(cmd.run().is_err()),
        _ => unreachable!(),
    }
}
