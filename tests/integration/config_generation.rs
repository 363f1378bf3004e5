//! End-to-end analysis configuration generation via the CLI command structs

use clap::Parser;
use gnss_orbit_downloader::cli::{Cli, Commands};
use gnss_orbit_downloader::storage::StorageLayout;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[tokio::test]
async fn test_config_command_writes_station_file() {
    let temp = TempDir::new().unwrap();
    let layout = StorageLayout::new(temp.path());

    let cli = parse(&[
        "download_orbits",
        "config",
        "p038",
        "39.0",
        "-105.0",
        "1700.0",
    ]);
    let Commands::Config(cmd) = cli.command else {
        panic!("expected config command");
    };

    cmd.execute(layout).unwrap();

    let written = temp.path().join("input").join("p038.json");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(value["station"], "p038");
    assert_eq!(value["lat"], 39.0);
    assert_eq!(value["e1"], 5);
    assert_eq!(value["e2"], 25);
    assert_eq!(value["freqs"], serde_json::json!([1, 20, 5]));
    assert_eq!(value["refraction"], true);
}

#[tokio::test]
async fn test_config_command_applies_overrides() {
    let temp = TempDir::new().unwrap();
    let layout = StorageLayout::new(temp.path());

    let cli = parse(&[
        "download_orbits",
        "config",
        "p038",
        "39.0",
        "-105.0",
        "1700.0",
        "--h1",
        "1.0",
        "--h2",
        "10.0",
        "--peak2noise",
        "3.5",
        "--l1",
        "--ampl",
        "8.0",
        "--no-refraction",
        "--extension",
        "snow",
    ]);
    let Commands::Config(cmd) = cli.command else {
        panic!("expected config command");
    };

    cmd.execute(layout).unwrap();

    let written = temp.path().join("input").join("p038.snow.json");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(value["minH"], 1.0);
    assert_eq!(value["maxH"], 10.0);
    assert_eq!(value["NReg"], serde_json::json!([1.0, 10.0]));
    assert_eq!(value["PkNoise"], 3.5);
    assert_eq!(value["freqs"], serde_json::json!([1]));
    assert_eq!(value["reqAmp"], serde_json::json!([8.0]));
    assert_eq!(value["refraction"], false);
}

#[tokio::test]
async fn test_config_command_rejects_bad_station_name() {
    let temp = TempDir::new().unwrap();
    let layout = StorageLayout::new(temp.path());

    let cli = parse(&[
        "download_orbits",
        "config",
        "toolong",
        "39.0",
        "-105.0",
        "1700.0",
    ]);
    let Commands::Config(cmd) = cli.command else {
        panic!("expected config command");
    };

    assert!(cmd.execute(layout).is_err());
}

#[tokio::test]
async fn test_download_arguments_parse_positionally() {
    let cli = parse(&["download_orbits", "download", "gps", "2021", "15", "0"]);
    let Commands::Download(args) = cli.command else {
        panic!("expected download command");
    };

    assert_eq!(args.orbit, "gps");
    assert_eq!(args.year, 2021);
    assert_eq!(args.month, 15);
    assert_eq!(args.day, 0);
    assert_eq!(args.hour, None);
}

#[tokio::test]
async fn test_download_hour_flag_range() {
    assert!(Cli::try_parse_from([
        "download_orbits",
        "download",
        "ultra",
        "2021",
        "15",
        "0",
        "--hour",
        "24",
    ])
    .is_err());

    let cli = parse(&[
        "download_orbits",
        "download",
        "ultra",
        "2021",
        "15",
        "0",
        "--hour",
        "6",
    ]);
    let Commands::Download(args) = cli.command else {
        panic!("expected download command");
    };
    assert_eq!(args.hour, Some(6));
}
