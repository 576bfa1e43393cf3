use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

const LONE_COLONY: &str = "1\n0 0 0 0 0 1\nFIN_LISTE\n0\n";

const OVERLAPPING: &str = "2\n0 0 0 0 4 2\n3 0 0 0 4 1\nFIN_LISTE\n0\n";

fn scratch(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bugs-life-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch directory");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write scratch file");
    path
}

fn bugs_life(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bugs-life"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to invoke the bugs-life binary")
}

fn path_str(path: &PathBuf) -> &str {
    path.to_str().expect("utf-8 scratch path")
}

#[test]
fn error_mode_accepts_well_formed_scenes() {
    let scene = scratch("lone.txt", LONE_COLONY);
    let output = bugs_life(&["error", path_str(&scene)]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 colonies, 0 food items"), "{stdout}");
}

#[test]
fn error_mode_reports_truncated_scenes() {
    let scene = scratch("truncated.txt", "1\n");
    let output = bugs_life(&["error", path_str(&scene)]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expecting a colony record"), "{stderr}");
}

#[test]
fn verification_mode_rejects_touching_colonies() {
    let scene = scratch("overlap.txt", OVERLAPPING);

    let parsed = bugs_life(&["error", path_str(&scene)]);
    assert!(parsed.status.success());

    let verified = bugs_life(&["verification", path_str(&scene)]);
    assert!(!verified.status.success());
    let stderr = String::from_utf8_lossy(&verified.stderr);
    assert!(stderr.contains("colonies 0 and 1 overlap"), "{stderr}");
}

#[test]
fn run_mode_writes_requested_outputs() {
    let scene = scratch("run.txt", LONE_COLONY);
    let saved = scratch("saved.txt", "");
    let record = scratch("population.dat", "");
    let image = scratch("final.svg", "");

    let output = bugs_life(&[
        "--seed",
        "1",
        "run",
        path_str(&scene),
        "--ticks",
        "3",
        "--no-auto-food",
        "--save",
        path_str(&saved),
        "--record",
        path_str(&record),
        "--svg",
        path_str(&image),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let saved = fs::read_to_string(saved).expect("saved scene");
    let counts: Vec<&str> = saved
        .lines()
        .filter(|line| !line.trim_start().starts_with('#') && !line.trim().is_empty())
        .collect();
    assert_eq!(counts, vec!["0", "0"]);

    let record = fs::read_to_string(record).expect("population record");
    assert_eq!(record, "1 0\n2 0\n3 0\n");

    let image = fs::read_to_string(image).expect("svg image");
    assert!(image.starts_with("<svg"));
    assert!(!image.contains("<circle"));
}

#[test]
fn missing_scene_fails_cleanly() {
    let output = bugs_life(&["verification", "/nonexistent/bugs-life/scene.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not read scenario file"), "{stderr}");
}
