//! Saving and loading recorded rod trajectories.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rv_core::{Tolerances, m};
use rv_rod::{Displacement, RodError, RodModel, RodParameters, RodRecording, RodState, io, shapes};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn sweep(params: &RodParameters) -> RodRecording {
    let mut recording = RodRecording::new(params);
    for (i, curvature) in [0.0, 0.5, 1.0].into_iter().enumerate() {
        let state = shapes::planar_arc(params, Displacement::identity(), curvature).unwrap();
        recording.push_state(&state, Some(i as f64 * 0.1)).unwrap();
    }
    recording
}

#[test]
fn yaml_and_json_files_reload_same_states() {
    let dir = unique_temp_dir("rv_rod_recording");
    fs::create_dir_all(&dir).expect("failed to create temp dir");

    let params = RodParameters::new(m(0.02), 1.5, 6)
        .unwrap()
        .with_model(RodModel::ExtensibleShearable);
    let recording = sweep(&params);

    let yaml_path = dir.join("sweep.yaml");
    let json_path = dir.join("sweep.json");
    io::save_yaml(&yaml_path, &recording).unwrap();
    io::save_json(&json_path, &recording).unwrap();

    for path in [&yaml_path, &json_path] {
        let loaded = io::load(path).unwrap();
        assert_eq!(loaded.frames.len(), 3);
        assert_eq!(loaded.parameters.rod_model, RodModel::ExtensibleShearable);

        let expected = recording.states().unwrap();
        let states = loaded.states().unwrap();
        for (a, b) in expected.iter().zip(&states) {
            assert_eq!(a.num_nodes(), b.num_nodes());
            for i in 0..a.num_nodes() {
                let ta = rv_rod::displacement_to_tq(&a.node(i).unwrap());
                let tb = rv_rod::displacement_to_tq(&b.node(i).unwrap());
                assert!(ta.approx_eq(&tb, Tolerances::default()));
            }
        }
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn load_rejects_mismatched_frame() {
    let dir = unique_temp_dir("rv_rod_bad_recording");
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("bad.yaml");
    fs::write(
        &path,
        "parameters:\n  radius_m: 0.01\n  integration_time: 1.0\n  num_nodes: 3\nframes:\n  - base: [0, 0, 0, 0, 0, 0, 1]\n    nodes:\n      - [0, 0, 0, 0, 0, 0, 1]\n",
    )
    .unwrap();

    let err = io::load(&path).unwrap_err();
    assert!(matches!(err, RodError::Frame { frame: 0, .. }), "{err}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_io_error() {
    let path = unique_temp_dir("rv_rod_missing").join("nope.yaml");
    assert!(matches!(io::load(&path), Err(RodError::Io(_))));
}

#[test]
fn demo_recording_loads() {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("demos");
    path.push("quarter_bend.yaml");

    if !path.exists() {
        eprintln!("Skipping test: demo recording not found at {:?}", path);
        return;
    }

    let recording = io::load(&path).expect("Failed to load demo recording");
    let states = recording.states().unwrap();
    assert_eq!(states.len(), 2);

    let params = recording.parameters.to_parameters().unwrap();
    let expected = shapes::planar_arc(&params, Displacement::identity(), std::f64::consts::FRAC_PI_2).unwrap();
    let tol = Tolerances { abs: 1e-4, rel: 0.0 };
    for i in 0..expected.num_nodes() {
        let a = rv_rod::displacement_to_tq(&expected.node(i).unwrap());
        let b = rv_rod::displacement_to_tq(&states[1].node(i).unwrap());
        assert!(a.approx_eq(&b, tol), "node {i}: {a:?} vs {b:?}");
    }
}
