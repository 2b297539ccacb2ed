//! Run the `runconfigs` binary end to end.

use std::process::{Command, Output};

fn runconfigs(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_runconfigs"));
    cmd.args(args).env_remove("LULESH_EXEC");
    for (k, v) in envs {
        cmd.env(k, v);
    }
    cmd.output().unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn list() {
    let out = runconfigs(&["list"], &[]);
    assert!(out.status.success());

    let names: Vec<_> = stdout(&out)
        .lines()
        .map(|l| l.split_whitespace().next().unwrap().to_owned())
        .collect();
    assert_eq!(
        names,
        vec!["hpcg_weak", "kripke_weak", "lulesh_weak", "osu_mbw_mr"]
    );
}

#[test]
fn commands_with_header() {
    let out = runconfigs(&["commands", "osu_mbw_mr"], &[]);
    assert!(out.status.success());

    let stdout = stdout(&out);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "# Run Configuration");
    assert_eq!(lines[1], "# app: osu_mbw_mr");
    assert_eq!(lines.len(), 1 + 6 + 4);
    assert!(lines[7].starts_with("mpirun -n 2 /"));
    assert!(lines[10].starts_with("mpirun -n 16 /"));
}

#[test]
fn single_count() {
    let out = runconfigs(&["commands", "kripke_weak", "--no-header", "--numpes", "27"], &[]);
    assert!(out.status.success());
    assert!(stdout(&out).trim_end().ends_with("--procs 3,3,3 --niter 50"));
    assert_eq!(stdout(&out).lines().count(), 1);

    let out = runconfigs(&["commands", "kripke_weak", "--numpes", "28"], &[]);
    assert_eq!(out.status.code(), Some(78));
}

#[test]
fn json() {
    let out = runconfigs(
        &["commands", "lulesh_weak", "--json"],
        &[("LULESH_EXEC", "/opt/lulesh2.0")],
    );
    assert!(out.status.success());

    let table: std::collections::BTreeMap<String, String> =
        serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table["8"], "mpirun -n 8 /opt/lulesh2.0 -i 10 -s 50 -p");
}

#[test]
fn missing_env_var_is_a_config_error() {
    let out = runconfigs(&["commands", "lulesh_weak"], &[]);
    assert_eq!(out.status.code(), Some(78));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("LULESH_EXEC"));

    let out = runconfigs(&["describe", "lulesh_weak"], &[]);
    assert_eq!(out.status.code(), Some(78));
}

#[test]
fn bad_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let out = runconfigs(&["describe", "--config", path.to_str().unwrap()], &[]);
    assert_eq!(out.status.code(), Some(78));
}

fn commands_for_descriptor(numpes: &str, proc_grid: bool) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("study.json");
    std::fs::write(
        &path,
        format!(
            r#"{{"name": "n", "arch": "a", "mpi": "m", "app": "p",
                 "app_exec": "/bin/app", "app_exec_opts": "--procs {{}},{{}},{{}}",
                 "numpes": {}, "proc_grid": {}}}"#,
            numpes, proc_grid
        ),
    )
    .unwrap();

    runconfigs(&["commands", "--config", path.to_str().unwrap()], &[])
}

#[test]
fn grid_study_with_cubed_counts() {
    let out = commands_for_descriptor(r#"{"cubed": {"max_root": 2}}"#, true);
    assert!(out.status.success());
    assert!(stdout(&out).contains("mpirun -n 8 /bin/app --procs 2,2,2\n"));
}

#[test]
fn grid_study_without_cubed_counts_is_a_config_error() {
    let out = commands_for_descriptor(r#"{"powers_of_two": {"min_exp": 1, "max_exp": 4}}"#, true);
    assert_eq!(out.status.code(), Some(78));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("do not form a cubic grid"));
}

#[test]
fn overflowing_counts_are_a_config_error() {
    let out = commands_for_descriptor(
        r#"{"powers_of_two": {"min_exp": 62, "max_exp": 64}}"#,
        false,
    );
    assert_eq!(out.status.code(), Some(78));
    assert!(out.stdout.is_empty());
}

#[test]
fn empty_counts_are_a_config_error() {
    let out = commands_for_descriptor(
        r#"{"powers_of_two": {"min_exp": 4, "max_exp": 1}}"#,
        false,
    );
    assert_eq!(out.status.code(), Some(78));
}
