//! The studies we ship. Each one is just a descriptor.

use crate::{
    descriptor::{AppExec, ExperimentDescriptor, DEFAULT_LAUNCHER},
    error::ConfigError,
    numpes::ProcessCountPolicy,
};

/// The names of all built-in studies.
pub const STUDIES: &[&str] = &["hpcg_weak", "kripke_weak", "lulesh_weak", "osu_mbw_mr"];

/// Look up a built-in study by name.
pub fn study(name: &str) -> Result<ExperimentDescriptor, ConfigError> {
    match name {
        "hpcg_weak" => Ok(hpcg_weak()),
        "kripke_weak" => Ok(kripke_weak()),
        "lulesh_weak" => Ok(lulesh_weak()),
        "osu_mbw_mr" => Ok(osu_mbw_mr()),
        _ => Err(ConfigError::UnknownStudy { name: name.into() }),
    }
}

/// HPCG weak scaling with a 96^3 local domain.
pub fn hpcg_weak() -> ExperimentDescriptor {
    ExperimentDescriptor {
        name: "HPCG (96^3)".into(),
        arch: "An Arch".into(),
        mpi: "An MPI".into(),
        app: "HPCG".into(),
        app_exec: AppExec::Path(
            "/home/samuel/devel/parallel-motifs/sparse-linear-algebra/hpcg-3.0/bin/xhpcg".into(),
        ),
        app_exec_opts: "--nx=96 --ny=96 --nz=96 --rt=1".into(),
        mpi_exec_opts: Some("".into()),
        launcher: DEFAULT_LAUNCHER.into(),
        numpes: ProcessCountPolicy::Cubed { max_root: 6 },
        proc_grid: false,
    }
}

/// Kripke weak scaling with 16^3 zones. Kripke needs to be told the process grid.
pub fn kripke_weak() -> ExperimentDescriptor {
    ExperimentDescriptor {
        name: "Kripke (16^3 Zones)".into(),
        arch: "An Arch".into(),
        mpi: "An MPI".into(),
        app: "Kripke".into(),
        app_exec: AppExec::Path(
            "/home/samuel/devel/parallel-motifs/structured-grids/kripke-1.1/build/kripke".into(),
        ),
        app_exec_opts: "--procs {},{},{} --niter 50".into(),
        mpi_exec_opts: Some("".into()),
        launcher: DEFAULT_LAUNCHER.into(),
        numpes: ProcessCountPolicy::Cubed { max_root: 6 },
        proc_grid: true,
    }
}

/// Lulesh weak scaling with 64^3 points per domain. The executable comes from `LULESH_EXEC`.
pub fn lulesh_weak() -> ExperimentDescriptor {
    ExperimentDescriptor {
        name: "Lulesh (64^3 Points  per Domain)".into(),
        arch: "Cray XC40".into(),
        mpi: "MPICH".into(),
        app: "Lulesh".into(),
        app_exec: AppExec::Env {
            env: "LULESH_EXEC".into(),
        },
        app_exec_opts: "-i 10 -s 50 -p".into(),
        mpi_exec_opts: None,
        launcher: DEFAULT_LAUNCHER.into(),
        // The full sweep is `max_root: 5`.
        numpes: ProcessCountPolicy::Cubed { max_root: 2 },
        proc_grid: false,
    }
}

/// OSU multiple bandwidth / message rate test.
pub fn osu_mbw_mr() -> ExperimentDescriptor {
    ExperimentDescriptor {
        name: "OSU Multiple Bandwidth / Message Rate Test".into(),
        arch: "Some Arch".into(),
        mpi: "Some MPI".into(),
        app: "osu_mbw_mr".into(),
        app_exec: AppExec::Path(
            "/home/samuel/Desktop/osu-micro-benchmarks-5.3.2/mpi/pt2pt/osu_mbw_mr".into(),
        ),
        app_exec_opts: "".into(),
        mpi_exec_opts: None,
        launcher: DEFAULT_LAUNCHER.into(),
        numpes: ProcessCountPolicy::PowersOfTwo {
            min_exp: 1,
            max_exp: 4,
        },
        proc_grid: false,
    }
}
