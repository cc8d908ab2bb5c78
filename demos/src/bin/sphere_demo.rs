//! # Sphere Demo
//!
//! Drives the subdivision session the way an interactive viewer would:
//! replay a starting depth, then walk coarsen/subdivide round trips,
//! logging the triangle, vertex and upload-byte counts at every step.

use clap::Parser;

use subsphere_core::sphere::{SeedMesh, SphereSession};

/// Sphere subdivision walk-through.
#[derive(Parser, Debug)]
#[command(
    name = "sphere_demo",
    about = "Subdivide and coarsen a tetrahedron-seeded sphere mesh",
    version
)]
struct Args {
    /// Subdivision level to start at (replayed one level at a time).
    #[arg(long, default_value = "4")]
    start_depth: u32,

    /// Maximum subdivision level.
    #[arg(long, default_value = "6")]
    max_depth: u32,

    /// Number of coarsen-to-floor / subdivide-back round trips to run.
    #[arg(long, default_value = "1")]
    cycles: u32,
}

fn log_state(session: &SphereSession) {
    let mesh = session.to_mesh_data();
    log::info!(
        "level {}/{}: {} triangles, {} vertices ({} position bytes, {} index bytes)",
        session.current_depth(),
        session.max_depth(),
        session.triangle_count(),
        session.vertex_count(),
        mesh.position_bytes().len(),
        mesh.index_bytes().len(),
    );
}

fn main() {
    subsphere_demos::init_logging();
    subsphere_core::init();

    let args = Args::parse();

    let mut session =
        SphereSession::new(SeedMesh::tetrahedron(), args.max_depth).with_start_depth(args.start_depth);
    log_state(&session);

    for cycle in 0..args.cycles {
        log::info!("cycle {}: coarsening to the floor", cycle + 1);
        while session.coarsen() {
            log_state(&session);
        }

        log::info!("cycle {}: subdividing back up", cycle + 1);
        while session.current_depth() < args.start_depth && session.subdivide() {
            log_state(&session);
        }
    }

    log::info!(
        "done: deepest computed level {}, store holds {} vertices",
        session.deepest_computed_depth(),
        session.vertex_count()
    );
}
