//! # Shapes Demo
//!
//! Generates the simple 2D vertex streams: a grid of small rectangles and
//! a filled circle, logging the vertex and byte counts each buffer upload
//! would take.

use clap::Parser;

use subsphere_core::mesh::generators::{Shape2d, generate_circle, generate_rectangle};

/// 2D shape stream generation.
#[derive(Parser, Debug)]
#[command(
    name = "shapes_demo",
    about = "Generate 2D rectangle-grid and circle vertex streams",
    version
)]
struct Args {
    /// Rectangles per grid row and column.
    #[arg(long, default_value = "10")]
    grid: u32,

    /// Circle rim segments.
    #[arg(long, default_value = "50")]
    segments: u32,
}

fn log_shape(name: &str, shape: &Shape2d) {
    log::info!(
        "{name}: {} vertices ({} position bytes, {} color bytes)",
        shape.vertex_count(),
        shape.position_bytes().len(),
        shape.color_bytes().len(),
    );
}

fn main() {
    subsphere_demos::init_logging();
    subsphere_core::init();

    let args = Args::parse();

    // A grid of 0.02-sized rectangles across clip space, one color per cell.
    let cell = 2.0 / args.grid as f32;
    let mut total_vertices = 0usize;
    for row in 0..args.grid {
        for column in 0..args.grid {
            let x = -1.0 + column as f32 * cell;
            let y = -1.0 + row as f32 * cell;
            let shade = (row + column) as f32 / (2 * args.grid) as f32;
            let rectangle = generate_rectangle(x, y, x + 0.02, y + 0.02, [shade, shade, 1.0, 1.0]);
            total_vertices += rectangle.vertex_count();
        }
    }
    log::info!(
        "rectangle grid: {} cells, {} vertices total",
        args.grid * args.grid,
        total_vertices
    );

    let circle = generate_circle(0.5, 0.0, 0.0, args.segments, [1.0, 0.5, 0.0, 1.0]);
    log_shape("circle", &circle);
}
