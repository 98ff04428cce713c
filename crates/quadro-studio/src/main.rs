//! Headless driver for the demo scenes.
//!
//! Runs the same per-frame cycle a GL host would (step, clear, record,
//! assemble) and reports the resulting upload traffic, without opening
//! a window. Useful for eyeballing scene output and for profiling the
//! CPU side of the pipeline.

use anyhow::Result;
use quadro_core::scene::{DrawList, Primitive, assemble};
use quadro_scenes::{CLEAR_COLOR, CarScene, FlowerScene};

/// Frames simulated per scene; at 60 fps this is four seconds.
const FRAMES: u32 = 240;

/// How often a frame gets an info line.
const REPORT_EVERY: u32 = 60;

#[derive(Debug, Copy, Clone, Default)]
struct UploadStats {
    draws: usize,
    vertices: usize,
    triangles: usize,
    bytes: usize,
}

impl UploadStats {
    fn of(prims: &[Primitive]) -> Self {
        let mut s = Self { draws: prims.len(), ..Self::default() };
        for p in prims {
            s.vertices += p.vertex_count();
            s.triangles += p.mesh.triangle_count();
            s.bytes += p.mesh.as_bytes().len();
        }
        s
    }
}

fn run_car(list: &mut DrawList) -> Result<UploadStats> {
    let mut car = CarScene::new();
    let mut last = UploadStats::default();
    for frame in 0..FRAMES {
        list.clear();
        car.record(list);
        let prims = assemble(list)?;
        last = UploadStats::of(&prims);
        if frame % REPORT_EVERY == 0 {
            log::info!(
                "car    frame {frame:3}  at ({:+.2}, {:+.2})  {} draws, {} vertices, {} bytes",
                car.drift.value,
                car.lift.value,
                last.draws,
                last.vertices,
                last.bytes,
            );
        }
        car = car.stepped();
    }
    Ok(last)
}

fn run_flower(list: &mut DrawList) -> Result<UploadStats> {
    let mut flower = FlowerScene::new();
    let mut last = UploadStats::default();
    for frame in 0..FRAMES {
        list.clear();
        flower.record(list);
        let prims = assemble(list)?;
        last = UploadStats::of(&prims);
        if frame % REPORT_EVERY == 0 {
            log::info!(
                "flower frame {frame:3}  head at {:6.1} deg  {} draws, {} vertices, {} bytes",
                flower.spin.degrees,
                last.draws,
                last.vertices,
                last.bytes,
            );
        }
        flower = flower.stepped();
    }
    Ok(last)
}

fn main() -> Result<()> {
    quadro_core::logging::init("info");

    println!();
    println!("  quadro studio, headless");
    println!("  {FRAMES} frames per scene, clear color {:?}", CLEAR_COLOR.to_array());
    println!();

    let mut list = DrawList::new();
    let car = run_car(&mut list)?;
    let flower = run_flower(&mut list)?;

    println!();
    println!("  per-frame upload   draws  vertices  triangles     bytes");
    for (name, s) in [("car", car), ("flower", flower)] {
        println!(
            "  {name:<16} {:>7} {:>9} {:>10} {:>9}",
            s.draws, s.vertices, s.triangles, s.bytes
        );
    }
    println!();

    Ok(())
}
