use laser_bvh::Scene;
use std::env;
use std::process::ExitCode;
use std::time::Instant;

const USAGE: &str = "usage: laser-bvh <scene.toml> [out_dir]";

fn run(args: &[String]) -> laser_bvh::Result<()> {
    let started = Instant::now();
    let scene = Scene::load(&args[1])?;
    let stats = scene.bvh.stats();
    log::info!(
        "{} triangles, {} nodes ({} leaves, depth {}, largest leaf {}), bounds {:?}",
        scene.bvh.triangle_count(),
        stats.nodes,
        stats.leaves,
        stats.depth,
        stats.largest_leaf,
        scene.bvh.root_bounds()
    );
    if let Some(out_dir) = args.get(2) {
        scene.write_buffers(out_dir)?;
        log::info!("buffers written to {out_dir}");
    }
    log::info!("done in {:?}", started.elapsed());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
