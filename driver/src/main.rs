use log::info;
use surface_pathfinding::prelude::*;

const START: Position = 0;
const TARGET: Position = 3;
const DELTA: Position = 1;
const MAX_DEPTH: usize = 10;

fn print_steps(path: &Path<Position>, profile: Option<&SurfaceProfile>) {
    println!("Number of steps: {}", path.cost());
    println!();
    println!("Simulated search:");
    for (i, pos) in path.iter().enumerate() {
        match profile {
            Some(profile) => println!(
                "Step {}: Position = {}, Surface value = {}",
                i,
                pos,
                profile.fit(*pos)
            ),
            None => println!("Step {}: Position = {}", i, pos),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // lower values mean the surface fits better, which happens near the target
    let profile = SurfaceProfile::reference();

    info!("searching from {} to {} with delta {}", START, TARGET, DELTA);

    match search(START, TARGET, DELTA, Some(&profile)) {
        Some(path) => {
            println!("Path found by A*: {}", path);
            print_steps(&path, Some(&profile));
        }
        None => println!("A* found no path to the target."),
    }

    println!();

    match depth_first_search(START, TARGET, DELTA, MAX_DEPTH) {
        Some(path) => {
            println!("Path found by DFS: {}", path);
            print_steps(&path, None);
        }
        None => println!("DFS found no path to the target."),
    }
}
