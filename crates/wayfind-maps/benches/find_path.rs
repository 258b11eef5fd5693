use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wayfind_astar::{AStar, SearchConfig, find_path};
use wayfind_maps::{GridMap, LumaMap, Movement, Point};

const WALL_WITH_GAP: &str = "
....#.....
.##.#.....
..#.#.....
..#.#.....
..#.#..##.
..#.#...#.
..#.#..#..
###.#.#...
....#.....
..........
";

/// Smooth gradient with a few sharp ridges, so the cheapest path has to
/// wander.
fn ridged_image(w: usize, h: usize) -> Vec<u8> {
    let mut pix = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let base = ((x + y) * 255 / (w + h)) as u8;
            let ridge = x % 64 == 32 && y % 128 > 16;
            pix.push(if ridge { 255 } else { base });
        }
    }
    pix
}

fn grid_benchmark(c: &mut Criterion) {
    let map = GridMap::parse(WALL_WITH_GAP, Movement::Octile).unwrap();
    c.bench_function("grid 10x10 wall with gap", |b| {
        b.iter(|| find_path(black_box(&map), Point::new(0, 5), Point::new(9, 3)))
    });

    let open = GridMap::new(200, 200, Movement::Octile).unwrap();
    c.bench_function("grid 200x200 open diagonal", |b| {
        b.iter(|| find_path(black_box(&open), Point::new(0, 0), Point::new(199, 199)))
    });
}

fn luma_benchmark(c: &mut Criterion) {
    let (w, h) = (256, 256);
    let pix = ridged_image(w, h);
    let map = LumaMap::new(&pix, w, h).unwrap();
    let (start, end) = map.corners();
    let config = SearchConfig::with_expected_nodes(w * h);
    c.bench_function("luma 256x256 corner to corner", |b| {
        b.iter(|| {
            AStar::new(black_box(&map))
                .with_config(config)
                .search(start, end)
        })
    });
}

criterion_group!(benches, grid_benchmark, luma_benchmark);
criterion_main!(benches);
