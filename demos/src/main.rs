//! Maze demo — A* over the classic 10×10 demo map, printed as ASCII.
//!
//! Usage: `maze [start_x start_y goal_x goal_y]`. Endpoints are clamped to
//! the map; defaults are `(0, 0)` and `(6, 7)`.

use std::error::Error;

use gridpath_core::{Point, Tile, TileMap};
use gridpath_paths::find_path;

/// 0 = empty, 1 = wall (see `Tile::from_value`).
const DEMO_ROWS: [[i32; 10]; 10] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 1, 1, 1, 0, 1, 0, 0],
    [0, 1, 0, 0, 0, 1, 0, 1, 0, 0],
    [0, 1, 1, 1, 0, 1, 0, 1, 0, 0],
    [0, 0, 0, 1, 0, 1, 0, 1, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 0],
    [0, 1, 0, 1, 0, 0, 0, 1, 0, 0],
    [0, 1, 0, 1, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

fn parse_endpoints() -> Result<(Point, Point), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.len() {
        0 => Ok((Point::new(0, 0), Point::new(6, 7))),
        4 => {
            let v: Vec<i32> = args
                .iter()
                .map(|a| a.parse())
                .collect::<Result<_, _>>()?;
            Ok((Point::new(v[0], v[1]), Point::new(v[2], v[3])))
        }
        _ => Err("usage: maze [start_x start_y goal_x goal_y]".into()),
    }
}

fn clamp_to(map: &TileMap, p: Point) -> Point {
    Point::new(
        p.x.clamp(0, map.width() - 1),
        p.y.clamp(0, map.height() - 1),
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    let map = TileMap::from_rows(&DEMO_ROWS);
    let (start, goal) = parse_endpoints()?;
    let (start, goal) = (clamp_to(&map, start), clamp_to(&map, goal));

    let path = find_path(&map, start, goal);

    for y in 0..map.height() {
        let mut line = String::with_capacity(map.width() as usize);
        for x in 0..map.width() {
            let p = Point::new(x, y);
            line.push(if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if path.contains(&p) {
                '*'
            } else if map.at(p) == Some(Tile::Wall) {
                '#'
            } else {
                '.'
            });
        }
        println!("{line}");
    }

    if path.is_empty() {
        println!("no path from {start} to {goal}");
    } else {
        let cells: Vec<String> = path.iter().map(Point::to_string).collect();
        println!("{} cells: {}", path.len(), cells.join(" "));
    }
    Ok(())
}
