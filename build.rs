use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

// Braille dot layout (ISO 11548-1):
// 1 4
// 2 5
// 3 6
// 7 8
const DOT_OFFSETS: [(u32, f64, f64); 8] = [
    (0x01, 0.0, 0.0),
    (0x02, 0.0, 1.0),
    (0x04, 0.0, 2.0),
    (0x08, 1.0, 0.0),
    (0x10, 1.0, 1.0),
    (0x20, 1.0, 2.0),
    (0x40, 0.0, 3.0),
    (0x80, 1.0, 3.0),
];

fn dots(c: char) -> impl Iterator<Item = (f64, f64)> {
    let code = c as u32;
    let pattern = if (0x2800..=0x28FF).contains(&code) {
        code - 0x2800
    } else {
        0
    };
    DOT_OFFSETS
        .into_iter()
        .filter(move |(mask, _, _)| pattern & mask != 0)
        .map(|(_, dx, dy)| (dx, dy))
}

fn main() {
    println!("cargo:rerun-if-changed=assets/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("splash_frames.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let asset_dir = Path::new("assets");
    let mut entries: Vec<_> = if asset_dir.exists() {
        fs::read_dir(asset_dir)
            .unwrap()
            .map(|res| res.unwrap().path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .collect()
    } else {
        Vec::new()
    };
    entries.sort();

    // Points are stored in image coordinates (y grows downwards).
    let mut frames: Vec<Vec<(f64, f64)>> = Vec::new();
    let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
    let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);

    for path in entries {
        let content = fs::read_to_string(&path).unwrap();
        let mut points = Vec::new();
        for (row, line) in content.lines().enumerate() {
            for (col, c) in line.chars().enumerate() {
                for (dx, dy) in dots(c) {
                    let x = col as f64 * 2.0 + dx;
                    let y = row as f64 * 4.0 + dy;
                    min_x = min_x.min(x);
                    max_x = max_x.max(x);
                    min_y = min_y.min(y);
                    max_y = max_y.max(y);
                    points.push((x, y));
                }
            }
        }
        frames.push(points);
    }

    writeln!(f, "pub const LOGO_FRAMES: &[&[(f64, f64)]] = &[").unwrap();
    for frame in &frames {
        write!(f, "    &[").unwrap();
        for (x, y) in frame {
            write!(f, "({:.1}, {:.1}), ", x - min_x, y - min_y).unwrap();
        }
        writeln!(f, "],").unwrap();
    }
    writeln!(f, "];").unwrap();

    let (width, height) = if frames.iter().any(|frame| !frame.is_empty()) {
        (max_x - min_x, max_y - min_y)
    } else {
        (0.0, 0.0)
    };
    writeln!(f, "pub const LOGO_WIDTH: f64 = {width:.1};").unwrap();
    writeln!(f, "pub const LOGO_HEIGHT: f64 = {height:.1};").unwrap();
}
