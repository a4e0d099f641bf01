//! Print a few catalogue sections with vertex count, area and bounding box.
//!
//! Usage:
//!   cargo run -p sections --example section_table
//!   cargo run -p sections --example section_table -- snaps
//!
//! The `snaps` mode also lists the nine snap points of every section.

use sections::shapes::SectionShape;
use sections::MeshCfg;

fn catalogue() -> Vec<(&'static str, SectionShape)> {
    vec![
        (
            "W14X22",
            SectionShape::WideFlange {
                b: 5.0,
                h: 13.7,
                tw: 0.23,
                tf: 0.335,
                target_area: Some(6.49),
            },
        ),
        (
            "W14X426",
            SectionShape::WideFlange {
                b: 16.7,
                h: 18.7,
                tw: 1.88,
                tf: 3.04,
                target_area: Some(125.0),
            },
        ),
        (
            "HSS8X4X1/4",
            SectionShape::HssRect {
                ht: 8.0,
                b: 4.0,
                t: 0.233,
            },
        ),
        (
            "HSS6.625X0.280",
            SectionShape::HssCirc {
                od: 6.625,
                tdes: 0.261,
                n_pts: 64,
            },
        ),
        ("RECT10X4", SectionShape::Rect { b: 10.0, h: 4.0 }),
    ]
}

fn main() {
    let snaps = std::env::args().nth(1).as_deref() == Some("snaps");
    for (label, shape) in catalogue() {
        match shape.section(MeshCfg::default()) {
            Ok(sec) => {
                let bb = sec.mesh.bounding_box();
                println!(
                    "{label:<16} {:<9} V={:<4} A={:<10.5} bbox=[{:.3}, {:.3}]..[{:.3}, {:.3}]",
                    sec.name,
                    sec.mesh.num_vertices(),
                    sec.mesh.area(),
                    bb.min.x,
                    bb.min.y,
                    bb.max.x,
                    bb.max.y
                );
                if snaps {
                    for (name, p) in sec.snap_points.iter() {
                        println!("    {name:<14} ({:.3}, {:.3})", p.x, p.y);
                    }
                }
            }
            Err(e) => eprintln!("{label}: {e}"),
        }
    }
}
