use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sections::planar::{EdgeList, MeshCfg};
use sections::shapes::{SectionShape, DEFAULT_CIRC_POINTS};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;
mod report;

use provenance::Payload;
use report::{MeshReport, PolygonInput};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Mesh structural cross-sections and report their outlines")]
struct Cmd {
    /// Loops with |signed area| below this are treated as degenerate
    #[arg(long, global = true, default_value_t = 1e-6)]
    eps_area: f64,

    /// Accept clockwise hole loops instead of rejecting them
    #[arg(long, global = true)]
    allow_holes: bool,

    /// Resolve vertices joining more than two edges by angle instead of failing
    #[arg(long, global = true)]
    allow_junctions: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Mesh a standard section and print (or write) its report
    Section {
        #[command(subcommand)]
        shape: ShapeCmd,
        /// Write the JSON report here plus a `<stem>.provenance.json` sidecar
        #[arg(long, global = true)]
        out: Option<PathBuf>,
    },
    /// Mesh the closed polyline read from a JSON file
    Polygon {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Subcommand, Clone, Copy, Debug)]
enum ShapeCmd {
    /// Wide flange (I) with filleted web-to-flange corners
    W {
        #[arg(long)]
        b: f64,
        #[arg(long)]
        h: f64,
        #[arg(long)]
        tw: f64,
        #[arg(long)]
        tf: f64,
        /// Catalogue area; sizes the fillets
        #[arg(long)]
        target_area: Option<f64>,
    },
    /// Rectangular hollow section
    HssRect {
        #[arg(long)]
        ht: f64,
        #[arg(long)]
        b: f64,
        #[arg(long)]
        t: f64,
    },
    /// Circular hollow section
    HssCirc {
        #[arg(long)]
        od: f64,
        #[arg(long)]
        tdes: f64,
        #[arg(long, default_value_t = DEFAULT_CIRC_POINTS)]
        n_pts: usize,
    },
    /// Solid rectangle
    Rect {
        #[arg(long)]
        b: f64,
        #[arg(long)]
        h: f64,
    },
}

impl From<ShapeCmd> for SectionShape {
    fn from(cmd: ShapeCmd) -> Self {
        match cmd {
            ShapeCmd::W {
                b,
                h,
                tw,
                tf,
                target_area,
            } => SectionShape::WideFlange {
                b,
                h,
                tw,
                tf,
                target_area,
            },
            ShapeCmd::HssRect { ht, b, t } => SectionShape::HssRect { ht, b, t },
            ShapeCmd::HssCirc { od, tdes, n_pts } => SectionShape::HssCirc { od, tdes, n_pts },
            ShapeCmd::Rect { b, h } => SectionShape::Rect { b, h },
        }
    }
}

fn shape_params(shape: &SectionShape) -> serde_json::Value {
    match *shape {
        SectionShape::WideFlange {
            b,
            h,
            tw,
            tf,
            target_area,
        } => json!({"b": b, "h": h, "tw": tw, "tf": tf, "target_area": target_area}),
        SectionShape::HssRect { ht, b, t } => json!({"ht": ht, "b": b, "t": t}),
        SectionShape::HssCirc { od, tdes, n_pts } => json!({"od": od, "tdes": tdes, "n_pts": n_pts}),
        SectionShape::Rect { b, h } => json!({"b": b, "h": h}),
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    let cfg = mesh_cfg(&cmd);
    match cmd.action {
        Action::Section { shape, out } => section(shape.into(), cfg, out.as_deref()),
        Action::Polygon { input, out } => polygon(&input, cfg, out.as_deref()),
        Action::Report => report(cfg),
    }
}

fn mesh_cfg(cmd: &Cmd) -> MeshCfg {
    MeshCfg::default()
        .with_eps_area(cmd.eps_area)
        .with_holes(cmd.allow_holes)
        .with_junctions(cmd.allow_junctions)
}

fn cfg_params(cfg: MeshCfg) -> serde_json::Value {
    json!({
        "eps_area": cfg.eps_area,
        "allow_holes": cfg.allow_holes,
        "allow_junctions": cfg.allow_junctions,
    })
}

fn section_report(shape: SectionShape, cfg: MeshCfg) -> Result<MeshReport> {
    let mesh = shape
        .mesh_with(cfg)
        .with_context(|| format!("meshing {} section {:?}", shape.name(), shape))?;
    Ok(MeshReport::new(shape.name(), &mesh))
}

fn section(shape: SectionShape, cfg: MeshCfg, out: Option<&Path>) -> Result<()> {
    tracing::info!(shape = shape.name(), "section");
    let rep = section_report(shape, cfg)?;
    let mut params = shape_params(&shape);
    params["shape"] = json!(shape.name());
    params["mesh_cfg"] = cfg_params(cfg);
    emit(&rep, out, Payload::new("section", params))
}

fn polygon_report(input: &Path, cfg: MeshCfg) -> Result<MeshReport> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let poly: PolygonInput = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", input.display()))?;
    let mut edges = EdgeList::from_polyline(&PolygonInput::ring(&poly.points));
    for hole in &poly.holes {
        edges.push_polyline(&PolygonInput::ring(hole));
    }
    let mesh = sections::generate(&edges, cfg)
        .with_context(|| format!("meshing polygon from {}", input.display()))?;
    Ok(MeshReport::new("polygon", &mesh))
}

fn polygon(input: &Path, cfg: MeshCfg, out: Option<&Path>) -> Result<()> {
    tracing::info!(input = %input.display(), "polygon");
    let rep = polygon_report(input, cfg)?;
    let params = json!({
        "input": input.to_string_lossy(),
        "mesh_cfg": cfg_params(cfg),
    });
    emit(&rep, out, Payload::new("polygon", params))
}

/// Print the report, or write it plus its provenance sidecar.
fn emit(rep: &MeshReport, out: Option<&Path>, payload: Payload) -> Result<()> {
    tracing::info!(
        name = %rep.name,
        vertices = rep.num_vertices,
        area = rep.area,
        "meshed"
    );
    let body = serde_json::to_string_pretty(rep)?;
    let Some(out) = out else {
        println!("{body}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote report");
    Ok(())
}

fn report(cfg: MeshCfg) -> Result<()> {
    let obj = provenance::block(
        &Payload::new("report", json!({"mesh_cfg": cfg_params(cfg)})),
        &[],
    );
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
