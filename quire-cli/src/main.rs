//! Quire CLI: render JSON document trees to PNG.
//!
//! Usage:
//!   quire render page.json --width 640 --out page.png
//!   quire tree page.json --width 640

mod document;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use quire_common::warning::{clear_warnings, warn_once};
use quire_dom::NodeId;
use quire_render::{
    ApproximateSource, FontSource, FontdueSource, Layout, Painter, RenderOptions, RenderTree,
};

use document::parse_document;

/// Quire: recursive box layout and text flow renderer
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render a document 800px wide
    quire render page.json --out page.png

    # Render with a specific font and debug frames around every box
    quire render page.json --font DejaVuSans.ttf --debug-borders

    # Print the element outline with resolved sizes
    quire tree page.json --width 320
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the document element to a PNG file
    Render {
        /// JSON document description
        #[arg(value_name = "FILE")]
        document: PathBuf,

        /// Container width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// Font file to use instead of a system font
        #[arg(long, value_name = "FONT")]
        font: Option<PathBuf>,

        /// Output image path
        #[arg(short, long, value_name = "FILE", default_value = "out.png")]
        out: PathBuf,

        /// Draw a frame around every box
        #[arg(long)]
        debug_borders: bool,

        /// JSON file with render options
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,
    },

    /// Print the element outline with each box's resolved size
    Tree {
        /// JSON document description
        #[arg(value_name = "FILE")]
        document: PathBuf,

        /// Container width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// Font file to use instead of a system font
        #[arg(long, value_name = "FONT")]
        font: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            document,
            width,
            font,
            out,
            debug_borders,
            options,
        } => {
            let tree = load_tree(&document)?;
            let fonts = load_fonts(font.as_deref())?;
            let mut options = match options {
                Some(path) => {
                    let text = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read '{}'", path.display()))?;
                    RenderOptions::from_json(&text)
                        .with_context(|| format!("invalid render options in '{}'", path.display()))?
                }
                None => RenderOptions::default(),
            };
            options.debug_borders |= debug_borders;
            render_to_file(&tree, fonts.as_ref(), options, to_px(width)?, &out)
        }
        Command::Tree {
            document,
            width,
            font,
        } => {
            let tree = load_tree(&document)?;
            let fonts = load_fonts(font.as_deref())?;
            print_outline(&tree, fonts.as_ref(), to_px(width)?)
        }
    }
}

fn to_px(width: u32) -> Result<i32> {
    i32::try_from(width).with_context(|| format!("width {width} is too large"))
}

fn load_tree(path: &Path) -> Result<RenderTree> {
    clear_warnings();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    parse_document(&json).with_context(|| format!("failed to load '{}'", path.display()))
}

/// An explicit font must load; otherwise fall back from a system font to
/// approximate glyph boxes.
fn load_fonts(path: Option<&Path>) -> Result<Box<dyn FontSource>> {
    if let Some(path) = path {
        return Ok(Box::new(FontdueSource::load(path)?));
    }
    match FontdueSource::system() {
        Ok(source) => Ok(Box::new(source)),
        Err(err) => {
            warn_once("Fonts", &format!("{err}; drawing text as glyph boxes"));
            Ok(Box::new(ApproximateSource))
        }
    }
}

fn render_to_file(
    tree: &RenderTree,
    fonts: &dyn FontSource,
    options: RenderOptions,
    width: i32,
    out: &Path,
) -> Result<()> {
    let root = tree
        .dom()
        .document_element()
        .context("document has no root element")?;
    let image = Painter::with_options(tree, fonts, options).render(root, width)?;
    image
        .save_with_format(out, image::ImageFormat::Png)
        .with_context(|| format!("failed to save image to '{}'", out.display()))?;
    println!(
        "{} {}x{} to {}",
        "Rendered".green(),
        image.width(),
        image.height(),
        out.display()
    );
    Ok(())
}

/// Print every element in pre-order with its size inside its parent.
fn print_outline(tree: &RenderTree, fonts: &dyn FontSource, width: i32) -> Result<()> {
    let dom = tree.dom();
    let mut layout = Layout::new(tree, fonts);
    layout.override_headings(NodeId::ROOT);

    let mut widths: HashMap<NodeId, i32> = HashMap::new();
    let _root = widths.insert(NodeId::ROOT, width);
    for id in dom.elements(NodeId::ROOT) {
        let container = dom
            .parent(id)
            .and_then(|parent| widths.get(&parent).copied())
            .unwrap_or(width);
        let box_width = layout.width(id, container)?;
        let box_height = layout.height(id, container)?;
        let _previous = widths.insert(id, box_width);

        let depth = dom.ancestors(id).count().saturating_sub(1);
        let Some(data) = dom.as_element(id) else {
            continue;
        };
        let mut attrs: Vec<String> = data
            .attrs
            .iter()
            .map(|(k, v)| format!(" {k}=\"{v}\""))
            .collect();
        attrs.sort();
        println!(
            "{}{}{}{} {} {}",
            "  ".repeat(depth),
            format!("<{}", data.tag_name).cyan(),
            attrs.concat().dimmed(),
            ">".cyan(),
            format!("{box_width}x{}", box_height.px).bold(),
            format!("({}, font {}px)", layout.display_type(id)?, layout.font_size(id)?).dimmed(),
        );
    }
    Ok(())
}
