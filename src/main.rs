//! Texel CLI - Command-line tool for inspecting and writing KTX texture headers.
//!
//! This is the main entry point for the texel command-line application.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use memmap2::Mmap;
use rayon::prelude::*;
use serde::Serialize;

use texel::ktx::validate::Violation;
use texel::prelude::*;

/// Batches smaller than this are inspected without a progress bar.
const PROGRESS_THRESHOLD: usize = 64;
const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Texel - KTX texture header tool
#[derive(Parser)]
#[command(name = "texel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the headers of KTX files
    Info {
        /// Files or glob patterns
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Print one JSON document instead of text
        #[arg(long)]
        json: bool,

        /// Report strict-mode violations and fail if any are found
        #[arg(long, env = "TEXEL_STRICT")]
        strict: bool,

        /// Byte-swap headers written with the opposite byte order
        #[arg(long, env = "TEXEL_SWAP_FOREIGN")]
        swap_foreign: bool,

        /// List key/value metadata
        #[arg(short, long)]
        metadata: bool,
    },

    /// Write a 64-byte KTX header built from format and geometry flags
    WriteHeader {
        /// glInternalFormat, by name (GL_RGBA8, rgba8) or value (0x8058)
        #[arg(short, long)]
        internal_format: GlInternalFormat,

        /// glFormat; leave unset for compressed formats
        #[arg(short, long, default_value = "0")]
        format: GlFormat,

        /// glType; leave unset for compressed formats
        #[arg(short = 't', long = "type", default_value = "0")]
        component_type: GlType,

        /// glBaseInternalFormat, defaults to --format (or GL_RGBA when unset)
        #[arg(short, long)]
        base_format: Option<GlFormat>,

        /// Width of mip level 0
        #[arg(long)]
        width: u32,

        /// Height of mip level 0 (0 for 1D)
        #[arg(long, default_value_t = 0)]
        height: u32,

        /// Depth of mip level 0 (0 for non-3D)
        #[arg(long, default_value_t = 0)]
        depth: u32,

        /// Texture topology
        #[arg(long, value_enum, default_value_t = TopologyArg::D2)]
        topology: TopologyArg,

        /// Number of mip levels (0 to generate at load time)
        #[arg(long, default_value_t = 1)]
        mips: u32,

        /// Number of array elements (0 for non-array textures)
        #[arg(long, default_value_t = 0)]
        arrays: u32,

        /// Output file
        #[arg(short, long, env = "TEXEL_OUTPUT")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TopologyArg {
    #[value(name = "1d")]
    D1,
    #[value(name = "2d")]
    D2,
    #[value(name = "3d")]
    D3,
    Cube,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::D1 => Topology::OneDimensional,
            TopologyArg::D2 => Topology::TwoDimensional,
            TopologyArg::D3 => Topology::ThreeDimensional,
            TopologyArg::Cube => Topology::CubeMap,
        }
    }
}

/// Per-run settings for `info`.
struct InfoOptions {
    parse: ParseOptions,
    strict: bool,
    metadata: bool,
}

#[derive(Serialize)]
struct MetadataEntry {
    key: String,
    value: String,
}

/// Everything `info` reports about one file.
#[derive(Serialize, Default)]
struct FileReport {
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptor: Option<TextureDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload_offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_size: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    metadata: Vec<MetadataEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FileReport {
    fn failed(&self) -> bool {
        self.error.is_some() || !self.violations.is_empty()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info {
            patterns,
            json,
            strict,
            swap_foreign,
            metadata,
        } => {
            let options = InfoOptions {
                parse: ParseOptions::new().swap_foreign_byte_order(swap_foreign),
                strict,
                metadata,
            };
            cmd_info(&patterns, &options, json)?;
        }
        Commands::WriteHeader {
            internal_format,
            format,
            component_type,
            base_format,
            width,
            height,
            depth,
            topology,
            mips,
            arrays,
            output,
        } => {
            let base = base_format.unwrap_or(if format == GlFormat::NONE {
                GlFormat::RGBA
            } else {
                format
            });
            let formats = FormatSet::new(internal_format, format, component_type, base);
            let extent = Extent::new(width, height, depth);
            cmd_write_header(formats, extent, topology.into(), mips, arrays, &output)?;
        }
    }

    Ok(())
}

fn cmd_info(patterns: &[String], options: &InfoOptions, json: bool) -> Result<()> {
    let paths = expand_patterns(patterns)?;
    if paths.is_empty() {
        anyhow::bail!("No files matched");
    }

    let pb = if paths.len() >= PROGRESS_THRESHOLD && !json {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let reports: Vec<FileReport> = paths
        .par_iter()
        .map(|path| {
            let report = inspect_file(path, options);
            pb.inc(1);
            report
        })
        .collect();
    pb.finish_and_clear();

    log::info!("Inspected {} files in {:?}", reports.len(), start.elapsed());

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    let failures = reports.iter().filter(|r| r.failed()).count();
    if failures > 0 {
        anyhow::bail!("{} of {} files failed", failures, reports.len());
    }

    Ok(())
}

/// Expand glob patterns, keeping plain paths that match nothing so they
/// are reported as unreadable rather than silently skipped.
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let mut matched = false;
        for entry in glob::glob(pattern).with_context(|| format!("Invalid pattern: {}", pattern))? {
            match entry {
                Ok(path) if path.is_file() => {
                    paths.push(path);
                    matched = true;
                }
                Ok(_) => {}
                Err(e) => log::warn!("Skipping {}: {}", e.path().display(), e.error()),
            }
        }

        if !matched && !pattern.contains(['*', '?', '[']) {
            paths.push(PathBuf::from(pattern));
        }
    }

    Ok(paths)
}

fn inspect_file(path: &Path, options: &InfoOptions) -> FileReport {
    let mut report = FileReport {
        path: path.to_path_buf(),
        ..FileReport::default()
    };

    if let Err(e) = inspect_into(path, options, &mut report) {
        report.error = Some(format!("{:#}", e));
    }

    report
}

fn inspect_into(path: &Path, options: &InfoOptions, report: &mut FileReport) -> Result<()> {
    let file = File::open(path).context("Failed to open file")?;
    let len = file.metadata().context("Failed to stat file")?.len();

    // Zero-length files cannot be mapped
    let mmap;
    let data: &[u8] = if len == 0 {
        &[]
    } else {
        mmap = unsafe { Mmap::map(&file).context("Failed to map file")? };
        &mmap[..]
    };

    let parsed = parse_with(data, &options.parse).context("Failed to parse header")?;

    report.descriptor = Some(parsed.descriptor);
    report.payload_offset = Some(parsed.payload_offset);
    report.image_size = parsed.image_size(data).ok();

    if options.metadata {
        for entry in parsed.metadata(data)? {
            let entry = entry?;
            report.metadata.push(MetadataEntry {
                key: entry.key.to_string(),
                value: entry
                    .value_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("<{} bytes>", entry.value.len())),
            });
        }
    }

    if options.strict {
        report.violations = parsed
            .violations(data)
            .iter()
            .map(Violation::to_string)
            .collect();
    }

    Ok(())
}

fn print_report(report: &FileReport) {
    println!("{}", report.path.display());

    if let Some(error) = &report.error {
        println!("  error: {}", error);
        return;
    }

    if let Some(desc) = &report.descriptor {
        println!(
            "  format:   {} / {} / {} (base {})",
            desc.internal_format, desc.format, desc.component_type, desc.base_internal_format
        );
        println!("  vulkan:   {}", desc.vk_format);
        println!(
            "  size:     {}x{}x{} {}, {} mips, {} layers",
            desc.width,
            desc.height,
            desc.depth,
            desc.topology,
            desc.mip_level_count,
            desc.array_layer_count
        );
        println!(
            "  encoding: {} bits per {}, block {}x{}{}{}",
            desc.bits_per_texel_or_block,
            if desc.compressed { "block" } else { "texel" },
            desc.block_width,
            desc.block_height,
            if desc.compressed { ", compressed" } else { "" },
            if desc.srgb { ", sRGB" } else { "" },
        );
        println!("  pitch:    {} bytes/row, {} bytes/slice", desc.row_pitch, desc.slice_bytes);
    }

    if let Some(offset) = report.payload_offset {
        match report.image_size {
            Some(size) => println!("  payload:  offset {}, imageSize {}", offset, size),
            None => println!("  payload:  offset {} (past end of file)", offset),
        }
    }

    for entry in &report.metadata {
        println!("  {} = {}", entry.key, entry.value);
    }

    for violation in &report.violations {
        println!("  strict:   {}", violation);
    }
}

fn cmd_write_header(
    formats: FormatSet,
    extent: Extent,
    topology: Topology,
    mips: u32,
    arrays: u32,
    output: &Path,
) -> Result<()> {
    let internal = formats.internal_format;
    if internal.is_known() && internal.is_compressed() != formats.is_structurally_compressed() {
        log::warn!(
            "{} is {}compressed but glFormat/glType are {}",
            internal,
            if internal.is_compressed() { "" } else { "not " },
            if formats.is_structurally_compressed() { "unset" } else { "set" },
        );
    }

    let descriptor = TextureDescriptor::new(formats, extent, topology, mips, arrays);
    let header = KtxHeader::encode(formats, extent, topology, mips, arrays);

    fs::write(output, header.to_bytes()).context("Failed to write output file")?;

    println!(
        "Wrote {} {} header to {} (level 0: {} bytes/slice, {})",
        descriptor.topology,
        internal,
        output.display(),
        descriptor.slice_bytes,
        descriptor.vk_format
    );

    Ok(())
}
